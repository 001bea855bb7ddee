
use crate::{ForwardList, nodes::SENTINEL,};
use serde::{
    de::{SeqAccess, Visitor,},
    ser::SerializeSeq,
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::{fmt, marker::PhantomData,};

impl<T: Serialize,> Serialize for ForwardList<T,> {
    fn serialize<S: Serializer,>(&self, serializer: S,) -> Result<S::Ok, S::Error,> {
        let mut seq = serializer.serialize_seq(Some(self.len()),)?;

        for value in self { seq.serialize_element(value,)? }
        seq.end()
    }
}

struct ForwardListVisitor<T,> {
    marker: PhantomData<fn() -> T>,
}

impl<'de, T: Deserialize<'de>,> Visitor<'de> for ForwardListVisitor<T,> {
    type Value = ForwardList<T,>;

    fn expecting(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
        fmt.write_str("a sequence",)
    }
    fn visit_seq<A: SeqAccess<'de>,>(self, mut seq: A,) -> Result<Self::Value, A::Error,> {
        let mut list = ForwardList::new();
        let mut tail = SENTINEL;

        //Append in order without walking the list.
        while let Some(value) = seq.next_element()? {
            tail = list.link_after(tail, value,);
        }

        Ok(list)
    }
}

impl<'de, T: Deserialize<'de>,> Deserialize<'de> for ForwardList<T,> {
    fn deserialize<D: Deserializer<'de>,>(deserializer: D,) -> Result<Self, D::Error,> {
        deserializer.deserialize_seq(ForwardListVisitor { marker: PhantomData, },)
    }
}
