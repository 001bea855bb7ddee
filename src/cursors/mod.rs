
mod cursor;

pub use self::cursor::*;
pub(crate) use self::cursor::new_cursor;
