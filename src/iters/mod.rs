
mod iter;
mod iter_mut;
mod into_iter;

pub use self::{
    iter::*,
    iter_mut::*,
    into_iter::*,
};
