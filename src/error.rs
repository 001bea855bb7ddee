
use thiserror::Error;

/// The ways a cursor operation on a [`ForwardList`](struct.ForwardList.html) can be misused.
///
/// The plain operations panic with this error's message; the `try_` forms return it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash,)]
pub enum CursorError {
    /// A value was popped from an empty list.
    #[error("the list is empty")]
    Empty,
    /// The null cursor was dereferenced, advanced or used as an anchor.
    #[error("the cursor is past the end of the list")]
    End,
    /// The before-begin cursor was dereferenced.
    #[error("the before-begin cursor has no value")]
    BeforeBegin,
    /// No node follows the anchor of an erase.
    #[error("no node follows the cursor")]
    NothingAfter,
    /// The cursor references a destroyed node or a node of another list.
    #[error("the cursor references a node which is not in the list")]
    Dangling,
}
