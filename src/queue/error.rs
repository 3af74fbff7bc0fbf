use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("cannot enqueue an absent item")]
    InvalidArgument,
    #[error("queue is empty")]
    Empty,
    #[error("iteration is already exhausted")]
    EndOfSequence,
}
