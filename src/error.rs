use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateError {
    /// No stations to average over
    #[error("cannot aggregate an empty set of stations")]
    Empty,
}
