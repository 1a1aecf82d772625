use thiserror::Error;

/// Failures surfaced by the fallible helpers.
///
/// Two kinds exist: index/bounds violations from the collection accessors
/// (`EmptyCollection`, `OutOfBounds`) and unrepresentable conversions from
/// the coercion helpers (`Cast`). Total functions never return these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("cannot extract the last element of an empty collection")]
    EmptyCollection,

    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds { index: isize, len: usize },

    #[error("unable to convert {value} to {target}")]
    Cast { value: String, target: &'static str },
}

impl Error {
    pub(crate) fn cast(value: &serde_json::Value, target: &'static str) -> Self {
        Error::Cast {
            value: value.to_string(),
            target,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
