pub mod condition;
pub mod convert;
pub mod error;
pub mod find;
pub mod intersect;
pub mod map;
pub mod math;
pub mod slice;
pub mod strings;
pub mod time;

pub use error::{Error, Result};

use serde::{Deserialize, Serialize};

/// A single key-value pair, used when converting maps to and from sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Entry<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}
