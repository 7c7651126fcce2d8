use serde::{Deserialize, Serialize};

use super::errors::ProductError;

/// Store-assigned product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(i32);

impl ProductId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Parses an identifier received as text.
    ///
    /// Surrounding whitespace is ignored. Anything that is not an integer
    /// (empty input, letters, decimals, out of range) is rejected with
    /// `ProductError::InvalidId`.
    pub fn parse(raw: &str) -> Result<Self, ProductError> {
        raw.trim()
            .parse::<i32>()
            .map(Self)
            .map_err(|_| ProductError::InvalidId)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ProductId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}
