//! Product identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog product identifier, carried as the raw string the catalog serves.
///
/// Catalogs use numeric-looking ids ("1", "42") but the value is compared as
/// text, so "07" and "7" are different products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id with surrounding whitespace removed, as typed on a command line.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id: ProductId = "7".into();
        assert_eq!(id.as_str(), "7");
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn test_id_compares_as_text() {
        assert_ne!(ProductId::new("07"), ProductId::new("7"));
    }

    #[test]
    fn test_parse_trims_and_rejects_blank() {
        assert_eq!(ProductId::parse("  12 "), Some(ProductId::new("12")));
        assert_eq!(ProductId::parse("   "), None);
    }

    #[test]
    fn test_id_is_transparent_in_json() {
        let id: ProductId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(id, ProductId::new("42"));
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");
    }
}
