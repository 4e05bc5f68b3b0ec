// ── Identifier type ──
//
// The query API types ids as an opaque scalar: strings, integers of any
// width, floats, and even booleans have all come back over the wire.
// ResourceId keeps the exact scalar so callers match on it instead of
// casting.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// Identifier of a site, deploy, or user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    /// Any JSON number, kept at full precision (`i64`, `u64`, or `f64`).
    Numeric(Number),
    Boolean(bool),
    Text(String),
}

impl ResourceId {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Numeric(n) => Some(n),
            _ => None,
        }
    }

    /// The id as an `i64`, when it is an integer in range.
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(Number::as_i64)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for ResourceId {
    fn from(n: i64) -> Self {
        Self::Numeric(n.into())
    }
}

impl From<Number> for ResourceId {
    fn from(n: Number) -> Self {
        Self::Numeric(n)
    }
}

impl From<bool> for ResourceId {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<String> for ResourceId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for ResourceId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_wire_value() {
        assert_eq!(ResourceId::from(42).to_string(), "42");
        assert_eq!(ResourceId::from(Number::from(u64::MAX)).to_string(), "18446744073709551615");
        assert_eq!(ResourceId::from(true).to_string(), "true");
        assert_eq!(ResourceId::from("QmSite").to_string(), "QmSite");
    }

    #[test]
    fn numeric_string_stays_text() {
        let id = ResourceId::from("42");
        assert_eq!(id.as_text(), Some("42"));
        assert_eq!(id.as_i64(), None);
    }

    #[test]
    fn wide_integers_are_not_narrowed() {
        let id = ResourceId::from(Number::from(u64::MAX));
        assert_eq!(id.as_i64(), None);
        assert_eq!(id.as_number().and_then(Number::as_u64), Some(u64::MAX));
    }

    #[test]
    fn serializes_untagged() {
        assert_eq!(serde_json::to_string(&ResourceId::from(7)).unwrap(), "7");
        assert_eq!(
            serde_json::to_string(&ResourceId::from("abc")).unwrap(),
            "\"abc\""
        );
        let back: ResourceId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(back, ResourceId::Text("abc".into()));
        let back: ResourceId = serde_json::from_str("7").unwrap();
        assert_eq!(back, ResourceId::from(7));
        let back: ResourceId = serde_json::from_str("4242.5").unwrap();
        assert_eq!(back.to_string(), "4242.5");
        let back: ResourceId = serde_json::from_str("false").unwrap();
        assert_eq!(back, ResourceId::Boolean(false));
    }
}
