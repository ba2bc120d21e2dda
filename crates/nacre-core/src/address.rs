// crates/nacre-core/src/address.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// A ledger account identifier in its canonical base58 string form.
///
/// Addresses are opaque to this workspace: equality is exact byte equality
/// of the canonical string, and no checksum or encoding validation happens
/// here. The ledger layer that decodes wire data owns validation; by the
/// time an address reaches these crates it is just an identity to compare.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Create an address from its canonical string form.
    pub fn new(addr: impl Into<String>) -> Self {
        Self(addr.into())
    }

    /// The canonical string form of this address.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Address {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_equality_is_exact() {
        assert_eq!(Address::new("abc"), Address::new("abc"));
        assert_ne!(Address::new("abc"), Address::new("ABC"));
        assert_ne!(Address::new("abc"), Address::new("abc "));
    }

    #[test]
    fn test_display_round_trip() {
        let addr = Address::new("2MnbJ1amVWrNmmonTXH9xwwL6R9Mmg8AGub");
        assert_eq!(addr.to_string(), "2MnbJ1amVWrNmmonTXH9xwwL6R9Mmg8AGub");
        assert_eq!(addr.as_str(), "2MnbJ1amVWrNmmonTXH9xwwL6R9Mmg8AGub");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let addr = Address::new("9qZPcewnkLEfgKQ27ziYGuJkP4p3WDuQqV");
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"9qZPcewnkLEfgKQ27ziYGuJkP4p3WDuQqV\"");

        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }

    #[test]
    fn test_usable_as_hash_set_member() {
        let mut set = HashSet::new();
        set.insert(Address::new("a"));
        set.insert(Address::new("b"));
        set.insert(Address::new("a"));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Address::new("b")));
    }
}
