//! Public key range records
//!
//! A key range pairs a public key with a validity window. The window is
//! never populated from input and stays at `0..0`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of key range slots written to each config
pub const SLOT_COUNT: usize = 2;

/// A public key and the milestone window it is trusted for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKeyRange {
    /// Public key, taken verbatim from the command line
    pub key: String,

    /// Range start (always 0)
    pub start: u64,

    /// Range end (always 0)
    pub end: u64,
}

impl PublicKeyRange {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            start: 0,
            end: 0,
        }
    }
}

/// Two positional key range slots; an unset slot is written as `null`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyRangeSlots {
    slots: [Option<PublicKeyRange>; SLOT_COUNT],
}

impl KeyRangeSlots {
    /// Fill slots from key arguments in order.
    ///
    /// Keys beyond [`SLOT_COUNT`] are ignored.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut slots = Self::default();
        for (index, key) in keys.into_iter().enumerate() {
            if index >= SLOT_COUNT {
                tracing::debug!(index, "ignoring extra key argument");
                continue;
            }
            slots.slots[index] = Some(PublicKeyRange::new(key));
        }
        slots
    }

    /// Slot at `index`, `None` when unset or out of range
    pub fn get(&self, index: usize) -> Option<&PublicKeyRange> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Number of populated slots
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// JSON array of exactly [`SLOT_COUNT`] entries
    pub fn to_value(&self) -> Value {
        Value::Array(
            self.slots
                .iter()
                .map(|slot| match slot {
                    Some(range) => serde_json::json!({
                        "key": range.key,
                        "start": range.start,
                        "end": range.end,
                    }),
                    None => Value::Null,
                })
                .collect(),
        )
    }
}
