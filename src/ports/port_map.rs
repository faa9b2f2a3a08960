// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;
use std::fmt;

use crate::errors::PortError;
use crate::ports::Value;

/// Snapshot of a port map: every declared key with its current (possibly empty) value.
pub type PortValues = BTreeMap<String, Option<Value>>;

/// A fixed set of keyed slots, each holding at most one [`Value`].
///
/// The key set is decided when the map is built and never grows. Writing to a key
/// that was not declared fails with [`PortError::UndeclaredKey`].
///
/// ```
/// use the_conveyor::ports::{PortMap, Value};
///
/// let mut ports = PortMap::with_keys(["text"]);
/// assert!(ports.get("text").is_none());
///
/// ports.set("text", Value::from("hello")).unwrap();
/// assert_eq!(ports.text("text"), Some("hello"));
///
/// assert!(ports.set("unknown", Value::Integer(1)).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortMap {
    slots: BTreeMap<String, Option<Value>>,
}

impl PortMap {
    /// Declare a port map whose keys all start out empty.
    pub fn with_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            slots: keys.into_iter().map(|key| (key.into(), None)).collect(),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    /// Declared keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Current value of a slot. Empty and undeclared slots both read as `None`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.slots.get(key).and_then(Option::as_ref)
    }

    /// Current value of a slot if it holds text.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_text)
    }

    /// Current value of a slot if it holds an integer.
    pub fn integer(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_integer)
    }

    pub fn set(&mut self, key: &str, value: Value) -> Result<(), PortError> {
        self.write(key, Some(value))
    }

    /// Return a slot to the empty sentinel.
    pub fn clear(&mut self, key: &str) -> Result<(), PortError> {
        self.write(key, None)
    }

    /// Empty every slot while keeping the declared keys.
    pub fn reset(&mut self) {
        for slot in self.slots.values_mut() {
            *slot = None;
        }
    }

    /// Number of slots currently holding a value.
    pub fn filled(&self) -> usize {
        self.slots.values().filter(|slot| slot.is_some()).count()
    }

    pub fn snapshot(&self) -> PortValues {
        self.slots.clone()
    }

    fn write(&mut self, key: &str, value: Option<Value>) -> Result<(), PortError> {
        match self.slots.get_mut(key) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(PortError::UndeclaredKey {
                key: key.to_string(),
                declared: self.slots.keys().cloned().collect(),
            }),
        }
    }
}

impl fmt::Display for PortMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, slot)) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match slot {
                Some(value) => write!(f, "{}: {}", key, value)?,
                None => write!(f, "{}: <empty>", key)?,
            }
        }
        write!(f, "}}")
    }
}
