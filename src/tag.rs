//! The typed tag store.
//!
//! A tag is a named, dynamically-typed value. Its type is fixed at first
//! write: once a name holds a `Bool`, writing an `Int` to it is a
//! `TypeMismatch`, not a silent overwrite.

use std::collections::HashMap;
use std::fmt;

use crate::error::Error;

/// The three elementary types a tag can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagType {
    Bool,
    Int,
    Real,
}

impl fmt::Display for TagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagType::Bool => write!(f, "bool"),
            TagType::Int => write!(f, "int"),
            TagType::Real => write!(f, "real"),
        }
    }
}

/// A tag's runtime value.
#[derive(Debug, Clone, Copy)]
pub enum TagValue {
    Bool(bool),
    Int(i64),
    Real(f64),
}

impl TagValue {
    pub fn tag_type(&self) -> TagType {
        match self {
            TagValue::Bool(_) => TagType::Bool,
            TagValue::Int(_) => TagType::Int,
            TagValue::Real(_) => TagType::Real,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TagValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            TagValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_real(&self) -> Option<f64> {
        match self {
            TagValue::Real(r) => Some(*r),
            _ => None,
        }
    }
}

/// Round to two decimal places, the convention this engine uses for
/// `Real` equality (`EQU`/`NEQ`).
pub fn round_to_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl PartialEq for TagValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TagValue::Bool(a), TagValue::Bool(b)) => a == b,
            (TagValue::Int(a), TagValue::Int(b)) => a == b,
            (TagValue::Real(a), TagValue::Real(b)) => {
                round_to_two_decimals(*a) == round_to_two_decimals(*b)
            }
            _ => false,
        }
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Bool(b) => write!(f, "{}", b),
            TagValue::Int(i) => write!(f, "{}", i),
            TagValue::Real(r) => write!(f, "{}", r),
        }
    }
}

/// A flat, typed namespace of tags. Insertion order is irrelevant; keys
/// are unique.
#[derive(Debug, Default, Clone)]
pub struct TagStore {
    tags: HashMap<String, TagValue>,
}

impl TagStore {
    pub fn new() -> Self {
        Self { tags: HashMap::new() }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tags.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterate all tags, for persistence.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TagValue)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get_bool(&self, name: &str) -> Result<bool, Error> {
        match self.lookup(name)? {
            TagValue::Bool(b) => Ok(*b),
            other => Err(Error::TypeMismatch {
                name: name.to_string(),
                expected: TagType::Bool,
                found: other.tag_type(),
            }),
        }
    }

    pub fn get_int(&self, name: &str) -> Result<i64, Error> {
        match self.lookup(name)? {
            TagValue::Int(i) => Ok(*i),
            other => Err(Error::TypeMismatch {
                name: name.to_string(),
                expected: TagType::Int,
                found: other.tag_type(),
            }),
        }
    }

    pub fn get_real(&self, name: &str) -> Result<f64, Error> {
        match self.lookup(name)? {
            TagValue::Real(r) => Ok(*r),
            other => Err(Error::TypeMismatch {
                name: name.to_string(),
                expected: TagType::Real,
                found: other.tag_type(),
            }),
        }
    }

    /// Get a tag without committing to an expected type, for instructions
    /// (`ADD`, `LSS`, ...) that accept either `Int` or `Real`.
    pub fn get_numeric(&self, name: &str) -> Result<TagValue, Error> {
        let value = self.lookup(name)?;
        match value {
            TagValue::Int(_) | TagValue::Real(_) => Ok(*value),
            TagValue::Bool(_) => Err(Error::TypeMismatch {
                name: name.to_string(),
                expected: TagType::Int,
                found: TagType::Bool,
            }),
        }
    }

    fn lookup(&self, name: &str) -> Result<&TagValue, Error> {
        self.tags
            .get(name)
            .ok_or_else(|| Error::NotFound { name: name.to_string() })
    }

    /// Create a tag if absent (type inferred from `value`); otherwise
    /// overwrite it, preserving the stored type.
    pub fn set(&mut self, name: &str, value: TagValue) -> Result<(), Error> {
        match self.tags.get(name) {
            None => {
                self.tags.insert(name.to_string(), value);
                Ok(())
            }
            Some(existing) => {
                if existing.tag_type() != value.tag_type() {
                    return Err(Error::TypeMismatch {
                        name: name.to_string(),
                        expected: existing.tag_type(),
                        found: value.tag_type(),
                    });
                }
                self.tags.insert(name.to_string(), value);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_round_trips() {
        let mut store = TagStore::new();
        store.set("A", TagValue::Bool(true)).unwrap();
        assert_eq!(store.get_bool("A").unwrap(), true);
    }

    #[test]
    fn set_infers_type_on_first_write() {
        let mut store = TagStore::new();
        store.set("X", TagValue::Int(42)).unwrap();
        assert_eq!(store.get_int("X").unwrap(), 42);
    }

    #[test]
    fn set_rejects_type_change() {
        let mut store = TagStore::new();
        store.set("A", TagValue::Bool(true)).unwrap();
        let err = store.set("A", TagValue::Int(1)).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[test]
    fn get_missing_is_not_found() {
        let store = TagStore::new();
        let err = store.get_bool("Nope").unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn get_wrong_type_is_type_mismatch() {
        let mut store = TagStore::new();
        store.set("A", TagValue::Bool(true)).unwrap();
        let err = store.get_int("A").unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[test]
    fn real_equality_rounds_to_two_decimals() {
        let a = TagValue::Real(1.001);
        let b = TagValue::Real(1.004);
        assert_eq!(a, b);
        let c = TagValue::Real(1.01);
        assert_ne!(a, c);
    }

    #[test]
    fn set_overwrite_preserves_type() {
        let mut store = TagStore::new();
        store.set("A", TagValue::Int(1)).unwrap();
        store.set("A", TagValue::Int(2)).unwrap();
        assert_eq!(store.get_int("A").unwrap(), 2);
    }
}
