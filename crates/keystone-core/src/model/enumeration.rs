//! Strongly-typed enumerations.
//!
//! ## Summary
//! A concrete enumeration is a newtype over [`EnumerationBase`] whose instances
//! are declared as associated constants. The [`Enumeration`] trait lists those
//! constants once through [`Enumeration::declared`], and the process-wide
//! registry caches that list on first use so lookups by id or by value never
//! rebuild it.
//!
//! Use the [`enumeration!`](crate::enumeration) macro to declare a type; it
//! wires up the trait, ordering, equality, hashing, parsing and serde.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::CoreResult;
use crate::model::registry;
use crate::util::text::{is_blank, require_non_negative, require_not_blank};

/// How [`Enumeration::from_value_with`] compares labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseSensitivity {
    Sensitive,
    #[default]
    Insensitive,
}

/// Identifier and label shared by every enumeration instance.
///
/// Equality, ordering and hashing look at `id` only.
#[derive(Debug, Clone)]
pub struct EnumerationBase {
    id: u32,
    value: Cow<'static, str>,
}

impl EnumerationBase {
    /// Declares an instance in a `const` item.
    ///
    /// # Panics
    /// Panics when `value` is empty or whitespace. Inside a `const` this is
    /// reported at compile time.
    #[must_use]
    pub const fn declare(id: u32, value: &'static str) -> Self {
        assert!(
            !is_blank(value),
            "enumeration value cannot be empty or whitespace"
        );
        Self {
            id,
            value: Cow::Borrowed(value),
        }
    }

    /// ## Summary
    /// Creates an instance from run-time data.
    ///
    /// ## Errors
    /// Returns `InvalidArgument` when `id` is negative or `value` is empty or
    /// whitespace.
    pub fn new(id: i32, value: impl Into<Cow<'static, str>>) -> CoreResult<Self> {
        let id = require_non_negative("id", id)?;
        let value = value.into();
        require_not_blank("value", &value)?;
        Ok(Self { id, value })
    }

    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Orders against a possibly absent instance; anything sorts after `None`.
    #[must_use]
    pub fn compare_to(&self, other: Option<&Self>) -> Ordering {
        other.map_or(Ordering::Greater, |other| self.cmp(other))
    }
}

impl PartialEq for EnumerationBase {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for EnumerationBase {}

impl PartialOrd for EnumerationBase {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EnumerationBase {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for EnumerationBase {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for EnumerationBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// A closed set of named, identified instances.
///
/// Implementors list every instance in [`declared`](Self::declared), normally
/// in declaration order. Ids are expected to be unique within a type; that is
/// not checked.
pub trait Enumeration: Clone + Send + Sync + 'static {
    /// The explicit registration list read once by the registry.
    fn declared() -> Vec<Self>;

    fn base(&self) -> &EnumerationBase;

    fn id(&self) -> u32 {
        self.base().id()
    }

    fn value(&self) -> &str {
        self.base().value()
    }

    /// Every declared instance, cached after the first call.
    #[must_use]
    fn all() -> Arc<[Self]> {
        registry::get_all::<Self>()
    }

    /// ## Summary
    /// Finds the instance with the given id.
    ///
    /// ## Errors
    /// Returns `InvalidArgument` for a negative id and `NotFound` when no
    /// instance has it.
    fn from_id(id: i32) -> CoreResult<Self> {
        registry::parse_id::<Self>(id)
    }

    /// ## Summary
    /// Finds the first instance whose value matches, ignoring case.
    ///
    /// ## Errors
    /// Returns `InvalidArgument` for a blank value and `NotFound` when nothing
    /// matches.
    fn from_value(value: &str) -> CoreResult<Self> {
        registry::parse_value::<Self>(value, CaseSensitivity::default())
    }

    /// ## Summary
    /// Finds the first instance whose value matches under `sensitivity`.
    ///
    /// ## Errors
    /// Returns `InvalidArgument` for a blank value and `NotFound` when nothing
    /// matches.
    fn from_value_with(value: &str, sensitivity: CaseSensitivity) -> CoreResult<Self> {
        registry::parse_value::<Self>(value, sensitivity)
    }

    /// Orders by id; an absent `other` compares as [`Ordering::Greater`].
    fn compare_to(&self, other: Option<&Self>) -> Ordering {
        self.base().compare_to(other.map(Self::base))
    }
}
