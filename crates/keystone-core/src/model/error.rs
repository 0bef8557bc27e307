//! Immutable structured error value.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::util::text::{require_non_negative, require_not_blank};

/// A structured error carried by a failed [`Outcome`](crate::Outcome).
///
/// Built once through [`Error::new`] or [`Error::with_extensions`] and never
/// mutated afterwards. There is deliberately no `Default` impl: a title and a
/// message are always required.
///
/// Equality compares title, code, message and every extension entry, while
/// the hash only covers title, code and message. Equal errors therefore always
/// hash equally, and errors that differ only in their extensions share a bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ErrorRepr")]
pub struct Error {
    title: String,
    code: u32,
    message: String,
    extensions: BTreeMap<String, String>,
}

impl Error {
    /// ## Summary
    /// Creates an error with no extensions.
    ///
    /// ## Errors
    /// Returns `InvalidArgument` if `title` or `message` is empty or
    /// whitespace, or if `code` is negative.
    pub fn new(
        title: impl Into<String>,
        code: i32,
        message: impl Into<String>,
    ) -> CoreResult<Self> {
        Self::with_extensions(title, code, message, std::iter::empty::<(String, String)>())
    }

    /// ## Summary
    /// Creates an error carrying additional key/value context.
    ///
    /// The entries are copied into storage owned by the error, so later changes
    /// to the caller's map are not observed. A repeated key keeps its last value.
    ///
    /// ## Errors
    /// Returns `InvalidArgument` if `title` or `message` is empty or
    /// whitespace, or if `code` is negative.
    pub fn with_extensions<I, K, V>(
        title: impl Into<String>,
        code: i32,
        message: impl Into<String>,
        extensions: I,
    ) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let title = title.into();
        let message = message.into();
        require_not_blank("title", &title)?;
        require_not_blank("message", &message)?;
        let code = require_non_negative("code", code)?;

        Ok(Self {
            title,
            code,
            message,
            extensions: extensions
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        })
    }

    /// Short, human-readable summary.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Numeric identifier of the error.
    #[must_use]
    pub const fn code(&self) -> u32 {
        self.code
    }

    /// Detailed description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Read-only view of the extension entries, ordered by key.
    #[must_use]
    pub const fn extensions(&self) -> &BTreeMap<String, String> {
        &self.extensions
    }

    /// Looks up a single extension value.
    #[must_use]
    pub fn extension(&self, key: &str) -> Option<&str> {
        self.extensions.get(key).map(String::as_str)
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.code == other.code
            && self.message == other.message
            && self.extensions == other.extensions
    }
}

impl Eq for Error {}

impl Hash for Error {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.code.hash(state);
        self.message.hash(state);
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.title, self.code, self.message)
    }
}

impl std::error::Error for Error {}

/// Unvalidated wire shape; every field is routed back through the constructor.
#[derive(Deserialize)]
struct ErrorRepr {
    #[serde(default)]
    title: String,
    #[serde(default = "missing_code")]
    code: i64,
    #[serde(default)]
    message: String,
    #[serde(default)]
    extensions: BTreeMap<String, String>,
}

const fn missing_code() -> i64 {
    -1
}

impl TryFrom<ErrorRepr> for Error {
    type Error = CoreError;

    fn try_from(repr: ErrorRepr) -> CoreResult<Self> {
        let code = i32::try_from(repr.code).map_err(|_err| {
            CoreError::invalid_argument("code", &format!("is out of range, got {}", repr.code))
        })?;
        Self::with_extensions(repr.title, code, repr.message, repr.extensions)
    }
}
