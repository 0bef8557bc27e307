//! Value-model primitives: structured errors, success/failure outcomes and
//! strongly-typed enumerations.

pub mod error;
mod macros;
pub mod model;
pub mod util;

pub use model::enumeration::{CaseSensitivity, Enumeration, EnumerationBase};
pub use model::error::Error;
pub use model::outcome::Outcome;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
