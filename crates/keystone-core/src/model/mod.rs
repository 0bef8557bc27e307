pub mod enumeration;
pub mod error;
pub mod outcome;
pub mod registry;
