//! Type-safe wrappers and enums for match selection and output options.

pub mod filters;
pub mod ids;
pub mod style;
