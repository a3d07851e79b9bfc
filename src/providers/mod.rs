//! Additional-field providers resolved by the platform's details registry.

pub mod field;
pub mod gpsr_supplier;

pub use field::{AdditionalFieldProvider, FieldContext};
