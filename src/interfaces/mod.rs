//! Wire formats: JSON menu records and CSV order lines.

pub mod csv;
pub mod json;
