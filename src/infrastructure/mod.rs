//! Storage backends for the menu catalog.

pub mod in_memory;
pub mod json_file;
