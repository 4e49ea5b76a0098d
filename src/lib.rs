//! Restaurant ordering ledger: a menu catalog with category-specific labels,
//! orders priced under a beverage/main-course combo discount, payment
//! settlement with change or shortfall, and a FIFO queue of pending orders.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
