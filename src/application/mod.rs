//! Application layer orchestrating the restaurant workflow.
//!
//! `Restaurant` owns the catalog and the queue of pending orders; the binary
//! drives it from catalog persistence through to payment.

pub mod catalog;
pub mod restaurant;
