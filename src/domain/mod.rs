//! Pure restaurant domain: menu items, orders, payments and the order queue.
//!
//! Nothing in here performs I/O; storage goes through the `ports` traits.

pub mod menu;
pub mod money;
pub mod order;
pub mod payment;
pub mod ports;
pub mod queue;
