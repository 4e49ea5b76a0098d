use crate::domain::menu::MenuItem;
use crate::domain::order::Order;
use crate::domain::queue::OrderQueue;
use crate::error::{OrderError, Result};
use crate::interfaces::csv::order_reader::OrderLine;
use std::sync::Arc;

/// Front of house: owns the catalog and the queue of orders awaiting payment.
///
/// Catalog items are shared with the orders that reference them.
#[derive(Debug)]
pub struct Restaurant {
    menu: Vec<Arc<MenuItem>>,
    queue: OrderQueue,
}

impl Restaurant {
    /// Creates a new `Restaurant` serving `menu`.
    pub fn new(menu: Vec<MenuItem>) -> Self {
        Self {
            menu: menu.into_iter().map(Arc::new).collect(),
            queue: OrderQueue::new(),
        }
    }

    pub fn menu(&self) -> &[Arc<MenuItem>] {
        &self.menu
    }

    /// Looks up a catalog item by its exact name.
    pub fn find_item(&self, name: &str) -> Option<Arc<MenuItem>> {
        self.menu.iter().find(|item| item.name() == name).cloned()
    }

    /// Adds a CSV order line to `order`, resolving the item against the catalog.
    pub fn add_line(&self, order: &mut Order, line: OrderLine) -> Result<()> {
        let item = self
            .find_item(&line.item)
            .ok_or(OrderError::UnknownItem(line.item))?;
        order.add_item(item, line.quantity)
    }

    pub fn add_order(&mut self, order: Order) {
        tracing::debug!(lines = order.len(), "order queued");
        self.queue.enqueue(order);
    }

    /// Takes the oldest pending order off the queue.
    pub fn process_next_order(&mut self) -> Option<Order> {
        match self.queue.dequeue_next() {
            Some(order) => {
                tracing::info!(
                    lines = order.len(),
                    total = %order.calculate_total(),
                    remaining = self.queue.len(),
                    "dispatching order"
                );
                Some(order)
            }
            None => {
                tracing::info!("no orders in the queue");
                None
            }
        }
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}
