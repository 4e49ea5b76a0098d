use super::order::Order;
use std::collections::VecDeque;

/// First-in, first-out line of orders waiting for payment.
#[derive(Debug, Default)]
pub struct OrderQueue {
    pending: VecDeque<Order>,
}

impl OrderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, order: Order) {
        self.pending.push_back(order);
    }

    /// Removes the oldest order, or returns `None` when nothing is waiting.
    pub fn dequeue_next(&mut self) -> Option<Order> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
