use super::menu::{CategoryKind, MenuItem};
use super::money::format_money;
use crate::error::OrderError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt;
use std::sync::Arc;

/// Share of the beverage price charged when the order contains a main course.
pub const BEVERAGE_COMBO_RATE: Decimal = dec!(0.9);

/// A menu item and how many units of it were ordered.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    item: Arc<MenuItem>,
    quantity: u32,
}

impl LineItem {
    pub fn item(&self) -> &MenuItem {
        &self.item
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// An ordered list of line items.
///
/// Adding the same item twice keeps two separate lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Order {
    line_items: Vec<LineItem>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line for `quantity` units of `item`.
    ///
    /// Rejects the line when the order total would no longer fit in a `Decimal`.
    pub fn add_item(&mut self, item: Arc<MenuItem>, quantity: u32) -> Result<(), OrderError> {
        if quantity == 0 {
            return Err(OrderError::ValidationError(format!(
                "Quantity for '{}' must be positive",
                item.name()
            )));
        }
        self.line_items.push(LineItem { item, quantity });
        if self.checked_total().is_none() {
            let name = self
                .line_items
                .pop()
                .map(|line| line.item.name().to_string())
                .unwrap_or_default();
            return Err(OrderError::ValidationError(format!(
                "Adding {quantity}x '{name}' overflows the order total"
            )));
        }
        Ok(())
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn len(&self) -> usize {
        self.line_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    pub fn has_main_course(&self) -> bool {
        self.line_items
            .iter()
            .any(|line| line.item.kind() == CategoryKind::MainCourse)
    }

    /// Sums every line at full precision.
    ///
    /// Beverage lines are charged at `BEVERAGE_COMBO_RATE` whenever any line
    /// of the order is a main course.
    pub fn calculate_total(&self) -> Decimal {
        // add_item never keeps a line that makes this overflow
        self.checked_total().unwrap_or(Decimal::MAX)
    }

    fn checked_total(&self) -> Option<Decimal> {
        let combo = self.has_main_course();
        self.line_items.iter().try_fold(Decimal::ZERO, |total, line| {
            let subtotal = line.item.price_for(line.quantity)?;
            let charged = if combo && line.item.kind() == CategoryKind::Beverage {
                subtotal.checked_mul(BEVERAGE_COMBO_RATE)?
            } else {
                subtotal
            };
            total.checked_add(charged)
        })
    }

    pub fn describe(&self) -> OrderSummary {
        OrderSummary {
            lines: self
                .line_items
                .iter()
                .map(|line| (line.quantity, line.item.to_string()))
                .collect(),
            total: self.calculate_total(),
        }
    }
}

/// Display view of an order: `(quantity, label)` per line plus the total.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub lines: Vec<(u32, String)>,
    pub total: Decimal,
}

impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Order details:")?;
        for (quantity, label) in &self.lines {
            writeln!(f, "{quantity}x {label}")?;
        }
        write!(f, "Total: {}", format_money(self.total))
    }
}
