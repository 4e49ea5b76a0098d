use super::money::format_money;
use super::order::{Order, OrderSummary};
use rust_decimal::Decimal;
use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum SettlementState {
    #[default]
    Unsettled,
    Settled,
}

/// Result of tendering an amount against an order.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PaymentOutcome {
    Accepted,
    /// The tendered amount did not cover the total; nothing was recorded.
    Declined { shortfall: Decimal },
}

impl PaymentOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, PaymentOutcome::Accepted)
    }

    pub fn shortfall(&self) -> Option<Decimal> {
        match self {
            PaymentOutcome::Accepted => None,
            PaymentOutcome::Declined { shortfall } => Some(*shortfall),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SettlementStatus {
    Change(Decimal),
    ExactPayment,
    Incomplete,
}

/// Settlement of a single order.
///
/// The payment owns its order, so the total it settles against cannot change
/// between `process_payment` and `receipt`. Settling again overwrites the
/// previous amount and method.
#[derive(Debug, Clone)]
pub struct Payment {
    order: Order,
    amount_paid: Decimal,
    method: Option<String>,
    state: SettlementState,
}

impl Payment {
    pub fn new(order: Order) -> Self {
        Self {
            order,
            amount_paid: Decimal::ZERO,
            method: None,
            state: SettlementState::Unsettled,
        }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn amount_paid(&self) -> Decimal {
        self.amount_paid
    }

    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    pub fn state(&self) -> SettlementState {
        self.state
    }

    /// Records `amount` if it covers the order total.
    pub fn process_payment(&mut self, amount: Decimal, method: &str) -> PaymentOutcome {
        let total = self.order.calculate_total();
        if amount < total {
            let shortfall = total.saturating_sub(amount);
            tracing::info!(%amount, %total, %shortfall, method, "payment declined");
            return PaymentOutcome::Declined { shortfall };
        }

        self.amount_paid = amount;
        self.method = Some(method.to_string());
        self.state = SettlementState::Settled;
        tracing::info!(%amount, %total, method, "payment settled");
        PaymentOutcome::Accepted
    }

    /// Builds a receipt, comparing the recorded amount with a freshly computed total.
    pub fn receipt(&self) -> Receipt {
        let order = self.order.describe();
        let status = if self.amount_paid > order.total {
            SettlementStatus::Change(self.amount_paid - order.total)
        } else if self.amount_paid < order.total {
            SettlementStatus::Incomplete
        } else {
            SettlementStatus::ExactPayment
        };
        Receipt {
            order,
            amount_paid: self.amount_paid,
            method: self.method.clone(),
            status,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub order: OrderSummary,
    pub amount_paid: Decimal,
    pub method: Option<String>,
    pub status: SettlementStatus,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Payment receipt:")?;
        writeln!(f, "{}", self.order)?;
        writeln!(f, "Amount paid: {}", format_money(self.amount_paid))?;
        if let Some(method) = &self.method {
            writeln!(f, "Method: {method}")?;
        }
        match self.status {
            SettlementStatus::Change(change) => write!(f, "Change: {}", format_money(change)),
            SettlementStatus::ExactPayment => write!(f, "Exact payment."),
            SettlementStatus::Incomplete => write!(f, "Incomplete payment."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::MenuItem;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn sample_order() -> Order {
        let mut order = Order::new();
        order
            .add_item(
                Arc::new(MenuItem::beverage("Coke", dec!(2.5), "Large").unwrap()),
                2,
            )
            .unwrap();
        order
            .add_item(
                Arc::new(MenuItem::main_course("Spaghetti", dec!(12.0)).unwrap()),
                1,
            )
            .unwrap();
        order
            .add_item(
                Arc::new(MenuItem::appetizer("Spring Rolls", dec!(5.0), "Medium").unwrap()),
                1,
            )
            .unwrap();
        order
    }

    #[test]
    fn test_new_payment_is_unsettled() {
        let payment = Payment::new(sample_order());
        assert_eq!(payment.state(), SettlementState::Unsettled);
        assert_eq!(payment.amount_paid(), Decimal::ZERO);
        assert_eq!(payment.method(), None);
        assert_eq!(payment.receipt().status, SettlementStatus::Incomplete);
    }

    #[test]
    fn test_overpayment_gives_change() {
        let mut payment = Payment::new(sample_order());
        let outcome = payment.process_payment(dec!(30.0), "Credit card");

        assert!(outcome.is_accepted());
        assert_eq!(payment.state(), SettlementState::Settled);
        assert_eq!(payment.amount_paid(), dec!(30.0));
        assert_eq!(payment.method(), Some("Credit card"));
        assert_eq!(payment.receipt().status, SettlementStatus::Change(dec!(8.5)));
    }

    #[test]
    fn test_underpayment_reports_shortfall() {
        let mut payment = Payment::new(sample_order());
        let outcome = payment.process_payment(dec!(20.0), "Cash");

        assert!(!outcome.is_accepted());
        assert_eq!(outcome.shortfall(), Some(dec!(1.5)));
        assert_eq!(payment.state(), SettlementState::Unsettled);
        assert_eq!(payment.amount_paid(), Decimal::ZERO);
        assert_eq!(payment.method(), None);
    }

    #[test]
    fn test_declined_payment_keeps_previous_settlement() {
        let mut payment = Payment::new(sample_order());
        payment.process_payment(dec!(25.0), "Cash");
        let outcome = payment.process_payment(dec!(1.0), "Card");

        assert_eq!(outcome, PaymentOutcome::Declined { shortfall: dec!(20.5) });
        assert_eq!(payment.amount_paid(), dec!(25.0));
        assert_eq!(payment.method(), Some("Cash"));
        assert_eq!(payment.state(), SettlementState::Settled);
    }

    #[test]
    fn test_exact_payment() {
        let mut payment = Payment::new(sample_order());
        assert!(payment.process_payment(dec!(21.5), "Cash").is_accepted());
        assert_eq!(payment.receipt().status, SettlementStatus::ExactPayment);
    }

    #[test]
    fn test_settling_again_overwrites_amount() {
        let mut payment = Payment::new(sample_order());
        payment.process_payment(dec!(50.0), "Cash");
        payment.process_payment(dec!(22.0), "Card");

        assert_eq!(payment.amount_paid(), dec!(22.0));
        assert_eq!(payment.method(), Some("Card"));
        assert_eq!(payment.receipt().status, SettlementStatus::Change(dec!(0.5)));
    }

    #[test]
    fn test_receipt_layout() {
        let mut payment = Payment::new(sample_order());
        payment.process_payment(dec!(30.0), "Credit card");

        let text = payment.receipt().to_string();
        assert!(text.starts_with("Payment receipt:\nOrder details:\n2x Coke - $2.50 (Large)\n"));
        assert!(text.contains("Total: $21.50\n"));
        assert!(text.contains("Amount paid: $30.00\n"));
        assert!(text.ends_with("Change: $8.50"));
    }
}
