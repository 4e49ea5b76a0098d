use clap::Parser;
use miette::{IntoDiagnostic, Result};
use restaurant_ledger::application::catalog::house_menu;
use restaurant_ledger::application::restaurant::Restaurant;
use restaurant_ledger::domain::money::format_money;
use restaurant_ledger::domain::order::Order;
use restaurant_ledger::domain::payment::{Payment, PaymentOutcome};
use restaurant_ledger::domain::ports::MenuStoreBox;
use restaurant_ledger::infrastructure::json_file::JsonFileMenuStore;
use restaurant_ledger::interfaces::csv::order_reader::{OrderLine, OrderLineReader};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Where the menu is saved and reloaded from
    #[arg(long, default_value = "menu.json")]
    menu_path: PathBuf,

    /// Order lines CSV file (`item,quantity`). Defaults to a sample order.
    #[arg(long)]
    order: Option<PathBuf>,

    /// Amount tendered for the order
    #[arg(long, default_value_t = dec!(30.0))]
    amount: Decimal,

    /// Payment method label
    #[arg(long, default_value = "Credit card")]
    method: String,

    /// Log filter directive, e.g. `info` or `restaurant_ledger=debug`
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_tracing(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive).into_diagnostic()?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn sample_lines() -> Vec<OrderLine> {
    [("Coke", 2), ("Spring Rolls", 1), ("Spaghetti", 1)]
        .into_iter()
        .map(|(item, quantity)| OrderLine {
            item: item.to_string(),
            quantity,
        })
        .collect()
}

fn build_order(restaurant: &Restaurant, path: Option<PathBuf>) -> Result<Order> {
    let mut order = Order::new();
    let Some(path) = path else {
        for line in sample_lines() {
            restaurant.add_line(&mut order, line).into_diagnostic()?;
        }
        return Ok(order);
    };

    let file = File::open(path).into_diagnostic()?;
    let reader = OrderLineReader::new(file);
    for line_result in reader.lines() {
        match line_result.and_then(|line| restaurant.add_line(&mut order, line)) {
            Ok(()) => {}
            Err(e) => eprintln!("Error reading order line: {}", e),
        }
    }
    Ok(order)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let mut store: MenuStoreBox = Box::new(JsonFileMenuStore::new(&cli.menu_path));
    store.save(&house_menu().into_diagnostic()?).into_diagnostic()?;
    let menu = store.load().into_diagnostic()?;

    println!("Menu loaded from JSON:");
    for item in &menu {
        println!("{}", item);
    }

    let mut restaurant = Restaurant::new(menu);
    let order = build_order(&restaurant, cli.order)?;
    if order.is_empty() {
        eprintln!("Order has no valid lines; nothing queued.");
    } else {
        restaurant.add_order(order);
    }

    let Some(order) = restaurant.process_next_order() else {
        println!("No orders in the queue.");
        return Ok(());
    };
    println!("{}", order.describe());

    let mut payment = Payment::new(order);
    match payment.process_payment(cli.amount, &cli.method) {
        PaymentOutcome::Accepted => println!(
            "Payment of {} processed successfully via {}.",
            format_money(cli.amount),
            cli.method
        ),
        PaymentOutcome::Declined { shortfall } => println!(
            "The amount paid is less than the order total. Missing {}.",
            format_money(shortfall)
        ),
    }
    println!("{}", payment.receipt());

    Ok(())
}
