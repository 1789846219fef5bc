//! Interactive order session.
//!
//! Stands in for the shop page: loads the catalog, opens an order, then
//! reads commands from stdin until `quit` or end of input.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use corner_market_core::{CurrencyCode, Price, ProductId};
use corner_market_shop::cart::LineState;
use corner_market_shop::notify::Notifier;
use corner_market_shop::{ApiClient, OrderSession, ShopConfig};

/// Prints notifications to the terminal, standing in for toasts.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, summary: &str, detail: &str) {
        println!("ok: {summary} ({detail})");
    }

    fn error(&self, message: &str) {
        println!("error: {message}");
    }

    fn info(&self, message: &str) {
        println!("-- {message}");
    }
}

/// Run the interactive session loop.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ShopConfig::from_env()?;
    let client = ApiClient::new(&config);
    let mut session = OrderSession::new(client, Arc::new(ConsoleNotifier));

    println!("Loading products...");
    session.load().await;

    if session.products().is_empty() {
        println!("No products available; the catalog could not be loaded.");
    } else {
        print_products(&session);
    }
    println!("commands: list, add <id>, submit <id>, remove <id>, cart, quit");

    let mut lines = io::stdin().lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let mut parts = line.split_whitespace();

        match parts.next() {
            Some("list") => print_products(&session),
            Some("cart") => print_cart(&session),
            Some("add") => match parse_id(parts.next()) {
                Some(id) => {
                    if let Err(e) = session.add_to_cart(id) {
                        println!("error: {e}");
                    }
                }
                None => println!("usage: add <product-id>"),
            },
            Some("submit") => match parse_id(parts.next()) {
                Some(id) => {
                    let quantity = session.quantity(id);
                    if quantity == 0 {
                        println!("error: product {id} is not in the cart");
                    } else if let Err(e) = session.submit_order(id, quantity).await {
                        println!("error: {e}");
                    }
                }
                None => println!("usage: submit <product-id>"),
            },
            Some("remove") => match parse_id(parts.next()) {
                Some(id) => {
                    if let Err(e) = session.remove_from_cart(id).await {
                        println!("error: {e}");
                    } else {
                        print_cart(&session);
                    }
                }
                None => println!("usage: remove <product-id>"),
            },
            Some("quit" | "exit") => break,
            Some(other) => println!("unknown command: {other}"),
            None => {}
        }
    }

    Ok(())
}

fn parse_id(arg: Option<&str>) -> Option<ProductId> {
    arg?.parse::<i32>().ok().map(ProductId::new)
}

fn print_products(session: &OrderSession) {
    for product in session.products() {
        let price = Price::new(product.price, CurrencyCode::USD);
        println!(
            "{:>4}  {:<24} {:<16} {:>10}",
            product.id,
            product.name,
            product.brand,
            price.display()
        );
    }
}

fn print_cart(session: &OrderSession) {
    if session.cart().is_empty() {
        println!("Cart is empty.");
        return;
    }

    for line in session.cart().lines() {
        let marker = match line.state {
            LineState::Submitted(_) => "submitted",
            LineState::Added => "pending",
        };
        println!(
            "{:>4}  {:<24} {} x {:<4} {:>10}  [{marker}]",
            line.product_id,
            line.name,
            line.price.display(),
            line.quantity,
            line.subtotal_display()
        );
    }
    println!("Total: {}", session.total_display());
}
