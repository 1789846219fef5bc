//! Print the product catalog.

use corner_market_core::{CurrencyCode, Price};
use corner_market_shop::{ApiClient, ShopConfig};

/// Fetch the catalog and print one line per product.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ShopConfig::from_env()?;
    let client = ApiClient::new(&config);

    let products = client.list_products().await?;
    if products.is_empty() {
        println!("No products available.");
        return Ok(());
    }

    for product in &products {
        let price = Price::new(product.price, CurrencyCode::USD);
        println!(
            "{:>4}  {:<24} {:<16} {:>10}",
            product.id,
            product.name,
            product.brand,
            price.display()
        );
    }

    Ok(())
}
