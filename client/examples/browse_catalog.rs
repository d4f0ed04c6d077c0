use std::env;

use anyhow::Result;
use pokedeck_client::{CatalogBrowser, Config};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    let page = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(1);

    println!("Catalog: {}", config.catalog_url);

    let mut browser = CatalogBrowser::from_config(&config);
    browser.load_page(page).await?;

    println!(
        "\nPage {}/{} ({} Pokemon)\n",
        browser.page(),
        browser.total_pages(),
        browser.count()
    );
    for pokemon in browser.pokemon() {
        println!(
            "#{:04} {:<14} {:<18} BST {}",
            pokemon.id,
            pokemon.display_name(),
            pokemon.types.join("/"),
            pokemon.base_stat_total()
        );
    }

    let pages: Vec<String> = browser.page_numbers().iter().map(|n| n.to_string()).collect();
    println!("\nPages: {}", pages.join(" "));

    if let Some(name) = env::args().nth(2) {
        let pokemon = browser.find(&name).await?;
        println!(
            "\n{}: {}",
            pokemon.display_name(),
            pokemon.abilities.join(", ")
        );
    }

    Ok(())
}
