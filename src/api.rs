//! Catalog loading for the frontend
//!
//! The live endpoint is flag-gated off by default; every path that fails (or
//! is disabled) falls back to the embedded sample catalog so the storefront
//! always renders.

use chrono::Utc;
use dealdeck_core::affiliate;
use dealdeck_core::catalog::Product;
use serde::Deserialize;
use web_sys::console;

/// Storefront configuration, provided once through Leptos context instead of
/// ambient module globals.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveConfig {
    pub api_base: String,
    /// Full catalog refresh period.
    pub refresh_interval_secs: u32,
    /// Mock price drift period.
    pub drift_interval_secs: u32,
    pub products_per_page: usize,
    pub amazon_tag: String,
    pub flipkart_tag: String,
    /// When false (the default), `fetch_products` never touches the network.
    pub enable_real_api: bool,
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            refresh_interval_secs: 5 * 60,
            drift_interval_secs: 30,
            products_per_page: 12,
            amazon_tag: "techdealshub-21".to_string(),
            flipkart_tag: "techdealsh".to_string(),
            enable_real_api: false,
        }
    }
}

#[derive(Deserialize)]
struct LiveResponse {
    products: Vec<Product>,
}

/// Load the catalog: live endpoint when enabled, embedded fixtures otherwise
/// (and on any live failure). Fixture timestamps are stamped "now" so the
/// time-ago badges read like a fresh feed.
pub async fn fetch_products(config: &LiveConfig) -> Result<Vec<Product>, String> {
    if config.enable_real_api {
        match fetch_live(config).await {
            Ok(products) => return Ok(products),
            Err(e) => {
                console::warn_1(&format!("Live products unavailable, using fallback: {}", e).into());
            }
        }
    }
    fallback_products()
}

async fn fetch_live(config: &LiveConfig) -> Result<Vec<Product>, String> {
    let url = format!("{}/products/live", config.api_base);
    let response = gloo_net::http::Request::get(&url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    let body: LiveResponse = response.json().await.map_err(|e| e.to_string())?;
    Ok(body.products)
}

fn fallback_products() -> Result<Vec<Product>, String> {
    let mut products = dealdeck_core::catalog::fallback_catalog().map_err(|e| e.to_string())?;
    let now = Utc::now();
    for product in &mut products {
        product.last_updated = now;
    }
    Ok(products)
}

/// Outbound affiliate URL for a listing, using the configured tags.
pub fn buy_link(product: &Product, config: &LiveConfig) -> String {
    affiliate::affiliate_link(product, &config.amazon_tag, &config.flipkart_tag)
}

/// Affiliate click tracking. There is no analytics backend; clicks go to the
/// console the way the original site stubbed its tracker.
pub fn track_click(product: &Product) {
    console::log_1(&format!("Affiliate click: {} on {}", product.title, product.platform.label()).into());
}
