//! Product catalog model and price math
//!
//! Products are embedded as JSON fixtures; the frontend loads them through
//! [`fallback_catalog`] whenever the (flag-gated) live API is disabled or fails.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("malformed product fixtures: {0}")]
    Fixtures(#[from] serde_json::Error),
}

/// Storefront the deal links out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Amazon,
    Flipkart,
}

impl Platform {
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Amazon => "Amazon",
            Platform::Flipkart => "Flipkart",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Platform::Amazon => "amazon",
            Platform::Flipkart => "flipkart",
        }
    }
}

/// Price segment the phone is marketed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    Premium,
    Midrange,
    Budget,
}

impl Segment {
    pub fn label(&self) -> &'static str {
        match self {
            Segment::Premium => "Premium",
            Segment::Midrange => "Mid-range",
            Segment::Budget => "Budget",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stock {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl Stock {
    pub fn label(&self) -> &'static str {
        match self {
            Stock::InStock => "In Stock",
            Stock::OutOfStock => "Out of Stock",
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Stock::InStock)
    }
}

/// Direction of the most recent mock price movement, used for transient
/// up/down styling. Never serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceTrend {
    Up,
    Down,
}

/// Spec sheet rows shown in the detail panel. Every field is optional; the
/// fixtures fill in what the listing actually advertises.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecSheet {
    pub display: Option<String>,
    pub processor: Option<String>,
    pub ram: Option<String>,
    pub camera: Option<String>,
    pub front_camera: Option<String>,
    pub battery: Option<String>,
    pub os: Option<String>,
    pub connectivity: Option<String>,
    pub storage: Option<String>,
}

impl SpecSheet {
    /// Labelled rows in display order, skipping absent fields.
    pub fn rows(&self) -> Vec<(&'static str, &str)> {
        [
            ("Display", &self.display),
            ("Processor", &self.processor),
            ("RAM", &self.ram),
            ("Camera", &self.camera),
            ("Front camera", &self.front_camera),
            ("Battery", &self.battery),
            ("OS", &self.os),
            ("Connectivity", &self.connectivity),
            ("Storage", &self.storage),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.as_deref().map(|v| (label, v)))
        .collect()
    }
}

/// One storefront listing. Prices are whole rupees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub brand: String,
    pub category: Segment,
    #[serde(default)]
    pub badge: Option<String>,
    pub image: String,
    /// Ordered 360° shot sequence; empty means no viewer for this product.
    #[serde(default)]
    pub gallery: Vec<String>,
    pub price: i64,
    pub original_price: i64,
    pub platform: Platform,
    #[serde(default)]
    pub asin: Option<String>,
    #[serde(default)]
    pub pid: Option<String>,
    /// Listed price on the other storefront, when known.
    #[serde(default)]
    pub other_platform_price: Option<i64>,
    pub rating: f32,
    pub reviews: u32,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub specs: SpecSheet,
    pub stock: Stock,
    #[serde(default)]
    pub delivery: Option<String>,
    pub last_updated: DateTime<Utc>,
    #[serde(skip)]
    pub trend: Option<PriceTrend>,
}

impl Product {
    /// Rounded percentage off the list price; 0 when the listing has no cut.
    pub fn discount_percent(&self) -> u32 {
        discount_percent(self.price, self.original_price)
    }

    pub fn is_hot_deal(&self) -> bool {
        self.discount_percent() >= HOT_DEAL_PERCENT
    }

    /// Image sequence for the 360° viewer; falls back to the single card image.
    pub fn viewer_images(&self) -> Vec<String> {
        if self.gallery.is_empty() {
            vec![self.image.clone()]
        } else {
            self.gallery.clone()
        }
    }

    /// Nudge the mock price by one tick, refusing to go non-positive.
    pub fn apply_drift(&mut self, up: bool) {
        let next = self.price + if up { PRICE_DRIFT_STEP } else { -PRICE_DRIFT_STEP };
        if next > 0 {
            self.price = next;
            self.trend = Some(if up { PriceTrend::Up } else { PriceTrend::Down });
        }
    }
}

/// Discount at or above this is flagged as a hot deal.
pub const HOT_DEAL_PERCENT: u32 = 20;

/// Size of one simulated price movement, in rupees.
pub const PRICE_DRIFT_STEP: i64 = 100;

pub fn discount_percent(price: i64, original_price: i64) -> u32 {
    if original_price <= 0 || price >= original_price {
        return 0;
    }
    let off = (original_price - price) as f64 / original_price as f64 * 100.0;
    off.round() as u32
}

/// Star rating split for card rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarBreakdown {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

pub fn star_breakdown(rating: f32) -> StarBreakdown {
    let rating = rating.clamp(0.0, 5.0);
    let full = rating.floor() as u8;
    let half = full < 5 && rating - rating.floor() >= 0.5;
    StarBreakdown {
        full,
        half,
        empty: 5 - full - u8::from(half),
    }
}

/// Result of comparing the same listing across both storefronts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceComparison {
    pub cheaper: Platform,
    pub savings: i64,
    pub percent: f64,
}

pub fn compare_prices(amazon: i64, flipkart: i64) -> PriceComparison {
    let cheaper = if amazon <= flipkart {
        Platform::Amazon
    } else {
        Platform::Flipkart
    };
    let savings = (amazon - flipkart).abs();
    let floor = amazon.min(flipkart);
    let percent = if floor > 0 {
        savings as f64 / floor as f64 * 100.0
    } else {
        0.0
    };
    PriceComparison {
        cheaper,
        savings,
        percent,
    }
}

/// Parse the embedded sample catalog.
pub fn fallback_catalog() -> Result<Vec<Product>, CatalogError> {
    Ok(serde_json::from_str(include_str!("fixtures.json"))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_parse() {
        let products = fallback_catalog().expect("fixtures should parse");
        assert!(products.len() >= 6);
        let mut ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), products.len(), "product ids must be unique");
        for p in &products {
            assert!(p.price > 0, "{} has a non-positive price", p.id);
            assert!(p.rating >= 0.0 && p.rating <= 5.0);
        }
    }

    #[test]
    fn test_discount_percent() {
        assert_eq!(discount_percent(79_900, 89_900), 11);
        assert_eq!(discount_percent(129_999, 139_999), 7);
        // 20% boundary counts as hot.
        assert_eq!(discount_percent(80, 100), 20);
        assert_eq!(discount_percent(100, 100), 0);
        assert_eq!(discount_percent(100, 0), 0);
        assert_eq!(discount_percent(120, 100), 0);
    }

    #[test]
    fn test_star_breakdown() {
        assert_eq!(
            star_breakdown(4.5),
            StarBreakdown { full: 4, half: true, empty: 0 }
        );
        assert_eq!(
            star_breakdown(4.4),
            StarBreakdown { full: 4, half: false, empty: 1 }
        );
        assert_eq!(
            star_breakdown(5.0),
            StarBreakdown { full: 5, half: false, empty: 0 }
        );
        assert_eq!(
            star_breakdown(0.0),
            StarBreakdown { full: 0, half: false, empty: 5 }
        );
    }

    #[test]
    fn test_compare_prices() {
        let cmp = compare_prices(79_900, 81_400);
        assert_eq!(cmp.cheaper, Platform::Amazon);
        assert_eq!(cmp.savings, 1_500);
        assert!((cmp.percent - 1.877).abs() < 0.01);

        let cmp = compare_prices(130_000, 129_999);
        assert_eq!(cmp.cheaper, Platform::Flipkart);
        assert_eq!(cmp.savings, 1);
    }

    #[test]
    fn test_price_drift_floor() {
        let mut p = fallback_catalog().unwrap().remove(0);
        p.price = 50;
        p.trend = None;
        p.apply_drift(false);
        // A downward tick that would go non-positive is refused.
        assert_eq!(p.price, 50);
        assert_eq!(p.trend, None);

        p.apply_drift(true);
        assert_eq!(p.price, 150);
        assert_eq!(p.trend, Some(PriceTrend::Up));
        p.apply_drift(false);
        assert_eq!(p.price, 50);
        assert_eq!(p.trend, Some(PriceTrend::Down));
    }

    #[test]
    fn test_spec_rows_skip_missing() {
        let specs = SpecSheet {
            display: Some("6.1-inch OLED".into()),
            battery: Some("3349mAh".into()),
            ..Default::default()
        };
        let rows = specs.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ("Display", "6.1-inch OLED"));
        assert_eq!(rows[1], ("Battery", "3349mAh"));
    }

    #[test]
    fn test_viewer_images_fall_back_to_card_image() {
        let mut p = fallback_catalog().unwrap().remove(0);
        p.gallery.clear();
        assert_eq!(p.viewer_images(), vec![p.image.clone()]);
    }
}
