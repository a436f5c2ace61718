//! Filtering, sorting and search over the product list
//!
//! One `apply` entry point so the grid always renders from a single pipeline.

use crate::catalog::{Platform, Product};

/// Toolbar filter buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformFilter {
    All,
    Amazon,
    Flipkart,
    /// Listings discounted at least [`crate::catalog::HOT_DEAL_PERCENT`] percent.
    HotDeals,
}

impl PlatformFilter {
    pub fn all() -> &'static [PlatformFilter] {
        &[
            PlatformFilter::All,
            PlatformFilter::Amazon,
            PlatformFilter::Flipkart,
            PlatformFilter::HotDeals,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlatformFilter::All => "All",
            PlatformFilter::Amazon => "Amazon",
            PlatformFilter::Flipkart => "Flipkart",
            PlatformFilter::HotDeals => "Hot Deals",
        }
    }

    fn matches(&self, product: &Product) -> bool {
        match self {
            PlatformFilter::All => true,
            PlatformFilter::Amazon => product.platform == Platform::Amazon,
            PlatformFilter::Flipkart => product.platform == Platform::Flipkart,
            PlatformFilter::HotDeals => product.is_hot_deal(),
        }
    }
}

/// Sort select options. `Featured` keeps catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Featured,
    PriceLowHigh,
    PriceHighLow,
    Discount,
    Rating,
}

impl SortOrder {
    pub fn all() -> &'static [SortOrder] {
        &[
            SortOrder::Featured,
            SortOrder::PriceLowHigh,
            SortOrder::PriceHighLow,
            SortOrder::Discount,
            SortOrder::Rating,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Featured => "Featured",
            SortOrder::PriceLowHigh => "Price: Low to High",
            SortOrder::PriceHighLow => "Price: High to Low",
            SortOrder::Discount => "Biggest Discount",
            SortOrder::Rating => "Top Rated",
        }
    }

    /// Stable key for `<select>` option values.
    pub fn key(&self) -> &'static str {
        match self {
            SortOrder::Featured => "featured",
            SortOrder::PriceLowHigh => "price_low",
            SortOrder::PriceHighLow => "price_high",
            SortOrder::Discount => "discount",
            SortOrder::Rating => "rating",
        }
    }

    pub fn from_key(key: &str) -> SortOrder {
        match key {
            "price_low" => SortOrder::PriceLowHigh,
            "price_high" => SortOrder::PriceHighLow,
            "discount" => SortOrder::Discount,
            "rating" => SortOrder::Rating,
            _ => SortOrder::Featured,
        }
    }
}

/// Case-insensitive match over title, brand and segment label.
pub fn matches_query(product: &Product, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    product.title.to_lowercase().contains(&query)
        || product.brand.to_lowercase().contains(&query)
        || product.category.label().to_lowercase().contains(&query)
}

/// Filter, search and sort in one pass over a borrowed catalog.
pub fn apply(
    products: &[Product],
    filter: PlatformFilter,
    sort: SortOrder,
    query: &str,
) -> Vec<Product> {
    let mut out: Vec<Product> = products
        .iter()
        .filter(|p| filter.matches(p) && matches_query(p, query))
        .cloned()
        .collect();

    match sort {
        SortOrder::Featured => {}
        SortOrder::PriceLowHigh => out.sort_by_key(|p| p.price),
        SortOrder::PriceHighLow => out.sort_by_key(|p| std::cmp::Reverse(p.price)),
        SortOrder::Discount => out.sort_by_key(|p| std::cmp::Reverse(p.discount_percent())),
        SortOrder::Rating => out.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fallback_catalog;

    #[test]
    fn test_platform_filters() {
        let products = fallback_catalog().unwrap();
        let amazon = apply(&products, PlatformFilter::Amazon, SortOrder::Featured, "");
        assert!(!amazon.is_empty());
        assert!(amazon.iter().all(|p| p.platform == Platform::Amazon));

        let flipkart = apply(&products, PlatformFilter::Flipkart, SortOrder::Featured, "");
        assert!(!flipkart.is_empty());
        assert!(flipkart.iter().all(|p| p.platform == Platform::Flipkart));

        assert_eq!(amazon.len() + flipkart.len(), products.len());
    }

    #[test]
    fn test_hot_deals_threshold() {
        let products = fallback_catalog().unwrap();
        let hot = apply(&products, PlatformFilter::HotDeals, SortOrder::Featured, "");
        assert!(!hot.is_empty());
        assert!(hot.iter().all(|p| p.discount_percent() >= 20));
        assert!(hot.len() < products.len());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let products = fallback_catalog().unwrap();
        let hits = apply(&products, PlatformFilter::All, SortOrder::Featured, "IPHONE");
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|p| p.title.to_lowercase().contains("iphone")));

        let by_brand = apply(&products, PlatformFilter::All, SortOrder::Featured, "samsung");
        assert!(by_brand.iter().any(|p| p.brand == "Samsung"));
    }

    #[test]
    fn test_blank_query_matches_everything() {
        let products = fallback_catalog().unwrap();
        let all = apply(&products, PlatformFilter::All, SortOrder::Featured, "   ");
        assert_eq!(all.len(), products.len());
    }

    #[test]
    fn test_sort_orders() {
        let products = fallback_catalog().unwrap();

        let low = apply(&products, PlatformFilter::All, SortOrder::PriceLowHigh, "");
        assert!(low.windows(2).all(|w| w[0].price <= w[1].price));

        let high = apply(&products, PlatformFilter::All, SortOrder::PriceHighLow, "");
        assert!(high.windows(2).all(|w| w[0].price >= w[1].price));

        let discount = apply(&products, PlatformFilter::All, SortOrder::Discount, "");
        assert!(discount
            .windows(2)
            .all(|w| w[0].discount_percent() >= w[1].discount_percent()));

        let rating = apply(&products, PlatformFilter::All, SortOrder::Rating, "");
        assert!(rating.windows(2).all(|w| w[0].rating >= w[1].rating));
    }

    #[test]
    fn test_featured_keeps_catalog_order() {
        let products = fallback_catalog().unwrap();
        let featured = apply(&products, PlatformFilter::All, SortOrder::Featured, "");
        let ids: Vec<_> = featured.iter().map(|p| p.id.clone()).collect();
        let expected: Vec<_> = products.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_sort_key_round_trip() {
        for sort in SortOrder::all() {
            assert_eq!(SortOrder::from_key(sort.key()), *sort);
        }
        assert_eq!(SortOrder::from_key("garbage"), SortOrder::Featured);
    }
}
