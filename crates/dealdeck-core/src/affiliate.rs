//! Affiliate link construction for the two storefronts
//!
//! Listings carry an ASIN (Amazon) or PID (Flipkart); without one we fall back
//! to a tagged search link so the button always goes somewhere sensible.

use crate::catalog::{Platform, Product};

pub fn affiliate_link(product: &Product, amazon_tag: &str, flipkart_tag: &str) -> String {
    match product.platform {
        Platform::Amazon => match &product.asin {
            Some(asin) => format!("https://amzn.to/{}?id={}", amazon_tag, asin),
            None => format!(
                "https://www.amazon.in/s?k={}&tag={}",
                urlencoding::encode(&product.title),
                amazon_tag
            ),
        },
        Platform::Flipkart => match &product.pid {
            Some(pid) => format!("https://dl.flipkart.com/s/{}?pid={}", flipkart_tag, pid),
            None => format!(
                "https://www.flipkart.com/search?q={}&affid={}",
                urlencoding::encode(&product.title),
                flipkart_tag
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fallback_catalog;

    #[test]
    fn test_amazon_link_uses_asin() {
        let products = fallback_catalog().unwrap();
        let p = products.iter().find(|p| p.id == "iphone-15").unwrap();
        assert_eq!(
            affiliate_link(p, "techdealshub-21", "techdealsh"),
            "https://amzn.to/techdealshub-21?id=B0CHX6T6WK"
        );
    }

    #[test]
    fn test_flipkart_link_uses_pid() {
        let products = fallback_catalog().unwrap();
        let p = products.iter().find(|p| p.id == "galaxy-s24-ultra").unwrap();
        assert_eq!(
            affiliate_link(p, "techdealshub-21", "techdealsh"),
            "https://dl.flipkart.com/s/techdealsh?pid=MOBGHCG2HZHUFDNJ"
        );
    }

    #[test]
    fn test_missing_id_falls_back_to_search() {
        let mut products = fallback_catalog().unwrap();
        let p = products.iter_mut().find(|p| p.id == "iphone-15").unwrap();
        p.asin = None;
        let url = affiliate_link(p, "tag-21", "fk");
        assert!(url.starts_with("https://www.amazon.in/s?k="));
        assert!(url.ends_with("&tag=tag-21"));
        // Title must be percent-encoded.
        assert!(!url.contains(' '));
    }
}
