//! DealDeck Core - DOM-free domain logic for the storefront frontend

pub mod affiliate;
pub mod carousel;
pub mod catalog;
pub mod filter;
pub mod format;
