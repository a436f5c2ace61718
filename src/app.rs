//! Application root: shared state, context, and page layout

use leptos::prelude::*;
use leptos::task::spawn_local;

use dealdeck_core::catalog::Product;
use dealdeck_core::filter::{PlatformFilter, SortOrder};

use crate::api::{self, LiveConfig};
use crate::components::{
    ActiveViewer, LiveTicker, ProductDetails, ProductGrid, ToastHost, Toasts, Toolbar,
};
use crate::storage;

#[component]
pub fn App() -> impl IntoView {
    let config = LiveConfig::default();
    let toasts = Toasts::new();
    provide_context(config.clone());
    provide_context(toasts);
    provide_context(ActiveViewer(RwSignal::new(None)));

    let (search_query, set_search_query) = signal(String::new());
    let (filter, set_filter) = signal(PlatformFilter::All);
    let (sort, set_sort) = signal(SortOrder::Featured);
    let (theme, set_theme) = signal(storage::load_theme());
    let (selected, set_selected) = signal(None::<Product>);
    let (loading, set_loading) = signal(true);
    let wishlist = RwSignal::new(storage::load_wishlist());
    let products = RwSignal::new(Vec::<Product>::new());

    Effect::new(move || {
        let theme = theme.get();
        if let Some(body) = document().body() {
            let _ = body.set_attribute("data-theme", theme.as_str());
        }
        storage::save_theme(theme);
    });

    let load = {
        let config = config.clone();
        move |notify: bool| {
            let config = config.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api::fetch_products(&config).await {
                    Ok(list) => {
                        products.set(list);
                        if notify {
                            toasts.info("Prices refreshed");
                        }
                    }
                    Err(e) => toasts.error(format!("Failed to load products: {}", e)),
                }
                set_loading.set(false);
            });
        }
    };

    load(false);
    let on_refresh = Callback::new(move |_: ()| load(true));

    view! {
        <div class="app">
            <Toolbar
                search_query=search_query
                set_search_query=set_search_query
                filter=filter
                set_filter=set_filter
                sort=sort
                set_sort=set_sort
                theme=theme
                set_theme=set_theme
                on_refresh=on_refresh
            />
            <LiveTicker products=products on_refresh=on_refresh />
            <ProductGrid
                products=products
                filter=filter
                sort=sort
                search_query=search_query
                wishlist=wishlist
                selected=set_selected
                loading=loading
            />
            <ProductDetails
                selected=selected
                set_selected=set_selected
                wishlist=wishlist
            />
            <ToastHost />
        </div>
    }
}
