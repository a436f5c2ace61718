//! Product card grid with load-more pagination

use std::collections::HashSet;

use chrono::Utc;
use leptos::prelude::*;

use dealdeck_core::catalog::{star_breakdown, PriceTrend, Product};
use dealdeck_core::filter::{self, PlatformFilter, SortOrder};
use dealdeck_core::format::{format_rupees, time_ago};

use crate::api::{self, LiveConfig};
use crate::components::toast::Toasts;

#[component]
pub fn ProductGrid(
    products: RwSignal<Vec<Product>>,
    filter: ReadSignal<PlatformFilter>,
    sort: ReadSignal<SortOrder>,
    search_query: ReadSignal<String>,
    wishlist: RwSignal<HashSet<String>>,
    selected: WriteSignal<Option<Product>>,
    loading: ReadSignal<bool>,
) -> impl IntoView {
    let config = use_context::<LiveConfig>().unwrap_or_default();
    let page_size = config.products_per_page.max(1);

    let (visible_count, set_visible_count) = signal(page_size);

    let filtered = Memo::new(move |_| {
        filter::apply(&products.get(), filter.get(), sort.get(), &search_query.get())
    });

    // Changing any criterion folds the list back to the first page.
    Effect::new(move || {
        let _ = filter.get();
        let _ = sort.get();
        let _ = search_query.get();
        set_visible_count.set(page_size);
    });

    let visible = move || {
        let list = filtered.get();
        let count = visible_count.get().min(list.len());
        list[..count].to_vec()
    };

    view! {
        <main class="product-content">
            {move || {
                let list = filtered.get();
                if loading.get() && products.get().is_empty() {
                    view! { <div class="loading">"Loading deals..."</div> }.into_any()
                } else if list.is_empty() {
                    view! {
                        <div class="empty-state">
                            <h3>"No products found"</h3>
                            <p>"Try changing your filters or check back later"</p>
                        </div>
                    }.into_any()
                } else {
                    let total = list.len();
                    let shown = visible_count.get().min(total);
                    let note = if shown >= total {
                        format!("All {} smartphones loaded", total)
                    } else {
                        format!("Showing {} of {} smartphones", shown, total)
                    };
                    view! {
                        <div class="product-grid">
                            <For
                                each=visible
                                key=|p| (p.id.clone(), p.price)
                                let:product
                            >
                                <ProductCard
                                    product=product
                                    wishlist=wishlist
                                    selected=selected
                                />
                            </For>
                        </div>
                        <div class="load-more">
                            <Show when=move || visible_count.get() < filtered.get().len()>
                                <button
                                    class="load-more-btn"
                                    on:click=move |_| {
                                        set_visible_count.update(|c| *c += page_size);
                                    }
                                >
                                    "Load more"
                                </button>
                            </Show>
                            <p class="load-more-note">{note}</p>
                        </div>
                    }.into_any()
                }
            }}
        </main>
    }
}

#[component]
fn ProductCard(
    product: Product,
    wishlist: RwSignal<HashSet<String>>,
    selected: WriteSignal<Option<Product>>,
) -> impl IntoView {
    let config = use_context::<LiveConfig>().unwrap_or_default();
    let toasts = use_context::<Toasts>().unwrap_or_default();

    let id = product.id.clone();
    let title = product.title.clone();
    let platform = product.platform;
    let stock = product.stock;
    let image = product.image.clone();
    let badge = product.badge.clone();
    let delivery = product.delivery.clone();
    let features: Vec<String> = product.features.iter().take(3).cloned().collect();
    let rating = product.rating;
    let reviews = product.reviews;
    let price = product.price;
    let original_price = product.original_price;
    let discount = product.discount_percent();
    let hot = product.is_hot_deal();
    let buy_url = api::buy_link(&product, &config);
    let updated = time_ago(product.last_updated, Utc::now());
    let stars = star_breakdown(rating);
    let price_class = match product.trend {
        Some(PriceTrend::Up) => "current-price price-up",
        Some(PriceTrend::Down) => "current-price price-down",
        None => "current-price",
    };

    let wish_id = id.clone();
    let wish_title = title.clone();
    let toggle_wishlist = move |_| {
        let mut added = false;
        wishlist.update(|ids| {
            if !ids.remove(&wish_id) {
                ids.insert(wish_id.clone());
                added = true;
            }
        });
        crate::storage::save_wishlist(&wishlist.get_untracked());
        if added {
            toasts.success(format!("{} added to wishlist", wish_title));
        } else {
            toasts.info(format!("{} removed from wishlist", wish_title));
        }
    };

    let in_wishlist = {
        let id = id.clone();
        move || wishlist.get().contains(&id)
    };
    let wish_label = {
        let in_wishlist = in_wishlist.clone();
        move || if in_wishlist() { "♥ Wishlisted" } else { "♡ Wishlist" }
    };

    let product_for_click = product.clone();
    let track_product = product;

    view! {
        <div class="product-card">
            {hot.then(|| view! {
                <div class="hot-deal-badge">"HOT DEAL"</div>
            })}
            {badge.map(|b| view! {
                <div class="product-badge">{b}</div>
            })}

            <div class=format!("product-platform {}", platform.css_class())>
                <span>{platform.label()}</span>
                <span class="update-time">{updated}</span>
            </div>

            <div
                class="product-image"
                on:click=move |_| selected.set(Some(product_for_click.clone()))
            >
                <img src=image alt=title.clone() loading="lazy" />
            </div>

            <div class="product-details">
                <h3 class="product-title">{title.clone()}</h3>

                <div class="product-rating">
                    {(0..stars.full).map(|_| view! { <span class="star full">"★"</span> }).collect::<Vec<_>>()}
                    {stars.half.then(|| view! { <span class="star half">"★"</span> })}
                    {(0..stars.empty).map(|_| view! { <span class="star empty">"☆"</span> }).collect::<Vec<_>>()}
                    <span class="rating-text">
                        {format!("{}/5 ({})", rating, reviews)}
                    </span>
                </div>

                <div class="price-section">
                    <span class=price_class>{format_rupees(price)}</span>
                    {(discount > 0).then(|| view! {
                        <span class="original-price">{format_rupees(original_price)}</span>
                        <span class="discount-badge">{format!("{}% OFF", discount)}</span>
                    })}
                </div>

                <div class="stock-info">
                    <span class=if stock.is_available() { "stock-status in-stock" } else { "stock-status out-stock" }>
                        {stock.label()}
                    </span>
                    {delivery.map(|d| view! {
                        <span class="delivery-info">{d}</span>
                    })}
                </div>

                <div class="product-features">
                    {features.into_iter().map(|f| view! {
                        <span class="feature">{f}</span>
                    }).collect::<Vec<_>>()}
                </div>

                <div class="product-actions">
                    <a
                        href=buy_url
                        target="_blank"
                        rel="nofollow sponsored"
                        class=format!("btn btn-{}", platform.css_class())
                        on:click=move |_| api::track_click(&track_product)
                    >
                        {format!("Buy on {}", platform.label())}
                    </a>
                    <button
                        class="btn-wishlist-toggle"
                        class:active=in_wishlist
                        on:click=toggle_wishlist
                    >
                        {wish_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
