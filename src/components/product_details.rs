//! Product details overlay with the 360° viewer and spec sheet

use std::collections::HashSet;

use leptos::prelude::*;

use dealdeck_core::catalog::{compare_prices, Platform, Product};
use dealdeck_core::format::format_rupees;

use crate::api::{self, LiveConfig};
use crate::components::toast::Toasts;
use crate::components::viewer_360::Viewer360;

#[component]
pub fn ProductDetails(
    selected: ReadSignal<Option<Product>>,
    set_selected: WriteSignal<Option<Product>>,
    wishlist: RwSignal<HashSet<String>>,
) -> impl IntoView {
    view! {
        {move || {
            selected.get().map(|product| {
                view! {
                    <div
                        class="details-overlay"
                        on:click=move |_| set_selected.set(None)
                    >
                        <div class="details-panel" on:click=|ev| ev.stop_propagation()>
                            <button
                                class="details-close"
                                title="Close"
                                on:click=move |_| set_selected.set(None)
                            >
                                "×"
                            </button>
                            <DetailsBody product=product wishlist=wishlist />
                        </div>
                    </div>
                }
            })
        }}
    }
}

#[component]
fn DetailsBody(product: Product, wishlist: RwSignal<HashSet<String>>) -> impl IntoView {
    let config = use_context::<LiveConfig>().unwrap_or_default();
    let toasts = use_context::<Toasts>().unwrap_or_default();

    let id = product.id.clone();
    let title = product.title.clone();
    let brand = product.brand.clone();
    let platform = product.platform;
    let price = product.price;
    let original_price = product.original_price;
    let discount = product.discount_percent();
    let stock = product.stock;
    let delivery = product.delivery.clone();
    let features = product.features.clone();
    let spec_rows: Vec<(&'static str, String)> = product
        .specs
        .rows()
        .into_iter()
        .map(|(label, value)| (label, value.to_string()))
        .collect();
    let images = product.viewer_images();
    let buy_url = api::buy_link(&product, &config);

    // Cross-platform comparison only renders when the other listing is known.
    let comparison = product.other_platform_price.map(|other| {
        let (amazon, flipkart) = match platform {
            Platform::Amazon => (price, other),
            Platform::Flipkart => (other, price),
        };
        compare_prices(amazon, flipkart)
    });

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

    let track_product = product;

    view! {
        <div class="details-body">
            <div class="details-viewer">
                <Viewer360 images=images auto_rotate_on_hover=true />
            </div>

            <div class="details-info">
                <span class="details-brand">{brand}</span>
                <h2 class="details-title">{title.clone()}</h2>

                <div class="details-price">
                    <span class="current-price">{format_rupees(price)}</span>
                    {(discount > 0).then(|| view! {
                        <span class="original-price">{format_rupees(original_price)}</span>
                        <span class="discount-badge">{format!("{}% OFF", discount)}</span>
                    })}
                </div>

                {comparison.map(|cmp| view! {
                    <p class="details-comparison">
                        {format!(
                            "{} is cheaper by {} ({:.1}%)",
                            cmp.cheaper.label(),
                            format_rupees(cmp.savings),
                            cmp.percent,
                        )}
                    </p>
                })}

                <div class="details-stock">
                    <span class=if stock.is_available() { "stock-status in-stock" } else { "stock-status out-stock" }>
                        {stock.label()}
                    </span>
                    {delivery.map(|d| view! {
                        <span class="delivery-info">{d}</span>
                    })}
                </div>

                <ul class="details-features">
                    {features.into_iter().map(|f| view! {
                        <li>{f}</li>
                    }).collect::<Vec<_>>()}
                </ul>

                <table class="details-specs">
                    <tbody>
                        {spec_rows.into_iter().map(|(label, value)| view! {
                            <tr>
                                <th>{label}</th>
                                <td>{value}</td>
                            </tr>
                        }).collect::<Vec<_>>()}
                    </tbody>
                </table>

                <div class="details-actions">
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
