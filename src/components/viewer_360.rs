//! 360° product viewer component
//!
//! Thin DOM shell over [`dealdeck_core::carousel`]: browser events are
//! translated into gesture events, and the view renders whatever index the
//! state machine reports. Arrow keys are scoped to the viewer the pointer
//! last entered, so multiple viewers on one page never step in lockstep.

use std::sync::atomic::{AtomicU32, Ordering};

use dealdeck_core::carousel::{
    arrow_keys_enabled, direction_for_key, Carousel, Direction, GestureEvent,
};
use gloo_timers::callback::{Interval, Timeout};
use leptos::ev;
use leptos::prelude::*;

/// Delay before the animating guard is released after a transition.
const SETTLE_MS: u32 = 50;

static NEXT_VIEWER_ID: AtomicU32 = AtomicU32::new(0);

/// Shared registry of the viewer that currently owns arrow-key input.
#[derive(Clone, Copy)]
pub struct ActiveViewer(pub RwSignal<Option<u32>>);

#[component]
pub fn Viewer360(
    /// Ordered 360° shot sequence. An empty list renders an inert placeholder.
    images: Vec<String>,
    /// Auto-rotate period while hovered.
    #[prop(default = 2_000)]
    auto_rotate_ms: u32,
    /// Arm auto-rotation on mouseenter, matching the original hover behavior.
    #[prop(default = false)]
    auto_rotate_on_hover: bool,
) -> impl IntoView {
    let Some(initial) = Carousel::new(images.len()) else {
        // Construction with no images is a silent no-op.
        return view! { <div class="viewer-360 viewer-360-empty"></div> }.into_any();
    };

    let id = NEXT_VIEWER_ID.fetch_add(1, Ordering::Relaxed);
    let carousel = RwSignal::new(initial);
    let (zoomed, set_zoomed) = signal(false);
    let active = use_context::<ActiveViewer>();
    let image_list = StoredValue::new(images.clone());

    let claim_focus = move || {
        if let Some(registry) = active {
            registry.0.set(Some(id));
        }
    };

    // Every successful transition arms a settle timer that releases the
    // re-entrancy guard.
    let step = move |dir: Direction| {
        if carousel.try_update(|c| c.advance(dir)).flatten().is_some() {
            Timeout::new(SETTLE_MS, move || carousel.update(|c| c.settle())).forget();
        }
    };

    let gesture = move |event: GestureEvent| {
        if carousel.try_update(|c| c.handle(event)).flatten().is_some() {
            Timeout::new(SETTLE_MS, move || carousel.update(|c| c.settle())).forget();
        }
    };

    // Replacing the handle drops (and cancels) any previous interval, so two
    // starts never leave two timers running.
    let rotate_handle = StoredValue::new_local(None::<Interval>);
    let start_rotate = move || {
        rotate_handle.set_value(Some(Interval::new(auto_rotate_ms, move || {
            step(Direction::Next)
        })));
    };
    let stop_rotate = move || rotate_handle.set_value(None);

    let key_handle = window_event_listener(ev::keydown, move |kev| {
        if zoomed.get_untracked() && kev.key() == "Escape" {
            set_zoomed.set(false);
            return;
        }
        // Arrow keys stay out of text fields, and only the active viewer reacts.
        let active_tag = document().active_element().map(|el| el.tag_name());
        if !arrow_keys_enabled(active_tag.as_deref()) {
            return;
        }
        let is_active = match active {
            Some(registry) => registry.0.get_untracked() == Some(id),
            None => true,
        };
        if !is_active {
            return;
        }
        if let Some(dir) = direction_for_key(&kev.key()) {
            step(dir);
        }
    });

    on_cleanup(move || {
        stop_rotate();
        key_handle.remove();
    });

    let frames = images
        .into_iter()
        .enumerate()
        .map(|(index, url)| {
            view! {
                <img
                    src=url
                    alt=format!("Product view {}", index + 1)
                    class="viewer-360-frame"
                    draggable="false"
                    style:display=move || {
                        if carousel.get().current() == index { "block" } else { "none" }
                    }
                    on:click=move |_| set_zoomed.set(true)
                />
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div
            class="viewer-360"
            on:mouseenter=move |_| {
                claim_focus();
                if auto_rotate_on_hover {
                    start_rotate();
                }
            }
            on:mouseleave=move |_| {
                stop_rotate();
                gesture(GestureEvent::PointerUp);
            }
        >
            <div
                class="viewer-360-stage"
                style:cursor=move || {
                    if carousel.get().is_dragging() { "grabbing" } else { "grab" }
                }
                on:mousedown=move |mev| {
                    gesture(GestureEvent::PointerDown(mev.client_x() as f64));
                }
                on:mousemove=move |mev| {
                    gesture(GestureEvent::PointerMove(mev.client_x() as f64));
                }
                on:mouseup=move |_| gesture(GestureEvent::PointerUp)
                on:touchstart=move |tev| {
                    tev.prevent_default();
                    claim_focus();
                    if let Some(touch) = tev.touches().get(0) {
                        gesture(GestureEvent::PointerDown(touch.client_x() as f64));
                    }
                }
                on:touchmove=move |tev| {
                    tev.prevent_default();
                    if let Some(touch) = tev.touches().get(0) {
                        gesture(GestureEvent::PointerMove(touch.client_x() as f64));
                    }
                }
                on:touchend=move |_| gesture(GestureEvent::PointerUp)
            >
                {frames}
            </div>
            <div class="viewer-360-controls">
                <button
                    class="btn-360-prev"
                    title="Previous view"
                    on:click=move |_| step(Direction::Prev)
                >
                    "‹"
                </button>
                <span class="viewer-360-indicator">
                    {move || carousel.get().indicator()}
                </span>
                <button
                    class="btn-360-next"
                    title="Next view"
                    on:click=move |_| step(Direction::Next)
                >
                    "›"
                </button>
            </div>
            <span class="viewer-360-hint">"Drag to rotate"</span>

            <Show when=move || zoomed.get()>
                <div class="viewer-zoom-overlay" on:click=move |_| set_zoomed.set(false)>
                    <img
                        class="viewer-zoom-image"
                        src=move || {
                            image_list.with_value(|list| list[carousel.get().current()].clone())
                        }
                        on:click=|ev| ev.stop_propagation()
                    />
                    <button class="viewer-zoom-close" on:click=move |_| set_zoomed.set(false)>
                        "×"
                    </button>
                </div>
            </Show>
        </div>
    }
    .into_any()
}
