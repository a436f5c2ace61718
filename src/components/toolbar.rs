use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use dealdeck_core::filter::{PlatformFilter, SortOrder};

use crate::storage::Theme;

/// Pause after the last keystroke before the search query is applied.
const SEARCH_DEBOUNCE_MS: u32 = 300;

#[component]
pub fn Toolbar(
    search_query: ReadSignal<String>,
    set_search_query: WriteSignal<String>,
    filter: ReadSignal<PlatformFilter>,
    set_filter: WriteSignal<PlatformFilter>,
    sort: ReadSignal<SortOrder>,
    set_sort: WriteSignal<SortOrder>,
    theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
    on_refresh: Callback<()>,
) -> impl IntoView {
    // Raw input updates immediately; the applied query trails it by the
    // debounce window. Replacing the handle cancels the pending timeout.
    let (raw_query, set_raw_query) = signal(String::new());
    let debounce = StoredValue::new_local(None::<Timeout>);

    let on_input = move |ev| {
        let value = event_target_value(&ev);
        set_raw_query.set(value.clone());
        debounce.set_value(Some(Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            set_search_query.set(value);
        })));
    };

    let clear_search = move |_| {
        debounce.set_value(None);
        set_raw_query.set(String::new());
        set_search_query.set(String::new());
    };

    view! {
        <header class="toolbar">
            <div class="toolbar-left">
                <h1 class="app-title">"DealDeck"</h1>
            </div>
            <div class="toolbar-center">
                <div class="search-box">
                    <input
                        type="text"
                        placeholder="Search smartphones..."
                        prop:value=move || raw_query.get()
                        on:input=on_input
                    />
                    <Show when=move || !raw_query.get().is_empty()>
                        <button
                            class="search-clear"
                            on:click=clear_search
                            title="Clear search"
                        >
                            "×"
                        </button>
                    </Show>
                </div>
            </div>
            <div class="toolbar-right">
                <div class="filter-buttons">
                    <For
                        each=move || PlatformFilter::all().iter().copied()
                        key=|f| f.label()
                        children=move |f| {
                            view! {
                                <button
                                    class="filter-btn"
                                    class:active=move || filter.get() == f
                                    on:click=move |_| set_filter.set(f)
                                >
                                    {f.label()}
                                </button>
                            }
                        }
                    />
                </div>
                <select
                    class="sort-dropdown"
                    prop:value=move || sort.get().key()
                    on:change=move |ev| {
                        set_sort.set(SortOrder::from_key(&event_target_value(&ev)));
                    }
                >
                    <For
                        each=move || SortOrder::all().iter().copied()
                        key=|s| s.key()
                        children=move |s| {
                            view! {
                                <option value=s.key()>
                                    {s.label()}
                                </option>
                            }
                        }
                    />
                </select>
                <button
                    class="theme-toggle"
                    title="Toggle theme"
                    on:click=move |_| set_theme.set(theme.get().toggled())
                >
                    {move || match theme.get() {
                        Theme::Light => "Dark mode",
                        Theme::Dark => "Light mode",
                    }}
                </button>
                <button
                    class="btn-refresh"
                    title="Refresh deals"
                    on:click=move |_| on_refresh.run(())
                >
                    "Refresh"
                </button>
            </div>
        </header>
    }
}
