//! Toast notification stack
//!
//! Any component can `use_context::<Toasts>()` and push a message; toasts
//! dismiss themselves after three seconds.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const TOAST_DISMISS_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl ToastLevel {
    fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Info => "toast info",
            ToastLevel::Success => "toast success",
            ToastLevel::Error => "toast error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub level: ToastLevel,
    pub message: String,
}

/// Handle stored in context. Copy so handlers can capture it freely.
#[derive(Clone, Copy)]
pub struct Toasts {
    list: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            list: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn push(&self, level: ToastLevel, message: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));
        self.list.update(|list| {
            list.push(Toast {
                id,
                level,
                message: message.into(),
            })
        });

        let list = self.list;
        Timeout::new(TOAST_DISMISS_MS, move || {
            list.update(|l| l.retain(|t| t.id != id));
        })
        .forget();
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastLevel::Info, message);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message);
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the stack; mounted once at the app root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_context::<Toasts>().unwrap_or_default();

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.list.get()
                key=|toast| toast.id
                let:toast
            >
                <div class=toast.level.css_class()>
                    <span>{toast.message.clone()}</span>
                </div>
            </For>
        </div>
    }
}
