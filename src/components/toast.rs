//! Toast Notification Component
//!
//! Shows the transient success and error messages from global state.

use leptos::*;

use crate::state::global::GlobalState;

#[derive(Clone, Copy)]
enum ToastVariant {
    Success,
    Error,
}

impl ToastVariant {
    fn icon(self) -> &'static str {
        match self {
            ToastVariant::Success => "✔",
            ToastVariant::Error => "⚠",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            ToastVariant::Success => "bg-green-600",
            ToastVariant::Error => "bg-red-600",
        }
    }
}

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let success = state.success;
    let error = state.error;

    view! {
        <div class="fixed top-4 right-4 z-50 space-y-2">
            {move || success.get().map(|message| toast_message(message, ToastVariant::Success))}
            {move || error.get().map(|message| toast_message(message, ToastVariant::Error))}
        </div>
    }
}

fn toast_message(message: String, variant: ToastVariant) -> impl IntoView {
    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg",
            variant.classes()
        )>
            <span class="text-lg">{variant.icon()}</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}
