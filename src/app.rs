//! App Root Component
//!
//! Root component wiring global state, the page chrome, and the fatal
//! configuration screen.

use leptos::*;

use crate::api::StoreConfig;
use crate::components::{Nav, Toast};
use crate::pages::Clinics;
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    // Both store settings must be baked into the build; without them the
    // page cannot reach the hosted store at all.
    let config_error = StoreConfig::from_env().err();

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <Nav />

            <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                {match config_error {
                    Some(message) => view! { <ConfigError message=message /> }.into_view(),
                    None => view! { <Clinics /> }.into_view(),
                }}
            </main>

            <Footer />

            // Toast notifications
            <Toast />
        </div>
    }
}

/// Full-screen configuration failure, shown instead of the page
#[component]
fn ConfigError(message: String) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"⚠"</div>
            <h1 class="text-3xl font-bold mb-2">"Configuración incompleta"</h1>
            <p class="text-gray-400">{message}</p>
        </div>
    }
}

/// Footer with the record count and global loading indicator
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let clinics = state.clinics;
    let loading = state.loading;

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="text-gray-400">
                    {move || count_label(clinics.get().len())}
                </div>

                // Loading indicator
                {move || {
                    if loading.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-primary-400">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Cargando..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}

fn count_label(count: usize) -> String {
    if count == 1 {
        "1 clínica".to_string()
    } else {
        format!("{} clínicas", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_label_pluralizes() {
        assert_eq!(count_label(0), "0 clínicas");
        assert_eq!(count_label(1), "1 clínica");
        assert_eq!(count_label(7), "7 clínicas");
    }
}
