//! Clinics Page
//!
//! The single page of the CRM: clinic list, refresh, and the creation modal.

use leptos::*;

use crate::api;
use crate::components::{CardGridSkeleton, ClinicCard, ClinicForm};
use crate::state::global::{show_empty_state, GlobalState};

/// Clinic list page
#[component]
pub fn Clinics() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (show_create, set_show_create) = create_signal(false);

    // Extract the signals the view reads
    let clinics_signal = state.clinics;
    let loading = state.loading;
    let loaded = state.loaded;
    let load_error = state.load_error;

    // Fetch the list on mount and again on every reload request. Reloads are
    // not sequenced; when two overlap, the last response received wins.
    let state_for_effect = state.clone();
    create_effect(move |_| {
        // Subscribe to the reload trigger; the fetch itself runs untracked
        let _epoch = state_for_effect.reload_epoch.get();

        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);

            match api::fetch_clinics().await {
                Ok(clinics) => {
                    state.clinics.set(clinics);
                    state.loaded.set(true);
                    state.load_error.set(None);
                }
                Err(message) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch clinics: {}", message).into(),
                    );
                    // Previous list stays on screen; the banner explains why
                    state.load_error.set(Some(message.clone()));
                    state.show_error(&message);
                }
            }

            state.loading.set(false);
        });
    });

    let state_for_refresh = state.clone();

    view! {
        <div class="space-y-8">
            // Header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Clínicas"</h1>
                    <p class="text-gray-400 mt-1">
                        "Bienvenido David. Aquí gestionamos las clínicas y especialistas."
                    </p>
                </div>

                <div class="flex items-center space-x-2">
                    <button
                        on:click=move |_| state_for_refresh.request_reload()
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                    >
                        "Actualizar"
                    </button>
                    <button
                        on:click=move |_| set_show_create.set(true)
                        class="px-4 py-2 bg-black hover:bg-gray-900 rounded-xl font-medium transition-colors"
                    >
                        "+ Añadir clínica"
                    </button>
                </div>
            </div>

            // Creation modal
            {move || {
                if show_create.get() {
                    view! {
                        <ClinicForm on_close=move || set_show_create.set(false) />
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            // Load failure banner, kept until the next successful load
            {move || {
                load_error.get().map(|message| view! {
                    <div class="bg-red-900/40 border border-red-700 text-red-300 rounded-lg px-4 py-3">
                        {message}
                    </div>
                })
            }}

            // Clinic list
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                {move || {
                    let clinics = clinics_signal.get();

                    if clinics.is_empty() && loading.get() {
                        view! { <CardGridSkeleton /> }.into_view()
                    } else if show_empty_state(loaded.get(), loading.get(), clinics.len()) {
                        view! {
                            <div class="col-span-full text-center py-12">
                                <p class="text-gray-400">"No hay clínicas todavía."</p>
                            </div>
                        }.into_view()
                    } else {
                        clinics.into_iter().map(|clinic| {
                            view! { <ClinicCard clinic=clinic /> }
                        }).collect_view()
                    }
                }}
            </div>

            <ManagementAreas />
        </div>
    }
}

/// Management areas of the operation; only clinics are live today.
#[component]
fn ManagementAreas() -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Áreas de gestión"</h2>
            <ul class="list-disc ml-6 text-gray-400 space-y-1">
                <li class="text-white">"Clínicas y especialistas"</li>
                <li>"Visitas comerciales"</li>
                <li>"Pedidos y margen"</li>
                <li>"Productos: PRP, MCT, Biotech, Bliss"</li>
            </ul>
        </section>
    }
}
