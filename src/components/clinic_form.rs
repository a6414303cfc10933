//! Clinic Form Component
//!
//! Modal form for registering a new clinic.

use leptos::*;

use crate::api;
use crate::state::form::ClinicDraft;
use crate::state::global::GlobalState;

/// Modal creation form.
///
/// Field state lives inside the modal, so closing it discards the draft.
/// Closing (cancel, the corner button, or a backdrop click) is ignored while
/// a submission is in flight.
#[component]
pub fn ClinicForm(on_close: impl Fn() + 'static + Clone) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());
    let (specialty, set_specialty) = create_signal(String::new());
    let (city, set_city) = create_signal(String::new());
    let (phone, set_phone) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (form_error, set_form_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    // Clone on_close for each place it's used
    let on_close_for_submit = on_close.clone();
    let on_close_for_x = on_close.clone();
    let on_close_for_backdrop = on_close.clone();
    let on_close_for_cancel = on_close;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if submitting.get() {
            return;
        }

        let draft = ClinicDraft {
            name: name.get(),
            specialty: specialty.get(),
            city: city.get(),
            phone: phone.get(),
            email: email.get(),
        };

        // A rejected draft never reaches the network
        let clinic = match draft.validate() {
            Ok(clinic) => clinic,
            Err(message) => {
                set_form_error.set(Some(message));
                return;
            }
        };

        set_form_error.set(None);
        set_submitting.set(true);

        let state_clone = state.clone();
        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            match api::create_clinic(&clinic).await {
                Ok(()) => {
                    state_clone.show_success("Clínica guardada");
                    state_clone.request_reload();
                    set_submitting.set(false);
                    on_close_inner();
                }
                Err(message) => {
                    // Keep the entered data; the operator can correct and retry
                    set_form_error.set(Some(message));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div
            class="fixed inset-0 bg-black/50 flex items-center justify-center z-50"
            on:click=move |_| {
                if !submitting.get() {
                    on_close_for_backdrop();
                }
            }
        >
            <div
                class="bg-gray-800 rounded-xl p-6 w-full max-w-md mx-4"
                on:click=move |ev| ev.stop_propagation()
            >
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-xl font-semibold">"Nueva clínica"</h2>
                    <button
                        on:click=move |_| {
                            if !submitting.get() {
                                on_close_for_x();
                            }
                        }
                        disabled=move || submitting.get()
                        class="text-gray-400 hover:text-white disabled:text-gray-600"
                    >
                        "✕"
                    </button>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    <TextField label="Nombre" placeholder="p. ej. Clínica Sol"
                        value=name set_value=set_name />
                    <TextField label="Especialidad" placeholder="p. ej. Medicina estética"
                        value=specialty set_value=set_specialty />
                    <TextField label="Ciudad" placeholder="p. ej. Andorra la Vella"
                        value=city set_value=set_city />
                    <TextField label="Teléfono" placeholder="+376 ..."
                        value=phone set_value=set_phone />
                    <TextField label="Email" placeholder="contacto@clinica.ad"
                        value=email set_value=set_email />

                    // Validation or store failure, shown next to the data it refers to
                    {move || {
                        form_error.get().map(|message| view! {
                            <p class="text-red-400 text-sm">{message}</p>
                        })
                    }}

                    // Buttons
                    <div class="flex space-x-3 pt-4">
                        <button
                            type="button"
                            on:click=move |_| {
                                if !submitting.get() {
                                    on_close_for_cancel();
                                }
                            }
                            disabled=move || submitting.get()
                            class="flex-1 px-4 py-3 bg-gray-700 hover:bg-gray-600 disabled:bg-gray-700
                                   rounded-lg font-medium transition-colors"
                        >
                            "Cancelar"
                        </button>
                        <button
                            type="submit"
                            disabled=move || submitting.get()
                            class="flex-1 px-4 py-3 bg-black hover:bg-gray-900 disabled:bg-gray-600
                                   rounded-xl font-medium transition-colors"
                        >
                            {move || if submitting.get() { "Guardando..." } else { "Guardar" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[component]
fn TextField(
    label: &'static str,
    placeholder: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}
