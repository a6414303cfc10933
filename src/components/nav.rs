//! Navigation Component
//!
//! Header bar with the brand. The application is a single page, so there
//! are no links to other routes.

use leptos::*;

/// Header bar component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <div class="flex items-center space-x-3">
                        <span class="text-2xl">"🏥"</span>
                        <span class="text-xl font-bold text-white">"CRM SBL Andorra"</span>
                    </div>

                    <span class="text-sm text-gray-400">"Suministros médicos"</span>
                </div>
            </div>
        </nav>
    }
}
