//! Clinic Card Component
//!
//! Displays a single clinic record from the list.

use leptos::*;

use crate::state::global::Clinic;

/// Single clinic list item
#[component]
pub fn ClinicCard(clinic: Clinic) -> impl IntoView {
    let name = clinic.display_name().to_string();
    let created = clinic.created_label();
    let specialty_color = specialty_color(clinic.specialty.as_deref());

    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 hover:border-gray-600 transition-colors">
            <div class="flex items-start justify-between">
                <div class="flex items-center space-x-2">
                    <h3 class="font-semibold">{name}</h3>
                    {clinic.specialty.clone().map(|specialty| view! {
                        <span class=format!("{} text-xs px-2 py-0.5 rounded-full text-white", specialty_color)>
                            {specialty}
                        </span>
                    })}
                </div>

                <span class="text-gray-500 text-sm">{created}</span>
            </div>

            <div class="flex flex-wrap items-center gap-x-4 gap-y-1 mt-4 text-sm text-gray-400">
                {clinic.city.clone().map(|city| view! {
                    <span>"📍 "{city}</span>
                })}
                {clinic.phone.clone().map(|phone| view! {
                    <span>"📞 "{phone}</span>
                })}
                {clinic.email.clone().map(|email| view! {
                    <span>"✉ "{email}</span>
                })}
            </div>
        </div>
    }
}

/// Badge color for the common specialties the sales team works with.
fn specialty_color(specialty: Option<&str>) -> &'static str {
    let Some(specialty) = specialty else {
        return "bg-gray-500";
    };

    let specialty = specialty.to_lowercase();
    if specialty.contains("estética") || specialty.contains("estetica") {
        "bg-purple-500"
    } else if specialty.contains("dermato") {
        "bg-blue-500"
    } else if specialty.contains("trauma") {
        "bg-green-500"
    } else if specialty.contains("fisio") {
        "bg-teal-500"
    } else {
        "bg-gray-500"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specialty_color_known_and_unknown() {
        assert_eq!(specialty_color(Some("Medicina Estética")), "bg-purple-500");
        assert_eq!(specialty_color(Some("Dermatología")), "bg-blue-500");
        assert_eq!(specialty_color(Some("Podología")), "bg-gray-500");
        assert_eq!(specialty_color(None), "bg-gray-500");
    }
}
