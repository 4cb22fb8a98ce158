//! Directory pages
//!
//! Every page is scoped to the currently selected location.

use crate::location::use_location;
use dioxus::prelude::*;

#[component]
fn DirectoryPage(title: String, description: String) -> Element {
    let location = use_location().location();

    rsx! {
        section {
            class: "max-w-3xl mx-auto w-full p-6 space-y-3 animate-fade-in-up",

            h1 { class: "text-2xl font-semibold text-[var(--text-primary)]", "{title}" }
            p { class: "text-sm text-[var(--text-secondary)]", "{description}" }

            match location {
                Some(location) => rsx! {
                    p { class: "text-xs text-[var(--text-tertiary)]", "Showing results for {location}" }
                },
                None => rsx! {
                    p { class: "text-xs text-[var(--text-tertiary)]", "No location selected" }
                },
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        DirectoryPage {
            title: "Campus Guide",
            description: "Hostels, restaurants, places to visit and social media around your campus.",
        }
    }
}

#[component]
pub fn Hostels() -> Element {
    rsx! {
        DirectoryPage { title: "Hostels", description: "Places to stay near campus." }
    }
}

#[component]
pub fn Restaurants() -> Element {
    rsx! {
        DirectoryPage { title: "Restaurants", description: "Places to eat near campus." }
    }
}

#[component]
pub fn PlacesToVisit() -> Element {
    rsx! {
        DirectoryPage { title: "Places to Visit", description: "Sights worth a trip." }
    }
}

#[component]
pub fn SocialMedia() -> Element {
    rsx! {
        DirectoryPage { title: "Social Media", description: "Campus communities and pages." }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        section {
            class: "flex flex-col items-center justify-center py-16 gap-2 text-[var(--text-tertiary)]",
            h1 { class: "text-lg font-semibold text-[var(--text-primary)]", "Page not found" }
            span { class: "text-xs font-mono", "/{path}" }
        }
    }
}
