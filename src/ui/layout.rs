//! Application shell

use crate::app::AppState;
use crate::routes::Route;
use crate::ui::LocationSelector;
use dioxus::prelude::*;

/// Navigation, location picker and the routed page.
#[component]
pub fn Layout() -> Element {
    let app_state = use_context::<AppState>();
    let options = app_state.settings.read().selectable_locations.clone();

    rsx! {
        div {
            class: "flex flex-col h-screen bg-[var(--bg-primary)] text-[var(--text-primary)]",

            header {
                class: "flex-none flex items-center justify-between px-6 py-3 border-b border-[var(--border-subtle)]",

                nav {
                    class: "flex gap-1",
                    for (route, label) in Route::nav_items() {
                        Link {
                            class: "py-2 px-3 rounded-lg text-sm font-medium text-[var(--text-secondary)] hover:text-[var(--text-primary)]",
                            active_class: "text-[var(--accent-primary)] bg-[var(--accent-primary-10)]",
                            to: route,
                            "{label}"
                        }
                    }
                }

                LocationSelector { options }
            }

            main {
                class: "flex-1 overflow-y-auto scrollbar-thin",
                Outlet::<Route> {}
            }
        }
    }
}
