//! Route table

use crate::ui::pages::{Home, Hostels, NotFound, PlacesToVisit, Restaurants, SocialMedia};
use crate::ui::Layout;
use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},
        #[route("/hostels")]
        Hostels {},
        #[route("/restaurants")]
        Restaurants {},
        #[route("/places-to-visit")]
        PlacesToVisit {},
        #[route("/social-media")]
        SocialMedia {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Entries shown in the navigation bar
    pub fn nav_items() -> [(Route, &'static str); 5] {
        [
            (Route::Home {}, "Home"),
            (Route::Hostels {}, "Hostels"),
            (Route::Restaurants {}, "Restaurants"),
            (Route::PlacesToVisit {}, "Places to Visit"),
            (Route::SocialMedia {}, "Social Media"),
        ]
    }
}
