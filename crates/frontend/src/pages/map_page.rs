use dioxus::prelude::*;

use crate::components::filter_bar::FilterBar;
use crate::components::map_view::MapView;

#[component]
pub fn MapPage() -> Element {
    rsx! {
        div { class: "map-page",
            FilterBar {}
            MapView {}
        }
    }
}
