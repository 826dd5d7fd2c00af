use dioxus::prelude::*;
use poshujan_shared::filter;

use crate::state::{AppState, Catalog};

/// District and sub-district selectors plus the reset button.
#[component]
pub fn FilterBar() -> Element {
    let mut app = use_context::<Signal<AppState>>();
    let catalog = use_context::<Signal<Catalog>>();

    let (district_options, subdistrict_options) = {
        let catalog = catalog.read();
        (
            filter::district_options(&catalog.index),
            app.read().subdistrict_options(&catalog.index),
        )
    };
    let current = app.read().filter.clone();

    rsx! {
        div { class: "panel filter-bar",
            select {
                id: "filterKabupaten",
                value: "{current.district}",
                onchange: move |evt: Event<FormData>| {
                    app.write().select_district(evt.value());
                },
                for opt in &district_options {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: current.district == opt.value,
                        "{opt.label}"
                    }
                }
            }
            select {
                id: "filterKecamatan",
                value: "{current.subdistrict}",
                onchange: move |evt: Event<FormData>| {
                    app.write().select_subdistrict(evt.value());
                },
                for opt in &subdistrict_options {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: current.subdistrict == opt.value,
                        "{opt.label}"
                    }
                }
            }
            button {
                id: "resetFilterBtn",
                class: "secondary",
                onclick: move |_| app.write().reset_filters(),
                "Reset"
            }
        }
    }
}
