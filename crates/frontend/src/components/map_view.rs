use dioxus::logger::tracing;
use dioxus::prelude::*;
use poshujan_shared::boundary::{parse_boundaries, BoundaryStatus};
use poshujan_shared::map::BOUNDARY_URL;

use crate::api;
use crate::leaflet::{Layer, LeafletMap};
use crate::markers::{plan_markers, MarkerPlan};
use crate::state::{AppState, Catalog};

const MAP_CONTAINER_ID: &str = "map";

/// Markers currently drawn on the map.
#[derive(Debug, Default)]
struct ActiveMarkers {
    layers: Vec<Layer>,
}

impl ActiveMarkers {
    /// Swap every drawn marker for the ones in `plan`, then fit the view if asked.
    fn replace(&mut self, view: &LeafletMap, plan: &MarkerPlan) {
        for layer in self.layers.drain(..) {
            view.remove(&layer);
        }
        self.layers
            .extend(plan.markers.iter().map(|spec| view.add_marker(spec)));
        if let Some(bounds) = &plan.fit {
            if let Err(e) = view.fit(bounds) {
                tracing::warn!(error = %e, "Could not fit map to markers");
            }
        }
    }
}

/// Fetch the provincial outlines and draw them. Runs independently of the
/// markers; a failure only leaves the outlines off.
async fn load_boundaries(view: LeafletMap, mut status: Signal<BoundaryStatus>) {
    let result = match api::fetch_text(BOUNDARY_URL).await {
        Ok(text) => parse_boundaries(&text),
        Err(e) => Err(format!("Boundary request failed: {}", e)),
    };

    if let Ok(features) = &result {
        for feature in features {
            if let Err(e) = view.add_boundary(feature) {
                tracing::warn!(name = ?feature.name, error = %e, "Skipping boundary feature");
            }
        }
    }

    let next = BoundaryStatus::from_result(&result);
    log_status(&next);
    status.set(next);
}

fn log_status(status: &BoundaryStatus) {
    match status {
        BoundaryStatus::Loaded { features } => {
            tracing::info!(count = *features, "Boundary layer loaded")
        }
        BoundaryStatus::Failed(reason) => {
            tracing::warn!(%reason, "Boundary layer unavailable")
        }
        BoundaryStatus::Loading => {}
    }
}

/// Text of the corner hint, shown only when the outlines failed to load.
fn failure_hint(status: &BoundaryStatus) -> Option<String> {
    match status {
        BoundaryStatus::Failed(reason) => Some(reason.clone()),
        _ => None,
    }
}

#[component]
pub fn MapView() -> Element {
    let app = use_context::<Signal<AppState>>();
    let catalog = use_context::<Signal<Catalog>>();

    let mut leaflet_map = use_signal(|| None::<LeafletMap>);
    let mut active_markers = use_signal(ActiveMarkers::default);
    let boundary_status = use_signal(BoundaryStatus::default);

    // Only filter actions should redraw; toast and session updates must not refit.
    let current_filter = use_memo(move || {
        let state = app.read();
        (state.filter.clone(), state.redraw_counter)
    });

    // Runs once the container is mounted.
    use_effect(move || {
        if leaflet_map.peek().is_some() {
            return;
        }
        match LeafletMap::create(MAP_CONTAINER_ID) {
            Ok(view) => {
                spawn(load_boundaries(view.clone(), boundary_status));
                leaflet_map.set(Some(view));
            }
            Err(e) => tracing::error!(error = %e, "Could not create the map"),
        }
    });

    use_effect(move || {
        let (post_filter, _redraw) = current_filter.read().clone();
        let catalog = catalog.read();
        let map_ref = leaflet_map.read();
        let Some(view) = map_ref.as_ref() else {
            return;
        };
        let plan = plan_markers(&catalog.posts, &post_filter);
        tracing::debug!(
            district = %post_filter.district,
            subdistrict = %post_filter.subdistrict,
            shown = plan.markers.len(),
            "Rendering markers"
        );
        active_markers.write().replace(view, &plan);
    });

    let boundary_failure = failure_hint(&boundary_status.read());

    rsx! {
        div { class: "map-wrapper",
            div { id: MAP_CONTAINER_ID, class: "map" }
            if let Some(reason) = boundary_failure {
                div {
                    class: "map-status",
                    title: "{reason}",
                    "Batas wilayah tidak dapat dimuat"
                }
            }
        }
    }
}
