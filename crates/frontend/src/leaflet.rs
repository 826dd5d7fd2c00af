//! Bindings to the handful of Leaflet calls the map uses.
//!
//! Leaflet itself is loaded from the page head (see `Dioxus.toml`), so every
//! constructor goes through the global `L` namespace. Options objects are
//! built as JSON and parsed on the JS side.

use js_sys::Array;
use poshujan_shared::boundary::BoundaryFeature;
use poshujan_shared::map::{self, Bounds};
use wasm_bindgen::prelude::*;

use crate::markers::MarkerSpec;

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    pub type Map;

    #[derive(Debug, Clone)]
    pub type Layer;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn create_map(container_id: &str) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &Map, center: &JsValue, zoom: f64);

    #[wasm_bindgen(method, js_name = fitBounds)]
    fn fit_bounds(this: &Map, bounds: &JsValue, options: &JsValue);

    #[wasm_bindgen(method, js_name = removeLayer)]
    fn remove_layer(this: &Map, layer: &Layer);

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn marker(lat_lng: &JsValue) -> Layer;

    #[wasm_bindgen(catch, js_namespace = L, js_name = geoJSON)]
    fn geo_json(data: &JsValue, options: &JsValue) -> Result<Layer, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, map: &Map);

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Layer, html: &str);

    #[wasm_bindgen(method, js_name = bindTooltip)]
    fn bind_tooltip(this: &Layer, text: &str, options: &JsValue);
}

fn lat_lng((lat, lng): (f64, f64)) -> JsValue {
    Array::of2(&JsValue::from_f64(lat), &JsValue::from_f64(lng)).into()
}

fn json_to_js(value: &serde_json::Value) -> Result<JsValue, String> {
    js_sys::JSON::parse(&value.to_string()).map_err(describe)
}

fn describe(err: JsValue) -> String {
    err.as_string()
        .or_else(|| {
            js_sys::JSON::stringify(&err)
                .ok()
                .and_then(|s| s.as_string())
        })
        .unwrap_or_else(|| "unknown JavaScript error".to_string())
}

/// Leaflet options for the OpenStreetMap base layer.
pub fn tile_options() -> serde_json::Value {
    serde_json::json!({
        "attribution": map::TILE_ATTRIBUTION,
        "subdomains": map::TILE_SUBDOMAINS,
        "maxZoom": map::TILE_MAX_ZOOM,
    })
}

/// Leaflet options for the boundary outlines: stroke only, no fill.
pub fn boundary_style() -> serde_json::Value {
    serde_json::json!({
        "style": {
            "color": map::BOUNDARY_COLOR,
            "weight": map::BOUNDARY_WEIGHT,
            "fillOpacity": 0,
        }
    })
}

/// `[[south, west], [north, east]]` plus the fixed padding.
pub fn fit_arguments(bounds: &Bounds) -> (serde_json::Value, serde_json::Value) {
    let (s, w) = bounds.south_west();
    let (n, e) = bounds.north_east();
    (
        serde_json::json!([[s, w], [n, e]]),
        serde_json::json!({ "padding": [map::FIT_PADDING_PX, map::FIT_PADDING_PX] }),
    )
}

/// A live map view bound to a container element.
#[derive(Debug, Clone)]
pub struct LeafletMap {
    map: Map,
}

impl LeafletMap {
    /// Create the view in `container_id`, centered on the region with the base tiles attached.
    pub fn create(container_id: &str) -> Result<Self, String> {
        let view = create_map(container_id).map_err(describe)?;
        view.set_view(&lat_lng((map::CENTER_LAT, map::CENTER_LNG)), map::INITIAL_ZOOM);
        tile_layer(map::TILE_URL, &json_to_js(&tile_options())?).add_to(&view);
        Ok(LeafletMap { map: view })
    }

    pub fn add_marker(&self, spec: &MarkerSpec) -> Layer {
        let layer = marker(&lat_lng((spec.lat, spec.lng)));
        layer.add_to(&self.map);
        layer.bind_popup(&spec.popup_html);
        layer
    }

    pub fn remove(&self, layer: &Layer) {
        self.map.remove_layer(layer);
    }

    pub fn fit(&self, bounds: &Bounds) -> Result<(), String> {
        let (corners, options) = fit_arguments(bounds);
        self.map
            .fit_bounds(&json_to_js(&corners)?, &json_to_js(&options)?);
        Ok(())
    }

    /// Draw one boundary outline, with a hover tooltip when the feature is named.
    pub fn add_boundary(&self, feature: &BoundaryFeature) -> Result<(), String> {
        let data = js_sys::JSON::parse(&feature.geojson).map_err(describe)?;
        let layer = geo_json(&data, &json_to_js(&boundary_style())?).map_err(describe)?;
        if let Some(name) = &feature.name {
            let tooltip = json_to_js(&serde_json::json!({ "permanent": false }))?;
            layer.bind_tooltip(name, &tooltip);
        }
        layer.add_to(&self.map);
        Ok(())
    }
}
