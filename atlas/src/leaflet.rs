//! [`MapBackend`] over the Leaflet global `L`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leaflet is loaded by the page shell as a plain script, so the bindings
//! below target the global namespace rather than an ES module. Marker event
//! closures are owned by [`LeafletWidget`] and dropped when it is destroyed.

use std::rc::Rc;

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::geo::LatLng;
use crate::widget::{
    Hover, HoverHandler, MapBackend, MapWidget, MarkerIcon, MarkerId, PopupOptions, TileLayerSpec, WidgetError,
};

#[wasm_bindgen]
extern "C" {
    /// `L.Map`
    #[wasm_bindgen(js_namespace = L, js_name = Map)]
    type LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn new_map(container: &HtmlElement) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(catch, method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &Array, zoom: f64) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method)]
    fn remove(this: &LeafletMap) -> LeafletMap;
}

#[wasm_bindgen]
extern "C" {
    /// `L.TileLayer`
    #[wasm_bindgen(js_namespace = L, js_name = TileLayer)]
    type LeafletTileLayer;

    #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
    fn new_tile_layer(url_template: &str, options: &Object) -> Result<LeafletTileLayer, JsValue>;

    #[wasm_bindgen(catch, method, js_name = addTo)]
    fn add_to(this: &LeafletTileLayer, map: &LeafletMap) -> Result<LeafletTileLayer, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    /// `L.Icon`
    #[wasm_bindgen(js_namespace = L, js_name = Icon)]
    type LeafletIcon;

    #[wasm_bindgen(catch, js_namespace = L, js_name = icon)]
    fn new_icon(options: &Object) -> Result<LeafletIcon, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    /// `L.Marker`
    #[wasm_bindgen(js_namespace = L, js_name = Marker)]
    type LeafletMarker;

    #[wasm_bindgen(catch, js_namespace = L, js_name = marker)]
    fn new_marker(at: &Array, options: &Object) -> Result<LeafletMarker, JsValue>;

    #[wasm_bindgen(catch, method, js_name = addTo)]
    fn add_to(this: &LeafletMarker, map: &LeafletMap) -> Result<LeafletMarker, JsValue>;

    #[wasm_bindgen(catch, method, js_name = bindPopup)]
    fn bind_popup(this: &LeafletMarker, content: &str, options: &Object) -> Result<LeafletMarker, JsValue>;

    #[wasm_bindgen(catch, method, js_name = openPopup)]
    fn open_popup(this: &LeafletMarker) -> Result<LeafletMarker, JsValue>;

    #[wasm_bindgen(catch, method, js_name = closePopup)]
    fn close_popup(this: &LeafletMarker) -> Result<LeafletMarker, JsValue>;

    #[wasm_bindgen(catch, method, js_name = on)]
    fn on(this: &LeafletMarker, event: &str, listener: &Function) -> Result<LeafletMarker, JsValue>;

    /// Removes every listener for `event`, including the ones `bindPopup` adds.
    #[wasm_bindgen(catch, method, js_name = off)]
    fn off(this: &LeafletMarker, event: &str) -> Result<LeafletMarker, JsValue>;
}

/// Creates Leaflet maps in a container element.
#[derive(Debug, Default, Clone, Copy)]
pub struct LeafletBackend;

impl LeafletBackend {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MapBackend for LeafletBackend {
    type Container = HtmlElement;
    type Widget = LeafletWidget;

    fn create(&mut self, container: &HtmlElement, center: LatLng, zoom: u8) -> Result<LeafletWidget, WidgetError> {
        let map = new_map(container).map_err(|e| WidgetError::Unavailable(describe(&e)))?;
        let mut widget = LeafletWidget { map, markers: Vec::new(), listeners: Vec::new(), destroyed: false };
        if let Err(e) = widget.map.set_view(&lat_lng(center), f64::from(zoom)) {
            widget.destroy();
            return Err(call_error("setView", &e));
        }
        Ok(widget)
    }
}

/// One live `L.Map` and the markers placed on it.
pub struct LeafletWidget {
    map: LeafletMap,
    markers: Vec<LeafletMarker>,
    listeners: Vec<Closure<dyn FnMut()>>,
    destroyed: bool,
}

impl LeafletWidget {
    fn marker(&self, id: MarkerId, op: &'static str) -> Result<&LeafletMarker, WidgetError> {
        self.markers
            .get(id.0)
            .ok_or_else(|| WidgetError::Call { op, message: format!("no marker {}", id.0) })
    }

    fn listen(
        &mut self,
        id: MarkerId,
        event: &'static str,
        hover: Hover,
        handler: HoverHandler,
    ) -> Result<(), WidgetError> {
        let closure = Closure::<dyn FnMut()>::new(move || handler(id, hover));
        self.marker(id, "on")?
            .on(event, closure.as_ref().unchecked_ref())
            .map_err(|e| call_error("on", &e))?;
        self.listeners.push(closure);
        Ok(())
    }
}

impl MapWidget for LeafletWidget {
    fn add_tile_layer(&mut self, layer: &TileLayerSpec) -> Result<(), WidgetError> {
        let options = Object::new();
        set(&options, "attribution", &JsValue::from_str(layer.attribution), "tileLayer")?;
        new_tile_layer(layer.url_template, &options)
            .and_then(|tiles| tiles.add_to(&self.map))
            .map_err(|e| call_error("tileLayer", &e))?;
        Ok(())
    }

    fn add_marker(&mut self, at: LatLng, icon: Option<&MarkerIcon>) -> Result<MarkerId, WidgetError> {
        let options = Object::new();
        if let Some(icon) = icon {
            set(&options, "icon", &icon_object(icon)?, "marker")?;
        }
        let marker = new_marker(&lat_lng(at), &options)
            .and_then(|m| m.add_to(&self.map))
            .map_err(|e| call_error("marker", &e))?;
        self.markers.push(marker);
        Ok(MarkerId(self.markers.len() - 1))
    }

    fn bind_popup(&mut self, id: MarkerId, html: &str, options: PopupOptions) -> Result<(), WidgetError> {
        let js_options = Object::new();
        set(&js_options, "closeButton", &JsValue::from_bool(options.close_button), "bindPopup")?;
        set(&js_options, "autoClose", &JsValue::from_bool(options.auto_close), "bindPopup")?;
        let marker = self.marker(id, "bindPopup")?;
        marker.bind_popup(html, &js_options).map_err(|e| call_error("bindPopup", &e))?;
        if !options.click_toggle {
            // bindPopup wires click and Enter to toggle the popup.
            marker
                .off("click")
                .and_then(|m| m.off("keypress"))
                .map_err(|e| call_error("off", &e))?;
        }
        Ok(())
    }

    fn open_popup(&mut self, id: MarkerId) -> Result<(), WidgetError> {
        self.marker(id, "openPopup")?
            .open_popup()
            .map_err(|e| call_error("openPopup", &e))?;
        Ok(())
    }

    fn close_popup(&mut self, id: MarkerId) -> Result<(), WidgetError> {
        self.marker(id, "closePopup")?
            .close_popup()
            .map_err(|e| call_error("closePopup", &e))?;
        Ok(())
    }

    fn on_hover(&mut self, id: MarkerId, handler: HoverHandler) -> Result<(), WidgetError> {
        self.listen(id, "mouseover", Hover::Enter, Rc::clone(&handler))?;
        self.listen(id, "mouseout", Hover::Leave, handler)
    }

    fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.map.remove();
        self.markers.clear();
        self.listeners.clear();
    }
}

impl Drop for LeafletWidget {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn lat_lng(at: LatLng) -> Array {
    Array::of2(&JsValue::from_f64(at.lat), &JsValue::from_f64(at.lng))
}

fn pair<T: Into<f64>>(xy: (T, T)) -> Array {
    Array::of2(&JsValue::from_f64(xy.0.into()), &JsValue::from_f64(xy.1.into()))
}

fn icon_object(icon: &MarkerIcon) -> Result<JsValue, WidgetError> {
    let options = Object::new();
    set(&options, "iconUrl", &JsValue::from_str(icon.url), "icon")?;
    set(&options, "iconSize", &pair(icon.size), "icon")?;
    set(&options, "iconAnchor", &pair(icon.anchor), "icon")?;
    set(&options, "popupAnchor", &pair(icon.popup_anchor), "icon")?;
    new_icon(&options).map(JsValue::from).map_err(|e| call_error("icon", &e))
}

fn set(target: &Object, key: &str, value: &JsValue, op: &'static str) -> Result<(), WidgetError> {
    Reflect::set(target, &JsValue::from_str(key), value).map_err(|e| call_error(op, &e))?;
    Ok(())
}

fn call_error(op: &'static str, err: &JsValue) -> WidgetError {
    WidgetError::Call { op, message: describe(err) }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
