//! Capability contract between the lifecycle engine and a mapping library.
//!
//! DESIGN
//! ======
//! The engine never touches library internals. A [`MapBackend`] creates a
//! widget bound to a container; the resulting [`MapWidget`] exposes only the
//! operations the app needs (tiles, markers, popups, hover wiring, destroy).

use std::rc::Rc;

use crate::geo::LatLng;

/// Opaque handle to a marker placed on a widget, in placement order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(pub usize);

/// Pointer hover edge reported for a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hover {
    /// Pointer entered the marker.
    Enter,
    /// Pointer left the marker.
    Leave,
}

/// Callback invoked by the widget when a marker's hover state changes.
pub type HoverHandler = Rc<dyn Fn(MarkerId, Hover)>;

/// Base tile layer source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayerSpec {
    pub url_template: &'static str,
    pub attribution: &'static str,
}

/// Custom marker icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerIcon {
    pub url: &'static str,
    pub size: (u32, u32),
    pub anchor: (u32, u32),
    pub popup_anchor: (i32, i32),
}

/// Popup behavior flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupOptions {
    /// Render the library's close button.
    pub close_button: bool,
    /// Close this popup when another one opens.
    pub auto_close: bool,
    /// Keep the library's click and keypress toggles on the marker.
    pub click_toggle: bool,
}

impl PopupOptions {
    /// Visibility driven solely by hover: no close button, no auto-close,
    /// no click toggle.
    pub const HOVER: Self = Self { close_button: false, auto_close: false, click_toggle: false };
}

impl Default for PopupOptions {
    fn default() -> Self {
        Self { close_button: true, auto_close: true, click_toggle: true }
    }
}

/// Failure reported by the mapping library.
///
/// These are surfaced to the caller and logged; the engine never retries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    #[error("map library unavailable: {0}")]
    Unavailable(String),
    #[error("map call `{op}` failed: {message}")]
    Call { op: &'static str, message: String },
}

/// A live mapping-widget instance.
pub trait MapWidget {
    /// Attach a base tile layer with attribution.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Call`] if the library rejects the layer.
    fn add_tile_layer(&mut self, layer: &TileLayerSpec) -> Result<(), WidgetError>;

    /// Place a marker, optionally with a custom icon.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Call`] if the library rejects the marker.
    fn add_marker(&mut self, at: LatLng, icon: Option<&MarkerIcon>) -> Result<MarkerId, WidgetError>;

    /// Bind HTML popup content to a marker without opening it.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Call`] for unknown markers or library failures.
    fn bind_popup(&mut self, marker: MarkerId, html: &str, options: PopupOptions) -> Result<(), WidgetError>;

    /// Open a marker's bound popup.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Call`] for unknown markers or library failures.
    fn open_popup(&mut self, marker: MarkerId) -> Result<(), WidgetError>;

    /// Close a marker's bound popup.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Call`] for unknown markers or library failures.
    fn close_popup(&mut self, marker: MarkerId) -> Result<(), WidgetError>;

    /// Report pointer enter/leave on a marker to `handler`.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Call`] for unknown markers or library failures.
    fn on_hover(&mut self, marker: MarkerId, handler: HoverHandler) -> Result<(), WidgetError>;

    /// Tear the instance down. Must be idempotent.
    fn destroy(&mut self);
}

/// Factory for widgets bound to a container element.
pub trait MapBackend {
    type Container: ?Sized;
    type Widget: MapWidget;

    /// Create a widget centered at `center` with `zoom`.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Unavailable`] if the library cannot create a map.
    fn create(&mut self, container: &Self::Container, center: LatLng, zoom: u8) -> Result<Self::Widget, WidgetError>;
}
