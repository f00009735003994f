//! What a mount places on the map.
//!
//! [`MapLayout::Landmarks`] is the full feature: one hover-driven marker per
//! point of interest. [`MapLayout::Greeting`] is the minimal ancestor kept
//! for comparison: one default marker whose greeting popup opens at mount.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::consts::{
    DEFAULT_CENTER, DEFAULT_ZOOM, GREETING_POPUP_HTML, GREETING_POSITION, MARKER_ICON_ANCHOR, MARKER_ICON_SIZE,
    MARKER_ICON_URL, MARKER_POPUP_ANCHOR, OSM_ATTRIBUTION, OSM_TILE_URL, POI_CAPTION,
};
use crate::geo::{LatLng, POINTS_OF_INTEREST, PointOfInterest};
use crate::widget::{MarkerIcon, PopupOptions, TileLayerSpec};

/// The custom icon used by point-of-interest markers.
pub const POI_ICON: MarkerIcon = MarkerIcon {
    url: MARKER_ICON_URL,
    size: MARKER_ICON_SIZE,
    anchor: MARKER_ICON_ANCHOR,
    popup_anchor: MARKER_POPUP_ANCHOR,
};

/// The base tile layer for every layout.
pub const BASE_TILES: TileLayerSpec = TileLayerSpec { url_template: OSM_TILE_URL, attribution: OSM_ATTRIBUTION };

/// How a marker's popup becomes visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupTrigger {
    /// Opened on pointer-enter, closed on pointer-leave.
    Hover,
    /// Opened once at mount, then left to the library.
    OpenOnMount,
}

/// One marker to place at mount.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPlan {
    pub at: LatLng,
    pub icon: Option<MarkerIcon>,
    pub popup_html: String,
    pub popup_options: PopupOptions,
    pub trigger: PopupTrigger,
}

/// Which marker set a mount uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapLayout {
    #[default]
    Landmarks,
    Greeting,
}

impl MapLayout {
    /// Parse the `layout` query value. Anything but `greeting` is the default.
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("greeting") => Self::Greeting,
            _ => Self::Landmarks,
        }
    }

    /// Stable name, the inverse of [`MapLayout::from_query`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Landmarks => "landmarks",
            Self::Greeting => "greeting",
        }
    }

    /// Initial center and zoom.
    #[must_use]
    pub fn view(self) -> (LatLng, u8) {
        (DEFAULT_CENTER, DEFAULT_ZOOM)
    }

    /// Markers to place, in order.
    #[must_use]
    pub fn markers(self) -> Vec<MarkerPlan> {
        match self {
            Self::Landmarks => POINTS_OF_INTEREST.iter().map(poi_marker).collect(),
            Self::Greeting => vec![MarkerPlan {
                at: GREETING_POSITION,
                icon: None,
                popup_html: GREETING_POPUP_HTML.to_owned(),
                popup_options: PopupOptions::default(),
                trigger: PopupTrigger::OpenOnMount,
            }],
        }
    }
}

fn poi_marker(poi: &PointOfInterest) -> MarkerPlan {
    MarkerPlan {
        at: poi.coordinates,
        icon: Some(POI_ICON),
        popup_html: poi_popup_html(poi.name),
        popup_options: PopupOptions::HOVER,
        trigger: PopupTrigger::Hover,
    }
}

/// Popup body for a point of interest: bold name over the fixed caption.
#[must_use]
pub fn poi_popup_html(name: &str) -> String {
    format!("<b>{}</b><br>{POI_CAPTION}", escape_html(name))
}

/// Escape the five HTML-significant characters.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
