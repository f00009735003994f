//! Shared constants for the map widget.

use crate::geo::LatLng;

// ── View ────────────────────────────────────────────────────────

/// Initial map center.
pub const DEFAULT_CENTER: LatLng = LatLng::new(51.505, -0.09);

/// Initial zoom level.
pub const DEFAULT_ZOOM: u8 = 13;

// ── Tiles ───────────────────────────────────────────────────────

/// OpenStreetMap raster tile template.
pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Attribution required by the OpenStreetMap tile usage policy.
pub const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

// ── Markers ─────────────────────────────────────────────────────

/// URL of the custom marker icon, served from the site root.
pub const MARKER_ICON_URL: &str = "/marker-icon.svg";

/// Rendered icon size in pixels.
pub const MARKER_ICON_SIZE: (u32, u32) = (32, 32);

/// Icon pixel that sits on the marker coordinate (bottom center).
pub const MARKER_ICON_ANCHOR: (u32, u32) = (16, 32);

/// Popup offset relative to the icon anchor.
pub const MARKER_POPUP_ANCHOR: (i32, i32) = (0, -32);

/// Caption shown under a point's name in its hover popup.
pub const POI_CAPTION: &str = "Point of interest";

// ── Greeting layout ─────────────────────────────────────────────

/// Position of the single greeting marker.
pub const GREETING_POSITION: LatLng = LatLng::new(51.5, -0.09);

/// Popup content of the greeting marker.
pub const GREETING_POPUP_HTML: &str = "<b>¡Hola!</b><br>Este es un marcador.";
