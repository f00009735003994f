//! Map widget lifecycle engine for the points-of-interest map.
//!
//! This crate owns exactly one mapping-widget instance per mount: it creates
//! the widget at a fixed view, seeds it with the tile layer and markers for a
//! [`layout::MapLayout`], drives hover popups through an explicit per-marker
//! state machine, and destroys the widget on unmount (or drop). The mapping
//! library itself is an external collaborator reached only through the
//! [`widget::MapBackend`] / [`widget::MapWidget`] capability traits.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`host`] | [`host::MapHost`], the mount/unmount lifecycle owner |
//! | [`widget`] | Capability traits and widget value types |
//! | [`layout`] | What a mount places on the map |
//! | [`popup`] | Per-marker hover popup state machine |
//! | [`geo`] | Coordinates and the fixed points of interest |
//! | `leaflet` | `wasm-bindgen` backend over the Leaflet global `L` (feature `leaflet`) |
//! | [`consts`] | Fixed view, tile source, icon, and captions |

pub mod consts;
pub mod geo;
pub mod host;
pub mod layout;
#[cfg(feature = "leaflet")]
pub mod leaflet;
pub mod popup;
pub mod widget;
