//! Widget lifecycle owner.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page component holds one [`MapHost`] per mounted map view. The host
//! acquires a widget from its [`MapBackend`] on `mount` and releases it on
//! `unmount` or drop, so at most one instance is live per host at a time.
//!
//! LIFECYCLE
//! =========
//! `mount` on an empty host creates the widget, adds tiles and markers, wires
//! hover, and bumps the generation. If any step fails the partial widget is
//! destroyed before the error is returned. `mount` on a live host does
//! nothing. Hover events are routed by marker id into [`PopupStates`] and only
//! transitions reach the widget.

use std::rc::Rc;

use crate::layout::{BASE_TILES, MapLayout, PopupTrigger};
use crate::popup::{PopupState, PopupStates, PopupTransition};
use crate::widget::{Hover, HoverHandler, MapBackend, MapWidget, MarkerId, WidgetError};

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

/// Result of a mount request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountOutcome {
    /// A fresh widget was created with this many markers.
    Created { markers: usize },
    /// An instance is already live; nothing was done.
    AlreadyMounted,
}

/// The live widget plus the bookkeeping derived from its layout.
struct LiveMap<W> {
    widget: W,
    markers: Vec<MarkerId>,
    popups: PopupStates,
}

impl<W> LiveMap<W> {
    fn index_of(&self, marker: MarkerId) -> Option<usize> {
        self.markers.iter().position(|m| *m == marker)
    }
}

/// Owns at most one mapping-widget instance.
///
/// `mount` acquires, `unmount` releases, and dropping the host releases any
/// instance still live. A second `mount` while an instance is live is a no-op,
/// and a `mount` after `unmount` always builds a fresh instance.
pub struct MapHost<B: MapBackend> {
    backend: B,
    layout: MapLayout,
    live: Option<LiveMap<B::Widget>>,
    generation: u64,
}

impl<B: MapBackend> MapHost<B> {
    #[must_use]
    pub fn new(backend: B, layout: MapLayout) -> Self {
        Self { backend, layout, live: None, generation: 0 }
    }

    /// Create the widget in `container` and seed it from the layout.
    ///
    /// Hover events for hover-driven markers are reported to `on_hover`, which
    /// is expected to route them back into [`MapHost::pointer`].
    ///
    /// # Errors
    ///
    /// Returns the first [`WidgetError`] raised by the library. A widget that
    /// was created before the failure is destroyed before returning, so the
    /// host stays unmounted.
    pub fn mount(&mut self, container: &B::Container, on_hover: &HoverHandler) -> Result<MountOutcome, WidgetError> {
        if self.live.is_some() {
            return Ok(MountOutcome::AlreadyMounted);
        }

        let (center, zoom) = self.layout.view();
        let mut widget = self.backend.create(container, center, zoom)?;
        self.generation += 1;

        match populate(&mut widget, self.layout, on_hover) {
            Ok((markers, popups)) => {
                let count = markers.len();
                self.live = Some(LiveMap { widget, markers, popups });
                Ok(MountOutcome::Created { markers: count })
            }
            Err(err) => {
                widget.destroy();
                Err(err)
            }
        }
    }

    /// Feed a hover edge for `marker` through its popup state machine.
    ///
    /// The widget is only told to open or close on a real transition.
    /// Events for unknown markers, or while unmounted, are ignored.
    ///
    /// # Errors
    ///
    /// Returns the library's error if opening or closing the popup fails.
    pub fn pointer(&mut self, marker: MarkerId, hover: Hover) -> Result<PopupTransition, WidgetError> {
        let Some(live) = self.live.as_mut() else {
            return Ok(PopupTransition::Unchanged);
        };
        let Some(index) = live.index_of(marker) else {
            return Ok(PopupTransition::Unchanged);
        };
        let transition = live.popups.apply(index, hover).unwrap_or(PopupTransition::Unchanged);
        match transition {
            PopupTransition::Opened => live.widget.open_popup(marker)?,
            PopupTransition::Closed => live.widget.close_popup(marker)?,
            PopupTransition::Unchanged => {}
        }
        Ok(transition)
    }

    /// Destroy the live widget and clear the reference.
    ///
    /// Returns whether an instance was live.
    pub fn unmount(&mut self) -> bool {
        match self.live.take() {
            Some(mut live) => {
                live.widget.destroy();
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.live.is_some()
    }

    #[must_use]
    pub fn layout(&self) -> MapLayout {
        self.layout
    }

    /// Number of widget instances created over the host's lifetime.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Markers on the live widget, in placement order.
    #[must_use]
    pub fn markers(&self) -> &[MarkerId] {
        self.live.as_ref().map(|live| live.markers.as_slice()).unwrap_or_default()
    }

    #[must_use]
    pub fn popup_state(&self, marker: MarkerId) -> Option<PopupState> {
        let live = self.live.as_ref()?;
        live.popups.get(live.index_of(marker)?)
    }

    /// Markers whose popup is currently open.
    #[must_use]
    pub fn open_popups(&self) -> Vec<MarkerId> {
        let Some(live) = self.live.as_ref() else {
            return Vec::new();
        };
        live.popups
            .open_indices()
            .into_iter()
            .filter_map(|i| live.markers.get(i).copied())
            .collect()
    }
}

impl<B: MapBackend> Drop for MapHost<B> {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn populate<W: MapWidget>(
    widget: &mut W,
    layout: MapLayout,
    on_hover: &HoverHandler,
) -> Result<(Vec<MarkerId>, PopupStates), WidgetError> {
    widget.add_tile_layer(&BASE_TILES)?;

    let plans = layout.markers();
    let mut markers = Vec::with_capacity(plans.len());
    let mut popups = PopupStates::new();
    for plan in plans {
        let id = widget.add_marker(plan.at, plan.icon.as_ref())?;
        widget.bind_popup(id, &plan.popup_html, plan.popup_options)?;
        match plan.trigger {
            PopupTrigger::Hover => {
                widget.on_hover(id, Rc::clone(on_hover))?;
                popups.push(PopupState::Closed, true);
            }
            PopupTrigger::OpenOnMount => {
                widget.open_popup(id)?;
                popups.push(PopupState::Open, false);
            }
        }
        markers.push(id);
    }
    Ok((markers, popups))
}
