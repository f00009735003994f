//! Bridge component between Leptos and the imperative `atlas::host::MapHost`.
//!
//! ARCHITECTURE
//! ============
//! The engine lives in local stored state for the lifetime of the component.
//! An effect mounts it once the container node exists, marker hover events are
//! routed back into the engine's popup state machine, and cleanup destroys the
//! widget. Dropping the stored engine releases the widget as well, so a
//! remount always starts from a fresh instance.

use atlas::layout::MapLayout;
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use atlas::host::{MapHost as MapEngine, MountOutcome};
#[cfg(feature = "hydrate")]
use atlas::leaflet::LeafletBackend;
#[cfg(feature = "hydrate")]
use atlas::widget::HoverHandler;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

/// Map container with a widget bound to it while mounted.
#[component]
pub fn MapHost(layout: MapLayout) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let engine = StoredValue::new_local(MapEngine::new(LeafletBackend::new(), layout));

        let on_hover: HoverHandler = Rc::new(move |marker, hover| {
            if let Some(Err(e)) = engine.try_update_value(|host| host.pointer(marker, hover)) {
                log::warn!("popup {hover:?} on marker {} failed: {e}", marker.0);
            }
        });

        Effect::new(move || {
            let Some(element) = container.get() else {
                return;
            };
            match engine.try_update_value(|host| host.mount(element.as_ref(), &on_hover)) {
                Some(Ok(MountOutcome::Created { markers })) => {
                    log::info!("map mounted ({}) with {markers} markers", layout.name());
                }
                Some(Ok(MountOutcome::AlreadyMounted)) | None => {}
                Some(Err(e)) => log::error!("map initialization failed: {e}"),
            }
        });

        on_cleanup(move || {
            if engine.try_update_value(|host| host.unmount()) == Some(true) {
                log::info!("map unmounted");
            }
        });
    }

    view! {
        <div
            class="map-container"
            data-layout=layout.name()
            node_ref=container
            style="height: 500px; width: 100%;"
        ></div>
    }
}
