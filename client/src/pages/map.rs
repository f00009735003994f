//! Protected map page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only reachable through the route guard. The widget itself is owned by
//! `MapHost`; this page adds the heading, the welcome banner, and a legend of
//! what the layout places on the map.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use atlas::geo::POINTS_OF_INTEREST;
use atlas::layout::MapLayout;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::map_host::MapHost;
use crate::components::welcome_banner::WelcomeBanner;

/// Page heading.
pub const MAP_TITLE: &str = "Demo de Mapa con Leaflet";

/// Legend lines for `layout`: one per hover marker.
pub fn legend(layout: MapLayout) -> Vec<String> {
    match layout {
        MapLayout::Landmarks => POINTS_OF_INTEREST
            .iter()
            .map(|poi| format!("{} ({:.4}, {:.4})", poi.name, poi.coordinates.lat, poi.coordinates.lng))
            .collect(),
        MapLayout::Greeting => Vec::new(),
    }
}

#[component]
pub fn MapPage() -> impl IntoView {
    let layout = use_query_map().with_untracked(|q| MapLayout::from_query(q.get("layout").as_deref()));
    let entries = legend(layout);
    let legend_list = (!entries.is_empty()).then(|| {
        view! {
            <ul class="map-legend">
                {entries.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
            </ul>
        }
    });

    view! {
        <div class="map-page">
            <h1>{MAP_TITLE}</h1>
            <WelcomeBanner/>
            <MapHost layout/>
            {legend_list}
        </div>
    }
}
