//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ProtectedRoute, Route, Router, Routes},
};

use crate::pages::{login::LoginPage, map::MapPage, signup::SignupPage};
use crate::state::session::SessionContext;
use crate::util::route_guard::{AppRoute, GuardDecision, decide};

/// Leaflet stylesheet, loaded from the public CDN.
pub const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";

/// Leaflet script; defines the global `L` the map binding targets.
pub const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href=LEAFLET_CSS crossorigin=""/>
                <script src=LEAFLET_JS crossorigin=""></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and sets up client-side routing. `/map` renders only
/// when the route guard says so; otherwise it redirects to login.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionContext::provide();
    let map_allowed = move || Some(decide(&session.get(), AppRoute::Map) == GuardDecision::Render);
    let map_redirect = move || match decide(&session.get_untracked(), AppRoute::Map) {
        GuardDecision::Redirect(path) => path,
        GuardDecision::Render => AppRoute::Login.path(),
    };

    view! {
        <Title text="Mapa"/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment(AppRoute::Login.segment()) view=LoginPage/>
                    <Route path=StaticSegment(AppRoute::Signup.segment()) view=SignupPage/>
                    <ProtectedRoute
                        path=StaticSegment(AppRoute::Map.segment())
                        condition=map_allowed
                        redirect_path=map_redirect
                        view=MapPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
