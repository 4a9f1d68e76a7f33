//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, recover::RecoverPage,
    register::RegisterPage, restricted::RestrictedPage,
};
use crate::state::session::SessionState;
use crate::storage::session_store::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
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
/// Restores the stored session once at startup and provides the store and
/// session state via context, so pages never touch storage directly.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::browser();
    let session = RwSignal::new(SessionState {
        session: store.load_session(),
        loading: false,
    });

    provide_context(store);
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/despacho-web.css"/>
        <Title text="Despacho"/>

        <Router>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("recover") view=RecoverPage/>
                <Route path=StaticSegment("restricted") view=RestrictedPage/>
                <ParentRoute path=StaticSegment("dashboard") view=DashboardPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("inicio") view=HomePage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
