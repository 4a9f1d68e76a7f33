//! Dashboard shell: guarded layout with sidebar menu and child outlet.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::nav_menu::NavMenu;
use crate::guard::{self, GuardDecision};
use crate::state::session::SessionState;
use crate::storage::session_store::SessionStore;

/// Dashboard layout — redirects unauthenticated visitors to the restricted
/// page (keeping the requested path in the query string) and hosts the
/// role-gated menu plus the child route outlet.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let location = use_location();

    // Route guard; applies to the shell and every nested child route.
    let guard_store = store.clone();
    Effect::new(move || {
        let state = session.get();
        if state.loading {
            return;
        }
        let requested = location.pathname.get();
        if let GuardDecision::Redirect(target) =
            guard::decide(guard_store.is_authenticated(), &requested)
        {
            navigate(&target, NavigateOptions::default());
        }
    });

    #[cfg(feature = "hydrate")]
    let logout_navigate = use_navigate();

    let logout = Callback::new(move |_| {
        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            let navigate = logout_navigate.clone();
            leptos::task::spawn_local(async move {
                crate::net::auth::logout(&store).await;
                session.set(SessionState::default());
                navigate("/login", NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            store.clear_session();
            session.set(SessionState::default());
        }
    });

    let username = move || {
        session
            .get()
            .username()
            .map(str::to_owned)
            .unwrap_or_default()
    };

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <span class="dashboard__brand">"Despacho"</span>
                <span class="dashboard__spacer"></span>
                <span class="dashboard__user">{username}</span>
                <button class="btn" on:click=move |_| logout.run(())>
                    "Cerrar sesión"
                </button>
            </header>
            <div class="dashboard__body">
                <NavMenu/>
                <main class="dashboard__content">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}
