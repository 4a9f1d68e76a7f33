//! Sidebar menu filtered by the current role.

use leptos::prelude::*;

use crate::nav::menu_for;
use crate::state::session::SessionState;

/// Sidebar navigation — renders only the entries visible to the current
/// user's role. Recomputes when the session changes (login, logout).
#[component]
pub fn NavMenu() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let entries = move || {
        menu_for(session.get().role())
            .into_iter()
            .map(|entry| {
                view! {
                    <li class="nav-menu__item">
                        <a class="nav-menu__link" href=entry.path()>
                            {entry.label()}
                        </a>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="nav-menu">
            <ul class="nav-menu__list">{entries}</ul>
        </nav>
    }
}
