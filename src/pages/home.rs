//! Dashboard landing page.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Home page — greeting plus a hint of what the menu offers for the role.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let greeting = move || match session.get().username() {
        Some(name) => format!("Bienvenido, {name}."),
        None => "Bienvenido.".to_owned(),
    };

    view! {
        <section class="home">
            <h1>{greeting}</h1>
            <p>"Selecciona una opción del menú para comenzar."</p>
        </section>
    }
}
