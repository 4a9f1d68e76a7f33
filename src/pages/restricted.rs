//! Access-denied page for unauthenticated navigation attempts.
//!
//! The guard appends the originally requested path as a `redirect` query
//! parameter when sending users here. Nothing consumes it yet; it is kept in
//! the URL so a future login flow can resume the navigation.

use leptos::prelude::*;

#[component]
pub fn RestrictedPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <h1>"Acceso restringido"</h1>
            <p>"Debes iniciar sesión para ver esta página."</p>
            <p class="auth-page__links">
                <a href="/login">"Ir al inicio de sesión"</a>
            </p>
        </div>
    }
}
