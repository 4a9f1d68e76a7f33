//! Login page with username/password form.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::storage::session_store::SessionStore;

/// Login page — posts credentials and, on success, stores the session and
/// navigates into the dashboard. The submit action is guarded by an in-flight
/// flag so a double click cannot fire two requests.
#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = expect_context::<RwSignal<SessionState>>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |_| {
        if pending.get_untracked() {
            return;
        }
        let user = username.get_untracked();
        let pass = password.get_untracked();
        if user.trim().is_empty() || pass.is_empty() {
            error.set(Some("Por favor completa todos los campos.".to_owned()));
            return;
        }

        error.set(None);
        pending.set(true);

        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::auth::login(&store, user.trim(), &pass).await {
                    Ok(new_session) => {
                        session.set(SessionState::authenticated(new_session));
                        navigate("/dashboard/inicio", NavigateOptions::default());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&store, session);
            pending.set(false);
        }
    });

    view! {
        <div class="auth-page">
            <h1>"Despacho"</h1>
            <p>"Gestión logística"</p>

            <form
                class="auth-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <label class="auth-form__label">
                    "Usuario"
                    <input
                        class="auth-form__input"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Contraseña"
                    <input
                        class="auth-form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || error.get().is_some()>
                    <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Ingresando..." } else { "Ingresar" }}
                </button>
            </form>

            <p class="auth-page__links">
                <a href="/register">"Crear cuenta"</a>
                " · "
                <a href="/recover">"¿Olvidaste tu contraseña?"</a>
            </p>
        </div>
    }
}
