//! Account creation page.
//!
//! The two security questions are fixed strings shown as labels; the user
//! only supplies answers. They become the recovery factor for the account.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::types::{RegisterRequest, SECURITY_QUESTION_1, SECURITY_QUESTION_2};

/// Register page — local checks (all fields present, matching confirmation),
/// then a create-account request. Password strength is the backend's call
/// here and comes back as a rejection message.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let answer1 = RwSignal::new(String::new());
    let answer2 = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |_| {
        if pending.get_untracked() {
            return;
        }
        let user = username.get_untracked().trim().to_owned();
        let pass = password.get_untracked();
        let conf = confirm.get_untracked();
        let a1 = answer1.get_untracked().trim().to_owned();
        let a2 = answer2.get_untracked().trim().to_owned();

        if user.is_empty() || pass.is_empty() || a1.is_empty() || a2.is_empty() {
            error.set(Some("Por favor completa todos los campos.".to_owned()));
            return;
        }
        if pass != conf {
            error.set(Some("Las contraseñas no coinciden.".to_owned()));
            return;
        }

        let request = RegisterRequest {
            username: user,
            password: pass,
            security_question1: SECURITY_QUESTION_1.to_owned(),
            security_answer1: a1,
            security_question2: SECURITY_QUESTION_2.to_owned(),
            security_answer2: a2,
        };

        error.set(None);
        pending.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::auth::register(&request).await {
                    Ok(()) => navigate("/login", NavigateOptions::default()),
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        pending.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            pending.set(false);
        }
    });

    view! {
        <div class="auth-page">
            <h1>"Crear cuenta"</h1>

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
                <label class="auth-form__label">
                    "Confirmar contraseña"
                    <input
                        class="auth-form__input"
                        type="password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                </label>

                <label class="auth-form__label">
                    {SECURITY_QUESTION_1}
                    <input
                        class="auth-form__input"
                        type="text"
                        prop:value=move || answer1.get()
                        on:input=move |ev| answer1.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    {SECURITY_QUESTION_2}
                    <input
                        class="auth-form__input"
                        type="text"
                        prop:value=move || answer2.get()
                        on:input=move |ev| answer2.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || error.get().is_some()>
                    <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Creando..." } else { "Crear cuenta" }}
                </button>
            </form>

            <p class="auth-page__links">
                <a href="/login">"Volver al inicio de sesión"</a>
            </p>
        </div>
    }
}
