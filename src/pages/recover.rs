//! Password-recovery page driving the four-step flow.
//!
//! Each state of [`RecoveryFlow`] renders its own step: username lookup,
//! security questions, new password, done. Local gates run before any
//! network call; server rejections keep the current step and show the
//! backend's message.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::recovery::{RecoveryFlow, validate_new_password};

#[component]
pub fn RecoverPage() -> impl IntoView {
    let flow = RwSignal::new(RecoveryFlow::Start);
    let username = RwSignal::new(String::new());
    let answers = RwSignal::new(Vec::<String>::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    // Step 1: look up the account's security questions.
    let start = Callback::new(move |_| {
        if pending.get_untracked() {
            return;
        }
        let user = username.get_untracked().trim().to_owned();
        if user.is_empty() {
            error.set(Some("Por favor ingresa tu nombre de usuario.".to_owned()));
            return;
        }

        error.set(None);
        pending.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::auth::recovery_start(&user).await {
                Ok(questions) => match RecoveryFlow::questions_fetched(&user, questions) {
                    Ok(next) => {
                        if let RecoveryFlow::QuestionsFetched { questions, .. } = &next {
                            answers.set(vec![String::new(); questions.len()]);
                        }
                        flow.set(next);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                },
                Err(err) => error.set(Some(err.to_string())),
            }
            pending.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user;
            pending.set(false);
        }
    });

    // Step 2: submit one answer per question.
    let verify = Callback::new(move |_| {
        if pending.get_untracked() {
            return;
        }
        let current = flow.get_untracked();
        let trimmed = match current.check_answers(&answers.get_untracked()) {
            Ok(trimmed) => trimmed,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };
        let RecoveryFlow::QuestionsFetched { username: user, .. } = current.clone() else {
            return;
        };

        error.set(None);
        pending.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::auth::recovery_verify(&user, trimmed).await {
                Ok(reset_token) => flow.set(current.answers_verified(&reset_token)),
                Err(err) => error.set(Some(err.to_string())),
            }
            pending.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, trimmed, current);
            pending.set(false);
        }
    });

    // Step 3: set the new password using the reset token.
    let reset = Callback::new(move |_| {
        if pending.get_untracked() {
            return;
        }
        let pass = new_password.get_untracked();
        let conf = confirm.get_untracked();
        if let Err(err) = validate_new_password(&pass, &conf) {
            error.set(Some(err.to_string()));
            return;
        }
        let RecoveryFlow::AnswersVerified {
            username: user,
            reset_token,
        } = flow.get_untracked()
        else {
            return;
        };

        error.set(None);
        pending.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::auth::recovery_reset(&reset_token, &user, &pass).await {
                    Ok(()) => {
                        flow.update(|f| *f = f.reset_done());
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        pending.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, reset_token, pass);
            pending.set(false);
        }
    });

    view! {
        <div class="auth-page">
            <h1>"Recuperar contraseña"</h1>

            <Show when=move || error.get().is_some()>
                <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            {move || match flow.get() {
                RecoveryFlow::Start => {
                    view! {
                        <form
                            class="auth-form"
                            on:submit=move |ev| {
                                ev.prevent_default();
                                start.run(());
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
                            <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                                "Continuar"
                            </button>
                        </form>
                    }
                        .into_any()
                }
                RecoveryFlow::QuestionsFetched { questions, .. } => {
                    view! {
                        <form
                            class="auth-form"
                            on:submit=move |ev| {
                                ev.prevent_default();
                                verify.run(());
                            }
                        >
                            {questions
                                .iter()
                                .enumerate()
                                .map(|(i, question)| {
                                    view! {
                                        <label class="auth-form__label">
                                            {question.clone()}
                                            <input
                                                class="auth-form__input"
                                                type="text"
                                                prop:value=move || {
                                                    answers.get().get(i).cloned().unwrap_or_default()
                                                }
                                                on:input=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    answers.update(|all| {
                                                        if let Some(slot) = all.get_mut(i) {
                                                            *slot = value;
                                                        }
                                                    });
                                                }
                                            />
                                        </label>
                                    }
                                })
                                .collect::<Vec<_>>()}
                            <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                                "Verificar respuestas"
                            </button>
                        </form>
                    }
                        .into_any()
                }
                RecoveryFlow::AnswersVerified { .. } => {
                    view! {
                        <form
                            class="auth-form"
                            on:submit=move |ev| {
                                ev.prevent_default();
                                reset.run(());
                            }
                        >
                            <label class="auth-form__label">
                                "Nueva contraseña"
                                <input
                                    class="auth-form__input"
                                    type="password"
                                    prop:value=move || new_password.get()
                                    on:input=move |ev| new_password.set(event_target_value(&ev))
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
                            <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                                "Actualizar contraseña"
                            </button>
                        </form>
                    }
                        .into_any()
                }
                RecoveryFlow::PasswordReset => {
                    view! {
                        <p>"Contraseña actualizada. "<a href="/login">"Iniciar sesión"</a></p>
                    }
                        .into_any()
                }
            }}

            <p class="auth-page__links">
                <a href="/login">"Volver al inicio de sesión"</a>
            </p>
        </div>
    }
}
