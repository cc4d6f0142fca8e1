//! Shared credential form behind the login and register screens.
//!
//! DESIGN
//! ======
//! Both screens are the same form pointed at a different endpoint, so the
//! differences live in an `AuthFormConfig` value. The submit flow itself is
//! plain async over the `AuthApi` and `TokenStore` seams; the component only
//! wires signals, the session context and navigation around it.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api::{ApiError, AuthApi, LOGIN_ENDPOINT, REGISTER_ENDPOINT};
use crate::net::types::{Credentials, User};
use crate::state::session::SessionState;
use crate::util::auth::{HOME_ROUTE, LOGIN_ROUTE, REGISTER_ROUTE};
use crate::util::token_store::{StorageError, TokenStore};

/// Per-screen settings for `AuthForm`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthFormConfig {
    pub endpoint: &'static str,
    pub heading: &'static str,
    pub submit_label: &'static str,
    pub success_route: &'static str,
    pub alternate_prompt: &'static str,
    pub alternate_label: &'static str,
    pub alternate_route: &'static str,
}

pub const LOGIN_FORM: AuthFormConfig = AuthFormConfig {
    endpoint: LOGIN_ENDPOINT,
    heading: "Login",
    submit_label: "Login",
    success_route: HOME_ROUTE,
    alternate_prompt: "Don't have an account?",
    alternate_label: "Create One",
    alternate_route: REGISTER_ROUTE,
};

pub const REGISTER_FORM: AuthFormConfig = AuthFormConfig {
    endpoint: REGISTER_ENDPOINT,
    heading: "Register",
    submit_label: "Register",
    success_route: HOME_ROUTE,
    alternate_prompt: "Already have an account?",
    alternate_label: "Login",
    alternate_route: LOGIN_ROUTE,
};

#[derive(Debug, thiserror::Error)]
pub enum AuthFlowError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result of a successful submit: who signed in and where to go next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSuccess {
    pub user: User,
    pub redirect_to: &'static str,
}

/// Both fields are required; the email is trimmed, the password is sent as typed.
pub(crate) fn validate_credentials(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

/// Issue one request to `config.endpoint` and persist the returned token.
///
/// Nothing is stored unless the server answers with a usable `{ token, user }`.
///
/// # Errors
///
/// Returns `AuthFlowError::Api` when the request fails or the reply carries
/// no token, and `AuthFlowError::Storage` when the token cannot be saved.
pub async fn submit_credentials<A, S>(
    api: &A,
    store: &S,
    config: &AuthFormConfig,
    credentials: Credentials,
) -> Result<AuthSuccess, AuthFlowError>
where
    A: AuthApi,
    S: TokenStore,
{
    let response = api.post_credentials(config.endpoint, &credentials).await?;
    if response.token.is_empty() {
        return Err(ApiError::Decode("missing token".to_owned()).into());
    }
    store.store_token(&response.token)?;
    Ok(AuthSuccess { user: response.user, redirect_to: config.success_route })
}

/// Write the signed-in user into the session and return the route to open.
pub fn apply_success(session: &mut SessionState, success: AuthSuccess) -> &'static str {
    session.set_user(success.user);
    success.redirect_to
}

/// Email + password form that signs the user in against `config.endpoint`.
#[component]
pub fn AuthForm(config: AuthFormConfig) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let session = expect_context::<RwSignal<SessionState>>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_credentials(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(msg) => {
                message.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        message.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let api = crate::net::api::HttpAuthApi::default();
                let store = crate::util::token_store::LocalTokenStore;
                match submit_credentials(&api, &store, &config, credentials).await {
                    Ok(success) => {
                        let route = session
                            .try_update(move |s| apply_success(s, success))
                            .unwrap_or(HOME_ROUTE);
                        navigate(route, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::error!("{} failed: {e}", config.endpoint);
                        message.set(e.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2 class="auth-card__heading">{config.heading}</h2>
                <form class="auth-form" on:submit=on_submit>
                    <div class="auth-form__field">
                        <label class="auth-form__label" for="email">"Email"</label>
                        <input
                            class="auth-input"
                            type="email"
                            id="email"
                            required=true
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="auth-form__field">
                        <label class="auth-form__label" for="password">"Password"</label>
                        <input
                            class="auth-input"
                            type="password"
                            id="password"
                            required=true
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {config.submit_label}
                    </button>
                </form>
                <Show when=move || !message.get().is_empty()>
                    <p class="auth-message">{move || message.get()}</p>
                </Show>
                <p class="auth-card__alternate">
                    {config.alternate_prompt}
                    " "
                    <A href=config.alternate_route>{config.alternate_label}</A>
                </p>
            </div>
        </div>
    }
}
