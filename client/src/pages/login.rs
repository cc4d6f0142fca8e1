//! Login page for existing accounts.

use leptos::prelude::*;

use super::auth_form::{AuthForm, LOGIN_FORM};

#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <AuthForm config=LOGIN_FORM/> }
}
