//! Registration page for new accounts.

use leptos::prelude::*;

use super::auth_form::{AuthForm, REGISTER_FORM};

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! { <AuthForm config=REGISTER_FORM/> }
}
