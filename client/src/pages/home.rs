//! Protected landing page shown after sign-in.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let email = move || {
        session
            .with(|s| s.user().map(|u| u.email.clone()))
            .unwrap_or_default()
    };

    view! {
        <div class="home-page">
            <h1>"Home"</h1>
            <p class="home-page__user">"Signed in as " {email}</p>
        </div>
    }
}
