//! Route guard for protected views.
//!
//! The guard starts out checking and renders nothing, which keeps SSR and
//! hydration output identical. After mount it reads the stored token and the
//! session once, without subscribing, then either authorizes or redirects to
//! `/login`. Clearing the session later does not redirect an already-rendered
//! view.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::auth::{GuardDecision, LOGIN_ROUTE, guard_decision, renders_children};
use crate::util::token_store::{LocalTokenStore, TokenStore};

/// Render `children` only for an authenticated visitor; otherwise go to `/login`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    // `None` while checking.
    let decision = RwSignal::new(None::<GuardDecision>);
    let navigate = use_navigate();

    Effect::new(move || {
        let token = LocalTokenStore.token();
        let outcome = session.with_untracked(|s| guard_decision(token.as_deref(), s));
        decision.set(Some(outcome));
        if outcome == GuardDecision::RedirectToLogin {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || renders_children(decision.get())>
            {children()}
        </Show>
    }
}
