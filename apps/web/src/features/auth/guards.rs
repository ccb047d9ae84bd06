use crate::features::auth::state::use_session;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn RequireSession(children: Children) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if !session.is_authenticated.get() {
            // UX-only guard based on local state; the API is the authority.
            navigate(paths::LOGIN, Default::default());
        }
    });

    view! { {children()} }
}
