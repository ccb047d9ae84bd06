//! Session state and context for the frontend. The provider hydrates the
//! session once on mount from local storage and exposes derived auth signals
//! for the layout and routes. Clearing the session wipes every persisted key.

use crate::app_lib::storage;
use api_contract::Session;
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Session context shared through Leptos.
pub struct SessionContext {
    pub session: RwSignal<Session>,
    pub is_authenticated: Signal<bool>,
    pub full_name: Signal<Option<String>>,
}

impl SessionContext {
    fn new(session: RwSignal<Session>) -> Self {
        let is_authenticated = Signal::derive(move || session.get().is_authenticated());
        let full_name = Signal::derive(move || session.get().full_name);
        Self {
            session,
            is_authenticated,
            full_name,
        }
    }

    /// Updates the in-memory session after login or signup. Persistence of
    /// the token itself already happened in the auth client.
    pub fn refresh_from_storage(&self) {
        self.session.set(hydrate());
    }

    /// Clears the in-memory session and every persisted key, the logout path.
    pub fn clear_session(&self) {
        storage::clear_all();
        self.session.set(Session::default());
    }
}

fn hydrate() -> Session {
    Session {
        token: storage::token(),
        logged_in_email: storage::logged_in_email(),
        full_name: storage::full_name(),
    }
}

/// Provides session context, hydrated once on mount.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(hydrate());
    let context = SessionContext::new(session);
    provide_context(context);

    view! { {children()} }
}

/// Returns the current session context or a fallback empty context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| {
        let session = RwSignal::new(Session::default());
        SessionContext::new(session)
    })
}
