//! Auth context for the Leptos tree. The provider opens the session store over
//! `localStorage` once at startup and bridges store notifications into a signal,
//! so guards and screens re-render whenever the session is written or cleared.

use crate::features::auth::{
    flow,
    session::SessionRecord,
    storage::{BrowserStorage, DurableStorage, MemoryStorage},
    store::SessionStore,
};
use leptos::prelude::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    store: StoredValue<Rc<SessionStore>, LocalStorage>,
    pub session: RwSignal<SessionRecord>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    /// Builds a context that mirrors `store` into a signal.
    fn new(store: Rc<SessionStore>) -> Self {
        let session = RwSignal::new(store.read());
        store.subscribe(move |record| session.set(record.clone()));
        let is_authenticated = Signal::derive(move || session.get().is_authenticated());
        Self {
            store: StoredValue::new_local(store),
            session,
            is_authenticated,
        }
    }

    /// Shared handle to the store, for submit flows.
    pub fn store(&self) -> Rc<SessionStore> {
        self.store.get_value()
    }

    /// Clears the session; guarded routes redirect on the resulting update.
    pub fn sign_out(&self) {
        flow::sign_out(&self.store());
    }
}

/// Provides the auth context; the persisted session is read exactly once here.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let storage: Rc<dyn DurableStorage> = Rc::new(BrowserStorage::open());
    let auth = AuthContext::new(Rc::new(SessionStore::open(storage)));
    provide_context(auth);

    view! { {children()} }
}

/// Returns the current auth context, or a detached in-memory one outside the
/// provider.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        tracing::warn!("use_auth called outside AuthProvider; using a detached session");
        let storage: Rc<dyn DurableStorage> = Rc::new(MemoryStorage::new());
        AuthContext::new(Rc::new(SessionStore::open(storage)))
    })
}
