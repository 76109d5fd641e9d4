//! Session store: the single owner of the current `SessionRecord`.
//!
//! The in-memory value is a write-through cache of durable storage. It is read
//! from storage once when the store is opened; every mutation persists first and
//! then replaces the in-memory value, so readers only ever see whole records.
//! Subscribers are notified synchronously after each mutation, which is how the
//! reactive layer learns about sign-in and sign-out.
//!
//! All access happens on the UI thread, so interior mutability is plain
//! `RefCell`/`Cell` and the store is not `Send`.

use crate::features::auth::session::SessionRecord;
use crate::features::auth::storage::{
    AUTH_KEY, AUTHORIZATION_KEY, DurableStorage, StorageError, USER_KEY,
};
use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
};
use tracing::{debug, warn};

type Subscriber = Rc<dyn Fn(&SessionRecord)>;

/// Handle returned by `SessionStore::subscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct SessionStore {
    storage: Rc<dyn DurableStorage>,
    current: RefCell<SessionRecord>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber)>>,
    next_subscription: Cell<u64>,
}

impl SessionStore {
    /// Opens the store over `storage`, loading the persisted session once.
    pub fn open(storage: Rc<dyn DurableStorage>) -> Self {
        let current = load_from_durable_storage(storage.as_ref());
        debug!(
            authenticated = current.is_authenticated(),
            "session store opened"
        );
        Self {
            storage,
            current: RefCell::new(current),
            subscribers: RefCell::new(Vec::new()),
            next_subscription: Cell::new(0),
        }
    }

    /// Current session: the latest write, or the startup load.
    pub fn read(&self) -> SessionRecord {
        self.current.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.borrow().is_authenticated()
    }

    /// Replaces the session and persists it under the `auth` key.
    ///
    /// The in-memory value is replaced even when persisting fails, so the
    /// session keeps working until the page reloads; the error is returned for
    /// the caller to report.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the record cannot be encoded or written.
    pub fn write(&self, record: SessionRecord) -> Result<(), StorageError> {
        let persisted = persist(self.storage.as_ref(), &record);
        self.current.replace(record);
        self.notify();
        persisted
    }

    /// Resets to the logged-out record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the logged-out record cannot be written.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.write(SessionRecord::logged_out())
    }

    /// Registers a callback invoked with the new record after every mutation.
    pub fn subscribe(&self, callback: impl Fn(&SessionRecord) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    /// Drops a subscription; unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers
            .borrow_mut()
            .retain(|(subscription, _)| *subscription != id);
    }

    fn notify(&self) {
        // Snapshot both so callbacks may read the store or (un)subscribe.
        let record = self.read();
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in subscribers {
            callback(&record);
        }
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SessionStore")
            .field("current", &*self.current.borrow())
            .field("subscribers", &self.subscribers.borrow().len())
            .finish_non_exhaustive()
    }
}

/// Reads the persisted session. Absent, malformed or mistyped data yields the
/// logged-out record; nothing is raised to the caller.
pub fn load_from_durable_storage(storage: &dyn DurableStorage) -> SessionRecord {
    let Some(raw) = storage.get_item(AUTH_KEY) else {
        return SessionRecord::logged_out();
    };
    match serde_json::from_str(&raw).and_then(SessionRecord::from_json_value) {
        Ok(record) => record,
        Err(err) => {
            debug!("ignoring unreadable persisted session: {err}");
            SessionRecord::logged_out()
        }
    }
}

/// Writes the primary record, then mirrors the secondary keys best-effort.
fn persist(storage: &dyn DurableStorage, record: &SessionRecord) -> Result<(), StorageError> {
    let encoded =
        serde_json::to_string(record).map_err(|err| StorageError::Encode(err.to_string()))?;
    storage.set_item(AUTH_KEY, &encoded)?;

    if let Err(err) = mirror_secondary_keys(storage, record) {
        warn!("failed to update secondary session keys: {err}");
    }
    Ok(())
}

fn mirror_secondary_keys(
    storage: &dyn DurableStorage,
    record: &SessionRecord,
) -> Result<(), StorageError> {
    match record.token.as_deref() {
        Some(token) => {
            storage.set_item(AUTHORIZATION_KEY, token)?;
            let profile = serde_json::to_string(&record.profile())
                .map_err(|err| StorageError::Encode(err.to_string()))?;
            storage.set_item(USER_KEY, &profile)
        }
        None => {
            storage.remove_item(AUTHORIZATION_KEY)?;
            storage.remove_item(USER_KEY)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SessionStore, load_from_durable_storage};
    use crate::features::auth::session::SessionRecord;
    use crate::features::auth::storage::{
        AUTH_KEY, AUTHORIZATION_KEY, DurableStorage, MemoryStorage, StorageError, USER_KEY,
    };
    use std::{cell::RefCell, rc::Rc};

    fn record(token: &str) -> SessionRecord {
        SessionRecord {
            token: Some(token.to_string()),
            id: Some(1),
            email: Some("a@b.com".to_string()),
            name: Some("A".to_string()),
        }
    }

    fn open(storage: &MemoryStorage) -> SessionStore {
        SessionStore::open(Rc::new(storage.clone()))
    }

    /// Storage whose writes always fail, like a full or blocked localStorage.
    struct ReadOnlyStorage;

    impl DurableStorage for ReadOnlyStorage {
        fn get_item(&self, _key: &str) -> Option<String> {
            None
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }

        fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    /// Storage that only accepts the primary session key.
    struct PrimaryOnlyStorage {
        inner: MemoryStorage,
    }

    impl DurableStorage for PrimaryOnlyStorage {
        fn get_item(&self, key: &str) -> Option<String> {
            self.inner.get_item(key)
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if key == AUTH_KEY {
                self.inner.set_item(key, value)
            } else {
                Err(StorageError::Write {
                    key: key.to_string(),
                    message: "quota exceeded".to_string(),
                })
            }
        }

        fn remove_item(&self, key: &str) -> Result<(), StorageError> {
            if key == AUTH_KEY {
                self.inner.remove_item(key)
            } else {
                Err(StorageError::Unavailable)
            }
        }
    }

    #[test]
    fn opens_logged_out_on_empty_storage() {
        let store = open(&MemoryStorage::new());
        assert_eq!(store.read(), SessionRecord::logged_out());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn write_survives_reopen() {
        let storage = MemoryStorage::new();
        let store = open(&storage);
        assert!(store.write(record("t1")).is_ok());

        let reopened = open(&storage);
        assert_eq!(reopened.read(), record("t1"));
        assert_eq!(load_from_durable_storage(&storage), record("t1"));
    }

    #[test]
    fn corrupt_storage_loads_logged_out() {
        let storage = MemoryStorage::new();
        for raw in ["not json", "", "null", "42", r#"["token"]"#, r#"{"token":5}"#] {
            assert!(storage.set_item(AUTH_KEY, raw).is_ok());
            assert_eq!(
                load_from_durable_storage(&storage),
                SessionRecord::logged_out(),
                "raw value {raw:?}"
            );
        }
    }

    #[test]
    fn write_mirrors_secondary_keys_and_clear_removes_them() {
        let storage = MemoryStorage::new();
        let store = open(&storage);

        assert!(store.write(record("t1")).is_ok());
        assert_eq!(storage.get_item(AUTHORIZATION_KEY).as_deref(), Some("t1"));
        assert_eq!(
            storage.get_item(USER_KEY).as_deref(),
            Some(r#"{"id":1,"email":"a@b.com","name":"A"}"#)
        );

        assert!(store.clear().is_ok());
        assert_eq!(store.read(), SessionRecord::logged_out());
        assert_eq!(storage.get_item(AUTH_KEY).as_deref(), Some(r#"{"token":null}"#));
        assert_eq!(storage.get_item(AUTHORIZATION_KEY), None);
        assert_eq!(storage.get_item(USER_KEY), None);
    }

    #[test]
    fn failed_persist_still_updates_memory() {
        let store = SessionStore::open(Rc::new(ReadOnlyStorage));
        assert_eq!(store.write(record("t1")), Err(StorageError::Unavailable));
        assert_eq!(store.read(), record("t1"));
        assert!(store.is_authenticated());
    }

    #[test]
    fn secondary_key_failures_do_not_fail_the_write() {
        let inner = MemoryStorage::new();
        let store = SessionStore::open(Rc::new(PrimaryOnlyStorage {
            inner: inner.clone(),
        }));

        assert_eq!(store.write(record("t1")), Ok(()));
        assert_eq!(inner.get_item(AUTHORIZATION_KEY), None);
        assert_eq!(load_from_durable_storage(&inner), record("t1"));

        assert_eq!(store.clear(), Ok(()));
        assert_eq!(load_from_durable_storage(&inner), SessionRecord::logged_out());
    }

    #[test]
    fn subscribers_see_each_mutation_in_order() {
        let store = Rc::new(open(&MemoryStorage::new()));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let reader = Rc::clone(&store);
        store.subscribe(move |record| {
            // The store is already updated when callbacks run.
            assert_eq!(&reader.read(), record);
            sink.borrow_mut().push(record.token.clone());
        });

        assert!(store.write(record("t1")).is_ok());
        assert!(store.clear().is_ok());

        assert_eq!(*seen.borrow(), vec![Some("t1".to_string()), None]);
    }

    #[test]
    fn unsubscribed_callbacks_are_not_called() {
        let store = open(&MemoryStorage::new());
        let calls = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&calls);
        let id = store.subscribe(move |_| *counter.borrow_mut() += 1);
        assert!(store.write(record("t1")).is_ok());
        store.unsubscribe(id);
        assert!(store.write(record("t2")).is_ok());

        assert_eq!(*calls.borrow(), 1);
    }
}
