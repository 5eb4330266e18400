//! Key/value session storage behind a small trait so hosts can plug in
//! browser session storage, a file, or the in-memory store used by tests.

mod memory_store;

pub use memory_store::InMemorySessionStore;

/// Session-scoped string key/value store.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str) -> Option<String>;
}

impl<S: SessionStore + ?Sized> SessionStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) {
        (**self).set(key, value);
    }

    fn remove(&mut self, key: &str) -> Option<String> {
        (**self).remove(key)
    }
}
