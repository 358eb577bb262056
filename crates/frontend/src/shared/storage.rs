//! Durable key-value slots for UI preferences.
//!
//! Preferences are advisory: a store that cannot be reached reads as empty
//! and drops writes.

use web_sys::window;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Browser `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = get_local_storage() else {
            log::debug!("localStorage unavailable, '{}' not saved", key);
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::debug!("localStorage write failed for '{}'", key);
        }
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}

#[cfg(test)]
pub mod fakes {
    use super::KeyValueStore;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory store that records every write
    #[derive(Debug, Default)]
    pub struct MemoryStore {
        items: RefCell<HashMap<String, String>>,
        pub writes: RefCell<Vec<(String, String)>>,
    }

    impl MemoryStore {
        pub fn with(items: &[(&str, &str)]) -> Self {
            let store = Self::default();
            store.items.borrow_mut().extend(
                items
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string())),
            );
            store
        }

        pub fn write_count(&self) -> usize {
            self.writes.borrow().len()
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.writes
                .borrow_mut()
                .push((key.to_string(), value.to_string()));
            self.items
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }
    }

    /// Storage that is switched off: reads are empty, writes vanish
    #[derive(Debug, Default)]
    pub struct UnavailableStore;

    impl KeyValueStore for UnavailableStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) {}
    }
}
