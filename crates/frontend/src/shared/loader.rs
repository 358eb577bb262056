//! Read-only subscriptions to remote values.
//!
//! A loader exposes the `(value, loaded, error)` triple as signals. It refetches
//! whenever its key changes and, when a refresh interval is given, polls until
//! the owning component is disposed.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::future::Future;
use wasm_bindgen_futures::spawn_local;

/// Refresh interval of lists that would otherwise be watched
pub const POLL_INTERVAL_MS: u32 = 10_000;

#[derive(Debug)]
pub struct Loader<T: Send + Sync + 'static> {
    pub value: ReadSignal<T>,
    pub loaded: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
}

impl<T: Send + Sync + 'static> Clone for Loader<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Loader<T> {}

/// Start a loader. `key` is tracked; `None` means "not ready to fetch yet".
pub fn use_loader<K, T, F, Fut>(
    key: impl Fn() -> Option<K> + 'static,
    fetch: F,
    refresh_ms: Option<u32>,
) -> Loader<T>
where
    K: Clone + 'static,
    T: Default + Send + Sync + 'static,
    F: Fn(K) -> Fut + Clone + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let (value, set_value) = signal(T::default());
    let (loaded, set_loaded) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let generation = StoredValue::new(0u64);

    Effect::new(move |_| {
        let next = generation.get_value() + 1;
        generation.set_value(next);
        let _ = set_loaded.try_set(false);

        let Some(key) = key() else {
            return;
        };

        let fetch = fetch.clone();
        spawn_local(async move {
            // stop once the key moved on or the owner was disposed
            let is_current = move || generation.try_get_value() == Some(next);
            loop {
                let result = fetch(key.clone()).await;
                if !is_current() {
                    break;
                }
                match result {
                    Ok(v) => {
                        let _ = set_value.try_set(v);
                        let _ = set_error.try_set(None);
                    }
                    Err(e) => {
                        log::warn!("load failed: {}", e);
                        let _ = set_error.try_set(Some(e));
                    }
                }
                let _ = set_loaded.try_set(true);

                let Some(ms) = refresh_ms else {
                    break;
                };
                TimeoutFuture::new(ms).await;
                if !is_current() {
                    break;
                }
            }
        });
    });

    Loader {
        value,
        loaded,
        error,
    }
}
