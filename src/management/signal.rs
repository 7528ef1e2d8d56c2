use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard, Weak},
};

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct SignalInner<T> {
    value: T,
    next_id: u64,
    listeners: BTreeMap<u64, Listener<T>>,
}

/// A value with change notification.
///
/// Readers get clones through [`Signal::get`]; writers go through `set` or
/// `update`, after which every subscriber is called with the new value.
/// Listeners run after the lock is released, so they may read the signal.
pub struct Signal<T> {
    inner: Arc<Mutex<SignalInner<T>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Send + 'static> Signal<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SignalInner {
                value,
                next_id: 0,
                listeners: BTreeMap::new(),
            })),
        }
    }

    pub fn get(&self) -> T {
        self.lock().value.clone()
    }

    /// Reads the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.lock().value)
    }

    pub fn set(&self, value: T) {
        self.update(|current| *current = value);
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let (value, listeners) = {
            let mut inner = self.lock();
            f(&mut inner.value);
            let listeners: Vec<Listener<T>> = inner.listeners.values().cloned().collect();
            (inner.value.clone(), listeners)
        };

        for listener in listeners {
            listener(&value);
        }
    }

    /// Registers a listener. It stays registered until the returned
    /// [`Subscription`] is dropped.
    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let id = {
            let mut inner = self.lock();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.insert(id, Arc::new(listener));
            id
        };

        let weak: Weak<Mutex<SignalInner<T>>> = Arc::downgrade(&self.inner);
        Subscription {
            release: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    let mut inner = inner.lock().unwrap_or_else(|p| p.into_inner());
                    inner.listeners.remove(&id);
                }
            })),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().listeners.len()
    }

    fn lock(&self) -> MutexGuard<'_, SignalInner<T>> {
        self.inner.lock().unwrap_or_else(|p| p.into_inner())
    }
}

/// Handle to a registered listener. Dropping it unsubscribes.
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        self.release_once();
    }

    fn release_once(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_once();
    }
}

/// Lifetime of one view. Every subscription added here is released when the
/// scope is torn down or dropped, whichever comes first.
#[derive(Default)]
pub struct Scope {
    subscriptions: Vec<Subscription>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, subscription: Subscription) -> &mut Self {
        self.subscriptions.push(subscription);
        self
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    pub fn teardown(self) {
        drop(self);
    }
}
