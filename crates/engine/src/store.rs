//! Named slot for one entity collection or record.

use std::sync::RwLock;

type Observer<T> = Box<dyn Fn(&T) + Send + Sync>;

/// Entity store: the current value is always the loaded/default value or
/// the result of the last successful mutation.
///
/// Observers run synchronously after each successful write, in
/// subscription order, and always see a fully-settled snapshot (the write
/// lock is released before they run). Persistence is wired as an observer.
pub struct EntityStore<T> {
    value: RwLock<T>,
    observers: RwLock<Vec<Observer<T>>>,
}

impl<T: Clone> EntityStore<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Cloned snapshot of the current value.
    pub fn get(&self) -> T {
        match self.value.read() {
            Ok(guard) => guard.clone(),
            // A poisoned lock still holds a usable value; degrade, don't panic.
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Replace the value wholesale and notify observers.
    pub fn set(&self, value: T) {
        self.update(|current| *current = value);
    }

    /// Apply `mutate` to the current value under the write lock, then
    /// notify observers with the settled result.
    pub fn update(&self, mutate: impl FnOnce(&mut T)) {
        let snapshot = {
            let mut guard = match self.value.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            mutate(&mut guard);
            guard.clone()
        };

        self.notify(&snapshot);
    }

    /// Register an observer invoked after every successful write.
    pub fn subscribe(&self, observer: impl Fn(&T) + Send + Sync + 'static) {
        if let Ok(mut observers) = self.observers.write() {
            observers.push(Box::new(observer));
        }
    }

    fn notify(&self, snapshot: &T) {
        if let Ok(observers) = self.observers.read() {
            for observer in observers.iter() {
                observer(snapshot);
            }
        }
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for EntityStore<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut s = f.debug_struct("EntityStore");
        match self.value.read() {
            Ok(guard) => s.field("value", &*guard),
            Err(_) => s.field("value", &"<poisoned>"),
        };
        s.finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn get_returns_the_last_written_value() {
        let store = EntityStore::new(vec![1, 2]);
        store.set(vec![3]);
        assert_eq!(store.get(), vec![3]);
    }

    #[test]
    fn update_mutates_in_place() {
        let store = EntityStore::new(vec![1]);
        store.update(|v| v.push(2));
        assert_eq!(store.get(), vec![1, 2]);
    }

    #[test]
    fn observers_run_after_every_write_with_the_settled_value() {
        let store = EntityStore::new(0u32);
        let seen = Arc::new(AtomicUsize::new(0));
        let last = Arc::new(AtomicUsize::new(0));

        let seen2 = Arc::clone(&seen);
        let last2 = Arc::clone(&last);
        store.subscribe(move |value| {
            seen2.fetch_add(1, Ordering::SeqCst);
            last2.store(*value as usize, Ordering::SeqCst);
        });

        store.set(7);
        store.update(|v| *v += 1);

        assert_eq!(seen.load(Ordering::SeqCst), 2);
        assert_eq!(last.load(Ordering::SeqCst), 8);
    }

    #[test]
    fn observer_can_read_the_store_it_watches() {
        // The write lock is released before notification, so a subscriber
        // reading back its own store must not deadlock.
        let store = Arc::new(EntityStore::new(1u32));
        let handle = Arc::clone(&store);
        let echoed = Arc::new(AtomicUsize::new(0));
        let echoed2 = Arc::clone(&echoed);

        store.subscribe(move |_| {
            echoed2.store(handle.get() as usize, Ordering::SeqCst);
        });

        store.set(5);
        assert_eq!(echoed.load(Ordering::SeqCst), 5);
    }
}
