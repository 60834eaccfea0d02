//! Ordered collections whose observers are told about wholesale replacement.

use crate::sync::lock;
use std::sync::{Arc, Mutex};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollectionChange {
    /// The whole content was replaced; `len` is the new length.
    Reset { len: usize },
}

pub type ChangeObserver = Arc<dyn Fn(CollectionChange) + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

struct Observers {
    next_id: u64,
    entries: Vec<(ObserverId, ChangeObserver)>,
}

/// Vector that only changes through [`ObservableVec::reset`], which notifies
/// every observer exactly once.
pub struct ObservableVec<T> {
    items: Mutex<Vec<T>>,
    observers: Mutex<Observers>,
}

impl<T: Clone> ObservableVec<T> {
    pub fn new() -> Self {
        Self { items: Mutex::new(Vec::new()), observers: Mutex::new(Observers { next_id: 0, entries: Vec::new() }) }
    }

    pub fn snapshot(&self) -> Vec<T> {
        lock(&self.items).clone()
    }

    pub fn get(&self, index: usize) -> Option<T> {
        lock(&self.items).get(index).cloned()
    }

    pub fn len(&self) -> usize {
        lock(&self.items).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.items).is_empty()
    }

    /// Replaces the content atomically and emits a single [`CollectionChange::Reset`].
    pub fn reset(&self, items: Vec<T>) {
        let len = items.len();
        *lock(&self.items) = items;
        let observers: Vec<ChangeObserver> =
            lock(&self.observers).entries.iter().map(|(_, observer)| Arc::clone(observer)).collect();
        for observer in observers {
            observer(CollectionChange::Reset { len });
        }
    }

    pub fn clear(&self) {
        self.reset(Vec::new());
    }

    pub fn observe(&self, observer: impl Fn(CollectionChange) + Send + Sync + 'static) -> ObserverId {
        let mut observers = lock(&self.observers);
        let id = ObserverId(observers.next_id);
        observers.next_id += 1;
        observers.entries.push((id, Arc::new(observer)));
        id
    }

    pub fn unobserve(&self, id: ObserverId) -> bool {
        let mut observers = lock(&self.observers);
        let before = observers.entries.len();
        observers.entries.retain(|(entry, _)| *entry != id);
        observers.entries.len() != before
    }
}

impl<T: Clone> Default for ObservableVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn recording(vec: &ObservableVec<i32>) -> Arc<Mutex<Vec<CollectionChange>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        vec.observe(move |change| sink.lock().unwrap().push(change));
        seen
    }

    #[rstest]
    fn reset_notifies_once() {
        let vec = ObservableVec::new();
        let seen = recording(&vec);
        vec.reset(vec![1, 2, 3]);
        assert_eq!(vec.snapshot(), [1, 2, 3]);
        assert_eq!(*seen.lock().unwrap(), [CollectionChange::Reset { len: 3 }]);
    }

    #[rstest]
    fn clear_is_a_reset_to_empty() {
        let vec = ObservableVec::new();
        vec.reset(vec![1]);
        let seen = recording(&vec);
        vec.clear();
        assert!(vec.is_empty());
        assert_eq!(*seen.lock().unwrap(), [CollectionChange::Reset { len: 0 }]);
    }

    #[rstest]
    fn unobserved_callbacks_stay_silent() {
        let vec = ObservableVec::new();
        let seen = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&seen);
        let id = vec.observe(move |_| *sink.lock().unwrap() += 1);
        assert!(vec.unobserve(id));
        assert!(!vec.unobserve(id));
        vec.reset(vec![4]);
        assert_eq!(*seen.lock().unwrap(), 0);
        assert_eq!(vec.get(0), Some(4));
    }
}
