//! Selection notifications that bubble from a node to all of its ancestors.

use crate::sync::lock;
use crate::tree::TreeNode;
use std::sync::{Arc, Mutex};

pub type SelectionCallback = Arc<dyn Fn(&TreeNode) + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct ListenerList {
    next_id: u64,
    entries: Vec<(SubscriptionId, SelectionCallback)>,
}

/// Shared list of selection listeners owned by one tree node.
///
/// Clones share the same list, so a child can hold a forwarding
/// subscription that notifies its parent's list.
#[derive(Clone, Default)]
pub struct SelectionListeners {
    inner: Arc<Mutex<ListenerList>>,
}

impl SelectionListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, callback: impl Fn(&TreeNode) + Send + Sync + 'static) -> SubscriptionId {
        let mut list = lock(&self.inner);
        let id = SubscriptionId(list.next_id);
        list.next_id += 1;
        list.entries.push((id, Arc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut list = lock(&self.inner);
        let before = list.entries.len();
        list.entries.retain(|(entry, _)| *entry != id);
        list.entries.len() != before
    }

    /// Subscribes a callback that re-publishes every notification to `target`.
    pub fn forward_to(&self, target: &SelectionListeners) -> SubscriptionId {
        let target = target.clone();
        self.subscribe(move |node| target.notify(node))
    }

    pub fn notify(&self, node: &TreeNode) {
        let callbacks: Vec<SelectionCallback> =
            lock(&self.inner).entries.iter().map(|(_, callback)| Arc::clone(callback)).collect();
        for callback in callbacks {
            callback(node);
        }
    }

    pub fn len(&self) -> usize {
        lock(&self.inner).entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
