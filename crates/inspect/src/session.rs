//! Composition root: wires selection to background detail extraction.
//!
//! Each selection spawns one worker thread that runs
//! [`extract_details`](crate::engine::extract_details) and sends the result
//! back over a channel. The owning thread publishes results through
//! [`InspectionSession::process_pending`] or
//! [`InspectionSession::wait_for_details`]; a result is only published when no
//! newer extraction for the same node has been published before it.

use crate::detail::DetailGroup;
use crate::engine::extract_details;
use crate::error::ExtractionError;
use crate::path::{IndexPathResolver, PathResolver};
use crate::sync::lock;
use crate::tree::{DetailDispatcher, NodeId, TreeNode, WeakTreeNode};
use std::any::Any;
use std::collections::HashMap;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};
use uiscope_core::ElementRef;

/// Result of one background extraction.
pub struct DetailsReady {
    pub node: TreeNode,
    pub sequence: u64,
    pub result: Result<Vec<DetailGroup>, ExtractionError>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    DetailsPublished { node: NodeId, groups: usize },
    ExtractionFailed { node: NodeId, message: String },
    /// A newer extraction for the node was already published.
    StaleDropped { node: NodeId, sequence: u64 },
}

impl SessionEvent {
    pub fn node(&self) -> NodeId {
        match self {
            SessionEvent::DetailsPublished { node, .. }
            | SessionEvent::ExtractionFailed { node, .. }
            | SessionEvent::StaleDropped { node, .. } => *node,
        }
    }
}

struct ThreadDispatcher {
    sequence: AtomicU64,
    sender: Sender<DetailsReady>,
}

impl DetailDispatcher for ThreadDispatcher {
    fn dispatch(&self, node: &TreeNode) {
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let sender = self.sender.clone();
        let worker_node = node.clone();
        let spawned = thread::Builder::new().name(format!("uiscope-details-{sequence}")).spawn(move || {
            let element = Arc::clone(worker_node.element());
            let result = catch_unwind(AssertUnwindSafe(|| extract_details(element.as_ref())))
                .unwrap_or_else(|payload| Err(ExtractionError::WorkerPanicked(panic_message(payload.as_ref()))));
            if sender.send(DetailsReady { node: worker_node, sequence, result }).is_err() {
                tracing::debug!(sequence, "session closed before details were delivered");
            }
        });
        if let Err(err) = spawned {
            tracing::error!(%err, node = %node.id(), "failed to start detail worker");
            let ready = DetailsReady {
                node: node.clone(),
                sequence,
                result: Err(ExtractionError::WorkerSpawn(err.to_string())),
            };
            let _ = self.sender.send(ready);
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|text| (*text).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_owned())
}

/// Owns the inspected tree and publishes background extraction results.
pub struct InspectionSession {
    root: TreeNode,
    receiver: Receiver<DetailsReady>,
    /// Highest published sequence per node; entries go away with their node.
    last_published: HashMap<NodeId, (WeakTreeNode, u64)>,
    selected: Arc<Mutex<Option<TreeNode>>>,
}

impl InspectionSession {
    pub fn new(root: ElementRef) -> Self {
        Self::with_path_resolver(root, Arc::new(IndexPathResolver))
    }

    pub fn with_path_resolver(root: ElementRef, paths: Arc<dyn PathResolver>) -> Self {
        let (sender, receiver) = mpsc::channel();
        let dispatcher = Arc::new(ThreadDispatcher { sequence: AtomicU64::new(0), sender });
        let root = TreeNode::root(root, dispatcher, paths);

        let selected = Arc::new(Mutex::new(None));
        let current = Arc::downgrade(&selected);
        root.selection().subscribe(move |node| {
            if let Some(current) = current.upgrade() {
                *lock(&current) = Some(node.clone());
            }
        });

        Self { root, receiver, last_published: HashMap::new(), selected }
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Most recently selected node anywhere in the tree.
    pub fn selected(&self) -> Option<TreeNode> {
        lock(&self.selected).clone()
    }

    /// Deselects the current node and selects `node`.
    pub fn select(&self, node: &TreeNode) {
        let previous = self.selected();
        if let Some(previous) = previous.filter(|previous| previous.id() != node.id()) {
            previous.set_selected(false);
        }
        node.set_selected(true);
    }

    /// Expands the nodes along `index_path` starting at the root and returns the target.
    pub fn expand_path(&self, index_path: &[usize]) -> Option<TreeNode> {
        let mut node = self.root.clone();
        for index in index_path {
            if !node.is_expanded() {
                node.set_expanded(true);
            }
            node = node.children().get(*index)?;
        }
        Some(node)
    }

    /// Publishes every result that has already arrived.
    pub fn process_pending(&mut self) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        while let Ok(ready) = self.receiver.try_recv() {
            events.push(self.publish(ready));
        }
        events
    }

    /// Blocks until a result arrives or `timeout` elapses, then publishes
    /// everything pending.
    pub fn wait_for_details(&mut self, timeout: Duration) -> Vec<SessionEvent> {
        match self.receiver.recv_timeout(timeout) {
            Ok(ready) => {
                let mut events = vec![self.publish(ready)];
                events.extend(self.process_pending());
                events
            }
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => Vec::new(),
        }
    }

    /// Waits until a result for `node` is processed or `timeout` elapses.
    pub fn wait_for_node(&mut self, node: NodeId, timeout: Duration) -> Option<SessionEvent> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return None;
            }
            let events = self.wait_for_details(remaining);
            if let Some(event) = events
                .into_iter()
                .rev()
                .find(|event| event.node() == node && !matches!(event, SessionEvent::StaleDropped { .. }))
            {
                return Some(event);
            }
        }
    }

    fn publish(&mut self, ready: DetailsReady) -> SessionEvent {
        let DetailsReady { node, sequence, result } = ready;
        let id = node.id();
        if self.last_published.get(&id).is_some_and(|(_, last)| *last >= sequence) {
            tracing::debug!(node = %id, sequence, "dropping stale detail result");
            return SessionEvent::StaleDropped { node: id, sequence };
        }
        self.last_published.retain(|_, (handle, _)| handle.is_alive());
        self.last_published.insert(id, (node.downgrade(), sequence));

        match result {
            Ok(groups) => {
                let count = groups.len();
                node.publish_details(groups);
                SessionEvent::DetailsPublished { node: id, groups: count }
            }
            Err(err) => {
                tracing::warn!(%err, node = %id, "detail extraction failed");
                node.clear_details();
                SessionEvent::ExtractionFailed { node: id, message: err.to_string() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::DetailGroup;
    use rstest::rstest;
    use uiscope_provider_mock::{ElementSpec, MockElement, StaticMockTree};

    fn session() -> InspectionSession {
        let (root, _) = MockElement::from_tree(&StaticMockTree::new(ElementSpec::new("Window", "Main")));
        InspectionSession::new(root)
    }

    fn ready(node: &TreeNode, sequence: u64, name: &str) -> DetailsReady {
        DetailsReady { node: node.clone(), sequence, result: Ok(vec![DetailGroup::new(name, Vec::new())]) }
    }

    #[rstest]
    fn older_result_arriving_late_is_dropped() {
        let mut session = session();
        let root = session.root().clone();

        assert_eq!(
            session.publish(ready(&root, 2, "newer")),
            SessionEvent::DetailsPublished { node: root.id(), groups: 1 }
        );
        assert_eq!(session.publish(ready(&root, 1, "older")), SessionEvent::StaleDropped { node: root.id(), sequence: 1 });
        assert_eq!(root.details().get(0).map(|group| group.name), Some("newer".to_owned()));
    }

    #[rstest]
    fn sequences_are_tracked_per_node() {
        let mut session = session();
        let root = session.root().clone();
        let (other, _) = MockElement::from_tree(&StaticMockTree::new(ElementSpec::new("Pane", "Other")));
        let unrelated = TreeNode::root(other, Arc::new(crate::tree::InlineDispatcher), Arc::new(IndexPathResolver));
        assert_ne!(root.id(), unrelated.id());

        session.publish(ready(&root, 5, "root"));
        let event = session.publish(ready(&unrelated, 3, "unrelated"));
        assert!(matches!(event, SessionEvent::DetailsPublished { .. }), "{event:?}");
    }

    #[rstest]
    fn discarded_nodes_are_forgotten() {
        let tree = StaticMockTree::new(
            ElementSpec::new("Window", "Main")
                .with_child(ElementSpec::new("Button", "OK"))
                .with_child(ElementSpec::new("Button", "Cancel")),
        );
        let (root_element, _) = MockElement::from_tree(&tree);
        let mut session = InspectionSession::new(root_element);
        let root = session.root().clone();
        root.load_children(false);

        for (sequence, child) in (1..).zip(root.children().snapshot()) {
            session.publish(ready(&child, sequence, "child"));
        }
        assert_eq!(session.last_published.len(), 2);

        root.load_children(false);
        session.publish(ready(&root, 10, "root"));
        assert_eq!(session.last_published.keys().copied().collect::<Vec<_>>(), vec![root.id()]);
    }

    #[rstest]
    fn failures_clear_published_details() {
        let mut session = session();
        let root = session.root().clone();
        session.publish(ready(&root, 1, "first"));
        let event = session.publish(DetailsReady {
            node: root.clone(),
            sequence: 2,
            result: Err(ExtractionError::WorkerPanicked("boom".to_owned())),
        });
        assert_eq!(
            event,
            SessionEvent::ExtractionFailed { node: root.id(), message: "detail worker panicked: boom".to_owned() }
        );
        assert!(root.details().is_empty());
    }

    #[rstest]
    fn panic_payloads_are_described() {
        let payload: Box<dyn Any + Send> = Box::new("exploded");
        assert_eq!(panic_message(payload.as_ref()), "exploded");
        let payload: Box<dyn Any + Send> = Box::new(String::from("formatted"));
        assert_eq!(panic_message(payload.as_ref()), "formatted");
        let payload: Box<dyn Any + Send> = Box::new(7_u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic");
    }
}
