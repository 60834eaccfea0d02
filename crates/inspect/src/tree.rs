//! Lazily materialized element tree.

use crate::detail::DetailGroup;
use crate::events::{SelectionListeners, SubscriptionId};
use crate::normalize::normalize_label;
use crate::observable::ObservableVec;
use crate::path::PathResolver;
use crate::sync::lock;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};
use uiscope_core::{AttrValue, ElementRef, PlatformError, PropertyId, UiValue};

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(0);

/// Process-wide unique node identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    fn next() -> Self {
        Self(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Starts detail extraction when a node becomes selected.
pub trait DetailDispatcher: Send + Sync {
    fn dispatch(&self, node: &TreeNode);
}

/// Extracts on the calling thread and publishes immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct InlineDispatcher;

impl DetailDispatcher for InlineDispatcher {
    fn dispatch(&self, node: &TreeNode) {
        match crate::engine::extract_details(node.element().as_ref()) {
            Ok(groups) => node.publish_details(groups),
            Err(err) => {
                tracing::warn!(%err, node = %node.id(), "detail extraction failed");
                node.clear_details();
            }
        }
    }
}

/// State shared by every node of one tree.
struct TreeContext {
    dispatcher: Arc<dyn DetailDispatcher>,
    paths: Arc<dyn PathResolver>,
}

struct NodeInner {
    id: NodeId,
    element: ElementRef,
    index_path: Vec<usize>,
    children: ObservableVec<TreeNode>,
    details: ObservableVec<DetailGroup>,
    expanded: AtomicBool,
    selected: AtomicBool,
    selection: SelectionListeners,
    /// Forwarding subscriptions held in the current children's listener lists.
    forwarders: Mutex<Vec<(SelectionListeners, SubscriptionId)>>,
    context: Arc<TreeContext>,
}

/// One accessibility element in the inspected tree.
///
/// Cloning yields another handle on the same node.
#[derive(Clone)]
pub struct TreeNode {
    inner: Arc<NodeInner>,
}

/// Non-owning handle; dead once every [`TreeNode`] clone of the node is dropped.
#[derive(Clone)]
pub(crate) struct WeakTreeNode(Weak<NodeInner>);

impl WeakTreeNode {
    pub(crate) fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }
}

impl TreeNode {
    pub fn root(element: ElementRef, dispatcher: Arc<dyn DetailDispatcher>, paths: Arc<dyn PathResolver>) -> Self {
        let context = Arc::new(TreeContext { dispatcher, paths });
        Self::with_context(element, Vec::new(), context)
    }

    fn with_context(element: ElementRef, index_path: Vec<usize>, context: Arc<TreeContext>) -> Self {
        let id = NodeId::next();
        Self {
            inner: Arc::new(NodeInner {
                id,
                element,
                index_path,
                children: ObservableVec::new(),
                details: ObservableVec::new(),
                expanded: AtomicBool::new(false),
                selected: AtomicBool::new(false),
                selection: SelectionListeners::new(),
                forwarders: Mutex::new(Vec::new()),
                context,
            }),
        }
    }

    fn child(&self, element: ElementRef, index: usize) -> Self {
        let mut index_path = self.inner.index_path.clone();
        index_path.push(index);
        Self::with_context(element, index_path, Arc::clone(&self.inner.context))
    }

    pub fn id(&self) -> NodeId {
        self.inner.id
    }

    pub(crate) fn downgrade(&self) -> WeakTreeNode {
        WeakTreeNode(Arc::downgrade(&self.inner))
    }

    pub fn element(&self) -> &ElementRef {
        &self.inner.element
    }

    pub fn index_path(&self) -> &[usize] {
        &self.inner.index_path
    }

    pub fn name(&self) -> Option<String> {
        self.text_property(PropertyId::Name)
    }

    pub fn automation_id(&self) -> Option<String> {
        self.text_property(PropertyId::AutomationId)
    }

    /// Control type, `Custom` when the element does not report one.
    pub fn control_type(&self) -> String {
        self.text_property(PropertyId::ControlType)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| "Custom".to_owned())
    }

    /// Structural path computed by the tree's [`PathResolver`].
    pub fn path(&self) -> String {
        self.inner.context.paths.path(self.inner.element.as_ref(), &self.inner.index_path)
    }

    fn text_property(&self, property: PropertyId) -> Option<String> {
        match self.inner.element.property(property) {
            Ok(AttrValue::Value(value)) => normalize_label(Some(&value.to_string())),
            Ok(AttrValue::Value(UiValue::Null) | AttrValue::Mixed | AttrValue::NotSupported) => None,
            Err(err) => {
                tracing::debug!(%err, node = %self.id(), %property, "property read failed");
                None
            }
        }
    }

    pub fn children(&self) -> &ObservableVec<TreeNode> {
        &self.inner.children
    }

    pub fn details(&self) -> &ObservableVec<DetailGroup> {
        &self.inner.details
    }

    pub fn selection(&self) -> &SelectionListeners {
        &self.inner.selection
    }

    pub fn is_expanded(&self) -> bool {
        self.inner.expanded.load(Ordering::SeqCst)
    }

    pub fn is_selected(&self) -> bool {
        self.inner.selected.load(Ordering::SeqCst)
    }

    /// Expanding reloads the children with a one level prefetch.
    pub fn set_expanded(&self, expanded: bool) {
        self.inner.expanded.store(expanded, Ordering::SeqCst);
        if expanded {
            self.load_children(true);
        }
    }

    /// Selecting starts detail extraction and notifies this node's and every ancestor's listeners.
    pub fn set_selected(&self, selected: bool) {
        if selected {
            self.inner.context.dispatcher.dispatch(self);
            self.inner.selection.notify(self);
        }
        self.inner.selected.store(selected, Ordering::SeqCst);
    }

    /// Replaces the children with a fresh snapshot of the element's children.
    ///
    /// With `recursive` each new child also loads its own children, one level
    /// only. A failed enumeration leaves this node without children.
    pub fn load_children(&self, recursive: bool) {
        for (listeners, id) in lock(&self.inner.forwarders).drain(..) {
            listeners.unsubscribe(id);
        }

        let elements = match self.enumerate_children() {
            Ok(elements) => elements,
            Err(err) => {
                tracing::warn!(%err, node = %self.id(), path = %self.path(), "failed to enumerate children");
                Vec::new()
            }
        };

        let mut forwarders = Vec::with_capacity(elements.len());
        let children: Vec<TreeNode> = elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| {
                let child = self.child(element, index);
                let id = child.inner.selection.forward_to(&self.inner.selection);
                forwarders.push((child.inner.selection.clone(), id));
                if recursive {
                    child.load_children(false);
                }
                child
            })
            .collect();

        *lock(&self.inner.forwarders) = forwarders;
        tracing::debug!(node = %self.id(), children = children.len(), recursive, "loaded children");
        self.inner.children.reset(children);
    }

    fn enumerate_children(&self) -> Result<Vec<ElementRef>, PlatformError> {
        self.inner.element.children()?.collect()
    }

    pub fn publish_details(&self, groups: Vec<DetailGroup>) {
        self.inner.details.reset(groups);
    }

    pub fn clear_details(&self) {
        self.inner.details.clear();
    }
}

impl fmt::Debug for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeNode")
            .field("id", &self.inner.id)
            .field("index_path", &self.inner.index_path)
            .field("children", &self.inner.children.len())
            .finish_non_exhaustive()
    }
}
