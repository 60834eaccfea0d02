//! Inspection core: lazy element tree, per-element detail extraction and the
//! session that connects selection to background extraction.

pub mod detail;
pub mod engine;
pub mod error;
pub mod events;
pub mod normalize;
pub mod observable;
pub mod path;
pub mod patterns;
pub mod sentinel;
pub mod session;
mod sync;
pub mod tree;

pub use detail::{DetailGroup, DetailItem};
pub use engine::{DETAILS_GROUP, IDENTIFICATION_GROUP, PATTERN_SUPPORT_GROUP, extract_details, format_native_window_handle};
pub use error::ExtractionError;
pub use events::{SelectionListeners, SubscriptionId};
pub use normalize::{normalize_label, normalize_str};
pub use observable::{CollectionChange, ObservableVec, ObserverId};
pub use path::{IndexPathResolver, PathResolver, parse_index_path};
pub use session::{DetailsReady, InspectionSession, SessionEvent};
pub use tree::{DetailDispatcher, InlineDispatcher, NodeId, TreeNode};
