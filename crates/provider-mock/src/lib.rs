//! Deterministic in-memory accessibility tree.
//!
//! Trees are described with [`ElementSpec`] builders or loaded from XML
//! (see `assets/mock_tree.xml`). Elements can be configured to fail, which
//! makes the crate the platform double for the inspection tests.

mod element;
mod source;
mod tree;

pub use element::{MockElement, MockStats};
pub use source::{MOCK_SOURCE, MOCK_SOURCE_ID, MockSource};
pub use tree::{ElementSpec, MockTreeLoadError, PatternSpec, StaticMockTree, TreeGuard, install_mock_tree};
