use crate::element::MockElement;
use crate::tree::current_tree;
use uiscope_core::{ElementRef, ElementSource, PlatformError, PlatformErrorKind, SourceDescriptor, register_element_source};

pub const MOCK_SOURCE_ID: &str = "mock";

/// Serves the installed mock tree, or the embedded one when none is installed.
pub struct MockSource {
    descriptor: SourceDescriptor,
}

pub static MOCK_SOURCE: MockSource =
    MockSource { descriptor: SourceDescriptor::new(MOCK_SOURCE_ID, "Mock tree", -100) };

impl ElementSource for MockSource {
    fn descriptor(&self) -> &SourceDescriptor {
        &self.descriptor
    }

    fn root(&self) -> Result<ElementRef, PlatformError> {
        let tree = current_tree().map_err(|err| {
            tracing::error!(%err, "failed to load mock tree");
            PlatformError::new(PlatformErrorKind::InitializationFailed, err.to_string())
        })?;
        let (root, _) = MockElement::from_tree(&tree);
        Ok(root)
    }
}

register_element_source!(&MOCK_SOURCE);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{ElementSpec, StaticMockTree, install_mock_tree};
    use rstest::rstest;
    use serial_test::serial;
    use uiscope_core::{AttrValue, PropertyId, UiValue, find_element_source};

    #[rstest]
    fn source_is_registered() {
        let source = find_element_source(MOCK_SOURCE_ID).expect("mock source registered");
        assert_eq!(source.descriptor().display_name, "Mock tree");
    }

    #[rstest]
    #[serial]
    fn installed_tree_replaces_embedded_until_guard_drops() {
        {
            let _guard = install_mock_tree(StaticMockTree::new(ElementSpec::new("Pane", "Scratch")));
            let root = MOCK_SOURCE.root().unwrap();
            assert_eq!(root.property(PropertyId::Name).unwrap(), AttrValue::Value(UiValue::from("Scratch")));
        }
        let root = MOCK_SOURCE.root().unwrap();
        assert_eq!(root.property(PropertyId::Name).unwrap(), AttrValue::Value(UiValue::from("Desktop")));
    }
}
