use uiscope_core::AccessibilityElement;

/// Computes the structural path string shown for a node.
pub trait PathResolver: Send + Sync {
    fn path(&self, element: &dyn AccessibilityElement, index_path: &[usize]) -> String;
}

/// Renders the child-index path from the root, e.g. `/0/2/1`; the root is `/`.
#[derive(Clone, Copy, Debug, Default)]
pub struct IndexPathResolver;

impl PathResolver for IndexPathResolver {
    fn path(&self, _element: &dyn AccessibilityElement, index_path: &[usize]) -> String {
        if index_path.is_empty() {
            return "/".to_owned();
        }
        index_path.iter().map(|index| format!("/{index}")).collect()
    }
}

/// Parses an index path produced by [`IndexPathResolver`].
pub fn parse_index_path(path: &str) -> Option<Vec<usize>> {
    let trimmed = path.trim();
    let rest = trimmed.strip_prefix('/')?;
    if rest.is_empty() {
        return Some(Vec::new());
    }
    rest.split('/').map(|segment| segment.parse().ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/", Some(vec![]))]
    #[case("/0/2/1", Some(vec![0, 2, 1]))]
    #[case(" /3 ", Some(vec![3]))]
    #[case("0/1", None)]
    #[case("/0//1", None)]
    #[case("/x", None)]
    fn parses_index_paths(#[case] input: &str, #[case] expected: Option<Vec<usize>>) {
        assert_eq!(parse_index_path(input), expected);
    }
}
