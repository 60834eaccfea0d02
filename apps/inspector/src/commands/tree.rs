use crate::OutputFormat;
use crate::util::{colorize_node_label, colorize_path, node_label};
use clap::Args;
use serde::Serialize;
use std::fmt::Write;
use uiscope_core::ElementRef;
use uiscope_inspect::{InspectionSession, TreeNode};

#[derive(Args, Debug, Clone)]
pub struct TreeArgs {
    #[arg(long, value_name = "N", help = "Stop after N levels below the root")]
    pub depth: Option<usize>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub(crate) struct TreeEntry {
    path: String,
    control_type: String,
    name: Option<String>,
    automation_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<TreeEntry>,
}

pub fn run(root: ElementRef, args: &TreeArgs, format: OutputFormat) -> anyhow::Result<String> {
    let session = InspectionSession::new(root);
    let entry = collect(session.root(), args.depth);
    let output = match format {
        OutputFormat::Text => render_tree_text(&entry),
        OutputFormat::Json => serde_json::to_string_pretty(&entry)?,
    };
    Ok(output)
}

fn collect(node: &TreeNode, remaining: Option<usize>) -> TreeEntry {
    let children = if remaining == Some(0) {
        Vec::new()
    } else {
        node.load_children(false);
        let next = remaining.map(|depth| depth - 1);
        node.children().snapshot().iter().map(|child| collect(child, next)).collect()
    };
    TreeEntry {
        path: node.path(),
        control_type: node.control_type(),
        name: node.name(),
        automation_id: node.automation_id(),
        children,
    }
}

pub(crate) fn render_tree_text(root: &TreeEntry) -> String {
    let mut output = String::new();
    write_entry(&mut output, root, 0);
    output.trim_end().to_owned()
}

fn write_entry(output: &mut String, entry: &TreeEntry, level: usize) {
    let label = node_label(&entry.control_type, entry.name.as_deref(), entry.automation_id.as_deref());
    let _ = writeln!(
        output,
        "{:indent$}{}  {}",
        "",
        colorize_node_label(&label),
        colorize_path(&entry.path),
        indent = level * 2
    );
    for child in &entry.children {
        write_entry(output, child, level + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::strip_ansi;
    use rstest::{fixture, rstest};
    use uiscope_provider_mock::{ElementSpec, MockElement, StaticMockTree};

    #[fixture]
    fn root() -> ElementRef {
        let tree = StaticMockTree::embedded().expect("embedded tree");
        MockElement::from_tree(&tree).0
    }

    #[rstest]
    fn depth_limits_levels(root: ElementRef) {
        let output = run(root, &TreeArgs { depth: Some(1) }, OutputFormat::Text).expect("tree");
        let plain = strip_ansi(&output);
        let lines: Vec<_> = plain.lines().collect();
        assert_eq!(lines, ["Pane \"Desktop\" [Desktop]  /", "  Window \"Order Entry\" [MainWindow]  /0"]);
    }

    #[rstest]
    fn full_tree_indents_children(root: ElementRef) {
        let output = run(root, &TreeArgs { depth: None }, OutputFormat::Text).expect("tree");
        let plain = strip_ansi(&output);
        assert!(plain.contains("\n    Edit \"Customer\" [CustomerField]  /0/0\n"));
        assert!(plain.contains("\n      DataItem \"Widget\" [Row0]  /0/3/0\n"));
        assert!(plain.contains("\n        Custom \"Widget\" [Row0Cell0]  /0/3/0/0\n"));
    }

    #[rstest]
    fn failed_enumeration_prints_no_children(root: ElementRef) {
        let output = run(root, &TreeArgs { depth: None }, OutputFormat::Text).expect("tree");
        let plain = strip_ansi(&output);
        assert!(plain.contains("Tree \"Categories\" [CategoryTree]  /0/4"));
        assert!(!plain.contains("Hardware"));
    }

    #[rstest]
    fn each_element_is_enumerated_once() {
        let tree = StaticMockTree::new(
            ElementSpec::new("Window", "Main")
                .with_children([ElementSpec::new("Button", "OK"), ElementSpec::new("Button", "Cancel")]),
        );
        let (root, stats) = MockElement::from_tree(&tree);
        let output = run(root, &TreeArgs { depth: None }, OutputFormat::Text).expect("tree");
        assert_eq!(strip_ansi(&output).lines().count(), 3);
        // one child enumeration plus three label reads per element
        assert_eq!(stats.round_trips(), 12);
    }

    #[rstest]
    fn json_nests_children(root: ElementRef) {
        let output = run(root, &TreeArgs { depth: Some(2) }, OutputFormat::Json).expect("tree");
        let json: serde_json::Value = serde_json::from_str(&output).expect("json");
        assert_eq!(json["control_type"], "Pane");
        assert_eq!(json["children"][0]["name"], "Order Entry");
        assert_eq!(json["children"][0]["children"][1]["path"], "/0/1");
        assert!(json["children"][0]["children"][1].get("children").is_none());
    }
}
