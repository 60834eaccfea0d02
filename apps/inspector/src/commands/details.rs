use crate::OutputFormat;
use crate::util::{colorize_group_name, colorize_important, colorize_node_label, colorize_path, node_label};
use anyhow::{anyhow, bail};
use clap::Args;
use serde::Serialize;
use std::fmt::Write;
use std::time::Duration;
use uiscope_core::ElementRef;
use uiscope_inspect::{DetailGroup, InspectionSession, SessionEvent, parse_index_path};

#[derive(Args, Debug, Clone)]
pub struct DetailsArgs {
    #[arg(value_name = "PATH", help = "Index path of the element, e.g. /0/2/1")]
    pub path: String,

    #[arg(long, value_name = "SECONDS", default_value_t = 10, help = "How long to wait for the extraction")]
    pub timeout: u64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub(crate) struct DetailsSummary {
    path: String,
    control_type: String,
    name: Option<String>,
    automation_id: Option<String>,
    groups: Vec<DetailGroup>,
}

pub fn run(root: ElementRef, args: &DetailsArgs, format: OutputFormat) -> anyhow::Result<String> {
    let indices = parse_index_path(&args.path).ok_or_else(|| anyhow!("invalid element path `{}`", args.path))?;
    let mut session = InspectionSession::new(root);
    let node = session.expand_path(&indices).ok_or_else(|| anyhow!("no element at `{}`", args.path))?;

    session.select(&node);
    match session.wait_for_node(node.id(), Duration::from_secs(args.timeout)) {
        Some(SessionEvent::DetailsPublished { .. }) => {}
        Some(SessionEvent::ExtractionFailed { message, .. }) => {
            bail!("failed to inspect {}: {message}", node.path());
        }
        Some(SessionEvent::StaleDropped { .. }) | None => {
            bail!("timed out waiting for details of {}", node.path());
        }
    }

    let summary = DetailsSummary {
        path: node.path(),
        control_type: node.control_type(),
        name: node.name(),
        automation_id: node.automation_id(),
        groups: node.details().snapshot(),
    };
    let output = match format {
        OutputFormat::Text => render_details_text(&summary),
        OutputFormat::Json => serde_json::to_string_pretty(&summary)?,
    };
    Ok(output)
}

pub(crate) fn render_details_text(summary: &DetailsSummary) -> String {
    let mut output = String::new();
    let label = node_label(&summary.control_type, summary.name.as_deref(), summary.automation_id.as_deref());
    let _ = writeln!(output, "{}  {}", colorize_node_label(&label), colorize_path(&summary.path));
    for group in &summary.groups {
        let _ = writeln!(output, "{}", colorize_group_name(&group.name));
        for item in &group.items {
            let value = if item.important { colorize_important(&item.value) } else { item.value.clone() };
            let _ = writeln!(output, "    {}: {value}", item.label);
        }
    }
    output.trim_end().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::strip_ansi;
    use rstest::{fixture, rstest};
    use uiscope_provider_mock::{MockElement, StaticMockTree};

    #[fixture]
    fn root() -> ElementRef {
        let tree = StaticMockTree::embedded().expect("embedded tree");
        MockElement::from_tree(&tree).0
    }

    fn args(path: &str) -> DetailsArgs {
        DetailsArgs { path: path.to_owned(), timeout: 10 }
    }

    #[rstest]
    fn text_lists_groups_in_order(root: ElementRef) {
        let output = run(root, &args("/0/0"), OutputFormat::Text).expect("details");
        let plain = strip_ansi(&output);
        let headers: Vec<_> = plain.lines().filter(|line| !line.starts_with(' ')).skip(1).collect();
        assert_eq!(headers, ["Identification", "Details", "Pattern Support", "Text Pattern", "Value Pattern"]);
        assert!(plain.starts_with("Edit \"Customer\" [CustomerField]  /0/0"));
        assert!(plain.contains("    Value pattern: yes"));
        assert!(plain.contains("    Toggle pattern: no"));
    }

    #[rstest]
    fn json_carries_groups(root: ElementRef) {
        let output = run(root, &args("/0/1"), OutputFormat::Json).expect("details");
        let json: serde_json::Value = serde_json::from_str(&output).expect("json");
        assert_eq!(json["path"], "/0/1");
        assert_eq!(json["groups"][0]["name"], "Identification");
        assert_eq!(json["groups"][3]["name"], "Invoke Pattern");
    }

    #[rstest]
    fn dead_element_fails(root: ElementRef) {
        let err = run(root, &args("/0/5"), OutputFormat::Text).unwrap_err().to_string();
        assert!(err.starts_with("failed to inspect /0/5"));
        assert!(err.contains("no longer available"));
    }

    #[rstest]
    #[case("0/1", "invalid element path `0/1`")]
    #[case("/0/42", "no element at `/0/42`")]
    fn unresolvable_paths_are_rejected(root: ElementRef, #[case] path: &str, #[case] expected: &str) {
        let err = run(root, &args(path), OutputFormat::Text).unwrap_err();
        assert_eq!(err.to_string(), expected);
    }
}
