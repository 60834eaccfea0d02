use crate::OutputFormat;
use crate::util::colorize_group_name;
use serde::Serialize;
use std::fmt::Write;
use uiscope_core::{PatternId, TextAttribute, pattern_properties};
use uiscope_inspect::patterns::methods_of;

#[derive(Serialize, Debug, PartialEq)]
struct PatternSummary {
    name: &'static str,
    properties: Vec<&'static str>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    methods: &'static [&'static str],
}

pub fn run(format: OutputFormat) -> anyhow::Result<String> {
    let summaries: Vec<_> = PatternId::ALL
        .iter()
        .map(|pattern| PatternSummary {
            name: pattern.name(),
            properties: readable_names(*pattern),
            methods: methods_of(*pattern),
        })
        .collect();
    let output = match format {
        OutputFormat::Text => render_patterns_text(&summaries),
        OutputFormat::Json => serde_json::to_string_pretty(&summaries)?,
    };
    Ok(output)
}

/// Pattern properties, or the document-range attributes for the text pattern.
fn readable_names(pattern: PatternId) -> Vec<&'static str> {
    if pattern == PatternId::Text {
        TextAttribute::ALL.iter().map(|attribute| attribute.name()).collect()
    } else {
        pattern_properties::for_pattern(pattern).to_vec()
    }
}

fn render_patterns_text(summaries: &[PatternSummary]) -> String {
    let mut output = String::new();
    for summary in summaries {
        let _ = write!(output, "{}", colorize_group_name(summary.name));
        if summary.properties.is_empty() {
            let _ = writeln!(output, " (methods: {})", summary.methods.join(", "));
        } else {
            let _ = writeln!(output, ": {}", summary.properties.join(", "));
        }
    }
    output.trim_end().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::strip_ansi;
    use rstest::rstest;

    #[rstest]
    fn text_lists_catalog_in_order() {
        let output = run(OutputFormat::Text).expect("patterns");
        let plain = strip_ansi(&output);
        let lines: Vec<_> = plain.lines().collect();
        assert_eq!(lines.len(), PatternId::ALL.len());
        assert_eq!(lines[0], "Annotation: AnnotationTypeId, AnnotationTypeName, Author, DateTime, Target");
        assert_eq!(lines[7], "Invoke (methods: Invoke)");
        assert_eq!(lines[25], "Text: ForegroundColor, BackgroundColor, FontName, FontSize, FontWeight");
        assert!(lines[32].starts_with("Window: CanMaximize, CanMinimize, IsModal"));
    }

    #[rstest]
    fn json_omits_empty_method_lists() {
        let output = run(OutputFormat::Json).expect("patterns");
        let json: serde_json::Value = serde_json::from_str(&output).expect("json");
        assert_eq!(json[1]["name"], "Dock");
        assert_eq!(json[1]["properties"][0], "DockPosition");
        assert!(json[1].get("methods").is_none());
        assert_eq!(json[20]["methods"][1], "Cancel");
    }
}
