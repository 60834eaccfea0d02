//! Terminal front end: prints the element tree and the detail groups of one element.

mod commands;
mod util;

use anyhow::{Context, anyhow, bail};
use clap::{ArgAction, Parser, Subcommand};
use commands::details::DetailsArgs;
use commands::tree::TreeArgs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use uiscope_core::{ElementSource, element_sources, find_element_source};
use uiscope_provider_mock::{MOCK_SOURCE_ID, StaticMockTree, TreeGuard, install_mock_tree};
#[cfg(windows)]
use uiscope_provider_windows_uia as _;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "uiscope-inspector", version, about = "Inspect accessibility trees and per-element pattern details")]
pub struct Cli {
    #[arg(long, global = true, value_name = "ID", help = "Element source to use (defaults to the highest-priority one)")]
    pub provider: Option<String>,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long = "mock-tree", global = true, value_name = "FILE", help = "Serve this XML tree through the mock source")]
    pub mock_tree: Option<PathBuf>,

    #[arg(long = "no-color", global = true, help = "Disable ANSI colors in text output.")]
    pub no_color: bool,

    #[arg(short, long, global = true, action = ArgAction::Count, help = "Raise the log level (-v info, -vv debug)")]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the element tree below the root.
    Tree(TreeArgs),
    /// Print the detail groups of the element at an index path.
    Details(DetailsArgs),
    /// List the pattern catalog.
    Patterns,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let output = execute(&cli)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

pub fn execute(cli: &Cli) -> anyhow::Result<String> {
    if cli.no_color {
        owo_colors::set_override(false);
    }
    let _guard = cli.mock_tree.as_deref().map(load_mock_tree).transpose()?;

    match &cli.command {
        Command::Patterns => commands::patterns::run(cli.format),
        Command::Tree(args) => {
            let root = resolve_source(cli)?.root()?;
            commands::tree::run(root, args, cli.format)
        }
        Command::Details(args) => {
            let root = resolve_source(cli)?.root()?;
            commands::details::run(root, args, cli.format)
        }
    }
}

fn resolve_source(cli: &Cli) -> anyhow::Result<&'static dyn ElementSource> {
    let requested = cli.provider.as_deref().or(cli.mock_tree.as_ref().map(|_| MOCK_SOURCE_ID));
    let source = match requested {
        Some(id) => find_element_source(id).ok_or_else(|| {
            let available =
                element_sources().iter().map(|source| source.descriptor().id).collect::<Vec<_>>().join(", ");
            anyhow!("unknown provider `{id}` (available: {available})")
        })?,
        None => match element_sources().first() {
            Some(source) => *source,
            None => bail!("no element source is registered"),
        },
    };
    tracing::info!(provider = source.descriptor().id, "using element source");
    Ok(source)
}

fn load_mock_tree(path: &Path) -> anyhow::Result<TreeGuard> {
    let xml = std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let tree = StaticMockTree::from_xml(&xml).with_context(|| format!("invalid mock tree {}", path.display()))?;
    Ok(install_mock_tree(tree))
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => std::env::var("UISCOPE_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok()
            .and_then(|spec| EnvFilter::try_new(spec).ok())
            .unwrap_or_else(|| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::strip_ansi;
    use clap::CommandFactory;
    use rstest::rstest;
    use serial_test::serial;
    use std::io::Write;

    const SMALL_TREE: &str = r#"<tree>
  <element control_type="Pane" name="Desktop">
    <element control_type="Button" name="OK" automation_id="okButton">
      <pattern id="Invoke"/>
    </element>
  </element>
</tree>"#;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("uiscope-inspector").chain(args.iter().copied())).expect("arguments")
    }

    #[rstest]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[rstest]
    fn global_flags_follow_subcommand() {
        let cli = parse(&["details", "/0/1", "--format", "json", "-vv", "--provider", "mock"]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.provider.as_deref(), Some("mock"));
        assert!(matches!(cli.command, Command::Details(ref args) if args.path == "/0/1"));
    }

    #[rstest]
    fn unknown_provider_lists_available_sources() {
        let cli = parse(&["--provider", "nope", "tree"]);
        let err = execute(&cli).unwrap_err().to_string();
        assert!(err.contains("unknown provider `nope`"));
        assert!(err.contains("mock"));
    }

    #[rstest]
    #[serial]
    fn mock_tree_file_selects_mock_source() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(SMALL_TREE.as_bytes()).expect("write");
        let path = file.path().to_string_lossy().into_owned();

        let cli = parse(&["--no-color", "--mock-tree", &path, "tree"]);
        let output = execute(&cli).expect("tree");
        let plain = strip_ansi(&output);
        assert!(plain.contains("Pane \"Desktop\""));
        assert!(plain.contains("  Button \"OK\" [okButton]"));
    }

    #[rstest]
    #[serial]
    fn invalid_mock_tree_is_reported() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"<tree></tree>").expect("write");
        let path = file.path().to_string_lossy().into_owned();

        let cli = parse(&["--mock-tree", &path, "tree"]);
        let err = execute(&cli).unwrap_err();
        assert!(err.to_string().starts_with("invalid mock tree"));
    }
}
