//! Command-line SVG to JSON converter
//!
//! Reads SVG markup from a file, a directory of files, an inline argument, or
//! stdin, and emits the parsed node tree as JSON. Directory input is merged
//! into one document by default; `--separated` emits one JSON file per input.

mod sniff;

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use sniff::is_svg;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use svgson_core::{
    aggregate_merged, aggregate_separated, BatchItem, JsonOptions, JsonSerializer, Node,
    ParseOptions,
};

#[derive(Parser, Debug)]
#[command(
    name = "svgson",
    version,
    about = "Convert SVG markup into a JSON AST",
    long_about = "Convert SVG markup into a JSON AST.\n\n\
        INPUT may be an SVG file, a directory of SVG files, or a raw SVG string; \
        stdin is read when piped and no input is given. Directory contents are \
        merged into a single document unless --separated is set."
)]
struct Args {
    /// SVG file, directory of SVG files, or inline SVG markup
    input: Option<String>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Write one JSON document per input file instead of merging
    #[arg(short, long)]
    separated: bool,

    /// Normalize attribute names to camelCase
    #[arg(short, long)]
    camelcase: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    const fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    const fn should_show_output(self) -> bool {
        !matches!(self, Self::Quiet)
    }

    const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose)
    }
}

/// Where and how parsed trees are written
struct Emitter {
    output: Option<PathBuf>,
    serializer: JsonSerializer,
}

impl Emitter {
    /// Serialize one node and write it to the output sink
    ///
    /// With `-o`, `name` distinguishes per-item files in separated mode:
    /// `out.json` + name `icon` becomes `out_icon.json`.
    fn emit(&self, node: &Node, name: Option<&str>) -> Result<()> {
        let json = self.serializer.serialize_node(node)?;
        match &self.output {
            Some(output) => {
                let path = output_path(output, name);
                fs::write(&path, json)
                    .with_context(|| format!("failed to write {}", path.display()))?;
            }
            None => println!("{json}"),
        }
        Ok(())
    }
}

/// Build the output file path, appending `_<name>` before the `.json`
/// extension for per-item output
fn output_path(output: &Path, name: Option<&str>) -> PathBuf {
    let raw = output.to_string_lossy();
    let stem = raw.strip_suffix(".json").unwrap_or(&raw);
    match name {
        Some(name) => PathBuf::from(format!("{stem}_{name}.json")),
        None => PathBuf::from(format!("{stem}.json")),
    }
}

/// Sniff and parse a single document
fn check_and_parse(text: &str, options: &ParseOptions) -> Result<Node> {
    if !is_svg(text) {
        bail!("input is not SVG");
    }
    svgson_core::parse(text, options).context("failed to parse SVG")
}

/// Convert every SVG file in a directory
fn convert_directory(
    dir: &Path,
    separated: bool,
    options: &ParseOptions,
    emitter: &Emitter,
    verbosity: Verbosity,
) -> Result<()> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    let mut items = Vec::new();
    for path in &paths {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        if !is_svg(&text) {
            if verbosity.should_show_output() {
                eprintln!(
                    "{} {} is not SVG, skipping",
                    "Skip:".yellow().bold(),
                    path.display()
                );
            }
            continue;
        }
        let id = path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        items.push(BatchItem::new(id, text));
    }

    if verbosity.is_verbose() {
        eprintln!(
            "{} Converting {} files from {}",
            "Info:".blue().bold(),
            items.len(),
            dir.display()
        );
    }

    if separated {
        let outcomes = aggregate_separated(&items, options);
        let mut failed = 0usize;
        for outcome in &outcomes {
            match &outcome.result {
                Ok(node) => {
                    emitter.emit(node, Some(&outcome.id))?;
                    if verbosity.is_verbose() {
                        eprintln!("{} {}", "✓".green().bold(), outcome.id);
                    }
                }
                Err(err) => {
                    failed += 1;
                    eprintln!("{} {} - {err}", "✗".red().bold(), outcome.id);
                }
            }
        }
        if failed > 0 && failed == outcomes.len() {
            bail!("all {failed} files failed to convert");
        }
    } else if let Some(node) = aggregate_merged(&items, options)? {
        emitter.emit(&node, None)?;
    } else if verbosity.should_show_output() {
        eprintln!("{} No SVG files found in {}", "Info:".blue().bold(), dir.display());
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let verbosity = Verbosity::from_flags(args.quiet, args.verbose);
    let options = ParseOptions {
        camelcase: args.camelcase,
    };
    let emitter = Emitter {
        output: args.output.clone(),
        serializer: JsonSerializer::with_options(JsonOptions {
            pretty: args.pretty,
            indent: "    ".to_string(),
        }),
    };

    // Piped stdin takes precedence over the positional argument
    if !io::stdin().is_terminal() {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        if !text.trim().is_empty() {
            let node = check_and_parse(&text, &options)?;
            return emitter.emit(&node, None);
        }
    }

    let Some(input) = args.input else {
        bail!("no input provided (pass a file, directory, or SVG string, or pipe stdin)");
    };

    // Inline markup
    if is_svg(&input) {
        let node = svgson_core::parse(&input, &options).context("failed to parse SVG")?;
        return emitter.emit(&node, None);
    }

    let path = Path::new(&input);
    if path.is_dir() {
        return convert_directory(path, args.separated, &options, &emitter, verbosity);
    }

    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let node = check_and_parse(&text, &options)?;
    emitter.emit(&node, None)
}
