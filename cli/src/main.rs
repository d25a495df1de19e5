//! pagemark CLI - resolve document headings to page numbers

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use pagemark::render::{self, JsonFormat};
use pagemark::{
    load_corpus, resolve_batch, resolve_html, resolve_source, DocumentSource, Outline,
    ResolutionStats, ResolveOptions, ResolvedOutline, StrategyKind,
};

#[derive(Parser)]
#[command(name = "pagemark")]
#[command(version)]
#[command(about = "Resolve extracted document headings to the pages they appear on", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Input document source (JSON)
    #[arg(value_name = "SOURCE")]
    input: Option<PathBuf>,

    /// Output file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(flatten)]
    resolve: ResolveArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one document's headings to pages
    Resolve {
        /// Document source JSON (title, headings, pages)
        #[arg(long, value_name = "FILE", conflicts_with = "html", required_unless_present = "html")]
        source: Option<PathBuf>,

        /// Converter HTML rendering to take headings and title from
        #[arg(long, value_name = "FILE", requires = "pages")]
        html: Option<PathBuf>,

        /// Page text: JSON list/object, or form-feed separated .txt
        #[arg(long, visible_alias = "text", value_name = "FILE")]
        pages: Option<PathBuf>,

        /// Override the document title
        #[arg(long)]
        title: Option<String>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Print resolution statistics to stderr
        #[arg(long)]
        report: bool,

        #[command(flatten)]
        resolve: ResolveArgs,
    },

    /// Resolve every source JSON in a directory
    Batch {
        /// Directory containing document source JSON files
        #[arg(value_name = "INPUT_DIR")]
        input: PathBuf,

        /// Directory to write outlines to
        #[arg(value_name = "OUTPUT_DIR")]
        output: PathBuf,

        #[command(flatten)]
        resolve: ResolveArgs,
    },

    /// Display an outline JSON as a tree
    Show {
        /// Outline JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Args, Clone, Default)]
struct ResolveArgs {
    /// Word-overlap threshold (0-1]
    #[arg(long, value_name = "RATIO", env = "PAGEMARK_THRESHOLD")]
    threshold: Option<f64>,

    /// Words per sliding phrase
    #[arg(long, value_name = "WORDS")]
    phrase_window: Option<usize>,

    /// Match strategies in attempt order
    #[arg(long, value_enum, value_delimiter = ',')]
    strategies: Option<Vec<StrategyArg>>,

    /// Do not skip the first occurrence of the first heading
    #[arg(long)]
    no_skip_first: bool,

    /// Repair ligatures and hyphenated line breaks before matching
    #[arg(long)]
    repair: bool,
}

impl ResolveArgs {
    fn options(&self) -> ResolveOptions {
        let mut options = ResolveOptions::new()
            .with_skip_first_occurrence(!self.no_skip_first)
            .with_repair(self.repair);

        if let Some(threshold) = self.threshold {
            options = options.with_overlap_threshold(threshold);
        }
        if let Some(window) = self.phrase_window {
            options = options.with_phrase_window(window);
        }
        if let Some(ref strategies) = self.strategies {
            options = options.with_strategies(strategies.iter().map(|s| (*s).into()).collect());
        }
        options
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    /// Literal match of the normalized heading
    Exact,
    /// Most heading words on the page
    Overlap,
    /// Three consecutive heading words on the page
    Phrase,
}

impl From<StrategyArg> for StrategyKind {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Exact => StrategyKind::Exact,
            StrategyArg::Overlap => StrategyKind::WordOverlap,
            StrategyArg::Phrase => StrategyKind::Phrase,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Resolve {
            source,
            html,
            pages,
            title,
            output,
            compact,
            report,
            resolve,
        }) => {
            let input = match (source, html) {
                (Some(source), _) => Input::Source(source),
                (None, Some(html)) => Input::Html { html, pages },
                (None, None) => Input::Missing,
            };
            cmd_resolve(
                input,
                title,
                output.as_deref(),
                compact,
                report,
                &resolve.options(),
            )
        }
        Some(Commands::Batch {
            input,
            output,
            resolve,
        }) => cmd_batch(&input, &output, &resolve.options()),
        Some(Commands::Show { input }) => cmd_show(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: resolve if a source is provided
            if let Some(input) = cli.input {
                cmd_resolve(
                    Input::Source(input),
                    None,
                    cli.output.as_deref(),
                    false,
                    false,
                    &cli.resolve.options(),
                )
            } else {
                println!("{}", "Usage: pagemark <SOURCE> [OUTPUT]".yellow());
                println!("       pagemark --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

enum Input {
    Source(PathBuf),
    Html {
        html: PathBuf,
        pages: Option<PathBuf>,
    },
    Missing,
}

fn cmd_resolve(
    input: Input,
    title: Option<String>,
    output: Option<&Path>,
    compact: bool,
    report: bool,
    options: &ResolveOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    debug!("Resolving with {:?}", options);
    let mut resolved = match input {
        Input::Source(path) => {
            let source = DocumentSource::from_path(&path)?;
            resolve_source(&source, options)?
        }
        Input::Html { html, pages } => {
            let pages = pages.ok_or("--html requires --pages")?;
            let markup = fs::read_to_string(&html)?;
            let corpus = load_corpus(&pages)?;
            resolve_html(&markup, corpus, Some(&html), options)?
        }
        Input::Missing => return Err("either --source or --html is required".into()),
    };

    if let Some(title) = title {
        resolved.outline.title = title;
    }

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = render::to_json(&resolved.outline, format)?;

    if report {
        print_report(&resolved);
    }

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_batch(
    input_dir: &Path,
    output_dir: &Path,
    options: &ResolveOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    options.validate()?;

    let files = collect_sources(input_dir)?;
    if files.is_empty() {
        println!(
            "{} {}",
            "No source files found in".yellow(),
            input_dir.display()
        );
        return Ok(());
    }

    fs::create_dir_all(output_dir)?;
    debug!("Writing outlines to {}", output_dir.display());
    println!("Found {} source files to process", files.len());

    let started = Instant::now();
    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    // Sources that fail to load are reported alongside resolution failures.
    let mut failures: Vec<(PathBuf, String)> = Vec::new();
    let mut sources = Vec::with_capacity(files.len());
    pb.set_message("Loading sources...");
    for path in files {
        match DocumentSource::from_path(&path) {
            Ok(source) => sources.push((path, source)),
            Err(e) => {
                failures.push((path, e.to_string()));
                pb.inc(1);
            }
        }
    }

    pb.set_message("Resolving...");
    let results = resolve_batch(sources, options);

    let mut totals = ResolutionStats::new();
    let mut written = Vec::new();
    for (path, result) in results {
        match result {
            Ok(resolved) => {
                let target = output_path_for(&path, output_dir);
                match write_outline(&resolved.outline, &target) {
                    Ok(()) => {
                        totals.merge(&resolved.report.stats);
                        written.push((path, target, resolved.outline.len()));
                    }
                    Err(e) => failures.push((path, e.to_string())),
                }
            }
            Err(e) => failures.push((path, e.to_string())),
        }
        pb.inc(1);
    }
    pb.finish_with_message("Done!");

    println!();
    for (source, target, headings) in &written {
        println!(
            "{} {} -> {} ({} headings)",
            "✓".green(),
            file_label(source),
            target.display(),
            headings
        );
    }
    for (source, error) in &failures {
        println!("{} {}: {}", "✗".red(), file_label(source), error);
    }

    println!(
        "\n{} {} processed, {} failed in {:.2}s",
        "Batch complete:".green().bold(),
        written.len(),
        failures.len(),
        started.elapsed().as_secs_f64()
    );
    print_stats(&totals);

    if failures.is_empty() {
        Ok(())
    } else {
        Err(format!("{} of the source files failed", failures.len()).into())
    }
}

fn cmd_show(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let json = fs::read_to_string(input)?;
    let outline: Outline = serde_json::from_str(&json)?;
    print!("{}", render::to_text(&outline));
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pagemark".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Heading-to-page outline resolver");
    println!();
    println!("License: MIT");
}

fn print_report(resolved: &ResolvedOutline) {
    for record in resolved.report.estimated() {
        eprintln!(
            "{} '{}' estimated on page {}",
            "⚠".yellow(),
            record.text,
            record.page
        );
    }
    print_stats(&resolved.report.stats);
}

fn print_stats(stats: &ResolutionStats) {
    eprintln!("{}", "Resolution Statistics".cyan().bold());
    eprintln!("{}", "─".repeat(40).dimmed());
    eprintln!("{}: {}", "Headings".bold(), stats.heading_count);
    for (strategy, count) in &stats.matched {
        eprintln!("{}: {}", format!("Matched ({})", strategy).bold(), count);
    }
    eprintln!("{}: {}", "Estimated".bold(), stats.estimated);
    eprintln!(
        "{}: {:.1}%",
        "Match rate".bold(),
        stats.match_rate() * 100.0
    );
}

/// `*.json` files directly inside `dir`, sorted by name.
fn collect_sources(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.eq_ignore_ascii_case("json"))
        })
        .collect();
    files.sort();
    Ok(files)
}

fn write_outline(outline: &Outline, target: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let json = render::to_json(outline, JsonFormat::Pretty)?;
    fs::write(target, json)?;
    Ok(())
}

fn output_path_for(source: &Path, output_dir: &Path) -> PathBuf {
    let stem = source.file_stem().unwrap_or_default().to_string_lossy();
    output_dir.join(format!("{}.json", stem))
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_for() {
        let target = output_path_for(Path::new("/in/file02.json"), Path::new("/out"));
        assert_eq!(target, PathBuf::from("/out/file02.json"));
    }

    #[test]
    fn test_batch_continues_after_write_failure() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let source = r#"{"headings": [{"level": "H1", "text": "Summary"}], "pages": ["Summary"]}"#;
        fs::write(input.path().join("a.json"), source).unwrap();
        fs::write(input.path().join("b.json"), source).unwrap();
        // A directory where a.json's outline would go makes that write fail.
        fs::create_dir(output.path().join("a.json")).unwrap();

        let result = cmd_batch(input.path(), output.path(), &ResolveOptions::default());
        assert!(result.is_err());

        let written = fs::read_to_string(output.path().join("b.json")).unwrap();
        let outline: Outline = serde_json::from_str(&written).unwrap();
        assert_eq!(outline.headings[0].page, 1);
    }

    #[test]
    fn test_collect_sources_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();
        fs::write(dir.path().join("a.JSON"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("nested.json")).unwrap();

        let files = collect_sources(dir.path()).unwrap();
        let names: Vec<String> = files.iter().map(|p| file_label(p)).collect();
        assert_eq!(names, vec!["a.JSON", "b.json"]);
    }

    #[test]
    fn test_resolve_args_to_options() {
        let args = ResolveArgs {
            threshold: Some(0.9),
            phrase_window: Some(4),
            strategies: Some(vec![StrategyArg::Exact, StrategyArg::Phrase]),
            no_skip_first: true,
            repair: true,
        };
        let options = args.options();
        assert_eq!(options.overlap_threshold, 0.9);
        assert_eq!(options.phrase_window, 4);
        assert_eq!(
            options.strategies,
            vec![StrategyKind::Exact, StrategyKind::Phrase]
        );
        assert!(!options.skip_first_occurrence);
        assert!(options.repair_text);
    }

    #[test]
    fn test_default_resolve_args_match_library_defaults() {
        assert!(ResolveArgs::default().options() == ResolveOptions::default());
    }

    #[test]
    fn test_cli_parses_resolve_command() {
        let cli = Cli::try_parse_from([
            "pagemark",
            "resolve",
            "--html",
            "doc.html",
            "--pages",
            "doc.txt",
            "--strategies",
            "exact,overlap",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Commands::Resolve { .. })));
    }

    #[test]
    fn test_cli_html_requires_pages() {
        let result = Cli::try_parse_from(["pagemark", "resolve", "--html", "doc.html"]);
        assert!(result.is_err());
    }
}
