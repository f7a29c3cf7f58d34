use clap::{Parser, Subcommand};
use codemark_config::Config;
use codemark_lexer::Grammar;
use codemark_render::{HighlightedDocument, Highlighter, TracingHook};
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "codemark")]
#[command(about = "codemark — syntax highlighting to HTML markup")]
#[command(version)]
struct Cli {
    /// Log debug output (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Highlight a source file into a standalone HTML page
    Highlight {
        /// Input source file
        path: String,

        /// JSON settings file
        #[arg(long)]
        config: Option<String>,

        /// JSON grammar file (defaults to JavaScript)
        #[arg(long)]
        grammar: Option<String>,

        /// Number each line
        #[arg(long)]
        line_numbers: bool,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Report strings and comments left unterminated
    Check {
        /// Input source file
        path: String,

        /// JSON grammar file (defaults to JavaScript)
        #[arg(long)]
        grammar: Option<String>,
    },
}

/// Class styles matching the default style table.
const STYLESHEET: &str = r#"pre.code { font-family: monospace; }
pre.code .key { color: #0000b4; font-weight: bold; }
pre.code .idt { color: #1f1f1f; }
pre.code .num { color: #a35200; }
pre.code .str { color: #067d17; }
pre.code .cmt { color: #8c8c8c; font-style: italic; }
pre.code .rgx { color: #b03060; }
pre.code .opr { color: #5f5f5f; }
pre.code .pct { color: #5f5f5f; }"#;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Highlight {
            path,
            config,
            grammar,
            line_numbers,
            output,
        } => cmd_highlight(
            &path,
            config.as_deref(),
            grammar.as_deref(),
            line_numbers,
            output.as_deref(),
        ),
        Command::Check { path, grammar } => cmd_check(&path, grammar.as_deref()),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn load_config(path: Option<&str>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    match Config::from_json_str(&read_source(path)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error in {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn load_grammar(path: Option<&str>) -> Grammar {
    let Some(path) = path else {
        return Grammar::javascript();
    };
    match Grammar::from_json(&read_source(path)) {
        Ok(grammar) => grammar,
        Err(e) => {
            eprintln!("Grammar error in {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_highlight(
    path: &str,
    config_path: Option<&str>,
    grammar_path: Option<&str>,
    line_numbers: bool,
    output: Option<&str>,
) {
    let source = read_source(path);
    let config = load_config(config_path);
    let grammar = load_grammar(grammar_path);

    let hook = TracingHook;
    let highlighter = Highlighter::new(&grammar, config.pretty()).with_trace_hook(&hook);
    let doc = highlighter.highlight_document(&source);

    for warning in &doc.warnings {
        tracing::warn!("{path}: {warning}");
    }

    let title = Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path);
    let page = build_page(title, &doc, line_numbers);

    match output {
        Some(out_path) => {
            if let Err(e) = std::fs::write(out_path, &page) {
                eprintln!("Error writing {out_path}: {e}");
                std::process::exit(1);
            }
            eprintln!("Highlighted: {out_path}");
        }
        None => print!("{page}"),
    }
}

fn cmd_check(path: &str, grammar_path: Option<&str>) {
    let source = read_source(path);
    let grammar = load_grammar(grammar_path);

    // Styling does not affect scanning; the default settings suffice.
    let config = Config::default();
    let doc = Highlighter::new(&grammar, config.pretty()).highlight_document(&source);

    if !doc.warnings.is_empty() {
        for warning in &doc.warnings {
            eprintln!("{path}: {warning}");
        }
        std::process::exit(1);
    }

    eprintln!("OK: {path}");
}

/// Build a standalone HTML page around the highlighted code.
fn build_page(title: &str, doc: &HighlightedDocument, line_numbers: bool) -> String {
    let mut escaped_title = String::new();
    codemark_render::escape::escape_text(title, &mut escaped_title);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"UTF-8\">\n");
    html.push_str(&format!("  <title>{escaped_title}</title>\n"));
    html.push_str(&format!("  <style>\n{STYLESHEET}\n  </style>\n"));
    html.push_str("</head>\n<body>\n");
    html.push_str(&doc.to_html(line_numbers));
    html.push_str("\n</body>\n</html>\n");
    html
}
