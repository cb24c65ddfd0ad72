// ari: parser front-end and syntax tree viewer for the ari scripting language

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use ari::ui::App;
use ari::{parse_with, ParserConfig};

/// Exit status for input that failed to parse (sysexits EX_DATAERR)
const EXIT_DATA_ERROR: u8 = 65;

#[derive(ClapParser)]
#[command(name = "ari")]
#[command(about = "Parse ari programs and inspect their syntax trees")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a file, print diagnostics to stderr and the tree to stdout
    Parse {
        /// Path to the ari source file
        file: PathBuf,
        /// Maximum statement/expression nesting depth
        #[arg(long)]
        max_depth: Option<usize>,
        /// Only report diagnostics, do not print the tree
        #[arg(short, long)]
        quiet: bool,
    },
    /// Open the source, syntax tree and diagnostics in a terminal viewer
    View {
        /// Path to the ari source file
        file: PathBuf,
        /// Maximum statement/expression nesting depth
        #[arg(long)]
        max_depth: Option<usize>,
    },
}

fn config_for(max_depth: Option<usize>) -> ParserConfig {
    match max_depth {
        Some(depth) => ParserConfig::default().with_max_depth(depth),
        None => ParserConfig::default(),
    }
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))
}

fn run_parse(file: &Path, max_depth: Option<usize>, quiet: bool) -> Result<ExitCode> {
    let source = read_source(file)?;
    info!(file = %file.display(), "parsing");

    let result = parse_with(&source, config_for(max_depth));

    for diagnostic in &result.diagnostics {
        eprintln!("{}", diagnostic);
    }

    if !quiet {
        for stmt in &result.statements {
            println!("{}", stmt);
        }
    }

    info!(
        statements = result.statements.len(),
        errors = result.diagnostics.len(),
        "parse finished"
    );

    if result.had_error {
        Ok(ExitCode::from(EXIT_DATA_ERROR))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn run_view(file: &Path, max_depth: Option<usize>) -> Result<ExitCode> {
    let source = read_source(file)?;
    let result = parse_with(&source, config_for(max_depth));
    info!(errors = result.diagnostics.len(), "opening viewer");

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&source, result);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("viewer failed")?;
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Parse {
            file,
            max_depth,
            quiet,
        } => run_parse(&file, max_depth, quiet),
        Command::View { file, max_depth } => run_view(&file, max_depth),
    }
}
