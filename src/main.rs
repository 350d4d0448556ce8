use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use linediff::Strategy;
use linediff::config::Config;
use linediff::export::{ExportHeader, plain_text, render_body, render_export};
use linediff::input::load_pair;
use linediff::report::{inline_report, table_report};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use tracing::{error, info};

use crate::{app::App, ui::render_ui::ui};

mod app;
mod logging;
mod ui;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Original text file ("-" reads stdin)
    left: String,

    /// Modified text file ("-" reads stdin)
    right: String,

    /// Line alignment strategy
    #[arg(short, long, value_enum)]
    strategy: Option<Strategy>,

    /// Language for highlighting and export headers (e.g. "javascript", "css")
    #[arg(short, long)]
    language: Option<String>,

    /// TOML settings file
    #[arg(long, env = "LINEDIFF_CONFIG")]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Print the comparison instead of opening the viewer
    #[arg(short, long)]
    print: bool,

    /// Output format for --print
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Body)]
    format: OutputFormat,

    /// Write --print output to a file instead of stdout
    #[arg(short, long, requires = "print")]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Header plus prefixed lines, as saved by the viewer's export
    Export,
    /// Prefixed lines only
    Body,
    /// Numbered rows with -/+ pairs for differences
    Inline,
    /// Pipe table with both texts side by side
    Table,
    /// Record content only, one per line
    Plain,
    /// Per-kind counts
    Stat,
}

fn render_output(args: &Args, app: &App) -> String {
    match args.format {
        OutputFormat::Export => {
            render_export(&app.records, &ExportHeader::now(app.language()))
        }
        OutputFormat::Body => render_body(&app.records),
        OutputFormat::Inline => inline_report(&app.left.text, &app.right.text),
        OutputFormat::Table => table_report(&app.left.text, &app.right.text),
        OutputFormat::Plain => {
            let mut text = plain_text(&app.records);
            if !text.is_empty() {
                text.push('\n');
            }
            text
        }
        OutputFormat::Stat => format!("{}\n", app.stats),
    }
}

fn print_comparison(args: &Args, app: &App) -> Result<()> {
    let output = render_output(args, app);

    match &args.output {
        Some(path) => fs::write(path, output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => io::stdout().write_all(output.as_bytes())?,
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let step = app.config.scroll_step;

    loop {
        terminal.draw(|f| ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Char('j') | KeyCode::Down => app.scroll_down(1),
                KeyCode::Char('k') | KeyCode::Up => app.scroll_up(1),
                KeyCode::Char('d') | KeyCode::PageDown => app.scroll_down(step),
                KeyCode::Char('u') | KeyCode::PageUp => app.scroll_up(step),
                KeyCode::Char('g') => app.scroll_to_top(),
                KeyCode::Char('G') => app.scroll_to_bottom(),
                KeyCode::Char('h') | KeyCode::Left => app.scroll_left(1),
                KeyCode::Char('l') | KeyCode::Right => app.scroll_right(1),
                KeyCode::Char('H') => app.scroll_left(step),
                KeyCode::Char('L') => app.scroll_right(step),
                KeyCode::Char('s') => app.toggle_strategy(),
                KeyCode::Char('w') => app.swap(),
                KeyCode::Char('c') => app.copy_result(),
                KeyCode::Char('e') => {
                    let exported = std::env::current_dir()
                        .context("failed to resolve the current directory")
                        .and_then(|dir| app.export_to(&dir));
                    if let Err(err) = exported {
                        error!(error = %err, "export failed");
                        app.status = Some(format!("Export failed: {err:#}"));
                    }
                }
                KeyCode::Char('?') => app.toggle_shortcuts(),
                _ => {}
            }
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = logging::init(args.log_file.as_deref(), &args.log_level, !args.print)?;

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(strategy) = args.strategy {
        config.strategy = strategy;
    }
    if let Some(language) = &args.language {
        config.language = Some(language.clone());
    }

    let (left, right) = load_pair(&args.left, &args.right)?;
    let app = App::new(left, right, config)?;
    info!(strategy = %app.strategy, stats = %app.stats, "comparison ready");

    if args.print {
        return print_comparison(&args, &app);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}
