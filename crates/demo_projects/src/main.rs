//! Demo host for the datagrid component.
//!
//! Renders a project-allocation table in a raw-mode alternate screen.
//! Navigate with the arrow/vim keys, `/` to filter by title, `tab` + `s`
//! to sort columns, `space` to select rows, and `enter` to allocate the
//! selection. `q` quits.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::Parser;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use datagrid::filter::FilterMode;
use datagrid::grid::DataGrid;
use datagrid::key::{Binding, key_string, matches};
use tracing_subscriber::EnvFilter;

mod data;
use data::{Project, project_columns, sample_projects};

#[derive(Debug, Parser)]
#[command(name = "demo_projects", about = "Browse and allocate sample projects")]
struct Cli {
    /// Rows per page.
    #[arg(long, default_value_t = 10)]
    page_size: usize,

    /// Log filter directive; logs go to stderr.
    #[arg(long, default_value = "warn", env = "DEMO_LOG")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log_level)?)
        .with_writer(io::stderr)
        .init();

    let note = Arc::new(Mutex::new(String::new()));
    let sink = Arc::clone(&note);
    let mut grid = DataGrid::new(project_columns(), sample_projects())
        .filter_by("title")
        .page_size(cli.page_size)
        .show_row_selection(true)
        .selection_action("Allocate", move |rows: &[Project]| {
            tracing::info!(count = rows.len(), "projects allocated");
            let titles: Vec<&str> = rows.iter().map(|p| p.title.as_str()).collect();
            if let Ok(mut note) = sink.lock() {
                *note = format!("Allocated: {}", titles.join(", "));
            }
        });

    terminal::enable_raw_mode()?;
    let mut out = io::stdout();
    execute!(out, EnterAlternateScreen, Hide)?;
    let result = run(&mut grid, &note);
    execute!(out, Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(grid: &mut DataGrid<Project>, note: &Arc<Mutex<String>>) -> Result<()> {
    let quit = Binding::new().keys(&["q"]).help("q", "quit");
    let mut out = io::stdout();
    draw(&mut out, grid, note)?;

    loop {
        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Release {
                    let key_str = key_string(&key);
                    if key_str == "ctrl+c"
                        || (grid.filter_mode() != FilterMode::Filtering
                            && matches(&key_str, &[&quit]))
                    {
                        break;
                    }
                }
                grid.update(&key);
                draw(&mut out, grid, note)?;
            }
            Event::Resize(..) => draw(&mut out, grid, note)?,
            _ => {}
        }
    }
    Ok(())
}

fn draw(out: &mut impl Write, grid: &DataGrid<Project>, note: &Arc<Mutex<String>>) -> Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    for line in grid.view().lines() {
        write!(out, "{line}\r\n")?;
    }
    if let Ok(note) = note.lock() {
        if !note.is_empty() {
            write!(out, "\r\n{}\r\n", *note)?;
        }
    }
    out.flush()?;
    Ok(())
}
