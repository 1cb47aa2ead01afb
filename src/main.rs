//! Terminal shell and entry point.
//!
//! A thin integration layer between the library and an ANSI terminal: it
//! parses the command line into a [`Config`](book_browser::Config), loads the
//! catalog, and runs a read-eval-render loop over stdin line commands.
//!
//! # Lifecycle
//!
//! 1. **Configure**: `--config <file>` TOML, overridden by the other flags
//! 2. **Trace**: install the log file subscriber
//! 3. **Load**: read the catalog and build the controller
//! 4. **Loop**: render, read a line, translate it, handle, dispatch
//!
//! The screen size is measured before every render, so a resized terminal
//! is picked up on the next command. `--rows`/`--cols` pin it instead.

#![allow(clippy::multiple_crate_versions)]

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;

use book_browser::cli::Cli;
use book_browser::infrastructure::{screen_size, terminal_size};
use book_browser::input::{self, Command, Target};
use book_browser::ui::helpers::position_cursor;
use book_browser::{dispatch, handle_event, AppState, BrowserError, Event, TerminalView};
use clap::Parser;

/// Shell state wrapper.
///
/// Wraps the library's `AppState` with the terminal-specific concerns: the
/// retained view, the pinned screen size and the status line.
struct Shell {
    /// Core application state from library layer.
    app: AppState,

    view: TerminalView,

    /// `--rows`, if given.
    rows: Option<u16>,

    /// `--cols`, if given.
    cols: Option<u16>,

    /// One-line message shown left of the prompt until the next command.
    status: Option<String>,
}

impl Shell {
    fn new(app: AppState, rows: Option<u16>, cols: Option<u16>) -> Self {
        let mut view = TerminalView::default();
        dispatch(&mut view, &app.initial_actions());
        Self {
            app,
            view,
            rows,
            cols,
            status: None,
        }
    }

    /// Executes one command. Returns `false` when the shell should exit.
    fn execute(&mut self, command: Command) -> bool {
        let event = match command {
            Command::Quit => return false,
            Command::Redraw => return true,
            Command::Help => {
                self.status = Some(input::HELP.to_string());
                return true;
            }
            Command::CloseTopmost => match self.app.overlays.topmost() {
                Some(overlay) => Event::CloseOverlay(overlay),
                None => return true,
            },
            Command::Open(target) => match self.resolve_target(target) {
                Some(id) => Event::ClickItem(id),
                None => return true,
            },
            Command::Event(event) => event,
        };

        self.handle(&event);
        true
    }

    /// Maps `open` arguments to a book id. Row numbers refer to the list as
    /// currently shown.
    fn resolve_target(&mut self, target: Target) -> Option<String> {
        match target {
            Target::Id(id) => Some(id),
            Target::Row(row) => {
                let id = self.view.item_at(row).map(String::from);
                if id.is_none() {
                    self.status = Some(format!("no book at row {row}"));
                }
                id
            }
        }
    }

    fn handle(&mut self, event: &Event) {
        let (redraw, actions) = handle_event(&mut self.app, event);
        tracing::debug!(
            action_count = actions.len(),
            should_render = redraw,
            "event handled"
        );

        if !redraw {
            if let Event::ClickItem(id) = event {
                self.status = Some(format!("no book with id {id}"));
            }
        }
        dispatch(&mut self.view, &actions);
    }

    fn render<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let (rows, cols) = screen_size(self.rows, self.cols, terminal_size());
        self.view.render(out, rows, cols)?;
        position_cursor(out, rows, 1)?;
        if let Some(status) = self.status.take() {
            write!(out, "{status} ")?;
        }
        write!(out, "> ")?;
        out.flush()
    }
}

fn run(cli: &Cli) -> Result<(), BrowserError> {
    let config = cli.load_config()?;
    book_browser::observability::init_tracing(&config);

    let span = tracing::debug_span!("startup");
    let guard = span.entered();

    tracing::debug!(rows = ?cli.rows, cols = ?cli.cols, config = ?config, "parsed configuration");

    let catalog = Arc::new(book_browser::load_catalog(&config)?);
    let app = book_browser::initialize(&config, catalog)?;
    let mut shell = Shell::new(app, cli.rows, cli.cols);
    drop(guard);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    shell.render(&mut out)?;
    for line in stdin.lock().lines() {
        let line = line?;
        let keep_going = match input::parse_command(&line) {
            Ok(command) => shell.execute(command),
            Err(e) => {
                shell.status = Some(e.to_string());
                true
            }
        };
        if !keep_going {
            break;
        }
        shell.render(&mut out)?;
    }

    write!(out, "{}\u{1b}[2J\u{1b}[H", book_browser::ui::theme::reset())?;
    out.flush()?;
    tracing::info!("browser closed");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "fatal error");
            eprintln!("book-browser: {e}");
            ExitCode::FAILURE
        }
    }
}
