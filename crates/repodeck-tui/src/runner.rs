// TUI event loop and terminal management
use crate::{App, InputMode};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use repodeck_core::{RepoSource, Repository, SortKey};
use std::{io, sync::Arc, time::Duration};
use tokio::sync::mpsc;

/// Messages delivered back to the event loop from spawned work.
pub enum AppEvent {
    SearchFinished(repodeck_core::Result<Vec<Repository>>),
}

/// Run the fetch off the UI loop and report the outcome over the channel.
///
/// Nothing sequences overlapping searches: if a second query is submitted
/// before the first resolves, whichever response arrives last wins.
pub fn spawn_search(
    source: Arc<dyn RepoSource>,
    query: String,
    tx: mpsc::UnboundedSender<AppEvent>,
) {
    tokio::spawn(async move {
        let result = source.list_repos(&query).await;
        let _ = tx.send(AppEvent::SearchFinished(result));
    });
}

pub async fn run_tui(mut app: App, source: Arc<dyn RepoSource>) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = mpsc::unbounded_channel();

    // Main loop
    loop {
        terminal.draw(|f| crate::ui::render(f, &mut app))?;

        // Drain completed fetches before handling input.
        while let Ok(event) = rx.try_recv() {
            handle_app_event(&mut app, event);
        }

        // Short poll keeps the loop responsive to fetch completions while a
        // request is outstanding; the previous result set stays interactive.
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut app, key.code, &source, &tx);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

pub fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::SearchFinished(Ok(repos)) => {
            tracing::debug!(count = repos.len(), "search finished");
            app.apply_results(repos);
        }
        AppEvent::SearchFinished(Err(err)) => {
            tracing::warn!(error = %err, "search failed");
            app.apply_error(err.user_message());
        }
    }
}

fn handle_key(
    app: &mut App,
    code: KeyCode,
    source: &Arc<dyn RepoSource>,
    tx: &mpsc::UnboundedSender<AppEvent>,
) {
    match app.input_mode {
        InputMode::Searching => match code {
            KeyCode::Enter => {
                // Empty input: no request, the box is cleared regardless.
                if let Some(query) = app.take_query() {
                    app.begin_search();
                    app.enter_normal_mode();
                    spawn_search(source.clone(), query, tx.clone());
                }
            }
            KeyCode::Char(c) => {
                app.search_input.push(c);
            }
            KeyCode::Backspace => {
                app.search_input.pop();
            }
            KeyCode::Esc => {
                app.enter_normal_mode();
            }
            _ => {}
        },
        InputMode::Normal => match code {
            KeyCode::Char('q') => {
                app.quit();
            }
            KeyCode::Char('/') => {
                app.enter_search_mode();
            }
            KeyCode::Char('j') | KeyCode::Down => {
                app.next_row();
            }
            KeyCode::Char('k') | KeyCode::Up => {
                app.previous_row();
            }
            KeyCode::Enter => {
                app.select_current();
            }
            KeyCode::Char('f') => {
                app.toggle_sort(SortKey::Forks);
            }
            KeyCode::Char('s') => {
                app.toggle_sort(SortKey::Stars);
            }
            KeyCode::Char('d') => {
                app.toggle_sort(SortKey::Updated);
            }
            KeyCode::Char('h') | KeyCode::Left => {
                app.previous_page();
            }
            KeyCode::Char('l') | KeyCode::Right => {
                app.next_page();
            }
            KeyCode::Char('r') => {
                app.cycle_rows_per_page();
            }
            _ => {}
        },
    }
}
