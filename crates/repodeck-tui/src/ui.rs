// UI rendering logic
use crate::{App, InputMode, SearchPhase};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};
use repodeck_core::{date::format_date, Repository, SortKey, SortOrder, SortState};

pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_search_input(frame, app, chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(62), // Results table
            Constraint::Percentage(38), // Detail pane
        ])
        .split(chunks[1]);

    render_results(frame, app, content_chunks[0]);
    render_detail(frame, app, content_chunks[1]);

    render_status_bar(frame, app, chunks[2]);
}

fn render_search_input(frame: &mut Frame, app: &App, area: Rect) {
    let input_style = match app.input_mode {
        InputMode::Searching => Style::default().fg(Color::Yellow),
        InputMode::Normal => Style::default(),
    };

    let input = Paragraph::new(app.search_input.as_str())
        .style(input_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search user or organization "),
        );
    frame.render_widget(input, area);

    if app.input_mode == InputMode::Searching {
        frame.set_cursor_position((area.x + input_cursor_offset(&app.search_input), area.y + 1));
    }
}

/// Cursor column inside the bordered input box. Counts characters, not
/// bytes, so multibyte input does not push the cursor past the text.
fn input_cursor_offset(input: &str) -> u16 {
    input.chars().count() as u16 + 1
}

fn render_results(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Results ");

    match &app.phase {
        SearchPhase::Idle => {
            let welcome = Paragraph::new("Welcome. Press / and type a username to search.")
                .block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(welcome, area);
        }
        SearchPhase::Loading => {
            let loading = Paragraph::new("Fetching repositories...")
                .block(block)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Yellow));
            frame.render_widget(loading, area);
        }
        SearchPhase::Error(message) => {
            let error = Paragraph::new(format!("Error: {message}"))
                .block(block)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true });
            frame.render_widget(error, area);
        }
        SearchPhase::Success => {
            if app.repos.is_empty() {
                let empty = Paragraph::new("No repositories found.")
                    .block(block)
                    .alignment(Alignment::Center);
                frame.render_widget(empty, area);
                return;
            }
            render_results_table(frame, app, area);
        }
    }
}

fn render_results_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let inner_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Table
            Constraint::Length(1), // Pagination line
        ])
        .split(area);

    let header = Row::new(vec![
        Cell::from("Name"),
        Cell::from("Language"),
        Cell::from(header_label("Forks", SortKey::Forks, &app.sort)),
        Cell::from(header_label("Stars", SortKey::Stars, &app.sort)),
        Cell::from(header_label("Updated", SortKey::Updated, &app.sort)),
    ])
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = app
        .visible()
        .iter()
        .map(|repo| {
            Row::new(vec![
                Cell::from(repo.name.clone()),
                Cell::from(repo.language_display().to_string()),
                Cell::from(repo.forks.to_string()),
                Cell::from(repo.stars.to_string()),
                Cell::from(format_date(&repo.updated_at)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(34),
            Constraint::Percentage(18),
            Constraint::Percentage(14),
            Constraint::Percentage(14),
            Constraint::Percentage(20),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(" Results "))
    .row_highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    frame.render_stateful_widget(table, inner_chunks[0], &mut app.table_state);

    let pagination = Paragraph::new(pagination_line(app)).alignment(Alignment::Right);
    frame.render_widget(pagination, inner_chunks[1]);
}

/// Column header with the sort indicator on the active key.
fn header_label(title: &str, key: SortKey, sort: &SortState) -> String {
    if sort.key == Some(key) {
        let arrow = match sort.order {
            SortOrder::Ascending => "▲",
            SortOrder::Descending => "▼",
        };
        format!("{title} {arrow}")
    } else {
        title.to_string()
    }
}

fn pagination_line(app: &App) -> String {
    let total_pages = app.total_pages();
    format!(
        "Rows per page: {}   {}-{} of {} ",
        app.pager.rows_per_page, app.pager.current_page, total_pages, total_pages
    )
}

fn render_detail(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Repository ");

    let Some(repo) = &app.selected else {
        let placeholder = Paragraph::new("Select a repository")
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(placeholder, area);
        return;
    };

    let lines = detail_lines(repo);
    let detail = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(detail, area);
}

fn detail_lines(repo: &Repository) -> Vec<Line<'_>> {
    vec![
        Line::from(Span::styled(
            repo.name.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(repo.language_display(), Style::default().fg(Color::Green)),
            Span::raw("   "),
            Span::styled(
                format!("★ {}", repo.stars),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(Span::raw(repo.license_display())),
    ]
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.input_mode {
        InputMode::Searching => "Enter submit | Esc cancel",
        InputMode::Normal => {
            "/ search | j/k rows | Enter select | f/s/d sort | h/l page | r page size | q quit"
        }
    };
    let bar = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_label_marks_only_active_key() {
        let mut sort = SortState::default();
        assert_eq!(header_label("Stars", SortKey::Stars, &sort), "Stars");

        sort.toggle(SortKey::Stars);
        assert_eq!(header_label("Stars", SortKey::Stars, &sort), "Stars ▲");
        assert_eq!(header_label("Forks", SortKey::Forks, &sort), "Forks");

        sort.toggle(SortKey::Stars);
        assert_eq!(header_label("Stars", SortKey::Stars, &sort), "Stars ▼");
    }

    #[test]
    fn cursor_offset_counts_characters_not_bytes() {
        assert_eq!(input_cursor_offset(""), 1);
        assert_eq!(input_cursor_offset("octocat"), 8);
        // Cyrillic input is two bytes per character but one column each.
        assert_eq!(input_cursor_offset("юзер"), 5);
    }

    #[test]
    fn pagination_line_repeats_total_pages() {
        let mut app = App::new();
        let repos: Vec<_> = (1..=25)
            .map(|id| Repository {
                id,
                name: format!("repo-{id}"),
                language: None,
                stars: 0,
                forks: 0,
                updated_at: "2023-03-05T00:00:00Z".to_string(),
                license: None,
            })
            .collect();
        app.apply_results(repos);
        assert_eq!(pagination_line(&app), "Rows per page: 10   1-3 of 3 ");
    }
}
