use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use std::io;
use symbol_search::{search_scored, Catalog, Entity, MatchTier};

/// One row of the results table, detached from the catalog borrow
#[derive(Debug, Clone)]
pub struct ResultRow {
    pub entity: Entity,
    pub tier: MatchTier,
}

pub struct App<'a> {
    pub catalog: &'a Catalog,
    pub query: String,
    pub results: Vec<ResultRow>,
    pub state: TableState,
    pub show_detail: bool,
}

impl<'a> App<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        let mut app = Self {
            catalog,
            query: String::new(),
            results: Vec::new(),
            state: TableState::default(),
            show_detail: false,
        };
        app.refresh();
        app
    }

    /// Re-run the search for the current query
    pub fn refresh(&mut self) {
        self.results = search_scored(self.catalog, &self.query)
            .into_iter()
            .map(|m| ResultRow {
                entity: m.entity.clone(),
                tier: m.tier,
            })
            .collect();

        if self.results.is_empty() {
            self.state.select(None);
        } else {
            self.state.select(Some(0));
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.refresh();
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
        self.refresh();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.refresh();
    }

    pub fn toggle_detail(&mut self) {
        self.show_detail = !self.show_detail;
    }

    pub fn selected(&self) -> Option<&ResultRow> {
        self.state.selected().and_then(|i| self.results.get(i))
    }

    pub fn next(&mut self) {
        if self.results.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i + 1 < self.results.len() => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.results.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(0) | None => self.results.len() - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(Into::into)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Esc => return Ok(()),
                KeyCode::Enter => app.toggle_detail(),
                KeyCode::Backspace => app.pop_char(),
                KeyCode::Delete => app.clear_query(),
                KeyCode::Down => app.next(),
                KeyCode::Up => app.previous(),
                KeyCode::Char(c) => app.push_char(c),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Query input
            Constraint::Min(0),    // Results
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_query(f, chunks[0], app);

    if app.show_detail {
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);

        render_results(f, content_chunks[0], app);
        render_detail_panel(f, content_chunks[1], app);
    } else {
        render_results(f, chunks[1], app);
    }

    render_status_bar(f, chunks[2], app);
}

fn render_query(f: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(Color::Yellow)),
        Span::styled(
            app.query.as_str(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled("█", Style::default().fg(Color::DarkGray)),
    ]);

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} companies ", app.catalog.len())),
    );

    f.render_widget(input, area);
}

fn tier_color(tier: &MatchTier) -> Color {
    match tier {
        MatchTier::Exact => Color::Green,
        MatchTier::Substring => Color::Yellow,
        MatchTier::Fuzzy(_) => Color::Red,
    }
}

fn render_results(f: &mut Frame, area: Rect, app: &mut App) {
    let header_cells = ["#", "Symbol", "Name", "Score", "Match"].iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = app.results.iter().enumerate().map(|(i, row)| {
        let color = tier_color(&row.tier);

        Row::new(vec![
            Cell::from(format!("{}", i + 1)),
            Cell::from(row.entity.symbol.clone()),
            Cell::from(truncate(&row.entity.name, 40)),
            Cell::from(row.tier.score().to_string()).style(Style::default().fg(color)),
            Cell::from(row.tier.as_str()).style(Style::default().fg(color)),
        ])
        .height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Length(14),
            Constraint::Length(42),
            Constraint::Length(7),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Best matches "),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn render_detail_panel(f: &mut Frame, area: Rect, app: &App) {
    let lines = match app.selected() {
        Some(row) => vec![
            Line::from(vec![
                Span::styled("ID:     ", Style::default().fg(Color::Cyan)),
                Span::raw(row.entity.id.to_string()),
            ]),
            Line::from(vec![
                Span::styled("Symbol: ", Style::default().fg(Color::Cyan)),
                Span::raw(row.entity.symbol.as_str()),
            ]),
            Line::from(vec![
                Span::styled("Name:   ", Style::default().fg(Color::Cyan)),
                Span::raw(row.entity.name.as_str()),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Match:  ", Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!("{} (score {})", row.tier.as_str(), row.tier.score()),
                    Style::default().fg(tier_color(&row.tier)),
                ),
            ]),
        ],
        None => vec![Line::from("No company selected")],
    };

    let detail = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Company "),
    );

    f.render_widget(detail, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let selected = app.state.selected().map(|i| i + 1).unwrap_or(0);

    let status_spans = vec![
        Span::styled(
            format!(" Result: {}/{} ", selected, app.results.len()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(" | "),
        Span::styled("Type", Style::default().fg(Color::Yellow)),
        Span::raw(" Search | "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(" Details | "),
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" Nav | "),
        Span::styled("Del", Style::default().fg(Color::Yellow)),
        Span::raw(" Clear | "),
        Span::styled("Esc", Style::default().fg(Color::Red)),
        Span::raw(" Quit"),
    ];

    let status_bar = Paragraph::new(Line::from(status_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Entity::new(1, "JKH.N0000", "JOHN KEELLS HOLDINGS PLC"),
            Entity::new(2, "JKL.N0000", "JOHN KEELLS HOTELS PLC"),
            Entity::new(3, "JKPL.N0000", "JOHN KEELLS PLC"),
            Entity::new(4, "HAYL.N0000", "HAYLEYS PLC"),
        ])
    }

    #[test]
    fn test_app_starts_with_first_three() {
        let catalog = catalog();
        let app = App::new(&catalog);

        assert_eq!(app.results.len(), 3);
        assert_eq!(app.state.selected(), Some(0));
    }

    #[test]
    fn test_typing_refreshes_results() {
        let catalog = catalog();
        let mut app = App::new(&catalog);

        for c in "hayleys".chars() {
            app.push_char(c);
        }
        assert_eq!(app.selected().map(|r| r.entity.id), Some(4));

        app.pop_char();
        assert_eq!(app.query, "hayley");

        app.clear_query();
        assert!(app.query.is_empty());
    }

    #[test]
    fn test_navigation_wraps() {
        let catalog = catalog();
        let mut app = App::new(&catalog);

        app.previous();
        assert_eq!(app.state.selected(), Some(2));
        app.next();
        assert_eq!(app.state.selected(), Some(0));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("SHORT", 10), "SHORT");
        assert_eq!(truncate("JOHN KEELLS HOLDINGS PLC", 10), "JOHN KE...");
    }
}
