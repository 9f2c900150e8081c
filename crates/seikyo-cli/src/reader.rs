//! Interactive terminal reader: chapter list, rendered chapter, glossary.

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use seikyo_engine::{RenderOptions, RenderedBlock, Scripture, render_chapter};
use std::io::{Stdout, stdout};

use crate::styling;

pub struct App {
    scripture: Scripture,
    chapter_state: ListState,
    rendered: Vec<RenderedBlock>,
    opts: RenderOptions,
    scroll: u16,
}

impl App {
    pub fn new(scripture: Scripture, chapter: Option<&str>, opts: RenderOptions) -> Self {
        let start = chapter.and_then(|id| scripture.chapter_index(id));
        if let Some(id) = chapter
            && start.is_none()
        {
            log::warn!("Chapter {id} not found in {}, starting at the beginning", scripture.id);
        }

        let mut app = Self {
            scripture,
            chapter_state: ListState::default(),
            rendered: Vec::new(),
            opts,
            scroll: 0,
        };

        // Select first chapter if available
        if !app.scripture.chapters.is_empty() {
            app.select(start.unwrap_or(0));
        }
        app
    }

    fn select(&mut self, index: usize) {
        self.chapter_state.select(Some(index));
        self.scroll = 0;
        self.rendered = match self.scripture.chapters.get(index) {
            Some(chapter) => render_chapter(&chapter.content, &chapter.glossary),
            None => Vec::new(),
        };
    }

    pub fn selected(&self) -> Option<usize> {
        self.chapter_state.selected()
    }

    pub fn next_chapter(&mut self) {
        let len = self.scripture.chapters.len();
        if len == 0 {
            return;
        }
        let i = match self.chapter_state.selected() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.select(i);
    }

    pub fn previous_chapter(&mut self) {
        let len = self.scripture.chapters.len();
        if len == 0 {
            return;
        }
        let i = match self.chapter_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.select(i);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn toggle_readings(&mut self) {
        self.opts.show_readings = !self.opts.show_readings;
    }

    pub fn toggle_glossary(&mut self) {
        self.opts.show_glossary = !self.opts.show_glossary;
    }
}

pub fn run(scripture: Scripture, chapter: Option<&str>, opts: RenderOptions) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(scripture, chapter, opts);

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_chapter(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_chapter(),
                KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_down(),
                KeyCode::PageUp | KeyCode::Char('b') => app.scroll_up(),
                KeyCode::Char('r') => app.toggle_readings(),
                KeyCode::Char('g') => app.toggle_glossary(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(55),
            Constraint::Percentage(25),
        ])
        .split(rows[0]);

    // Chapter list panel
    let chapter_items: Vec<ListItem> = app
        .scripture
        .chapters
        .iter()
        .map(|c| ListItem::new(Line::from(c.title.clone())))
        .collect();
    let chapters = List::new(chapter_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.scripture.title.clone()),
        )
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));
    f.render_stateful_widget(chapters, chunks[0], &mut app.chapter_state);

    // Content panel
    let selected = app
        .selected()
        .and_then(|i| app.scripture.chapters.get(i));
    let content_title = selected.map_or_else(String::new, |c| c.title.clone());
    let content_text = if app.rendered.is_empty() {
        vec![Line::from("This chapter is empty")]
    } else {
        styling::block_lines(&app.rendered, app.opts)
    };
    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title(content_title))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    f.render_widget(content, chunks[1]);

    // Glossary panel
    let glossary_items: Vec<ListItem> = selected
        .map(|c| c.glossary.as_slice())
        .unwrap_or_default()
        .iter()
        .map(|entry| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        entry.term.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(" ({})", entry.reading),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                Line::from(format!("  {}", entry.meaning)),
            ])
        })
        .collect();
    let glossary = List::new(glossary_items)
        .block(Block::default().borders(Borders::ALL).title("Glossary"));
    f.render_widget(glossary, chunks[2]);

    // Instructions
    let help = Paragraph::new(Line::from(
        "q: Quit | ↑/k: Previous | ↓/j: Next | Space/b: Scroll | r: Readings | g: Glossary",
    ));
    f.render_widget(help, rows[1]);
}
