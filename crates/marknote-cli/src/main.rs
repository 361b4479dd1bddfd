use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use marknote_config::{Config, DisplayConfig};
use marknote_engine::{BlockNode, Note, io, render, to_html};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use relative_path::RelativePathBuf;
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};

mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Notes,
    Lines,
}

struct App {
    notes_path: PathBuf,
    display: DisplayConfig,
    notes: Vec<RelativePathBuf>,
    note_list_state: ListState,
    line_state: ListState,
    focus: Focus,
    note: Option<Note>,
    blocks: Vec<BlockNode>,
    status: String,
}

impl App {
    fn new(notes_path: PathBuf, display: DisplayConfig) -> Result<Self> {
        let notes = io::scan_notes(&notes_path)?;

        let mut app = Self {
            notes_path,
            display,
            notes,
            note_list_state: ListState::default(),
            line_state: ListState::default(),
            focus: Focus::Notes,
            note: None,
            blocks: Vec::new(),
            status: String::new(),
        };

        if !app.notes.is_empty() {
            app.note_list_state.select(Some(0));
            app.load_selected_note();
        }

        Ok(app)
    }

    fn next(&mut self) {
        match self.focus {
            Focus::Notes => {
                if let Some(i) = step(self.note_list_state.selected(), self.notes.len(), 1) {
                    self.note_list_state.select(Some(i));
                    self.load_selected_note();
                }
            }
            Focus::Lines => {
                let i = step(self.line_state.selected(), self.blocks.len(), 1);
                self.line_state.select(i);
            }
        }
    }

    fn previous(&mut self) {
        match self.focus {
            Focus::Notes => {
                let len = self.notes.len();
                if let Some(i) = step(self.note_list_state.selected(), len, len.saturating_sub(1)) {
                    self.note_list_state.select(Some(i));
                    self.load_selected_note();
                }
            }
            Focus::Lines => {
                let len = self.blocks.len();
                let i = step(self.line_state.selected(), len, len.saturating_sub(1));
                self.line_state.select(i);
            }
        }
    }

    fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Notes if self.note.is_some() => {
                if self.line_state.selected().is_none() && !self.blocks.is_empty() {
                    self.line_state.select(Some(0));
                }
                Focus::Lines
            }
            _ => Focus::Notes,
        };
    }

    fn load_selected_note(&mut self) {
        let Some(path) = self
            .note_list_state
            .selected()
            .and_then(|i| self.notes.get(i))
        else {
            return;
        };

        match Note::load(path, &self.notes_path) {
            Ok(note) => {
                self.blocks = note.render();
                self.status = progress_status(&note);
                self.note = Some(note);
                self.line_state.select(None);
            }
            Err(e) => {
                log::warn!("failed to load {path}: {e}");
                self.status = format!("Error reading note: {e}");
                self.note = None;
                self.blocks.clear();
            }
        }
    }

    /// Toggles the checklist item under the line cursor and saves the note
    fn toggle_selected_line(&mut self) {
        let (Some(note), Some(line)) = (self.note.as_mut(), self.line_state.selected()) else {
            return;
        };
        if !self.blocks.get(line).is_some_and(BlockNode::is_checklist_item) {
            self.status = format!("Line {line} is not a checklist item");
            return;
        }

        match note.toggle_and_save(line, &self.notes_path) {
            Ok(()) => {
                self.blocks = note.render();
                self.status = progress_status(note);
            }
            Err(e) => {
                log::error!("failed to toggle line {line} of {}: {e}", note.path());
                self.status = format!("Error saving note: {e}");
            }
        }
    }
}

/// Moves a wrapping list cursor by `delta` (pass `len - 1` to go back one)
fn step(selected: Option<usize>, len: usize, delta: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match selected {
        Some(i) => (i + delta) % len,
        None => 0,
    })
}

fn progress_status(note: &Note) -> String {
    match note.checklist_progress() {
        (_, 0) => note.title(),
        (done, total) => format!("{} ({done}/{total} done)", note.title()),
    }
}

fn print_html(path: &str) -> Result<()> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
    print!("{}", to_html(&render(&content)));
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    if args.len() == 3 && args[1] == "--html" {
        return print_html(&args[2]);
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {} [notes-folder-path]", args[0]);
            process::exit(1);
        }
    };

    let (notes_path, from_config) = match (args.len(), &config) {
        (2, _) => (PathBuf::from(&args[1]), false),
        (1, Some(config)) => (config.notes_path.clone(), true),
        (1, None) => {
            eprintln!("Error: No notes path provided and no config file found");
            eprintln!("Usage: {} <notes-folder-path>", args[0]);
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
        _ => {
            eprintln!("Usage: {} [notes-folder-path]", args[0]);
            eprintln!("       {} --html <note.md>", args[0]);
            process::exit(1);
        }
    };
    let display = config.map(|c| c.display).unwrap_or_default();

    if let Err(e) = io::validate_notes_dir(&notes_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Notes path '{}'{} is invalid: {e}",
            notes_path.display(),
            source
        );
        process::exit(1);
    }

    let mut app = App::new(notes_path, display)?;

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

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

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                KeyCode::Tab | KeyCode::Enter => app.switch_focus(),
                KeyCode::Esc => app.focus = Focus::Notes,
                KeyCode::Char(' ') if app.focus == Focus::Lines => app.toggle_selected_line(),
                _ => {}
            }
        }
    }
}

fn pane_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(rows[0]);

    let note_items: Vec<ListItem> = app
        .notes
        .iter()
        .map(|path| {
            let name = path.as_str();
            ListItem::new(name.strip_suffix(".md").unwrap_or(name).to_string())
        })
        .collect();

    let notes_list = List::new(note_items)
        .block(pane_block("Notes".to_string(), app.focus == Focus::Notes))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(notes_list, chunks[0], &mut app.note_list_state);

    let title = app
        .note
        .as_ref()
        .map(|n| n.title())
        .unwrap_or_else(|| "Note".to_string());

    if app.note.is_some() {
        let lines: Vec<ListItem> = app
            .blocks
            .iter()
            .enumerate()
            .map(|(i, block)| ListItem::new(view::block_line(i, block, &app.display)))
            .collect();
        let note_view = List::new(lines)
            .block(pane_block(title, app.focus == Focus::Lines))
            .highlight_style(Style::default().bg(Color::DarkGray));
        f.render_stateful_widget(note_view, chunks[1], &mut app.line_state);
    } else {
        let placeholder = Paragraph::new(vec![Line::from("Select a note to view it")])
            .block(pane_block(title, false));
        f.render_widget(placeholder, chunks[1]);
    }

    let help = Line::from(vec![
        Span::raw("q: Quit | ↑/k ↓/j: Move | Tab/Enter: Switch pane | Space: Toggle checkbox | "),
        Span::styled(app.status.clone(), Style::default().fg(Color::Green)),
    ]);
    f.render_widget(Paragraph::new(vec![help]), rows[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn step_wraps_both_ways() {
        assert_eq!(step(None, 3, 1), Some(0));
        assert_eq!(step(Some(2), 3, 1), Some(0));
        assert_eq!(step(Some(0), 3, 2), Some(2));
        assert_eq!(step(Some(1), 0, 1), None);
    }

    #[test]
    fn status_shows_progress() {
        let note = Note::new(RelativePathBuf::from("chores.md"), "- [x] a\n- [ ] b");
        assert_eq!(progress_status(&note), "chores (1/2 done)");

        let plain = Note::new(RelativePathBuf::from("x.md"), "# Ideas\ntext");
        assert_eq!(progress_status(&plain), "Ideas");
    }
}
