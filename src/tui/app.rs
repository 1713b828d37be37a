use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::sync::mpsc;
use std::time::Duration;

use chrono::Local;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::resolve_config;
use crate::model::{Config, TaskRecord};
use crate::ops::aggregate::load_all;
use crate::ops::effects::{self, Effect, EffectError};
use crate::ops::search::matching_indices;

use super::input;
use super::render;
use super::theme::Theme;

/// Current view mode. Each variant carries only what that mode needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// All tasks, newest first
    List,
    /// One task's file content. `path` is fixed when the mode is entered.
    TaskDetail { path: PathBuf, content: String },
    /// Asking before deleting the task at `path`
    ConfirmDelete { path: PathBuf, content: String },
    /// Live filter; `matches` are indices into the task list
    Search { query: String, matches: Vec<usize> },
    Help,
}

/// What the user asked for, independent of key bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Up,
    Down,
    Select,
    /// Esc: leave the current mode
    Back,
    BeginSearch,
    Char(char),
    Backspace,
    Edit,
    DeleteRequest,
    ConfirmDelete,
    CancelDelete,
    Create,
    Help,
}

/// Everything the event loop feeds into the app, one at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    /// Sent after an editor exits. `editor_error` is set when it never ran.
    Reload { editor_error: Option<String> },
}

/// Main application state
pub struct App {
    /// Fixed for the lifetime of the app
    pub config: Config,
    /// Where `config` was loaded from, shown in the help overlay
    pub config_path: Option<PathBuf>,
    /// Directories as configured (before `~` expansion)
    pub dirs: Vec<String>,
    /// All loaded tasks, newest first
    pub tasks: Vec<TaskRecord>,
    pub mode: Mode,
    /// Index into the visible list
    pub cursor: usize,
    pub last_error: Option<String>,
    /// Directories that failed while others loaded
    pub warnings: Vec<String>,
    /// Effect waiting to be run by the event loop
    pub pending_effect: Option<Effect>,
    pub should_quit: bool,
    pub theme: Theme,
}

impl App {
    /// Create an app with no tasks loaded yet. Call [`App::reload`] to load.
    pub fn new(config: Config, dirs: Vec<String>) -> Self {
        let theme = Theme::from_config(&config.display);
        App {
            config,
            config_path: None,
            dirs,
            tasks: Vec::new(),
            mode: Mode::List,
            cursor: 0,
            last_error: None,
            warnings: Vec::new(),
            pending_effect: None,
            should_quit: false,
            theme,
        }
    }

    /// Replace the task list from disk and return to the list view
    pub fn reload(&mut self) {
        match load_all(&self.dirs) {
            Ok(agg) => {
                tracing::info!(
                    tasks = agg.tasks.len(),
                    warnings = agg.warnings.len(),
                    "loaded tasks"
                );
                self.tasks = agg.tasks;
                self.warnings = agg.warnings;
                self.last_error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "no task directory could be read");
                self.tasks.clear();
                self.warnings.clear();
                self.last_error = Some(e.to_string());
            }
        }
        self.mode = Mode::List;
        self.cursor = 0;
    }

    /// Number of tasks in the visible list
    pub fn visible_len(&self) -> usize {
        match &self.mode {
            Mode::Search { matches, .. } => matches.len(),
            _ => self.tasks.len(),
        }
    }

    /// The `i`th task of the visible list
    pub fn visible_task(&self, i: usize) -> Option<&TaskRecord> {
        match &self.mode {
            Mode::Search { matches, .. } => matches.get(i).and_then(|&m| self.tasks.get(m)),
            _ => self.tasks.get(i),
        }
    }

    /// All tasks of the visible list, in order
    pub fn visible_tasks(&self) -> Vec<&TaskRecord> {
        (0..self.visible_len())
            .filter_map(|i| self.visible_task(i))
            .collect()
    }

    /// Task under the cursor
    pub fn selected(&self) -> Option<&TaskRecord> {
        self.visible_task(self.cursor)
    }

    pub fn task_by_path(&self, path: &Path) -> Option<&TaskRecord> {
        self.tasks.iter().find(|t| t.path == path)
    }

    /// Keep the cursor inside the visible list (0 when it's empty)
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(len - 1);
        }
    }

    /// Process one event from the queue
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => input::handle_key(self, key),
            AppEvent::Reload { editor_error } => {
                self.reload();
                if let Some(err) = editor_error
                    && self.last_error.is_none()
                {
                    self.last_error = Some(err);
                }
            }
        }
    }

    /// Apply one action to the current mode
    pub fn apply(&mut self, action: Action) {
        if action == Action::Quit {
            self.should_quit = true;
            return;
        }
        let mode = std::mem::replace(&mut self.mode, Mode::List);
        self.mode = match mode {
            Mode::List => self.apply_list(action),
            Mode::TaskDetail { path, content } => self.apply_detail(action, path, content),
            Mode::ConfirmDelete { path, content } => {
                self.apply_confirm_delete(action, path, content)
            }
            Mode::Search { query, matches } => self.apply_search(action, query, matches),
            Mode::Help => match action {
                Action::Back => Mode::List,
                _ => Mode::Help,
            },
        };
        self.clamp_cursor();
    }

    fn apply_list(&mut self, action: Action) -> Mode {
        match action {
            Action::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                Mode::List
            }
            Action::Down => {
                self.move_down(self.tasks.len());
                Mode::List
            }
            Action::Select => {
                let path = self.tasks.get(self.cursor).map(|t| t.path.clone());
                self.open_task(path).unwrap_or(Mode::List)
            }
            Action::BeginSearch => {
                self.cursor = 0;
                Mode::Search {
                    query: String::new(),
                    matches: matching_indices(&self.tasks, ""),
                }
            }
            Action::Create => {
                self.request_effect(Effect::Create);
                Mode::List
            }
            Action::Help => Mode::Help,
            _ => Mode::List,
        }
    }

    fn apply_detail(&mut self, action: Action, path: PathBuf, content: String) -> Mode {
        match action {
            Action::Back => Mode::List,
            Action::Edit => {
                self.request_effect(Effect::Edit { path: path.clone() });
                Mode::TaskDetail { path, content }
            }
            Action::DeleteRequest => Mode::ConfirmDelete { path, content },
            _ => Mode::TaskDetail { path, content },
        }
    }

    fn apply_confirm_delete(&mut self, action: Action, path: PathBuf, content: String) -> Mode {
        match action {
            Action::ConfirmDelete => {
                self.delete_task(&path);
                Mode::List
            }
            Action::CancelDelete | Action::Back => Mode::TaskDetail { path, content },
            _ => Mode::ConfirmDelete { path, content },
        }
    }

    fn apply_search(&mut self, action: Action, mut query: String, matches: Vec<usize>) -> Mode {
        match action {
            Action::Char(c) if !c.is_control() => {
                query.push(c);
                let matches = matching_indices(&self.tasks, &query);
                Mode::Search { query, matches }
            }
            Action::Backspace if !query.is_empty() => {
                query.pop();
                let matches = matching_indices(&self.tasks, &query);
                Mode::Search { query, matches }
            }
            Action::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                Mode::Search { query, matches }
            }
            Action::Down => {
                self.move_down(matches.len());
                Mode::Search { query, matches }
            }
            Action::Select => {
                let path = matches
                    .get(self.cursor)
                    .and_then(|&i| self.tasks.get(i))
                    .map(|t| t.path.clone());
                match self.open_task(path) {
                    Some(mode) => mode,
                    None => Mode::Search { query, matches },
                }
            }
            Action::Back => {
                self.cursor = 0;
                Mode::List
            }
            _ => Mode::Search { query, matches },
        }
    }

    fn move_down(&mut self, len: usize) {
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    /// Read a task file and enter the detail view. On a read failure the
    /// error is recorded and `None` is returned so the caller stays put.
    fn open_task(&mut self, path: Option<PathBuf>) -> Option<Mode> {
        let path = path?;
        match fs::read_to_string(&path) {
            Ok(content) => {
                self.last_error = None;
                Some(Mode::TaskDetail { path, content })
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read task");
                self.last_error = Some(format!("failed to read task: {}", e));
                None
            }
        }
    }

    /// Queue an effect unless one is already waiting
    fn request_effect(&mut self, effect: Effect) {
        if self.pending_effect.is_some() {
            tracing::debug!(?effect, "effect already pending, ignoring");
            return;
        }
        self.pending_effect = Some(effect);
    }

    /// Delete the file at `path` and drop exactly that task from the list
    fn delete_task(&mut self, path: &Path) {
        match effects::delete_task_file(path) {
            Ok(()) => {
                if let Some(idx) = self.tasks.iter().position(|t| t.path == path) {
                    self.tasks.remove(idx);
                }
                self.last_error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "delete failed");
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// Run an effect. `launch` runs the editor and blocks until it exits.
    /// Returns the event to enqueue once the effect has finished, if any.
    pub fn run_effect<F>(&mut self, effect: Effect, launch: F) -> Option<AppEvent>
    where
        F: FnOnce(&Path) -> Result<ExitStatus, EffectError>,
    {
        let path = match effect {
            Effect::Edit { path } => path,
            Effect::Create => match self.create_task() {
                Ok(path) => path,
                Err(e) => {
                    tracing::warn!(error = %e, "create failed");
                    self.last_error = Some(e.to_string());
                    return None;
                }
            },
        };
        let editor_error = launch(&path).err().map(|e| e.to_string());
        Some(AppEvent::Reload { editor_error })
    }

    fn create_task(&self) -> Result<PathBuf, EffectError> {
        let dir = self.dirs.first().ok_or(EffectError::NoDirectory)?;
        effects::create_task_file(dir, Local::now())
    }
}

type CrosstermTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Run the TUI application
pub fn run(
    config_path: Option<&Path>,
    dir_overrides: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = match resolve_config(config_path) {
        Ok((config, path)) => {
            let dirs = if dir_overrides.is_empty() {
                config.taskmanager.directories()
            } else {
                dir_overrides.to_vec()
            };
            let mut app = App::new(config, dirs);
            app.config_path = Some(path);
            app.reload();
            app
        }
        Err(e) => {
            // Start anyway so the problem is visible on screen
            tracing::warn!(error = %e, "failed to load config");
            let config = Config::initial();
            let dirs = if dir_overrides.is_empty() {
                config.taskmanager.directories()
            } else {
                dir_overrides.to_vec()
            };
            let mut app = App::new(config, dirs);
            app.last_error = Some(format!("failed to load config: {}", e));
            app
        }
    };

    let mut terminal = enter_terminal()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn enter_terminal() -> io::Result<CrosstermTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    Ok(terminal)
}

fn run_event_loop(
    terminal: &mut CrosstermTerminal,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    let (tx, rx) = mpsc::channel::<AppEvent>();

    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            let _ = tx.send(AppEvent::Key(key));
        }

        while let Ok(event) = rx.try_recv() {
            app.handle_event(event);
            if app.should_quit {
                return Ok(());
            }
        }

        if let Some(effect) = app.pending_effect.take() {
            let editor = effects::resolve_editor();
            // Hand the terminal to the editor until it exits
            disable_raw_mode()?;
            execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
            let done = app.run_effect(effect, |path| effects::run_editor(&editor, path));
            enable_raw_mode()?;
            execute!(terminal.backend_mut(), EnterAlternateScreen)?;
            terminal.clear()?;
            if let Some(event) = done {
                let _ = tx.send(event);
            }
        }
    }
}
