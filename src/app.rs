use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::{
    constants::UI_SETTINGS,
    domain::MoodPicker,
    storage::{self, FileStore},
};

mod event_handlers;
mod mood_state;
mod render_views;
mod ui_helpers;
mod view_style;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum UiMode {
    Main,
    Compose,
}

struct Feedback {
    message: String,
    shown_at: Instant,
}

struct App {
    picker: MoodPicker,
    store: FileStore,
    ui_mode: UiMode,
    input: String,
    selected_custom: usize,
    feedback: Option<Feedback>,
    render_needed: bool,
}

impl App {
    fn new(store: FileStore) -> Self {
        let picker = storage::load_picker(&store);

        let mut app = Self {
            picker,
            store,
            ui_mode: UiMode::Main,
            input: String::new(),
            selected_custom: 0,
            feedback: None,
            render_needed: true,
        };

        // First run: nothing saved yet, show a mood right away.
        if app.picker.last_mood.is_none() {
            app.refresh_mood();
        }

        app
    }

    fn in_compose(&self) -> bool {
        matches!(self.ui_mode, UiMode::Compose)
    }

    fn set_feedback(&mut self, message: impl Into<String>) {
        self.feedback = Some(Feedback {
            message: message.into(),
            shown_at: Instant::now(),
        });
        self.render_needed = true;
    }

    fn feedback_expired(&self) -> bool {
        self.feedback
            .as_ref()
            .is_some_and(|f| f.shown_at.elapsed() >= Duration::from_millis(UI_SETTINGS.feedback_ms))
    }
}

pub fn run_ui() -> Result<(), io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(FileStore::new());

    loop {
        if app.feedback_expired() {
            app.feedback = None;
            app.render_needed = true;
        }

        if app.render_needed {
            terminal.draw(|f| {
                app.draw_frame(f);
            })?;
            app.render_needed = false;
        }

        if event::poll(Duration::from_millis(UI_SETTINGS.poll_ms))?
            && let Event::Key(key) = event::read()?
            && app.handle_key(key)
        {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
