//! Interactive browser: employee pane on the left, rendered posts on the
//! right, comment toggles on Enter.

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use is_terminal::IsTerminal;
use ratatui::{backend::CrosstermBackend, widgets::ListState, Terminal};
use tokio::runtime::Runtime;

use crewfeed_api::HttpFeedSource;
use crewfeed_page::Tag;
use crewfeed_types::PostId;
use crewfeed_view::toggle::POST_ID_ATTR;
use crewfeed_view::{RefreshOutcome, ViewController};

use crate::config::Settings;
use crate::presentation::text::PageView;
use crate::presentation::tui;

/// Which pane navigation keys act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Employees,
    Posts,
}

/// Terminal-side state: pane cursors, focus, and the status line.
///
/// Everything about the page itself lives in the controller; this struct
/// only tracks what the terminal adds on top.
pub struct BrowseApp {
    pub focus: Focus,
    pub employee_list: ListState,
    pub post_list: ListState,
    pub status: String,
}

impl BrowseApp {
    fn new(employee_count: usize) -> Self {
        let mut employee_list = ListState::default();
        if employee_count > 0 {
            employee_list.select(Some(0));
        }
        Self {
            focus: Focus::Employees,
            employee_list,
            post_list: ListState::default(),
            status: String::from("Pick an employee and press Enter to load their posts."),
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Employees => Focus::Posts,
            Focus::Posts => Focus::Employees,
        };
    }

    fn focused_state_mut(&mut self) -> &mut ListState {
        match self.focus {
            Focus::Employees => &mut self.employee_list,
            Focus::Posts => &mut self.post_list,
        }
    }

    fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let state = self.focused_state_mut();
        let i = match state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };
        state.select(Some(i));
    }

    fn select_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let state = self.focused_state_mut();
        let i = match state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        state.select(Some(i));
    }
}

pub fn handle(settings: &Settings) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let source = HttpFeedSource::new(&settings.api_base, settings.timeout)?;
    let mut controller = ViewController::new(Arc::new(source));
    runtime.block_on(controller.init());

    if !io::stdout().is_terminal() {
        // Not attached to a terminal: run one refresh and dump the page.
        runtime.block_on(controller.handle_selection_change(None));
        print!("{}", PageView::new(controller.page()));
        return Ok(());
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    })?;

    let result = run_loop(&mut terminal, &runtime, &mut controller);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    runtime: &Runtime,
    controller: &mut ViewController,
) -> Result<()> {
    let mut app = BrowseApp::new(controller.employees().len());
    if controller.employees().is_empty() {
        app.status = String::from("Employee directory failed to load; restart to retry.");
    }

    let mut should_quit = false;
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    while !should_quit {
        terminal.draw(|f| {
            tui::draw(f, controller, &mut app);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        should_quit = true;
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        should_quit = true;
                    }
                    KeyCode::Tab => {
                        app.toggle_focus();
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        let len = pane_len(controller, app.focus);
                        app.select_next(len);
                    }
                    KeyCode::Up | KeyCode::Char('k') => {
                        let len = pane_len(controller, app.focus);
                        app.select_previous(len);
                    }
                    KeyCode::Enter => match app.focus {
                        Focus::Employees => refresh_selected(runtime, controller, &mut app),
                        Focus::Posts => toggle_selected(controller, &mut app),
                    },
                    _ => {}
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }

    Ok(())
}

/// Run one blocking refresh for the highlighted employee.
fn refresh_selected(runtime: &Runtime, controller: &mut ViewController, app: &mut BrowseApp) {
    let employee = app
        .employee_list
        .selected()
        .and_then(|i| controller.employees().get(i).cloned());

    let outcome =
        runtime.block_on(controller.handle_selection_change(employee.as_ref().map(|e| e.id)));

    let label = match &employee {
        Some(employee) => employee.name.clone(),
        None => String::from("employee 1"),
    };

    match outcome {
        RefreshOutcome::Applied { articles } if articles > 0 => {
            app.post_list.select(Some(0));
            app.status = format!("Loaded {} posts for {}.", articles, label);
        }
        RefreshOutcome::Applied { .. } => {
            app.post_list.select(None);
            app.status = format!("No posts to display for {}.", label);
        }
        // A blocking refresh cannot be overtaken by a newer one.
        RefreshOutcome::Superseded => {}
    }
}

/// Flip the comment section under the highlighted post block.
fn toggle_selected(controller: &mut ViewController, app: &mut BrowseApp) {
    let post = app
        .post_list
        .selected()
        .and_then(|index| post_id_at(controller, index));

    match post {
        Some(post) => match controller.handle_click(post) {
            Some(outcome) if outcome.complete() => {
                app.status = format!("Toggled comments for post {}.", post);
            }
            Some(_) => {
                app.status = format!("Post {} has no comment section.", post);
            }
            None => {
                app.status = format!("No listener bound for post {}.", post);
            }
        },
        None => {
            app.status = String::from("Nothing to toggle here.");
        }
    }
}

/// Post id behind the region's nth rendered block, read off its button.
fn post_id_at(controller: &ViewController, index: usize) -> Option<PostId> {
    let page = controller.page();
    let children = page.children(controller.region());
    let block = *children.get(index)?;
    for button in page.find_all(block, Tag::Button) {
        if let Some(value) = page.attribute(button, POST_ID_ATTR) {
            if let Ok(raw) = value.parse::<u64>() {
                return Some(PostId::new(raw));
            }
        }
    }
    None
}

fn pane_len(controller: &ViewController, focus: Focus) -> usize {
    match focus {
        Focus::Employees => controller.employees().len(),
        Focus::Posts => controller.page().children(controller.region()).len(),
    }
}
