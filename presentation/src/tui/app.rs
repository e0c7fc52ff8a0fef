//! TUI application: main loop
//!
//! ```text
//! TuiApp (select! loop)                 invocation task (tokio::spawn)
//!   ├─ crossterm EventStream              ├─ InvokeToolUseCase::execute()
//!   ├─ event_rx (TuiEvent) <──────────────┤  progress bridge + outcome
//!   └─ tick_interval                      └─ one task per submission
//! ```
//!
//! The session is only touched from the loop. Outcomes come back as events
//! and are recorded under the tool they were issued for, so a result that
//! lands after the user moved on never shows up as another tool's result.

use super::event::{TuiEvent, key_action};
use super::progress::TuiProgressBridge;
use super::state::TuiState;
use super::widgets::{
    MainLayout, form::FormWidget, result::ResultWidget, status_bar::StatusBarWidget,
    tool_list::ToolListWidget,
};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use inspector_application::{PendingInvocation, ToolsSession};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

type Backend = CrosstermBackend<io::Stdout>;

/// Main TUI application
pub struct TuiApp {
    session: ToolsSession,
    state: TuiState,
    event_tx: mpsc::UnboundedSender<TuiEvent>,
    event_rx: mpsc::UnboundedReceiver<TuiEvent>,
}

impl TuiApp {
    /// Create the app over a session whose catalog is already loaded
    pub fn new(session: ToolsSession) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            session,
            state: TuiState::new(),
            event_tx,
            event_rx,
        }
    }

    /// Run the TUI until the user quits. The terminal is restored on every
    /// exit path, including errors and panics.
    pub async fn run(mut self) -> io::Result<ToolsSession> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            default_hook(info);
        }));

        let result = self.event_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result.map(|()| self.session)
    }

    async fn event_loop(&mut self, terminal: &mut Terminal<Backend>) -> io::Result<()> {
        self.state.sync_selection(&mut self.session);

        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(250));

        loop {
            terminal.draw(|frame| self.render(frame))?;

            if self.state.should_quit {
                return Ok(());
            }

            tokio::select! {
                Some(term_event) = event_stream.next() => {
                    if let Event::Key(key) = term_event? {
                        let focused = self.state.focused_control(&self.session);
                        let action = key_action(key, focused);
                        if let Some(pending) = self.state.apply(&mut self.session, action) {
                            self.spawn_invocation(pending);
                        }
                    }
                }

                Some(event) = self.event_rx.recv() => {
                    self.state.apply_event(&mut self.session, event);
                }

                _ = tick.tick() => {}
            }
        }
    }

    fn spawn_invocation(&self, pending: PendingInvocation) {
        info!("Spawning invocation {} of '{}'", pending.id, pending.tool_name);
        let invoker = self.session.invoker();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let progress = TuiProgressBridge::new(tx.clone());
            let outcome = invoker.execute(pending, &progress).await;
            let _ = tx.send(TuiEvent::Outcome(outcome));
        });
    }

    fn render(&self, frame: &mut Frame) {
        let layout = MainLayout::compute(frame.area());
        frame.render_widget(ToolListWidget::new(&self.session, &self.state), layout.tools);
        frame.render_widget(FormWidget::new(&self.session, &self.state), layout.form);
        frame.render_widget(ResultWidget::new(&self.session), layout.result);
        frame.render_widget(StatusBarWidget::new(&self.state), layout.status_bar);
    }
}
