use crate::backend::rest::RestBackend;
use crate::backend::Backend;
use crate::config::Config;
use crate::logger::Logger;
use crate::theme::ThemeStore;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Component, EventHandler, EventType};
use crate::ui::state::TodoState;
use anyhow::Context;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend as TerminalBackend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::sync::Arc;
use tokio::time::Duration;

/// Build the application from configuration and run it until the user quits
pub async fn run_app(config: Config, logger: Logger) -> anyhow::Result<()> {
    let backend: Arc<dyn Backend> =
        Arc::new(RestBackend::from_config(&config.api).context("Failed to create HTTP client")?);
    logger.log(format!("Using {} backend at {}", backend.backend_type(), config.api.base_url));

    let theme_store = match ThemeStore::default_location() {
        Ok(store) => Some(store),
        Err(e) => {
            logger.log(format!("Theme preference will not be saved: {:#}", e));
            None
        }
    };
    let theme = theme_store.as_ref().map(ThemeStore::load).unwrap_or_default();
    let state = TodoState::new(config.ui.default_filter, theme);

    let mut app = AppComponent::new(backend, state, theme_store, logger);
    let mut event_handler = EventHandler::new(Duration::from_millis(config.ui.tick_rate_ms));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(terminal_backend)?;

    app.trigger_initial_fetch();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: TerminalBackend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            needs_render = false;
        }

        match event_handler.next_event().await? {
            EventType::Key(key) => {
                app.handle_event(EventType::Key(key));
                needs_render = true;
            }
            EventType::Resize(_, _) => {
                needs_render = true;
            }
            EventType::Tick => {
                // Only redraw when a background operation reported back
                for action in app.process_background_actions() {
                    app.dispatch(action);
                    needs_render = true;
                }
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
