use std::io;
use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::sync::mpsc;
use tracing::{error, info};

use bodax_core::{AppConfig, AppContext, Clock, Error, MatchSource, SystemClock};
use bodax_tui::{
    event::{AppEvent, EventHandler, ReloadResult},
    input::{handle_key_event, Action},
    widgets::{ConsentBannerWidget, PageWidget, StatusBarWidget, TabsWidget},
    App, Theme,
};

pub async fn run(config: AppConfig, source: Arc<dyn MatchSource>) -> Result<()> {
    let theme = Theme::from_config(&config.ui.theme);
    let event_handler = EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.animation_fps);
    let ctx = AppContext::open(config)?;
    let initial = source.snapshot().await;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Bodax Gaming"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let size = terminal.size()?;

    let clock = SystemClock::new();
    let mut app = App::new(ctx, theme, size.width, size.height, clock.now_ms(), Utc::now());
    match initial {
        Ok(snapshot) => app.set_snapshot(snapshot),
        Err(Error::SnapshotNotFound(path)) => {
            app.status_message = Some(format!("No data at {}. Run `bodax seed` first", path));
        }
        Err(e) => {
            error!("Failed to load snapshot: {}", e);
            app.status_message = Some(format!("Error: {}", e));
        }
    }

    // Create channel for async reload results
    let (reload_tx, mut reload_rx) = mpsc::unbounded_channel::<ReloadResult>();

    let result = main_loop(&mut terminal, &mut app, &clock, &event_handler, &source, &reload_tx, &mut reload_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    clock: &SystemClock,
    event_handler: &EventHandler,
    source: &Arc<dyn MatchSource>,
    reload_tx: &mpsc::UnboundedSender<ReloadResult>,
    reload_rx: &mut mpsc::UnboundedReceiver<ReloadResult>,
) -> Result<()> {
    loop {
        // Process any completed reloads (non-blocking)
        while let Ok(result) = reload_rx.try_recv() {
            app.reloading = false;
            match result {
                ReloadResult::Success(snapshot) => {
                    app.set_snapshot(snapshot);
                    app.status_message = Some("Reloaded".to_string());
                }
                ReloadResult::Failure { error } => {
                    app.status_message = Some(format!("Reload failed: {}", error));
                }
            }
        }

        app.tick(clock.now_ms(), Utc::now());

        // Draw UI
        terminal.draw(|frame| {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(1), Constraint::Length(1)])
                .split(frame.area());

            TabsWidget::render(frame, layout[0], app);
            PageWidget::render(frame, layout[1], app);
            StatusBarWidget::render(frame, layout[2], app);

            if app.show_consent_banner {
                ConsentBannerWidget::render(frame, app);
            }
        })?;

        if let Some(event) = event_handler.next(app.is_animating())? {
            match event {
                AppEvent::Key(key) => match handle_key_event(key, app) {
                    Action::Reload => spawn_reload(app, source, reload_tx),
                    action => app.apply(action),
                },
                AppEvent::Resize(cols, rows) => app.resize(cols, rows),
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Re-read the snapshot in the background; the result arrives over the channel
fn spawn_reload(app: &mut App, source: &Arc<dyn MatchSource>, tx: &mpsc::UnboundedSender<ReloadResult>) {
    if app.reloading {
        return;
    }
    app.reloading = true;
    app.status_message = Some("Reloading...".to_string());
    info!("Reloading from {}", source.describe());

    let source = Arc::clone(source);
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = match source.snapshot().await {
            Ok(snapshot) => ReloadResult::Success(snapshot),
            Err(e) => ReloadResult::Failure { error: e.to_string() },
        };
        let _ = tx.send(result);
    });
}
