use crate::config::Config;
use crate::resources::ResourceClient;
use crate::ui::app::{App, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc as std_mpsc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Capacity of the UI → runtime command queue.
const COMMAND_QUEUE: usize = 16;

pub fn run(config: Config) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let client = ResourceClient::new(&config.resources);

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(&config);
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE);
    app.attach_command_sender(command_tx);
    runtime.spawn(handle_commands(command_rx, client, events.sender()));

    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    tracing::info!("UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::ResourcesLoaded(result)) => app.on_resources_loaded(result),
            Err(std_mpsc::RecvTimeoutError::Timeout) => {}
            Err(std_mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    // An outstanding fetch is abandoned, not awaited.
    runtime.shutdown_timeout(Duration::from_millis(100));
    tracing::info!("UI stopped");
    Ok(())
}

/// Execute UI commands until every sender is gone.
///
/// Fetch results are posted back to the UI thread as
/// [`AppEvent::ResourcesLoaded`].
pub async fn handle_commands(
    mut commands: mpsc::Receiver<UiCommand>,
    client: ResourceClient,
    events: std_mpsc::Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        match command {
            UiCommand::FetchResources => {
                let client = client.clone();
                let events = events.clone();
                tokio::spawn(async move {
                    let result = client.fetch_top_resources().await;
                    if events.send(AppEvent::ResourcesLoaded(result)).is_err() {
                        tracing::debug!("UI gone before fetch settled");
                    }
                });
            }
            UiCommand::OpenLink { url } => {
                tokio::task::spawn_blocking(move || {
                    if let Err(err) = open::that_detached(&url) {
                        tracing::warn!(url = %url, error = %err, "Failed to open link");
                    }
                });
            }
        }
    }
}
