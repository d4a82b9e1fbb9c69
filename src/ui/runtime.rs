//! Composition root and main loop.
//!
//! Builds the store, gateway and worker, wires the channels, then drives
//! the draw/poll cycle until quit. The gateway runs on a tokio runtime in
//! the background; the loop itself is synchronous.

use std::time::Duration;

use crate::config::ConfigStore;
use crate::gateway::ProductGateway;
use crate::store::ProductStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::{self, GatewayCommand};

pub fn run(config: ConfigStore) -> anyhow::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);

    let store = ProductStore::new();
    let gateway = ProductGateway::new(&config.get().api, store.clone());

    let runtime = tokio::runtime::Runtime::new()?;
    let (command_tx, command_rx) = tokio::sync::mpsc::channel::<GatewayCommand>(32);
    runtime.spawn(worker::run(
        gateway,
        store.clone(),
        command_rx,
        events.sender(),
    ));
    runtime.spawn(worker::forward_store_changes(
        store.subscribe(),
        events.sender(),
    ));

    let mut app = App::new(config, store);
    app.attach_commands(command_tx);
    app.request_refresh();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(..)) => {}
            Ok(event) => app.handle_event(event),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(app);
    runtime.shutdown_timeout(Duration::from_secs(1));
    drop(guard);
    Ok(())
}
