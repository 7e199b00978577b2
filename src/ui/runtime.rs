use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::config::ConfigStore;
use crate::error::AppError;
use crate::router::{app_routes, RouteTable};
use crate::shutdown::{spawn_signal_listener, ShutdownHandle};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::redirect::RedirectScheduler;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

const TICK_RATE: Duration = Duration::from_millis(250);

/// Run one session until the user quits or a termination signal arrives.
///
/// Timers and the signal listener run on `runtime`; drawing and input stay
/// on the calling thread.
pub fn run(config: ConfigStore, runtime: Handle) -> Result<(), AppError> {
    // Validated before the terminal switches to the alternate screen.
    let routes = RouteTable::new(app_routes())?;

    let shutdown = ShutdownHandle::new();
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(TICK_RATE, shutdown.clone());
    spawn_signal_listener(&runtime, shutdown.clone(), events.sender());

    let redirects = RedirectScheduler::new(runtime, events.sender());
    let mut app = App::new(config, routes, redirects);
    tracing::info!(path = %app.location(), "session started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize) => {}
            Ok(AppEvent::AutoNavigate { generation, target }) => {
                app.on_auto_navigate(generation, target);
            }
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    app.shutdown();
    shutdown.signal();
    drop(guard);
    Ok(())
}
