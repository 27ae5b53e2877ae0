use stackq::adapters::{ReqwestHttpClient, StackExchangeClient, SystemNetworkPlatform};
use stackq::app::App;
use stackq::cli::{parse_args, run_cli_command, VERSION};
use stackq::connectivity::{ConnectivityMonitor, ConnectivityStream};
use stackq::coordinator::SearchCoordinator;
use stackq::startup::{default_log_path, init_logging, StartupConfig};
use stackq::terminal::{setup_panic_hook, TerminalManager};
use stackq::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Frame tick for animations.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    // Flags are handled before the terminal is touched
    if let Some(result) = run_cli_command(parse_args(std::env::args())) {
        return result;
    }

    color_eyre::install()?;
    setup_panic_hook();

    let config = StartupConfig::from_env()?;
    config.validate()?;

    match default_log_path().and_then(|path| init_logging(&config.log_filter, &path)) {
        Some(path) => info!("stackq {} starting, logging to {}", VERSION, path.display()),
        None => eprintln!("stackq: logging disabled (no writable cache directory)"),
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(run(config));
    info!("stackq exiting");
    result
}

async fn run(config: StartupConfig) -> Result<()> {
    let http = ReqwestHttpClient::with_timeout(config.request_timeout)?;
    let client = StackExchangeClient::new(http)
        .with_base_url(config.base_url.clone())
        .with_site(config.site.clone());
    let coordinator = SearchCoordinator::new(Arc::new(client));

    let platform =
        SystemNetworkPlatform::new(config.probe_address.clone(), config.probe_interval);
    let monitor = ConnectivityMonitor::new(Arc::new(platform));

    let mut app = App::new(coordinator);
    let mut manager = TerminalManager::new()?;

    let result = run_app(manager.terminal(), &mut app, monitor.observe()).await;

    app.shutdown();
    manager.restore()?;
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    connectivity: ConnectivityStream,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    // Stays `None` once the platform stops reporting
    let mut connectivity = Some(connectivity);

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {
                app.tick();
            }

            event = event_stream.next() => match event {
                Some(Ok(Event::Key(key))) => app.handle_key(key),
                Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                Some(Ok(_)) => {}
                Some(Err(err)) => {
                    warn!("Terminal event error: {}", err);
                    return Err(err.into());
                }
                None => return Ok(()),
            },

            Some(outcome) = app.coordinator_mut().recv_outcome() => {
                app.handle_outcome(outcome);
            }

            status = next_status(&mut connectivity) => match status {
                Some(status) => app.handle_connectivity(status),
                None => {
                    warn!("Connectivity stream ended");
                    connectivity = None;
                }
            },
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Next connectivity status, or pending forever once the stream is gone.
async fn next_status(
    stream: &mut Option<ConnectivityStream>,
) -> Option<stackq::connectivity::ConnectivityStatus> {
    match stream {
        Some(stream) => stream.next().await,
        None => std::future::pending().await,
    }
}
