//! Terminal entry point: owns the tty, the event loop and the spawned
//! fetches. Everything stateful happens in the library's reducer.

use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use futures_util::StreamExt;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use tokio::sync::mpsc;

use weatherdash::action::Action;
use weatherdash::api::WeatherClient;
use weatherdash::components::{Component, Panel, PanelProps};
use weatherdash::config::Config;
use weatherdash::effect::Effect;
use weatherdash::reducer::reducer;
use weatherdash::state::{AppState, SPINNER_TICK_MS};

/// City weather lookup with recent searches and light/dark theming.
#[derive(Parser, Debug)]
#[command(name = "weatherdash", version, about)]
struct Args {
    /// OpenWeatherMap API key; falls back to $OPENWEATHER_API_KEY.
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};
    // Quiet unless RUST_LOG asks for output; logs go to stderr.
    let Ok(filter) = EnvFilter::try_from_default_env() else {
        return;
    };
    fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = match Config::resolve(args.api_key) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            eprintln!("Get a free key at https://openweathermap.org/api, then:");
            eprintln!("  export OPENWEATHER_API_KEY=<your key>");
            std::process::exit(1);
        }
    };
    let client = WeatherClient::new(config.base_url.clone(), config.api_key.clone());
    tracing::info!("starting weatherdash");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, client).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, client: WeatherClient) -> io::Result<()> {
    let mut state = AppState::default();
    let mut panel = Panel::default();
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(Duration::from_millis(SPINNER_TICK_MS));

    // The panel submits its empty field once on startup, which raises
    // the enter-a-city prompt as the first frame.
    let mut pending = vec![Action::Submit];

    loop {
        let mut needs_render = false;
        for action in pending.drain(..) {
            if matches!(action, Action::Quit) {
                return Ok(());
            }
            let result = reducer(&mut state, action);
            needs_render |= result.changed;
            for effect in result.effects {
                handle_effect(effect, &client, &action_tx);
            }
        }

        if needs_render {
            terminal.draw(|frame| {
                let area = frame.area();
                panel.render(frame, area, PanelProps { state: &state });
            })?;
        }

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    pending.extend(panel.handle_key(&key, PanelProps { state: &state }));
                }
                Some(Ok(Event::Mouse(mouse))) => {
                    pending.extend(panel.handle_mouse(&mouse));
                }
                Some(Ok(Event::Resize(_, _))) => {
                    terminal.draw(|frame| {
                        let area = frame.area();
                        panel.render(frame, area, PanelProps { state: &state });
                    })?;
                }
                Some(Ok(_)) => {}
                Some(Err(err)) => return Err(err),
                None => return Ok(()),
            },
            Some(action) = action_rx.recv() => pending.push(action),
            _ = ticker.tick() => pending.push(Action::Tick),
        }
    }
}

/// Start one fetch task. The task reports back over the action channel;
/// nothing is cancelled, so overlapping searches race and the last
/// completion wins.
fn handle_effect(effect: Effect, client: &WeatherClient, tx: &mpsc::UnboundedSender<Action>) {
    match effect {
        Effect::FetchWeather { city } => {
            let client = client.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let action = match client.current_weather(&city).await {
                    Ok(snapshot) => Action::WeatherDidLoad(snapshot),
                    Err(err) => {
                        tracing::warn!(city = %city, error = %err, "weather fetch failed");
                        Action::WeatherDidError(err.user_message())
                    }
                };
                let _ = tx.send(action);
            });
        }
    }
}
