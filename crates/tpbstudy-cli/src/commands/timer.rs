use std::io::Write;

use clap::Subcommand;
use tpbstudy_core::{Config, Event, SessionMode, SessionRunner, SessionTimer};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Print the initial timer state as JSON
    Status {
        /// Preset to load (work, short_break, long_break)
        #[arg(long)]
        mode: Option<SessionMode>,
    },
    /// Drive the timer through N one-second ticks without waiting
    Simulate {
        /// Number of ticks to apply
        #[arg(long)]
        ticks: u64,
        /// Preset to load before starting
        #[arg(long)]
        mode: Option<SessionMode>,
        /// Leave the timer paused (ticks then have no effect)
        #[arg(long)]
        paused: bool,
    },
    /// Run a live countdown in the terminal
    Run {
        /// Preset to load before starting
        #[arg(long)]
        mode: Option<SessionMode>,
        /// Stop after this many automatic transitions
        #[arg(long, default_value = "1")]
        transitions: u64,
    },
}

fn load_timer(config: &Config, mode: Option<SessionMode>) -> Result<SessionTimer, Box<dyn std::error::Error>> {
    let mut timer = SessionTimer::new(config.timer_config()?);
    if let Some(mode) = mode {
        timer.switch_mode(mode);
    }
    Ok(timer)
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();

    match action {
        TimerAction::Status { mode } => {
            let timer = load_timer(&config, mode)?;
            println!("{}", serde_json::to_string_pretty(&timer.snapshot())?);
        }
        TimerAction::Simulate { ticks, mode, paused } => {
            let mut timer = load_timer(&config, mode)?;
            if !paused {
                timer.start();
            }
            let events: Vec<Event> = (0..ticks).filter_map(|_| timer.tick()).collect();
            let out = serde_json::json!({
                "events": events,
                "state": timer.snapshot(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        TimerAction::Run { mode, transitions } => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            runtime.block_on(run_live(&config, mode, transitions))?;
        }
    }

    Ok(())
}

async fn run_live(
    config: &Config,
    mode: Option<SessionMode>,
    transitions: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let bell = config.notifications.enabled && config.notifications.bell;
    let notifier = move |event: &Event| {
        if let Event::ModeAdvanced { from, to, .. } = event {
            if bell {
                print!("\x07");
            }
            println!("\n{from} finished, {to} begins");
        }
    };

    let mut runner = SessionRunner::with_notifier(config.timer_config()?, notifier);
    if let Some(mode) = mode {
        runner.switch_mode(mode);
    }
    runner.start();
    render(runner.timer())?;

    let mut ctrl_c = std::pin::pin!(tokio::signal::ctrl_c());
    let mut seen = 0;
    while seen < transitions {
        tokio::select! {
            _ = ctrl_c.as_mut() => break,
            event = runner.next_tick() => {
                if event.is_some() {
                    seen += 1;
                }
                render(runner.timer())?;
            }
        }
    }

    runner.pause();
    println!();
    Ok(())
}

fn render(timer: &SessionTimer) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "\r{:<12} {}", timer.mode().label(), timer.display())?;
    stdout.flush()
}
