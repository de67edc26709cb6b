use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracing_subscriber::EnvFilter;

use services::{Clock, DrillService, RewardService, ToneService};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

struct DesktopApp {
    drill: Arc<DrillService>,
    tones: Arc<ToneService>,
    rewards: Arc<RewardService>,
}

impl UiApp for DesktopApp {
    fn drill(&self) -> Arc<DrillService> {
        Arc::clone(&self.drill)
    }

    fn tones(&self) -> Arc<ToneService> {
        Arc::clone(&self.tones)
    }

    fn rewards(&self) -> Arc<RewardService> {
        Arc::clone(&self.rewards)
    }
}

struct Args {
    mute: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--mute]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --mute   disable audio cues");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  DRILL_REWARD_API_KEY, DRILL_REWARD_BASE_URL, DRILL_REWARD_MODEL");
    eprintln!("  RUST_LOG (tracing filter, e.g. RUST_LOG=services=debug)");
}

impl Args {
    fn parse(args: impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut mute = false;
        for arg in args {
            match arg.as_str() {
                "--mute" => mute = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => return Err(ArgsError::UnknownArg(other.to_string())),
            }
        }
        Ok(Self { mute })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse(std::env::args().skip(1)).map_err(|err| {
        eprintln!("{err}");
        print_usage();
        err
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // The audio output is an explicitly constructed resource owned here by
    // the shell; the renderer only ever sees a handle.
    let tones = if args.mute {
        ToneService::muted()
    } else {
        ToneService::spawn()
    };

    let drill = Arc::new(DrillService::new(Clock::system()));
    let rewards = Arc::new(RewardService::from_env());
    if !rewards.enabled() {
        tracing::debug!("reward images disabled (no DRILL_REWARD_API_KEY)");
    }

    let app = DesktopApp {
        drill,
        tones: Arc::new(tones),
        rewards,
    };

    let context = build_app_context(&(Arc::new(app) as Arc<dyn UiApp>));

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Arithmetic Drill")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("fatal: {err}");
        std::process::exit(1);
    }
}
