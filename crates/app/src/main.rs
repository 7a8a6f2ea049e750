use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use planforge_core::{Theme, TimerProfile};
use services::{EvaluationService, ResultExporter, SuggestionService};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidTheme { raw: String },
    InvalidExportPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidTheme { raw } => write!(f, "invalid --theme value: {raw}"),
            ArgsError::InvalidExportPath { raw } => {
                write!(f, "invalid --export-path value: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    theme: Theme,
    timers: TimerProfile,
    exporter: Arc<ResultExporter>,
}

impl UiApp for DesktopApp {
    fn initial_theme(&self) -> Theme {
        self.theme
    }

    fn timer_profile(&self) -> TimerProfile {
        self.timers
    }

    fn evaluations(&self) -> EvaluationService {
        EvaluationService::new()
    }

    fn suggestions(&self) -> SuggestionService {
        SuggestionService::new()
    }

    fn exporter(&self) -> Arc<ResultExporter> {
        Arc::clone(&self.exporter)
    }
}

struct Args {
    theme: Theme,
    fast: bool,
    export_path: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--theme <light|dark>] [--fast] [--export-path <file>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --theme light");
    eprintln!("  --export-path evaluation-results.json");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PLANFORGE_THEME, PLANFORGE_FAST, PLANFORGE_EXPORT_PATH");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut theme = std::env::var("PLANFORGE_THEME")
            .ok()
            .and_then(|value| value.parse::<Theme>().ok())
            .unwrap_or_default();
        let mut fast = std::env::var("PLANFORGE_FAST").is_ok_and(|value| value == "1");
        let mut export_path = std::env::var("PLANFORGE_EXPORT_PATH")
            .unwrap_or_else(|_| "evaluation-results.json".to_string());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--theme" => {
                    let value = require_value(args, "--theme")?;
                    theme = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidTheme { raw: value.clone() })?;
                }
                "--fast" => {
                    fast = true;
                }
                "--export-path" => {
                    let value = require_value(args, "--export-path")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidExportPath { raw: value });
                    }
                    export_path = value;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            theme,
            fast,
            export_path,
        })
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("app=info,services=info,ui=info,planforge_core=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let timers = if parsed.fast {
        TimerProfile::fast()
    } else {
        TimerProfile::standard()
    };
    info!(theme = %parsed.theme, fast = parsed.fast, export_path = %parsed.export_path, "starting planforge");

    let app = DesktopApp {
        theme: parsed.theme,
        timers,
        exporter: Arc::new(ResultExporter::new(&parsed.export_path)),
    };
    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    // Dioxus/tao can default to an always-on-top window in some dev setups.
    // Explicitly disable it so the app doesn't behave like a modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Planforge")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
