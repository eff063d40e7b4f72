use anyhow::{Context, Result};
use dioxus::prelude::*;
use std::env;
use std::path::{Path, PathBuf};
use std::process;

mod ui;

use stepview_config::Config;
use stepview_engine::ReplayScript;
use ui::App;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("stepview starting up!");

    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());

    let config = match Config::load() {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        Ok(None) => {
            log::info!("No config file found, using defaults");
            Config::default()
        }
        Err(e) => {
            log::error!("Config::load() failed with error: {e}");
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let script_path = match script_path_from_args(&config) {
        Some(path) => path,
        None => {
            eprintln!("Error: No replay script provided and none configured");
            let program_name = env::args()
                .next()
                .unwrap_or_else(|| "stepview-dioxus".to_string());
            eprintln!("Usage: {} <script.json>", program_name);
            eprintln!(
                "Or set script_path in the config file at {}",
                config_path.display()
            );
            process::exit(1);
        }
    };

    let script = match load_script(&script_path) {
        Ok(script) => script,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    };

    log::info!("About to launch Dioxus app for desktop");
    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config(&config))
        .with_context(script)
        .with_context(config)
        .launch(app_root);
}

fn script_path_from_args(config: &Config) -> Option<PathBuf> {
    let args: Vec<String> = env::args().collect();
    if args.len() == 2 {
        log::info!("Using replay script from CLI argument: {}", args[1]);
        return Some(PathBuf::from(&args[1]));
    }
    config.script_path.clone()
}

fn load_script(path: &Path) -> Result<ReplayScript> {
    let script = ReplayScript::load(path)
        .with_context(|| format!("Could not load replay script '{}'", path.display()))?;
    log::info!("Loaded {} frame(s) from {}", script.len(), path.display());
    if script.is_empty() {
        log::warn!("Replay script is empty; the view will only show its placeholder");
    }
    Ok(script)
}

fn app_root() -> Element {
    let script = use_context::<ReplayScript>();
    let config = use_context::<Config>();

    rsx! {
        App { script, config }
    }
}

fn make_window_config(config: &Config) -> dioxus::desktop::Config {
    use dioxus::desktop::{Config as WindowConfig, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title(config.heading.as_str())
        .with_always_on_top(false);

    WindowConfig::default().with_window(window)
}
