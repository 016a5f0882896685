#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use leviathan_core::{Language, LocalStorage};
use tracing_subscriber::EnvFilter;

/// File name of the shared key/value store inside the data directory
const STORAGE_FILE: &str = "storage.redb";

/// Leviathan - eDNA biodiversity monitoring showcase
#[derive(Parser, Debug)]
#[command(name = "leviathan-desktop")]
#[command(about = "Leviathan - AI-powered eDNA biodiversity monitoring (demo mode)")]
struct Args {
    /// Data directory for storage (use different dirs for independent instances)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Instance name (creates data dir: leviathan-<name>)
    #[arg(short, long)]
    name: Option<String>,

    /// Interface language when none has been chosen yet (en, hi, ml)
    #[arg(short, long, default_value = "en", value_parser = parse_language)]
    language: Language,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn parse_language(code: &str) -> Result<Language, String> {
    Language::from_code(code).ok_or_else(|| format!("unsupported language '{}' (expected en, hi or ml)", code))
}

/// Settings every window of this process shares
#[derive(Clone, Debug, PartialEq)]
pub struct LaunchOptions {
    /// Shown in window titles
    pub instance: String,
    pub default_language: Language,
}

impl LaunchOptions {
    pub fn window_title(&self) -> String {
        if self.instance.is_empty() {
            "Leviathan".to_string()
        } else {
            format!("Leviathan - {}", self.instance)
        }
    }
}

/// Desktop window configuration used for the first and every later window
pub fn window_config(title: &str) -> Config {
    Config::new().with_window(
        WindowBuilder::new()
            .with_title(title)
            .with_inner_size(LogicalSize::new(1280.0, 860.0))
            .with_resizable(true),
    )
}

fn data_dir(args: &Args) -> (PathBuf, String) {
    let base = || dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));

    if let Some(dir) = &args.data_dir {
        let name = dir.file_name().and_then(|n| n.to_str()).unwrap_or("custom").to_string();
        (dir.clone(), name)
    } else if let Some(name) = &args.name {
        (base().join(format!("leviathan-{}", name)), name.clone())
    } else {
        (base().join("leviathan"), String::new())
    }
}

fn main() {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let (data_dir, instance) = data_dir(&args);
    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        tracing::error!(dir = ?data_dir, "Failed to create data directory: {}", e);
        std::process::exit(1);
    }

    let storage = match LocalStorage::open(data_dir.join(STORAGE_FILE)) {
        Ok(storage) => storage,
        Err(e) => {
            tracing::error!(dir = ?data_dir, "Failed to open local storage: {}", e);
            std::process::exit(1);
        }
    };

    let options = LaunchOptions {
        instance,
        default_language: args.language,
    };
    tracing::info!(instance = %options.instance, dir = ?data_dir, "Starting Leviathan");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window_config(&options.window_title()))
        .with_context(storage)
        .with_context(options)
        .launch(app::App);
}
