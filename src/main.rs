mod common;
mod config;
mod controller;
mod error;
mod storage;
mod ui;

use clap::Parser;
use dotenvy::dotenv;
use storage::SeedData;
use ui::ChatApp;

#[derive(Parser)]
#[command(
    name = "message_tracker",
    version,
    about = "Minimalist group chat simulator"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Group to open on start (overrides the config file)
    #[arg(long, value_name = "ID")]
    group: Option<u32>,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    // Khởi tạo Logger để debug
    env_logger::init();

    let cli = Cli::parse();
    let mut app_config = config::load_config(&cli.config);
    if let Some(group) = cli.group {
        app_config.initial_group = group;
    }

    let settings = app_config.settings();
    let runtime = tokio::runtime::Handle::current();
    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Message Tracker",
        options,
        Box::new(move |cc| {
            Ok(Box::new(ChatApp::new(
                cc,
                &SeedData::builtin(),
                settings,
                runtime,
            )))
        }),
    )
}
