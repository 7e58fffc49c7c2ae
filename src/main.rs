use clap::Parser;

mod cli;
mod commands;
mod config;
mod domain;
mod services;

use cli::Cli;
use config::ConfigError;
use services::pages::PagesError;

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = commands::handle_runtime_commands(&cli) {
        report_failure(cli.json, &err);
        std::process::exit(1);
    }
}

/// Startup failures reach the user here; per-file deploy failures never do,
/// they are ordinary outcomes. JSON mode keeps the envelope contract on
/// stdout, text mode goes to stderr.
fn report_failure(json: bool, err: &anyhow::Error) {
    if json {
        let out = serde_json::json!({
            "ok": false,
            "error": { "code": error_code(err), "message": format!("{err:#}") }
        });
        println!("{out:#}");
    } else {
        eprintln!("error: {err:#}");
    }
}

fn error_code(err: &anyhow::Error) -> &'static str {
    if err.downcast_ref::<ConfigError>().is_some() {
        "CONFIG_MISSING"
    } else if err.downcast_ref::<PagesError>().is_some() {
        "CODE_PAGES_DIR"
    } else {
        "INTERNAL"
    }
}
