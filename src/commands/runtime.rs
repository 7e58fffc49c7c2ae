use crate::cli::{Cli, Commands};
use crate::config::DeployConfig;
use crate::domain::constants::CODE_PAGES_DIR;
use crate::domain::models::JsonOut;
use crate::services::check::build_check_report;
use crate::services::deploy::deploy_pages;
use crate::services::output::print_out;
use crate::services::pages::list_page_entries;
use std::path::Path;

pub fn handle_runtime_commands(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Deploy => {
            let config = DeployConfig::from_env()?;
            let outcomes = deploy_pages(&config, Path::new(CODE_PAGES_DIR), !cli.json)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: outcomes
                    })?
                );
            }
        }
        Commands::Pages => {
            let entries = list_page_entries(Path::new(CODE_PAGES_DIR))?;
            print_out(cli.json, &entries, |p| format!("{}\t{}", p.name, p.bytes))?;
        }
        Commands::Check => {
            let report = build_check_report();
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: report
                    })?
                );
            } else {
                println!("overall: {}", report.overall);
                for c in &report.configs {
                    println!("config:{}\t{}", c.name, c.status);
                }
                println!("folder:{}\t{}", report.folder.name, report.folder.status);
                println!("pages: {}", report.page_count);
                if let Some(endpoint) = &report.endpoint {
                    println!("endpoint: {}", endpoint);
                }
            }
        }
    }
    Ok(())
}
