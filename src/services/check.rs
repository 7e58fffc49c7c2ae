//! Readiness report assembly for the `check` command.

use crate::config::{missing_vars, DeployConfig, REQUIRED_VARS};
use crate::domain::constants::CODE_PAGES_DIR;
use crate::domain::models::{CheckItem, CheckReport};
use crate::services::pages::list_page_files;
use std::path::Path;

/// Reports deploy readiness without touching the network.
///
/// Variable entries carry presence only, never values. The folder entry is
/// `ok`, `missing`, or `not_a_directory`; the page count covers what one
/// `deploy` run would attempt.
pub fn build_check_report() -> CheckReport {
    let missing = missing_vars();
    let configs = REQUIRED_VARS
        .iter()
        .map(|name| CheckItem {
            name: (*name).to_string(),
            status: if missing.contains(name) { "missing" } else { "ok" }.to_string(),
        })
        .collect();

    let folder_path = Path::new(CODE_PAGES_DIR);
    let folder_status = if folder_path.is_dir() {
        "ok"
    } else if folder_path.exists() {
        "not_a_directory"
    } else {
        "missing"
    };
    let folder = CheckItem {
        name: CODE_PAGES_DIR.to_string(),
        status: folder_status.to_string(),
    };

    let page_count = if folder_status == "ok" {
        list_page_files(folder_path)
            .map(|pages| pages.len())
            .unwrap_or(0)
    } else {
        0
    };

    let endpoint = DeployConfig::from_env().ok().map(|c| c.endpoint_url());

    let overall = if missing.is_empty() && folder_status == "ok" {
        "ok"
    } else {
        "needs_attention"
    };

    CheckReport {
        overall: overall.to_string(),
        configs,
        folder,
        page_count,
        endpoint,
    }
}
