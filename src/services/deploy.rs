//! The deploy loop: one independent add-or-replace request per page file.

use crate::config::DeployConfig;
use crate::domain::constants::DEPLOYED_PAGE_TYPE;
use crate::domain::models::PageOutcome;
use crate::services::pages::list_page_files;
use crate::services::payload::build_page_payload;
use crate::services::quickbase::QuickbaseClient;
use std::path::Path;

/// Uploads every regular file in `folder`, one blocking request at a time.
///
/// Failures are per file: an unreadable file, a transport error, or a
/// rejecting status each produce an outcome and the loop moves to the next
/// candidate. With `announce` the per-file console lines are printed as the
/// loop runs; JSON mode renders the returned outcomes instead.
pub fn deploy_pages(
    config: &DeployConfig,
    folder: &Path,
    announce: bool,
) -> anyhow::Result<Vec<PageOutcome>> {
    let pages = list_page_files(folder)?;
    let client = QuickbaseClient::new(config)?;
    log::debug!("{} deployment candidates in {}", pages.len(), folder.display());

    let mut outcomes = Vec::with_capacity(pages.len());
    for page in pages {
        if announce {
            println!("Deploying page for file: {}", page.name);
        }

        let content = match std::fs::read_to_string(&page.path) {
            Ok(content) => content,
            Err(err) => {
                if announce {
                    println!("Deployment failed for {}: {}", page.name, err);
                }
                outcomes.push(PageOutcome {
                    file: page.name,
                    status: "unreadable".to_string(),
                    http_status: None,
                    response: None,
                    error: Some(err.to_string()),
                });
                continue;
            }
        };

        let payload = build_page_payload(
            &page.name,
            DEPLOYED_PAGE_TYPE,
            &content,
            &config.user_token,
            &config.app_token,
        );

        match client.add_replace_page(payload) {
            Ok(response) if response.status.is_success() => {
                if announce {
                    println!("Deployment successful for {}: {}", page.name, response.body);
                }
                outcomes.push(PageOutcome {
                    file: page.name,
                    status: "deployed".to_string(),
                    http_status: Some(response.status.as_u16()),
                    response: Some(response.body),
                    error: None,
                });
            }
            Ok(response) => {
                if announce {
                    println!(
                        "Deployment failed for {} with status code {}: {}",
                        page.name,
                        response.status.as_u16(),
                        response.body
                    );
                }
                outcomes.push(PageOutcome {
                    file: page.name,
                    status: "rejected".to_string(),
                    http_status: Some(response.status.as_u16()),
                    response: Some(response.body),
                    error: None,
                });
            }
            Err(err) => {
                if announce {
                    println!("Deployment failed for {}: {}", page.name, err);
                }
                outcomes.push(PageOutcome {
                    file: page.name,
                    status: "transport_error".to_string(),
                    http_status: None,
                    response: None,
                    error: Some(err.to_string()),
                });
            }
        }
    }
    Ok(outcomes)
}
