//! Stable constants shared across commands and services.

use crate::domain::models::PageType;

/// Folder scanned for deployment candidates, relative to the working directory.
pub const CODE_PAGES_DIR: &str = "Code Pages";

/// Environment variable names the deployer reads.
pub const ENV_USER_TOKEN: &str = "QUICKBASE_USER_TOKEN";
pub const ENV_APP_TOKEN: &str = "QUICKBASE_APP_TOKEN";
pub const ENV_DBID: &str = "QUICKBASE_DBID";
pub const ENV_DOMAIN: &str = "QUICKBASE_DOMAIN";

/// Header naming the QuickBase API call to perform.
pub const QUICKBASE_ACTION_HEADER: &str = "QUICKBASE-ACTION";

/// Action that creates a page or replaces the one with the same name.
pub const ACTION_ADD_REPLACE_PAGE: &str = "API_AddReplaceDBPage";

/// Page type every deployment uploads. Not runtime-configurable.
pub const DEPLOYED_PAGE_TYPE: PageType = PageType::XslHtml;
