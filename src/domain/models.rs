use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Page kinds understood by the QuickBase page API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageType {
    /// XSL stylesheets and plain HTML pages.
    XslHtml,
    /// Exact Forms documents.
    #[allow(dead_code)]
    ExactForm,
}

impl PageType {
    /// Numeric tag the service expects in the `pagetype` element.
    pub fn tag(self) -> u32 {
        match self {
            PageType::XslHtml => 1,
            PageType::ExactForm => 3,
        }
    }
}

/// One deployment candidate as shown by `pages`.
#[derive(Debug, Serialize, Clone)]
pub struct PageEntry {
    pub name: String,
    pub bytes: u64,
}

/// Result of one add-or-replace attempt.
///
/// `status` is one of `deployed`, `rejected`, `transport_error`, `unreadable`.
/// `http_status` and `response` are present whenever the service answered;
/// `error` is present for local read failures and transport failures.
#[derive(Debug, Serialize)]
pub struct PageOutcome {
    pub file: String,
    pub status: String,
    pub http_status: Option<u16>,
    pub response: Option<String>,
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct CheckItem {
    pub name: String,
    pub status: String,
}

/// Readiness report for `check`. Never carries credential values.
#[derive(Serialize)]
pub struct CheckReport {
    pub overall: String,
    pub configs: Vec<CheckItem>,
    pub folder: CheckItem,
    pub page_count: usize,
    pub endpoint: Option<String>,
}
