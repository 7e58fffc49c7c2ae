#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

pub const TEST_DBID: &str = "bq1abc2de";

/// Isolated working directory holding a `Code Pages` folder, driven through
/// the binary with the QuickBase variables scrubbed from the inherited
/// environment.
pub struct TestEnv {
    _tmp: TempDir,
    pub workdir: PathBuf,
    pub pages_dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let env = Self::without_pages_dir();
        fs::create_dir_all(&env.pages_dir).expect("create code pages dir");
        env
    }

    pub fn without_pages_dir() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let workdir = tmp.path().join("project");
        fs::create_dir_all(&workdir).expect("create isolated workdir");
        let pages_dir = workdir.join("Code Pages");
        Self {
            _tmp: tmp,
            workdir,
            pages_dir,
        }
    }

    pub fn add_page(&self, name: &str, content: &str) {
        fs::write(self.pages_dir.join(name), content).expect("write page file");
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("qbpush");
        cmd.current_dir(&self.workdir)
            .env_remove("QUICKBASE_USER_TOKEN")
            .env_remove("QUICKBASE_APP_TOKEN")
            .env_remove("QUICKBASE_DBID")
            .env_remove("QUICKBASE_DOMAIN");
        cmd
    }

    pub fn cmd_with_credentials(&self, server: &RecordingServer) -> Command {
        let mut cmd = self.cmd();
        cmd.env("QUICKBASE_USER_TOKEN", "user-token-1")
            .env("QUICKBASE_APP_TOKEN", "app-token-1")
            .env("QUICKBASE_DBID", TEST_DBID)
            .env("QUICKBASE_DOMAIN", server.domain());
        cmd
    }

    pub fn run_json(&self, server: &RecordingServer, args: &[&str]) -> Value {
        let out = self
            .cmd_with_credentials(server)
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

/// One request as seen by the fake QuickBase endpoint.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub dbid: String,
    pub page_name: String,
    pub action: String,
    pub content_type: String,
    pub body: String,
}

#[derive(Default)]
struct ServerState {
    requests: Mutex<Vec<RecordedRequest>>,
    responses: Mutex<HashMap<String, (u16, String)>>,
}

/// Loopback stand-in for the QuickBase page API.
///
/// Accepts `POST /db/:dbid`, records every request, and answers with the
/// response scripted for the payload's page name (default: errcode 0, 200).
pub struct RecordingServer {
    addr: SocketAddr,
    state: Arc<ServerState>,
}

impl RecordingServer {
    pub fn start() -> Self {
        let state = Arc::new(ServerState::default());
        let routed_state = state.clone();
        let (tx, rx) = std::sync::mpsc::channel();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("build test runtime");
            rt.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind loopback listener");
                let addr = listener.local_addr().expect("local addr");
                tx.send(addr).expect("publish server addr");
                let app = Router::new()
                    .route("/db/:dbid", post(record_page_call))
                    .with_state(routed_state);
                axum::serve(listener, app).await.expect("serve fake endpoint");
            });
        });

        let addr = rx.recv().expect("server addr");
        Self { addr, state }
    }

    /// Domain value for the binary under test; the explicit scheme keeps the
    /// request on plain loopback HTTP.
    pub fn domain(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Scripts the response for payloads naming `page`.
    pub fn respond(&self, page: &str, status: u16, body: &str) {
        self.state
            .responses
            .lock()
            .expect("responses lock")
            .insert(page.to_string(), (status, body.to_string()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().expect("requests lock").clone()
    }
}

async fn record_page_call(
    State(state): State<Arc<ServerState>>,
    Path(dbid): Path<String>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let page_name = extract_page_name(&body).unwrap_or_default();

    let (status, reply) = state
        .responses
        .lock()
        .expect("responses lock")
        .get(&page_name)
        .cloned()
        .unwrap_or_else(|| {
            (
                200,
                "<qdbapi><errcode>0</errcode><errtext>No error</errtext></qdbapi>".to_string(),
            )
        });

    state
        .requests
        .lock()
        .expect("requests lock")
        .push(RecordedRequest {
            dbid,
            page_name,
            action: header_string(&headers, "quickbase-action"),
            content_type: header_string(&headers, "content-type"),
            body,
        });

    (
        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        reply,
    )
}

fn extract_page_name(body: &str) -> Option<String> {
    let start = body.find("<pagename>")? + "<pagename>".len();
    let len = body[start..].find("</pagename>")?;
    Some(body[start..start + len].to_string())
}

fn header_string(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
