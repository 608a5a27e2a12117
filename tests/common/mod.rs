use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

#[allow(dead_code)]
pub fn run_debrief(args: &[&str]) -> Output {
    TestEnv::new().run(args)
}

pub struct TestEnv {
    home: TempDir,
    config: TempDir,
    data: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create temporary HOME dir"),
            config: tempfile::tempdir().expect("create temporary XDG config dir"),
            data: tempfile::tempdir().expect("create temporary XDG data dir"),
        }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_debrief"))
            .args(args)
            .current_dir(self.home.path())
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.config.path())
            .env("XDG_DATA_HOME", self.data.path())
            .env_remove("DEBRIEF_ELEVENLABS_API_KEY")
            .env_remove("ELEVENLABS_API_KEY")
            .env_remove("DEBRIEF_GEMINI_API_KEY")
            .env_remove("GEMINI_API_KEY")
            .env_remove("DEBRIEF_CONVERSATION_ID")
            .env_remove("RUST_LOG")
            .env_remove("HTTP_PROXY")
            .env_remove("http_proxy")
            .env_remove("HTTPS_PROXY")
            .env_remove("https_proxy")
            .env_remove("ALL_PROXY")
            .env_remove("all_proxy")
            .output()
            .expect("failed to execute debrief binary")
    }

    /// Working directory of the spawned binary.
    #[allow(dead_code)]
    pub fn work_dir(&self) -> &Path {
        self.home.path()
    }

    #[allow(dead_code)]
    pub fn config_path(&self) -> PathBuf {
        let output = self.run(&["config", "path"]);
        assert!(
            output.status.success(),
            "config path should succeed\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );

        let path = String::from_utf8_lossy(&output.stdout);
        PathBuf::from(path.trim())
    }

    #[allow(dead_code)]
    pub fn write_config(&self, contents: &str) {
        let config_path = self.config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).expect("create config parent directory");
        }
        std::fs::write(&config_path, contents).expect("write config file");
    }

    /// Point both API endpoints at `api` and set test keys.
    #[allow(dead_code)]
    pub fn use_mock_api(&self, api: &MockApi) {
        self.write_config(&format!(
            r#"
[conversation]
api_key = "sk_test"
endpoint = "{base}"

[llm]
api_key = "gk_test"
endpoint = "{base}/v1beta"
"#,
            base = api.base_url()
        ));
    }
}

/// A request captured by [`MockApi`].
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    #[allow(dead_code)]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Canned HTTP responder standing in for both the ElevenLabs and Gemini APIs.
#[allow(dead_code)]
pub struct MockApi {
    addr: std::net::SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

#[allow(dead_code)]
impl MockApi {
    /// Serve `conversation` for conversation lookups and `gemini` for
    /// generateContent calls, each as `(status, json body)`.
    pub fn start(conversation: (u16, String), gemini: (u16, String)) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock api");
        let addr = listener.local_addr().expect("mock api address");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = requests.clone();
        std::thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                let Some(request) = read_request(&stream) else { continue };

                let (status, body) = if request.path.starts_with("/v1/convai/conversations/") {
                    conversation.clone()
                } else if request.path.contains(":generateContent") {
                    gemini.clone()
                } else {
                    (404, r#"{"detail": "not found"}"#.to_string())
                };

                recorded.lock().unwrap().push(request);
                write_response(stream, status, &body);
            }
        });

        Self { addr, requests }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    #[allow(dead_code)]
    pub fn requests_to(&self, needle: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path.contains(needle))
            .collect()
    }
}

#[allow(dead_code)]
fn read_request(stream: &TcpStream) -> Option<RecordedRequest> {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).ok()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let path = parts.next()?.to_string();

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).ok()?;
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((key, value)) = line.split_once(':') {
            headers.push((key.trim().to_string(), value.trim().to_string()));
        }
    }

    let content_length = headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = vec![0; content_length];
    reader.read_exact(&mut body).ok()?;

    Some(RecordedRequest {
        method,
        path,
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

#[allow(dead_code)]
fn write_response(mut stream: TcpStream, status: u16, body: &str) {
    let reason = match status {
        200 => "OK",
        401 => "Unauthorized",
        404 => "Not Found",
        429 => "Too Many Requests",
        _ => "Error",
    };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

/// ElevenLabs-shaped conversation body.
#[allow(dead_code)]
pub fn conversation_body(turns: &[(&str, &str)]) -> String {
    let transcript: Vec<serde_json::Value> = turns
        .iter()
        .enumerate()
        .map(|(i, (role, message))| {
            serde_json::json!({
                "role": role,
                "message": message,
                "time_in_call_secs": i * 5,
            })
        })
        .collect();

    serde_json::json!({
        "agent_id": "agent_test",
        "conversation_id": "conv_test",
        "status": "done",
        "transcript": transcript,
    })
    .to_string()
}

/// Gemini generateContent body returning `text`.
#[allow(dead_code)]
pub fn gemini_body(text: &str) -> String {
    serde_json::json!({
        "candidates": [
            {"content": {"role": "model", "parts": [{"text": text}]}, "finishReason": "STOP"}
        ]
    })
    .to_string()
}
