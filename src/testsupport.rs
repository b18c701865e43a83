//! Shared test fixtures: temp dirs, scripted console input, a recording render
//! sink, and a canned order source.

use crate::api::OrderSource;
use crate::error::ApiError;
use crate::orders::{Order, OrdersEnvelope, ProjectedOrder};
use crate::ui::input::LineReader;
use crate::ui::render::RenderSink;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!(
            "order-lookup-{prefix}-{}-{millis}-{suffix}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Line reader that replays fixed answers and records every prompt shown.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn prompts(&self) -> Vec<&str> {
        self.prompts.iter().map(String::as_str).collect()
    }
}

impl LineReader for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front())
    }
}

/// Render sink that records one tagged line per call.
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("sink lock").clone()
    }

    fn push(&self, line: String) {
        self.lines.lock().expect("sink lock").push(line);
    }
}

impl RenderSink for RecordingSink {
    fn activity(&self, text: &str) {
        self.push(format!("activity: {text}"));
    }

    fn warn(&self, msg: &str) {
        self.push(format!("warn: {msg}"));
    }

    fn error(&self, msg: &str) {
        self.push(format!("error: {msg}"));
    }

    fn order(&self, order: &ProjectedOrder) {
        self.push(format!("order: {}", order.to_pretty_json()));
    }

    fn not_found(&self) {
        self.push("not_found".to_string());
    }

    fn done(&self) {
        self.push("done".to_string());
    }
}

/// Order source returning canned results and recording each query.
#[derive(Debug, Default)]
pub struct CannedOrders {
    responses: Mutex<VecDeque<Result<Vec<Order>, ApiError>>>,
    queries: Mutex<Vec<String>>,
}

impl CannedOrders {
    /// Queue one successful page built from raw JSON order objects.
    pub fn with_page(self, orders: Value) -> Self {
        let envelope: OrdersEnvelope =
            serde_json::from_value(serde_json::json!({ "orders": orders }))
                .expect("fixture orders must decode");
        self.responses
            .lock()
            .expect("canned lock")
            .push_back(Ok(envelope.orders));
        self
    }

    /// Queue one failure.
    pub fn with_error(self, err: ApiError) -> Self {
        self.responses.lock().expect("canned lock").push_back(Err(err));
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().expect("canned lock").clone()
    }
}

#[async_trait]
impl OrderSource for CannedOrders {
    async fn search_orders(&self, query: &str) -> Result<Vec<Order>, ApiError> {
        self.queries
            .lock()
            .expect("canned lock")
            .push(query.to_string());
        self.responses
            .lock()
            .expect("canned lock")
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
