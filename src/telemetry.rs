use std::collections::{BTreeMap, BTreeSet};
use std::fs::OpenOptions;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde_json::{Value, json};

pub fn unix_ms_now() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

/// Append-only JSONL sink for routing, hand-off, and tool lifecycle events.
///
/// `emit` never fails the caller: append errors are logged through `tracing`
/// and dropped. The internal mutex only guards the file append.
#[derive(Debug, Clone)]
pub struct TelemetrySink {
    enabled: bool,
    path: PathBuf,
    run_id: String,
    scope: String,
    file_lock: Arc<std::sync::Mutex<()>>,
}

impl TelemetrySink {
    pub fn new(path: impl Into<PathBuf>, scope: impl Into<String>) -> Self {
        let run_id = format!("run-{}-{}", unix_ms_now(), std::process::id());
        Self {
            enabled: true,
            path: path.into(),
            run_id,
            scope: scope.into(),
            file_lock: Arc::new(std::sync::Mutex::new(())),
        }
    }

    /// Sink that drops every event. The stock builder uses this until a host
    /// installs a real sink.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            path: PathBuf::new(),
            run_id: String::new(),
            scope: String::new(),
            file_lock: Arc::new(std::sync::Mutex::new(())),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn emit(&self, event: &str, payload: Value) {
        if !self.enabled {
            return;
        }

        let mut record = serde_json::Map::new();
        record.insert("ts_unix_ms".to_string(), json!(unix_ms_now()));
        record.insert("event".to_string(), json!(event));
        record.insert("run_id".to_string(), json!(self.run_id));
        record.insert("scope".to_string(), json!(self.scope));

        if let Some(map) = payload.as_object() {
            for (key, value) in map {
                record.insert(key.clone(), value.clone());
            }
        }

        let value = Value::Object(record);
        if let Err(err) = self.append_event_line(&value) {
            tracing::warn!(
                event = event,
                path = %self.path.display(),
                error = %err,
                "telemetry write failed"
            );
        }
    }

    fn append_event_line(&self, value: &Value) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).with_context(|| {
                format!(
                    "failed to create telemetry directory '{}'",
                    parent.display()
                )
            })?;
        }

        let _guard = self.file_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open telemetry path '{}'", self.path.display()))?;

        serde_json::to_writer(&mut file, value)
            .with_context(|| format!("failed to serialize telemetry event for '{}'", self.scope))?;
        writeln!(file).context("failed to write telemetry newline")
    }
}

#[derive(Debug, Default)]
pub struct TelemetrySummary {
    pub total_lines: usize,
    pub parsed_events: usize,
    pub parse_errors: usize,
    pub unique_runs: BTreeSet<String>,
    pub event_counts: BTreeMap<String, usize>,
    pub routes_matched: usize,
    pub routes_fallback: usize,
    pub handoffs_resolved: usize,
    pub handoffs_rejected: usize,
    pub tools_invoked: usize,
    pub tools_failed: usize,
    pub tools_timed_out: usize,
    pub last_event_ts_unix_ms: Option<u128>,
}

pub fn summarize_telemetry_lines(lines: Vec<String>, limit: usize) -> TelemetrySummary {
    let mut summary = TelemetrySummary::default();
    let max_events = limit.max(1);
    summary.total_lines = lines.len();

    for line in lines.into_iter().rev().take(max_events) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parsed = match serde_json::from_str::<Value>(line) {
            Ok(value) => value,
            Err(_) => {
                summary.parse_errors += 1;
                continue;
            }
        };

        summary.parsed_events += 1;

        if let Some(run_id) = parsed.get("run_id").and_then(Value::as_str)
            && !run_id.is_empty()
        {
            summary.unique_runs.insert(run_id.to_string());
        }

        if let Some(ts) = parsed.get("ts_unix_ms").and_then(Value::as_u64) {
            let ts_u128 = ts as u128;
            summary.last_event_ts_unix_ms = Some(
                summary
                    .last_event_ts_unix_ms
                    .map(|existing| existing.max(ts_u128))
                    .unwrap_or(ts_u128),
            );
        }

        let event = parsed
            .get("event")
            .and_then(Value::as_str)
            .unwrap_or_default();
        if !event.is_empty() {
            *summary.event_counts.entry(event.to_string()).or_insert(0) += 1;
        }

        match event {
            "route.matched" => summary.routes_matched += 1,
            "route.fallback" => summary.routes_fallback += 1,
            "handoff.resolved" => summary.handoffs_resolved += 1,
            "handoff.rejected" => summary.handoffs_rejected += 1,
            "tool.invoked" => summary.tools_invoked += 1,
            "tool.failed" => summary.tools_failed += 1,
            "tool.timeout" => summary.tools_timed_out += 1,
            _ => {}
        }
    }

    summary
}

/// Reads a telemetry file and summarizes its most recent `limit` events.
pub fn summarize_telemetry_file(path: &Path, limit: usize) -> Result<TelemetrySummary> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open telemetry file '{}'", path.display()))?;
    let reader = io::BufReader::new(file);
    let lines = reader
        .lines()
        .collect::<std::result::Result<Vec<String>, std::io::Error>>()
        .with_context(|| format!("failed to read telemetry file '{}'", path.display()))?;

    Ok(summarize_telemetry_lines(lines, limit))
}
