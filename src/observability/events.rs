/// Structured workflow event logging
///
/// Every invocation carries a UUID so interleaved invocations sharing one log
/// can be told apart. Events are emitted through the `log` facade as one JSON
/// object per line.
use serde::{Deserialize, Serialize};
use std::time::SystemTime;
use uuid::Uuid;

/// Correlation id for one workflow invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationId(String);

impl InvocationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for InvocationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for InvocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowEventType {
    WorkflowStart,
    StateTransition,
    CompilerPathCorrected,
    CompilerSpawned,
    RunHandoff,
    WorkflowEnd,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowEvent {
    pub event_type: WorkflowEventType,
    pub invocation_id: InvocationId,
    pub timestamp: SystemTime,
    pub details: String,
}

impl WorkflowEvent {
    pub fn new(event_type: WorkflowEventType, invocation_id: &InvocationId, details: String) -> Self {
        Self {
            event_type,
            invocation_id: invocation_id.clone(),
            timestamp: SystemTime::now(),
            details,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "timestamp": self.timestamp
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis() as u64,
            "event_type": self.event_type,
            "invocation_id": self.invocation_id.as_str(),
            "details": self.details,
            "process_id": std::process::id(),
        })
    }
}

pub fn log_event(event: WorkflowEvent) {
    match event.event_type {
        WorkflowEventType::StateTransition => log::debug!("{}", event.to_json()),
        _ => log::info!("{}", event.to_json()),
    }
}

pub fn workflow_start(id: &InvocationId, action: &str, source: &str) {
    log_event(WorkflowEvent::new(
        WorkflowEventType::WorkflowStart,
        id,
        format!("action={} source={}", action, source),
    ));
}

pub fn state_transition(id: &InvocationId, from: &str, to: &str) {
    log_event(WorkflowEvent::new(
        WorkflowEventType::StateTransition,
        id,
        format!("from={} to={}", from, to),
    ));
}

pub fn compiler_path_corrected(id: &InvocationId, language: &str, path: &str) {
    log_event(WorkflowEvent::new(
        WorkflowEventType::CompilerPathCorrected,
        id,
        format!("language={} path={}", language, path),
    ));
}

pub fn compiler_spawned(id: &InvocationId, command_line: &str) {
    log_event(WorkflowEvent::new(
        WorkflowEventType::CompilerSpawned,
        id,
        format!("command={}", command_line),
    ));
}

pub fn run_handoff(id: &InvocationId, launcher: &str, command_line: &str) {
    log_event(WorkflowEvent::new(
        WorkflowEventType::RunHandoff,
        id,
        format!("launcher={} command={}", launcher, command_line),
    ));
}

pub fn workflow_end(id: &InvocationId, outcome: &str) {
    log_event(WorkflowEvent::new(
        WorkflowEventType::WorkflowEnd,
        id,
        format!("outcome={}", outcome),
    ));
}
