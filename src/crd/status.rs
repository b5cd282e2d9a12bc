//! # Run status types
//!
//! Status structs for `TaskRun` and `PipelineRun`, shared `Condition` type.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Status of a TaskRun
#[derive(Debug, Clone, Deserialize, Serialize, Default, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskRunStatus {
    /// Conditions represent the latest available observations
    #[serde(default)]
    pub conditions: Vec<Condition>,
    /// Time the run started (RFC3339)
    #[serde(default)]
    pub start_time: Option<String>,
    /// Time the run completed (RFC3339)
    #[serde(default)]
    pub completion_time: Option<String>,
    /// Name of the pod executing the run's steps
    #[serde(default)]
    pub pod_name: Option<String>,
}

/// Status of a PipelineRun
#[derive(Debug, Clone, Deserialize, Serialize, Default, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PipelineRunStatus {
    /// Conditions represent the latest available observations
    #[serde(default)]
    pub conditions: Vec<Condition>,
    /// Time the run started (RFC3339)
    #[serde(default)]
    pub start_time: Option<String>,
    /// Time the run completed (RFC3339)
    #[serde(default)]
    pub completion_time: Option<String>,
    /// Names of the TaskRuns created for this pipeline run
    #[serde(default)]
    pub task_runs: Vec<String>,
}

/// Condition represents a condition of a resource
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Type of condition, e.g. "Succeeded"
    pub r#type: String,
    /// Status of the condition (True, False, Unknown)
    pub status: String,
    /// Last transition time (RFC3339)
    #[serde(default)]
    pub last_transition_time: Option<String>,
    /// Reason for the condition
    #[serde(default)]
    pub reason: Option<String>,
    /// Human-readable message
    #[serde(default)]
    pub message: Option<String>,
}

impl Condition {
    /// Build a condition stamped with the current time.
    pub fn new(r#type: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            r#type: r#type.into(),
            status: status.into(),
            last_transition_time: Some(chrono::Utc::now().to_rfc3339()),
            reason: None,
            message: None,
        }
    }

    /// Attach a reason.
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Attach a message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_new_stamps_transition_time() {
        let cond = Condition::new("Succeeded", "Unknown");
        assert_eq!(cond.r#type, "Succeeded");
        assert_eq!(cond.status, "Unknown");
        assert!(cond.last_transition_time.is_some());
        assert!(cond.reason.is_none());
    }

    #[test]
    fn test_condition_builders() {
        let cond = Condition::new("Succeeded", "False")
            .with_reason("TaskRunFailed")
            .with_message("step compile exited 1");
        assert_eq!(cond.reason.as_deref(), Some("TaskRunFailed"));
        assert_eq!(cond.message.as_deref(), Some("step compile exited 1"));
    }

    #[test]
    fn test_task_run_status_serializes_camel_case() {
        let status = TaskRunStatus {
            pod_name: Some("build-pod".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&status).expect("serialize status");
        assert_eq!(json["podName"], "build-pod");
    }
}
