//! # Task resources
//!
//! `Task`, the cluster-scoped `ClusterTask`, and `TaskRun`.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::status::TaskRunStatus;

/// Task Custom Resource Definition
///
/// A reusable, namespaced unit of work: an ordered list of container steps
/// plus the parameters they accept.
///
/// # Example
///
/// ```yaml
/// apiVersion: pipelines.testkit.dev/v1alpha1
/// kind: Task
/// metadata:
///   name: build
///   namespace: default
/// spec:
///   steps:
///     - name: compile
///       image: golang:1.22
///       command: ["go", "build", "./..."]
/// ```
#[derive(CustomResource, Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[kube(
    kind = "Task",
    group = "pipelines.testkit.dev",
    version = "v1alpha1",
    namespaced,
    shortname = "tsk"
)]
#[serde(rename_all = "camelCase")]
pub struct TaskSpec {
    /// Ordered container steps executed by a TaskRun
    #[serde(default)]
    pub steps: Vec<Step>,
    /// Parameters the task accepts
    #[serde(default)]
    pub params: Vec<ParamSpec>,
}

/// ClusterTask Custom Resource Definition
///
/// Same shape as [`TaskSpec`] but cluster-scoped, so it can be referenced
/// from any namespace. Identity is by name alone.
#[derive(CustomResource, Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[kube(
    kind = "ClusterTask",
    group = "pipelines.testkit.dev",
    version = "v1alpha1",
    shortname = "ctsk"
)]
#[serde(rename_all = "camelCase")]
pub struct ClusterTaskSpec {
    /// Ordered container steps executed by a TaskRun
    #[serde(default)]
    pub steps: Vec<Step>,
    /// Parameters the task accepts
    #[serde(default)]
    pub params: Vec<ParamSpec>,
}

/// TaskRun Custom Resource Definition
///
/// A single execution of a referenced Task (or ClusterTask). The reconciler
/// under test owns the lifecycle: it creates the backing pod and updates the
/// run status as the pod progresses.
#[derive(CustomResource, Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[kube(
    kind = "TaskRun",
    group = "pipelines.testkit.dev",
    version = "v1alpha1",
    namespaced,
    status = "TaskRunStatus",
    shortname = "tr",
    printcolumn = r#"{"name":"Succeeded", "type":"string", "jsonPath":".status.conditions[?(@.type==\"Succeeded\")].status"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct TaskRunSpec {
    /// Reference to the Task or ClusterTask to execute
    pub task_ref: TaskRef,
    /// Parameter values supplied to the task
    #[serde(default)]
    pub params: Vec<Param>,
    /// Service account the run's pod executes as
    #[serde(default)]
    pub service_account_name: Option<String>,
}

/// Reference to a Task or ClusterTask by name
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskRef {
    /// Name of the referenced task
    pub name: String,
    /// Kind of the referenced task: "Task" (default) or "ClusterTask"
    #[serde(default)]
    pub kind: Option<String>,
}

/// A single container step within a task
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Step name, unique within the task
    pub name: String,
    /// Container image the step runs in
    pub image: String,
    /// Entrypoint override
    #[serde(default)]
    pub command: Vec<String>,
    /// Arguments to the entrypoint
    #[serde(default)]
    pub args: Vec<String>,
}

/// Declaration of a parameter a task or pipeline accepts
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParamSpec {
    /// Parameter name
    pub name: String,
    /// Human-readable description
    #[serde(default)]
    pub description: Option<String>,
    /// Default value used when the run supplies none
    #[serde(default)]
    pub default: Option<String>,
}

/// A concrete parameter value supplied by a run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Param {
    /// Parameter name, matching a declared [`ParamSpec`]
    pub name: String,
    /// Parameter value
    pub value: String,
}
