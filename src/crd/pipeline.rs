//! # Pipeline resources
//!
//! `Pipeline` and `PipelineRun`.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::status::PipelineRunStatus;
use super::task::{Param, ParamSpec, TaskRef};

/// Pipeline Custom Resource Definition
///
/// An ordered graph of task references. The harness treats it as opaque
/// data; ordering semantics (`runAfter`) only matter to the reconciler
/// under test.
#[derive(CustomResource, Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[kube(
    kind = "Pipeline",
    group = "pipelines.testkit.dev",
    version = "v1alpha1",
    namespaced,
    shortname = "pl"
)]
#[serde(rename_all = "camelCase")]
pub struct PipelineSpec {
    /// Tasks that make up the pipeline, in declaration order
    #[serde(default)]
    pub tasks: Vec<PipelineTask>,
    /// Parameters the pipeline accepts
    #[serde(default)]
    pub params: Vec<ParamSpec>,
}

/// A task entry within a pipeline graph
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTask {
    /// Name of this entry, unique within the pipeline
    pub name: String,
    /// Reference to the Task or ClusterTask to run
    pub task_ref: TaskRef,
    /// Names of pipeline tasks that must complete first
    #[serde(default)]
    pub run_after: Vec<String>,
}

/// PipelineRun Custom Resource Definition
///
/// A single execution of a referenced Pipeline. The reconciler under test
/// fans it out into TaskRuns and rolls their conditions up into the run
/// status.
#[derive(CustomResource, Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[kube(
    kind = "PipelineRun",
    group = "pipelines.testkit.dev",
    version = "v1alpha1",
    namespaced,
    status = "PipelineRunStatus",
    shortname = "pr",
    printcolumn = r#"{"name":"Succeeded", "type":"string", "jsonPath":".status.conditions[?(@.type==\"Succeeded\")].status"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct PipelineRunSpec {
    /// Reference to the Pipeline to execute
    pub pipeline_ref: PipelineRef,
    /// Parameter values supplied to the pipeline
    #[serde(default)]
    pub params: Vec<Param>,
    /// Service account the run's pods execute as
    #[serde(default)]
    pub service_account_name: Option<String>,
}

/// Reference to a Pipeline by name
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PipelineRef {
    /// Name of the referenced pipeline
    pub name: String,
}
