//! # PipelineResource
//!
//! Typed inputs/outputs (git repos, images, ...) consumed and produced by
//! tasks.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// PipelineResource Custom Resource Definition
///
/// # Example
///
/// ```yaml
/// apiVersion: pipelines.testkit.dev/v1alpha1
/// kind: PipelineResource
/// metadata:
///   name: app-repo
///   namespace: default
/// spec:
///   type: git
///   params:
///     - name: url
///       value: https://example.com/app.git
/// ```
#[derive(CustomResource, Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[kube(
    kind = "PipelineResource",
    group = "pipelines.testkit.dev",
    version = "v1alpha1",
    namespaced,
    shortname = "plr"
)]
#[serde(rename_all = "camelCase")]
pub struct PipelineResourceSpec {
    /// Resource type, e.g. "git", "image", "storage"
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Type-specific key/value configuration
    #[serde(default)]
    pub params: Vec<ResourceParam>,
}

/// A key/value configuration entry for a pipeline resource
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceParam {
    /// Parameter name
    pub name: String,
    /// Parameter value
    pub value: String,
}
