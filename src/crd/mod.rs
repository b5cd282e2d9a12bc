//! # Custom Resource Definitions
//!
//! CRD types for the pipeline resources the harness can seed.
//!
//! These are the typed, namespaced resources a pipeline reconciler watches:
//! `Pipeline`/`PipelineRun`, `Task`/`TaskRun`, the cluster-scoped
//! `ClusterTask`, and `PipelineResource`. Core types (`Pod`, `Namespace`)
//! come straight from `k8s-openapi` and are not redefined here.

mod pipeline;
mod resource;
mod status;
mod task;

pub use pipeline::{
    Pipeline, PipelineRef, PipelineRun, PipelineRunSpec, PipelineSpec, PipelineTask,
};
pub use resource::{PipelineResource, PipelineResourceSpec, ResourceParam};
pub use status::{Condition, PipelineRunStatus, TaskRunStatus};
pub use task::{
    ClusterTask, ClusterTaskSpec, Param, ParamSpec, Step, Task, TaskRef, TaskRun, TaskRunSpec,
    TaskSpec,
};
