//! # Client bundles
//!
//! Recording fakes grouped per API group, the way a test consumes them: one
//! client for the pipeline CRDs, one for core Kubernetes kinds. Each client's
//! stores share a single [`ActionLog`], so the order of calls is preserved
//! across kinds within the client.

use k8s_openapi::api::core::v1::{Namespace, Pod};

use crate::crd::{ClusterTask, Pipeline, PipelineResource, PipelineRun, Task, TaskRun};

use super::store::{Action, ActionLog, ObjectStore};

/// Fake client for the pipeline API group.
#[derive(Debug, Clone)]
pub struct PipelineClient {
    actions: ActionLog,
    pipeline_runs: ObjectStore<PipelineRun>,
    pipelines: ObjectStore<Pipeline>,
    task_runs: ObjectStore<TaskRun>,
    tasks: ObjectStore<Task>,
    cluster_tasks: ObjectStore<ClusterTask>,
    pipeline_resources: ObjectStore<PipelineResource>,
}

impl PipelineClient {
    pub(crate) fn new() -> Self {
        let actions = ActionLog::default();
        Self {
            pipeline_runs: ObjectStore::new(actions.clone()),
            pipelines: ObjectStore::new(actions.clone()),
            task_runs: ObjectStore::new(actions.clone()),
            tasks: ObjectStore::new(actions.clone()),
            cluster_tasks: ObjectStore::new(actions.clone()),
            pipeline_resources: ObjectStore::new(actions.clone()),
            actions,
        }
    }

    /// PipelineRun store.
    pub fn pipeline_runs(&self) -> &ObjectStore<PipelineRun> {
        &self.pipeline_runs
    }

    /// Pipeline store.
    pub fn pipelines(&self) -> &ObjectStore<Pipeline> {
        &self.pipelines
    }

    /// TaskRun store.
    pub fn task_runs(&self) -> &ObjectStore<TaskRun> {
        &self.task_runs
    }

    /// Task store.
    pub fn tasks(&self) -> &ObjectStore<Task> {
        &self.tasks
    }

    /// ClusterTask store (cluster-scoped).
    pub fn cluster_tasks(&self) -> &ObjectStore<ClusterTask> {
        &self.cluster_tasks
    }

    /// PipelineResource store.
    pub fn pipeline_resources(&self) -> &ObjectStore<PipelineResource> {
        &self.pipeline_resources
    }

    /// All calls recorded against this client, across kinds, in call order.
    pub fn actions(&self) -> Vec<Action> {
        self.actions.all()
    }

    /// Forget every recorded call.
    pub fn clear_actions(&self) {
        self.actions.clear();
    }
}

/// Fake client for core Kubernetes kinds.
#[derive(Debug, Clone)]
pub struct KubeClient {
    actions: ActionLog,
    pods: ObjectStore<Pod>,
    namespaces: ObjectStore<Namespace>,
}

impl KubeClient {
    pub(crate) fn new() -> Self {
        let actions = ActionLog::default();
        Self {
            pods: ObjectStore::new(actions.clone()),
            namespaces: ObjectStore::new(actions.clone()),
            actions,
        }
    }

    /// Pod store.
    pub fn pods(&self) -> &ObjectStore<Pod> {
        &self.pods
    }

    /// Namespace store (cluster-scoped).
    pub fn namespaces(&self) -> &ObjectStore<Namespace> {
        &self.namespaces
    }

    /// All calls recorded against this client, across kinds, in call order.
    pub fn actions(&self) -> Vec<Action> {
        self.actions.all()
    }

    /// Forget every recorded call.
    pub fn clear_actions(&self) {
        self.actions.clear();
    }
}

/// The client bundle handed to a test: everything the reconciler under test
/// can mutate, and everything assertions read action logs from.
#[derive(Debug, Clone)]
pub struct Clients {
    /// Pipeline API group client
    pub pipeline: PipelineClient,
    /// Core Kubernetes client
    pub kube: KubeClient,
}

impl Clients {
    pub(crate) fn new() -> Self {
        Self {
            pipeline: PipelineClient::new(),
            kube: KubeClient::new(),
        }
    }

    /// Clear the recorded-action logs of both clients.
    pub fn clear_actions(&self) {
        self.pipeline.clear_actions();
        self.kube.clear_actions();
    }
}
