//! # Fixture seeding
//!
//! Materializes a declarative [`Data`] snapshot into the fake stores and
//! watch caches of a [`Context`], then clears the recorded-action logs so
//! that later assertions only see what the controller under test did.

mod yaml;

pub use yaml::ManifestError;

use k8s_openapi::api::core::v1::{Namespace, Pod};
use kube::runtime::reflector::Lookup;
use kube::Resource;
use thiserror::Error;
use tracing::debug;

use crate::crd::{ClusterTask, Pipeline, PipelineResource, PipelineRun, Task, TaskRun};
use crate::fake::{Clients, Context, Informers, ObjectStore, StoreError, WatchCache};
use crate::observer::ObservedLogs;

/// The desired state of the system before a test runs: existing resources,
/// per kind, in the order they should be created.
///
/// Caller-constructed; every collection may be empty. `Data::default()` is
/// the empty snapshot.
#[derive(Debug, Clone, Default)]
pub struct Data {
    /// PipelineRuns to seed
    pub pipeline_runs: Vec<PipelineRun>,
    /// Pipelines to seed
    pub pipelines: Vec<Pipeline>,
    /// TaskRuns to seed
    pub task_runs: Vec<TaskRun>,
    /// Tasks to seed
    pub tasks: Vec<Task>,
    /// ClusterTasks to seed (cluster-scoped)
    pub cluster_tasks: Vec<ClusterTask>,
    /// PipelineResources to seed
    pub pipeline_resources: Vec<PipelineResource>,
    /// Pods to seed
    pub pods: Vec<Pod>,
    /// Namespaces to seed (backing store only, no watch cache)
    pub namespaces: Vec<Namespace>,
}

/// Failure while materializing a [`Data`] snapshot.
///
/// The first failing create/insert aborts the whole call; a half-seeded
/// fixture is not usable, so tests are expected to treat this as fatal
/// (`.expect("seed fixture")`).
#[derive(Debug, Error)]
#[error("fixture seeding failed: {0}")]
pub struct SeedError(#[from] StoreError);

/// Everything a reconciler test holds on to: the controller handle, the
/// captured log sink, and the fake clients it asserts against.
#[derive(Debug)]
pub struct TestAssets<C> {
    /// The controller under test
    pub controller: C,
    /// Captured structured logs
    pub logs: ObservedLogs,
    /// Fake clients the controller mutates
    pub clients: Clients,
}

/// Populate the caches and stores of `ctx` with `data`.
///
/// Kinds are seeded in a fixed order (pipeline-runs, pipelines, task-runs,
/// tasks, cluster-tasks, pipeline-resources, pods, namespaces) and within a
/// kind in input order. Each non-namespace instance lands in both its watch
/// cache and its backing store; namespaces are created in the backing store
/// only. Before returning, the recorded-action logs of both clients are
/// cleared — without that reset, the creates issued here would be
/// indistinguishable from actions taken by the controller under test.
pub fn seed(ctx: &Context, data: &Data) -> Result<(Clients, Informers), SeedError> {
    let clients = ctx.clients();
    let informers = ctx.informers();

    debug!(
        pipeline_runs = data.pipeline_runs.len(),
        pipelines = data.pipelines.len(),
        task_runs = data.task_runs.len(),
        tasks = data.tasks.len(),
        cluster_tasks = data.cluster_tasks.len(),
        pipeline_resources = data.pipeline_resources.len(),
        pods = data.pods.len(),
        namespaces = data.namespaces.len(),
        "seeding fixture data"
    );

    seed_kind(
        &data.pipeline_runs,
        &informers.pipeline_run,
        clients.pipeline.pipeline_runs(),
    )?;
    seed_kind(&data.pipelines, &informers.pipeline, clients.pipeline.pipelines())?;
    seed_kind(&data.task_runs, &informers.task_run, clients.pipeline.task_runs())?;
    seed_kind(&data.tasks, &informers.task, clients.pipeline.tasks())?;
    seed_kind(
        &data.cluster_tasks,
        &informers.cluster_task,
        clients.pipeline.cluster_tasks(),
    )?;
    seed_kind(
        &data.pipeline_resources,
        &informers.pipeline_resource,
        clients.pipeline.pipeline_resources(),
    )?;
    seed_kind(&data.pods, &informers.pod, clients.kube.pods())?;

    // Namespaces have no watch-cache counterpart; store only.
    for namespace in &data.namespaces {
        clients.kube.namespaces().create(namespace)?;
    }

    clients.clear_actions();

    Ok((clients, informers))
}

/// Seed one kind: cache insert, then store create, per instance, in order.
fn seed_kind<K>(
    items: &[K],
    cache: &WatchCache<K>,
    store: &ObjectStore<K>,
) -> Result<(), SeedError>
where
    K: Resource<DynamicType = ()> + Lookup<DynamicType = ()> + Clone,
{
    for obj in items {
        cache.insert(obj)?;
        store.create(obj)?;
    }
    Ok(())
}
