//! # Injection context
//!
//! One [`Context`] per test: it constructs the complete set of empty fake
//! stores and watch caches once, and hands out cheap clones of the handles.
//! Never shared between tests — concurrent seeding of one context races by
//! design, the same way two tests sharing a fake API server would.

use k8s_openapi::api::core::v1::Pod;

use crate::crd::{ClusterTask, Pipeline, PipelineResource, PipelineRun, Task, TaskRun};

use super::cache::WatchCache;
use super::clients::Clients;

/// Watch caches per resource kind.
///
/// There is deliberately no namespace cache: the reconcilers this harness
/// serves create namespaces but never look them up by key, so namespaces are
/// seeded into the backing store only.
#[derive(Debug, Clone)]
pub struct Informers {
    /// PipelineRun cache
    pub pipeline_run: WatchCache<PipelineRun>,
    /// Pipeline cache
    pub pipeline: WatchCache<Pipeline>,
    /// TaskRun cache
    pub task_run: WatchCache<TaskRun>,
    /// Task cache
    pub task: WatchCache<Task>,
    /// ClusterTask cache (keyed by name alone)
    pub cluster_task: WatchCache<ClusterTask>,
    /// PipelineResource cache
    pub pipeline_resource: WatchCache<PipelineResource>,
    /// Pod cache
    pub pod: WatchCache<Pod>,
}

impl Informers {
    fn new() -> Self {
        Self {
            pipeline_run: WatchCache::new(),
            pipeline: WatchCache::new(),
            task_run: WatchCache::new(),
            task: WatchCache::new(),
            cluster_task: WatchCache::new(),
            pipeline_resource: WatchCache::new(),
            pod: WatchCache::new(),
        }
    }
}

/// Per-test registry binding every resource kind to its live fake store and
/// cache handles.
///
/// An explicit value rather than ambient global state: each test constructs
/// its own, which rules out cross-test interference without any process-wide
/// singleton.
#[derive(Debug, Clone)]
pub struct Context {
    clients: Clients,
    informers: Informers,
}

impl Context {
    /// Build a context with empty stores and caches for every kind.
    pub fn new() -> Self {
        Self {
            clients: Clients::new(),
            informers: Informers::new(),
        }
    }

    /// Handle bundle for the fake clients bound to this context.
    pub fn clients(&self) -> Clients {
        self.clients.clone()
    }

    /// Handle bundle for the watch caches bound to this context.
    pub fn informers(&self) -> Informers {
        self.informers.clone()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
