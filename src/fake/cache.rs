//! # Watch cache
//!
//! An in-memory keyed index of resource objects, mimicking what a
//! controller's informer cache would contain after a real watch had observed
//! the same objects. Keys are reflector [`ObjectRef`]s: namespace/name for
//! namespaced kinds, name alone for cluster-scoped kinds.
//!
//! Once populated the cache is only read by the reconciler under test;
//! concurrent reads from worker tasks are safe.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, PoisonError, RwLock};

use kube::runtime::reflector::{Lookup, ObjectRef};

use super::store::StoreError;

/// Keyed in-memory cache for one resource kind.
///
/// Cheap to clone; all clones share the same underlying map.
pub struct WatchCache<K: Lookup> {
    objects: Arc<RwLock<HashMap<ObjectRef<K>, Arc<K>>>>,
}

impl<K: Lookup> Clone for WatchCache<K> {
    fn clone(&self) -> Self {
        Self {
            objects: Arc::clone(&self.objects),
        }
    }
}

impl<K: Lookup> fmt::Debug for WatchCache<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self
            .objects
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        f.debug_struct("WatchCache").field("len", &len).finish()
    }
}

impl<K> WatchCache<K>
where
    K: Lookup + Clone,
    K::DynamicType: Default + Eq + Hash + Clone,
{
    pub(crate) fn new() -> Self {
        Self {
            objects: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert `obj` keyed by its namespace/name, replacing any previous
    /// entry at the same key (a watch would deliver the newest version).
    pub fn insert(&self, obj: &K) -> Result<(), StoreError> {
        if obj.name().is_none() {
            return Err(StoreError::MissingName {
                kind: K::kind(&K::DynamicType::default()).into_owned(),
            });
        }
        let key = obj.to_object_ref(K::DynamicType::default());
        self.objects
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, Arc::new(obj.clone()));
        Ok(())
    }

    /// Look up an entry by reflector key.
    pub fn get(&self, key: &ObjectRef<K>) -> Option<Arc<K>> {
        self.objects
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .map(Arc::clone)
    }

    /// Look up by namespace and name (`namespace: None` for cluster-scoped
    /// kinds).
    pub fn find(&self, namespace: Option<&str>, name: &str) -> Option<Arc<K>> {
        let key = match namespace {
            Some(ns) => ObjectRef::<K>::new(name).within(ns),
            None => ObjectRef::<K>::new(name),
        };
        self.get(&key)
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.objects
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crd::{ClusterTask, ClusterTaskSpec, Task, TaskSpec};

    fn task(name: &str, ns: &str) -> Task {
        let mut task = Task::new(
            name,
            TaskSpec {
                steps: Vec::new(),
                params: Vec::new(),
            },
        );
        task.metadata.namespace = Some(ns.into());
        task
    }

    #[test]
    fn test_insert_then_find_by_namespace_and_name() {
        let cache = WatchCache::new();
        cache.insert(&task("build", "default")).expect("insert");

        let hit = cache.find(Some("default"), "build").expect("cache hit");
        assert_eq!(hit.metadata.namespace.as_deref(), Some("default"));
        assert!(cache.find(Some("other"), "build").is_none());
        assert!(cache.find(Some("default"), "deploy").is_none());
    }

    #[test]
    fn test_cluster_scoped_lookup_is_by_name_alone() {
        let cache = WatchCache::new();
        let ct = ClusterTask::new(
            "lint",
            ClusterTaskSpec {
                steps: Vec::new(),
                params: Vec::new(),
            },
        );
        cache.insert(&ct).expect("insert");
        assert!(cache.find(None, "lint").is_some());
    }

    #[test]
    fn test_insert_replaces_existing_entry() {
        let cache = WatchCache::new();
        cache.insert(&task("build", "default")).expect("insert");

        let mut newer = task("build", "default");
        newer.metadata.resource_version = Some("2".into());
        cache.insert(&newer).expect("re-insert");

        assert_eq!(cache.len(), 1);
        let hit = cache.find(Some("default"), "build").expect("cache hit");
        assert_eq!(hit.metadata.resource_version.as_deref(), Some("2"));
    }

    #[test]
    fn test_insert_without_name_is_rejected() {
        let cache = WatchCache::new();
        let mut nameless = task("build", "default");
        nameless.metadata.name = None;
        let err = cache.insert(&nameless).expect_err("missing name");
        assert!(matches!(err, StoreError::MissingName { .. }));
    }
}
