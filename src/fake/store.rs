//! # Recording object store
//!
//! A mock backing store for one resource kind. Every call is appended to a
//! shared [`ActionLog`] so tests can assert on exactly which API operations
//! the code under test performed, in order, across all kinds of a client.
//!
//! Objects are kept in insertion order; `list` returns them the way they
//! were created. The store is synchronous and in-memory, with no simulated
//! latency or failure injection.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use kube::Resource;
use thiserror::Error;

/// Identity of an object within a store: namespace (if namespaced) plus name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectKey {
    /// Namespace, `None` for cluster-scoped kinds
    pub namespace: Option<String>,
    /// Object name
    pub name: String,
}

impl ObjectKey {
    /// Key for a namespaced object.
    pub fn namespaced(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            name: name.into(),
        }
    }

    /// Key for a cluster-scoped object.
    pub fn cluster(name: impl Into<String>) -> Self {
        Self {
            namespace: None,
            name: name.into(),
        }
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{ns}/{}", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Errors raised by the fake stores and caches.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Create collided with an existing object at the same key
    #[error("{kind} \"{key}\" already exists")]
    AlreadyExists {
        /// Resource kind
        kind: String,
        /// Conflicting key
        key: ObjectKey,
    },
    /// Get/update/delete addressed a key with no object
    #[error("{kind} \"{key}\" not found")]
    NotFound {
        /// Resource kind
        kind: String,
        /// Missing key
        key: ObjectKey,
    },
    /// Object carries no `metadata.name`
    #[error("{kind} object has no metadata.name")]
    MissingName {
        /// Resource kind
        kind: String,
    },
}

/// An API verb, as recorded in the [`ActionLog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Create,
    Get,
    List,
    Update,
    Delete,
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Verb::Create => "create",
            Verb::Get => "get",
            Verb::List => "list",
            Verb::Update => "update",
            Verb::Delete => "delete",
        };
        f.write_str(verb)
    }
}

/// One recorded API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// Verb of the call
    pub verb: Verb,
    /// Resource kind the call addressed
    pub kind: String,
    /// Namespace the call was scoped to, if any
    pub namespace: Option<String>,
    /// Object name, `None` for list calls
    pub name: Option<String>,
}

/// Ordered log of [`Action`]s, shared by every store of one client so that
/// cross-kind call order is preserved.
#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    entries: Arc<Mutex<Vec<Action>>>,
}

impl ActionLog {
    pub(crate) fn record(&self, action: Action) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(action);
    }

    /// Snapshot of all recorded actions, in call order.
    pub fn all(&self) -> Vec<Action> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drop everything recorded so far.
    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Number of recorded actions.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been recorded (or everything was cleared).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory recording store for one resource kind.
///
/// Cheap to clone; all clones share the same objects and action log.
#[derive(Debug, Clone)]
pub struct ObjectStore<K> {
    kind: String,
    objects: Arc<RwLock<Vec<(ObjectKey, K)>>>,
    actions: ActionLog,
}

impl<K> ObjectStore<K>
where
    K: Resource<DynamicType = ()> + Clone,
{
    pub(crate) fn new(actions: ActionLog) -> Self {
        Self {
            kind: K::kind(&()).into_owned(),
            objects: Arc::new(RwLock::new(Vec::new())),
            actions,
        }
    }

    fn key_for(&self, obj: &K) -> Result<ObjectKey, StoreError> {
        let name = obj.meta().name.clone().ok_or_else(|| StoreError::MissingName {
            kind: self.kind.clone(),
        })?;
        Ok(ObjectKey {
            namespace: obj.meta().namespace.clone(),
            name,
        })
    }

    fn record(&self, verb: Verb, namespace: Option<&str>, name: Option<&str>) {
        self.actions.record(Action {
            verb,
            kind: self.kind.clone(),
            namespace: namespace.map(ToOwned::to_owned),
            name: name.map(ToOwned::to_owned),
        });
    }

    /// Create `obj`, keyed by its metadata namespace/name.
    ///
    /// Fails with [`StoreError::AlreadyExists`] on a key collision, matching
    /// the conflict a real API server would return.
    pub fn create(&self, obj: &K) -> Result<K, StoreError> {
        let key = self.key_for(obj)?;
        self.record(Verb::Create, key.namespace.as_deref(), Some(&key.name));
        let mut objects = self
            .objects
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if objects.iter().any(|(existing, _)| *existing == key) {
            return Err(StoreError::AlreadyExists {
                kind: self.kind.clone(),
                key,
            });
        }
        objects.push((key, obj.clone()));
        Ok(obj.clone())
    }

    /// Fetch the object at `namespace`/`name`.
    pub fn get(&self, namespace: Option<&str>, name: &str) -> Result<K, StoreError> {
        self.record(Verb::Get, namespace, Some(name));
        let objects = self.objects.read().unwrap_or_else(PoisonError::into_inner);
        objects
            .iter()
            .find(|(key, _)| key.namespace.as_deref() == namespace && key.name == name)
            .map(|(_, obj)| obj.clone())
            .ok_or_else(|| StoreError::NotFound {
                kind: self.kind.clone(),
                key: ObjectKey {
                    namespace: namespace.map(ToOwned::to_owned),
                    name: name.to_owned(),
                },
            })
    }

    /// List objects in insertion order, optionally filtered to a namespace.
    pub fn list(&self, namespace: Option<&str>) -> Vec<K> {
        self.record(Verb::List, namespace, None);
        let objects = self.objects.read().unwrap_or_else(PoisonError::into_inner);
        objects
            .iter()
            .filter(|(key, _)| namespace.is_none() || key.namespace.as_deref() == namespace)
            .map(|(_, obj)| obj.clone())
            .collect()
    }

    /// Replace the stored object at `obj`'s key.
    pub fn update(&self, obj: &K) -> Result<K, StoreError> {
        let key = self.key_for(obj)?;
        self.record(Verb::Update, key.namespace.as_deref(), Some(&key.name));
        let mut objects = self
            .objects
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        match objects.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, stored)) => {
                *stored = obj.clone();
                Ok(obj.clone())
            }
            None => Err(StoreError::NotFound {
                kind: self.kind.clone(),
                key,
            }),
        }
    }

    /// Remove the object at `namespace`/`name`.
    pub fn delete(&self, namespace: Option<&str>, name: &str) -> Result<(), StoreError> {
        self.record(Verb::Delete, namespace, Some(name));
        let mut objects = self
            .objects
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = objects.len();
        objects.retain(|(key, _)| !(key.namespace.as_deref() == namespace && key.name == name));
        if objects.len() == before {
            return Err(StoreError::NotFound {
                kind: self.kind.clone(),
                key: ObjectKey {
                    namespace: namespace.map(ToOwned::to_owned),
                    name: name.to_owned(),
                },
            });
        }
        Ok(())
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the store holds no objects.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
