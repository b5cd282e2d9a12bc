//! # Fake collaborators
//!
//! In-memory stand-ins for the API machinery a pipeline reconciler talks to:
//! recording object stores ([`ObjectStore`]), watch caches ([`WatchCache`]),
//! and the per-test [`Context`] that wires a full set of empty handles
//! together.
//!
//! Everything here is `Arc`-backed: cloning a handle is cheap and all clones
//! observe the same state, which is what lets the fixture seeder, the
//! reconciler under test, and the test's assertions share one world.

pub mod cache;
pub mod clients;
pub mod context;
pub mod store;

pub use cache::WatchCache;
pub use clients::{Clients, KubeClient, PipelineClient};
pub use context::{Context, Informers};
pub use store::{Action, ActionLog, ObjectKey, ObjectStore, StoreError, Verb};
