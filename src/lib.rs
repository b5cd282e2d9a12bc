//! # Pipeline Testkit
//!
//! Test-fixture harness for reconciler-style pipeline controllers.
//!
//! A test builds a declarative [`Data`] snapshot of the cluster state it wants
//! to start from, constructs a fresh [`Context`] (one per test, never shared),
//! and calls [`seed`] to materialize the snapshot into two parallel
//! representations:
//!
//! - per-kind **watch caches** ([`Informers`]) — keyed in-memory lookups the
//!   reconciler under test reads synchronously, mimicking what an informer
//!   would contain after a real watch had observed the same objects;
//! - **recording mock stores** ([`Clients`]) — simulated API surfaces that
//!   remember every call made against them, so tests can assert "the
//!   controller created exactly N objects".
//!
//! After seeding, the recorded-action logs are cleared so assertions measure
//! only what the controller under test did. Log output can be captured with
//! [`observer::capture`] and inspected via [`log_messages`].

pub mod crd;
pub mod fake;
pub mod fixture;
pub mod observer;

// Re-export the resource types and the harness surface for convenience
pub use crd::*;
pub use fake::{Action, Clients, Context, Informers, KubeClient, PipelineClient, StoreError, Verb};
pub use fixture::{seed, Data, ManifestError, SeedError, TestAssets};
pub use observer::{log_messages, ObservedEntry, ObservedLogs};
