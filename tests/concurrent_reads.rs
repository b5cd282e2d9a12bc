//! # Concurrent Read Tests
//!
//! The harness seeds synchronously, but the seeded caches and stores must be
//! safe for concurrent reads once `seed` returns — a reconciler running on
//! worker tasks observes the fixture while the test asserts against it.

use k8s_openapi::api::core::v1::Pod;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

use pipeline_testkit::{seed, Context, Data, TaskRef, TaskRun, TaskRunSpec, Verb};

fn task_run(name: &str, ns: &str) -> TaskRun {
    let mut run = TaskRun::new(
        name,
        TaskRunSpec {
            task_ref: TaskRef {
                name: "build".into(),
                kind: None,
            },
            params: Vec::new(),
            service_account_name: None,
        },
    );
    run.metadata.namespace = Some(ns.into());
    run
}

fn pod(name: &str, ns: &str) -> Pod {
    Pod {
        metadata: ObjectMeta {
            name: Some(name.into()),
            namespace: Some(ns.into()),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[tokio::test]
async fn test_workers_read_seeded_cache_while_mutating_stores() {
    let ctx = Context::new();
    let data = Data {
        task_runs: (0..4).map(|i| task_run(&format!("run-{i}"), "ci")).collect(),
        ..Default::default()
    };
    let (clients, informers) = seed(&ctx, &data).expect("seed fixture");

    // Toy reconciler: each worker resolves its run from the cache and
    // creates the backing pod, the way a real reconcile loop would.
    let mut workers = Vec::new();
    for i in 0..4 {
        let informers = informers.clone();
        let clients = clients.clone();
        workers.push(tokio::spawn(async move {
            let name = format!("run-{i}");
            let run = informers
                .task_run
                .find(Some("ci"), &name)
                .expect("run in watch cache");
            let pod_name = format!("{name}-pod");
            clients
                .kube
                .pods()
                .create(&pod(&pod_name, "ci"))
                .expect("create pod");
            run.metadata.name.clone().expect("run name")
        }));
    }

    let mut reconciled = Vec::new();
    for worker in workers {
        reconciled.push(worker.await.expect("worker panicked"));
    }
    reconciled.sort();
    assert_eq!(reconciled, ["run-0", "run-1", "run-2", "run-3"]);

    // Only the reconciler's calls are on the log; seeding was cleared.
    let actions = clients.kube.actions();
    assert_eq!(actions.len(), 4);
    assert!(actions
        .iter()
        .all(|a| a.verb == Verb::Create && a.kind == "Pod"));
    assert_eq!(clients.kube.pods().len(), 4);
}

#[tokio::test]
async fn test_concurrent_cache_reads_see_consistent_state() {
    let ctx = Context::new();
    let data = Data {
        task_runs: vec![task_run("run-0", "ci")],
        ..Default::default()
    };
    let (_clients, informers) = seed(&ctx, &data).expect("seed fixture");

    let mut readers = Vec::new();
    for _ in 0..8 {
        let informers = informers.clone();
        readers.push(tokio::spawn(async move {
            let run = informers
                .task_run
                .find(Some("ci"), "run-0")
                .expect("run in watch cache");
            run.spec.task_ref.name.clone()
        }));
    }

    for reader in readers {
        assert_eq!(reader.await.expect("reader panicked"), "build");
    }
}
