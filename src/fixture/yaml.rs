//! # YAML fixture loading
//!
//! Builds a [`Data`] snapshot from a multi-document YAML manifest stream,
//! dispatching on each document's `kind`. Lets fixtures live next to tests
//! as plain manifests instead of hand-built structs.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_yaml::Value;
use thiserror::Error;

use super::Data;

/// Failure while parsing a fixture manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// A document was not valid YAML or did not match its kind's schema
    #[error("failed to parse manifest document: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// A document has no `kind` field
    #[error("manifest document {index} has no kind field")]
    MissingKind {
        /// Zero-based document index within the stream
        index: usize,
    },
    /// A document's `kind` is not one the harness can seed
    #[error("manifest document {index} has unsupported kind \"{kind}\"")]
    UnsupportedKind {
        /// The offending kind
        kind: String,
        /// Zero-based document index within the stream
        index: usize,
    },
}

impl Data {
    /// Parse a multi-document YAML manifest stream into a snapshot.
    ///
    /// Documents are appended to their kind's collection in stream order,
    /// so insertion order matches the manifest. Empty documents are
    /// skipped; an unknown `kind` is an error.
    pub fn from_yaml(manifest: &str) -> Result<Self, ManifestError> {
        let mut data = Self::default();
        for (index, document) in serde_yaml::Deserializer::from_str(manifest).enumerate() {
            let value = Value::deserialize(document)?;
            if value.is_null() {
                continue;
            }
            let kind = value
                .get("kind")
                .and_then(Value::as_str)
                .ok_or(ManifestError::MissingKind { index })?
                .to_owned();
            match kind.as_str() {
                "PipelineRun" => data.pipeline_runs.push(from_value(value)?),
                "Pipeline" => data.pipelines.push(from_value(value)?),
                "TaskRun" => data.task_runs.push(from_value(value)?),
                "Task" => data.tasks.push(from_value(value)?),
                "ClusterTask" => data.cluster_tasks.push(from_value(value)?),
                "PipelineResource" => data.pipeline_resources.push(from_value(value)?),
                "Pod" => data.pods.push(from_value(value)?),
                "Namespace" => data.namespaces.push(from_value(value)?),
                _ => return Err(ManifestError::UnsupportedKind { kind, index }),
            }
        }
        Ok(data)
    }
}

fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, ManifestError> {
    Ok(serde_yaml::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r"
apiVersion: pipelines.testkit.dev/v1alpha1
kind: Task
metadata:
  name: build
  namespace: default
spec:
  steps:
    - name: compile
      image: golang:1.22
---
apiVersion: pipelines.testkit.dev/v1alpha1
kind: ClusterTask
metadata:
  name: lint
spec: {}
---
apiVersion: v1
kind: Namespace
metadata:
  name: team-a
";

    #[test]
    fn test_from_yaml_dispatches_on_kind() {
        let data = Data::from_yaml(MANIFEST).expect("parse manifest");
        assert_eq!(data.tasks.len(), 1);
        assert_eq!(data.cluster_tasks.len(), 1);
        assert_eq!(data.namespaces.len(), 1);
        assert!(data.pipeline_runs.is_empty());

        let task = &data.tasks[0];
        assert_eq!(task.metadata.name.as_deref(), Some("build"));
        assert_eq!(task.spec.steps[0].image, "golang:1.22");
        assert_eq!(
            data.cluster_tasks[0].metadata.name.as_deref(),
            Some("lint")
        );
    }

    #[test]
    fn test_from_yaml_empty_stream_is_empty_data() {
        let data = Data::from_yaml("").expect("parse empty manifest");
        assert!(data.tasks.is_empty());
        assert!(data.namespaces.is_empty());
    }

    #[test]
    fn test_from_yaml_rejects_unsupported_kind() {
        let manifest = "kind: ConfigMap\nmetadata:\n  name: cm\n";
        let err = Data::from_yaml(manifest).expect_err("unsupported kind");
        assert!(matches!(
            err,
            ManifestError::UnsupportedKind { ref kind, index: 0 } if kind == "ConfigMap"
        ));
    }

    #[test]
    fn test_from_yaml_requires_kind_field() {
        let manifest = "metadata:\n  name: mystery\n";
        let err = Data::from_yaml(manifest).expect_err("missing kind");
        assert!(matches!(err, ManifestError::MissingKind { index: 0 }));
    }
}
