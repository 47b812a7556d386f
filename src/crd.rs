use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Serialize, Deserialize, Debug, PartialEq, Clone, JsonSchema)]
#[kube(
group = "flinkoperator.k8s.io",
version = "v1alpha1",
kind = "FlinkSessionCluster",
plural = "flinksessionclusters",
derive = "PartialEq",
namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct FlinkSessionClusterSpec {
    pub image_spec: ImageSpec,
    pub job_manager_spec: JobManagerSpec,
    pub task_manager_spec: TaskManagerSpec,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageSpec {
    /// Image reference, e.g. `flink:1.9`.
    pub uri: String,

    /// Copied to the containers' `imagePullPolicy` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_policy: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, JsonSchema)]
pub struct JobManagerSpec {
    pub replicas: i32,
    pub ports: JobManagerPorts,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Copy, JsonSchema)]
pub struct JobManagerPorts {
    pub rpc: i32,
    pub blob: i32,
    pub query: i32,
    pub ui: i32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, JsonSchema)]
pub struct TaskManagerSpec {
    pub replicas: i32,
    pub ports: TaskManagerPorts,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Copy, JsonSchema)]
pub struct TaskManagerPorts {
    pub data: i32,
    pub rpc: i32,
    pub query: i32,
}
