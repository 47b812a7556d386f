use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Service;
use kube::Resource;
use log::debug;

use crate::crd::{FlinkSessionCluster, ImageSpec, JobManagerSpec, TaskManagerSpec};
use crate::error::{Error, Result};
use crate::{jobmanager, taskmanager};

/// A FlinkSessionCluster with every field the generators read already
/// present. Built once per reconcile from the stored object.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterSpec {
    pub api_version: String,
    pub kind: String,
    pub name: String,
    pub namespace: String,
    pub uid: String,
    pub image: ImageSpec,
    pub job_manager: JobManagerSpec,
    pub task_manager: TaskManagerSpec,
}

impl TryFrom<&FlinkSessionCluster> for ClusterSpec {
    type Error = Error;

    fn try_from(cluster: &FlinkSessionCluster) -> Result<Self> {
        let meta = cluster.meta();
        let name = meta.name.clone().ok_or(Error::MissingMetadata("name"))?;
        let namespace = meta
            .namespace
            .clone()
            .ok_or(Error::MissingMetadata("namespace"))?;
        let uid = meta.uid.clone().ok_or(Error::MissingMetadata("uid"))?;

        Ok(ClusterSpec {
            api_version: FlinkSessionCluster::api_version(&()).into_owned(),
            kind: FlinkSessionCluster::kind(&()).into_owned(),
            name,
            namespace,
            uid,
            image: cluster.spec.image_spec.clone(),
            job_manager: cluster.spec.job_manager_spec.clone(),
            task_manager: cluster.spec.task_manager_spec.clone(),
        })
    }
}

/// Every child resource a session cluster needs.
#[derive(Debug, Clone, PartialEq)]
pub struct DesiredState {
    pub job_manager_deployment: Deployment,
    pub job_manager_service: Service,
    pub task_manager_deployment: Deployment,
}

impl DesiredState {
    pub fn deployments(&self) -> [&Deployment; 2] {
        [&self.job_manager_deployment, &self.task_manager_deployment]
    }

    pub fn services(&self) -> [&Service; 1] {
        [&self.job_manager_service]
    }
}

pub fn desired_state(cluster: &ClusterSpec) -> DesiredState {
    let state = DesiredState {
        job_manager_deployment: jobmanager::deployment(cluster),
        job_manager_service: jobmanager::service(cluster),
        task_manager_deployment: taskmanager::deployment(cluster),
    };
    debug!(
        "desired state for {}/{}: deployments {:?}, services {:?}",
        cluster.namespace,
        cluster.name,
        state.deployments().map(|d| d.metadata.name.as_deref()),
        state.services().map(|s| s.metadata.name.as_deref()),
    );
    state
}
