use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{Container, ContainerPort, EnvVar, PodSpec, PodTemplateSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};

use crate::cluster::ClusterSpec;
use crate::naming::{labels_for, resource_name, Component, JOB_MANAGER_RPC_ADDRESS_ENV};
use crate::owner::owner_reference;

/// Desired task manager deployment for `cluster`.
///
/// Task managers find the job manager through its deterministic name, so no
/// service is generated for them.
pub fn deployment(cluster: &ClusterSpec) -> Deployment {
    let labels = labels_for(&cluster.name, Component::TaskManager);
    let job_manager = resource_name(&cluster.name, Component::JobManager);
    let ports = &cluster.task_manager.ports;

    let ports = [("data", ports.data), ("rpc", ports.rpc), ("query", ports.query)]
        .into_iter()
        .map(|(port_name, port)| ContainerPort {
            name: Some(port_name.to_owned()),
            container_port: port,
            ..ContainerPort::default()
        })
        .collect();

    Deployment {
        metadata: ObjectMeta {
            name: Some(resource_name(&cluster.name, Component::TaskManager)),
            namespace: Some(cluster.namespace.clone()),
            labels: Some(labels.clone()),
            owner_references: Some(vec![owner_reference(cluster)]),
            ..ObjectMeta::default()
        },
        spec: Some(DeploymentSpec {
            replicas: Some(cluster.task_manager.replicas),
            selector: LabelSelector {
                match_expressions: None,
                match_labels: Some(labels.clone()),
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(labels),
                    ..ObjectMeta::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![Container {
                        name: Component::TaskManager.as_str().to_owned(),
                        image: Some(cluster.image.uri.clone()),
                        image_pull_policy: cluster.image.pull_policy.clone(),
                        args: Some(vec![Component::TaskManager.as_str().to_owned()]),
                        ports: Some(ports),
                        env: Some(vec![EnvVar {
                            name: JOB_MANAGER_RPC_ADDRESS_ENV.to_owned(),
                            value: Some(job_manager),
                            ..EnvVar::default()
                        }]),
                        ..Container::default()
                    }],
                    ..PodSpec::default()
                }),
            },
            ..DeploymentSpec::default()
        }),
        ..Deployment::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::tests::wordcount;

    #[test]
    fn wordcount_deployment() {
        let deployment = deployment(&wordcount());
        assert_eq!(deployment.metadata.name.as_deref(), Some("wordcount-taskmanager"));
        assert_eq!(
            deployment.metadata.labels.as_ref().unwrap()["component"],
            "taskmanager"
        );

        let spec = deployment.spec.unwrap();
        assert_eq!(spec.replicas, Some(3));

        let pod = spec.template.spec.unwrap();
        let container = &pod.containers[0];
        assert_eq!(container.name, "taskmanager");
        assert_eq!(container.args, Some(vec!["taskmanager".to_owned()]));

        let ports: Vec<_> = container
            .ports
            .as_ref()
            .unwrap()
            .iter()
            .map(|p| (p.name.as_deref().unwrap(), p.container_port))
            .collect();
        assert_eq!(ports, [("data", 6121), ("rpc", 6122), ("query", 6125)]);
    }

    #[test]
    fn points_at_job_manager() {
        let pod = deployment(&wordcount()).spec.unwrap().template.spec.unwrap();
        let env = pod.containers[0].env.clone().unwrap();
        assert_eq!(env.len(), 1);
        assert_eq!(env[0].name, "JOB_MANAGER_RPC_ADDRESS");
        assert_eq!(env[0].value.as_deref(), Some("wordcount-jobmanager"));
    }
}
