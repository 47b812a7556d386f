use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{
    Container, ContainerPort, EnvVar, PodSpec, PodTemplateSpec, Service, ServicePort, ServiceSpec,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;

use crate::cluster::ClusterSpec;
use crate::crd::JobManagerPorts;
use crate::naming::{labels_for, resource_name, Component, JOB_MANAGER_RPC_ADDRESS_ENV};
use crate::owner::owner_reference;

fn named_ports(ports: &JobManagerPorts) -> [(&'static str, i32); 4] {
    [
        ("rpc", ports.rpc),
        ("blob", ports.blob),
        ("query", ports.query),
        ("ui", ports.ui),
    ]
}

/// Desired job manager deployment for `cluster`.
pub fn deployment(cluster: &ClusterSpec) -> Deployment {
    let name = resource_name(&cluster.name, Component::JobManager);
    let labels = labels_for(&cluster.name, Component::JobManager);

    let ports = named_ports(&cluster.job_manager.ports)
        .into_iter()
        .map(|(port_name, port)| ContainerPort {
            name: Some(port_name.to_owned()),
            container_port: port,
            ..ContainerPort::default()
        })
        .collect();

    Deployment {
        metadata: ObjectMeta {
            name: Some(name.clone()),
            namespace: Some(cluster.namespace.clone()),
            labels: Some(labels.clone()),
            owner_references: Some(vec![owner_reference(cluster)]),
            ..ObjectMeta::default()
        },
        spec: Some(DeploymentSpec {
            replicas: Some(cluster.job_manager.replicas),
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
                        name: Component::JobManager.as_str().to_owned(),
                        image: Some(cluster.image.uri.clone()),
                        image_pull_policy: cluster.image.pull_policy.clone(),
                        args: Some(vec![Component::JobManager.as_str().to_owned()]),
                        ports: Some(ports),
                        // the job manager binds its RPC identity to its own service name
                        env: Some(vec![EnvVar {
                            name: JOB_MANAGER_RPC_ADDRESS_ENV.to_owned(),
                            value: Some(name),
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

/// Desired service fronting the job manager pods. Shares the deployment's
/// name and labels; each port targets the container port of the same name.
pub fn service(cluster: &ClusterSpec) -> Service {
    let labels = labels_for(&cluster.name, Component::JobManager);

    let ports = named_ports(&cluster.job_manager.ports)
        .into_iter()
        .map(|(port_name, port)| ServicePort {
            name: Some(port_name.to_owned()),
            port,
            target_port: Some(IntOrString::String(port_name.to_owned())),
            ..ServicePort::default()
        })
        .collect();

    Service {
        metadata: ObjectMeta {
            name: Some(resource_name(&cluster.name, Component::JobManager)),
            namespace: Some(cluster.namespace.clone()),
            labels: Some(labels.clone()),
            owner_references: Some(vec![owner_reference(cluster)]),
            ..ObjectMeta::default()
        },
        spec: Some(ServiceSpec {
            ports: Some(ports),
            selector: Some(labels),
            ..ServiceSpec::default()
        }),
        ..Service::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::tests::wordcount;

    #[test]
    fn wordcount_deployment() {
        let deployment = deployment(&wordcount());

        assert_eq!(deployment.metadata.name.as_deref(), Some("wordcount-jobmanager"));
        assert_eq!(deployment.metadata.namespace.as_deref(), Some("flink"));

        let spec = deployment.spec.unwrap();
        assert_eq!(spec.replicas, Some(1));
        assert_eq!(spec.selector.match_labels, deployment.metadata.labels);

        let pod = spec.template.spec.unwrap();
        assert_eq!(pod.containers.len(), 1);
        let container = &pod.containers[0];
        assert_eq!(container.name, "jobmanager");
        assert_eq!(container.image.as_deref(), Some("flink:1.9"));
        assert_eq!(container.image_pull_policy, None);
        assert_eq!(container.args, Some(vec!["jobmanager".to_owned()]));

        let ports: Vec<_> = container
            .ports
            .as_ref()
            .unwrap()
            .iter()
            .map(|p| (p.name.clone().unwrap(), p.container_port))
            .collect();
        assert_eq!(
            ports,
            [
                ("rpc".to_owned(), 6123),
                ("blob".to_owned(), 6124),
                ("query".to_owned(), 6125),
                ("ui".to_owned(), 8081),
            ]
        );

        let env = container.env.as_ref().unwrap();
        assert_eq!(env.len(), 1);
        assert_eq!(env[0].name, "JOB_MANAGER_RPC_ADDRESS");
        assert_eq!(env[0].value.as_deref(), Some("wordcount-jobmanager"));
    }

    #[test]
    fn pull_policy_passes_through() {
        let mut cluster = wordcount();
        cluster.image.pull_policy = Some("Always".to_owned());

        let pod = deployment(&cluster).spec.unwrap().template.spec.unwrap();
        assert_eq!(pod.containers[0].image_pull_policy.as_deref(), Some("Always"));
    }

    #[test]
    fn service_targets_named_ports() {
        let service = service(&wordcount());
        assert_eq!(service.metadata.name.as_deref(), Some("wordcount-jobmanager"));

        let spec = service.spec.unwrap();
        assert_eq!(spec.selector, service.metadata.labels);

        let ports = spec.ports.unwrap();
        assert_eq!(ports.len(), 4);
        let triples: Vec<_> = ports
            .iter()
            .map(|p| (p.name.clone().unwrap(), p.port, p.target_port.clone()))
            .collect();
        let named = |name: &str, port| {
            (
                name.to_owned(),
                port,
                Some(IntOrString::String(name.to_owned())),
            )
        };
        assert_eq!(
            triples,
            [
                named("rpc", 6123),
                named("blob", 6124),
                named("query", 6125),
                named("ui", 8081),
            ]
        );
    }
}
