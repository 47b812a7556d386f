use k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference;

use crate::cluster::ClusterSpec;

/// Owner reference tying a generated resource to its FlinkSessionCluster, so
/// the garbage collector removes children once the cluster is deleted.
///
/// Children never block deletion of the cluster.
pub fn owner_reference(cluster: &ClusterSpec) -> OwnerReference {
    OwnerReference {
        api_version: cluster.api_version.clone(),
        kind: cluster.kind.clone(),
        name: cluster.name.clone(),
        uid: cluster.uid.clone(),
        controller: Some(true),
        block_owner_deletion: Some(false),
    }
}
