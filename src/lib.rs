//! Desired-state generation for Flink session clusters.
//!
//! Maps a [`FlinkSessionCluster`](crd::FlinkSessionCluster) onto the
//! deployments and service a reconciler applies. Nothing here talks to the
//! API server.

pub mod cluster;
pub mod crd;
pub mod error;
pub mod jobmanager;
pub mod naming;
pub mod owner;
pub mod taskmanager;

pub use cluster::{desired_state, ClusterSpec, DesiredState};
pub use error::{Error, Result};
