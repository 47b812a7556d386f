use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use kube::CustomResourceExt;
use log::info;
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

use flink_session_operator::crd::FlinkSessionCluster;
use flink_session_operator::{desired_state, ClusterSpec};

/// Print the resources the operator would create for a FlinkSessionCluster.
#[derive(Clone, Debug, Parser)]
struct Opts {
    /// Output the FlinkSessionCluster CustomResourceDefinition then exit.
    #[clap(long)]
    crd: bool,

    /// FlinkSessionCluster manifest (JSON).
    #[clap(required_unless_present = "crd")]
    manifest: Option<PathBuf>,

    /// Namespace used when the manifest does not set one.
    #[clap(short, long, default_value = "default")]
    namespace: String,

    /// Uid used when the manifest has never been stored.
    #[clap(long, default_value = "00000000-0000-0000-0000-000000000000")]
    uid: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let opts: Opts = Opts::parse();

    if opts.crd {
        println!("{}", serde_json::to_string_pretty(&FlinkSessionCluster::crd())?);
        return Ok(());
    }

    let path = opts.manifest.context("no manifest given")?;
    let raw = fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    let mut cluster: FlinkSessionCluster =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;

    cluster.metadata.namespace.get_or_insert(opts.namespace);
    cluster.metadata.uid.get_or_insert(opts.uid);

    let spec = ClusterSpec::try_from(&cluster)?;
    let state = desired_state(&spec);

    let mut items: Vec<Value> = Vec::new();
    for deployment in state.deployments() {
        items.push(serde_json::to_value(deployment)?);
    }
    for service in state.services() {
        items.push(serde_json::to_value(service)?);
    }
    info!("rendered {} resources for {}", items.len(), spec.name);

    let list = json!({
        "apiVersion": "v1",
        "kind": "List",
        "items": items,
    });
    println!("{}", serde_json::to_string_pretty(&list)?);
    Ok(())
}
