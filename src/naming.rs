use std::collections::BTreeMap;
use std::fmt;

/// Environment variable Flink reads to find the job manager's RPC endpoint.
pub const JOB_MANAGER_RPC_ADDRESS_ENV: &str = "JOB_MANAGER_RPC_ADDRESS";

pub const APP_LABEL_VALUE: &str = "flink";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    JobManager,
    TaskManager,
}

impl Component {
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::JobManager => "jobmanager",
            Component::TaskManager => "taskmanager",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name shared by every child resource of `component`. The task managers
/// reach the job manager through this name alone.
pub fn resource_name(cluster: &str, component: Component) -> String {
    format!("{cluster}-{component}")
}

/// Labels put on, and selected by, every resource of `component`.
pub fn labels_for(cluster: &str, component: Component) -> BTreeMap<String, String> {
    BTreeMap::from([
        ("cluster".to_owned(), cluster.to_owned()),
        ("app".to_owned(), APP_LABEL_VALUE.to_owned()),
        ("component".to_owned(), component.as_str().to_owned()),
    ])
}
