#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("FlinkSessionCluster is missing metadata.{0}")]
    MissingMetadata(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
