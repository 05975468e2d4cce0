use thiserror::Error;

use crate::application::repos::RepoError;

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("seed archive `{path}` is malformed: {message}")]
    SeedArchive { path: String, message: String },
    #[error("failed to seed post `{slug}`")]
    SeedPost {
        slug: String,
        #[source]
        source: RepoError,
    },
    #[error("telemetry initialization failed: {0}")]
    Telemetry(String),
}

impl InfraError {
    pub fn seed_archive(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SeedArchive {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn telemetry(message: impl Into<String>) -> Self {
        Self::Telemetry(message.into())
    }
}
