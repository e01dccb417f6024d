use std::path::PathBuf;

use crate::vocabulary::Category;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("category `{0}` is required but has no entries")]
    EmptyCategory(Category),
    #[error("category `{0}` is required but missing from the vocabulary")]
    MissingCategory(Category),
    #[error("failed to read vocabulary file {path}")]
    ReadVocabulary {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("vocabulary file {path} is not a valid category mapping")]
    ParseVocabulary {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to create output directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether the error stems from bad input rather than the filesystem.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::EmptyCategory(_)
                | Self::MissingCategory(_)
                | Self::ReadVocabulary { .. }
                | Self::ParseVocabulary { .. }
        )
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
