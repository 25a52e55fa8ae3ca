//! Configuration error types.

use std::path::PathBuf;

/// Errors raised while loading, saving, or reloading `config.ron`.
///
/// File errors carry the path so a failed startup names the file to fix.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Also covers creating the config directory.
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid RON for [`crate::Config`]; `source` holds the position.
    #[error("{} is not a valid config: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("cannot serialize config: {0}")]
    Serialize(#[source] ron::Error),
}

impl ConfigError {
    /// The file the error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } | Self::Parse { path, .. } => {
                Some(path)
            }
            Self::Serialize(_) => None,
        }
    }
}
