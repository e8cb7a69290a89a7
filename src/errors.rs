use thiserror::Error;

/// Main error type for the cmt application
#[derive(Error, Debug)]
pub enum CmtError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Git error: {0}")]
    Git(#[from] GitError),

    #[error("Gitmoji error: {0}")]
    Gitmoji(#[from] GitmojiError),

    #[error("Update error: {0}")]
    Update(#[from] UpdateError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Operation cancelled by user")]
    UserCancelled,

    #[error("Prompt error: {0}")]
    Prompt(inquire::InquireError),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error while accessing config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration format - please check your .cmtrc.json syntax: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No configuration file found - run 'cmt init' to create one")]
    NotConfigured,

    #[error("Unsupported convention type: {value}")]
    UnsupportedConvention { value: String },
}

/// Git-related errors
#[derive(Error, Debug)]
pub enum GitError {
    #[error("IO error during git operation: {0}")]
    Io(#[from] std::io::Error),

    #[error("Git command failed: {command}\nOutput: {output}")]
    CommandFailed { command: String, output: String },
}

/// Errors raised while fetching or caching the gitmoji list
#[derive(Error, Debug)]
pub enum GitmojiError {
    #[error("IO error while accessing gitmoji cache: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid gitmoji list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to fetch gitmoji list: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Could not determine home directory - please set HOME environment variable")]
    HomeDirNotFound,
}

/// Errors raised by the self-update machinery
#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("IO error while running install command: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to reach release endpoint: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid release response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid version tag: {0}")]
    InvalidVersion(#[from] semver::Error),

    #[error("Release endpoint returned an error: {message}")]
    Api { message: String },

    #[error("Install command failed:\n{output}")]
    InstallFailed { output: String },
}

impl From<inquire::InquireError> for CmtError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::OperationCanceled
            | inquire::InquireError::OperationInterrupted => CmtError::UserCancelled,
            inquire::InquireError::IO(err) => CmtError::Io(err),
            other => CmtError::Prompt(other),
        }
    }
}

/// Type alias for Result using `CmtError`
pub type Result<T> = std::result::Result<T, CmtError>;
