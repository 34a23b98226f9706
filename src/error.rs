use thiserror::Error;

/// Failures while reading a cause list document.
#[derive(Error, Debug)]
pub enum CauseListError {
    /// The document could not be opened or its structure is unreadable.
    #[error("Failed to open PDF: {0}")]
    Open(#[source] lopdf::Error),

    #[error("Failed to extract text from page {page}: {source}")]
    PageText {
        page: u32,
        #[source]
        source: lopdf::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid release_date {value:?}: {source}")]
    ReleaseDate {
        value: String,
        #[source]
        source: time::error::Parse,
    },
}
