use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{dataset} dataset is empty")]
    EmptyDataset { dataset: &'static str },

    #[error("{dataset} dataset is missing required column '{column}'")]
    MissingColumn {
        dataset: &'static str,
        column: &'static str,
    },
}
