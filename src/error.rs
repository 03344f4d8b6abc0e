use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("dataset {dataset:?} has {data} values for {labels} labels")]
    LengthMismatch {
        dataset: String,
        labels: usize,
        data: usize,
    },

    #[error("chart has {existing} datasets but update carries {incoming}")]
    DatasetCountMismatch { existing: usize, incoming: usize },
}

#[derive(Error, Debug)]
pub enum Invest101Error {
    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Invest101Error>;
