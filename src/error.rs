use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("value vector length mismatch: expected {expected}, got {actual}")]
    DataShapeMismatch { expected: usize, actual: usize },

    #[error("shape references missing data: series={series_index}, data={data_index}")]
    StaleShape {
        series_index: usize,
        data_index: isize,
    },
}
