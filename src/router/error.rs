/// A registration mistake. Dispatch itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("invalid route pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("unknown http method: {0:?}")]
    UnknownMethod(String),
}
