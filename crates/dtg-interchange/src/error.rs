use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterchangeError {
    #[error("failed to serialize interchange document: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}
