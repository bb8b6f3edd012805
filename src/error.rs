use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
  /// The response was dropped without ever being sent.
  #[error("response was dropped before it was sent")]
  Canceled,

  #[error("invalid status code: {0}")]
  InvalidStatus(u16),

  #[error("invalid header `{name}`")]
  InvalidHeader { name: String },

  #[error(transparent)]
  Serialize(#[from] serde_json::Error),

  #[error(transparent)]
  Http(#[from] http::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
