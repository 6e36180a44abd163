use thiserror::Error;

/// Everything that can go wrong talking to
/// the task API. Callers log it and show
/// `user_message`; nothing retries.
#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
pub enum ApiError {
  #[error("network error: {0}")]
  Network(String),
  #[error(
    "server responded {status}: {body}"
  )]
  Status { status: u16, body: String },
  #[error("decode error: {0}")]
  Decode(String),
  #[error("encode error: {0}")]
  Encode(String)
}

impl ApiError {
  pub fn user_message(&self) -> String {
    match self {
      | Self::Network(_) => {
        "Server unreachable. Please try \
         again."
          .to_string()
      }
      | Self::Status {
        status: 404,
        ..
      } => "Task not found.".to_string(),
      | Self::Status {
        status: 401 | 403,
        ..
      } => {
        "You are not allowed to do that."
          .to_string()
      }
      | Self::Status { status, .. } => {
        format!(
          "Request failed ({status})."
        )
      }
      | Self::Decode(_)
      | Self::Encode(_) => {
        "Unexpected response from server."
          .to_string()
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn status_errors_name_the_code() {
    let error = ApiError::Status {
      status: 500,
      body:   "boom".to_string()
    };
    assert_eq!(
      error.to_string(),
      "server responded 500: boom"
    );
    assert_eq!(
      error.user_message(),
      "Request failed (500)."
    );
  }

  #[test]
  fn missing_task_reads_as_not_found() {
    let error = ApiError::Status {
      status: 404,
      body:   String::new()
    };
    assert_eq!(
      error.user_message(),
      "Task not found."
    );
  }
}
