use thiserror::Error;

use crate::{
  Priority,
  TaskCreate
};

#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
pub enum DraftError {
  #[error("a task needs a title")]
  MissingTitle
}

/// Raw values of the create form.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct TaskDraft {
  pub title:       String,
  pub description: String,
  pub due_date:    String,
  pub category:    String,
  pub priority:    String
}

impl Default for TaskDraft {
  fn default() -> Self {
    Self {
      title:       String::new(),
      description: String::new(),
      due_date:    String::new(),
      category:    crate::render::DEFAULT_CATEGORY
        .to_string(),
      priority:    Priority::default()
        .as_str()
        .to_string()
    }
  }
}

impl TaskDraft {
  pub fn validate(
    &self
  ) -> Result<TaskCreate, DraftError> {
    let title = self.title.trim();
    if title.is_empty() {
      return Err(DraftError::MissingTitle);
    }

    Ok(TaskCreate {
      title:       title.to_string(),
      description: self
        .description
        .trim()
        .to_string(),
      due_date:    blank_to_none(
        &self.due_date
      ),
      category:    blank_to_none(
        &self.category
      ),
      priority:    Priority::parse(
        &self.priority
      )
    })
  }
}

fn blank_to_none(
  value: &str
) -> Option<String> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    None
  } else {
    Some(trimmed.to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn buy_milk_draft_becomes_high_priority_payload(
  ) {
    let draft = TaskDraft {
      title:       "Buy milk".to_string(),
      category:    "Personal".to_string(),
      priority:    "High".to_string(),
      ..TaskDraft::default()
    };

    let payload =
      draft.validate().expect("valid draft");
    assert_eq!(payload.title, "Buy milk");
    assert_eq!(
      payload.priority,
      Some(Priority::High)
    );
    assert_eq!(
      payload.category.as_deref(),
      Some("Personal")
    );
    assert_eq!(payload.due_date, None);
  }

  #[test]
  fn blank_title_is_rejected() {
    let draft = TaskDraft {
      title: "   ".to_string(),
      ..TaskDraft::default()
    };
    assert_eq!(
      draft.validate(),
      Err(DraftError::MissingTitle)
    );
  }

  #[test]
  fn payload_serializes_empty_due_as_null(
  ) {
    let draft = TaskDraft {
      title: "x".to_string(),
      ..TaskDraft::default()
    };
    let body = serde_json::to_value(
      draft.validate().expect("valid draft")
    )
    .expect("encode");
    assert_eq!(
      body["due_date"],
      serde_json::Value::Null
    );
    assert_eq!(body["priority"], "Medium");
  }

  #[test]
  fn cleared_form_defaults_to_personal_medium(
  ) {
    let draft = TaskDraft::default();
    assert!(draft.title.is_empty());
    assert!(draft.due_date.is_empty());
    assert_eq!(draft.category, "Personal");
    assert_eq!(draft.priority, "Medium");
  }
}
