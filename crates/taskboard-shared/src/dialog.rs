use crate::draft::DraftError;
use crate::mutation::Mutation;
use crate::render::TaskCard;
use crate::{
  TaskId,
  TaskPatch
};

pub const DELETE_PROMPT: &str =
  "Are you sure you want to delete this \
   task?";

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum EditStep {
  Title,
  Description
}

impl EditStep {
  pub fn prompt(self) -> &'static str {
    match self {
      | Self::Title => "Edit title:",
      | Self::Description => {
        "Edit description:"
      }
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum EditOutcome {
  /// Still collecting input.
  Pending(EditFlow),
  Submit {
    id:    TaskId,
    patch: TaskPatch
  },
  Cancelled
}

/// Two-step title/description edit,
/// prefilled from the card on screen.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct EditFlow {
  pub id:          TaskId,
  pub step:        EditStep,
  pub title:       String,
  pub description: String,
  /// Why the last confirm was refused.
  /// Cleared on the next keystroke.
  pub error:       Option<DraftError>
}

impl EditFlow {
  pub fn from_card(
    card: &TaskCard
  ) -> Self {
    Self {
      id:          card.id,
      step:        EditStep::Title,
      title:       card.title.clone(),
      description: card
        .description
        .clone()
        .unwrap_or_default(),
      error:       None
    }
  }

  /// Text currently being edited.
  pub fn value(&self) -> &str {
    match self.step {
      | EditStep::Title => &self.title,
      | EditStep::Description => {
        &self.description
      }
    }
  }

  pub fn set_value(
    &mut self,
    value: String
  ) {
    self.error = None;
    match self.step {
      | EditStep::Title => {
        self.title = value;
      }
      | EditStep::Description => {
        self.description = value;
      }
    }
  }

  /// Confirms the current step. A blank
  /// title keeps the flow on the title
  /// step with `error` set.
  pub fn advance(self) -> EditOutcome {
    match self.step {
      | EditStep::Title => {
        let title = self.title.trim();
        if title.is_empty() {
          return EditOutcome::Pending(Self {
            error: Some(
              DraftError::MissingTitle
            ),
            ..self
          });
        }
        EditOutcome::Pending(Self {
          step: EditStep::Description,
          title: title.to_string(),
          error: None,
          ..self
        })
      }
      | EditStep::Description => {
        EditOutcome::Submit {
          id:    self.id,
          patch: TaskPatch::edit(
            self.title,
            Some(self.description)
          )
        }
      }
    }
  }

  /// Cancelling the title aborts the whole
  /// edit. Cancelling the description
  /// still saves the title and leaves the
  /// description as it was.
  pub fn cancel(self) -> EditOutcome {
    match self.step {
      | EditStep::Title => {
        EditOutcome::Cancelled
      }
      | EditStep::Description => {
        EditOutcome::Submit {
          id:    self.id,
          patch: TaskPatch::edit(
            self.title, None
          )
        }
      }
    }
  }
}

/// The modal currently open, if any.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum Dialog {
  ConfirmDelete { id: TaskId },
  Edit(EditFlow)
}

impl Dialog {
  /// The request to send once the delete
  /// confirmation is answered. Declining
  /// sends nothing.
  pub fn resolve_delete(
    &self,
    confirmed: bool
  ) -> Option<Mutation> {
    match self {
      | Self::ConfirmDelete { id }
        if confirmed =>
      {
        Some(Mutation::Delete(*id))
      }
      | _ => None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::TaskDto;

  fn card() -> TaskCard {
    TaskCard::from_task(&TaskDto {
      id:          TaskId(5),
      title:       "Old title".to_string(),
      description: Some(
        "Old description".to_string()
      ),
      due_date:    None,
      category:    None,
      priority:    None,
      completed:   false,
      created_at:  None
    })
  }

  #[test]
  fn prefills_from_rendered_card() {
    let flow = EditFlow::from_card(&card());
    assert_eq!(flow.step, EditStep::Title);
    assert_eq!(flow.value(), "Old title");
  }

  #[test]
  fn cancelling_title_skips_description_step(
  ) {
    let flow = EditFlow::from_card(&card());
    assert_eq!(
      flow.cancel(),
      EditOutcome::Cancelled
    );
  }

  #[test]
  fn confirming_both_steps_submits_patch() {
    let mut flow =
      EditFlow::from_card(&card());
    flow.set_value("New title".to_string());

    let EditOutcome::Pending(mut flow) =
      flow.advance()
    else {
      panic!("expected description step");
    };
    assert_eq!(
      flow.step,
      EditStep::Description
    );
    assert_eq!(
      flow.value(),
      "Old description"
    );
    flow.set_value("New body".to_string());

    assert_eq!(
      flow.advance(),
      EditOutcome::Submit {
        id:    TaskId(5),
        patch: TaskPatch {
          title:       Some(
            "New title".to_string()
          ),
          description: Some(
            "New body".to_string()
          ),
          completed:   None
        }
      }
    );
  }

  #[test]
  fn cancelling_description_keeps_new_title(
  ) {
    let flow = EditFlow::from_card(&card());
    let EditOutcome::Pending(flow) =
      flow.advance()
    else {
      panic!("expected description step");
    };

    assert_eq!(
      flow.cancel(),
      EditOutcome::Submit {
        id:    TaskId(5),
        patch: TaskPatch::edit(
          "Old title".to_string(),
          None
        )
      }
    );
  }

  #[test]
  fn absent_description_prefills_empty() {
    let mut source = card();
    source.description = None;
    let flow = EditFlow::from_card(&source);
    assert_eq!(flow.description, "");
  }

  #[test]
  fn blank_title_stays_on_title_step() {
    let mut flow =
      EditFlow::from_card(&card());
    flow.set_value("   ".to_string());

    let EditOutcome::Pending(mut flow) =
      flow.advance()
    else {
      panic!("blank title must not submit");
    };
    assert_eq!(flow.step, EditStep::Title);
    assert_eq!(
      flow.error,
      Some(DraftError::MissingTitle)
    );

    flow.set_value("  Fixed  ".to_string());
    assert_eq!(flow.error, None);
    let EditOutcome::Pending(flow) =
      flow.advance()
    else {
      panic!("expected description step");
    };
    assert_eq!(
      flow.step,
      EditStep::Description
    );
    assert_eq!(
      flow.advance(),
      EditOutcome::Submit {
        id:    TaskId(5),
        patch: TaskPatch::edit(
          "Fixed".to_string(),
          Some("Old description".to_string())
        )
      }
    );
  }

  #[test]
  fn confirmed_delete_sends_request() {
    let dialog =
      Dialog::ConfirmDelete { id: TaskId(5) };
    assert_eq!(
      dialog.resolve_delete(true),
      Some(Mutation::Delete(TaskId(5)))
    );
  }

  #[test]
  fn declined_delete_sends_nothing() {
    let dialog =
      Dialog::ConfirmDelete { id: TaskId(5) };
    assert_eq!(
      dialog.resolve_delete(false),
      None
    );

    let edit =
      Dialog::Edit(EditFlow::from_card(&card()));
    assert_eq!(edit.resolve_delete(true), None);
  }
}
