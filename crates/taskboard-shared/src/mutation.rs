use crate::filter::ListView;
use crate::registry::ExitMotion;
use crate::{
  TaskId,
  TaskPatch
};

/// A write the user asked for.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum Mutation {
  Create,
  Complete(TaskId),
  Reopen(TaskId),
  Edit {
    id:    TaskId,
    patch: TaskPatch
  },
  Delete(TaskId)
}

/// What the screen does once a mutation
/// succeeds. The server stays the source
/// of truth: lists are re-fetched rather
/// than patched.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct Followups {
  pub toast:            &'static str,
  pub exit:             Option<ExitMotion>,
  pub reload:           Vec<ListView>,
  pub refresh_progress: bool
}

impl Mutation {
  pub fn task_id(&self) -> Option<TaskId> {
    match self {
      | Self::Create => None,
      | Self::Complete(id)
      | Self::Reopen(id)
      | Self::Delete(id) => Some(*id),
      | Self::Edit { id, .. } => Some(*id)
    }
  }

  pub fn patch(&self) -> Option<TaskPatch> {
    match self {
      | Self::Complete(_) => {
        Some(TaskPatch::complete())
      }
      | Self::Reopen(_) => {
        Some(TaskPatch::reopen())
      }
      | Self::Edit { patch, .. } => {
        Some(patch.clone())
      }
      | Self::Create | Self::Delete(_) => {
        None
      }
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      | Self::Create => "create",
      | Self::Complete(_) => "complete",
      | Self::Reopen(_) => "reopen",
      | Self::Edit { .. } => "edit",
      | Self::Delete(_) => "delete"
    }
  }

  pub fn followups(&self) -> Followups {
    match self {
      | Self::Create => {
        Followups {
          toast:            "Task added",
          exit:             None,
          reload:           vec![],
          refresh_progress: true
        }
      }
      // The pending reload refreshes
      // progress on its own.
      | Self::Complete(_) => {
        Followups {
          toast:            "Task completed",
          exit:             Some(
            ExitMotion::Lift
          ),
          reload:           vec![
            ListView::Pending,
          ],
          refresh_progress: false
        }
      }
      | Self::Reopen(_) => {
        Followups {
          toast:            "Task reopened",
          exit:             Some(
            ExitMotion::Lift
          ),
          reload:           vec![
            ListView::Completed,
            ListView::Pending,
          ],
          refresh_progress: true
        }
      }
      | Self::Edit { .. } => {
        Followups {
          toast:            "Task updated",
          exit:             None,
          reload:           vec![
            ListView::Pending,
          ],
          refresh_progress: false
        }
      }
      | Self::Delete(_) => {
        Followups {
          toast:            "Task deleted",
          exit:             Some(
            ExitMotion::Slide
          ),
          reload:           vec![],
          refresh_progress: true
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn complete_lifts_card_and_reloads_pending(
  ) {
    let followups =
      Mutation::Complete(TaskId(1))
        .followups();
    assert_eq!(
      followups.toast,
      "Task completed"
    );
    assert_eq!(
      followups.exit,
      Some(ExitMotion::Lift)
    );
    assert_eq!(
      followups.reload,
      vec![ListView::Pending]
    );
  }

  #[test]
  fn reopen_reloads_both_views() {
    let followups =
      Mutation::Reopen(TaskId(1))
        .followups();
    assert!(
      followups
        .reload
        .contains(&ListView::Completed)
    );
    assert!(
      followups
        .reload
        .contains(&ListView::Pending)
    );
  }

  #[test]
  fn delete_slides_card_and_refreshes_progress(
  ) {
    let followups =
      Mutation::Delete(TaskId(3))
        .followups();
    assert_eq!(
      followups.exit,
      Some(ExitMotion::Slide)
    );
    assert!(followups.refresh_progress);
    assert!(followups.reload.is_empty());
    assert_eq!(
      Mutation::Delete(TaskId(3)).patch(),
      None
    );
  }

  #[test]
  fn toggles_carry_completion_patch() {
    assert_eq!(
      Mutation::Complete(TaskId(2))
        .patch(),
      Some(TaskPatch::complete())
    );
    assert_eq!(
      Mutation::Reopen(TaskId(2)).patch(),
      Some(TaskPatch::reopen())
    );
  }

  #[test]
  fn create_refreshes_progress_without_reload(
  ) {
    let followups =
      Mutation::Create.followups();
    assert_eq!(followups.toast, "Task added");
    assert!(followups.refresh_progress);
    assert!(followups.reload.is_empty());
    assert_eq!(
      Mutation::Create.task_id(),
      None
    );
  }
}
