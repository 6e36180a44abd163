use serde::{
  Deserialize,
  Serialize
};

use crate::TaskDto;

/// The two disjoint task collections.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
)]
pub enum ListView {
  Pending,
  Completed
}

impl ListView {
  pub fn endpoint(self) -> &'static str {
    match self {
      | Self::Pending => "/api/tasks",
      | Self::Completed => {
        "/api/completed_tasks"
      }
    }
  }

  pub fn placeholder(
    self
  ) -> &'static str {
    match self {
      | Self::Pending => {
        "No tasks yet. Add your first \
         task above!"
      }
      | Self::Completed => {
        "No completed tasks yet."
      }
    }
  }

  pub fn container_id(
    self
  ) -> &'static str {
    match self {
      | Self::Pending => "tasks",
      | Self::Completed => {
        "completed-tasks"
      }
    }
  }

  /// Only the pending view drives the
  /// progress bar after a load.
  pub fn refreshes_progress(
    self
  ) -> bool {
    matches!(self, Self::Pending)
  }

  pub fn accepts(
    self,
    task: &TaskDto
  ) -> bool {
    task.completed
      == matches!(self, Self::Completed)
  }
}

/// Filter inputs as typed by the user.
/// Blank values are never sent.
#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct TaskFilter {
  pub query:    String,
  pub category: String,
  pub priority: String
}

impl TaskFilter {
  pub fn query_pairs(
    &self
  ) -> Vec<(&'static str, String)> {
    [
      ("q", &self.query),
      ("category", &self.category),
      ("priority", &self.priority)
    ]
    .into_iter()
    .filter_map(|(key, value)| {
      let trimmed = value.trim();
      if trimmed.is_empty() {
        None
      } else {
        Some((key, trimmed.to_string()))
      }
    })
    .collect()
  }

  pub fn is_empty(&self) -> bool {
    self.query_pairs().is_empty()
  }
}

/// Keeps only the tasks that belong in
/// `view`, preserving server order.
pub fn tasks_for_view(
  view: ListView,
  tasks: Vec<TaskDto>
) -> Vec<TaskDto> {
  let before = tasks.len();
  let kept: Vec<TaskDto> = tasks
    .into_iter()
    .filter(|task| view.accepts(task))
    .collect();
  if kept.len() != before {
    tracing::warn!(
      ?view,
      dropped = before - kept.len(),
      "list response contained tasks \
       from the other view"
    );
  }
  kept
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::TaskId;

  fn task(
    id: u64,
    completed: bool
  ) -> TaskDto {
    TaskDto {
      id: TaskId(id),
      title: format!("task {id}"),
      description: None,
      due_date: None,
      category: None,
      priority: None,
      completed,
      created_at: None
    }
  }

  #[test]
  fn only_non_empty_filters_are_sent() {
    let filter = TaskFilter {
      query:    "  milk ".to_string(),
      category: String::new(),
      priority: "High".to_string()
    };
    assert_eq!(
      filter.query_pairs(),
      vec![
        ("q", "milk".to_string()),
        ("priority", "High".to_string())
      ]
    );
  }

  #[test]
  fn default_filter_sends_nothing() {
    let filter = TaskFilter::default();
    assert!(filter.is_empty());
    assert!(
      filter.query_pairs().is_empty()
    );
  }

  #[test]
  fn views_partition_by_completion() {
    let tasks = vec![
      task(1, false),
      task(2, true),
      task(3, false),
    ];

    let pending = tasks_for_view(
      ListView::Pending,
      tasks.clone()
    );
    let completed = tasks_for_view(
      ListView::Completed,
      tasks
    );

    let pending_ids: Vec<u64> = pending
      .iter()
      .map(|task| task.id.0)
      .collect();
    let completed_ids: Vec<u64> =
      completed
        .iter()
        .map(|task| task.id.0)
        .collect();
    assert_eq!(pending_ids, vec![1, 3]);
    assert_eq!(completed_ids, vec![2]);
  }

  #[test]
  fn placeholders_match_each_view() {
    assert_eq!(
      ListView::Pending.placeholder(),
      "No tasks yet. Add your first task above!"
    );
    assert_eq!(
      ListView::Completed.placeholder(),
      "No completed tasks yet."
    );
    assert!(
      ListView::Pending
        .refreshes_progress()
    );
    assert!(
      !ListView::Completed
        .refreshes_progress()
    );
  }
}
