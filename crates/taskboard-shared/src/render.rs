use chrono::{
  DateTime,
  Local,
  NaiveDateTime
};

use crate::{
  Priority,
  TaskDto,
  TaskId
};

pub const NO_DESCRIPTION: &str =
  "No description";
pub const DEFAULT_CATEGORY: &str =
  "Personal";
pub const NO_DUE_DATE: &str =
  "No due date";

/// Escapes the five markup-significant
/// characters. `&` goes first so the
/// entities produced here are never
/// re-escaped within the same call.
pub fn escape_html(raw: &str) -> String {
  let mut out =
    String::with_capacity(raw.len());
  for ch in raw.chars() {
    match ch {
      | '&' => out.push_str("&amp;"),
      | '<' => out.push_str("&lt;"),
      | '>' => out.push_str("&gt;"),
      | '"' => out.push_str("&quot;"),
      | '\'' => out.push_str("&#039;"),
      | other => out.push(other)
    }
  }
  out
}

/// Element key a card is registered and
/// rendered under.
pub fn element_key(id: TaskId) -> String {
  format!("task-{id}")
}

pub fn priority_badge_class(
  priority: Priority
) -> &'static str {
  match priority {
    | Priority::High => "bg-danger",
    | Priority::Low => "bg-secondary",
    | Priority::Medium => "bg-primary"
  }
}

/// Human readable due date. Unparseable
/// input is shown as sent.
pub fn format_due(
  raw: Option<&str>
) -> String {
  let Some(raw) = raw
    .map(str::trim)
    .filter(|value| !value.is_empty())
  else {
    return NO_DUE_DATE.to_string();
  };

  parse_due(raw)
    .map(|due| {
      due
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
    })
    .unwrap_or_else(|| raw.to_string())
}

fn parse_due(
  raw: &str
) -> Option<NaiveDateTime> {
  // Stamps with an offset are shown in the
  // viewer's zone; naive ones as sent.
  if let Ok(stamp) =
    DateTime::parse_from_rfc3339(raw)
  {
    return Some(
      stamp
        .with_timezone(&Local)
        .naive_local()
    );
  }

  [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S"
  ]
  .iter()
  .find_map(|format| {
    NaiveDateTime::parse_from_str(
      raw, format
    )
    .ok()
  })
}

fn non_blank(
  value: Option<&str>
) -> Option<&str> {
  value.filter(|text| {
    !text.trim().is_empty()
  })
}

/// Display snapshot of one task. Fields
/// hold plain text; `body_markup` is the
/// only place they become markup.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct TaskCard {
  pub id:          TaskId,
  pub key:         String,
  pub title:       String,
  pub description: Option<String>,
  pub category:    String,
  pub priority:    Priority,
  pub due_label:   String,
  pub completed:   bool
}

impl TaskCard {
  pub fn from_task(
    task: &TaskDto
  ) -> Self {
    Self {
      id:          task.id,
      key:         element_key(task.id),
      title:       task.title.clone(),
      description: non_blank(
        task.description.as_deref()
      )
      .map(ToString::to_string),
      category:    non_blank(
        task.category.as_deref()
      )
      .unwrap_or(DEFAULT_CATEGORY)
      .to_string(),
      priority:    task
        .priority
        .unwrap_or_default(),
      due_label:   format_due(
        task.due_date.as_deref()
      ),
      completed:   task.completed
    }
  }

  pub fn description_label(
    &self
  ) -> &str {
    self
      .description
      .as_deref()
      .unwrap_or(NO_DESCRIPTION)
  }

  pub fn badge_class(
    &self
  ) -> &'static str {
    if self.completed {
      "text-bg-success"
    } else {
      priority_badge_class(
        self.priority
      )
    }
  }

  pub fn badge_label(&self) -> &str {
    if self.completed {
      "Completed"
    } else {
      self.priority.as_str()
    }
  }

  /// Single root element, so it can be
  /// injected as one raw node.
  pub fn body_markup(&self) -> String {
    let clock = if self.completed {
      ""
    } else {
      r#"<i class="bi bi-clock"></i> "#
    };

    format!(
      concat!(
        r#"<div class="task-card-content">"#,
        r#"<div class="d-flex justify-content-between align-items-start mb-2">"#,
        r#"<h5 class="card-title mb-0">{title}</h5>"#,
        r#"<span class="badge {badge_class}">{badge}</span>"#,
        "</div>",
        r#"<p class="card-text text-muted small mb-2">{description}</p>"#,
        r#"<div class="d-flex flex-wrap gap-2 mb-3">"#,
        r#"<span class="badge text-bg-info">{category}</span>"#,
        r#"<span class="badge text-bg-light">{clock}{due}</span>"#,
        "</div>",
        "</div>"
      ),
      title = escape_html(&self.title),
      badge_class = self.badge_class(),
      badge =
        escape_html(self.badge_label()),
      description = escape_html(
        self.description_label()
      ),
      category =
        escape_html(&self.category),
      clock = clock,
      due = escape_html(&self.due_label)
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn task() -> TaskDto {
    TaskDto {
      id:          TaskId(42),
      title:       "Buy milk".to_string(),
      description: None,
      due_date:    None,
      category:    None,
      priority:    None,
      completed:   false,
      created_at:  None
    }
  }

  #[test]
  fn escapes_every_markup_character() {
    assert_eq!(
      escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
      "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#039;Jerry&#039;&lt;/a&gt;"
    );
    assert_eq!(escape_html(""), "");
  }

  #[test]
  fn script_titles_render_as_text() {
    let mut task = task();
    task.title =
      "<script>alert(1)</script>"
        .to_string();
    task.category =
      Some("<b>work</b>".to_string());

    let markup =
      TaskCard::from_task(&task)
        .body_markup();
    assert!(!markup.contains("<script"));
    assert!(!markup.contains("<b>"));
    assert!(markup.contains(
      "&lt;script&gt;alert(1)&lt;/script&gt;"
    ));
  }

  #[test]
  fn absent_fields_fall_back_to_defaults(
  ) {
    let card =
      TaskCard::from_task(&task());
    assert_eq!(
      card.description_label(),
      "No description"
    );
    assert_eq!(card.category, "Personal");
    assert_eq!(
      card.badge_label(),
      "Medium"
    );
    assert_eq!(
      card.due_label,
      "No due date"
    );
    assert_eq!(card.key, "task-42");
  }

  #[test]
  fn blank_description_counts_as_absent()
  {
    let mut task = task();
    task.description =
      Some("   ".to_string());
    let card =
      TaskCard::from_task(&task);
    assert_eq!(card.description, None);
  }

  #[test]
  fn high_priority_gets_danger_badge() {
    let mut task = task();
    task.priority = Some(Priority::High);
    let card =
      TaskCard::from_task(&task);
    assert_eq!(
      card.badge_class(),
      "bg-danger"
    );
    assert!(card.body_markup().contains(
      r#"<span class="badge bg-danger">High</span>"#
    ));

    task.priority = Some(Priority::Low);
    assert_eq!(
      TaskCard::from_task(&task)
        .badge_class(),
      "bg-secondary"
    );
  }

  #[test]
  fn completed_cards_show_completed_badge(
  ) {
    let mut task = task();
    task.completed = true;
    task.priority = Some(Priority::High);
    let card =
      TaskCard::from_task(&task);
    assert_eq!(
      card.badge_label(),
      "Completed"
    );
    assert_eq!(
      card.badge_class(),
      "text-bg-success"
    );
    assert!(
      !card.body_markup().contains("bi-clock")
    );
  }

  #[test]
  fn due_dates_are_formatted_for_display()
  {
    assert_eq!(
      format_due(Some(
        "2025-03-01T14:30:00"
      )),
      "3/1/2025, 2:30:00 PM"
    );
    assert_eq!(
      format_due(Some("2025-03-01T09:05")),
      "3/1/2025, 9:05:00 AM"
    );
    assert_eq!(
      format_due(Some("2025-03-01T14:30:00Z")),
      DateTime::parse_from_rfc3339(
        "2025-03-01T14:30:00Z"
      )
      .expect("valid stamp")
      .with_timezone(&Local)
      .format("%-m/%-d/%Y, %-I:%M:%S %p")
      .to_string()
    );
    assert_eq!(
      format_due(Some("next week")),
      "next week"
    );
    assert_eq!(
      format_due(Some("")),
      "No due date"
    );
  }
}
