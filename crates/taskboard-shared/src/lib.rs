pub mod config;
pub mod dialog;
pub mod draft;
pub mod error;
pub mod filter;
pub mod mutation;
pub mod registry;
pub mod render;
pub mod theme;
pub mod toast;

use std::fmt;

use serde::{
  Deserialize,
  Deserializer,
  Serialize
};

pub use crate::error::ApiError;

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub enum Priority {
  Low,
  #[default]
  Medium,
  High
}

impl Priority {
  pub const ALL: [Priority; 3] = [
    Priority::Low,
    Priority::Medium,
    Priority::High
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      | Self::Low => "Low",
      | Self::Medium => "Medium",
      | Self::High => "High"
    }
  }

  /// Case-insensitive; anything unknown
  /// is `None`.
  pub fn parse(
    raw: &str
  ) -> Option<Self> {
    match raw
      .trim()
      .to_ascii_lowercase()
      .as_str()
    {
      | "low" => Some(Self::Low),
      | "medium" => Some(Self::Medium),
      | "high" => Some(Self::High),
      | _ => None
    }
  }
}

fn lenient_priority<'de, D>(
  deserializer: D
) -> Result<Option<Priority>, D::Error>
where
  D: Deserializer<'de>
{
  let raw =
    Option::<String>::deserialize(
      deserializer
    )?;
  Ok(
    raw
      .as_deref()
      .and_then(Priority::parse)
  )
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct TaskDto {
  pub id:          TaskId,
  #[serde(default)]
  pub title:       String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub due_date:    Option<String>,
  #[serde(default)]
  pub category:    Option<String>,
  #[serde(
    default,
    deserialize_with = "lenient_priority"
  )]
  pub priority:    Option<Priority>,
  #[serde(default)]
  pub completed:   bool,
  #[serde(default)]
  pub created_at:  Option<String>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct TaskCreate {
  pub title:       String,
  pub description: String,
  pub due_date:    Option<String>,
  pub category:    Option<String>,
  pub priority:    Option<Priority>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  Default,
  PartialEq,
  Eq,
)]
pub struct TaskPatch {
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub title:       Option<String>,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub description: Option<String>,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub completed:   Option<bool>
}

impl TaskPatch {
  pub fn complete() -> Self {
    Self {
      completed: Some(true),
      ..Self::default()
    }
  }

  pub fn reopen() -> Self {
    Self {
      completed: Some(false),
      ..Self::default()
    }
  }

  pub fn edit(
    title: String,
    description: Option<String>
  ) -> Self {
    Self {
      title: Some(title),
      description,
      completed: None
    }
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct DeleteAck {
  #[serde(default)]
  pub message: String
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Default,
)]
pub struct Stats {
  #[serde(default)]
  pub total:     u64,
  #[serde(default)]
  pub completed: u64,
  #[serde(default)]
  pub pending:   u64,
  #[serde(default)]
  pub percent:   f64
}

impl Stats {
  pub fn rounded_percent(&self) -> u8 {
    if !self.percent.is_finite() {
      return 0;
    }
    // `f64::round` rounds half away
    // from zero.
    self.percent.round().clamp(0.0, 100.0)
      as u8
  }
}
