/// The one preference the client keeps in
/// local storage.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub enum Theme {
  #[default]
  Light,
  Dark
}

impl Theme {
  /// Anything but `"dark"` reads as light.
  pub fn from_storage(
    stored: Option<&str>
  ) -> Self {
    match stored.map(str::trim) {
      | Some("dark") => Self::Dark,
      | _ => Self::Light
    }
  }

  pub fn from_checked(
    checked: bool
  ) -> Self {
    if checked {
      Self::Dark
    } else {
      Self::Light
    }
  }

  /// Also the `data-bs-theme` value.
  pub fn storage_value(
    self
  ) -> &'static str {
    match self {
      | Self::Light => "light",
      | Self::Dark => "dark"
    }
  }

  pub fn body_class(
    self
  ) -> &'static str {
    match self {
      | Self::Light => "bg-light",
      | Self::Dark => "bg-dark"
    }
  }

  /// Class the body must lose when this
  /// theme is applied.
  pub fn stale_body_class(
    self
  ) -> &'static str {
    self.toggled().body_class()
  }

  pub fn toggled(self) -> Self {
    match self {
      | Self::Light => Self::Dark,
      | Self::Dark => Self::Light
    }
  }

  pub fn is_dark(self) -> bool {
    matches!(self, Self::Dark)
  }
}
