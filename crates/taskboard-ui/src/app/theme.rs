use taskboard_shared::theme::Theme;

const THEME_ATTRIBUTE: &str =
  "data-bs-theme";

fn local_storage() -> Option<web_sys::Storage>
{
  web_sys::window().and_then(|window| {
    window
      .local_storage()
      .ok()
      .flatten()
  })
}

pub fn load_theme(
  storage_key: &str
) -> Theme {
  let stored = local_storage()
    .and_then(|storage| {
      storage
        .get_item(storage_key)
        .ok()
        .flatten()
    });

  Theme::from_storage(stored.as_deref())
}

pub fn save_theme(
  storage_key: &str,
  theme: Theme
) {
  let Some(storage) = local_storage()
  else {
    tracing::warn!(
      "local storage unavailable; theme \
       not persisted"
    );
    return;
  };

  if let Err(error) = storage.set_item(
    storage_key,
    theme.storage_value()
  ) {
    tracing::error!(
      ?error,
      "failed to persist theme"
    );
  }
}

/// Mirrors `theme` onto `<body>`: the
/// bootstrap theme attribute plus the
/// matching background class.
pub fn apply_theme(theme: Theme) {
  let Some(body) = web_sys::window()
    .and_then(|window| window.document())
    .and_then(|document| document.body())
  else {
    tracing::warn!(
      "document body missing; theme not \
       applied"
    );
    return;
  };

  if let Err(error) = body.set_attribute(
    THEME_ATTRIBUTE,
    theme.storage_value()
  ) {
    tracing::error!(
      ?error,
      "failed to set theme attribute"
    );
  }

  let classes = body.class_list();
  let swapped = classes
    .remove_1(theme.stale_body_class())
    .and_then(|()| {
      classes.add_1(theme.body_class())
    });
  if let Err(error) = swapped {
    tracing::error!(
      ?error,
      "failed to swap body background \
       class"
    );
  }
}

/// Runs once before the app mounts.
pub fn init_theme(
  storage_key: &str
) -> Theme {
  let theme = load_theme(storage_key);
  apply_theme(theme);
  tracing::info!(
    theme = theme.storage_value(),
    "applied stored theme"
  );
  theme
}
