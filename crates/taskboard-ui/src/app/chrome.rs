use std::rc::Rc;

use taskboard_shared::config::ClientConfig;
use taskboard_shared::toast::{
  ToastId,
  ToastKind,
  ToastQueue
};
use taskboard_shared::{
  ApiError,
  Stats
};
use yew::{
  Reducible,
  UseReducerHandle,
  UseStateHandle,
  hook,
  use_context
};

use crate::api::ApiClient;

#[derive(
  Clone, Default, PartialEq,
)]
pub struct ToastState {
  pub queue: ToastQueue
}

pub enum ToastAction {
  Push(String, ToastKind),
  Hide(ToastId),
  Remove(ToastId)
}

impl Reducible for ToastState {
  type Action = ToastAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut next = (*self).clone();
    match action {
      | ToastAction::Push(message, kind) => {
        next.queue.push(message, kind);
      }
      | ToastAction::Hide(id) => {
        next.queue.begin_dismiss(id);
      }
      | ToastAction::Remove(id) => {
        next.queue.remove(id);
      }
    }
    Rc::new(next)
  }
}

/// Page-independent services shared via
/// context: the API client, config, toasts
/// and the latest stats for the progress
/// bars.
#[derive(Clone, PartialEq)]
pub struct Chrome {
  pub api:    ApiClient,
  pub config: Rc<ClientConfig>,
  pub toasts: UseReducerHandle<ToastState>,
  pub stats:  UseStateHandle<Option<Stats>>
}

impl Chrome {
  pub fn notify(
    &self,
    message: impl Into<String>,
    kind: ToastKind
  ) {
    self.toasts.dispatch(
      ToastAction::Push(
        message.into(),
        kind
      )
    );
  }

  /// Logs a failed request and tells the
  /// user. Nothing is retried.
  pub fn report(
    &self,
    action: &str,
    error: &ApiError
  ) {
    tracing::error!(
      action,
      %error,
      "request failed"
    );
    self.notify(
      error.user_message(),
      ToastKind::Error
    );
  }

  pub fn refresh_progress(&self) {
    let chrome = self.clone();
    wasm_bindgen_futures::spawn_local(
      async move {
        match chrome.api.fetch_stats().await
        {
          | Ok(stats) => {
            tracing::debug!(
              total = stats.total,
              percent = stats.rounded_percent(),
              "refreshed progress"
            );
            chrome.stats.set(Some(stats));
          }
          | Err(error) => {
            chrome.report("stats", &error)
          }
        }
      }
    );
  }
}

#[hook]
pub fn use_chrome() -> Chrome {
  use_context::<Chrome>()
    .expect("Chrome context is provided by App")
}
