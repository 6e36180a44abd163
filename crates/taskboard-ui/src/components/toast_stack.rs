use gloo::timers::future::TimeoutFuture;
use taskboard_shared::toast::{
  Toast,
  ToastId
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html,
  use_effect_with
};

use crate::app::{
  ToastAction,
  use_chrome
};

#[function_component(ToastStack)]
pub fn toast_stack() -> Html {
  let chrome = use_chrome();

  html! {
      <div id="toastContainer" class="toast-container position-fixed bottom-0 end-0 p-3">
          {
              for chrome.toasts.queue.toasts().iter().cloned().map(|toast| {
                  let key = toast.id.0;
                  html! { <ToastItem key={key} toast={toast} /> }
              })
          }
      </div>
  }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
  toast: Toast
}

/// Hides itself after the configured delay
/// and leaves the DOM once the fade-out
/// finishes.
#[function_component(ToastItem)]
fn toast_item(
  props: &ToastItemProps
) -> Html {
  let chrome = use_chrome();
  let id = props.toast.id;

  {
    let toasts = chrome.toasts.dispatcher();
    let delay_ms = chrome.config.toast.delay_ms;
    let dismiss_ms =
      chrome.config.toast.dismiss_ms;
    use_effect_with(id, move |id: &ToastId| {
      let id = *id;
      wasm_bindgen_futures::spawn_local(
        async move {
          TimeoutFuture::new(delay_ms).await;
          toasts.dispatch(ToastAction::Hide(id));
          TimeoutFuture::new(dismiss_ms).await;
          toasts
            .dispatch(ToastAction::Remove(id));
        }
      );
      || ()
    });
  }

  let on_close = {
    let toasts = chrome.toasts.dispatcher();
    let dismiss_ms =
      chrome.config.toast.dismiss_ms;
    Callback::from(move |_: MouseEvent| {
      toasts.dispatch(ToastAction::Hide(id));
      let toasts = toasts.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          TimeoutFuture::new(dismiss_ms).await;
          toasts
            .dispatch(ToastAction::Remove(id));
        }
      );
    })
  };

  let visibility = if props.toast.hiding {
    "hiding"
  } else {
    "show"
  };

  html! {
      <div
          class={classes!(
              "toast",
              "align-items-center",
              "border-0",
              props.toast.kind.as_class(),
              visibility
          )}
          role="alert"
          aria-live="assertive"
          aria-atomic="true"
      >
          <div class="d-flex">
              <div class="toast-body">{ &props.toast.message }</div>
              <button
                  type="button"
                  class="btn-close btn-close-white me-2 m-auto"
                  aria-label="Close"
                  onclick={on_close}
              />
          </div>
      </div>
  }
}
