mod chrome;
mod completed_page;
mod controller;
mod list_state;
mod profile_page;
mod route;
mod tasks_page;
pub mod theme;

use std::rc::Rc;

use gloo::console::log;
use taskboard_shared::Stats;
use taskboard_shared::config::ClientConfig;
use taskboard_shared::theme::Theme;
use yew::{
  Callback,
  ContextProvider,
  Html,
  Properties,
  function_component,
  html,
  use_effect_with,
  use_reducer,
  use_state
};
use yew_router::prelude::{
  BrowserRouter,
  Switch
};

use self::chrome::ToastState;
pub use self::chrome::{
  Chrome,
  ToastAction,
  use_chrome
};
pub use self::list_state::ListState;
pub use self::route::Route;
use crate::api::ApiClient;
use crate::components::{
  Navbar,
  ToastStack
};

const CLIENT_CONFIG_TOML: &str =
  include_str!("../assets/client.toml");

pub fn load_client_config() -> ClientConfig
{
  ClientConfig::from_toml_or_default(
    CLIENT_CONFIG_TOML
  )
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
  pub config:        Rc<ClientConfig>,
  pub initial_theme: Theme
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
  let current_theme = {
    let initial = props.initial_theme;
    use_state(move || initial)
  };
  let toasts =
    use_reducer(ToastState::default);
  let stats =
    use_state(|| None::<Stats>);

  let chrome = Chrome {
    api: ApiClient::new(
      props.config.clone()
    ),
    config: props.config.clone(),
    toasts,
    stats
  };

  {
    let chrome = chrome.clone();
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "frontend mounted and hooks \
         initialized"
      );
      chrome.refresh_progress();
      || ()
    });
  }

  let on_theme_change = {
    let current_theme =
      current_theme.clone();
    let storage_key = props
      .config
      .theme
      .storage_key
      .clone();
    Callback::from(move |next: Theme| {
      theme::save_theme(
        &storage_key,
        next
      );
      theme::apply_theme(next);
      tracing::debug!(
        theme = next.storage_value(),
        "persisted theme"
      );
      current_theme.set(next);
    })
  };

  html! {
      <ContextProvider<Chrome> context={chrome}>
          <BrowserRouter>
              <Navbar theme={*current_theme} on_theme_change={on_theme_change} />
              <main class="container py-4">
                  <Switch<Route> render={route::switch} />
              </main>
              <ToastStack />
          </BrowserRouter>
      </ContextProvider<Chrome>>
  }
}

pub fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
