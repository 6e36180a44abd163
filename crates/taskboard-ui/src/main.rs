mod api;
mod app;
mod components;

use std::rc::Rc;

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  tracing::info!(
    "starting taskboard frontend"
  );

  let config =
    Rc::new(app::load_client_config());
  let initial_theme = app::theme::init_theme(
    &config.theme.storage_key
  );

  let mount = web_sys::window()
    .and_then(|window| {
      window.document()
    })
    .and_then(|document| {
      document.get_element_by_id("app")
    })
    .expect(
      "missing #app mount element"
    );

  yew::Renderer::<app::App>::with_root_and_props(
    mount,
    app::AppProps {
      config,
      initial_theme
    }
  )
  .render();
}
