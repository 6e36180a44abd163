use taskboard_shared::theme::Theme;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};
use yew_router::prelude::{
  Link,
  use_route
};

use super::{
  DarkModeToggle,
  ProgressBar
};
use crate::app::Route;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
  pub theme:           Theme,
  pub on_theme_change: Callback<Theme>
}

#[function_component(Navbar)]
pub fn navbar(
  props: &NavbarProps
) -> Html {
  let current = use_route::<Route>();

  let nav_link = |route: Route| {
    let active = match (&current, &route) {
      | (Some(Route::Home), Route::Tasks) => {
        true
      }
      | (Some(current), route) => {
        current == route
      }
      | (None, _) => false
    };
    html! {
        <li class="nav-item">
            <Link<Route>
                classes={classes!("nav-link", active.then_some("active"))}
                to={route.clone()}
            >
                { route.label() }
            </Link<Route>>
        </li>
    }
  };

  html! {
      <nav class="navbar navbar-expand border-bottom">
          <div class="container">
              <Link<Route> classes="navbar-brand fw-semibold" to={Route::Tasks}>
                  { "Taskboard" }
              </Link<Route>>
              <ul class="navbar-nav me-auto">
                  { nav_link(Route::Tasks) }
                  { nav_link(Route::Completed) }
                  { nav_link(Route::Profile) }
              </ul>
              <div class="d-md-none flex-grow-1 mx-3">
                  <ProgressBar id="progressBarMobile" />
              </div>
              <DarkModeToggle
                  theme={props.theme}
                  on_change={props.on_theme_change.clone()}
              />
          </div>
      </nav>
  }
}
