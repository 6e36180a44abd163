use taskboard_shared::theme::Theme;
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Event,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct DarkModeToggleProps {
  pub theme:     Theme,
  pub on_change: Callback<Theme>
}

#[function_component(DarkModeToggle)]
pub fn dark_mode_toggle(
  props: &DarkModeToggleProps
) -> Html {
  let on_change = {
    let on_change = props.on_change.clone();
    Callback::from(move |e: Event| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      on_change
        .emit(Theme::from_checked(input.checked()));
    })
  };

  html! {
      <div class="form-check form-switch mb-0">
          <input
              id="darkModeToggle"
              class="form-check-input"
              type="checkbox"
              role="switch"
              checked={props.theme.is_dark()}
              onchange={on_change}
          />
          <label class="form-check-label" for="darkModeToggle">{ "Dark mode" }</label>
      </div>
  }
}
