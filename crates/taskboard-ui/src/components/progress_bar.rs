use yew::{
  AttrValue,
  Html,
  Properties,
  function_component,
  html,
  use_context
};

use crate::app::Chrome;

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
  pub id: AttrValue
}

/// Completion percentage from the last
/// stats fetch. Renders an empty bar until
/// the first one lands.
#[function_component(ProgressBar)]
pub fn progress_bar(
  props: &ProgressBarProps
) -> Html {
  let percent = use_context::<Chrome>()
    .and_then(|chrome| *chrome.stats)
    .map(|stats| stats.rounded_percent())
    .unwrap_or(0);
  let label = format!("{percent}%");

  html! {
      <div class="progress" role="progressbar" aria-valuemin="0" aria-valuemax="100">
          <div
              id={props.id.clone()}
              class="progress-bar bg-success"
              style={format!("width: {percent}%;")}
          >
              { label }
          </div>
      </div>
  }
}
