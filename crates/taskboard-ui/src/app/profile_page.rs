use yew::{
  Html,
  function_component,
  html,
  use_effect_with
};

use super::chrome::use_chrome;
use crate::components::ProgressBar;

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
  let chrome = use_chrome();

  {
    let chrome = chrome.clone();
    use_effect_with((), move |_| {
      chrome.refresh_progress();
      || ()
    });
  }

  let stats = (*chrome.stats).unwrap_or_default();
  let stat_card =
    |id: &'static str, label: &'static str, value: u64| {
      html! {
          <div class="col">
              <div class="card shadow-sm h-100">
                  <div class="card-body text-center">
                      <div class="text-muted small">{ label }</div>
                      <div class="display-6" id={id}>{ value }</div>
                  </div>
              </div>
          </div>
      }
    };

  html! {
      <>
          <h1 class="h4 mb-3">{ "Profile" }</h1>
          <div class="row row-cols-1 row-cols-md-3 g-3 mb-4">
              { stat_card("total-tasks", "Total", stats.total) }
              { stat_card("completed-tasks", "Completed", stats.completed) }
              { stat_card("pending-tasks", "Pending", stats.pending) }
          </div>
          <ProgressBar id="progressBarProfile" />
      </>
  }
}
