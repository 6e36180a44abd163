use yew::{
  Html,
  html
};
use yew_router::prelude::Routable;

use super::completed_page::CompletedPage;
use super::profile_page::ProfilePage;
use super::tasks_page::TasksPage;

#[derive(
  Clone, Routable, PartialEq,
)]
pub enum Route {
  #[at("/")]
  Home,
  #[at("/tasks")]
  Tasks,
  #[at("/completed")]
  Completed,
  #[at("/profile")]
  Profile,
  #[not_found]
  #[at("/404")]
  NotFound
}

impl Route {
  pub fn label(&self) -> &'static str {
    match self {
      | Self::Home | Self::Tasks => "Tasks",
      | Self::Completed => "Completed",
      | Self::Profile => "Profile",
      | Self::NotFound => "Not found"
    }
  }
}

pub fn switch(route: Route) -> Html {
  tracing::debug!(
    route = route.label(),
    "rendering route"
  );
  match route {
    | Route::Home | Route::Tasks => {
      html! { <TasksPage /> }
    }
    | Route::Completed => {
      html! { <CompletedPage /> }
    }
    | Route::Profile => {
      html! { <ProfilePage /> }
    }
    | Route::NotFound => html! {
        <div class="text-center text-muted py-5">
            <h1 class="h4">{ "Page not found" }</h1>
        </div>
    }
  }
}
