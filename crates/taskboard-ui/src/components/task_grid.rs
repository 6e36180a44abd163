use taskboard_shared::TaskId;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskCard;
use crate::app::ListState;

#[derive(Properties, PartialEq)]
pub struct TaskGridProps {
  pub state:      ListState,
  pub on_primary: Callback<TaskId>,
  #[prop_or_default]
  pub on_edit:    Option<Callback<TaskId>>,
  pub on_delete:  Callback<TaskId>
}

#[function_component(TaskGrid)]
pub fn task_grid(
  props: &TaskGridProps
) -> Html {
  let view = props.state.view;

  if props.state.shows_placeholder() {
    return html! {
        <div id={view.container_id()}>
            <p class="text-muted">{ view.placeholder() }</p>
        </div>
    };
  }

  html! {
      <div
          id={view.container_id()}
          class="row row-cols-1 row-cols-md-2 g-3"
      >
          {
              for props.state.registry.slots().iter().cloned().map(|slot| {
                  let key = slot.card.key.clone();
                  html! {
                      <TaskCard
                          key={key}
                          slot={slot}
                          on_primary={props.on_primary.clone()}
                          on_edit={props.on_edit.clone()}
                          on_delete={props.on_delete.clone()}
                      />
                  }
              })
          }
      </div>
  }
}
