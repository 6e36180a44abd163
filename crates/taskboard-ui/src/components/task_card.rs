use taskboard_shared::TaskId;
use taskboard_shared::registry::CardSlot;
use yew::{
  AttrValue,
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskCardProps {
  pub slot:       CardSlot,
  /// Complete on pending cards, reopen on
  /// completed ones.
  pub on_primary: Callback<TaskId>,
  #[prop_or_default]
  pub on_edit:    Option<Callback<TaskId>>,
  pub on_delete:  Callback<TaskId>
}

fn frame_class(
  completed: bool
) -> &'static str {
  if completed {
    "card task-card h-100 border-success-subtle"
  } else {
    "card task-card h-100 shadow-sm"
  }
}

#[function_component(TaskCard)]
pub fn task_card(
  props: &TaskCardProps
) -> Html {
  let card = &props.slot.card;
  let id = card.id;

  let frame_class =
    frame_class(card.completed);
  let (primary_label, primary_class) =
    if card.completed {
      (
        "Reopen",
        "btn btn-outline-secondary btn-sm"
      )
    } else {
      ("Complete", "btn btn-success btn-sm")
    };

  // Every user supplied field in the markup
  // is escaped by `body_markup`.
  let body = Html::from_html_unchecked(
    AttrValue::from(card.body_markup())
  );

  let on_primary =
    props.on_primary.clone();
  let on_delete = props.on_delete.clone();
  let edit_button = match &props.on_edit {
    | Some(on_edit) if !card.completed => {
      let on_edit = on_edit.clone();
      html! {
          <button
              type="button"
              class="btn btn-outline-secondary btn-sm"
              onclick={move |_| on_edit.emit(id)}
          >
              { "Edit" }
          </button>
      }
    }
    | _ => html! {}
  };

  html! {
      <div
          class={classes!("col", props.slot.phase.as_class())}
          id={card.key.clone()}
      >
          <div class={frame_class}>
              <div class="card-body d-flex flex-column">
                  { body }
                  <div class="mt-auto d-flex gap-2">
                      <button
                          type="button"
                          class={primary_class}
                          onclick={move |_| on_primary.emit(id)}
                      >
                          { primary_label }
                      </button>
                      { edit_button }
                      <button
                          type="button"
                          class="btn btn-outline-danger btn-sm"
                          onclick={move |_| on_delete.emit(id)}
                      >
                          { "Delete" }
                      </button>
                  </div>
              </div>
          </div>
      </div>
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn both_frames_carry_the_hover_class() {
    for completed in [false, true] {
      assert!(
        frame_class(completed)
          .split(' ')
          .any(|class| class == "task-card")
      );
    }
    assert_ne!(
      frame_class(false),
      frame_class(true)
    );
  }
}
