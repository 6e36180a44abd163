use taskboard_shared::Priority;
use taskboard_shared::draft::TaskDraft;
use web_sys::{
  HtmlInputElement,
  HtmlSelectElement,
  HtmlTextAreaElement
};
use yew::{
  Callback,
  Event,
  Html,
  InputEvent,
  Properties,
  SubmitEvent,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskFormProps {
  pub draft:      TaskDraft,
  #[prop_or_default]
  pub error:      Option<String>,
  pub categories: Vec<String>,
  pub on_change:  Callback<TaskDraft>,
  pub on_submit:  Callback<()>
}

#[function_component(TaskForm)]
pub fn task_form(
  props: &TaskFormProps
) -> Html {
  let draft = props.draft.clone();

  // Builds an input handler that writes one
  // field of the draft.
  let field = |apply: fn(
    &mut TaskDraft,
    String
  )| {
    let draft = draft.clone();
    let on_change = props.on_change.clone();
    move |value: String| {
      let mut next = draft.clone();
      apply(&mut next, value);
      on_change.emit(next);
    }
  };

  let on_title = {
    let update = field(|d, v| d.title = v);
    Callback::from(move |e: InputEvent| {
      update(
        e.target_unchecked_into::<HtmlInputElement>()
          .value()
      )
    })
  };
  let on_description = {
    let update =
      field(|d, v| d.description = v);
    Callback::from(move |e: InputEvent| {
      update(
        e.target_unchecked_into::<HtmlTextAreaElement>()
          .value()
      )
    })
  };
  let on_due = {
    let update = field(|d, v| d.due_date = v);
    Callback::from(move |e: InputEvent| {
      update(
        e.target_unchecked_into::<HtmlInputElement>()
          .value()
      )
    })
  };
  let on_category = {
    let update = field(|d, v| d.category = v);
    Callback::from(move |e: Event| {
      update(
        e.target_unchecked_into::<HtmlSelectElement>()
          .value()
      )
    })
  };
  let on_priority = {
    let update = field(|d, v| d.priority = v);
    Callback::from(move |e: Event| {
      update(
        e.target_unchecked_into::<HtmlSelectElement>()
          .value()
      )
    })
  };

  let on_submit = {
    let on_submit = props.on_submit.clone();
    Callback::from(move |e: SubmitEvent| {
      e.prevent_default();
      on_submit.emit(());
    })
  };

  html! {
      <form id="taskForm" class="card shadow-sm" onsubmit={on_submit}>
          <div class="card-body d-flex flex-column gap-2">
              <h6 class="card-title">{ "New task" }</h6>
              <input
                  id="title"
                  class="form-control"
                  placeholder="Title"
                  value={draft.title.clone()}
                  oninput={on_title}
              />
              <textarea
                  id="description"
                  class="form-control"
                  rows="2"
                  placeholder="Description"
                  value={draft.description.clone()}
                  oninput={on_description}
              />
              <input
                  id="due_date"
                  type="datetime-local"
                  class="form-control"
                  value={draft.due_date.clone()}
                  oninput={on_due}
              />
              <div class="d-flex gap-2">
                  <select id="category" class="form-select" onchange={on_category}>
                      {
                          for props.categories.iter().map(|category| html! {
                              <option
                                  value={category.clone()}
                                  selected={*category == draft.category}
                              >
                                  { category }
                              </option>
                          })
                      }
                  </select>
                  <select id="priority" class="form-select" onchange={on_priority}>
                      {
                          for Priority::ALL.iter().map(|priority| html! {
                              <option
                                  value={priority.as_str()}
                                  selected={priority.as_str() == draft.priority}
                              >
                                  { priority.as_str() }
                              </option>
                          })
                      }
                  </select>
              </div>
              {
                  match &props.error {
                      Some(error) => html! {
                          <div class="text-danger small">{ error }</div>
                      },
                      None => html! {}
                  }
              }
              <button type="submit" class="btn btn-primary">{ "Add task" }</button>
          </div>
      </form>
  }
}
