use taskboard_shared::Priority;
use taskboard_shared::filter::{
  ListView,
  TaskFilter
};
use web_sys::{
  HtmlInputElement,
  HtmlSelectElement
};
use yew::{
  Callback,
  Event,
  Html,
  InputEvent,
  KeyboardEvent,
  MouseEvent,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
  pub view:       ListView,
  pub filter:     TaskFilter,
  pub categories: Vec<String>,
  pub on_change:  Callback<TaskFilter>,
  pub on_apply:   Callback<()>
}

/// Element ids differ per view so both
/// bars can be told apart in the page.
fn control_id(
  view: ListView,
  base: &str
) -> String {
  match view {
    | ListView::Pending => base.to_string(),
    | ListView::Completed => {
      format!("{base}Completed")
    }
  }
}

#[function_component(FilterBar)]
pub fn filter_bar(
  props: &FilterBarProps
) -> Html {
  let view = props.view;
  let filter = props.filter.clone();

  let on_query = {
    let filter = filter.clone();
    let on_change = props.on_change.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      on_change.emit(TaskFilter {
        query: input.value(),
        ..filter.clone()
      });
    })
  };

  let on_query_key = {
    let on_apply = props.on_apply.clone();
    Callback::from(move |e: KeyboardEvent| {
      if e.key() == "Enter" {
        e.prevent_default();
        on_apply.emit(());
      }
    })
  };

  let on_category = {
    let filter = filter.clone();
    let on_change = props.on_change.clone();
    Callback::from(move |e: Event| {
      let select: HtmlSelectElement =
        e.target_unchecked_into();
      on_change.emit(TaskFilter {
        category: select.value(),
        ..filter.clone()
      });
    })
  };

  let on_priority = {
    let filter = filter.clone();
    let on_change = props.on_change.clone();
    Callback::from(move |e: Event| {
      let select: HtmlSelectElement =
        e.target_unchecked_into();
      on_change.emit(TaskFilter {
        priority: select.value(),
        ..filter.clone()
      });
    })
  };

  let on_apply_click = {
    let on_apply = props.on_apply.clone();
    Callback::from(move |_: MouseEvent| {
      on_apply.emit(())
    })
  };

  html! {
      <div class="d-flex flex-wrap gap-2 mb-3">
          <input
              id={control_id(view, "search")}
              class="form-control flex-grow-1"
              style="min-width:12rem;"
              placeholder="Search tasks"
              value={filter.query.clone()}
              oninput={on_query}
              onkeydown={on_query_key}
          />
          <select
              id={control_id(view, "filterCategory")}
              class="form-select w-auto"
              onchange={on_category}
          >
              <option value="" selected={filter.category.is_empty()}>{ "All categories" }</option>
              {
                  for props.categories.iter().map(|category| html! {
                      <option
                          value={category.clone()}
                          selected={*category == filter.category}
                      >
                          { category }
                      </option>
                  })
              }
          </select>
          <select
              id={control_id(view, "filterPriority")}
              class="form-select w-auto"
              onchange={on_priority}
          >
              <option value="" selected={filter.priority.is_empty()}>{ "All priorities" }</option>
              {
                  for Priority::ALL.iter().map(|priority| html! {
                      <option
                          value={priority.as_str()}
                          selected={priority.as_str() == filter.priority}
                      >
                          { priority.as_str() }
                      </option>
                  })
              }
          </select>
          <button
              type="button"
              id={control_id(view, "applyFilters")}
              class="btn btn-outline-primary"
              onclick={on_apply_click}
          >
              { "Apply filters" }
          </button>
      </div>
  }
}
