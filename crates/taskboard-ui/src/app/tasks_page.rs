use taskboard_shared::TaskId;
use taskboard_shared::dialog::{
  Dialog,
  EditFlow
};
use taskboard_shared::draft::TaskDraft;
use taskboard_shared::filter::{
  ListView,
  TaskFilter
};
use taskboard_shared::mutation::Mutation;
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_effect_with,
  use_reducer,
  use_state
};

use super::chrome::use_chrome;
use super::controller::{
  Reloads,
  TaskListController
};
use super::list_state::{
  ListState,
  ReloadTick
};
use super::ui_debug;
use crate::components::{
  DialogHost,
  FilterBar,
  ProgressBar,
  TaskForm,
  TaskGrid
};

#[function_component(TasksPage)]
pub fn tasks_page() -> Html {
  let chrome = use_chrome();
  let draft = use_state(TaskDraft::default);
  let draft_error =
    use_state(|| None::<String>);
  let filter =
    use_state(TaskFilter::default);
  let list = use_reducer(|| {
    ListState::new(ListView::Pending)
  });
  let reload =
    use_reducer(ReloadTick::default);
  let dialog =
    use_state(|| None::<Dialog>);

  let controller = TaskListController {
    chrome:  chrome.clone(),
    list:    list.dispatcher(),
    reloads: Reloads {
      pending:   Some(reload.dispatcher()),
      completed: None
    }
  };

  {
    let controller = controller.clone();
    let filter = (*filter).clone();
    use_effect_with(reload.0, move |_| {
      controller
        .load(ListView::Pending, filter);
      || ()
    });
  }

  let on_filter_change = {
    let filter = filter.clone();
    Callback::from(
      move |next: TaskFilter| {
        filter.set(next)
      }
    )
  };

  let on_apply = {
    let reload = reload.dispatcher();
    Callback::from(move |()| {
      reload.dispatch(())
    })
  };

  let on_draft_change = {
    let draft = draft.clone();
    let draft_error = draft_error.clone();
    Callback::from(
      move |next: TaskDraft| {
        draft.set(next);
        draft_error.set(None);
      }
    )
  };

  let on_submit = {
    let draft = draft.clone();
    let draft_error = draft_error.clone();
    let controller = controller.clone();
    Callback::from(move |()| {
      match draft.validate() {
        | Ok(payload) => {
          let draft = draft.clone();
          controller.create(
            payload,
            Callback::from(move |()| {
              draft.set(TaskDraft::default())
            })
          );
        }
        | Err(error) => {
          tracing::debug!(
            %error,
            "rejected task draft"
          );
          draft_error
            .set(Some(error.to_string()));
        }
      }
    })
  };

  let on_complete = {
    let controller = controller.clone();
    Callback::from(move |id: TaskId| {
      controller
        .mutate(Mutation::Complete(id))
    })
  };

  let on_edit = {
    let list = list.clone();
    let dialog = dialog.clone();
    Callback::from(move |id: TaskId| {
      match list.registry.get(id) {
        | Some(slot) => {
          ui_debug(
            "dialog.edit.open",
            &slot.card.key
          );
          dialog.set(Some(Dialog::Edit(
            EditFlow::from_card(&slot.card)
          )));
        }
        | None => {
          tracing::warn!(
            %id,
            "edit requested for a card \
             that is no longer rendered"
          )
        }
      }
    })
  };

  let on_delete = {
    let dialog = dialog.clone();
    Callback::from(move |id: TaskId| {
      dialog.set(Some(
        Dialog::ConfirmDelete { id }
      ))
    })
  };

  let on_resolved = {
    let controller = controller.clone();
    Callback::from(
      move |mutation: Mutation| {
        controller.mutate(mutation)
      }
    )
  };

  html! {
      <>
          <div class="row g-4">
              <div class="col-lg-4">
                  <TaskForm
                      draft={(*draft).clone()}
                      error={(*draft_error).clone()}
                      categories={chrome.config.categories.clone()}
                      on_change={on_draft_change}
                      on_submit={on_submit}
                  />
                  <div class="card shadow-sm mt-4 d-none d-md-block">
                      <div class="card-body">
                          <h6 class="card-title">{ "Progress" }</h6>
                          <ProgressBar id="progressBar" />
                      </div>
                  </div>
              </div>
              <div class="col-lg-8">
                  <FilterBar
                      view={ListView::Pending}
                      filter={(*filter).clone()}
                      categories={chrome.config.categories.clone()}
                      on_change={on_filter_change}
                      on_apply={on_apply}
                  />
                  <TaskGrid
                      state={(*list).clone()}
                      on_primary={on_complete}
                      on_edit={Some(on_edit)}
                      on_delete={on_delete}
                  />
              </div>
          </div>
          <DialogHost dialog={dialog} on_resolved={on_resolved} />
      </>
  }
}
