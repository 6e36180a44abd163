use taskboard_shared::TaskId;
use taskboard_shared::dialog::Dialog;
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
use crate::components::{
  DialogHost,
  FilterBar,
  TaskGrid
};

#[function_component(CompletedPage)]
pub fn completed_page() -> Html {
  let chrome = use_chrome();
  let filter =
    use_state(TaskFilter::default);
  let list = use_reducer(|| {
    ListState::new(ListView::Completed)
  });
  let reload =
    use_reducer(ReloadTick::default);
  let dialog =
    use_state(|| None::<Dialog>);

  let categories =
    chrome.config.categories.clone();

  let controller = TaskListController {
    chrome,
    list: list.dispatcher(),
    reloads: Reloads {
      pending:   None,
      completed: Some(reload.dispatcher())
    }
  };

  {
    let controller = controller.clone();
    let filter = (*filter).clone();
    use_effect_with(reload.0, move |_| {
      controller
        .load(ListView::Completed, filter);
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

  let on_reopen = {
    let controller = controller.clone();
    Callback::from(move |id: TaskId| {
      controller.mutate(Mutation::Reopen(id))
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

  let on_resolved = Callback::from(
    move |mutation: Mutation| {
      controller.mutate(mutation)
    }
  );

  html! {
      <>
          <h1 class="h4 mb-3">{ "Completed tasks" }</h1>
          <FilterBar
              view={ListView::Completed}
              filter={(*filter).clone()}
              categories={categories}
              on_change={on_filter_change}
              on_apply={on_apply}
          />
          <TaskGrid
              state={(*list).clone()}
              on_primary={on_reopen}
              on_delete={on_delete}
          />
          <DialogHost dialog={dialog} on_resolved={on_resolved} />
      </>
  }
}
