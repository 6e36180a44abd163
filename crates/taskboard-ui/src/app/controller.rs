use gloo::timers::future::TimeoutFuture;
use taskboard_shared::TaskCreate;
use taskboard_shared::filter::{
  ListView,
  TaskFilter
};
use taskboard_shared::mutation::Mutation;
use taskboard_shared::toast::ToastKind;
use yew::{
  Callback,
  UseReducerDispatcher
};

use super::chrome::Chrome;
use super::list_state::{
  ListAction,
  ListState,
  ReloadTick
};

/// Reload triggers for the lists that are
/// currently mounted. A view that is not
/// on screen is simply skipped.
#[derive(Clone, Default)]
pub struct Reloads {
  pub pending:
    Option<UseReducerDispatcher<ReloadTick>>,
  pub completed:
    Option<UseReducerDispatcher<ReloadTick>>
}

impl Reloads {
  pub fn trigger(&self, view: ListView) {
    let target = match view {
      | ListView::Pending => &self.pending,
      | ListView::Completed => {
        &self.completed
      }
    };
    match target {
      | Some(tick) => tick.dispatch(()),
      | None => {
        tracing::debug!(
          ?view,
          "view not mounted; skipping \
           reload"
        )
      }
    }
  }
}

/// Drives one task container: loads it,
/// sends writes, and resynchronizes from
/// the server after every success.
#[derive(Clone)]
pub struct TaskListController {
  pub chrome:  Chrome,
  pub list:    UseReducerDispatcher<ListState>,
  pub reloads: Reloads
}

impl TaskListController {
  pub fn load(
    &self,
    view: ListView,
    filter: TaskFilter
  ) {
    let this = self.clone();
    wasm_bindgen_futures::spawn_local(
      async move {
        tracing::info!(
          ?view,
          filters = filter.query_pairs().len(),
          "refreshing task list"
        );
        match this
          .chrome
          .api
          .list_tasks(view, &filter)
          .await
        {
          | Ok(tasks) => {
            tracing::debug!(
              ?view,
              total = tasks.len(),
              "task list loaded"
            );
            this.list.dispatch(
              ListAction::Loaded(tasks)
            );
            if view.refreshes_progress() {
              this.chrome.refresh_progress();
            }
          }
          | Err(error) => {
            this.chrome.report("load", &error)
          }
        }
      }
    );
  }

  /// `on_created` fires once the server
  /// accepted the task, before the toast.
  pub fn create(
    &self,
    payload: TaskCreate,
    on_created: Callback<()>
  ) {
    let this = self.clone();
    wasm_bindgen_futures::spawn_local(
      async move {
        match this
          .chrome
          .api
          .create_task(&payload)
          .await
        {
          | Ok(task) => {
            let id = task.id;
            tracing::info!(%id, "task created");
            this.list.dispatch(
              ListAction::Appended(task)
            );
            on_created.emit(());
            this.settle_mutation(&Mutation::Create).await;

            TimeoutFuture::new(
              this.chrome.config.animation.enter_ms
            )
            .await;
            this.list.dispatch(
              ListAction::Settle(id)
            );
          }
          | Err(error) => {
            this.chrome.report("create", &error)
          }
        }
      }
    );
  }

  /// Complete, reopen, edit and delete.
  pub fn mutate(
    &self,
    mutation: Mutation
  ) {
    let Some(id) = mutation.task_id()
    else {
      tracing::warn!(
        "create must go through \
         TaskListController::create"
      );
      return;
    };

    let this = self.clone();
    wasm_bindgen_futures::spawn_local(
      async move {
        let api = &this.chrome.api;
        let result = match mutation.patch() {
          | Some(patch) => api
            .update_task(id, &patch)
            .await
            .map(|_| ()),
          | None => api
            .delete_task(id)
            .await
            .map(|_| ())
        };

        match result {
          | Ok(()) => {
            tracing::info!(
              %id,
              action = mutation.label(),
              "task mutated"
            );
            this.settle_mutation(&mutation).await;
          }
          | Err(error) => {
            this
              .chrome
              .report(mutation.label(), &error)
          }
        }
      }
    );
  }

  async fn settle_mutation(
    &self,
    mutation: &Mutation
  ) {
    let followups = mutation.followups();
    self.chrome.notify(
      followups.toast,
      ToastKind::Info
    );

    if let (Some(motion), Some(id)) =
      (followups.exit, mutation.task_id())
    {
      self.list.dispatch(
        ListAction::BeginExit(id, motion)
      );
      TimeoutFuture::new(
        self.chrome.config.animation.exit_ms
      )
      .await;
      self
        .list
        .dispatch(ListAction::Remove(id));
    }

    for view in followups.reload {
      self.reloads.trigger(view);
    }
    if followups.refresh_progress {
      self.chrome.refresh_progress();
    }
  }
}
