use std::rc::Rc;

use taskboard_shared::filter::{
  ListView,
  tasks_for_view
};
use taskboard_shared::registry::{
  CardRegistry,
  ExitMotion
};
use taskboard_shared::{
  TaskDto,
  TaskId
};
use yew::Reducible;

/// One rendered container. `loaded` stays
/// false until the first response so the
/// empty placeholder does not flash.
#[derive(Clone, PartialEq)]
pub struct ListState {
  pub view:     ListView,
  pub registry: CardRegistry,
  pub loaded:   bool
}

impl ListState {
  pub fn new(view: ListView) -> Self {
    Self {
      view,
      registry: CardRegistry::new(),
      loaded: false
    }
  }

  pub fn shows_placeholder(&self) -> bool {
    self.loaded && self.registry.is_empty()
  }
}

pub enum ListAction {
  Loaded(Vec<TaskDto>),
  Appended(TaskDto),
  Settle(TaskId),
  BeginExit(TaskId, ExitMotion),
  Remove(TaskId)
}

impl Reducible for ListState {
  type Action = ListAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut next = (*self).clone();
    match action {
      | ListAction::Loaded(tasks) => {
        let tasks =
          tasks_for_view(next.view, tasks);
        next.registry.rebuild(&tasks);
        next.loaded = true;
      }
      | ListAction::Appended(task) => {
        if next.view.accepts(&task) {
          next.registry.append_entering(&task);
        }
      }
      | ListAction::Settle(id) => {
        next.registry.settle(id);
      }
      | ListAction::BeginExit(id, motion) => {
        next.registry.begin_exit(id, motion);
      }
      | ListAction::Remove(id) => {
        next.registry.remove(id);
      }
    }
    Rc::new(next)
  }
}

/// Bumped to ask a page to re-fetch its
/// list.
#[derive(
  Clone, Copy, Default, PartialEq,
)]
pub struct ReloadTick(pub u64);

impl Reducible for ReloadTick {
  type Action = ();

  fn reduce(
    self: Rc<Self>,
    _action: Self::Action
  ) -> Rc<Self> {
    Rc::new(Self(self.0.wrapping_add(1)))
  }
}

#[cfg(test)]
mod tests {
  use taskboard_shared::registry::CardPhase;

  use super::*;

  fn task(
    id: u64,
    completed: bool
  ) -> TaskDto {
    TaskDto {
      id: TaskId(id),
      title: format!("task {id}"),
      description: None,
      due_date: None,
      category: None,
      priority: None,
      completed,
      created_at: None
    }
  }

  fn apply(
    state: ListState,
    action: ListAction
  ) -> ListState {
    (*Rc::new(state).reduce(action))
      .clone()
  }

  #[test]
  fn empty_load_shows_placeholder_only_after_response(
  ) {
    let state =
      ListState::new(ListView::Pending);
    assert!(!state.shows_placeholder());

    let state = apply(
      state,
      ListAction::Loaded(vec![])
    );
    assert!(state.shows_placeholder());
  }

  #[test]
  fn pending_list_never_renders_completed_tasks(
  ) {
    let state = apply(
      ListState::new(ListView::Pending),
      ListAction::Loaded(vec![
        task(1, false),
        task(2, true),
      ])
    );
    assert_eq!(
      state.registry.ids(),
      vec![TaskId(1)]
    );

    let state = apply(
      state,
      ListAction::Appended(task(3, true))
    );
    assert!(
      !state.registry.contains(TaskId(3))
    );
  }

  #[test]
  fn completing_removes_card_after_exit() {
    let state = apply(
      ListState::new(ListView::Pending),
      ListAction::Loaded(vec![task(
        1, false
      )])
    );
    let state = apply(
      state,
      ListAction::BeginExit(
        TaskId(1),
        ExitMotion::Lift
      )
    );
    assert_eq!(
      state.registry.phase(TaskId(1)),
      Some(CardPhase::Leaving(
        ExitMotion::Lift
      ))
    );

    let state = apply(
      state,
      ListAction::Remove(TaskId(1))
    );
    assert!(state.shows_placeholder());
  }

  #[test]
  fn reload_tick_always_advances() {
    let tick = Rc::new(ReloadTick::default())
      .reduce(())
      .reduce(());
    assert_eq!(tick.0, 2);
  }
}
