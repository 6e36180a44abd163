use crate::render::TaskCard;
use crate::{
  TaskDto,
  TaskId
};

/// Direction a card leaves in.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum ExitMotion {
  /// Slides up; used when a task changes
  /// view.
  Lift,
  /// Slides right; used on delete.
  Slide
}

impl ExitMotion {
  pub fn as_class(self) -> &'static str {
    match self {
      | Self::Lift => "card-exit-lift",
      | Self::Slide => "card-exit-slide"
    }
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum CardPhase {
  Entering,
  Idle,
  Leaving(ExitMotion)
}

impl CardPhase {
  pub fn as_class(
    self
  ) -> Option<&'static str> {
    match self {
      | Self::Entering => {
        Some("card-enter")
      }
      | Self::Idle => None,
      | Self::Leaving(motion) => {
        Some(motion.as_class())
      }
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct CardSlot {
  pub card:  TaskCard,
  pub phase: CardPhase
}

/// Cards currently on screen for one
/// container, keyed by task id, in render
/// order.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct CardRegistry {
  slots: Vec<CardSlot>
}

impl CardRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Drops every existing slot and
  /// registers `tasks` in order.
  pub fn rebuild(
    &mut self,
    tasks: &[TaskDto]
  ) {
    self.slots = tasks
      .iter()
      .map(|task| {
        CardSlot {
          card:  TaskCard::from_task(
            task
          ),
          phase: CardPhase::Idle
        }
      })
      .collect();
  }

  pub fn from_tasks(
    tasks: &[TaskDto]
  ) -> Self {
    let mut registry = Self::new();
    registry.rebuild(tasks);
    registry
  }

  /// Appends a freshly created card. An
  /// id already on screen is replaced in
  /// place.
  pub fn append_entering(
    &mut self,
    task: &TaskDto
  ) {
    let slot = CardSlot {
      card:  TaskCard::from_task(task),
      phase: CardPhase::Entering
    };
    match self.position(task.id) {
      | Some(index) => {
        self.slots[index] = slot;
      }
      | None => self.slots.push(slot)
    }
  }

  pub fn settle(
    &mut self,
    id: TaskId
  ) {
    if let Some(slot) = self.slot_mut(id)
      && slot.phase
        == CardPhase::Entering
    {
      slot.phase = CardPhase::Idle;
    }
  }

  /// Returns false when the card is not
  /// on screen.
  pub fn begin_exit(
    &mut self,
    id: TaskId,
    motion: ExitMotion
  ) -> bool {
    match self.slot_mut(id) {
      | Some(slot) => {
        slot.phase =
          CardPhase::Leaving(motion);
        true
      }
      | None => false
    }
  }

  pub fn remove(
    &mut self,
    id: TaskId
  ) -> Option<CardSlot> {
    self
      .position(id)
      .map(|index| self.slots.remove(index))
  }

  pub fn contains(
    &self,
    id: TaskId
  ) -> bool {
    self.position(id).is_some()
  }

  pub fn get(
    &self,
    id: TaskId
  ) -> Option<&CardSlot> {
    self
      .slots
      .iter()
      .find(|slot| slot.card.id == id)
  }

  pub fn phase(
    &self,
    id: TaskId
  ) -> Option<CardPhase> {
    self.get(id).map(|slot| slot.phase)
  }

  pub fn ids(&self) -> Vec<TaskId> {
    self
      .slots
      .iter()
      .map(|slot| slot.card.id)
      .collect()
  }

  pub fn slots(&self) -> &[CardSlot] {
    &self.slots
  }

  pub fn len(&self) -> usize {
    self.slots.len()
  }

  pub fn is_empty(&self) -> bool {
    self.slots.is_empty()
  }

  fn position(
    &self,
    id: TaskId
  ) -> Option<usize> {
    self
      .slots
      .iter()
      .position(|slot| slot.card.id == id)
  }

  fn slot_mut(
    &mut self,
    id: TaskId
  ) -> Option<&mut CardSlot> {
    self
      .slots
      .iter_mut()
      .find(|slot| slot.card.id == id)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn task(id: u64) -> TaskDto {
    TaskDto {
      id:          TaskId(id),
      title:       format!("task {id}"),
      description: None,
      due_date:    None,
      category:    None,
      priority:    None,
      completed:   false,
      created_at:  None
    }
  }

  #[test]
  fn rebuild_replaces_previous_cards() {
    let mut registry =
      CardRegistry::from_tasks(&[
        task(1),
        task(2)
      ]);
    registry.rebuild(&[task(3)]);

    assert_eq!(
      registry.ids(),
      vec![TaskId(3)]
    );
    assert_eq!(
      registry.phase(TaskId(3)),
      Some(CardPhase::Idle)
    );
  }

  #[test]
  fn created_cards_enter_then_settle() {
    let mut registry =
      CardRegistry::from_tasks(&[task(
        1
      )]);
    registry.append_entering(&task(2));

    assert_eq!(
      registry.ids(),
      vec![TaskId(1), TaskId(2)]
    );
    assert_eq!(
      registry.phase(TaskId(2)),
      Some(CardPhase::Entering)
    );

    registry.settle(TaskId(2));
    assert_eq!(
      registry.phase(TaskId(2)),
      Some(CardPhase::Idle)
    );
  }

  #[test]
  fn exit_then_remove_tears_down_the_card(
  ) {
    let mut registry =
      CardRegistry::from_tasks(&[
        task(1),
        task(2)
      ]);

    assert!(registry.begin_exit(
      TaskId(1),
      ExitMotion::Slide
    ));
    assert_eq!(
      registry
        .phase(TaskId(1))
        .and_then(CardPhase::as_class),
      Some("card-exit-slide")
    );

    // settle must not resurrect a
    // leaving card
    registry.settle(TaskId(1));
    assert_eq!(
      registry.phase(TaskId(1)),
      Some(CardPhase::Leaving(
        ExitMotion::Slide
      ))
    );

    assert!(
      registry.remove(TaskId(1)).is_some()
    );
    assert!(!registry.contains(TaskId(1)));
    assert_eq!(registry.len(), 1);
  }

  #[test]
  fn unknown_ids_are_ignored() {
    let mut registry = CardRegistry::new();
    assert!(!registry.begin_exit(
      TaskId(9),
      ExitMotion::Lift
    ));
    assert!(
      registry.remove(TaskId(9)).is_none()
    );
    assert!(registry.is_empty());
  }
}
