#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum ToastKind {
  Info,
  Error
}

impl ToastKind {
  pub fn as_class(self) -> &'static str {
    match self {
      | Self::Info => "text-bg-dark",
      | Self::Error => "text-bg-danger"
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
)]
pub struct ToastId(pub u64);

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct Toast {
  pub id:      ToastId,
  pub message: String,
  pub kind:    ToastKind,
  /// Set while the dismissal animation
  /// runs.
  pub hiding:  bool
}

/// Visible toasts, oldest first.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct ToastQueue {
  next_id: u64,
  toasts:  Vec<Toast>
}

impl ToastQueue {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(
    &mut self,
    message: impl Into<String>,
    kind: ToastKind
  ) -> ToastId {
    self.next_id =
      self.next_id.wrapping_add(1);
    let id = ToastId(self.next_id);
    self.toasts.push(Toast {
      id,
      message: message.into(),
      kind,
      hiding: false
    });
    id
  }

  pub fn begin_dismiss(
    &mut self,
    id: ToastId
  ) -> bool {
    match self
      .toasts
      .iter_mut()
      .find(|toast| toast.id == id)
    {
      | Some(toast) => {
        toast.hiding = true;
        true
      }
      | None => false
    }
  }

  pub fn remove(
    &mut self,
    id: ToastId
  ) -> bool {
    let before = self.toasts.len();
    self
      .toasts
      .retain(|toast| toast.id != id);
    self.toasts.len() != before
  }

  pub fn toasts(&self) -> &[Toast] {
    &self.toasts
  }

  pub fn is_empty(&self) -> bool {
    self.toasts.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn toasts_hide_then_remove_themselves() {
    let mut queue = ToastQueue::new();
    let first =
      queue.push("Task added", ToastKind::Info);
    let second = queue.push(
      "Server unreachable",
      ToastKind::Error
    );
    assert_ne!(first, second);

    assert!(queue.begin_dismiss(first));
    assert!(queue.toasts()[0].hiding);
    assert!(!queue.toasts()[1].hiding);

    assert!(queue.remove(first));
    assert_eq!(queue.toasts().len(), 1);
    assert_eq!(
      queue.toasts()[0].message,
      "Server unreachable"
    );

    assert!(queue.remove(second));
    assert!(queue.is_empty());
  }

  #[test]
  fn dismissing_twice_is_harmless() {
    let mut queue = ToastQueue::new();
    let id =
      queue.push("Task deleted", ToastKind::Info);
    assert!(queue.remove(id));
    assert!(!queue.remove(id));
    assert!(!queue.begin_dismiss(id));
  }
}
