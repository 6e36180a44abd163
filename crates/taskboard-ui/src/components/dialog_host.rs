use taskboard_shared::dialog::{
  DELETE_PROMPT,
  Dialog,
  EditFlow,
  EditOutcome
};
use taskboard_shared::mutation::Mutation;
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  InputEvent,
  KeyboardEvent,
  MouseEvent,
  Properties,
  TargetCast,
  classes,
  function_component,
  html
};

use crate::app::ui_debug;

#[derive(Properties, PartialEq)]
pub struct DialogHostProps {
  pub dialog:      yew::UseStateHandle<Option<Dialog>>,
  pub on_resolved: Callback<Mutation>
}

/// Renders whichever modal is open. The
/// page keeps running underneath; nothing
/// here blocks.
#[function_component(DialogHost)]
pub fn dialog_host(
  props: &DialogHostProps
) -> Html {
  match (*props.dialog).clone() {
    | None => html! {},
    | Some(
      current @ Dialog::ConfirmDelete { id }
    ) => {
      let answer = |confirmed: bool| {
        let dialog = props.dialog.clone();
        let on_resolved =
          props.on_resolved.clone();
        let current = current.clone();
        Callback::from(move |_: MouseEvent| {
          ui_debug(
            "dialog.delete.answer",
            &format!("{id}: {confirmed}")
          );
          dialog.set(None);
          if let Some(mutation) =
            current.resolve_delete(confirmed)
          {
            on_resolved.emit(mutation);
          }
        })
      };

      modal(
        "Delete task",
        html! { <p class="mb-0">{ DELETE_PROMPT }</p> },
        html! {
            <>
                <button type="button" class="btn btn-secondary" onclick={answer(false)}>
                    { "Cancel" }
                </button>
                <button type="button" class="btn btn-danger" onclick={answer(true)}>
                    { "Delete" }
                </button>
            </>
        }
      )
    }
    | Some(Dialog::Edit(flow)) => {
      edit_modal(
        flow,
        &props.dialog,
        &props.on_resolved
      )
    }
  }
}

fn resolve_edit(
  outcome: EditOutcome,
  dialog: &yew::UseStateHandle<
    Option<Dialog>
  >,
  on_resolved: &Callback<Mutation>
) {
  match outcome {
    | EditOutcome::Pending(next) => {
      dialog.set(Some(Dialog::Edit(next)))
    }
    | EditOutcome::Submit { id, patch } => {
      dialog.set(None);
      on_resolved
        .emit(Mutation::Edit { id, patch });
    }
    | EditOutcome::Cancelled => {
      ui_debug("dialog.edit.cancel", "");
      dialog.set(None)
    }
  }
}

fn edit_modal(
  flow: EditFlow,
  dialog: &yew::UseStateHandle<
    Option<Dialog>
  >,
  on_resolved: &Callback<Mutation>
) -> Html {
  let on_input = {
    let dialog = dialog.clone();
    let flow = flow.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      let mut next = flow.clone();
      next.set_value(input.value());
      dialog.set(Some(Dialog::Edit(next)));
    })
  };

  let on_ok = {
    let dialog = dialog.clone();
    let on_resolved = on_resolved.clone();
    let flow = flow.clone();
    Callback::from(move |_: MouseEvent| {
      resolve_edit(
        flow.clone().advance(),
        &dialog,
        &on_resolved
      )
    })
  };

  let on_keydown = {
    let dialog = dialog.clone();
    let on_resolved = on_resolved.clone();
    let flow = flow.clone();
    Callback::from(move |e: KeyboardEvent| {
      let outcome = match e.key().as_str() {
        | "Enter" => flow.clone().advance(),
        | "Escape" => flow.clone().cancel(),
        | _ => return
      };
      e.prevent_default();
      resolve_edit(
        outcome,
        &dialog,
        &on_resolved
      );
    })
  };

  let on_cancel = {
    let dialog = dialog.clone();
    let on_resolved = on_resolved.clone();
    let flow = flow.clone();
    Callback::from(move |_: MouseEvent| {
      resolve_edit(
        flow.clone().cancel(),
        &dialog,
        &on_resolved
      )
    })
  };

  let error = flow.error.clone();
  let input_id = format!(
    "editInput-{}",
    flow.id
  );

  modal(
    "Edit task",
    html! {
        <>
            <label class="form-label" for={input_id.clone()}>
                { flow.step.prompt() }
            </label>
            <input
                id={input_id}
                class={classes!("form-control", error.is_some().then_some("is-invalid"))}
                type="text"
                value={flow.value().to_string()}
                oninput={on_input}
                onkeydown={on_keydown}
            />
            if let Some(error) = error {
                <div class="invalid-feedback">{ error.to_string() }</div>
            }
        </>
    },
    html! {
        <>
            <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                { "Cancel" }
            </button>
            <button type="button" class="btn btn-primary" onclick={on_ok}>
                { "OK" }
            </button>
        </>
    }
  )
}

fn modal(
  title: &str,
  body: Html,
  footer: Html
) -> Html {
  html! {
      <>
          <div class="modal d-block" tabindex="-1" role="dialog" aria-modal="true">
              <div class="modal-dialog modal-dialog-centered">
                  <div class="modal-content">
                      <div class="modal-header">
                          <h5 class="modal-title">{ title.to_string() }</h5>
                      </div>
                      <div class="modal-body">{ body }</div>
                      <div class="modal-footer">{ footer }</div>
                  </div>
              </div>
          </div>
          <div class="modal-backdrop show"></div>
      </>
  }
}
