use crate::shared::action::ActionFuture;
use contracts::domain::a001_category::{Category, CategoryDto, CategoryId};
use leptos::prelude::*;
use std::collections::BTreeMap;

/// Two-step delete: the first press asks, the second one deletes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteStep {
    #[default]
    Idle,
    Confirming,
    Deleting,
}

impl DeleteStep {
    /// Next step after the delete button is pressed, and whether the
    /// delete call should start now.
    pub fn press(self) -> (Self, bool) {
        match self {
            Self::Idle => (Self::Confirming, false),
            Self::Confirming => (Self::Deleting, true),
            Self::Deleting => (Self::Deleting, false),
        }
    }

    /// Back out of the confirmation. An in-flight delete cannot be cancelled.
    pub fn cancel(self) -> Self {
        match self {
            Self::Deleting => Self::Deleting,
            _ => Self::Idle,
        }
    }

    pub fn is_confirming(self) -> bool {
        self != Self::Idle
    }
}

/// ViewModel of the category modal. All fields are signals, so it is `Copy`
/// and can be moved into any number of view closures.
#[derive(Clone, Copy)]
pub struct CategoryFormVm {
    pub form: RwSignal<CategoryDto>,
    /// Last saved/loaded values, for the dirty check
    pub initial: RwSignal<CategoryDto>,
    pub editing: RwSignal<Option<Category>>,
    pub errors: RwSignal<BTreeMap<String, String>>,
    pub submitting: RwSignal<bool>,
    pub delete_step: RwSignal<DeleteStep>,
}

impl CategoryFormVm {
    pub fn new(category: Option<Category>) -> Self {
        let dto = category
            .as_ref()
            .map(CategoryDto::from_category)
            .unwrap_or_default();
        Self {
            form: RwSignal::new(dto.clone()),
            initial: RwSignal::new(dto),
            editing: RwSignal::new(category),
            errors: RwSignal::new(BTreeMap::new()),
            submitting: RwSignal::new(false),
            delete_step: RwSignal::new(DeleteStep::Idle),
        }
    }

    pub fn is_edit_mode(&self) -> Signal<bool> {
        let editing = self.editing;
        Signal::derive(move || editing.with(Option::is_some))
    }

    pub fn is_dirty(&self) -> Signal<bool> {
        let form = self.form;
        let initial = self.initial;
        Signal::derive(move || form.with(|f| initial.with(|i| f != i)))
    }

    /// A call is in flight; every action button is disabled.
    pub fn is_busy(&self) -> Signal<bool> {
        let submitting = self.submitting;
        let delete_step = self.delete_step;
        Signal::derive(move || submitting.get() || delete_step.get() == DeleteStep::Deleting)
    }

    pub fn field_error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field).cloned()))
    }

    /// Validate, then hand the form to the caller.
    ///
    /// Failures of `on_submit` are the caller's business; this layer only
    /// waits for it to finish.
    pub fn submit_command(&self, on_submit: Callback<CategoryDto, ActionFuture<()>>) {
        if self.is_busy().get_untracked() {
            return;
        }
        let current = self.form.get_untracked();
        if let Err(errors) = current.validate() {
            log::debug!("Category form rejected: {}", errors);
            self.errors.set(errors.into_map());
            return;
        }
        self.errors.set(BTreeMap::new());

        let this = *self;
        this.submitting.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            on_submit.run(current.normalized()).await;
            // The caller may have closed the modal meanwhile.
            let _ = this.initial.try_set(current);
            let _ = this.submitting.try_set(false);
        });
    }

    /// First call asks for confirmation, second call deletes.
    /// Success closes the modal, failure is logged and the modal stays.
    pub fn delete_command(
        &self,
        on_delete: Callback<CategoryId, ActionFuture<Result<(), String>>>,
        on_close: Callback<()>,
    ) {
        let Some(id) = self.editing.with_untracked(|c| c.as_ref().map(|c| c.id)) else {
            return;
        };
        let (next, fire) = self.delete_step.get_untracked().press();
        self.delete_step.set(next);
        if !fire {
            return;
        }

        let delete_step = self.delete_step;
        wasm_bindgen_futures::spawn_local(async move {
            match on_delete.run(id).await {
                Ok(()) => {
                    log::info!("Category {} deleted", id);
                    let _ = delete_step.try_set(DeleteStep::Idle);
                    on_close.run(());
                }
                Err(e) => {
                    log::error!("Category deletion error: {}", e);
                    let _ = delete_step.try_set(DeleteStep::Idle);
                }
            }
        });
    }

    pub fn cancel_delete(&self) {
        self.delete_step.update(|s| *s = s.cancel());
    }

    /// Close, asking first when there are unsaved edits.
    pub fn cancel_command(&self, on_close: Callback<()>) {
        if self.is_busy().get_untracked() {
            return;
        }
        if self.is_dirty().get_untracked() && !confirm("Are you sure you want to discard your changes?") {
            return;
        }
        on_close.run(());
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|win| win.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_requires_second_press() {
        let (step, fire) = DeleteStep::Idle.press();
        assert_eq!(step, DeleteStep::Confirming);
        assert!(!fire);

        let (step, fire) = step.press();
        assert_eq!(step, DeleteStep::Deleting);
        assert!(fire);
    }

    #[test]
    fn test_press_while_deleting_does_not_fire_again() {
        assert_eq!(DeleteStep::Deleting.press(), (DeleteStep::Deleting, false));
    }

    #[test]
    fn test_cancel_confirmation() {
        assert_eq!(DeleteStep::Confirming.cancel(), DeleteStep::Idle);
        assert_eq!(DeleteStep::Idle.cancel(), DeleteStep::Idle);
        assert_eq!(DeleteStep::Deleting.cancel(), DeleteStep::Deleting);
    }

    #[test]
    fn test_confirm_panel_visibility() {
        assert!(!DeleteStep::Idle.is_confirming());
        assert!(DeleteStep::Confirming.is_confirming());
        assert!(DeleteStep::Deleting.is_confirming());
    }
}
