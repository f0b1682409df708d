//! Delete Analysis Modal Component
//!
//! Confirmation dialog with a choice of exit animation for the card.

use leptos::prelude::*;

use crate::animation::DeleteAnimation;

/// Card awaiting confirmation
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDelete {
    pub analysis_id: u32,
    pub name: String,
}

/// Dialog state. Every open starts from the configured animation.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteDialog {
    pending: Option<PendingDelete>,
    animation: DeleteAnimation,
    default_animation: DeleteAnimation,
}

impl DeleteDialog {
    pub fn new(default_animation: DeleteAnimation) -> Self {
        Self { pending: None, animation: default_animation, default_animation }
    }

    pub fn open(&mut self, target: PendingDelete) {
        self.pending = Some(target);
        self.animation = self.default_animation;
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn name(&self) -> String {
        self.pending.as_ref().map(|p| p.name.clone()).unwrap_or_default()
    }

    pub fn animation(&self) -> DeleteAnimation {
        self.animation
    }

    pub fn choose(&mut self, animation: DeleteAnimation) {
        self.animation = animation;
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Close and hand back what to delete and how
    pub fn confirm(&mut self) -> Option<(u32, DeleteAnimation)> {
        self.pending.take().map(|p| (p.analysis_id, self.animation))
    }
}

#[component]
pub fn DeleteAnalysisModal(
    dialog: RwSignal<DeleteDialog>,
    /// Runs with the chosen animation after the dialog closes
    #[prop(into)]
    on_confirm: Callback<(u32, DeleteAnimation)>,
) -> impl IntoView {
    let close = move || dialog.update(|d| d.cancel());

    view! {
        <Show when=move || dialog.with(|d| d.is_open())>
            <div class="delete-confirmation-modal">
                <div class="modal-backdrop delete-backdrop" on:click=move |_| close()></div>
                <div class="modal-content glass-card delete-dialog">
                    <h4 class="gradient-text mb-3">
                        <i class="bi bi-exclamation-triangle me-2"></i>
                        "Confirm Deletion"
                    </h4>
                    <p class="mb-2">
                        "Are you sure you want to delete \""
                        <strong>{move || dialog.with(|d| d.name())}</strong>
                        "\"?"
                    </p>
                    <p class="text-muted mb-4">"This action cannot be undone and will remove all objects and data."</p>

                    <div class="animation-selector mb-4">
                        <label class="form-label fw-semibold" for="animationType">"Choose delete animation:"</label>
                        <select
                            class="form-select"
                            id="animationType"
                            prop:value=move || dialog.with(|d| d.animation().as_str())
                            on:change=move |ev| {
                                let chosen = DeleteAnimation::parse(&event_target_value(&ev));
                                dialog.update(|d| d.choose(chosen));
                            }
                        >
                            {DeleteAnimation::ALL
                                .iter()
                                .map(|a| {
                                    let a = *a;
                                    view! {
                                        <option
                                            value=a.as_str()
                                            selected=move || dialog.with(|d| d.animation() == a)
                                        >
                                            {a.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="modal-actions">
                        <button type="button" class="btn btn-secondary cancel-delete" on:click=move |_| close()>
                            <i class="bi bi-x me-1"></i>
                            "Cancel"
                        </button>
                        <button
                            type="button"
                            class="btn btn-danger confirm-delete"
                            on:click=move |_| {
                                let confirmed = dialog.try_update(|d| d.confirm()).flatten();
                                if let Some(choice) = confirmed {
                                    on_confirm.run(choice);
                                }
                            }
                        >
                            <i class="bi bi-trash me-1"></i>
                            "Delete with Animation"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(id: u32) -> PendingDelete {
        PendingDelete { analysis_id: id, name: format!("Analysis {}", id) }
    }

    #[test]
    fn test_reopening_starts_from_default_animation() {
        let mut dialog = DeleteDialog::new(DeleteAnimation::Zoom);
        dialog.open(target(1));
        dialog.choose(DeleteAnimation::Fall);
        assert_eq!(dialog.confirm(), Some((1, DeleteAnimation::Fall)));
        assert!(!dialog.is_open());

        dialog.open(target(2));
        assert_eq!(dialog.animation(), DeleteAnimation::Zoom);
        assert_eq!(dialog.confirm(), Some((2, DeleteAnimation::Zoom)));
    }

    #[test]
    fn test_cancel_confirms_nothing() {
        let mut dialog = DeleteDialog::new(DeleteAnimation::Shredder);
        dialog.open(target(3));
        assert_eq!(dialog.name(), "Analysis 3");
        dialog.choose(DeleteAnimation::Slide);
        dialog.cancel();
        assert_eq!(dialog.confirm(), None);

        dialog.open(target(4));
        assert_eq!(dialog.animation(), DeleteAnimation::Shredder);
    }
}
