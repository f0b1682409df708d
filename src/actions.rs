//! User Actions
//!
//! Page-level operations: call the server, update the local ordered model,
//! and tell the user how it went. Collaborators are injected so every path
//! can run against fakes.

use std::cell::RefCell;
use std::collections::HashSet;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_dragdrop::{DropPosition, Keyed, OrderedList};

use crate::animation::ROW_EXIT_MS;
use crate::api::RemoteApi;
use crate::error::{UiError, UiResult};
use crate::models::{Analysis, AnalysisDraft, ComparedObject, Field, FieldDraft};
use crate::notify::{Notifier, Severity};

/// Info toast shown while a duplicate is in flight
const DUPLICATING_MS: u32 = 2000;

// ========================
// List Handles
// ========================

/// Mutable access to an ordered model owned elsewhere
pub trait ListHandle<T: Keyed> {
    /// `None` when the backing storage is gone (component unmounted)
    fn update_list<R>(&self, f: impl FnOnce(&mut OrderedList<T>) -> R) -> Option<R>;

    fn with_list<R>(&self, f: impl FnOnce(&OrderedList<T>) -> R) -> Option<R>;

    /// Drop an item the server already deleted
    fn remove_item(&self, id: u32) {
        self.update_list(|list| {
            list.remove(id);
        });
    }
}

impl<T> ListHandle<T> for RwSignal<OrderedList<T>>
where
    T: Keyed + Send + Sync + 'static,
{
    fn update_list<R>(&self, f: impl FnOnce(&mut OrderedList<T>) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn with_list<R>(&self, f: impl FnOnce(&OrderedList<T>) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

impl<T: Keyed> ListHandle<T> for RefCell<OrderedList<T>> {
    fn update_list<R>(&self, f: impl FnOnce(&mut OrderedList<T>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn with_list<R>(&self, f: impl FnOnce(&OrderedList<T>) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}

/// Signal-backed list whose rows play an exit transition before they leave
pub struct AnimatedList<T: Send + Sync + 'static> {
    pub list: RwSignal<OrderedList<T>>,
    /// Rows currently fading out
    pub exiting: RwSignal<HashSet<u32>>,
    /// Reload the page once the last row is gone
    pub reload_when_empty: bool,
}

impl<T: Send + Sync + 'static> Clone for AnimatedList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for AnimatedList<T> {}

impl<T: Keyed + Send + Sync + 'static> AnimatedList<T> {
    pub fn new(items: Vec<T>, reload_when_empty: bool) -> Self {
        Self {
            list: RwSignal::new(OrderedList::new(items)),
            exiting: RwSignal::new(HashSet::new()),
            reload_when_empty,
        }
    }

    pub fn is_exiting(&self, id: u32) -> bool {
        self.exiting.with(|set| set.contains(&id))
    }
}

impl<T: Keyed + Send + Sync + 'static> ListHandle<T> for AnimatedList<T> {
    fn update_list<R>(&self, f: impl FnOnce(&mut OrderedList<T>) -> R) -> Option<R> {
        self.list.try_update(f)
    }

    fn with_list<R>(&self, f: impl FnOnce(&OrderedList<T>) -> R) -> Option<R> {
        self.list.try_with_untracked(f)
    }

    fn remove_item(&self, id: u32) {
        let handle = *self;
        handle.exiting.update(|set| {
            set.insert(id);
        });
        Timeout::new(ROW_EXIT_MS, move || {
            let emptied = handle.list.try_update(|list| {
                list.remove(id);
                list.is_empty()
            });
            handle.exiting.try_update(|set| set.remove(&id));
            if emptied == Some(true) && handle.reload_when_empty {
                reload_page();
            }
        })
        .forget();
    }
}

// ========================
// Browser Helpers
// ========================

pub fn navigate(url: &str) {
    let Some(window) = web_sys::window() else { return };
    if let Err(e) = window.location().set_href(url) {
        log::error!("[NAV] Could not navigate to {}: {:?}", url, e);
    }
}

pub fn navigate_after(url: String, delay_ms: u32) {
    Timeout::new(delay_ms, move || navigate(&url)).forget();
}

pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else { return };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        log::error!("[NAV] Could not open {}: {:?}", url, e);
    }
}

pub fn reload_page() {
    let Some(window) = web_sys::window() else { return };
    if let Err(e) = window.location().reload() {
        log::error!("[NAV] Reload failed: {:?}", e);
    }
}

/// Route a failure to the user. Never propagates further.
fn report<N: Notifier, T>(notifier: &N, result: UiResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("[ACTION] {}", e);
            notifier.notify(e.message(), e.severity(), None);
            None
        }
    }
}

// ========================
// Setup Page: Fields
// ========================

pub struct FieldActions<'a, A, N, L> {
    pub analysis_id: u32,
    api: &'a A,
    notifier: &'a N,
    fields: &'a L,
}

impl<'a, A, N, L> FieldActions<'a, A, N, L>
where
    A: RemoteApi,
    N: Notifier,
    L: ListHandle<Field>,
{
    pub fn new(analysis_id: u32, api: &'a A, notifier: &'a N, fields: &'a L) -> Self {
        Self { analysis_id, api, notifier, fields }
    }

    /// Create a field and append it. Returns the new id on success.
    pub async fn add(&self, draft: &FieldDraft) -> Option<u32> {
        let result = self.try_add(draft).await;
        let id = report(self.notifier, result)?;
        self.notifier.notify("Field added successfully!", Severity::Success, None);
        Some(id)
    }

    async fn try_add(&self, draft: &FieldDraft) -> UiResult<u32> {
        if draft.field_name.trim().is_empty() {
            return Err(UiError::validation("Field name is required"));
        }
        let mut draft = draft.clone();
        if !draft.field_type.has_unit() {
            draft.field_unit.clear();
        }
        let id = self.api.add_field(self.analysis_id, &draft).await?;
        log::info!("[FIELDS] Added field {} to analysis {}", id, self.analysis_id);
        let appended = self.fields.update_list(|list| {
            let order = list.len() as i32;
            list.push(Field::from_draft(id, &draft, order))
        });
        if appended == Some(false) {
            return Err(UiError::network("Server returned a duplicate field id"));
        }
        Ok(id)
    }

    /// Delete on the server, then drop the row. A failure leaves the row in place.
    pub async fn delete(&self, field_id: u32) -> bool {
        let result = self.api.delete_field(self.analysis_id, field_id).await;
        if report(self.notifier, result).is_none() {
            return false;
        }
        self.fields.remove_item(field_id);
        self.notifier.notify("Field deleted successfully!", Severity::Success, None);
        true
    }

    /// Apply a drop locally. Returns the new id order if anything moved.
    pub fn drop_field(&self, dragged: u32, target: u32, position: DropPosition) -> Option<Vec<u32>> {
        let changed = self
            .fields
            .update_list(|list| list.commit_drop(dragged, target, position))?;
        if !changed {
            return None;
        }
        log::debug!("[ORDER] Field {} dropped {:?} field {}", dragged, position, target);
        self.fields.with_list(|list| list.ids())
    }

    /// Send the full order. Failures are logged; the local order stays as is.
    pub async fn persist_order(&self, field_ids: &[u32]) {
        match self.api.reorder_fields(self.analysis_id, field_ids).await {
            Ok(()) => log::debug!("[ORDER] Saved order {:?}", field_ids),
            Err(e) => log::error!("[ORDER] Error updating field order: {}", e),
        }
    }

    /// Drop and persist in one go
    pub async fn reorder(&self, dragged: u32, target: u32, position: DropPosition) -> bool {
        match self.drop_field(dragged, target, position) {
            Some(ids) => {
                self.persist_order(&ids).await;
                true
            }
            None => false,
        }
    }
}

// ========================
// View Page: Objects
// ========================

pub struct ObjectActions<'a, A, N, L> {
    pub analysis_id: u32,
    api: &'a A,
    notifier: &'a N,
    objects: &'a L,
}

impl<'a, A, N, L> ObjectActions<'a, A, N, L>
where
    A: RemoteApi,
    N: Notifier,
    L: ListHandle<ComparedObject>,
{
    pub fn new(analysis_id: u32, api: &'a A, notifier: &'a N, objects: &'a L) -> Self {
        Self { analysis_id, api, notifier, objects }
    }

    pub async fn delete(&self, object_id: u32) -> bool {
        let result = self.api.delete_object(self.analysis_id, object_id).await;
        if report(self.notifier, result).is_none() {
            return false;
        }
        self.objects.remove_item(object_id);
        self.notifier.notify("Object deleted successfully!", Severity::Success, None);
        true
    }
}

// ========================
// Dashboard: Analyses
// ========================

pub struct AnalysisActions<'a, A, N> {
    api: &'a A,
    notifier: &'a N,
}

impl<'a, A: RemoteApi, N: Notifier> AnalysisActions<'a, A, N> {
    pub fn new(api: &'a A, notifier: &'a N) -> Self {
        Self { api, notifier }
    }

    /// Returns the new analysis id
    pub async fn create(&self, draft: &AnalysisDraft) -> Option<u32> {
        let result = if draft.name.trim().is_empty() {
            Err(UiError::validation("Analysis name is required"))
        } else {
            self.api.create_analysis(draft).await
        };
        let id = report(self.notifier, result)?;
        log::info!("[ANALYSIS] Created analysis {}", id);
        self.notifier.notify("Analysis created successfully!", Severity::Success, None);
        Some(id)
    }

    /// Delete and drop the card. Returns whether the server accepted it.
    pub async fn delete<L: ListHandle<Analysis>>(&self, analysis_id: u32, cards: &L) -> bool {
        match self.api.delete_analysis(analysis_id).await {
            Ok(message) => {
                cards.remove_item(analysis_id);
                let message = message.unwrap_or_else(|| "Analysis deleted successfully!".to_string());
                self.notifier.notify(&message, Severity::Success, None);
                true
            }
            Err(e) => {
                log::error!("[ANALYSIS] Delete error: {}", e);
                self.notifier.notify(
                    &format!("Error deleting analysis: {}", e.message()),
                    Severity::Danger,
                    None,
                );
                false
            }
        }
    }

    /// Returns the id of the copy
    pub async fn duplicate(&self, analysis_id: u32) -> Option<u32> {
        self.notifier.notify("Duplicating analysis...", Severity::Info, Some(DUPLICATING_MS));
        match self.api.duplicate_analysis(analysis_id).await {
            Ok((new_id, message)) => {
                let message = message.unwrap_or_else(|| "Analysis duplicated successfully!".to_string());
                self.notifier.notify(&message, Severity::Success, None);
                Some(new_id)
            }
            Err(e) => {
                self.notifier.notify(
                    &format!("Error duplicating analysis: {}", e.message()),
                    Severity::Danger,
                    None,
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::FakeApi;
    use crate::models::FieldType;
    use crate::notify::testing::RecordingNotifier;

    fn field(id: u32, name: &str) -> Field {
        Field {
            id,
            field_name: name.to_string(),
            field_type: FieldType::Text,
            field_unit: None,
            is_required: false,
            display_order: id as i32,
        }
    }

    fn fields(ids: &[u32]) -> RefCell<OrderedList<Field>> {
        RefCell::new(OrderedList::new(ids.iter().map(|&id| field(id, &format!("f{}", id))).collect()))
    }

    fn object(id: u32) -> ComparedObject {
        ComparedObject {
            id,
            object_name: format!("obj{}", id),
            brand: None,
            image_url: None,
            values: Default::default(),
        }
    }

    fn analysis(id: u32) -> Analysis {
        Analysis {
            id,
            name: format!("a{}", id),
            description: None,
            category: None,
            object_count: None,
            created_at: None,
        }
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_field_and_notifies_once() {
        let api = FakeApi::failing("Field not found");
        let notifier = RecordingNotifier::default();
        let list = fields(&[1, 2, 3]);
        let actions = FieldActions::new(7, &api, &notifier, &list);

        assert!(!actions.delete(2).await);
        assert!(list.borrow().contains(2));
        assert_eq!(notifier.count(Severity::Danger), 1);
        assert_eq!(notifier.sent.borrow().len(), 1);
        assert_eq!(notifier.messages(), vec!["Field not found"]);
    }

    #[tokio::test]
    async fn test_delete_field_removes_row() {
        let api = FakeApi::default();
        let notifier = RecordingNotifier::default();
        let list = fields(&[1, 2, 3]);
        let actions = FieldActions::new(7, &api, &notifier, &list);

        assert!(actions.delete(2).await);
        assert_eq!(list.borrow().ids(), vec![1, 3]);
        assert_eq!(notifier.messages(), vec!["Field deleted successfully!"]);
        assert_eq!(api.calls.borrow().as_slice(), ["delete_field 7 2"]);
    }

    #[tokio::test]
    async fn test_add_field_appends_with_server_id() {
        let api = FakeApi::default();
        let notifier = RecordingNotifier::default();
        let list = fields(&[1]);
        let actions = FieldActions::new(7, &api, &notifier, &list);

        let draft = FieldDraft {
            field_name: "Weight".to_string(),
            field_type: FieldType::Decimal,
            field_unit: "kg".to_string(),
            is_required: true,
        };
        assert_eq!(actions.add(&draft).await, Some(100));
        let list = list.borrow();
        assert_eq!(list.ids(), vec![1, 100]);
        let added = list.get(100).unwrap();
        assert_eq!(added.unit(), Some("kg"));
        assert!(added.is_required);
        assert_eq!(notifier.count(Severity::Success), 1);
    }

    #[tokio::test]
    async fn test_add_field_with_duplicate_server_id_is_an_error() {
        let api = FakeApi::default();
        let notifier = RecordingNotifier::default();
        let list = fields(&[100]);
        let actions = FieldActions::new(7, &api, &notifier, &list);

        let draft = FieldDraft { field_name: "Weight".to_string(), ..Default::default() };
        assert_eq!(actions.add(&draft).await, None);
        assert_eq!(list.borrow().ids(), vec![100]);
        assert_eq!(notifier.count(Severity::Success), 0);
        assert_eq!(notifier.count(Severity::Danger), 1);
        assert_eq!(notifier.messages(), vec!["Server returned a duplicate field id"]);
    }

    #[tokio::test]
    async fn test_add_field_drops_unit_for_unitless_types() {
        let api = FakeApi::default();
        let notifier = RecordingNotifier::default();
        let list = fields(&[]);
        let actions = FieldActions::new(7, &api, &notifier, &list);

        let draft = FieldDraft {
            field_name: "Waterproof".to_string(),
            field_type: FieldType::Boolean,
            field_unit: "oz".to_string(),
            is_required: false,
        };
        let id = actions.add(&draft).await.unwrap();
        assert_eq!(list.borrow().get(id).unwrap().unit(), None);
    }

    #[tokio::test]
    async fn test_add_field_requires_name() {
        let api = FakeApi::default();
        let notifier = RecordingNotifier::default();
        let list = fields(&[1]);
        let actions = FieldActions::new(7, &api, &notifier, &list);

        let draft = FieldDraft { field_name: "   ".to_string(), ..Default::default() };
        assert_eq!(actions.add(&draft).await, None);
        assert!(api.calls.borrow().is_empty());
        assert_eq!(notifier.count(Severity::Warning), 1);
        assert_eq!(list.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_reorder_persists_full_sequence() {
        let api = FakeApi::default();
        let notifier = RecordingNotifier::default();
        let list = fields(&[1, 2, 3]);
        let actions = FieldActions::new(7, &api, &notifier, &list);

        assert!(actions.reorder(3, 1, DropPosition::Before).await);
        assert_eq!(list.borrow().ids(), vec![3, 1, 2]);
        assert_eq!(api.reorders.borrow().as_slice(), [vec![3, 1, 2]]);

        // dropping onto itself sends nothing
        assert!(!actions.reorder(2, 2, DropPosition::After).await);
        assert_eq!(api.reorders.borrow().len(), 1);
        assert!(notifier.sent.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_failed_persist_keeps_local_order_and_logs() {
        let _ = rolling_logger::init(log::LevelFilter::Debug, 50);
        let api = FakeApi::failing("database is locked");
        let notifier = RecordingNotifier::default();
        let list = fields(&[1, 2, 3]);
        let actions = FieldActions::new(7, &api, &notifier, &list);

        assert!(actions.reorder(1, 3, DropPosition::After).await);
        assert_eq!(list.borrow().ids(), vec![2, 3, 1]);
        assert!(notifier.sent.borrow().is_empty());
        assert!(rolling_logger::recent()
            .iter()
            .any(|line| line.contains("Error updating field order") && line.contains("database is locked")));
    }

    #[tokio::test]
    async fn test_delete_object() {
        let api = FakeApi::default();
        let notifier = RecordingNotifier::default();
        let list = RefCell::new(OrderedList::new(vec![object(1), object(2)]));
        let actions = ObjectActions::new(3, &api, &notifier, &list);

        assert!(actions.delete(1).await);
        assert_eq!(list.borrow().ids(), vec![2]);
        assert_eq!(notifier.messages(), vec!["Object deleted successfully!"]);

        let failing = FakeApi::failing("Object not found");
        let actions = ObjectActions::new(3, &failing, &notifier, &list);
        assert!(!actions.delete(2).await);
        assert_eq!(list.borrow().ids(), vec![2]);
        assert_eq!(notifier.count(Severity::Danger), 1);
    }

    #[tokio::test]
    async fn test_delete_analysis_messages() {
        let notifier = RecordingNotifier::default();
        let cards = RefCell::new(OrderedList::new(vec![analysis(1), analysis(2)]));

        let failing = FakeApi::failing("Analysis not found");
        assert!(!AnalysisActions::new(&failing, &notifier).delete(1, &cards).await);
        assert_eq!(cards.borrow().len(), 2);
        assert_eq!(notifier.messages(), vec!["Error deleting analysis: Analysis not found"]);

        let api = FakeApi::default();
        assert!(AnalysisActions::new(&api, &notifier).delete(1, &cards).await);
        assert_eq!(cards.borrow().ids(), vec![2]);
        assert_eq!(notifier.messages()[1], "Analysis deleted successfully");
    }

    #[tokio::test]
    async fn test_duplicate_analysis() {
        let api = FakeApi::default();
        let notifier = RecordingNotifier::default();
        assert_eq!(AnalysisActions::new(&api, &notifier).duplicate(4).await, Some(100));
        let sent = notifier.sent.borrow();
        assert_eq!(sent[0], ("Duplicating analysis...".to_string(), Severity::Info, Some(2000)));
        assert_eq!(sent[1].0, "Analysis duplicated successfully!");

        let failing = FakeApi::failing("boom");
        let notifier = RecordingNotifier::default();
        assert_eq!(AnalysisActions::new(&failing, &notifier).duplicate(4).await, None);
        assert_eq!(notifier.messages()[1], "Error duplicating analysis: boom");
    }

    #[tokio::test]
    async fn test_create_analysis() {
        let api = FakeApi::default();
        let notifier = RecordingNotifier::default();
        let actions = AnalysisActions::new(&api, &notifier);

        let blank = AnalysisDraft::default();
        assert_eq!(actions.create(&blank).await, None);
        assert_eq!(notifier.count(Severity::Warning), 1);

        let draft = AnalysisDraft { name: "Laptops".to_string(), ..Default::default() };
        assert_eq!(actions.create(&draft).await, Some(100));
        assert_eq!(notifier.messages()[1], "Analysis created successfully!");
    }
}
