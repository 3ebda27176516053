use crate::errors::AppError;
use crate::models::SubscriptionRecord;
use crate::store::RecordStore;

/// The in-progress record plus the index it is editing, if any. The draft is
/// the only place a partially-filled record ever exists.
#[derive(Default)]
pub struct FormState {
    draft: SubscriptionRecord,
    edit_index: Option<usize>,
}

impl FormState {
    pub fn draft(&self) -> &SubscriptionRecord {
        &self.draft
    }

    pub fn edit_index(&self) -> Option<usize> {
        self.edit_index
    }

    pub fn set_field(&mut self, field: &str, value: String) -> Result<(), AppError> {
        match field {
            "name" => self.draft.name = value,
            "phone" => self.draft.phone = value,
            "plan" => self.draft.plan = value,
            "price" => self.draft.price = value,
            "start" => self.draft.start = value,
            "end" => self.draft.end = value,
            other => return Err(AppError::bad_request(format!("unknown field '{other}'"))),
        }
        Ok(())
    }

    /// Moves the draft into the store: update in place when an edit target is
    /// set, append otherwise. The draft resets afterwards. A draft with any
    /// empty field is rejected and nothing changes.
    pub fn submit(&mut self, store: &mut RecordStore) -> Result<(), AppError> {
        if self.draft.has_empty_field() {
            return Err(AppError::bad_request("Please fill all fields"));
        }

        // The edit target is consumed even when the update fails on a stale
        // index.
        match self.edit_index.take() {
            Some(index) => store.update(index, self.draft.clone())?,
            None => store.add(self.draft.clone()),
        }
        self.draft = SubscriptionRecord::default();
        Ok(())
    }

    /// Copies the stored record at `index` into the draft and switches the
    /// form into edit mode.
    pub fn begin_edit(&mut self, index: usize, store: &RecordStore) -> Result<(), AppError> {
        let record = store
            .get(index)
            .ok_or_else(|| AppError::not_found(format!("no record at index {index}")))?;
        self.draft = record.clone();
        self.edit_index = Some(index);
        Ok(())
    }

    /// Called on every delete: the previous edit target may now name a
    /// different record or be out of range.
    pub fn clear_edit_target(&mut self) {
        self.edit_index = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStorage;

    fn store() -> RecordStore {
        RecordStore::new(Box::new(MemoryStorage::default()))
    }

    fn fill(form: &mut FormState, name: &str, plan: &str) {
        for (field, value) in [
            ("name", name),
            ("phone", "555-0100"),
            ("plan", plan),
            ("price", "10"),
            ("start", "2024-01-01"),
            ("end", "2024-02-01"),
        ] {
            form.set_field(field, value.to_string()).unwrap();
        }
    }

    #[test]
    fn submit_in_create_mode_appends_draft() {
        let mut store = store();
        let mut form = FormState::default();
        fill(&mut form, "Alice", "VPN");
        let draft = form.draft().clone();

        form.submit(&mut store).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0), Some(&draft));
        assert_eq!(form.draft(), &SubscriptionRecord::default());
        assert_eq!(form.edit_index(), None);
    }

    #[test]
    fn submit_with_empty_field_changes_nothing() {
        let mut store = store();
        let mut form = FormState::default();
        fill(&mut form, "Alice", "VPN");
        form.set_field("phone", String::new()).unwrap();

        let err = form.submit(&mut store).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
        assert!(store.is_empty());
        assert_eq!(form.draft().name, "Alice");
    }

    #[test]
    fn edit_then_unmodified_submit_round_trips() {
        let mut store = store();
        let mut form = FormState::default();
        fill(&mut form, "Alice", "VPN");
        form.submit(&mut store).unwrap();
        fill(&mut form, "Bob", "Zoom");
        form.submit(&mut store).unwrap();
        let before: Vec<_> = store.records().to_vec();

        form.begin_edit(1, &store).unwrap();
        assert_eq!(form.edit_index(), Some(1));
        form.submit(&mut store).unwrap();

        assert_eq!(store.records(), &before[..]);
        assert_eq!(form.edit_index(), None);
    }

    #[test]
    fn edit_mode_submit_replaces_in_place() {
        let mut store = store();
        let mut form = FormState::default();
        fill(&mut form, "Alice", "VPN");
        form.submit(&mut store).unwrap();

        form.begin_edit(0, &store).unwrap();
        form.set_field("name", "Alicia".to_string()).unwrap();
        form.submit(&mut store).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0).unwrap().name, "Alicia");
        assert_eq!(form.edit_index(), None);
    }

    #[test]
    fn stale_edit_target_is_rejected_and_cleared() {
        let mut store = store();
        let mut form = FormState::default();
        fill(&mut form, "Alice", "VPN");
        form.submit(&mut store).unwrap();

        form.begin_edit(0, &store).unwrap();
        store.delete(0).unwrap();
        fill(&mut form, "Alice", "VPN");

        let err = form.submit(&mut store).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::NOT_FOUND);
        assert_eq!(form.edit_index(), None);
    }

    #[test]
    fn clear_edit_target_applies_regardless_of_deleted_index() {
        let mut store = store();
        let mut form = FormState::default();
        fill(&mut form, "Alice", "VPN");
        form.submit(&mut store).unwrap();
        fill(&mut form, "Bob", "Zoom");
        form.submit(&mut store).unwrap();

        form.begin_edit(0, &store).unwrap();
        store.delete(1).unwrap();
        form.clear_edit_target();
        assert_eq!(form.edit_index(), None);
    }

    #[test]
    fn set_field_rejects_unknown_name() {
        let mut form = FormState::default();
        let err = form.set_field("colour", "red".to_string()).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(form.draft(), &SubscriptionRecord::default());
    }
}
