#[cfg(test)]
#[path = "saved_test.rs"]
mod saved_test;

use std::collections::BTreeSet;

/// Which jobs the signed-in user has saved, shared across list and detail
/// pages so save toggles stay consistent everywhere.
#[derive(Clone, Debug, Default)]
pub struct SavedJobsState {
    pub ids: BTreeSet<String>,
    /// False until the first `/api/saved-jobs` fetch lands.
    pub loaded: bool,
}

impl SavedJobsState {
    /// Replace the set from a full fetch.
    pub fn set_all<I: IntoIterator<Item = String>>(&mut self, ids: I) {
        self.ids = ids.into_iter().collect();
        self.loaded = true;
    }

    pub fn mark_saved(&mut self, id: &str) {
        self.ids.insert(id.to_owned());
    }

    pub fn mark_unsaved(&mut self, id: &str) {
        self.ids.remove(id);
    }

    #[must_use]
    pub fn is_saved(&self, id: &str) -> bool {
        self.ids.contains(id)
    }
}
