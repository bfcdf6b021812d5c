use crate::{
    clipboard,
    domain::{AddOutcome, Category},
    storage,
};

use super::{App, UiMode};

impl App {
    pub(super) fn persist_customs(&mut self) {
        let _ = storage::save_custom_moods(&mut self.store, &self.picker.customs);
    }

    pub(super) fn persist_category(&mut self) {
        let _ = storage::save_category(&mut self.store, self.picker.current_category);
    }

    pub(super) fn persist_last_mood(&mut self) {
        if let Some(mood) = self.picker.last_mood.clone() {
            let _ = storage::save_last_mood(&mut self.store, &mood);
        }
    }

    pub(super) fn refresh_mood(&mut self) {
        self.picker.pick();
        self.persist_last_mood();
        self.render_needed = true;
    }

    /// Switching categories also rolls a fresh mood, like tapping a tab.
    pub(super) fn set_category(&mut self, category: Category) {
        self.picker.current_category = category;
        self.selected_custom = 0;
        self.persist_category();
        self.refresh_mood();
    }

    pub(super) fn custom_len(&self) -> usize {
        self.picker
            .customs
            .list(self.picker.current_category)
            .map_or(0, |list| list.len())
    }

    pub(super) fn submit_input(&mut self) {
        let category = self.picker.current_category;
        let text = self.input.clone();

        match self.picker.add_custom(category, &text) {
            AddOutcome::Added => {
                self.input.clear();
                self.persist_customs();
                self.selected_custom = self.custom_len().saturating_sub(1);
                self.set_feedback("added");
            }
            AddOutcome::Duplicate => self.set_feedback("already on the list"),
            AddOutcome::Empty => self.set_feedback("nothing to add"),
            AddOutcome::ReadOnly => self.set_feedback("“All” is view-only"),
        }
        self.render_needed = true;
    }

    pub(super) fn delete_selected_custom(&mut self) {
        let category = self.picker.current_category;

        if self.picker.remove_custom(category, self.selected_custom) {
            self.persist_customs();
            let len = self.custom_len();
            if self.selected_custom >= len && self.selected_custom > 0 {
                self.selected_custom -= 1;
            }
            self.set_feedback("removed");
        }
    }

    pub(super) fn start_compose(&mut self) {
        if self.picker.current_category == Category::All {
            self.set_feedback("pick Calm, Hype, or Focus to add moods");
            return;
        }
        self.ui_mode = UiMode::Compose;
        self.render_needed = true;
    }

    pub(super) fn cancel_compose(&mut self) {
        self.input.clear();
        self.ui_mode = UiMode::Main;
        self.render_needed = true;
    }

    pub(super) fn copy_current_mood(&mut self) {
        let Some(mood) = self.picker.last_mood.clone() else {
            return;
        };

        match clipboard::copy(&mood) {
            Ok(()) => self.set_feedback("copied"),
            Err(e) => self.set_feedback(format!("copy failed: {}", e)),
        }
    }
}
