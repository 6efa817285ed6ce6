pub mod auth_guard;
pub mod content_placeholder;
pub mod delete_confirm_dialog;
pub mod footer;
pub mod header;
pub mod loading_spinner;
pub mod ongoing_project_dialog;
pub mod project_dialog;
pub mod review_dialog;
pub mod star_rating;
pub mod stats_card;
pub mod toast;

/// Whether an entity dialog creates a new record or edits an existing one.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DialogMode {
    Add,
    Edit,
}

impl DialogMode {
    pub fn title(&self, noun: &str) -> String {
        match self {
            DialogMode::Add => format!("Add {noun}"),
            DialogMode::Edit => format!("Edit {noun}"),
        }
    }

    pub fn submit_label(&self, submitting: bool) -> &'static str {
        match (self, submitting) {
            (DialogMode::Add, false) => "Create",
            (DialogMode::Add, true) => "Creating...",
            (DialogMode::Edit, false) => "Save Changes",
            (DialogMode::Edit, true) => "Saving...",
        }
    }
}
