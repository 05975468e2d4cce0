//! Submit-button state for the post editor while a submission is in flight.

use crate::domain::types::PostIntent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub intent: PostIntent,
    pub idle_label: &'static str,
    pub pending_label: &'static str,
    /// Set while a submission carrying this button's intent is in flight.
    pub busy: bool,
}

impl SubmitButton {
    fn new(intent: PostIntent, pending: Option<PostIntent>) -> Self {
        let (idle_label, pending_label) = match intent {
            PostIntent::Create => ("Create Post", "Creating..."),
            PostIntent::Update => ("Update Post", "Updating..."),
            PostIntent::Delete => ("Delete Post", "Deleting..."),
        };
        Self {
            intent,
            idle_label,
            pending_label,
            busy: pending == Some(intent),
        }
    }

    pub fn value(&self) -> &'static str {
        self.intent.as_str()
    }

    pub fn label(&self) -> &'static str {
        if self.busy {
            self.pending_label
        } else {
            self.idle_label
        }
    }

    pub fn disabled(&self) -> bool {
        self.busy
    }
}

/// The editor's buttons: a primary create/update button and, for stored posts, a delete button.
///
/// Pages are rendered idle (`pending: None`). Each button carries its `pending_label` into the
/// markup, and the editor's submit script swaps it in and disables the button that was pressed.
/// A non-idle `pending` renders the same state server-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostEditorButtons {
    pub primary: SubmitButton,
    pub delete: Option<SubmitButton>,
}

impl PostEditorButtons {
    pub fn new(is_new_post: bool, pending: Option<PostIntent>) -> Self {
        if is_new_post {
            Self {
                primary: SubmitButton::new(PostIntent::Create, pending),
                delete: None,
            }
        } else {
            Self {
                primary: SubmitButton::new(PostIntent::Update, pending),
                delete: Some(SubmitButton::new(PostIntent::Delete, pending)),
            }
        }
    }

    pub fn is_creating(&self) -> bool {
        self.primary.intent == PostIntent::Create && self.primary.busy
    }

    pub fn is_updating(&self) -> bool {
        self.primary.intent == PostIntent::Update && self.primary.busy
    }

    pub fn is_deleting(&self) -> bool {
        self.delete.as_ref().is_some_and(|button| button.busy)
    }
}
