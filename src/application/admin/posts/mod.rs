mod commands;
mod pending;
mod queries;
mod service;
pub mod types;
mod validation;

pub use pending::{PostEditorButtons, SubmitButton};
pub use service::*;
pub use types::{
    ADMIN_POSTS_PATH, AdminPostError, PostActionOutcome, PostEditorData, PostFormErrors,
    PostSubmission,
};
pub use validation::validate_submission;
