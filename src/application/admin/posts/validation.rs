use super::types::{PostFormErrors, PostSubmission};

const TITLE_REQUIRED: &str = "Title is required";
const SLUG_REQUIRED: &str = "Slug is required";
const MARKDOWN_REQUIRED: &str = "Markdown is required";

/// Required-field checks for the editor. Whitespace counts as content.
pub fn validate_submission(submission: &PostSubmission) -> PostFormErrors {
    PostFormErrors {
        title: required(submission.title.as_deref(), TITLE_REQUIRED),
        slug: required(submission.slug.as_deref(), SLUG_REQUIRED),
        markdown: required(submission.markdown.as_deref(), MARKDOWN_REQUIRED),
    }
}

fn required(value: Option<&str>, message: &'static str) -> Option<String> {
    match value {
        Some(value) if !value.is_empty() => None,
        _ => Some(message.to_string()),
    }
}
