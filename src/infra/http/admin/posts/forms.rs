use serde::Deserialize;

use crate::{
    application::admin::posts::PostSubmission,
    domain::{error::DomainError, types::PostIntent},
};

/// Editor form as posted by the browser. Every field is optional so that missing inputs reach
/// validation instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct AdminPostForm {
    pub(crate) title: Option<String>,
    pub(crate) slug: Option<String>,
    pub(crate) markdown: Option<String>,
    pub(crate) intent: Option<String>,
}

impl AdminPostForm {
    pub(crate) fn into_submission(self) -> Result<PostSubmission, DomainError> {
        let intent = match self.intent.as_deref() {
            None | Some("") => None,
            Some(value) => Some(value.parse::<PostIntent>()?),
        };

        Ok(PostSubmission {
            title: self.title,
            slug: self.slug,
            markdown: self.markdown,
            intent,
        })
    }
}
