use std::sync::Arc;

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::Mutex;

use postdesk::application::admin::posts::{
    AdminPostError, AdminPostService, PostActionOutcome, PostSubmission,
};
use postdesk::application::repos::{NewPost, PostChanges, PostsRepo, PostsWriteRepo, RepoError};
use postdesk::domain::entities::PostRecord;
use postdesk::domain::types::PostIntent;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Create(NewPost),
    Update(PostChanges),
    Delete(String),
}

/// Serves at most one stored post and records every write.
#[derive(Default)]
struct RecordingPostsRepo {
    stored: Option<PostRecord>,
    calls: Mutex<Vec<Call>>,
}

impl RecordingPostsRepo {
    fn with_post(slug: &str) -> Self {
        Self {
            stored: Some(record(slug, "Stored", "stored body")),
            calls: Mutex::new(Vec::new()),
        }
    }

    async fn calls(&self) -> Vec<Call> {
        self.calls.lock().await.clone()
    }
}

fn record(slug: &str, title: &str, markdown: &str) -> PostRecord {
    let now = OffsetDateTime::now_utc();
    PostRecord {
        slug: slug.to_string(),
        title: title.to_string(),
        markdown: markdown.to_string(),
        created_at: now,
        updated_at: now,
    }
}

#[async_trait]
impl PostsRepo for RecordingPostsRepo {
    async fn get_post(&self, slug: &str) -> Result<Option<PostRecord>, RepoError> {
        Ok(self.stored.clone().filter(|post| post.slug == slug))
    }

    async fn list_posts(&self) -> Result<Vec<PostRecord>, RepoError> {
        Ok(self.stored.clone().into_iter().collect())
    }
}

#[async_trait]
impl PostsWriteRepo for RecordingPostsRepo {
    async fn create_post(&self, params: NewPost) -> Result<PostRecord, RepoError> {
        let post = record(&params.slug, &params.title, &params.markdown);
        self.calls.lock().await.push(Call::Create(params));
        Ok(post)
    }

    async fn update_post(&self, params: PostChanges) -> Result<PostRecord, RepoError> {
        let post = record(&params.slug, &params.title, &params.markdown);
        self.calls.lock().await.push(Call::Update(params));
        Ok(post)
    }

    async fn delete_post(&self, slug: &str) -> Result<(), RepoError> {
        self.calls.lock().await.push(Call::Delete(slug.to_string()));
        Ok(())
    }
}

fn service(repo: &Arc<RecordingPostsRepo>) -> AdminPostService {
    AdminPostService::new(repo.clone(), repo.clone())
}

fn filled(intent: Option<PostIntent>) -> PostSubmission {
    PostSubmission {
        title: Some("A Title".to_string()),
        slug: Some("a-title".to_string()),
        markdown: Some("# Body".to_string()),
        intent,
    }
}

#[tokio::test]
async fn empty_title_is_reported_without_persisting() {
    let repo = Arc::new(RecordingPostsRepo::default());
    let submission = PostSubmission {
        title: Some(String::new()),
        ..filled(Some(PostIntent::Create))
    };

    let outcome = service(&repo).submit("new", submission).await.unwrap();

    let PostActionOutcome::Invalid { errors, submission } = outcome else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.title.as_deref(), Some("Title is required"));
    assert!(errors.slug.is_none() && errors.markdown.is_none());
    assert_eq!(submission.slug.as_deref(), Some("a-title"));
    assert!(repo.calls().await.is_empty());
}

#[tokio::test]
async fn missing_slug_is_reported_without_persisting() {
    let repo = Arc::new(RecordingPostsRepo::default());
    let submission = PostSubmission {
        slug: None,
        ..filled(Some(PostIntent::Create))
    };

    let outcome = service(&repo).submit("new", submission).await.unwrap();

    let PostActionOutcome::Invalid { errors, .. } = outcome else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.slug.as_deref(), Some("Slug is required"));
    assert!(repo.calls().await.is_empty());
}

#[tokio::test]
async fn empty_markdown_blocks_an_update() {
    let repo = Arc::new(RecordingPostsRepo::with_post("existing"));
    let submission = PostSubmission {
        markdown: Some(String::new()),
        ..filled(Some(PostIntent::Update))
    };

    let outcome = service(&repo).submit("existing", submission).await.unwrap();

    let PostActionOutcome::Invalid { errors, .. } = outcome else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.markdown.as_deref(), Some("Markdown is required"));
    assert!(repo.calls().await.is_empty());
}

#[tokio::test]
async fn delete_bypasses_validation_and_deletes_once() {
    let repo = Arc::new(RecordingPostsRepo::with_post("existing"));
    let submission = PostSubmission {
        intent: Some(PostIntent::Delete),
        ..Default::default()
    };

    let outcome = service(&repo).submit("existing", submission).await.unwrap();

    assert_eq!(
        outcome,
        PostActionOutcome::Redirect("/posts/admin".to_string())
    );
    assert_eq!(repo.calls().await, vec![Call::Delete("existing".to_string())]);
}

#[tokio::test]
async fn create_passes_exactly_the_submitted_fields() {
    let repo = Arc::new(RecordingPostsRepo::default());

    let outcome = service(&repo)
        .submit("new", filled(Some(PostIntent::Create)))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        PostActionOutcome::Redirect("/posts/admin".to_string())
    );
    assert_eq!(
        repo.calls().await,
        vec![Call::Create(NewPost {
            title: "A Title".to_string(),
            slug: "a-title".to_string(),
            markdown: "# Body".to_string(),
        })]
    );
}

#[tokio::test]
async fn update_keeps_the_route_slug() {
    let repo = Arc::new(RecordingPostsRepo::with_post("existing"));
    let submission = PostSubmission {
        slug: Some("renamed".to_string()),
        ..filled(Some(PostIntent::Update))
    };

    let outcome = service(&repo).submit("existing", submission).await.unwrap();

    assert_eq!(
        outcome,
        PostActionOutcome::Redirect("/posts/admin".to_string())
    );
    assert_eq!(
        repo.calls().await,
        vec![Call::Update(PostChanges {
            title: "A Title".to_string(),
            slug: "existing".to_string(),
            markdown: "# Body".to_string(),
        })]
    );
}

#[tokio::test]
async fn missing_intent_saves_according_to_the_route() {
    let repo = Arc::new(RecordingPostsRepo::with_post("existing"));
    let service = service(&repo);

    service.submit("new", filled(None)).await.unwrap();
    service.submit("existing", filled(None)).await.unwrap();

    let calls = repo.calls().await;
    assert_eq!(calls.len(), 2);
    assert!(matches!(calls[0], Call::Create(_)));
    assert!(matches!(calls[1], Call::Update(_)));
}

#[tokio::test]
async fn delete_on_the_new_form_is_rejected() {
    let repo = Arc::new(RecordingPostsRepo::default());
    let submission = PostSubmission {
        intent: Some(PostIntent::Delete),
        ..Default::default()
    };

    let err = service(&repo).submit("new", submission).await.unwrap_err();

    assert!(matches!(err, AdminPostError::ConstraintViolation("intent")));
    assert!(repo.calls().await.is_empty());
}

#[tokio::test]
async fn loader_treats_new_as_an_empty_form() {
    let repo = Arc::new(RecordingPostsRepo::with_post("existing"));
    let data = service(&repo).load_editor("new").await.unwrap();
    assert!(data.is_new_post());
}

#[tokio::test]
async fn loader_returns_the_stored_post() {
    let repo = Arc::new(RecordingPostsRepo::with_post("existing"));
    let data = service(&repo).load_editor("existing").await.unwrap();
    assert_eq!(data.post.map(|post| post.title), Some("Stored".to_string()));
}

#[tokio::test]
async fn loader_reports_unknown_slugs_as_not_found() {
    let repo = Arc::new(RecordingPostsRepo::default());
    let err = service(&repo).load_editor("missing").await.unwrap_err();
    assert!(matches!(err, AdminPostError::NotFound { slug } if slug == "missing"));
}
