//! Startup import of posts from a TOML archive of `[[posts]]` tables.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::application::repos::{NewPost, PostsWriteRepo};
use crate::infra::error::InfraError;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SeedPost {
    pub slug: String,
    pub title: String,
    pub markdown: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SeedArchive {
    posts: Vec<SeedPost>,
}

/// Insert every post in the archive at `path`, returning how many were stored.
pub async fn load_seed(writer: &dyn PostsWriteRepo, path: &Path) -> Result<usize, InfraError> {
    let raw = tokio::fs::read_to_string(path).await?;
    let archive: SeedArchive = toml::from_str(&raw)
        .map_err(|err| InfraError::seed_archive(path.display().to_string(), err.to_string()))?;

    let count = archive.posts.len();
    for post in archive.posts {
        let slug = post.slug.clone();
        writer
            .create_post(NewPost {
                title: post.title,
                slug: post.slug,
                markdown: post.markdown,
            })
            .await
            .map_err(|source| InfraError::SeedPost { slug, source })?;
    }

    info!(
        target = "postdesk::store::seed",
        path = %path.display(),
        count,
        "Seeded posts"
    );

    Ok(count)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::application::repos::PostsRepo;
    use crate::infra::store::InMemoryRepositories;

    fn archive_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write archive");
        file
    }

    #[tokio::test]
    async fn seeds_every_post_in_the_archive() {
        let file = archive_file(
            r##"
[[posts]]
slug = "one"
title = "One"
markdown = "# One"

[[posts]]
slug = "two"
title = "Two"
markdown = "# Two"
"##,
        );
        let repo = InMemoryRepositories::new();

        let count = load_seed(&repo, file.path()).await.unwrap();

        assert_eq!(count, 2);
        let two = repo.get_post("two").await.unwrap().expect("seeded");
        assert_eq!(two.title, "Two");
        assert_eq!(two.markdown, "# Two");
    }

    #[tokio::test]
    async fn empty_archive_seeds_nothing() {
        let file = archive_file("");
        let repo = InMemoryRepositories::new();

        assert_eq!(load_seed(&repo, file.path()).await.unwrap(), 0);
        assert_eq!(repo.post_count().await, 0);
    }

    #[tokio::test]
    async fn malformed_archive_is_rejected() {
        let file = archive_file("[[posts]]\nslug = 3\n");
        let repo = InMemoryRepositories::new();

        let err = load_seed(&repo, file.path()).await.unwrap_err();
        assert!(matches!(err, InfraError::SeedArchive { .. }));
    }

    #[tokio::test]
    async fn duplicate_slugs_fail_the_seed() {
        let file = archive_file(
            r#"
[[posts]]
slug = "same"
title = "A"
markdown = "a"

[[posts]]
slug = "same"
title = "B"
markdown = "b"
"#,
        );
        let repo = InMemoryRepositories::new();

        let err = load_seed(&repo, file.path()).await.unwrap_err();
        assert!(matches!(err, InfraError::SeedPost { slug, .. } if slug == "same"));
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let repo = InMemoryRepositories::new();
        let err = load_seed(&repo, Path::new("/definitely/not/here.toml"))
            .await
            .unwrap_err();
        assert!(matches!(err, InfraError::Io(_)));
    }
}
