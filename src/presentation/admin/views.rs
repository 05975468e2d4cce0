mod posts;

pub use posts::*;

#[derive(Clone)]
pub struct AdminLayout<T> {
    pub page_title: String,
    pub asset_version: String,
    pub content: T,
}

impl<T> AdminLayout<T> {
    pub fn new(page_title: impl Into<String>, content: T) -> Self {
        Self {
            page_title: page_title.into(),
            asset_version: asset_version(),
            content,
        }
    }
}

fn asset_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
