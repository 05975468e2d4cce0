use std::sync::Arc;

use crate::application::admin::posts::AdminPostService;
use crate::infra::store::InMemoryRepositories;

#[derive(Clone)]
pub struct AdminState {
    pub store: Arc<InMemoryRepositories>,
    pub posts: Arc<AdminPostService>,
}

impl AdminState {
    pub fn new(store: Arc<InMemoryRepositories>) -> Self {
        let posts = Arc::new(AdminPostService::new(store.clone(), store.clone()));
        Self { store, posts }
    }
}
