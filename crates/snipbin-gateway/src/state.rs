use snipbin_service::PastebinService;
use snipbin_storage::FsSnippetStore;
use std::sync::Arc;

pub type Service = PastebinService<FsSnippetStore>;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<Service>,
}

impl AppState {
    pub fn new(service: Service) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
