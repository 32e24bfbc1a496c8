use crate::domain::ports::NeoCatalog;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    // We use Arc<dyn Trait> to hold any implementation (dependency injection).
    pub catalog: Arc<dyn NeoCatalog>,
}
