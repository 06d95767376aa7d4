use std::sync::Arc;

use crate::store::TriviaStore;
use axum::extract::FromRef;

pub type SharedStore = Arc<dyn TriviaStore>;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
}

impl FromRef<AppState> for SharedStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}
