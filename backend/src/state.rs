// src/state.rs

use crate::{config::Config, store::SessionStore};
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub config: Config,
}

impl FromRef<AppState> for SessionStore {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
