use crate::form::FormState;
use crate::store::RecordStore;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Everything a user event can touch; one lock serializes all events.
pub struct Dashboard {
    pub store: RecordStore,
    pub form: FormState,
    pub filter: Option<String>,
}

impl Dashboard {
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            form: FormState::default(),
            filter: None,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<Mutex<Dashboard>>,
}

impl AppState {
    pub fn new(store: RecordStore) -> Self {
        Self {
            dashboard: Arc::new(Mutex::new(Dashboard::new(store))),
        }
    }
}
