pub mod app;
pub mod chart;
pub mod errors;
pub mod form;
pub mod handlers;
pub mod models;
pub mod plans;
pub mod progress;
pub mod state;
pub mod store;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use store::{resolve_data_path, JsonFileStorage, RecordStore};
