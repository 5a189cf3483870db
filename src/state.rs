use crate::models::AppData;
use crate::reminder::ReminderScheduler;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
    pub reminder: Arc<ReminderScheduler>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: AppData) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
            reminder: Arc::new(ReminderScheduler::new()),
        }
    }
}
