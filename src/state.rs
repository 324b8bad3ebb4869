use crate::tracker::Tracker;
use chrono::{Local, NaiveDate};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub tracker: Arc<Mutex<Tracker>>,
    pub fixed_today: Option<NaiveDate>,
}

impl AppState {
    pub fn new(tracker: Tracker, fixed_today: Option<NaiveDate>) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(tracker)),
            fixed_today,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.fixed_today.unwrap_or_else(|| Local::now().date_naive())
    }
}
