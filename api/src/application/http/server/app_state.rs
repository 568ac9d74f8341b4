use std::sync::Arc;

use mealkit_core::application::MealkitService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: MealkitService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: MealkitService) -> Self {
        Self { args, service }
    }
}
