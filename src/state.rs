use crate::config::AppConfig;
use crate::services::sink::LeadSink;

pub struct AppState {
    pub config: AppConfig,
    pub sink: Box<dyn LeadSink>,
}
