// Application state module
// The dependency bundle handlers receive instead of reaching for globals

use super::types::Config;
use crate::logger::Logger;
use crate::routing::{self, Router, RouterError};
use crate::template::TemplateEngine;

/// Shared application state, built once in `main` and immutable afterwards.
///
/// Every handler dependency lives here: the configuration, the injected
/// logger, the template engine, and the fixed route table.
pub struct AppState {
    pub config: Config,
    pub logger: Logger,
    pub templates: TemplateEngine,
    pub router: Router,
}

impl AppState {
    pub fn new(config: Config, logger: Logger) -> Result<Self, RouterError> {
        let templates = TemplateEngine::new(&config.ui.template_dir);
        let router = routing::app_routes()?;
        Ok(Self {
            config,
            logger,
            templates,
            router,
        })
    }
}
