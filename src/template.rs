//! Template engine wrapper
//!
//! Thin layer over MiniJinja. Pages are composed from a base layout that
//! pulls in partials; page templates extend the base. Templates are loaded
//! lazily from the configured directory, so a missing or broken template
//! surfaces as a render error, which the calling handler turns into a
//! generic 500 response.

use std::path::Path;

use minijinja::{context, path_loader, Environment};

const HOME_TEMPLATE: &str = "pages/home.html";

/// MiniJinja environment rooted at the template directory.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create an engine loading templates from `dir`.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        let mut env = Environment::new();
        env.set_loader(path_loader(dir));
        Self { env }
    }

    /// Render the home page: base layout + nav partial + home fragment.
    pub fn render_home(&self) -> Result<String, minijinja::Error> {
        let template = self.env.get_template(HOME_TEMPLATE)?;
        template.render(context! { title => "Home" })
    }
}
