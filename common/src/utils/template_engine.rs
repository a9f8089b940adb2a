pub use minijinja::{path_loader, Environment, Value};
pub use minijinja_autoreload::AutoReloader;
pub use minijinja_contrib;
pub use minijinja_embed;
use std::sync::Arc;

pub trait ProvidesTemplateEngine {
    fn template_engine(&self) -> &Arc<TemplateEngine>;
}

#[derive(Clone)]
pub enum TemplateEngine {
    // Use AutoReload for debug builds (debug_assertions is true)
    #[cfg(debug_assertions)]
    AutoReload(Arc<AutoReloader>),
    // Use Embedded for release builds (debug_assertions is false)
    #[cfg(not(debug_assertions))]
    Embedded(Arc<Environment<'static>>),
}

/// Registers contrib and project specific filters on a fresh environment.
pub fn configure_environment(env: &mut Environment<'_>) {
    minijinja_contrib::add_to_environment(env);
    env.add_filter("format_amount", format_amount);
}

/// Renders a whole dollar amount with thousands separators, `1899` -> `1,899`.
pub fn format_amount(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[macro_export]
macro_rules! create_template_engine {
    // Macro takes the relative path to the templates dir as input
    ($relative_path:expr) => {{
        #[cfg(debug_assertions)]
        {
            // Resolved against the CALLING crate's manifest dir
            let crate_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
            let template_path = crate_dir.join($relative_path);
            let reloader = $crate::utils::template_engine::AutoReloader::new(move |notifier| {
                let mut env = $crate::utils::template_engine::Environment::new();
                env.set_loader($crate::utils::template_engine::path_loader(&template_path));
                notifier.set_fast_reload(true);
                notifier.watch_path(&template_path, true);
                $crate::utils::template_engine::configure_environment(&mut env);
                Ok(env)
            });
            $crate::utils::template_engine::TemplateEngine::AutoReload(std::sync::Arc::new(
                reloader,
            ))
        }
        #[cfg(not(debug_assertions))]
        {
            let mut env = $crate::utils::template_engine::Environment::new();
            $crate::utils::template_engine::minijinja_embed::load_templates!(&mut env);
            $crate::utils::template_engine::configure_environment(&mut env);
            $crate::utils::template_engine::TemplateEngine::Embedded(std::sync::Arc::new(env))
        }
    }};
}

impl TemplateEngine {
    pub fn render(&self, name: &str, ctx: &Value) -> Result<String, minijinja::Error> {
        match self {
            #[cfg(debug_assertions)]
            Self::AutoReload(reloader) => {
                let env = reloader.acquire_env()?;
                env.get_template(name)?.render(ctx)
            }
            #[cfg(not(debug_assertions))]
            Self::Embedded(env) => env.get_template(name)?.render(ctx),
        }
    }

    pub fn render_block(
        &self,
        template_name: &str,
        block_name: &str,
        context: &Value,
    ) -> Result<String, minijinja::Error> {
        match self {
            #[cfg(debug_assertions)]
            Self::AutoReload(reloader) => {
                let env = reloader.acquire_env()?;
                let mut captured = env.get_template(template_name)?.render_captured(context)?;
                captured.with_state_mut(|state| state.render_block(block_name))
            }
            #[cfg(not(debug_assertions))]
            Self::Embedded(env) => {
                let mut captured = env.get_template(template_name)?.render_captured(context)?;
                captured.with_state_mut(|state| state.render_block(block_name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(95), "95");
        assert_eq!(format_amount(1899), "1,899");
        assert_eq!(format_amount(66500), "66,500");
        assert_eq!(format_amount(1_234_567), "1,234,567");
        assert_eq!(format_amount(-2500), "-2,500");
    }

    #[test]
    fn filter_is_available_in_configured_environment() {
        let mut env = Environment::new();
        configure_environment(&mut env);
        env.add_template("price.html", "${{ price|format_amount }}")
            .expect("template should compile");

        let rendered = env
            .get_template("price.html")
            .and_then(|tmpl| tmpl.render(context! { price => 1999 }))
            .expect("template should render");

        assert_eq!(rendered, "$1,999");
    }
}
