//! Board view templates
//!
//! The template sources ship inside the binary; the environment is compiled
//! once at startup and shared through the application state.

use minijinja::Environment;

/// Build the template environment with every board view registered
pub fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("index.html", include_str!("../templates/index.html"))?;
    env.add_template(
        "partials/board.html",
        include_str!("../templates/partials/board.html"),
    )?;
    env.add_template(
        "partials/analysis.html",
        include_str!("../templates/partials/analysis.html"),
    )?;
    Ok(env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_templates_compile() {
        let env = environment().unwrap();
        for name in ["index.html", "partials/board.html", "partials/analysis.html"] {
            assert!(env.get_template(name).is_ok());
        }
    }
}
