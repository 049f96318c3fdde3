//! Runtime settings derived from the environment.

use std::time::Duration;

/// Redraw interval while the detail view is shown (60 frames per second).
pub const TICK_RATE: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// Settings resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Whether output should be styled with colors.
    pub colors: bool,
    /// Whether stdout is an interactive terminal.
    pub interactive: bool,
}

impl Settings {
    /// Resolve settings from the real environment and stdout.
    pub fn from_env() -> Self {
        Self::resolve(
            |key: &str| std::env::var(key),
            console::Term::stdout().is_term(),
        )
    }

    /// Resolve settings with a custom env var lookup function.
    ///
    /// This allows testing without modifying actual environment variables.
    pub fn resolve<F>(env_fn: F, is_term: bool) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        // https://no-color.org/
        let no_color = env_fn("NO_COLOR").is_ok();

        Self {
            colors: is_term && !no_color,
            interactive: is_term,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Result<String, std::env::VarError> {
        Err(std::env::VarError::NotPresent)
    }

    #[test]
    fn colors_on_a_terminal() {
        let settings = Settings::resolve(no_env, true);
        assert!(settings.colors);
        assert!(settings.interactive);
    }

    #[test]
    fn no_color_disables_colors_but_not_interactivity() {
        let settings = Settings::resolve(
            |key| {
                if key == "NO_COLOR" {
                    Ok("1".to_string())
                } else {
                    Err(std::env::VarError::NotPresent)
                }
            },
            true,
        );
        assert!(!settings.colors);
        assert!(settings.interactive);
    }

    #[test]
    fn piped_output_is_plain() {
        let settings = Settings::resolve(no_env, false);
        assert!(!settings.colors);
        assert!(!settings.interactive);
    }

    #[test]
    fn tick_rate_is_sixty_per_second() {
        assert_eq!(TICK_RATE.as_micros(), 16_666);
    }
}
