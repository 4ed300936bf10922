//! Output formatter for human-readable and JSON output
//!
//! Ensures every command reports successes, warnings, and errors the same
//! way. The console channel is independent of the tracing log channel.

use serde::Serialize;

use super::OutputConfig;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Formatter for CLI output
///
/// Handles both human-readable and JSON output formats based on
/// configuration. When JSON mode is enabled, all output is strict JSON
/// without colors.
#[derive(Debug, Clone)]
pub struct Formatter {
    config: OutputConfig,
}

impl Formatter {
    /// Create a new formatter with the given configuration
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Check if JSON output mode is enabled
    pub fn is_json(&self) -> bool {
        self.config.json
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.config.quiet
    }

    /// Check if colors are enabled
    pub fn colors_enabled(&self) -> bool {
        !self.config.no_color && !self.config.json
    }

    fn status_symbol(&self, color: &str, symbol: &str) -> String {
        if self.colors_enabled() {
            format!("{color}{symbol}{RESET}")
        } else {
            symbol.to_string()
        }
    }

    /// Output a success message
    pub fn success(&self, message: &str) {
        // In JSON mode, success is indicated by exit code, not message
        if self.config.quiet || self.config.json {
            return;
        }

        println!("{} {message}", self.status_symbol(GREEN, "✓"));
    }

    /// Output an error message
    ///
    /// Errors are always printed, even in quiet mode.
    pub fn error(&self, message: &str) {
        if self.config.json {
            let error = serde_json::json!({
                "error": message
            });
            eprintln!(
                "{}",
                serde_json::to_string_pretty(&error).unwrap_or_else(|_| message.to_string())
            );
        } else {
            eprintln!("{} {message}", self.status_symbol(RED, "✗"));
        }
    }

    /// Output a warning message
    pub fn warning(&self, message: &str) {
        if self.config.quiet || self.config.json {
            return;
        }

        eprintln!("{} {message}", self.status_symbol(YELLOW, "⚠"));
    }

    /// Output a serializable value as pretty-printed JSON
    pub fn json<T: Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Error serializing output: {e}"),
        }
    }

    /// Print a line of text (respects quiet mode)
    pub fn println(&self, message: &str) {
        if self.config.quiet {
            return;
        }
        println!("{message}");
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(OutputConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatter_default() {
        let formatter = Formatter::default();
        assert!(!formatter.is_json());
        assert!(!formatter.is_quiet());
        assert!(formatter.colors_enabled());
    }

    #[test]
    fn test_formatter_json_disables_colors() {
        let formatter = Formatter::new(OutputConfig {
            json: true,
            ..Default::default()
        });
        assert!(formatter.is_json());
        assert!(!formatter.colors_enabled());
    }

    #[test]
    fn test_formatter_no_color() {
        let formatter = Formatter::new(OutputConfig {
            no_color: true,
            ..Default::default()
        });
        assert!(!formatter.colors_enabled());
        assert_eq!(formatter.status_symbol(GREEN, "✓"), "✓");
    }

    #[test]
    fn test_status_symbol_with_colors() {
        let formatter = Formatter::default();
        let symbol = formatter.status_symbol(RED, "✗");
        assert!(symbol.starts_with(RED));
        assert!(symbol.ends_with(RESET));
    }
}
