//! Config serialization to TOML
//!
//! Single source of truth for the config file format.

use super::Config;

/// Quote a string as a TOML basic or literal string
fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

impl Config {
    /// Render the config as a commented TOML document
    pub fn to_toml(&self) -> String {
        let user_name = match &self.user_name {
            Some(name) => format!("user_name = {}", toml_string(name)),
            None => "# user_name = \"Taylor\"".to_string(),
        };

        format!(
            r#"# recipe-finder configuration

# TheMealDB base URL (filter.php / lookup.php are appended)
api_url = {api_url}

# Per-request timeout in seconds
timeout_secs = {timeout}

# Theme: Garden, Night Garden
theme = {theme}

# Name shown in the home greeting
{user_name}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level}
# JSON file logging (in addition to the TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = {log_file_prefix}
"#,
            api_url = toml_string(&self.api_url),
            timeout = self.timeout_secs,
            theme = toml_string(&self.theme),
            user_name = user_name,
            log_level = toml_string(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = toml_string(&self.logging.file_dir.display().to_string()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = toml_string(&self.logging.file_prefix),
        )
    }
}
