use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{AiConfig, ServerConfig, Settings};

/// Loads the application configuration from the `config.toml` file.
///
/// This function is the primary entry point for this crate. It reads the
/// configuration file, deserializes it into our strongly-typed `Settings`
/// struct, and returns it. Environment variables prefixed with `PERCH_`
/// override file values (e.g. `PERCH_AI__API_KEY`), which is how deployments
/// keep the API key out of the checked-in file.
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `config.toml`
        .add_source(config::File::with_name("config.toml"))
        .add_source(config::Environment::with_prefix("PERCH").separator("__"))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Settings` struct
    let settings = builder.try_deserialize::<Settings>()?;

    Ok(settings)
}
