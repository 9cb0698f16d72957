use core_config::{mongodb::MongoConfig, server::ServerConfig, FromEnv};

// Re-export Environment for use in main
pub use core_config::Environment;

/// Application configuration, composed from the shared config pieces.
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub mongo: MongoConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // Defaults: HOST=0.0.0.0, PORT=8080
        let mongo = MongoConfig::from_env()?; // MONGO_URI is required

        Ok(Self {
            environment,
            server,
            mongo,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_composes_all_sections() {
        temp_env::with_vars(
            [
                ("APP_ENV", Some("production")),
                ("HOST", Some("127.0.0.1")),
                ("PORT", Some("9090")),
                ("MONGO_URI", Some("mongodb://localhost:27017")),
                ("MONGO_DATABASE", Some("signup_prod")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.environment.is_production());
                assert_eq!(config.server.address(), "127.0.0.1:9090");
                assert_eq!(config.mongo.database, "signup_prod");
            },
        );
    }

    #[test]
    fn from_env_fails_without_a_mongo_uri() {
        temp_env::with_var_unset("MONGO_URI", || {
            assert!(Config::from_env().is_err());
        });
    }
}
