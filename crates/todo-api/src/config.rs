use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub mongo_uri: String,
    pub mongo_db: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Config {
            mongo_uri: lookup("MONGO_URI")
                .unwrap_or_else(|| "mongodb://localhost:27017".to_string()),
            mongo_db: lookup("MONGO_DB").unwrap_or_else(|| "todos".to_string()),
            port: lookup("PORT").and_then(|s| s.parse().ok()).unwrap_or(3000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let cfg = Config::from_lookup(|_| None);
        assert_eq!(cfg.mongo_uri, "mongodb://localhost:27017");
        assert_eq!(cfg.mongo_db, "todos");
        assert_eq!(cfg.port, 3000);
    }

    #[test]
    fn set_values_override_the_defaults() {
        let cfg = Config::from_lookup(|key| match key {
            "MONGO_URI" => Some("mongodb://db:27017".to_string()),
            "MONGO_DB" => Some("todos-staging".to_string()),
            "PORT" => Some("8080".to_string()),
            _ => None,
        });
        assert_eq!(cfg.mongo_uri, "mongodb://db:27017");
        assert_eq!(cfg.mongo_db, "todos-staging");
        assert_eq!(cfg.port, 8080);
    }

    #[test]
    fn unparsable_port_falls_back_to_default() {
        let cfg = Config::from_lookup(|key| (key == "PORT").then(|| "eighty".to_string()));
        assert_eq!(cfg.port, 3000);
    }
}
