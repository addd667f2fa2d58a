/*
 * Responsibility
 * - 環境変数や設定の読み込み (DATABASE_URL, TOKEN_SECRET など)
 * - 設定値のバリデーション (不足なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: Option<String>) -> Self {
        match raw
            .unwrap_or_else(|| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    pub database_url: String,
    pub database_max_connections: u32,

    // HS256 shared secret used for every access token
    pub token_secret: String,
    pub token_leeway_seconds: u64,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print secrets (token secret / db credentials)
        f.debug_struct("Config")
            .field("addr", &self.addr)
            .field("app_env", &self.app_env)
            .field("database_max_connections", &self.database_max_connections)
            .field("token_leeway_seconds", &self.token_leeway_seconds)
            .finish_non_exhaustive()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a `Config` from an arbitrary key lookup.
    ///
    /// `from_env` passes `std::env::var`; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 3000,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(lookup("APP_ENV"));

        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let database_max_connections: u32 = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid("DATABASE_MAX_CONNECTIONS"))?,
            None => 5,
        };

        let token_secret = lookup("TOKEN_SECRET").ok_or(ConfigError::Missing("TOKEN_SECRET"))?;
        if token_secret.trim().is_empty() {
            return Err(ConfigError::Invalid("TOKEN_SECRET"));
        }

        let token_leeway_seconds: u64 = match lookup("TOKEN_LEEWAY_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid("TOKEN_LEEWAY_SECONDS"))?,
            None => 0,
        };

        Ok(Self {
            addr,
            app_env,
            database_url,
            database_max_connections,
            token_secret,
            token_leeway_seconds,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_optional_keys_are_absent() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/app"),
            ("TOKEN_SECRET", "s3cret"),
        ]))
        .unwrap();

        assert_eq!(config.addr.port(), 3000);
        assert_eq!(config.app_env, AppEnv::Development);
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.token_leeway_seconds, 0);
        assert_eq!(config.token_secret, "s3cret");
    }

    #[test]
    fn missing_secret_fails_startup() {
        let err = Config::from_lookup(lookup_from(&[(
            "DATABASE_URL",
            "postgres://localhost/app",
        )]))
        .unwrap_err();

        assert_eq!(err, ConfigError::Missing("TOKEN_SECRET"));
    }

    #[test]
    fn blank_secret_is_invalid() {
        let err = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/app"),
            ("TOKEN_SECRET", "   "),
        ]))
        .unwrap_err();

        assert_eq!(err, ConfigError::Invalid("TOKEN_SECRET"));
    }

    #[test]
    fn bad_port_is_invalid() {
        let err = Config::from_lookup(lookup_from(&[
            ("PORT", "http"),
            ("DATABASE_URL", "postgres://localhost/app"),
            ("TOKEN_SECRET", "s3cret"),
        ]))
        .unwrap_err();

        assert_eq!(err, ConfigError::Invalid("PORT"));
    }

    #[test]
    fn bad_numeric_settings_are_invalid() {
        let cases = [
            ("DATABASE_MAX_CONNECTIONS", "many"),
            ("DATABASE_MAX_CONNECTIONS", "0"),
            ("TOKEN_LEEWAY_SECONDS", "-5"),
            ("TOKEN_LEEWAY_SECONDS", "1m"),
        ];

        for (key, value) in cases {
            let err = Config::from_lookup(lookup_from(&[
                (key, value),
                ("DATABASE_URL", "postgres://localhost/app"),
                ("TOKEN_SECRET", "s3cret"),
            ]))
            .unwrap_err();

            assert_eq!(err, ConfigError::Invalid(key), "{key}={value}");
        }
    }

    #[test]
    fn numeric_settings_are_parsed() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_MAX_CONNECTIONS", "20"),
            ("TOKEN_LEEWAY_SECONDS", " 30 "),
            ("DATABASE_URL", "postgres://localhost/app"),
            ("TOKEN_SECRET", "s3cret"),
        ]))
        .unwrap();

        assert_eq!(config.database_max_connections, 20);
        assert_eq!(config.token_leeway_seconds, 30);
    }

    #[test]
    fn production_aliases_are_recognised() {
        let config = Config::from_lookup(lookup_from(&[
            ("APP_ENV", "PROD"),
            ("DATABASE_URL", "postgres://localhost/app"),
            ("TOKEN_SECRET", "s3cret"),
        ]))
        .unwrap();

        assert_eq!(config.app_env, AppEnv::Production);
    }

    #[test]
    fn debug_output_hides_the_secret() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://user:pw@localhost/app"),
            ("TOKEN_SECRET", "s3cret"),
        ]))
        .unwrap();

        let printed = format!("{config:?}");
        assert!(!printed.contains("s3cret"));
        assert!(!printed.contains("pw@"));
    }
}
