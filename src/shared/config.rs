//! 런타임 설정
//! Runtime configuration, read from the environment at startup.
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `DATABASE_URL` | PostgreSQL connection string | required |
//! | `JWT_SECRET` | HMAC key for bearer tokens | required |
//! | `FIREBASE_API_KEY` | Identity Toolkit API key | required |
//! | `BIND_ADDR` | Listen address | `0.0.0.0:3002` |
//! | `CORS_ORIGIN` | Allowed browser origin | `http://localhost:3003` |
//! | `RUST_LOG` | Log filter | `info,tower_http=debug` |

use std::net::SocketAddr;

use anyhow::{Context, Result};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3002";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3003";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub firebase_api_key: String,
    pub bind_addr: SocketAddr,
    pub cors_origin: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 임의의 조회 함수로부터 설정 생성 (테스트용)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .with_context(|| format!("Missing required environment variable {}", key))
        };

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .with_context(|| format!("Invalid BIND_ADDR: {}", bind_addr))?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            firebase_api_key: required("FIREBASE_API_KEY")?,
            bind_addr,
            cors_origin: lookup("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_for_optional_values() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgresql://localhost/finance"),
            ("JWT_SECRET", "s3cret"),
            ("FIREBASE_API_KEY", "key"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse::<SocketAddr>().unwrap());
        assert_eq!(config.cors_origin, DEFAULT_CORS_ORIGIN);
    }

    #[test]
    fn missing_secret_is_an_error() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgresql://localhost/finance"),
            ("FIREBASE_API_KEY", "key"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("JWT_SECRET"));
    }

    #[test]
    fn invalid_bind_addr_is_an_error() {
        let result = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgresql://localhost/finance"),
            ("JWT_SECRET", "s3cret"),
            ("FIREBASE_API_KEY", "key"),
            ("BIND_ADDR", "not-an-addr"),
        ]));
        assert!(result.is_err());
    }
}
