use std::{str::FromStr, time::Duration};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SideEffectDelivery {
    Queued,
    Inline,
}

impl FromStr for SideEffectDelivery {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "queued" => Ok(Self::Queued),
            "inline" => Ok(Self::Inline),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub postgres_host: String,
    pub postgres_port: u16,
    pub postgres_user: String,
    pub postgres_password: String,
    pub postgres_database: String,
    pub postgres_max_connections: u32,
    pub run_migrations: bool,
    pub auth_base_url: String,
    pub auth_anon_key: String,
    pub auth_service_role_key: String,
    pub iam_timeout_ms: u64,
    pub iam_cache_ttl_secs: u64,
    pub iam_failure_threshold: u32,
    pub iam_circuit_open_secs: u64,
    pub side_effect_delivery: SideEffectDelivery,
    pub side_effect_queue_capacity: usize,
    pub side_effect_max_attempts: u32,
    pub side_effect_retry_backoff_ms: u64,
    pub shutdown_drain_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: parse_env("PORT", 8081),
            postgres_host: std::env::var("POSTGRES_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            postgres_port: parse_env("POSTGRES_PORT", 5432),
            postgres_user: std::env::var("POSTGRES_USER")
                .unwrap_or_else(|_| "postgres".to_string()),
            postgres_password: std::env::var("POSTGRES_PASSWORD")
                .unwrap_or_else(|_| "postgres".to_string()),
            postgres_database: std::env::var("POSTGRES_DATABASE")
                .unwrap_or_else(|_| "postgres".to_string()),
            postgres_max_connections: parse_env("POSTGRES_MAX_CONNECTIONS", 10),
            run_migrations: std::env::var("RUN_MIGRATIONS")
                .map(|value| value.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            auth_base_url: std::env::var("SUPABASE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:54321".to_string())
                .trim_end_matches('/')
                .to_string(),
            auth_anon_key: std::env::var("SUPABASE_ANON_KEY").unwrap_or_default(),
            auth_service_role_key: std::env::var("SUPABASE_SERVICE_ROLE_KEY").unwrap_or_default(),
            iam_timeout_ms: parse_env("IAM_TIMEOUT_MS", 5000),
            iam_cache_ttl_secs: parse_env("IAM_CACHE_TTL_SECS", 30),
            iam_failure_threshold: parse_env("IAM_FAILURE_THRESHOLD", 5),
            iam_circuit_open_secs: parse_env("IAM_CIRCUIT_OPEN_SECS", 30),
            side_effect_delivery: parse_env("SIDE_EFFECT_DELIVERY", SideEffectDelivery::Queued),
            side_effect_queue_capacity: parse_env("SIDE_EFFECT_QUEUE_CAPACITY", 1024),
            side_effect_max_attempts: parse_env("SIDE_EFFECT_MAX_ATTEMPTS", 3),
            side_effect_retry_backoff_ms: parse_env("SIDE_EFFECT_RETRY_BACKOFF_MS", 200),
            shutdown_drain_timeout_secs: parse_env("SHUTDOWN_DRAIN_TIMEOUT_SECS", 10),
        }
    }

    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.postgres_user,
            self.postgres_password,
            self.postgres_host,
            self.postgres_port,
            self.postgres_database
        )
    }

    pub fn iam_timeout(&self) -> Duration {
        Duration::from_millis(self.iam_timeout_ms)
    }

    pub fn iam_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.iam_cache_ttl_secs)
    }

    pub fn iam_circuit_open_duration(&self) -> Duration {
        Duration::from_secs(self.iam_circuit_open_secs)
    }

    pub fn side_effect_retry_backoff(&self) -> Duration {
        Duration::from_millis(self.side_effect_retry_backoff_ms)
    }

    pub fn shutdown_drain_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_drain_timeout_secs)
    }
}

fn parse_env<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}
