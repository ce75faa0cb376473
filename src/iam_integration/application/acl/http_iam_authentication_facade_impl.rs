use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tokio::sync::{Mutex, RwLock};

use crate::iam_integration::{
    domain::model::value_objects::authenticated_user_id::AuthenticatedUserId,
    interfaces::acl::iam_authentication_facade::{
        IamAuthenticationFacade, IamIntegrationError, VerifiedUserContext,
    },
};

#[derive(Deserialize)]
struct AuthUserResponse {
    id: String,
    email: Option<String>,
}

#[derive(Clone)]
struct CachedVerification {
    context: VerifiedUserContext,
    expires_at: Instant,
}

#[derive(Default)]
struct CircuitState {
    consecutive_failures: u32,
    opened_until: Option<Instant>,
}

/// Resolves bearer tokens against the hosted auth server (`GET /auth/v1/user`).
pub struct HttpIamAuthenticationFacadeImpl {
    http_client: reqwest::Client,
    user_endpoint: String,
    api_key: String,
    cache_ttl: Duration,
    failure_threshold: u32,
    open_duration: Duration,
    cache: Arc<RwLock<HashMap<String, CachedVerification>>>,
    circuit: Arc<Mutex<CircuitState>>,
}

impl HttpIamAuthenticationFacadeImpl {
    pub fn new(
        auth_base_url: String,
        api_key: String,
        timeout: Duration,
        cache_ttl: Duration,
        failure_threshold: u32,
        open_duration: Duration,
    ) -> Result<Self, String> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|e| e.to_string())?;

        Ok(Self {
            http_client,
            user_endpoint: format!("{}/auth/v1/user", auth_base_url.trim_end_matches('/')),
            api_key,
            cache_ttl,
            failure_threshold: failure_threshold.max(1),
            open_duration,
            cache: Arc::new(RwLock::new(HashMap::new())),
            circuit: Arc::new(Mutex::new(CircuitState::default())),
        })
    }

    fn token_hash(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    async fn get_cached(&self, token_hash: &str) -> Option<VerifiedUserContext> {
        let guard = self.cache.read().await;
        guard.get(token_hash).and_then(|entry| {
            if entry.expires_at > Instant::now() {
                Some(entry.context.clone())
            } else {
                None
            }
        })
    }

    async fn set_cache(&self, token_hash: String, context: VerifiedUserContext) {
        let mut guard = self.cache.write().await;
        let now = Instant::now();
        guard.retain(|_, entry| entry.expires_at > now);
        guard.insert(
            token_hash,
            CachedVerification {
                context,
                expires_at: now + self.cache_ttl,
            },
        );
    }

    async fn can_attempt_call(&self) -> bool {
        let mut guard = self.circuit.lock().await;
        match guard.opened_until {
            Some(until) if until > Instant::now() => false,
            Some(_) => {
                guard.opened_until = None;
                true
            }
            None => true,
        }
    }

    async fn register_success(&self) {
        let mut guard = self.circuit.lock().await;
        guard.consecutive_failures = 0;
        guard.opened_until = None;
    }

    async fn register_failure(&self) {
        let mut guard = self.circuit.lock().await;
        guard.consecutive_failures = guard.consecutive_failures.saturating_add(1);

        if guard.consecutive_failures >= self.failure_threshold {
            guard.opened_until = Some(Instant::now() + self.open_duration);
            guard.consecutive_failures = 0;
        }
    }
}

#[async_trait]
impl IamAuthenticationFacade for HttpIamAuthenticationFacadeImpl {
    async fn verify_access_token(
        &self,
        access_token: &str,
    ) -> Result<VerifiedUserContext, IamIntegrationError> {
        if access_token.trim().is_empty() {
            return Err(IamIntegrationError::InvalidToken(
                "access token is empty".to_string(),
            ));
        }

        let token_hash = Self::token_hash(access_token);

        if let Some(cached) = self.get_cached(&token_hash).await {
            return Ok(cached);
        }

        if !self.can_attempt_call().await {
            return Err(IamIntegrationError::Unavailable(
                "circuit breaker is open".to_string(),
            ));
        }

        let response = self
            .http_client
            .get(&self.user_endpoint)
            .header("apikey", &self.api_key)
            .bearer_auth(access_token)
            .send()
            .await;

        let response = match response {
            Ok(value) => value,
            Err(error) => {
                self.register_failure().await;
                return Err(IamIntegrationError::Unavailable(error.to_string()));
            }
        };

        let status = response.status();
        if status.is_server_error() {
            self.register_failure().await;
            return Err(IamIntegrationError::Unavailable(format!(
                "auth server responded with {status}"
            )));
        }
        self.register_success().await;

        if !status.is_success() {
            return Err(IamIntegrationError::InvalidToken(format!(
                "auth server rejected token with {status}"
            )));
        }

        let user = response
            .json::<AuthUserResponse>()
            .await
            .map_err(|e| IamIntegrationError::InvalidToken(e.to_string()))?;

        let context = VerifiedUserContext {
            subject_id: AuthenticatedUserId::new(&user.id)
                .map_err(IamIntegrationError::InvalidToken)?,
            email: user.email.filter(|email| !email.is_empty()),
        };

        self.set_cache(token_hash, context.clone()).await;

        Ok(context)
    }
}
