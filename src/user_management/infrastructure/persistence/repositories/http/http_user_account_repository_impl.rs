use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};

use crate::user_management::{
    domain::model::{
        enums::user_management_domain_error::UserManagementDomainError,
        value_objects::user_account_id::UserAccountId,
    },
    infrastructure::persistence::repositories::user_account_repository::UserAccountRepository,
};

/// Deletes accounts through the auth server admin API
/// (`DELETE /auth/v1/admin/users/{id}`) using the service-role key.
pub struct HttpUserAccountRepositoryImpl {
    http_client: reqwest::Client,
    auth_base_url: Url,
    service_role_key: String,
}

impl HttpUserAccountRepositoryImpl {
    pub fn new(
        auth_base_url: &str,
        service_role_key: String,
        timeout: Duration,
    ) -> Result<Self, String> {
        let auth_base_url = Url::parse(auth_base_url).map_err(|e| e.to_string())?;
        if auth_base_url.cannot_be_a_base() {
            return Err(format!("auth server URL cannot be a base: {auth_base_url}"));
        }

        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|e| e.to_string())?;

        Ok(Self {
            http_client,
            auth_base_url,
            service_role_key,
        })
    }

    fn account_url(&self, user_id: &UserAccountId) -> Result<Url, UserManagementDomainError> {
        let mut url = self.auth_base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                UserManagementDomainError::InfrastructureError(
                    "auth server URL cannot be a base".to_string(),
                )
            })?
            .pop_if_empty()
            .extend(["auth", "v1", "admin", "users", user_id.value()]);
        Ok(url)
    }
}

#[async_trait]
impl UserAccountRepository for HttpUserAccountRepositoryImpl {
    async fn delete_account(&self, user_id: &UserAccountId) -> Result<(), UserManagementDomainError> {
        let response = self
            .http_client
            .delete(self.account_url(user_id)?)
            .header("apikey", &self.service_role_key)
            .bearer_auth(&self.service_role_key)
            .send()
            .await
            .map_err(|e| UserManagementDomainError::InfrastructureError(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        if status == StatusCode::NOT_FOUND {
            return Err(UserManagementDomainError::UserNotFound);
        }

        let body = response.text().await.unwrap_or_default();
        Err(UserManagementDomainError::InfrastructureError(format!(
            "auth server responded with {status}: {body}"
        )))
    }
}
