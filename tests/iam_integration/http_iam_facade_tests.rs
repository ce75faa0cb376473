use std::time::Duration;

use highlight_admin_api::iam_integration::{
    application::acl::http_iam_authentication_facade_impl::HttpIamAuthenticationFacadeImpl,
    interfaces::acl::iam_authentication_facade::{IamAuthenticationFacade, IamIntegrationError},
};

use crate::support::{STUB_USER_EMAIL, STUB_USER_ID, StubAuthServer, spawn_stub_auth_server};

fn facade_for(
    server: &StubAuthServer,
    cache_ttl: Duration,
    failure_threshold: u32,
) -> HttpIamAuthenticationFacadeImpl {
    HttpIamAuthenticationFacadeImpl::new(
        server.base_url.clone(),
        "anon-key".to_string(),
        Duration::from_secs(2),
        cache_ttl,
        failure_threshold,
        Duration::from_secs(60),
    )
    .expect("http client should build")
}

#[tokio::test]
async fn resolves_valid_token_to_user() {
    let server = spawn_stub_auth_server().await;
    let facade = facade_for(&server, Duration::from_secs(30), 5);

    let context = facade
        .verify_access_token("good-token")
        .await
        .expect("token should resolve");

    assert_eq!(context.subject_id.value(), STUB_USER_ID);
    assert_eq!(context.email.as_deref(), Some(STUB_USER_EMAIL));
}

#[tokio::test]
async fn caches_successful_verification() {
    let server = spawn_stub_auth_server().await;
    let facade = facade_for(&server, Duration::from_secs(30), 5);

    facade.verify_access_token("good-token").await.expect("first call");
    facade.verify_access_token("good-token").await.expect("cached call");

    assert_eq!(server.calls(), 1);
}

#[tokio::test]
async fn rejected_token_is_invalid_and_not_cached() {
    let server = spawn_stub_auth_server().await;
    let facade = facade_for(&server, Duration::from_secs(30), 5);

    let first = facade.verify_access_token("bad-token").await;
    let second = facade.verify_access_token("bad-token").await;

    assert!(matches!(first, Err(IamIntegrationError::InvalidToken(_))));
    assert!(matches!(second, Err(IamIntegrationError::InvalidToken(_))));
    assert_eq!(server.calls(), 2);
}

#[tokio::test]
async fn server_errors_open_the_circuit() {
    let server = spawn_stub_auth_server().await;
    let facade = facade_for(&server, Duration::from_secs(30), 2);
    server.force_status(503);

    for _ in 0..2 {
        let result = facade.verify_access_token("good-token").await;
        assert!(matches!(result, Err(IamIntegrationError::Unavailable(_))));
    }

    let short_circuited = facade.verify_access_token("good-token").await;

    assert!(matches!(
        short_circuited,
        Err(IamIntegrationError::Unavailable(_))
    ));
    assert_eq!(server.calls(), 2);
}

#[tokio::test]
async fn unreachable_server_is_unavailable() {
    let facade = HttpIamAuthenticationFacadeImpl::new(
        "http://127.0.0.1:9".to_string(),
        "anon-key".to_string(),
        Duration::from_millis(500),
        Duration::from_secs(30),
        5,
        Duration::from_secs(60),
    )
    .expect("http client should build");

    let result = facade.verify_access_token("good-token").await;

    assert!(matches!(result, Err(IamIntegrationError::Unavailable(_))));
}
