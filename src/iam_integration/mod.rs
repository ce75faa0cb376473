use std::sync::Arc;

use crate::{
    access_control::interfaces::acl::access_control_facade::AccessControlFacade,
    config::app_config::AppConfig,
    iam_integration::{
        application::acl::{
            access_control_privilege_check_facade_impl::AccessControlPrivilegeCheckFacadeImpl,
            admin_authorization_gate_impl::AdminAuthorizationGateImpl,
            http_iam_authentication_facade_impl::HttpIamAuthenticationFacadeImpl,
        },
        interfaces::acl::admin_authorization_gate::AdminAuthorizationGate,
    },
};

pub mod application;
pub mod domain;
pub mod interfaces;

pub fn build_admin_authorization_gate(
    config: &AppConfig,
    access_control_facade: Arc<dyn AccessControlFacade>,
) -> Result<Arc<dyn AdminAuthorizationGate>, String> {
    let iam_authentication_facade = Arc::new(HttpIamAuthenticationFacadeImpl::new(
        config.auth_base_url.clone(),
        config.auth_anon_key.clone(),
        config.iam_timeout(),
        config.iam_cache_ttl(),
        config.iam_failure_threshold,
        config.iam_circuit_open_duration(),
    )?);
    let privilege_check_facade = Arc::new(AccessControlPrivilegeCheckFacadeImpl::new(
        access_control_facade,
    ));

    Ok(Arc::new(AdminAuthorizationGateImpl::new(
        iam_authentication_facade,
        privilege_check_facade,
    )))
}
