use crate::iam_integration::domain::model::value_objects::authenticated_user_id::AuthenticatedUserId;

/// Caller resolved from a bearer credential that passed the admin privilege check.
/// Lives for a single request and is never persisted.
#[derive(Clone, Debug)]
pub struct AuthenticatedPrincipal {
    user_id: AuthenticatedUserId,
    email: Option<String>,
}

impl AuthenticatedPrincipal {
    pub fn new(user_id: AuthenticatedUserId, email: Option<String>) -> Self {
        Self { user_id, email }
    }

    pub fn user_id(&self) -> &AuthenticatedUserId {
        &self.user_id
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}
