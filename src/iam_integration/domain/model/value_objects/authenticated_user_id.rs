#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct AuthenticatedUserId(String);

impl AuthenticatedUserId {
    pub fn new(value: &str) -> Result<Self, String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err("subject id must not be empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn as_string(&self) -> String {
        self.0.clone()
    }
}
