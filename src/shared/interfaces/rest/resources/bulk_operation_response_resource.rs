use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::domain::model::bulk_operation_outcome::BulkOperationOutcome;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkItemErrorResource {
    pub user_id: String,
    pub error: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkOperationResponseResource {
    pub success: bool,
    pub success_count: usize,
    pub failure_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<BulkItemErrorResource>>,
}

impl From<BulkOperationOutcome> for BulkOperationResponseResource {
    fn from(outcome: BulkOperationOutcome) -> Self {
        let errors = if outcome.failures().is_empty() {
            None
        } else {
            Some(
                outcome
                    .failures()
                    .iter()
                    .map(|failure| BulkItemErrorResource {
                        user_id: failure.user_id.clone(),
                        error: failure.error.clone(),
                    })
                    .collect(),
            )
        };

        Self {
            success: true,
            success_count: outcome.success_count(),
            failure_count: outcome.failure_count(),
            errors,
        }
    }
}
