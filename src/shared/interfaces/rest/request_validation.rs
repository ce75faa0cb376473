use axum::{Json, extract::rejection::JsonRejection, http::StatusCode};
use validator::{Validate, ValidationErrors};

use crate::shared::interfaces::rest::resources::error_response_resource::ErrorResponseResource;

/// Request bodies whose fields are checked in a fixed order. When several
/// fields fail, the message of the earliest one is reported.
pub trait ValidationOrder {
    const FIELD_ORDER: &'static [&'static str];
}

/// Unwraps a JSON body extracted after authorization and runs its validators.
pub fn validated_body<T: Validate + ValidationOrder>(
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, (StatusCode, Json<ErrorResponseResource>)> {
    let Json(body) = payload.map_err(|rejection| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseResource::with_details(
                "Invalid request body",
                rejection.body_text(),
            )),
        )
    })?;

    body.validate().map_err(|errors| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseResource::new(first_validation_message(
                &errors,
                T::FIELD_ORDER,
            ))),
        )
    })?;

    Ok(body)
}

fn first_validation_message(errors: &ValidationErrors, field_order: &[&str]) -> String {
    let rank = |field: &str| {
        field_order
            .iter()
            .position(|ordered| *ordered == field)
            .unwrap_or(field_order.len())
    };
    let mut fields = errors.field_errors().into_iter().collect::<Vec<_>>();
    fields.sort_by(|(left, _), (right, _)| {
        rank(left.as_ref())
            .cmp(&rank(right.as_ref()))
            .then_with(|| left.cmp(right))
    });

    fields
        .into_iter()
        .flat_map(|(_, field_errors)| field_errors.iter())
        .find_map(|error| error.message.as_ref().map(|message| message.to_string()))
        .unwrap_or_else(|| errors.to_string())
}
