use std::sync::Arc;

use axum::http::header::{CONTENT_TYPE, ORIGIN};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::controller::AppState;
use crate::helpers::error::IntakeError;
use crate::models::reservation::Reservation;
use crate::repositories::ReservationStore;

/// Submission endpoint, matched by containment so gateway stage prefixes
/// (e.g. /prod/submit-reservation) still route here.
pub const RESERVATION_PATH: &str = "/submit-reservation";

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .fallback(dispatch_reservation_request)
        .layer(Extension(app_state.reservation_store))
}

/// Single entry point for every request the service receives: answers CORS
/// preflights, accepts reservation submissions, rejects everything else.
pub async fn dispatch_reservation_request(
    Extension(reservation_store): Extension<Arc<dyn ReservationStore>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let origin = headers
        .get(ORIGIN)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    info!("Received request: {} {} from {}", method, uri.path(), origin);

    if method == Method::OPTIONS {
        info!("Handled OPTIONS preflight request");
        return StatusCode::OK.into_response();
    }

    if method == Method::POST && uri.path().contains(RESERVATION_PATH) {
        return match submit_reservation(reservation_store, &headers, &body).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Failed to process reservation submission due to: {}", e);
                e.into_response()
            }
        };
    }

    warn!("Method or path not recognized: {} {}", method, uri.path());
    IntakeError::RouteNotAllowed.into_response()
}

/// Fields of a reservation form as submitted by the client. Absent and blank
/// values are equivalent; both fail validation.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ReservationSubmission {
    pub date: Option<String>,
    pub child_name: Option<String>,
    pub parent_name: Option<String>,
    pub parent_email: Option<String>,
}

impl ReservationSubmission {
    /// Validates the required fields and stamps the record with the write
    /// time, which acts as the sort key in the reservation table.
    pub fn into_reservation(self) -> Result<Reservation, IntakeError> {
        let date = present(self.date);
        let child_name = present(self.child_name);
        let parent_name = present(self.parent_name);
        let parent_email = present(self.parent_email);

        match (date, child_name, parent_name, parent_email) {
            (Some(date), Some(child_name), Some(parent_name), Some(parent_email)) => {
                let reservation_timestamp = OffsetDateTime::now_utc()
                    .format(&Rfc3339)
                    .map_err(|e| IntakeError::Internal(e.into()))?;
                Ok(Reservation {
                    parent_email,
                    reservation_timestamp,
                    date,
                    child_name,
                    parent_name,
                })
            }
            _ => Err(IntakeError::MissingFields),
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

async fn submit_reservation(
    reservation_store: Arc<dyn ReservationStore>,
    headers: &HeaderMap,
    body: &str,
) -> Result<Response, IntakeError> {
    if body.is_empty() {
        return Err(IntakeError::EmptyBody);
    }

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    let submission = decode_submission(content_type, body)?;
    let reservation = submission.into_reservation()?;

    reservation_store
        .put_reservation(&reservation)
        .await
        .map_err(IntakeError::Internal)?;

    info!("Stored reservation for parent: {}", reservation.parent_email);
    Ok((
        StatusCode::OK,
        Json(json!({"message": "Reservation saved successfully!"})),
    )
        .into_response())
}

/// JSON submissions must parse cleanly; anything else is read as a URL
/// encoded form, with repeated fields collapsed to their first value.
fn decode_submission(content_type: &str, body: &str) -> Result<ReservationSubmission, IntakeError> {
    if content_type.contains("application/json") {
        return serde_json::from_str(body).map_err(|e| IntakeError::Internal(e.into()));
    }

    let mut submission = ReservationSubmission::default();
    for (key, value) in url::form_urlencoded::parse(body.as_bytes()) {
        let slot = match key.as_ref() {
            "date" => &mut submission.date,
            "child_name" => &mut submission.child_name,
            "parent_name" => &mut submission.parent_name,
            "parent_email" => &mut submission.parent_email,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value.into_owned());
        }
    }
    Ok(submission)
}
