//! `GET /api/fixtures`: relay a fixtures query to the upstream API.

use axum::{
    extract::{RawQuery, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};

use crate::http::response::RelayError;
use crate::http::server::AppState;
use crate::upstream::query::today;
use crate::upstream::FixturesQuery;

/// Forwards `date` and `status` upstream and returns the body untouched.
///
/// Always answers 200 on a completed upstream exchange, whatever status the
/// upstream sent. Non-success upstream statuses are logged at `warn`.
pub async fn get_fixtures(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Response, RelayError> {
    let query = FixturesQuery::from_query_string(raw.as_deref()).resolve(today());

    tracing::debug!(
        date = %query.date,
        status = ?query.status,
        "Relaying fixtures request"
    );

    let upstream = state.upstream.fetch(&query).await?;

    if !upstream.status.is_success() {
        // TODO: decide whether to propagate upstream status codes instead of
        // always answering 200; existing clients may rely on the current framing.
        tracing::warn!(
            upstream_status = %upstream.status,
            "Upstream returned non-success status, relaying body as 200"
        );
    }

    Ok((
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        upstream.body,
    )
        .into_response())
}
