/*---------- Imports ----------*/
use crate::errors::RelayError;
use crate::models::cadence_import::UpstreamResponse;
use crate::utils::http::{body_size, parse_body, HttpResponse};
use crate::utils::salesloft::CadenceImportApi;
use lambda_http::http::{header::AUTHORIZATION, Method};
use lambda_http::{Body, Error, Request, Response};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Relays one request to the cadence imports endpoint.
///
/// The caller gets back either the upstream's status and body untouched, or
/// a `500` carrying `{"error": "..."}` when the body isn't JSON or the
/// upstream couldn't be reached. `OPTIONS` is answered locally.
pub async fn relay_cadence_import<A>(api: &A, request: Request) -> Result<Response<Body>, Error>
where
    A: CadenceImportApi + ?Sized,
{
    if request.method() == Method::OPTIONS {
        debug!("Answering CORS preflight");
        return Ok(HttpResponse::build_preflight_response()?);
    }

    info!(
        method = %request.method(),
        body_size = body_size(request.body()),
        "Relaying cadence import"
    );

    match forward(api, &request).await {
        Ok(upstream) => {
            info!(status = upstream.status, "Upstream responded");

            Ok(HttpResponse::build_passthrough_response(
                upstream.status,
                upstream.body,
            )?)
        }

        Err(error) => {
            warn!(error = %error, "Cadence import relay failed");

            Ok(HttpResponse::build_error_response(&error.to_string())?)
        }
    }
}

async fn forward<A>(api: &A, request: &Request) -> Result<UpstreamResponse, RelayError>
where
    A: CadenceImportApi + ?Sized,
{
    let payload: Value = parse_body(request.body())?;
    debug!(payload = %payload, "Parsed incoming payload");

    let authorization = request
        .headers()
        .get(AUTHORIZATION)
        .map(|value| value.as_bytes());

    api.create_cadence_import(authorization, &payload).await
}
