//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// - One `INFO` span per request with method, URI and version
/// - Request start logged at `DEBUG`
/// - Response logged at `INFO` with status and latency in milliseconds
/// - 5xx responses additionally logged at `ERROR`
///
/// ```text
/// INFO request{method=POST uri=/shorten version=HTTP/1.1}: finished processing request latency=3 ms status=200
/// INFO request{method=GET uri=/3f9a01bc version=HTTP/1.1}: finished processing request latency=0 ms status=302
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}
