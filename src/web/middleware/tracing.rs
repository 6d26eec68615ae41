//! Request tracing for every route.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Builds the `TraceLayer` wrapped around the whole router.
///
/// Each request gets an `INFO` span with method, path and HTTP version.
/// Request start is logged at `DEBUG`; the response line (status and
/// latency in ms) at `INFO`. Page renders and 303 redirects therefore show
/// up as one line each at the default level:
///
/// ```text
/// INFO request{method=POST uri=/catalog/note/create version=HTTP/1.1}: finished processing request latency=4 ms status=303
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
}
