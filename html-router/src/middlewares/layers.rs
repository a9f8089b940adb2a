use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    compression::CompressionLayer,
    trace::TraceLayer,
};

/// Negotiates encoding from the request's `Accept-Encoding` header.
pub fn compression_layer() -> CompressionLayer {
    CompressionLayer::new()
}

/// One `tracing` span per request, with status and latency on completion.
pub fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
}
