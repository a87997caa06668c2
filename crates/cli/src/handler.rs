//! Lambda handler glue
//!
//! Accepts the raw event as JSON so that a malformed envelope is handled by
//! the pipeline (as a server error) instead of failing inside the runtime.

use lambda_runtime::{Error, LambdaEvent};
use zoolanding_core::{HttpResponse, SuffixSource, UtcCalendar};
use zoolanding_pipeline::IngestPipeline;
use zoolanding_storage::ObjectStore;

/// Handle one Lambda invocation.
pub async fn handle<S, C, R>(
    pipeline: &IngestPipeline<S, C, R>,
    event: LambdaEvent<serde_json::Value>,
) -> Result<HttpResponse, Error>
where
    S: ObjectStore,
    C: UtcCalendar,
    R: SuffixSource,
{
    let (payload, context) = event.into_parts();
    let request_id = Some(context.request_id.as_str()).filter(|id| !id.is_empty());
    let response = pipeline.handle_event(payload, request_id).await;
    Ok(response.into_http())
}
