//! Effect handlers: pure async functions that return a `UiEvent`.

use secureface_core::api::ApiClient;
use secureface_core::store::PendingRequest;

use crate::events::UiEvent;

/// Sends `request` and reports the outcome back to the reducer.
pub async fn send_request(client: ApiClient, request: PendingRequest) -> UiEvent {
    let result = client.send(request.endpoint, &request.form).await;
    UiEvent::RequestCompleted { request, result }
}
