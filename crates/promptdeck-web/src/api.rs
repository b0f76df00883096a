use gloo_net::http::Request;
use promptdeck_core::{CompletionError, CompletionRequest, CompletionResponse, GENERATE_PATH};

fn transport(e: gloo_net::Error) -> CompletionError {
    CompletionError::Transport(e.to_string())
}

/// Posts the form to the same-origin completion endpoint.
pub async fn generate(request: &CompletionRequest) -> Result<CompletionResponse, CompletionError> {
    let resp = Request::post(GENERATE_PATH)
        .json(request)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;

    if !resp.ok() {
        return Err(CompletionError::Status(resp.status()));
    }

    resp.json()
        .await
        .map_err(|e| CompletionError::Decode(e.to_string()))
}
