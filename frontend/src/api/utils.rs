use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_storage::Storage;
use shared::{ErrorResponse, SharedError};

const SESSION_KEY: &str = "session_id";

/// Attaches the stored session as a bearer token, if there is one
fn with_session(req: RequestBuilder) -> RequestBuilder {
    match gloo_storage::LocalStorage::get::<String>(SESSION_KEY) {
        Ok(session_id) => req.header("Authorization", &format!("Bearer {}", session_id)),
        Err(_) => req,
    }
}

/// Creates a GET request with authentication
pub fn authenticated_get(url: &str) -> RequestBuilder {
    with_session(Request::get(url))
}

/// Creates a POST request with authentication
pub fn authenticated_post(url: &str) -> RequestBuilder {
    with_session(Request::post(url))
}

pub fn network_error(err: gloo_net::Error) -> SharedError {
    SharedError::Network(err.to_string())
}

/// Turns a non-2xx response into `SharedError::Server`
pub async fn ensure_success(response: Response) -> Result<Response, SharedError> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.title,
        Err(_) => response.status_text(),
    };
    Err(SharedError::server(status, message))
}
