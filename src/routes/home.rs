//! Greeting page handler.

use axum::{extract::State, response::Html, Extension};
use tracing::instrument;

use crate::middleware::RequestId;
use crate::state::AppState;

/// Serves the session greeting configured at startup.
#[instrument(name = "home::index", skip_all)]
pub async fn index(
    State(state): State<AppState>,
    request_id: Option<Extension<RequestId>>,
) -> Html<String> {
    if let Some(Extension(RequestId(id))) = request_id {
        tracing::trace!(request_id = %id, "Serving greeting");
    }
    Html(state.config.greeting.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, Session};

    #[tokio::test]
    async fn index_returns_session_greeting() {
        let config = AppConfig::with_port_override(Session::Session3, None).unwrap();
        let state = AppState::new(config);

        let Html(body) = index(State(state), None).await;
        assert_eq!(body, "Hello, DevOps Workshop with Flask!");
    }
}
