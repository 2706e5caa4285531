use lambda_http::{run, service_fn, tracing, Error};
use macbot_shared::AppState;
use std::sync::Arc;

mod http_handler;

use http_handler::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let state = Arc::new(AppState::from_env().await);

    run(service_fn(move |event| {
        let state = state.clone();
        async move { function_handler(event, state).await }
    }))
    .await
}
