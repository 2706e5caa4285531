pub mod detection;
pub mod slack;
pub mod validation;

use aws_sdk_rekognition::Client as RekognitionClient;
use std::env;

/// Per-process state shared by every invocation: service clients plus the
/// two Slack credentials. Built once at startup, read-only afterwards.
pub struct AppState {
    pub rekognition_client: RekognitionClient,
    pub http_client: reqwest::Client,
    /// Shared secret Slack embeds in every event payload.
    pub verification_token: String,
    /// Bot OAuth token, used for both the file download and the reply post.
    pub access_token: String,
}

impl AppState {
    /// Loads the AWS configuration and Slack credentials from the
    /// environment. Panics if `VERIFICATION_TOKEN` or `ACCESS_TOKEN` is
    /// missing, so a misconfigured deploy fails at startup.
    pub async fn from_env() -> Self {
        let aws_config = aws_config::load_from_env().await;
        Self {
            rekognition_client: RekognitionClient::new(&aws_config),
            http_client: reqwest::Client::new(),
            verification_token: env::var("VERIFICATION_TOKEN")
                .expect("VERIFICATION_TOKEN must be set"),
            access_token: env::var("ACCESS_TOKEN").expect("ACCESS_TOKEN must be set"),
        }
    }
}
