use aws_sdk_rekognition::primitives::Blob;
use aws_sdk_rekognition::types::{Image, TextDetection};
use aws_sdk_rekognition::Client as RekognitionClient;

/// Fragment prefix that marks the MAC address line in a network settings
/// screenshot.
pub const MAC_ADDRESS_MARKER: &str = "MAC Address";

/// Reply posted when no fragment mentions a MAC address.
pub const NOT_FOUND_REPLY: &str = "No MAC Address in screenshot";

/// Runs Rekognition text detection over raw image bytes and returns the
/// detected fragments in the order the service reports them.
pub async fn detect_image_text(
    client: &RekognitionClient,
    image_bytes: Vec<u8>,
) -> Result<Vec<TextDetection>, String> {
    let image = Image::builder().bytes(Blob::new(image_bytes)).build();

    let output = match client.detect_text().image(image).send().await {
        Ok(output) => output,
        Err(e) => {
            tracing::error!("Unable to detect text in image: {}", e);
            return Err(format!("Rekognition detect_text error: {}", e));
        }
    };

    Ok(output.text_detections.unwrap_or_default())
}

/// Scans the fragments in order for the first one mentioning a MAC address
/// and builds the reply to post back to the channel.
pub fn find_mac_address(detections: &[TextDetection]) -> String {
    for detection in detections {
        if let Some(text) = detection.detected_text() {
            if text.contains(MAC_ADDRESS_MARKER) {
                return format!("{} was sent to IT. They'll connect you to the network!", text);
            }
        }
    }
    NOT_FOUND_REPLY.to_string()
}
