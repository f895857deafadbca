use crate::error::FormatError;
use crate::format::Format;
use podscribe::LoadedTranscript;

pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Both renderings, guest and filename as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn serialize(&self, transcript: &LoadedTranscript) -> Result<String, FormatError> {
        serde_json::to_string_pretty(transcript)
            .map_err(|e| FormatError::SerializationError(format!("JSON serialization failed: {}", e)))
    }
}
