use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One graded exam kept in the correction history.
///
/// Immutable once created except for deletion. `image_preview` is a data-URL
/// encoded thumbnail and is the heavy part of the record; it may be shed
/// when the store runs out of room.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamCorrection {
    pub id: Uuid,
    /// Epoch milliseconds.
    pub timestamp: i64,
    pub analysis: String,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_preview: Option<String>,
}

impl ExamCorrection {
    pub fn new(analysis: String, sources: Vec<String>, image_preview: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now().timestamp_millis(),
            analysis,
            sources,
            image_preview,
        }
    }

    /// Copy of this record with the image payload shed.
    pub fn without_image(&self) -> Self {
        Self {
            image_preview: None,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_image_keeps_identity() {
        let record = ExamCorrection::new(
            "análise".to_string(),
            vec!["https://example.com".to_string()],
            Some("data:image/png;base64,AAAA".to_string()),
        );

        let stripped = record.without_image();
        assert_eq!(stripped.id, record.id);
        assert_eq!(stripped.timestamp, record.timestamp);
        assert_eq!(stripped.analysis, record.analysis);
        assert_eq!(stripped.sources, record.sources);
        assert!(stripped.image_preview.is_none());
    }
}
