use serde::{Deserialize, Serialize};

use crate::storage::{SearchRecord, TestResult};

/// Body of `POST /api/track-search` and `POST /api/search-result`.
///
/// `mobileNumber` is kept as a raw JSON value so that a missing field, a
/// number or `null` all reach validation instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackSearchRequest {
    #[serde(rename = "mobileNumber", default)]
    pub mobile_number: Option<serde_json::Value>,
}

impl TrackSearchRequest {
    /// The submitted number, if it was a JSON string.
    pub fn mobile_number(&self) -> Option<&str> {
        self.mobile_number.as_ref().and_then(|v| v.as_str())
    }
}

#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub success: bool,
    pub data: TestResult,
    #[serde(rename = "whatsappLink", skip_serializing_if = "Option::is_none")]
    pub whatsapp_link: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchesResponse {
    pub success: bool,
    pub data: Vec<SearchRecord>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct AdminQuery {
    pub secret: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_number_accepts_only_strings() {
        let req: TrackSearchRequest =
            serde_json::from_str(r#"{"mobileNumber":"9876543210"}"#).unwrap();
        assert_eq!(req.mobile_number(), Some("9876543210"));

        let req: TrackSearchRequest = serde_json::from_str(r#"{"mobileNumber":9876543210}"#).unwrap();
        assert_eq!(req.mobile_number(), None);

        let req: TrackSearchRequest = serde_json::from_str(r#"{"mobileNumber":null}"#).unwrap();
        assert_eq!(req.mobile_number(), None);

        let req: TrackSearchRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.mobile_number(), None);
    }

    #[test]
    fn test_whatsapp_link_omitted_when_absent() {
        let body = LookupResponse {
            success: true,
            data: TestResult {
                id: 1,
                name: "Asha".to_string(),
                phone: "9876543210".to_string(),
                current_group: None,
                exam_date: None,
                result: Some("Pending".to_string()),
            },
            whatsapp_link: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("whatsappLink").is_none());
        assert_eq!(json["data"]["name"], "Asha");
    }
}
