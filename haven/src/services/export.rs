use serde::Serialize;

use crate::error::Result;
use crate::models::{ChatExchange, IncidentReport};

pub const REPORTS_FILENAME: &str = "haven_reports.json";
pub const DEMO_LOG_FILENAME: &str = "haven_demo_log.json";

/// The downloadable demo-log document: chat history plus report history.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct DemoLog {
    pub chats: Vec<ChatExchange>,
    pub reports: Vec<IncidentReport>,
}

/// Pure projections of store snapshots into downloadable documents.
///
/// No filtering, transformation, or redaction; field names are exactly
/// the persisted entities'.
pub struct ExportService;

impl ExportService {
    pub fn render_reports(reports: &[IncidentReport]) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(reports)?)
    }

    pub fn render_demo_log(chats: Vec<ChatExchange>, reports: Vec<IncidentReport>) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(&DemoLog { chats, reports })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;
    use chrono::Utc;

    fn report(id: i64) -> IncidentReport {
        IncidentReport {
            id,
            lat: 28.4595,
            lng: 77.0266,
            severity: Severity::High,
            note: "SOS triggered: big".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn reports_document_is_a_verbatim_array() {
        let bytes = ExportService::render_reports(&[report(1), report(2)]).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        let arr = parsed.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0]["severity"], "High");
        assert_eq!(arr[0]["note"], "SOS triggered: big");
    }

    #[test]
    fn demo_log_keeps_both_tables_side_by_side() {
        let chat = ChatExchange {
            id: 1,
            question: "Is this area safe?".to_string(),
            answer: "Tap the map.".to_string(),
            created_at: Utc::now(),
        };
        let bytes = ExportService::render_demo_log(vec![chat], vec![report(3)]).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(parsed["chats"][0]["question"], "Is this area safe?");
        assert_eq!(parsed["reports"][0]["id"], 3);
    }
}
