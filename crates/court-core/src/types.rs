//! Shared data model for dispute aggregation.
//!
//! Optional upstream fields are modeled as explicit `Option` members rather
//! than loose JSON maps, so "field may be absent" stays part of the contract.
//! All values are created fresh per request and discarded with the response.

use serde::{Deserialize, Serialize};

/// One dispute lookup request, constructed once and validated before any
/// network call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisputeInput {
    pub dispute_id: String,
    pub chain_id: u64,
}

/// Static descriptive metadata set at dispute creation. Upstream payloads
/// routinely omit most fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaEvidence {
    pub title: Option<String>,
    pub description: Option<String>,
    pub question: Option<String>,
    pub ruling_options: Option<RulingOptions>,
    pub category: Option<String>,
    pub lang: Option<String>,
    pub version: Option<String>,
}

/// `titles[i]` pairs positionally with `descriptions[i]`; the lists are not
/// guaranteed equal length, so consumers index defensively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RulingOptions {
    #[serde(rename = "type", default)]
    pub option_type: String,
    #[serde(default)]
    pub titles: Vec<String>,
    #[serde(default)]
    pub descriptions: Vec<String>,
}

/// One evidence reference as recorded by the index. Order is index-defined
/// and never re-sorted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceSubmission {
    #[serde(rename = "URI")]
    pub uri: String,
    pub sender: String,
    #[serde(rename = "creationTime")]
    pub creation_time: String,
}

/// Evidence document fetched from the URI named in a submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvidenceContent {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "fileURI")]
    pub file_uri: Option<String>,
    #[serde(rename = "fileTypeExtension")]
    pub file_type_extension: Option<String>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
}

/// Produced exactly when the content fetch for one submission fails. Carries
/// the original URI so the caller can correlate back to the submission list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceError {
    pub evidence_uri: String,
    pub error: String,
}

/// The result envelope for one dispute lookup.
///
/// Invariant: every evidence submission yields exactly one outcome, so
/// `evidence_contents.len() + evidence_errors.len()` equals the number of
/// submissions returned by the index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisputeData {
    pub dispute_id: String,
    pub chain_id: u64,
    pub meta_evidence: Option<MetaEvidence>,
    pub evidence_contents: Vec<EvidenceContent>,
    pub evidence_errors: Vec<EvidenceError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evidence_submission_uses_upstream_field_names() {
        let submission: EvidenceSubmission = serde_json::from_str(
            r#"{"URI": "/ipfs/QmHash", "sender": "0xabc", "creationTime": "1700000000"}"#,
        )
        .unwrap();
        assert_eq!(submission.uri, "/ipfs/QmHash");
        assert_eq!(submission.sender, "0xabc");
        assert_eq!(submission.creation_time, "1700000000");
    }

    #[test]
    fn evidence_content_tolerates_absent_fields() {
        let content: EvidenceContent = serde_json::from_str("{}").unwrap();
        assert_eq!(content, EvidenceContent::default());

        let content: EvidenceContent = serde_json::from_str(
            r#"{"title": "Proof", "fileURI": "/ipfs/QmFile", "fileTypeExtension": "pdf"}"#,
        )
        .unwrap();
        assert_eq!(content.title.as_deref(), Some("Proof"));
        assert_eq!(content.file_uri.as_deref(), Some("/ipfs/QmFile"));
        assert_eq!(content.file_type_extension.as_deref(), Some("pdf"));
        assert_eq!(content.description, None);
    }

    #[test]
    fn ruling_options_accept_unequal_lists() {
        let options: RulingOptions = serde_json::from_str(
            r#"{"type": "single-select", "titles": ["Yes", "No"], "descriptions": ["Accept"]}"#,
        )
        .unwrap();
        assert_eq!(options.titles.len(), 2);
        assert_eq!(options.descriptions.len(), 1);
        assert_eq!(options.descriptions.get(1), None);
    }

    #[test]
    fn envelope_serializes_with_camel_case_keys() {
        let data = DisputeData {
            dispute_id: "42".to_string(),
            chain_id: 1,
            meta_evidence: None,
            evidence_contents: vec![],
            evidence_errors: vec![EvidenceError {
                evidence_uri: "/ipfs/QmBad".to_string(),
                error: "timeout".to_string(),
            }],
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["disputeId"], "42");
        assert_eq!(json["chainId"], 1);
        assert!(json["metaEvidence"].is_null());
        assert_eq!(json["evidenceErrors"][0]["evidenceUri"], "/ipfs/QmBad");
    }
}
