//! Markdown rendering of the dispute data envelope.
//!
//! Pure, stateless formatting: the envelope in, a human-readable report out.

use kleros_court_core::{DisputeData, SupportedChain};

pub fn render_dispute_data(data: &DisputeData) -> String {
    let mut out = String::from("# Kleros Dispute Data\n\n");

    out.push_str(&format!("**Dispute ID:** {}\n", data.dispute_id));
    let chain_name = SupportedChain::from_chain_id(data.chain_id)
        .map(|chain| chain.name())
        .unwrap_or("Unknown network");
    out.push_str(&format!("**Chain:** {} ({})\n\n", chain_name, data.chain_id));

    match &data.meta_evidence {
        Some(meta) => {
            out.push_str("## Meta-Evidence\n");
            if let Some(title) = &meta.title {
                out.push_str(&format!("**Title:** {title}\n"));
            }
            if let Some(description) = &meta.description {
                out.push_str(&format!("**Description:** {description}\n"));
            }
            if let Some(question) = &meta.question {
                out.push_str(&format!("**Question:** {question}\n"));
            }
            if let Some(category) = &meta.category {
                out.push_str(&format!("**Category:** {category}\n"));
            }
            if let Some(options) = &meta.ruling_options {
                out.push_str("**Ruling Options:**\n");
                for (index, title) in options.titles.iter().enumerate() {
                    out.push_str(&format!("  {index}: {title}\n"));
                    // Descriptions pair positionally and may be shorter.
                    if let Some(description) = options.descriptions.get(index) {
                        out.push_str(&format!("     {description}\n"));
                    }
                }
            }
            out.push('\n');
        }
        None => {
            out.push_str("## Meta-Evidence\nNo meta-evidence found for this dispute.\n\n");
        }
    }

    if data.evidence_contents.is_empty() {
        out.push_str("## Evidence Submissions\nNo evidence submissions found for this dispute.\n\n");
    } else {
        out.push_str(&format!(
            "## Evidence Submissions ({})\n\n",
            data.evidence_contents.len()
        ));
        for (index, evidence) in data.evidence_contents.iter().enumerate() {
            out.push_str(&format!("### Evidence {}\n", index + 1));
            if let Some(title) = &evidence.title {
                out.push_str(&format!("**Title:** {title}\n"));
            }
            if let Some(description) = &evidence.description {
                out.push_str(&format!("**Description:** {description}\n"));
            }
            if let Some(content_type) = &evidence.content_type {
                out.push_str(&format!("**Type:** {content_type}\n"));
            }
            if let Some(file_uri) = &evidence.file_uri {
                out.push_str(&format!("**File URI:** {file_uri}\n"));
            }
            if let Some(extension) = &evidence.file_type_extension {
                out.push_str(&format!("**File Type:** {extension}\n"));
            }
            out.push('\n');
        }
    }

    if !data.evidence_errors.is_empty() {
        out.push_str(&format!(
            "## Evidence Retrieval Errors ({})\n\n",
            data.evidence_errors.len()
        ));
        for (index, error) in data.evidence_errors.iter().enumerate() {
            out.push_str(&format!("### Error {}\n", index + 1));
            out.push_str(&format!("**URI:** {}\n", error.evidence_uri));
            out.push_str(&format!("**Error:** {}\n\n", error.error));
        }
    }

    out
}
