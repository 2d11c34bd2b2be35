//! Per-node record assembly with failure isolation.
//!
//! One malformed node must never abort the batch: every node is processed
//! inside its own fault boundary, and an unrecovered failure skips that
//! node (it is not zero-filled) while the batch continues.

use crate::attributes;
use crate::driver::{DriverResult, FeedDriver};
use crate::normalize;
use crate::options::Options;
use crate::resolver;
use crate::result::ExtractedRecord;

/// Assembles one record from one content node.
///
/// Field-level misses become empty strings. Only the node-level faults
/// described in the resolver (failure to enumerate a node's expand
/// controls or links) propagate out of here.
pub fn build_record<D: FeedDriver>(
    driver: &D,
    node: &D::Node,
    options: &Options,
) -> DriverResult<ExtractedRecord> {
    let author = resolver::resolve_author(driver, node, options);
    let body = resolver::resolve_body(driver, node, options);
    let body = resolver::expand_and_reresolve_body(driver, node, body, options)?;
    let url = resolver::resolve_permalink(driver, node, options)?;

    // Attributes read the pre-clean body so truncation markers cannot
    // interfere with boundary matches; only the stored text is cleaned.
    let email = body.as_deref().and_then(attributes::extract_email);
    let phone = body.as_deref().and_then(attributes::extract_phone);
    let location = match options.gazetteer {
        Some(ref table) => body
            .as_deref()
            .and_then(|b| attributes::extract_location_from(b, table.iter().map(String::as_str))),
        None => body.as_deref().and_then(attributes::extract_location),
    };
    let text = body.as_deref().and_then(normalize::clean);

    Ok(ExtractedRecord {
        name: author.unwrap_or_default(),
        email: email.unwrap_or_default(),
        phone_number: phone.unwrap_or_default(),
        location: location.unwrap_or_default(),
        url: url.unwrap_or_default(),
        text: text.unwrap_or_default(),
    })
}

/// Processes every node in snapshot order, isolating per-node failures.
///
/// A failing node is logged with its 1-based ordinal, noted in
/// `warnings`, and skipped; processing always continues with the next
/// node.
pub fn build_records<D: FeedDriver>(
    driver: &D,
    nodes: &[D::Node],
    options: &Options,
    warnings: &mut Vec<String>,
) -> Vec<ExtractedRecord> {
    let total = nodes.len();
    let mut records = Vec::with_capacity(total);

    for (index, node) in nodes.iter().enumerate() {
        let ordinal = index + 1;
        tracing::debug!(ordinal, total, "processing node");
        match build_record(driver, node, options) {
            Ok(record) => records.push(record),
            Err(err) => {
                tracing::warn!(ordinal, total, %err, "skipping node");
                warnings.push(format!("node {ordinal}/{total} skipped: {err}"));
            }
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::testing::{StubFeed, StubNode};

    fn options() -> Options {
        Options::default()
    }

    fn full_node() -> StubNode {
        StubNode {
            texts: [
                ("span.feed-shared-actor__name", "Asha Rao"),
                (
                    "span.break-words",
                    "Vendor onboarding open. Mail asha@acme.in or call +91 98765 43210. Hyderabad only. …more",
                ),
            ]
            .into_iter()
            .collect(),
            links: vec!["/posts/vendor-onboarding/"],
            ..StubNode::default()
        }
    }

    #[test]
    fn assembles_all_fields_from_one_node() {
        let feed = StubFeed {
            nodes: vec![full_node()],
            ..StubFeed::default()
        };
        let record = build_record(&feed, &0, &options()).map_err(|e| e.to_string());

        assert_eq!(
            record,
            Ok(ExtractedRecord {
                name: "Asha Rao".to_string(),
                email: "asha@acme.in".to_string(),
                phone_number: "+919876543210".to_string(),
                location: "Hyderabad".to_string(),
                url: "/posts/vendor-onboarding/".to_string(),
                text: "Vendor onboarding open. Mail asha@acme.in or call +91 98765 43210. \
                       Hyderabad only."
                    .to_string(),
            })
        );
    }

    #[test]
    fn unresolved_fields_default_to_empty_strings() {
        let feed = StubFeed {
            nodes: vec![StubNode {
                texts: [("p", "nothing to see here")].into_iter().collect(),
                ..StubNode::default()
            }],
            ..StubFeed::default()
        };
        let record = build_record(&feed, &0, &options()).map_err(|e| e.to_string());

        assert_eq!(
            record,
            Ok(ExtractedRecord {
                text: "nothing to see here".to_string(),
                ..ExtractedRecord::default()
            })
        );
    }

    #[test]
    fn custom_gazetteer_overrides_the_builtin_table() {
        let feed = StubFeed {
            nodes: vec![StubNode {
                texts: [("p", "meetups in oslo and hyderabad")].into_iter().collect(),
                ..StubNode::default()
            }],
            ..StubFeed::default()
        };
        let opts = Options {
            gazetteer: Some(vec!["Oslo".to_string()]),
            ..Options::default()
        };
        let record = build_record(&feed, &0, &opts).map_err(|e| e.to_string());
        assert!(matches!(record, Ok(ref r) if r.location == "Oslo"));
    }

    #[test]
    fn a_failing_node_is_skipped_and_the_batch_continues() {
        let feed = StubFeed {
            nodes: vec![
                full_node(),
                StubNode {
                    fail_all: true,
                    ..StubNode::default()
                },
                StubNode {
                    texts: [("p", "trailing node still processed")].into_iter().collect(),
                    ..StubNode::default()
                },
            ],
            ..StubFeed::default()
        };
        let nodes = vec![0, 1, 2];
        let mut warnings = Vec::new();
        let records = build_records(&feed, &nodes, &options(), &mut warnings);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Asha Rao");
        assert_eq!(records[1].text, "trailing node still processed");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("node 2/3 skipped"));
    }
}
