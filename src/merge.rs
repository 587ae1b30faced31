// src/merge.rs
// =============================================================================
// This module attaches SDK code samples to operations in the OpenAPI document.
//
// Rules:
// - Only operations that already exist in the document are touched
// - A path or method missing from the document is skipped silently
//   (the table may describe endpoints that are not deployed yet)
// - The `x-codeSamples` key is overwritten, never appended to, so running
//   the merge twice gives the same document as running it once
// - Every other key on the operation keeps its value and position
// =============================================================================

use std::fmt;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::samples::ExampleTable;

/// Vendor extension key that documentation renderers read samples from
pub const CODE_SAMPLES_KEY: &str = "x-codeSamples";

/// An operation that received code samples
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enriched {
    pub method: &'static str,
    pub path: &'static str,
    pub samples: usize,
}

impl fmt::Display for Enriched {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method.to_uppercase(), self.path)
    }
}

// Merges every table entry into `document` in place
//
// Returns the operations that were updated, in table order
pub fn merge_code_samples(document: &mut Value, table: &ExampleTable) -> Vec<Enriched> {
    info!("Merging SDK examples...");

    let Some(paths) = document.get_mut("paths").and_then(Value::as_object_mut) else {
        warn!("Document has no `paths` object, nothing to merge");
        return Vec::new();
    };

    let mut enriched = Vec::new();

    for (path, method, set) in table.iter() {
        let Some(operation) = paths
            .get_mut(path)
            .and_then(|item| item.get_mut(method))
            .and_then(Value::as_object_mut)
        else {
            debug!("Skipping {} {}: not in document", method.to_uppercase(), path);
            continue;
        };

        operation.insert(CODE_SAMPLES_KEY.to_string(), set.to_value());

        let entry = Enriched {
            method,
            path,
            samples: set.samples().len(),
        };
        info!("  ✓ Added {} to {}", CODE_SAMPLES_KEY, entry);
        enriched.push(entry);
    }

    enriched
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why `let ... else`?
//    - Each lookup can fail (missing path, missing method, not an object)
//    - let-else binds on success and bails out of the iteration otherwise
//    - Keeps the happy path at one indentation level
//
// 2. Why does insert keep key order?
//    - serde_json is built with 'preserve_order', so objects are IndexMaps
//    - Inserting an existing key replaces the value in its current slot
//    - A new key is appended at the end, after the operation's own keys
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::{CodeSample, OperationSamples};
    use serde_json::json;

    const FOUR: &[CodeSample] = &[
        CodeSample { lang: "javascript", label: "One", source: "one()" },
        CodeSample { lang: "javascript", label: "Two", source: "two()" },
        CodeSample { lang: "javascript", label: "Three", source: "three()" },
        CodeSample { lang: "bash", label: "cURL", source: "curl -X POST" },
    ];

    fn events_table() -> ExampleTable {
        ExampleTable::from_entries(&[OperationSamples {
            path: "/v1/events",
            method: "post",
            samples: FOUR,
        }])
        .unwrap()
    }

    #[test]
    fn test_merge_sets_samples_and_keeps_other_keys() {
        let mut document = json!({
            "paths": {
                "/v1/events": {
                    "post": { "summary": "Create event", "operationId": "createEvent" }
                }
            }
        });

        let enriched = merge_code_samples(&mut document, &events_table());

        assert_eq!(enriched.len(), 1);
        assert_eq!(enriched[0].to_string(), "POST /v1/events");
        assert_eq!(enriched[0].samples, 4);

        let operation = &document["paths"]["/v1/events"]["post"];
        assert_eq!(operation["summary"], "Create event");
        assert_eq!(operation["operationId"], "createEvent");

        let samples = operation[CODE_SAMPLES_KEY].as_array().unwrap();
        assert_eq!(samples.len(), 4);
        assert_eq!(samples[0], json!({ "lang": "javascript", "label": "One", "source": "one()" }));
        assert_eq!(samples[3]["label"], "cURL");
    }

    #[test]
    fn test_merge_into_empty_operation() {
        let mut document = json!({ "paths": { "/v1/events": { "post": {} } } });

        merge_code_samples(&mut document, &events_table());

        let operation = document["paths"]["/v1/events"]["post"].as_object().unwrap();
        assert_eq!(operation.len(), 1);
        assert_eq!(operation[CODE_SAMPLES_KEY].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_merge_overwrites_existing_samples() {
        let mut document = json!({
            "paths": {
                "/v1/events": {
                    "post": {
                        "x-codeSamples": [{ "lang": "python", "label": "Old", "source": "old()" }]
                    }
                }
            }
        });

        merge_code_samples(&mut document, &events_table());

        let samples = document["paths"]["/v1/events"]["post"][CODE_SAMPLES_KEY]
            .as_array()
            .unwrap();
        assert_eq!(samples.len(), 4);
        assert!(samples.iter().all(|s| s["label"] != "Old"));
    }

    #[test]
    fn test_merge_is_idempotent() {
        let mut once = json!({
            "openapi": "3.1.0",
            "paths": {
                "/v1/events": { "post": { "summary": "Create" }, "get": { "summary": "List" } },
                "/v1/channels": { "get": {} }
            }
        });
        merge_code_samples(&mut once, &events_table());

        let mut twice = once.clone();
        merge_code_samples(&mut twice, &events_table());

        assert_eq!(once, twice);
        assert_eq!(
            serde_json::to_string(&once).unwrap(),
            serde_json::to_string(&twice).unwrap()
        );
    }

    #[test]
    fn test_merge_skips_missing_path() {
        let original = json!({
            "paths": { "/v1/channels": { "get": { "summary": "List channels" } } }
        });
        let mut document = original.clone();

        let enriched = merge_code_samples(&mut document, &events_table());

        assert!(enriched.is_empty());
        assert_eq!(document, original);
    }

    #[test]
    fn test_merge_skips_missing_method() {
        let original = json!({
            "paths": { "/v1/events": { "get": { "summary": "List events" } } }
        });
        let mut document = original.clone();

        let enriched = merge_code_samples(&mut document, &events_table());

        assert!(enriched.is_empty());
        assert_eq!(document, original);
        assert!(document["paths"]["/v1/events"].get("post").is_none());
    }

    #[test]
    fn test_merge_skips_non_object_path_item_and_operation() {
        let table = ExampleTable::from_entries(&[
            OperationSamples { path: "/v1/events", method: "post", samples: FOUR },
            OperationSamples { path: "/v1/identify", method: "post", samples: FOUR },
        ])
        .unwrap();
        let original = json!({
            "paths": {
                "/v1/events": [],
                "/v1/identify": { "post": "x" }
            }
        });
        let mut document = original.clone();

        let enriched = merge_code_samples(&mut document, &table);

        assert!(enriched.is_empty());
        assert_eq!(document, original);
    }

    #[test]
    fn test_merge_without_paths_is_a_no_op() {
        let original = json!({ "openapi": "3.1.0", "info": { "title": "EmitKit" } });
        let mut document = original.clone();

        let enriched = merge_code_samples(&mut document, &events_table());

        assert!(enriched.is_empty());
        assert_eq!(document, original);
    }

    #[test]
    fn test_merge_builtin_table() {
        let mut document = json!({
            "paths": {
                "/v1/events": { "post": {} },
                "/v1/identify": { "post": {} }
            }
        });

        let table = ExampleTable::builtin().unwrap();
        let enriched = merge_code_samples(&mut document, &table);

        let names: Vec<_> = enriched.iter().map(|e| e.to_string()).collect();
        assert_eq!(names, vec!["POST /v1/events", "POST /v1/identify"]);

        let identify = document["paths"]["/v1/identify"]["post"][CODE_SAMPLES_KEY]
            .as_array()
            .unwrap();
        assert_eq!(identify[0]["label"], "Identify User");
        assert_eq!(identify[2]["label"], "Use Aliases in Events");
    }
}
