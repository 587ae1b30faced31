// src/samples/mod.rs
// =============================================================================
// SDK code samples that get attached to operations in the OpenAPI document.
//
// The samples live in table.rs as static data. At startup they are indexed
// into an ExampleTable keyed by (path, method); building the index fails if
// the same key shows up twice, so there is never a question of which entry
// wins.
//
// Rust concepts:
// - &'static str: String data baked into the binary, never allocated
// - BTreeMap: Sorted map, gives a stable iteration order for logging
// =============================================================================

mod table;

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, SyncError};

/// One usage snippet, serialized as `{ "lang", "label", "source" }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodeSample {
    pub lang: &'static str,
    pub label: &'static str,
    pub source: &'static str,
}

/// The samples for a single operation, as written in the static table
#[derive(Debug, Clone, Copy)]
pub struct OperationSamples {
    pub path: &'static str,
    pub method: &'static str,
    pub samples: &'static [CodeSample],
}

/// The samples for one operation, pre-rendered as the JSON array that gets
/// inserted into the document
#[derive(Debug)]
pub struct ExampleSet {
    samples: &'static [CodeSample],
    rendered: Value,
}

impl ExampleSet {
    pub fn samples(&self) -> &'static [CodeSample] {
        self.samples
    }

    pub fn to_value(&self) -> Value {
        self.rendered.clone()
    }
}

/// Read-only index of code samples by (path, method)
#[derive(Debug)]
pub struct ExampleTable {
    entries: BTreeMap<(&'static str, &'static str), ExampleSet>,
}

impl ExampleTable {
    /// Builds the table shipped with the binary
    pub fn builtin() -> Result<Self> {
        Self::from_entries(table::SDK_EXAMPLES)
    }

    /// Indexes `entries`, rejecting duplicate (path, method) keys
    ///
    /// Methods are normalized to the lowercase keys OpenAPI uses before the
    /// duplicate check, so "post" and "POST" collide.
    pub fn from_entries(entries: &[OperationSamples]) -> Result<Self> {
        let mut table: BTreeMap<(&'static str, &'static str), ExampleSet> = BTreeMap::new();

        for entry in entries {
            let method =
                canonical_method(entry.method).ok_or_else(|| SyncError::UnknownMethod {
                    path: entry.path.to_string(),
                    method: entry.method.to_string(),
                })?;

            if table.contains_key(&(entry.path, method)) {
                return Err(SyncError::DuplicateExamples {
                    path: entry.path.to_string(),
                    method: method.to_uppercase(),
                });
            }

            let rendered = serde_json::to_value(entry.samples).map_err(SyncError::Serialize)?;
            table.insert(
                (entry.path, method),
                ExampleSet {
                    samples: entry.samples,
                    rendered,
                },
            );
        }

        Ok(Self { entries: table })
    }

    /// Iterates over (path, method, example set) in sorted key order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str, &ExampleSet)> {
        self.entries
            .iter()
            .map(|(&(path, method), set)| (path, method, set))
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

// Maps a method name onto the lowercase key used in an OpenAPI path item
fn canonical_method(method: &str) -> Option<&'static str> {
    const METHODS: [&str; 8] = ["get", "put", "post", "delete", "options", "head", "patch", "trace"];

    METHODS
        .into_iter()
        .find(|candidate| candidate.eq_ignore_ascii_case(method))
}
