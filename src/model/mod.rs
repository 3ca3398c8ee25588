//! Extraction model: apply an alias table to parsed documents.

use crate::doc::{SourceDoc, resolve};
use crate::fields::{AliasTable, FieldPath, Segment};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct DocumentView {
    /// Line in the input file this document came from.
    pub line: usize,

    /// Event discriminator (`processor.event`) when the document carries one.
    pub event: Option<String>,

    /// Aliases that resolved, with the value found. A literal null counts as
    /// resolved.
    pub fields: BTreeMap<String, Value>,

    /// Aliases whose path hit a missing segment.
    pub absent: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TotalsView {
    pub documents: usize,
    pub aliases: usize,
    pub resolved: usize,
    pub absent: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    pub documents: Vec<DocumentView>,
    pub totals: TotalsView,
}

/// Resolve every alias against every document. Entries are independent, so
/// this is a straight double loop; totals are summed as we go.
pub fn build_extract_report(table: &AliasTable, docs: &[SourceDoc]) -> ReportData {
    let event_path = FieldPath(vec![
        Segment::Key("processor".to_string()),
        Segment::Key("event".to_string()),
    ]);

    let mut views = Vec::new();
    let mut resolved_total = 0usize;
    let mut absent_total = 0usize;

    for doc in docs {
        let event = resolve(&doc.value, &event_path)
            .and_then(Value::as_str)
            .map(str::to_string);

        let mut fields = BTreeMap::new();
        let mut absent = Vec::new();
        for (name, path) in &table.entries {
            match resolve(&doc.value, path) {
                Some(value) => {
                    fields.insert(name.clone(), value.clone());
                    resolved_total += 1;
                }
                None => {
                    absent.push(name.clone());
                    absent_total += 1;
                }
            }
        }

        // table.entries iterates in key order, so `absent` comes out sorted.
        views.push(DocumentView {
            line: doc.line,
            event,
            fields,
            absent,
        });
    }

    ReportData {
        totals: TotalsView {
            documents: docs.len(),
            aliases: table.entries.len(),
            resolved: resolved_total,
            absent: absent_total,
        },
        documents: views,
    }
}
