//! NDJSON document loading: one JSON object per line.

use anyhow::{Context, bail};
use serde_json::Value;
use std::fs;

/// A single telemetry document plus the input line it came from.
#[derive(Debug, Clone)]
pub struct SourceDoc {
    pub line: usize,
    pub value: Value,
}

/// Parse an NDJSON file into documents. Blank lines are skipped.
///
/// Example line:
/// {"processor":{"event":"span"},"span":{"id":"span id"}}
pub fn parse_doc_file(path: &str) -> anyhow::Result<Vec<SourceDoc>> {
    let text = fs::read_to_string(path).with_context(|| format!("read docs file {}", path))?;
    parse_docs(&text, path)
}

/// Line-oriented parse, split out so it can run on in-memory input.
fn parse_docs(text: &str, path: &str) -> anyhow::Result<Vec<SourceDoc>> {
    let mut out = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let lno = lineno + 1;

        if line.trim().is_empty() {
            continue;
        }

        let value: Value = match serde_json::from_str(line) {
            Ok(v) => v,
            Err(e) => {
                bail!("document parse error at {}:{}: {}", path, lno, e);
            }
        };

        if !value.is_object() {
            bail!("document at {}:{} is not a JSON object", path, lno);
        }

        out.push(SourceDoc { line: lno, value });
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn parses_one_document_per_line() {
        let text = concat!(
            r#"{"processor":{"event":"transaction"},"transaction":{"id":"t1"}}"#,
            "\n",
            "\n",
            r#"{"processor":{"event":"span"},"span":{"id":"s1"}}"#,
            "\n",
        );
        let docs = parse_docs(text, "docs.ndjson").unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].line, 1);
        assert_eq!(docs[1].line, 3);
        assert_eq!(docs[1].value["span"]["id"], json!("s1"));
    }

    #[test]
    fn reports_line_numbers_for_bad_json() {
        let text = "{\"ok\":true}\nnot json\n";
        let err = parse_docs(text, "docs.ndjson").unwrap_err();
        assert!(err.to_string().contains("docs.ndjson:2"));
    }

    #[test]
    fn rejects_non_object_documents() {
        let err = parse_docs("[1,2,3]\n", "docs.ndjson").unwrap_err();
        assert!(err.to_string().contains("not a JSON object"));
    }
}
