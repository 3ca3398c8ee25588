//! Dotted field paths used by alias tables.
//!
//! Example path: error.exception[0].message
//!   =>  [Key("error"), Key("exception"), Index(0), Key("message")]
//!
//! Keys are separated by `.` and may carry `[n]` array indices. Paths are
//! parsed once at table load, so resolution never deals with strings.

use anyhow::{Context, bail};
use regex::Regex;

/// One step of a nested lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Descend into an object by key.
    Key(String),
    /// Descend into an array by position.
    Index(usize),
}

/// A parsed dotted path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(pub Vec<Segment>);

impl FieldPath {
    /// Parse "error.exception[0].message" into segments.
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        if s.is_empty() {
            bail!("empty field path");
        }

        // Shape check up front so the split below stays simple:
        // key([idx])* ( '.' key([idx])* )*  -- keys contain no '.', '[', ']'.
        let re = Regex::new(r"^[^.\[\]]+(\[[0-9]+\])*(\.[^.\[\]]+(\[[0-9]+\])*)*$")?;
        if !re.is_match(s) {
            bail!("malformed field path: {:?}", s);
        }

        let mut segments = Vec::new();
        for chunk in s.split('.') {
            // Peel `[n]` suffixes off the key.
            let (key, indices) = match chunk.find('[') {
                Some(i) => (&chunk[..i], &chunk[i..]),
                None => (chunk, ""),
            };
            segments.push(Segment::Key(key.to_string()));
            for idx in indices.split_terminator(']') {
                let idx = idx.trim_start_matches('[');
                segments.push(Segment::Index(
                    idx.parse::<usize>()
                        .with_context(|| format!("bad index in path {:?}", s))?,
                ));
            }
        }

        Ok(Self(segments))
    }
}
