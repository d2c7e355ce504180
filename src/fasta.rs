//! FASTA parsing into an ordered set of records

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use log::{info, trace, warn};

use crate::error::{BiogenError, Result};
use crate::policy::Policy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub sequence: String,
}

/// Records keyed by identifier, iterated in order of first appearance.
///
/// Inserting an identifier that is already present replaces its sequence
/// in place; the record keeps the position of its first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<FastaRecord>,
    index: HashMap<String, usize>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the previous sequence if `id` was already present.
    pub fn insert(&mut self, id: String, sequence: String) -> Option<String> {
        match self.index.get(&id) {
            Some(&i) => Some(std::mem::replace(&mut self.records[i].sequence, sequence)),
            None => {
                self.index.insert(id.clone(), self.records.len());
                self.records.push(FastaRecord { id, sequence });
                None
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.index.get(id).map(|&i| self.records[i].sequence.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FastaRecord> {
        self.records.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.id.as_str())
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a FastaRecord;
    type IntoIter = std::slice::Iter<'a, FastaRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn finish_record(records: &mut RecordSet, id: String, sequence: String) {
    trace!("Finished record '{id}' ({} bases)", sequence.len());
    if records.insert(id.clone(), sequence).is_some() {
        warn!("Duplicate FASTA header '{id}', keeping the later record");
    }
}

/// Parse FASTA text line by line.
///
/// Blank lines are ignored. Sequence lines before the first header are an
/// error under `Policy::Strict` and are dropped under `Policy::Lenient`.
/// Sequence characters are not validated.
pub fn parse<R: BufRead>(reader: R, policy: Policy) -> Result<RecordSet> {
    let mut records = RecordSet::new();
    let mut current: Option<(String, String)> = None;

    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            if let Some((id, sequence)) = current.take() {
                finish_record(&mut records, id, sequence);
            }
            current = Some((header.trim().to_string(), String::new()));
        } else if let Some((_, sequence)) = current.as_mut() {
            sequence.push_str(line);
        } else if policy.is_lenient() {
            warn!("Dropping sequence data on line {} before any FASTA header", n + 1);
        } else {
            return Err(BiogenError::MalformedRecord { line: n + 1 });
        }
    }

    if let Some((id, sequence)) = current {
        finish_record(&mut records, id, sequence);
    }

    Ok(records)
}

pub fn parse_str(text: &str, policy: Policy) -> Result<RecordSet> {
    parse(text.as_bytes(), policy)
}

/// Read a FASTA file from disk, decompressing it first if the name ends in `.gz`.
pub fn read_fasta(path: impl AsRef<Path>, policy: Policy) -> Result<RecordSet> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| BiogenError::Io(e).with_path(path))?;

    let reader: Box<dyn Read> = if path.extension().is_some_and(|ext| ext == "gz") {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };

    let records = parse(BufReader::new(reader), policy).map_err(|e| e.with_path(path))?;
    info!("Parsed {} FASTA records from {path:?}", records.len());
    Ok(records)
}
