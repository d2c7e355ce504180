//! Batch processing of FASTA records

use std::path::Path;

use clap::ValueEnum;
use log::{info, trace, warn};

use crate::error::Result;
use crate::fasta::{read_fasta, FastaRecord, RecordSet};
use crate::policy::Policy;
use crate::sequence::{composition, Alphabet, Composition, Strand, Translation, Translator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum BatchMode {
    /// Only convert DNA to RNA.
    #[default]
    Transcribe,
    Translate,
    /// Transcribe, translate and report composition.
    All,
}

/// Which alphabet the records are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InputKind {
    Dna,
    Rna,
    /// Decide per record with `Alphabet::detect`.
    #[default]
    Auto,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    pub mode: BatchMode,
    pub input: InputKind,
    pub strand: Strand,
    pub policy: Policy,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordReport {
    pub id: String,
    pub sequence: String,
    pub rna: Option<String>,
    pub translation: Option<Translation>,
    /// `None` for empty sequences.
    pub composition: Option<Composition>,
}

fn process_record(
    record: &FastaRecord,
    translator: &Translator,
    options: &BatchOptions,
) -> Result<RecordReport> {
    let alphabet = match options.input {
        InputKind::Dna => Alphabet::Dna,
        InputKind::Rna => Alphabet::Rna,
        InputKind::Auto => Alphabet::detect(&record.sequence),
    };
    trace!("Processing record '{}' as {alphabet:?}", record.id);

    if !alphabet.is_valid(&record.sequence) {
        warn!("Record '{}' contains characters outside the {alphabet:?} alphabet", record.id);
    }

    let rna = match alphabet {
        Alphabet::Dna => options.strand.transcribe(&record.sequence),
        Alphabet::Rna => record.sequence.to_uppercase(),
    };

    let translation = match options.mode {
        BatchMode::Transcribe => None,
        BatchMode::Translate | BatchMode::All => Some(translator.translate(&rna)?),
    };

    let composition = match options.mode {
        BatchMode::All => composition(&record.sequence).ok(),
        _ => None,
    };

    let rna = match options.mode {
        BatchMode::Translate => None,
        BatchMode::Transcribe | BatchMode::All => Some(rna),
    };

    Ok(RecordReport {
        id: record.id.clone(),
        sequence: record.sequence.clone(),
        rna,
        translation,
        composition,
    })
}

/// Run every record through the configured steps, in set order.
///
/// Under `Policy::Strict` the first record that fails to translate aborts
/// the batch.
pub fn run_batch(records: &RecordSet, options: &BatchOptions) -> Result<Vec<RecordReport>> {
    let translator = Translator::new(options.policy);
    let reports = records
        .iter()
        .map(|record| process_record(record, &translator, options))
        .collect::<Result<Vec<_>>>()?;

    info!("Processed {} records in {:?} mode", reports.len(), options.mode);
    Ok(reports)
}

pub fn run_fasta(path: impl AsRef<Path>, options: &BatchOptions) -> Result<Vec<RecordReport>> {
    let records = read_fasta(path, options.policy)?;
    run_batch(&records, options)
}
