use std::error::Error;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;

use biogen::batch::{run_fasta, BatchMode, BatchOptions, InputKind, RecordReport};
use biogen::logging::{
    init_logging, log_critical_error, log_shutdown, log_system_info, set_log_level,
};
use biogen::sequence::{
    analyze_mutation_impact, composition, detect_mutations, split_into_codons, Alphabet, Strand,
    Translation, Translator,
};
use biogen::{BiogenError, Policy};

#[derive(Parser, Debug)]
#[command(version, about = "DNA/RNA conversion, codon translation and FASTA batch processing")]
struct Args {
    /// Skip unrecognized codons and sequence lines before the first header instead of failing
    #[arg(long, global = true)]
    lenient: bool,

    /// Directory for log files (default: ~/.biogen/logs)
    #[arg(long, global = true, env = "BIOGEN_LOG_DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a DNA sequence to RNA
    Transcribe {
        /// DNA sequence; read from stdin when omitted
        sequence: Option<String>,
        /// Treat the input as the coding strand (T→U) instead of the template strand
        #[arg(long)]
        coding: bool,
    },
    /// Translate an RNA sequence into protein
    Translate {
        /// RNA sequence (or DNA with --dna); read from stdin when omitted
        sequence: Option<String>,
        /// Input is DNA and is transcribed first
        #[arg(long)]
        dna: bool,
        #[arg(long, requires = "dna")]
        coding: bool,
        /// Also print the RNA split into codons
        #[arg(long)]
        codons: bool,
    },
    /// Base counts and percentages of a sequence
    Composition {
        sequence: Option<String>,
    },
    /// Compare two sequences base by base and classify the protein-level effect
    Mutations {
        original: String,
        mutated: String,
        /// Inputs are RNA rather than coding-strand DNA
        #[arg(long)]
        rna: bool,
    },
    /// Process every record of a FASTA file
    Batch {
        #[arg(env = "BIOGEN_FASTA", default_value = "sequence.fasta")]
        fasta: PathBuf,
        #[arg(long, value_enum, default_value = "transcribe")]
        mode: BatchMode,
        #[arg(long, value_enum, default_value = "auto")]
        input: InputKind,
        #[arg(long)]
        coding: bool,
    },
}

fn strand(coding: bool) -> Strand {
    if coding {
        Strand::Coding
    } else {
        Strand::Template
    }
}

fn read_sequence(sequence: Option<String>, prompt: &str) -> Result<String, BiogenError> {
    if let Some(seq) = sequence {
        return Ok(seq.trim().to_string());
    }

    print!("{prompt}: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn report_stop(translation: &Translation) {
    if let Some(codon) = &translation.stop_codon {
        eprintln!("Translation stopped at codon {codon}");
    }
}

fn write_report<W: Write>(out: &mut W, report: &RecordReport) -> io::Result<()> {
    writeln!(out, ">{}", report.id)?;
    if let Some(rna) = &report.rna {
        writeln!(out, "RNA: {rna}")?;
    }
    if let Some(translation) = &report.translation {
        writeln!(out, "Protein: {translation}")?;
        if let Some(codon) = &translation.stop_codon {
            writeln!(out, "Stop: {codon}")?;
        }
    }
    if let Some(comp) = &report.composition {
        writeln!(out, "GC%: {:.2}  AT%: {:.2}", comp.gc_percent(), comp.at_percent())?;
    }
    Ok(())
}

fn run(args: Args) -> Result<(), BiogenError> {
    let policy = if args.lenient { Policy::Lenient } else { Policy::Strict };
    let mut out = BufWriter::new(io::stdout().lock());

    match args.command {
        Command::Transcribe { sequence, coding } => {
            let dna = read_sequence(sequence, "Enter DNA sequence")?;
            writeln!(out, "{}", strand(coding).transcribe(&dna))?;
        }
        Command::Translate { sequence, dna, coding, codons } => {
            let rna = if dna {
                let seq = read_sequence(sequence, "Enter DNA sequence")?;
                strand(coding).transcribe(&seq)
            } else {
                read_sequence(sequence, "Enter RNA sequence")?
            };
            if codons {
                writeln!(out, "{}", split_into_codons(&rna).join(" "))?;
            }
            let translation = Translator::new(policy).translate(&rna)?;
            report_stop(&translation);
            writeln!(out, "{translation}")?;
        }
        Command::Composition { sequence } => {
            let seq = read_sequence(sequence, "Enter DNA sequence")?;
            let comp = composition(&seq)?;
            writeln!(out, "Length: {}", comp.length)?;
            for base in ['A', 'C', 'G', 'T', 'U'] {
                if comp.count(base) > 0 {
                    writeln!(out, "{base}: {} ({:.2}%)", comp.count(base), comp.percent(base))?;
                }
            }
            writeln!(out, "GC%: {:.2}  AT%: {:.2}", comp.gc_percent(), comp.at_percent())?;
        }
        Command::Mutations { original, mutated, rna } => {
            let alphabet = if rna { Alphabet::Rna } else { Alphabet::Dna };
            for mutation in detect_mutations(&original, &mutated) {
                writeln!(out, "{mutation}")?;
            }
            let result = analyze_mutation_impact(&original, &mutated, alphabet, policy)?;
            writeln!(out, "Impact: {:?} - {}", result.impact, result.impact.description())?;
            writeln!(out, "Protein: {} -> {}", result.original, result.mutated)?;
        }
        Command::Batch { fasta, mode, input, coding } => {
            let options = BatchOptions { mode, input, strand: strand(coding), policy };
            info!("Running batch on {fasta:?}");
            for report in run_fasta(&fasta, &options)? {
                write_report(&mut out, &report)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    human_panic::setup_panic!();

    let args = Args::parse();

    set_log_level();
    if let Err(e) = init_logging(args.log_dir.clone()) {
        eprintln!("Logging disabled: {e}");
    }
    log_system_info();

    let result = run(args);
    if let Err(e) = &result {
        log_critical_error(&e.to_string(), Some("run"));
    }
    log_shutdown();

    result.map_err(Into::into)
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Args::command().debug_assert()
}
