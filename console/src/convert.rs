use std::io::{
    BufWriter,
    Write,
};
use std::path::PathBuf;

use anyhow::Context;
use bp2dot::prelude::*;
use clap::Args;
use log::info;

#[derive(Debug, Clone, Args)]
pub(crate) struct ConvertArgs {
    #[arg(
        short,
        long,
        required = true,
        value_name = "FILE",
        help = "Input structure in Vienna format (.gz, .zst, .bz2 and .xz are decompressed)."
    )]
    input: PathBuf,

    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Output file for the dot graph. If not set, the graph is written to the standard \
                output."
    )]
    output: Option<PathBuf>,

    #[arg(
        short,
        long,
        help = "Suffix every label with the 1-based position of its residue."
    )]
    positions: bool,
}

impl ConvertArgs {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::default().with_positions(self.positions)
    }

    /// Reads and parses the whole input before touching the output, so a
    /// malformed record leaves no output file behind.
    pub fn run(&self) -> anyhow::Result<()> {
        let record = ViennaReader::from_path(&self.input)?
            .read_record()
            .with_context(|| format!("Failed to read {}", self.input.display()))?;
        let structure = record
            .parse(&self.parse_options())
            .with_context(|| format!("Failed to parse structure in {}", self.input.display()))?;
        info!(
            "Parsed {}: {}",
            record.description().unwrap_or("record"),
            structure.stats()
        );

        match &self.output {
            Some(path) => {
                let mut sink = BufWriter::new(create_output(path)?);
                write_graph(&structure, &mut sink)
                    .and_then(|_| sink.into_inner().map_err(|e| e.into_error()))
                    .and_then(OutputWriter::finish)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!("Graph written to {}", path.display());
            },
            None => {
                write_graph(&structure, std::io::stdout().lock())
                    .context("Failed to write to standard output")?;
            },
        }
        Ok(())
    }
}

fn write_graph<W: Write>(
    structure: &Structure,
    sink: W,
) -> std::io::Result<()> {
    DotWriter::new(sink).write_structure(structure)
}
