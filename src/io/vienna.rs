//! Reader for Vienna-format secondary structure records.
//!
//! A record is an optional `>` description line, one or more sequence lines
//! and one or more dot-bracket lines:
//!
//! ```text
//! >tRNA-like hairpin
//! GGGAAAUCCGCAAAGC
//! UAAAAGCCC
//! (((...((...))..(
//! (...))))) (-4.20)
//! ```
//!
//! The first line containing `(`, `)` or `,` starts the structure. Only the
//! first whitespace-separated field of a structure line is kept, which drops
//! the free energy column RNAfold appends.

use std::io::BufRead;
use std::path::Path;

use anyhow::Context;
use log::{
    debug,
    warn,
};

use crate::data_structs::{
    parse,
    ParseOptions,
    Structure,
};
use crate::error::FormatError;

const DESCRIPTION_MARKER: char = '>';
const STRUCTURE_MARKERS: [char; 3] = ['(', ')', ','];

/// One sequence with its dot-bracket annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViennaRecord {
    description: Option<String>,
    sequence:    String,
    structure:   String,
}

impl ViennaRecord {
    /// Builds a record, checking that both strings have the same number of
    /// characters.
    pub fn try_new(
        description: Option<String>,
        sequence: String,
        structure: String,
    ) -> Result<Self, FormatError> {
        let (sequence_len, structure_len) =
            (sequence.chars().count(), structure.chars().count());
        if sequence_len != structure_len {
            return Err(FormatError::LengthMismatch {
                sequence:   sequence_len,
                annotation: structure_len,
            });
        }
        Ok(Self {
            description,
            sequence,
            structure,
        })
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn structure(&self) -> &str {
        &self.structure
    }

    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Parses the dot-bracket annotation into a structure tree.
    pub fn parse(
        &self,
        options: &ParseOptions,
    ) -> Result<Structure, FormatError> {
        parse(&self.sequence, &self.structure, options)
    }
}

pub struct ViennaReader<R: BufRead> {
    reader: R,
}

impl ViennaReader<std::io::BufReader<Box<dyn std::io::Read>>> {
    /// Opens a (possibly compressed) Vienna file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let handle = crate::io::open_input(path)?;
        Ok(Self::new(std::io::BufReader::new(handle)))
    }
}

impl<R: BufRead> ViennaReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Reads the first record of the input.
    ///
    /// # Errors
    ///
    /// I/O errors, or a [`FormatError`] (retrievable with
    /// `anyhow::Error::downcast_ref`) when no structure line is found or the
    /// sequence and structure lengths differ.
    pub fn read_record(&mut self) -> anyhow::Result<ViennaRecord> {
        let mut description = None;
        let mut sequence = String::new();
        let mut structure = String::new();
        let mut in_structure = false;
        let mut first_line = true;
        let mut more_records = false;

        for line in (&mut self.reader).lines() {
            let line = line.context("Failed to read Vienna input")?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if line.starts_with(DESCRIPTION_MARKER) {
                if first_line {
                    description = Some(line[1..].trim().to_string());
                    first_line = false;
                    continue;
                }
                more_records = true;
                break;
            }
            first_line = false;

            if !in_structure && line.contains(STRUCTURE_MARKERS) {
                in_structure = true;
            }
            if in_structure {
                if let Some(field) = line.split_whitespace().next() {
                    structure.push_str(field);
                }
            }
            else {
                sequence.push_str(line);
            }
        }

        if more_records {
            warn!("Input holds more than one record; only the first one is used");
        }
        if !in_structure {
            return Err(FormatError::MissingStructure.into());
        }

        let record = ViennaRecord::try_new(description, sequence, structure)?;
        debug!(
            "Read record {:?} with {} residues",
            record.description().unwrap_or("<unnamed>"),
            record.len()
        );
        Ok(record)
    }
}
