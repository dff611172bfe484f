use log::trace;

use super::{
    Structure,
    StructureNode,
};
use crate::error::FormatError;
use crate::with_field_fn;

/// Label mode of a parse run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Suffix every label with the 1-based position of its residue.
    pub positions: bool,
}

impl ParseOptions {
    with_field_fn!(positions, bool);
}

/// Parses a dot-bracket annotation over `sequence` into a structure tree.
///
/// `.` and `,` are unpaired positions, `(`/`)` open and close a base pair.
/// Both strings are compared by character count.
///
/// # Errors
///
/// - [`FormatError::LengthMismatch`] if the two strings differ in length;
/// - [`FormatError::UnmatchedClose`] / [`FormatError::UnmatchedOpen`] for
///   unbalanced brackets;
/// - [`FormatError::InvalidSymbol`] for any other annotation symbol.
pub fn parse(
    sequence: &str,
    annotation: &str,
    options: &ParseOptions,
) -> Result<Structure, FormatError> {
    let residues = sequence.chars().collect::<Vec<_>>();
    let symbols = annotation.chars().collect::<Vec<_>>();
    if residues.len() != symbols.len() {
        return Err(FormatError::LengthMismatch {
            sequence:   residues.len(),
            annotation: symbols.len(),
        });
    }

    let mut cursor = Cursor {
        residues: &residues,
        symbols: &symbols,
        ix: 0,
        options,
    };
    cursor.parse_level(None)
}

/// Scan position shared by every recursion level.
struct Cursor<'a> {
    residues: &'a [char],
    symbols:  &'a [char],
    ix:       usize,
    options:  &'a ParseOptions,
}

impl Cursor<'_> {
    fn label(
        &self,
        ix: usize,
    ) -> String {
        if self.options.positions {
            format!("{}{}", self.residues[ix], ix + 1)
        }
        else {
            self.residues[ix].to_string()
        }
    }

    /// Parses siblings until the end of the annotation or until a `)`.
    /// `open` is the position of the pair this level sits in. On return
    /// from a nested level `self.ix` points at its closing `)`.
    fn parse_level(
        &mut self,
        open: Option<usize>,
    ) -> Result<Structure, FormatError> {
        let mut level = Structure::default();

        while self.ix < self.symbols.len() {
            match self.symbols[self.ix] {
                '.' | ',' => {
                    level.push(StructureNode::leaf(self.label(self.ix)));
                    self.ix += 1;
                },
                '(' => {
                    let start = self.ix;
                    self.ix += 1;
                    let children = self.parse_level(Some(start))?;
                    let end = self.ix;
                    trace!("Pair {}-{}", start + 1, end + 1);
                    level.push(StructureNode::pair(
                        format!("{} - {}", self.label(start), self.label(end)),
                        children,
                    ));
                    self.ix = end + 1;
                },
                ')' => {
                    return match open {
                        Some(_) => Ok(level),
                        None => {
                            Err(FormatError::UnmatchedClose {
                                position: self.ix + 1,
                            })
                        },
                    };
                },
                symbol => {
                    return Err(FormatError::InvalidSymbol {
                        symbol,
                        position: self.ix + 1,
                    })
                },
            }
        }

        match open {
            Some(start) => {
                Err(FormatError::UnmatchedOpen {
                    position: start + 1,
                })
            },
            None => Ok(level),
        }
    }
}
