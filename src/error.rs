//! Errors raised while framing or parsing a dot-bracket record.
//!
//! All positions are 1-based, the way residues are numbered in position
//! labels.

/// Malformed Vienna input. Every variant is fatal for the record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("no structure line found: expected a line containing '(', ')' or ','")]
    MissingStructure,
    #[error(
        "sequence and structure lengths differ: sequence has {sequence} residues, structure \
         has {annotation} symbols"
    )]
    LengthMismatch { sequence: usize, annotation: usize },
    #[error("unmatched ')' at position {position}")]
    UnmatchedClose { position: usize },
    #[error("unmatched '(' at position {position}")]
    UnmatchedOpen { position: usize },
    #[error("invalid structure symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
}
