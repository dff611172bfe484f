//! # bp2dot
//!
//! `bp2dot` turns an RNA/DNA secondary structure in dot-bracket (Vienna)
//! notation into a Graphviz graph, so the nesting of base pairs can be drawn
//! as a tree. Base pairs become rounded boxes labelled with both residues,
//! unpaired residues become plain nodes hanging from the pair that encloses
//! them, and siblings are kept on one rank.
//!
//! If you do not want to use bp2dot as crate, check out the `bp2dot`
//! command-line tool in the `console` workspace member.
//!
//! ## Structure
//!
//! * [`data_structs`]: the structure tree ([`Structure`], [`StructureNode`])
//!   and the dot-bracket parser ([`parse`], [`ParseOptions`]).
//! * [`io`]: the Vienna record reader ([`ViennaReader`]), the DOT writer
//!   ([`DotWriter`]) and compressed file handling (feature `compression`,
//!   enabled by default).
//! * [`error`]: [`FormatError`], raised for malformed input.
//!
//! ## Usage
//!
//! ```
//! use bp2dot::prelude::*;
//!
//! let options = ParseOptions::default().with_positions(true);
//! let structure = parse("GCAU", "(.).", &options).unwrap();
//! assert_eq!(structure.nodes()[0].label(), "G1 - A3");
//!
//! let dot = to_dot_string(&structure).unwrap();
//! assert!(dot.starts_with("graph{"));
//! ```
//!
//! ### Converting a file
//!
//! ```no_run
//! use bp2dot::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let record = ViennaReader::from_path("hairpin.db.gz")?.read_record()?;
//!     let structure = record.parse(&ParseOptions::default())?;
//!     DotWriter::new(std::io::stdout().lock()).write_structure(&structure)?;
//!     Ok(())
//! }
//! ```

pub mod data_structs;
pub mod error;
pub mod io;
pub mod prelude;
pub mod utils;

pub use crate::data_structs::{
    parse,
    ParseOptions,
    Structure,
    StructureNode,
    StructureStats,
};
pub use crate::error::FormatError;
#[cfg(feature = "compression")]
pub use crate::io::compression::Compression;
pub use crate::io::dot::{
    serialize,
    to_dot_string,
    DotWriter,
};
pub use crate::io::vienna::{
    ViennaReader,
    ViennaRecord,
};
