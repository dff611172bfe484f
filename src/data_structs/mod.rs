//! This module contains the tree representation of a secondary structure
//! and the parser that builds it from dot-bracket notation.
//!
//! - [`StructureNode`]: a single tree node, either an unpaired residue
//!   ([`StructureNode::Leaf`]) or a base pair enclosing a sub-structure
//!   ([`StructureNode::Pair`]).
//! - [`Structure`]: an ordered list of sibling nodes sharing one parent.
//! - [`StructureStats`]: leaf/pair counts and nesting depth of a tree.
//! - [`ParseOptions`] and [`parse`]: the dot-bracket parser and its label
//!   mode.

mod parse;
mod structure;


pub use parse::{
    parse,
    ParseOptions,
};
pub use structure::{
    Structure,
    StructureNode,
    StructureStats,
};
