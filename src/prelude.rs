#[cfg(feature = "compression")]
pub use crate::io::compression::Compression;
pub use crate::io::{
    create_output,
    open_input,
    OutputWriter,
};
pub use crate::{
    parse,
    serialize,
    to_dot_string,
    DotWriter,
    FormatError,
    ParseOptions,
    Structure,
    StructureNode,
    StructureStats,
    ViennaReader,
    ViennaRecord,
};
