//! Input and output of dot-bracket records.
//!
//! - [`vienna`]: reads a Vienna-format record (optional `>` header, sequence
//!   lines, structure lines) from plain or compressed text.
//! - [`dot`]: writes a parsed [`Structure`](crate::Structure) as a Graphviz
//!   graph.
//! - [`compression`]: codec detection from file names (feature
//!   `compression`).

#[cfg(feature = "compression")]
pub mod compression;
pub mod dot;
pub mod vienna;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;

#[cfg(feature = "compression")]
const OUTPUT_COMPRESSION_LEVEL: u32 = 6;

/// Opens `path` for reading, decompressing it when the name says so.
pub fn open_input<P: AsRef<Path>>(path: P) -> anyhow::Result<Box<dyn Read>> {
    let path = path.as_ref();
    let handle = File::open(path)
        .with_context(|| format!("Failed to open input file {}", path.display()))?;
    #[cfg(feature = "compression")]
    let reader = {
        let compression = compression::Compression::from_path(path);
        log::debug!("Reading {} ({})", path.display(), compression.name());
        compression.get_decoder(handle)?
    };
    #[cfg(not(feature = "compression"))]
    let reader: Box<dyn Read> = Box::new(handle);
    Ok(reader)
}

/// Output file, compressed according to its name. Call
/// [`OutputWriter::finish`] once everything is written.
#[cfg(feature = "compression")]
pub type OutputWriter = compression::Encoder<File>;

/// Output file. Call [`OutputWriter::finish`] once everything is written.
#[cfg(not(feature = "compression"))]
pub struct OutputWriter(File);

#[cfg(not(feature = "compression"))]
impl OutputWriter {
    pub fn finish(mut self) -> std::io::Result<File> {
        std::io::Write::flush(&mut self.0)?;
        Ok(self.0)
    }
}

#[cfg(not(feature = "compression"))]
impl std::io::Write for OutputWriter {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> std::io::Result<usize> {
        std::io::Write::write(&mut self.0, buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        std::io::Write::flush(&mut self.0)
    }
}

/// Creates `path` for writing, compressing it when the name says so.
pub fn create_output<P: AsRef<Path>>(path: P) -> anyhow::Result<OutputWriter> {
    let path = path.as_ref();
    let handle = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    #[cfg(feature = "compression")]
    let writer = {
        let compression = compression::Compression::from_path(path);
        log::debug!("Writing {} ({})", path.display(), compression.name());
        compression.get_encoder(handle, OUTPUT_COMPRESSION_LEVEL)?
    };
    #[cfg(not(feature = "compression"))]
    let writer = OutputWriter(handle);
    Ok(writer)
}
