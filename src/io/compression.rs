#[cfg(feature = "compression")]
mod inner {
    use std::fs::File;
    use std::io::{
        Read,
        Write,
    };
    use std::path::Path;

    /// Stream codec of an input or output file, picked from its name.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum Compression {
        None,
        Gz,
        Zstd,
        Bzip2,
        Xz2,
    }

    impl Compression {
        pub fn name(&self) -> &str {
            match self {
                Compression::None => "none",
                Compression::Gz => "gzip",
                Compression::Zstd => "zstd",
                Compression::Bzip2 => "bzip2",
                Compression::Xz2 => "xz2",
            }
        }

        /// Any name ending in `gz` (`.gz`, `.bgz`, `.tgz`) is gzip.
        pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
            let name = path.as_ref().to_string_lossy();
            if name.ends_with("gz") {
                Compression::Gz
            }
            else if name.ends_with(".zst") {
                Compression::Zstd
            }
            else if name.ends_with(".bz2") {
                Compression::Bzip2
            }
            else if name.ends_with(".xz") {
                Compression::Xz2
            }
            else {
                Compression::None
            }
        }

        pub fn get_decoder(
            &self,
            handle: File,
        ) -> anyhow::Result<Box<dyn Read>> {
            let decoder: Box<dyn Read> = match self {
                Compression::Gz => Box::new(flate2::read::MultiGzDecoder::new(handle)),
                Compression::Zstd => Box::new(zstd::Decoder::new(handle)?),
                Compression::Bzip2 => Box::new(bzip2::read::BzDecoder::new(handle)),
                Compression::Xz2 => Box::new(xz2::read::XzDecoder::new(handle)),
                Compression::None => Box::new(handle),
            };
            Ok(decoder)
        }

        pub fn get_encoder<W: Write>(
            &self,
            handle: W,
            compression_level: u32,
        ) -> anyhow::Result<Encoder<W>> {
            let encoder = match self {
                Compression::Gz => Encoder::Gz(flate2::write::GzEncoder::new(
                    handle,
                    flate2::Compression::new(compression_level),
                )),
                Compression::Zstd => {
                    Encoder::Zstd(zstd::Encoder::new(handle, compression_level as i32)?)
                },
                Compression::Bzip2 => Encoder::Bzip2(bzip2::write::BzEncoder::new(
                    handle,
                    bzip2::Compression::new(compression_level),
                )),
                Compression::Xz2 => Encoder::Xz2(xz2::write::XzEncoder::new(
                    handle,
                    compression_level,
                )),
                Compression::None => Encoder::None(handle),
            };
            Ok(encoder)
        }
    }

    /// Compressing writer. The stream is complete only after
    /// [`Encoder::finish`].
    pub enum Encoder<W: Write> {
        None(W),
        Gz(flate2::write::GzEncoder<W>),
        Zstd(zstd::Encoder<'static, W>),
        Bzip2(bzip2::write::BzEncoder<W>),
        Xz2(xz2::write::XzEncoder<W>),
    }

    impl<W: Write> Encoder<W> {
        /// Writes the codec trailer, flushes and returns the inner writer.
        pub fn finish(self) -> std::io::Result<W> {
            let mut inner = match self {
                Encoder::None(inner) => inner,
                Encoder::Gz(encoder) => encoder.finish()?,
                Encoder::Zstd(encoder) => encoder.finish()?,
                Encoder::Bzip2(encoder) => encoder.finish()?,
                Encoder::Xz2(encoder) => encoder.finish()?,
            };
            inner.flush()?;
            Ok(inner)
        }
    }

    impl<W: Write> Write for Encoder<W> {
        fn write(
            &mut self,
            buf: &[u8],
        ) -> std::io::Result<usize> {
            match self {
                Encoder::None(inner) => inner.write(buf),
                Encoder::Gz(encoder) => encoder.write(buf),
                Encoder::Zstd(encoder) => encoder.write(buf),
                Encoder::Bzip2(encoder) => encoder.write(buf),
                Encoder::Xz2(encoder) => encoder.write(buf),
            }
        }

        fn flush(&mut self) -> std::io::Result<()> {
            match self {
                Encoder::None(inner) => inner.flush(),
                Encoder::Gz(encoder) => encoder.flush(),
                Encoder::Zstd(encoder) => encoder.flush(),
                Encoder::Bzip2(encoder) => encoder.flush(),
                Encoder::Xz2(encoder) => encoder.flush(),
            }
        }
    }

}

#[cfg(feature = "compression")]
pub use inner::*;
