use std::fs;
use std::io::{
    BufWriter,
    Write,
};

use bp2dot::prelude::*;
use flate2::write::GzEncoder;
use rstest::*;

const HAIRPIN_DOT: &str = "\
graph{ node[penwidth=3 fontsize=24] edge[penwidth=3]
 n_1[label=\"G - A\" shape=rectangle style=rounded]
   n_1_1[label=\"C\"]
   n_1 -- n_1_1
 n_2[label=\"U\"]
 {rank=same;n_1 n_2 }
}
";

fn convert_file(
    input: &std::path::Path,
    output: &std::path::Path,
    options: &ParseOptions,
) -> anyhow::Result<StructureStats> {
    let record = ViennaReader::from_path(input)?.read_record()?;
    let structure = record.parse(options)?;
    let mut sink = BufWriter::new(create_output(output)?);
    DotWriter::new(&mut sink).write_structure(&structure)?;
    sink.into_inner()
        .map_err(|e| e.into_error())?
        .finish()?;
    Ok(structure.stats())
}

#[fixture]
fn workdir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

#[rstest]
fn test_plain_file(workdir: tempfile::TempDir) -> anyhow::Result<()> {
    let input = workdir.path().join("hairpin.db");
    let output = workdir.path().join("hairpin.dot");
    fs::write(&input, ">hairpin\nGCAU\n(.).\n")?;

    let stats = convert_file(&input, &output, &ParseOptions::default())?;
    assert_eq!(stats.positions(), 4);
    assert_eq!(fs::read_to_string(&output)?, HAIRPIN_DOT);
    Ok(())
}

#[rstest]
fn test_gzip_input_and_output(workdir: tempfile::TempDir) -> anyhow::Result<()> {
    let input = workdir.path().join("hairpin.db.gz");
    let output = workdir.path().join("hairpin.dot.gz");
    {
        let mut encoder =
            GzEncoder::new(fs::File::create(&input)?, flate2::Compression::default());
        encoder.write_all(b">hairpin\nGC\nAU\n(.\n).\n")?;
        encoder.finish()?;
    }

    convert_file(&input, &output, &ParseOptions::default())?;

    let mut text = String::new();
    std::io::Read::read_to_string(
        &mut flate2::read::GzDecoder::new(fs::File::open(&output)?),
        &mut text,
    )?;
    assert_eq!(text, HAIRPIN_DOT);
    Ok(())
}

#[rstest]
fn test_length_mismatch_is_format_error(workdir: tempfile::TempDir) -> anyhow::Result<()> {
    let input = workdir.path().join("bad.db");
    fs::write(&input, "GCAUA\n(.).\n")?;

    let err = ViennaReader::from_path(&input)?.read_record().unwrap_err();
    assert_eq!(
        err.downcast_ref::<FormatError>(),
        Some(&FormatError::LengthMismatch {
            sequence:   5,
            annotation: 4,
        })
    );
    Ok(())
}

#[rstest]
fn test_unbalanced_is_format_error(workdir: tempfile::TempDir) -> anyhow::Result<()> {
    let input = workdir.path().join("unbalanced.db");
    fs::write(&input, "GCAU\n(.))\n")?;

    let record = ViennaReader::from_path(&input)?.read_record()?;
    assert_eq!(
        record.parse(&ParseOptions::default()),
        Err(FormatError::UnmatchedClose { position: 4 })
    );
    Ok(())
}

#[test]
fn test_missing_file() {
    assert!(ViennaReader::from_path("/nonexistent/input.db").is_err());
}

#[test]
fn test_rnafold_output_with_positions() -> anyhow::Result<()> {
    let text = ">seq1\nGGGAAACCC\n(((...))) ( -1.20)\n";
    let record = ViennaReader::new(std::io::Cursor::new(text)).read_record()?;
    let structure = record.parse(&ParseOptions::default().with_positions(true))?;
    let dot = to_dot_string(&structure)?;

    assert!(dot.contains(" n_1[label=\"G1 - C9\" shape=rectangle style=rounded]\n"));
    assert!(dot.contains("     n_1_1_1[label=\"G3 - C7\" shape=rectangle style=rounded]\n"));
    assert!(dot.contains("       {rank=same;n_1_1_1_1 n_1_1_1_2 n_1_1_1_3 }\n"));
    assert_eq!(dot.lines().filter(|line| line.contains(" -- ")).count(), 5);
    Ok(())
}
