//! Graphviz (DOT) rendering of a structure tree.
//!
//! The output is an undirected graph. Every node gets an id built from its
//! parent's id and its 1-based position among its siblings (`n_1`,
//! `n_1_2`, ...), so ids are unique over the whole tree. Pairs are drawn as
//! rounded rectangles, unpaired residues as plain nodes. Siblings are kept on
//! one rank.
//!
//! ```text
//! graph{ node[penwidth=3 fontsize=24] edge[penwidth=3]
//!  n_1[label="G - A" shape=rectangle style=rounded]
//!    n_1_1[label="C"]
//!    n_1 -- n_1_1
//!  n_2[label="U"]
//!  {rank=same;n_1 n_2 }
//! }
//! ```

use std::io::Write;

use itertools::Itertools;

use crate::data_structs::{
    Structure,
    StructureNode,
};
use crate::utils::escape_label;

const PREAMBLE: &str = "graph{ node[penwidth=3 fontsize=24] edge[penwidth=3]";
const CLOSING: &str = "}";
const PAIR_STYLE: &str = "shape=rectangle style=rounded";
const ROOT_ID: &str = "n";
const ROOT_INDENT: &str = " ";
const INDENT_STEP: &str = "  ";

/// Writes structures as DOT graphs into a sink.
pub struct DotWriter<W: Write> {
    sink: W,
}

impl<W: Write> DotWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Writes one complete `graph{ ... }` block and flushes the sink.
    pub fn write_structure(
        &mut self,
        structure: &Structure,
    ) -> std::io::Result<()> {
        writeln!(self.sink, "{}", PREAMBLE)?;
        self.write_level(structure, ROOT_ID, true, ROOT_INDENT)?;
        writeln!(self.sink, "{}", CLOSING)?;
        self.sink.flush()
    }

    /// Declares every sibling (recursing into pairs right after their own
    /// declaration), then the edges from `parent` and the rank group.
    fn write_level(
        &mut self,
        level: &Structure,
        parent: &str,
        is_root: bool,
        indent: &str,
    ) -> std::io::Result<()> {
        let mut level_ids = Vec::with_capacity(level.len());

        for (ordinal, node) in level.iter().enumerate() {
            let node_id = format!("{}_{}", parent, ordinal + 1);
            let label = escape_label(node.label());
            match node {
                StructureNode::Leaf { .. } => {
                    writeln!(self.sink, "{}{}[label=\"{}\"]", indent, node_id, label)?;
                },
                StructureNode::Pair { children, .. } => {
                    writeln!(
                        self.sink,
                        "{}{}[label=\"{}\" {}]",
                        indent, node_id, label, PAIR_STYLE
                    )?;
                    let child_indent = format!("{}{}", indent, INDENT_STEP);
                    self.write_level(children, &node_id, false, &child_indent)?;
                },
            }
            level_ids.push(node_id);
        }

        if !is_root {
            for node_id in level_ids.iter() {
                writeln!(self.sink, "{}{} -- {}", indent, parent, node_id)?;
            }
        }

        if level_ids.len() > 1 {
            writeln!(
                self.sink,
                "{}{{rank=same;{} }}",
                indent,
                level_ids.iter().join(" ")
            )?;
        }
        Ok(())
    }
}

/// Writes `structure` as a DOT graph into `sink`.
pub fn serialize<W: Write>(
    structure: &Structure,
    sink: W,
) -> std::io::Result<()> {
    DotWriter::new(sink).write_structure(structure)
}

/// Renders `structure` as a DOT graph in memory.
pub fn to_dot_string(structure: &Structure) -> std::io::Result<String> {
    let mut buffer = Vec::new();
    serialize(structure, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::rstest;

    use super::*;
    use crate::data_structs::{
        parse,
        ParseOptions,
    };

    fn render(
        sequence: &str,
        annotation: &str,
    ) -> String {
        let structure = parse(sequence, annotation, &ParseOptions::default()).unwrap();
        to_dot_string(&structure).unwrap()
    }

    fn declared_ids(dot: &str) -> Vec<String> {
        dot.lines()
            .skip(1)
            .filter_map(|line| line.trim_start().split_once("[label="))
            .map(|(id, _)| id.to_string())
            .collect()
    }

    #[test]
    fn test_empty_structure() {
        assert_eq!(
            to_dot_string(&Structure::default()).unwrap(),
            "graph{ node[penwidth=3 fontsize=24] edge[penwidth=3]\n}\n"
        );
    }

    #[test]
    fn test_hairpin_with_tail() {
        let expected = "\
graph{ node[penwidth=3 fontsize=24] edge[penwidth=3]
 n_1[label=\"G - A\" shape=rectangle style=rounded]
   n_1_1[label=\"C\"]
   n_1 -- n_1_1
 n_2[label=\"U\"]
 {rank=same;n_1 n_2 }
}
";
        assert_eq!(render("GCAU", "(.)."), expected);
    }

    #[test]
    fn test_unpaired_rank_group() {
        let dot = render("AAAA", "....");
        let rank_lines = dot
            .lines()
            .filter(|line| line.contains("{rank=same;"))
            .collect::<Vec<_>>();
        assert_eq!(rank_lines, vec![" {rank=same;n_1 n_2 n_3 n_4 }"]);
        assert!(!dot.contains(" -- "));
    }

    #[test]
    fn test_single_child_has_no_rank_group() {
        let dot = render("GAC", "(.)");
        assert!(!dot.contains("rank=same"));
        assert!(dot.contains("   n_1 -- n_1_1\n"));
    }

    #[test]
    fn test_empty_pair_has_no_edges() {
        let dot = render("AC", "()");
        assert_eq!(
            dot,
            "graph{ node[penwidth=3 fontsize=24] edge[penwidth=3]\n n_1[label=\"A - C\" \
             shape=rectangle style=rounded]\n}\n"
        );
    }

    #[test]
    fn test_label_is_escaped() {
        let structure = Structure::new(vec![StructureNode::leaf("say \"A\"")]);
        assert!(to_dot_string(&structure).unwrap().contains(r#"n_1[label="say \"A\""]"#));
    }

    #[rstest]
    #[case("GGGAAACCCUUGGGAAACCC", "(((...)))..(((...)))")]
    #[case("GGGAAAUCCGCAAAGCUAAAAGCCC", "(((...((...))..((...)))))")]
    #[case("AAAAAAAAAAAA", "............")]
    fn test_ids_are_unique(
        #[case] sequence: &str,
        #[case] annotation: &str,
    ) {
        let dot = render(sequence, annotation);
        let ids = declared_ids(&dot);
        assert_eq!(ids.len(), annotation.len() - annotation.matches(')').count());
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), ids.len());
    }

    #[rstest]
    #[case("GGGAAACCCUUGGGAAACCC", "(((...)))..(((...)))")]
    #[case("GGGAAAUCCGCAAAGCUAAAAGCCC", "(((...((...))..((...)))))")]
    fn test_declarations_precede_edges(
        #[case] sequence: &str,
        #[case] annotation: &str,
    ) {
        let dot = render(sequence, annotation);
        let lines = dot.lines().collect::<Vec<_>>();
        let declared_at = |id: &str| {
            lines
                .iter()
                .position(|line| line.trim_start().starts_with(&format!("{}[", id)))
                .unwrap()
        };
        for (edge_at, line) in lines.iter().enumerate() {
            if let Some((source, target)) = line.trim().split_once(" -- ") {
                assert!(declared_at(source) < edge_at);
                assert!(declared_at(target) < edge_at);
            }
        }
    }

    #[test]
    fn test_nested_indentation() {
        let dot = render("GGAUCC", "((..))");
        let lines = dot.lines().collect::<Vec<_>>();
        assert_eq!(lines[1], " n_1[label=\"G - C\" shape=rectangle style=rounded]");
        assert_eq!(lines[2], "   n_1_1[label=\"G - C\" shape=rectangle style=rounded]");
        assert_eq!(lines[3], "     n_1_1_1[label=\"A\"]");
        assert_eq!(lines[4], "     n_1_1_2[label=\"U\"]");
        assert_eq!(lines[5], "     n_1_1 -- n_1_1_1");
        assert_eq!(lines[6], "     n_1_1 -- n_1_1_2");
        assert_eq!(lines[7], "     {rank=same;n_1_1_1 n_1_1_2 }");
        assert_eq!(lines[8], "   n_1 -- n_1_1");
        assert_eq!(lines[9], "}");
    }
}
