//! Deterministic synthetic source generation.
//!
//! Each dialect emits a fixed preamble and then cycles through a rotation of
//! structural templates until the requested line count is reached. Output is a
//! pure function of `(target_lines, dialect)`.
//!
//! The generator stops as soon as the emitted line count reaches the target,
//! so the result never undershoots a target above the preamble and
//! overshoots it by less than the largest template of the dialect (see
//! [`max_block_lines`]). There is no trimming step.

mod javascript;
mod typescript;

pub use javascript::JsTemplate;
pub use typescript::TsTemplate;

use parsebench_core::Dialect;
use serde::{Deserialize, Serialize};

/// Number of lines in every dialect's preamble, trailing blank line included.
pub const PREAMBLE_LINES: usize = 5;

/// Lines in a declaration group emitted between templates.
pub const DECLARATION_LINES: usize = 4;

/// Generated source text and its measured size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedSource {
    /// Dialect of the text.
    pub dialect: Dialect,
    /// Requested line count.
    pub target_lines: i64,
    /// Line count of `text`, as measured by [`count_lines`].
    pub actual_lines: usize,
    /// Source text.
    pub text: String,
}

/// Count lines the way the harness reports them: the number of
/// `'\n'`-separated segments, and zero for empty text.
pub fn count_lines(text: &str) -> usize {
    if text.is_empty() {
        0
    } else {
        text.split('\n').count()
    }
}

/// Generate source text of roughly `target_lines` lines in `dialect`.
pub fn generate(target_lines: i64, dialect: Dialect) -> GeneratedSource {
    let text = match dialect {
        Dialect::JavaScript => generate_javascript(target_lines),
        Dialect::TypeScript => generate_typescript(target_lines),
    };

    GeneratedSource {
        dialect,
        target_lines,
        actual_lines: count_lines(&text),
        text,
    }
}

/// Generate JavaScript of roughly `target_lines` lines.
pub fn generate_javascript(target_lines: i64) -> String {
    assemble(
        target_lines,
        &javascript::PREAMBLE,
        javascript::DECLARATION_MARGIN,
        |index| JsTemplate::for_index(index).render(index),
        javascript::declarations,
    )
}

/// Generate TypeScript of roughly `target_lines` lines.
pub fn generate_typescript(target_lines: i64) -> String {
    assemble(
        target_lines,
        &typescript::PREAMBLE,
        typescript::DECLARATION_MARGIN,
        |index| TsTemplate::for_index(index).render(index),
        typescript::declarations,
    )
}

/// Line count of the largest single template of `dialect`, which bounds how
/// far the output may overshoot its target.
pub fn max_block_lines(dialect: Dialect) -> usize {
    match dialect {
        Dialect::JavaScript => JsTemplate::ALL
            .iter()
            .map(|t| count_lines(&t.render(0)))
            .max()
            .unwrap_or(0),
        Dialect::TypeScript => TsTemplate::ALL
            .iter()
            .map(|t| count_lines(&t.render(0)))
            .max()
            .unwrap_or(0),
    }
}

fn assemble(
    target_lines: i64,
    preamble: &[&str; PREAMBLE_LINES],
    declaration_margin: i64,
    block: impl Fn(usize) -> String,
    declarations: impl Fn(usize) -> [String; DECLARATION_LINES],
) -> String {
    let mut lines: Vec<String> = preamble.iter().map(|l| l.to_string()).collect();
    let mut index = 0usize;

    while (lines.len() as i64) < target_lines {
        lines.extend(block(index).lines().map(str::to_string));
        index += 1;

        // Stay clear of the target so the last thing appended is a template.
        if (lines.len() as i64) < target_lines - declaration_margin {
            lines.extend(declarations(index));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_lines() {
        assert_eq!(count_lines(""), 0);
        assert_eq!(count_lines("a"), 1);
        assert_eq!(count_lines("a\nb"), 2);
        assert_eq!(count_lines("a\n"), 2);
    }

    #[test]
    fn test_non_positive_target_yields_preamble_only() {
        for dialect in Dialect::ALL {
            for target in [-10, 0, 1, 5] {
                let source = generate(target, dialect);
                assert_eq!(source.actual_lines, PREAMBLE_LINES, "{dialect} {target}");
            }
        }
        assert!(generate_javascript(0).starts_with("import React"));
        assert!(generate_typescript(-1).starts_with("import React"));
    }

    #[test]
    fn test_never_undershoots_and_overshoot_is_bounded() {
        for dialect in Dialect::ALL {
            let bound = max_block_lines(dialect);
            for target in (6..=600).chain([1000, 2000, 5000]) {
                let source = generate(target, dialect);
                let actual = source.actual_lines as i64;
                assert!(actual >= target, "{dialect}: {actual} < {target}");
                assert!(
                    actual < target + bound as i64,
                    "{dialect}: {actual} overshoots {target} by {bound} or more"
                );
            }
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        for dialect in Dialect::ALL {
            assert_eq!(generate(2000, dialect), generate(2000, dialect));
        }
    }

    #[test]
    fn test_reported_lines_match_text() {
        let source = generate(500, Dialect::TypeScript);
        assert_eq!(source.actual_lines, count_lines(&source.text));
        assert_eq!(source.target_lines, 500);
        assert_eq!(source.dialect, Dialect::TypeScript);
    }

    #[test]
    fn test_javascript_structures_present() {
        let text = generate_javascript(300);
        assert!(text.contains("class Widget0 {"));
        assert!(text.contains("function compute1("));
        assert!(text.contains("switch ("));
        assert!(text.contains("await fetch("));
        assert!(text.contains("var legacy"));
    }

    #[test]
    fn test_typescript_structures_present() {
        let text = generate_typescript(300);
        assert!(text.contains("interface Entity0 {"));
        assert!(text.contains("class Repository1<T extends Entity0>"));
        assert!(text.contains("async function processEntity2<T extends Entity0>("));
        assert!(text.contains("const createValidator3 = <T>("));
        assert!(text.contains("enum Status"));
    }
}
