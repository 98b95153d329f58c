//! Formatting engine.
//!
//! Consumes a raw value against a compiled [`ParsedMask`] and emits the
//! masked string. Never fails: malformed or incomplete input yields the
//! longest masked prefix the engine can justify, which is what a
//! live-typing caller wants.
//!
//! Two modes exist because their inputs look different. Purely numeric masks
//! are fed contiguous strings and need their separators inserted; masks
//! mixing letters or words are fed input the caller already segmented with
//! spaces, and those word boundaries must be trusted, not re-derived.

mod matcher;

use crate::ast::{Node, ParsedMask, SymbolKind};

use matcher::{consume_sequence, MatchContext};

/// Formats `raw` against the compiled mask.
pub fn apply(mask: &ParsedMask, raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    if uses_manual_space(mask) {
        format_manual_space(mask, raw)
    } else {
        format_contiguous(mask, raw)
    }
}

/// [`apply`] with an absent value treated as the empty string.
pub fn apply_opt(mask: &ParsedMask, raw: Option<&str>) -> String {
    apply(mask, raw.unwrap_or(""))
}

/// Manual-space mode is selected when every separator is a single space and
/// some fragment matches more than digits. Vacuously true separators (a
/// single-fragment mask) count as all-space.
fn uses_manual_space(mask: &ParsedMask) -> bool {
    mask.separators.iter().all(|sep| sep == " ")
        && mask.fragments.iter().any(|nodes| has_non_digit_symbol(nodes))
}

fn has_non_digit_symbol(nodes: &[Node]) -> bool {
    nodes.iter().any(|node| match node {
        Node::Symbol { kind, .. } => !matches!(kind, SymbolKind::Digit),
        Node::Group { alternatives } => alternatives.iter().any(|alt| has_non_digit_symbol(alt)),
    })
}

/// Matches word `i` of the raw value against fragment `i`, independently:
/// no separator skipping, no lookahead across fragment boundaries. The
/// caller's own word boundaries are preserved.
fn format_manual_space(mask: &ParsedMask, raw: &str) -> String {
    let words: Vec<&str> = raw.split_whitespace().collect();
    let mut outputs: Vec<String> = Vec::new();

    for (word, nodes) in words.iter().zip(&mask.fragments) {
        let input: Vec<char> = word.chars().collect();
        let ctx = MatchContext {
            input: &input,
            separators: &[],
        };
        let outcome = consume_sequence(&ctx, nodes, &[], 0);
        outputs.push(outcome.output);
        if !outcome.satisfied {
            break;
        }
    }

    let mut result = outputs.join(" ").trim_end().to_string();
    if raw.ends_with(char::is_whitespace) && !result.is_empty() {
        result.push(' ');
    }
    result
}

/// Single scan cursor over the raw value; each fragment consumes with the
/// concatenated tail of all later fragments as lookahead. Separators found
/// in the input are consumed silently and re-inserted by the join step.
fn format_contiguous(mask: &ParsedMask, raw: &str) -> String {
    let input: Vec<char> = raw.chars().collect();
    let separators = sorted_separators(&mask.separators);
    let ctx = MatchContext {
        input: &input,
        separators: &separators,
    };

    let mut outputs: Vec<String> = Vec::with_capacity(mask.fragments.len());
    let mut pos = 0usize;
    for (i, nodes) in mask.fragments.iter().enumerate() {
        let tail: Vec<&Node> = mask.fragments[i + 1..].iter().flatten().collect();
        let outcome = consume_sequence(&ctx, nodes, &tail, pos);
        pos = outcome.end;
        outputs.push(outcome.output);
        if !outcome.satisfied {
            break;
        }
    }

    join_fragments(&outputs, &mask.separators)
}

/// Distinct non-empty separators, longest first, so a longer separator beats
/// a shorter one that prefixes it.
fn sorted_separators(separators: &[String]) -> Vec<Vec<char>> {
    let mut known: Vec<Vec<char>> = separators
        .iter()
        .filter(|sep| !sep.is_empty())
        .map(|sep| sep.chars().collect())
        .collect();
    known.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    known.dedup();
    known
}

/// Joins fragment outputs, re-inserting a separator before each non-empty
/// output that follows earlier content. No dangling separator is ever
/// emitted after the last real content.
fn join_fragments(outputs: &[String], separators: &[String]) -> String {
    let mut result = String::new();
    for (i, output) in outputs.iter().enumerate() {
        if output.is_empty() {
            continue;
        }
        if !result.is_empty() {
            if let Some(sep) = separators.get(i - 1) {
                result.push_str(sep);
            }
        }
        result.push_str(output);
    }
    result
}
