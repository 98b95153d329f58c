//! Character-level matching of raw input against mask nodes.
//!
//! A single left-to-right cursor, one level of local backtracking confined
//! to group-alternative selection. Each consumption step reports both the
//! recognized length (characters emitted) and the cursor advance (which also
//! covers skipped stray input), because the two diverge exactly where the
//! group tie-breaks need them.

use crate::ast::{Node, Repeat, SymbolKind};

/// Outcome of consuming one node or node sequence.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MatchOutcome {
    pub output: String,
    /// Characters actually emitted into the output.
    pub recognized: usize,
    /// Cursor position after the run, including skipped strays.
    pub end: usize,
    /// Whether every minimum repetition count was reached.
    pub satisfied: bool,
}

/// Raw input plus separator literals, shared by every consumption step.
///
/// Separators are sorted longest-first so that a longer separator is
/// preferred over a shorter one that prefixes it.
pub(crate) struct MatchContext<'a> {
    pub input: &'a [char],
    pub separators: &'a [Vec<char>],
}

impl MatchContext<'_> {
    /// Length of the separator starting at `pos`, if any.
    fn separator_at(&self, pos: usize) -> Option<usize> {
        self.separators
            .iter()
            .find(|sep| self.input[pos..].starts_with(sep))
            .map(|sep| sep.len())
    }

    /// Skips any run of separator text starting at `pos`.
    pub(crate) fn skip_separators(&self, mut pos: usize) -> usize {
        while pos < self.input.len() {
            match self.separator_at(pos) {
                Some(len) => pos += len,
                None => break,
            }
        }
        pos
    }
}

/// Consumes a node sequence starting at `start`.
///
/// Each node's lookahead is the rest of its own sequence followed by the
/// outer `lookahead` tail. The sequence stops at the first unsatisfied node,
/// keeping the partial output.
pub(crate) fn consume_sequence(
    ctx: &MatchContext,
    nodes: &[Node],
    lookahead: &[&Node],
    start: usize,
) -> MatchOutcome {
    let mut outcome = MatchOutcome {
        output: String::new(),
        recognized: 0,
        end: start,
        satisfied: true,
    };

    for (i, node) in nodes.iter().enumerate() {
        outcome.end = ctx.skip_separators(outcome.end);
        let tail: Vec<&Node> = nodes[i + 1..].iter().chain(lookahead.iter().copied()).collect();
        let step = match node {
            Node::Symbol { kind, repeat } => consume_symbol(ctx, *kind, *repeat, &tail, outcome.end),
            Node::Group { alternatives } => consume_group(ctx, alternatives, &tail, outcome.end),
        };
        outcome.output.push_str(&step.output);
        outcome.recognized += step.recognized;
        outcome.end = step.end;
        if !step.satisfied {
            outcome.satisfied = false;
            break;
        }
    }

    outcome
}

/// Consumes one symbol's repetition run.
///
/// A separator at the cursor always ends the run. A non-matching character
/// is handed to the next node when the minimum is reached and the lookahead
/// can start with it; otherwise it is skipped as stray input the user typed.
fn consume_symbol(
    ctx: &MatchContext,
    kind: SymbolKind,
    repeat: Repeat,
    lookahead: &[&Node],
    start: usize,
) -> MatchOutcome {
    let mut output = String::new();
    let mut count = 0usize;
    let mut pos = start;

    while pos < ctx.input.len() {
        if ctx.separator_at(pos).is_some() {
            break;
        }
        let c = ctx.input[pos];
        if kind.matches(c) && repeat.has_room(count) {
            output.push(c);
            count += 1;
            pos += 1;
            continue;
        }
        if count >= repeat.min && can_start_with(lookahead, c) {
            break;
        }
        // Stray input: advance past it without emitting.
        pos += 1;
    }

    MatchOutcome {
        output,
        recognized: count,
        end: pos,
        satisfied: count >= repeat.min,
    }
}

/// Tries every group alternative from the same position and keeps the best:
/// longest recognized run, then least cursor advance, then satisfied over
/// unsatisfied. Local choice only; never revisited once the fragment moves
/// on.
fn consume_group(
    ctx: &MatchContext,
    alternatives: &[Vec<Node>],
    lookahead: &[&Node],
    start: usize,
) -> MatchOutcome {
    let mut best: Option<MatchOutcome> = None;
    for alternative in alternatives {
        let candidate = consume_sequence(ctx, alternative, lookahead, start);
        best = Some(match best {
            None => candidate,
            Some(current) => pick_better(current, candidate),
        });
    }
    // The compiler rejects groups without alternatives.
    best.unwrap_or(MatchOutcome {
        output: String::new(),
        recognized: 0,
        end: start,
        satisfied: true,
    })
}

fn pick_better(current: MatchOutcome, candidate: MatchOutcome) -> MatchOutcome {
    if candidate.recognized != current.recognized {
        if candidate.recognized > current.recognized {
            return candidate;
        }
        return current;
    }
    if candidate.end != current.end {
        if candidate.end < current.end {
            return candidate;
        }
        return current;
    }
    if candidate.satisfied && !current.satisfied {
        return candidate;
    }
    current
}

/// Whether the first node of the sequence could consume `c`, recursing into
/// group alternatives.
pub(crate) fn can_start_with(nodes: &[&Node], c: char) -> bool {
    nodes.first().is_some_and(|node| node_can_start(node, c))
}

fn node_can_start(node: &Node, c: char) -> bool {
    match node {
        Node::Symbol { kind, .. } => kind.matches(c),
        Node::Group { alternatives } => alternatives
            .iter()
            .any(|alt| alt.first().is_some_and(|first| node_can_start(first, c))),
    }
}
