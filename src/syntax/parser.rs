//! Second compiler pass: fragment parsing.
//!
//! Each fragment text from the scanner is parsed independently into a node
//! sequence by recursive descent. Groups recurse through the same sequence
//! parser; quantifiers attach only to the symbol they follow.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::{Node, Repeat, SymbolKind};
use crate::diagnostics::{MaskError, Span};

use super::scanner::FragmentText;
use super::{CompileContext, Cursor};

/// A quantifier body is `+` or a positive integer with no leading zero.
static QUANTIFIER_BODY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9][0-9]*$").expect("quantifier body regex is valid"));

pub(crate) fn parse_fragment(
    ctx: &mut CompileContext,
    piece: &FragmentText,
) -> Result<Vec<Node>, MaskError> {
    let mut cur = Cursor::new(&piece.text, piece.offset);
    parse_sequence(ctx, &mut cur, false)
    // The scanner guarantees fragment text is non-empty, so the sequence is
    // never empty here.
}

/// Parses nodes until end of text or, inside a group, until a top-level `|`
/// or `]]` (left unconsumed for the group parser).
fn parse_sequence(
    ctx: &mut CompileContext,
    cur: &mut Cursor,
    in_group: bool,
) -> Result<Vec<Node>, MaskError> {
    let mut nodes = Vec::new();

    while let Some(c) = cur.peek() {
        match c {
            '[' if cur.peek_ahead(1) == Some('[') => {
                let open_at = cur.pos();
                cur.bump();
                cur.bump();
                let group = parse_group(ctx, cur, open_at)?;
                if cur.peek() == Some('{') {
                    return Err(ctx
                        .error("quantifier applied to a group", cur.here())
                        .with_help("quantifiers attach to single symbols only"));
                }
                nodes.push(group);
            }
            ']' if in_group && cur.peek_ahead(1) == Some(']') => break,
            '|' if in_group => break,
            ']' => {
                if cur.peek_ahead(1) == Some(']') {
                    let span = Span {
                        start: cur.pos(),
                        end: cur.pos() + 2,
                    };
                    return Err(ctx.error("unmatched closing \"]]\"", span));
                }
                return Err(ctx.error("unexpected symbol \"]\"", cur.here()));
            }
            '|' => {
                return Err(ctx.error("\"|\" outside of a group", cur.here()));
            }
            '[' => {
                return Err(ctx
                    .error("unexpected symbol \"[\"", cur.here())
                    .with_help("groups open with \"[[\""));
            }
            '{' => {
                return Err(ctx.error("quantifier without a preceding symbol", cur.here()));
            }
            ':' | '}' => {
                return Err(ctx.error(
                    format!("reserved character \"{c}\" cannot be used as a symbol"),
                    cur.here(),
                ));
            }
            _ => {
                cur.bump();
                let kind = match c {
                    'A' => SymbolKind::Letter,
                    '0' => SymbolKind::Digit,
                    other => SymbolKind::Literal(other),
                };
                let repeat = if cur.peek() == Some('{') {
                    parse_quantifier(ctx, cur)?
                } else {
                    Repeat::ONCE
                };
                nodes.push(Node::Symbol { kind, repeat });
            }
        }
    }

    Ok(nodes)
}

/// Parses the alternative list of a group whose `[[` was just consumed.
fn parse_group(
    ctx: &mut CompileContext,
    cur: &mut Cursor,
    open_at: usize,
) -> Result<Node, MaskError> {
    let mut alternatives = Vec::new();

    loop {
        let alternative = parse_sequence(ctx, cur, true)?;
        if alternative.is_empty() {
            return Err(ctx.error("empty alternative in group", cur.here()));
        }
        alternatives.push(alternative);

        match cur.peek() {
            Some('|') => {
                cur.bump();
            }
            // parse_sequence only stops inside a group at `|`, `]]`, or end
            // of text, so this is the closing `]]`.
            Some(_) => {
                cur.bump();
                cur.bump();
                return Ok(Node::Group { alternatives });
            }
            None => {
                return Err(ctx.error("unclosed group", cur.span_from(open_at)));
            }
        }
    }
}

/// Parses a `{...}` suffix whose `{` is the next character.
fn parse_quantifier(ctx: &mut CompileContext, cur: &mut Cursor) -> Result<Repeat, MaskError> {
    let start = cur.pos();
    cur.bump();
    let mut body = String::new();
    loop {
        match cur.bump() {
            Some('}') => break,
            Some(ch) => body.push(ch),
            None => {
                return Err(ctx.error("unclosed quantifier", cur.span_from(start)));
            }
        }
    }

    if body == "+" {
        return Ok(Repeat::at_least_one());
    }
    if QUANTIFIER_BODY.is_match(&body) {
        let count = body
            .parse::<usize>()
            .map_err(|_| ctx.error("quantifier out of range", cur.span_from(start)))?;
        return Ok(Repeat::exactly(count));
    }
    Err(ctx
        .error(
            format!("invalid quantifier \"{{{body}}}\""),
            cur.span_from(start),
        )
        .with_help("quantifier bodies are \"+\" or a positive integer"))
}
