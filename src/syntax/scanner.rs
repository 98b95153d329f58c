//! First compiler pass: fragment splitting.
//!
//! Scans the pattern left to right tracking group-nesting depth. Group
//! delimiters are copied verbatim into the current fragment text; a `:` at
//! depth zero opens a separator that runs to the next `:`. Separators are
//! forbidden inside groups, fragments must be non-empty, and every group
//! opened must close before the pattern ends.

use crate::diagnostics::{MaskError, Span};

use super::{CompileContext, Cursor};

/// A fragment's raw text plus its byte offset in the whole pattern, so the
/// second pass can report spans against the original source.
#[derive(Debug)]
pub(crate) struct FragmentText {
    pub text: String,
    pub offset: usize,
}

#[derive(Debug)]
pub(crate) struct SplitPattern {
    pub fragments: Vec<FragmentText>,
    pub separators: Vec<String>,
}

pub(crate) fn split_fragments(
    ctx: &mut CompileContext,
    pattern: &str,
) -> Result<SplitPattern, MaskError> {
    let mut cur = Cursor::new(pattern, 0);
    let mut fragments = Vec::new();
    let mut separators = Vec::new();
    let mut fragment = String::new();
    let mut fragment_start = 0usize;
    let mut depth = 0usize;
    // Offsets of currently open "[[", for the unclosed-group span.
    let mut open_groups: Vec<usize> = Vec::new();

    while let Some(c) = cur.peek() {
        match c {
            '[' if cur.peek_ahead(1) == Some('[') => {
                depth += 1;
                open_groups.push(cur.pos());
                fragment.push_str("[[");
                cur.bump();
                cur.bump();
            }
            ']' if cur.peek_ahead(1) == Some(']') => {
                // At depth zero this is left in place for the parser pass,
                // which reports it as an unmatched closing group.
                if depth > 0 {
                    depth -= 1;
                    open_groups.pop();
                }
                fragment.push_str("]]");
                cur.bump();
                cur.bump();
            }
            ':' => {
                if depth > 0 {
                    return Err(ctx.error("separator inside group", cur.here()));
                }
                if fragment.is_empty() {
                    return Err(ctx.error("empty fragment before separator", cur.here()));
                }
                let sep_start = cur.pos();
                cur.bump();
                let mut separator = String::new();
                loop {
                    match cur.bump() {
                        Some(':') => break,
                        Some(ch) => separator.push(ch),
                        None => {
                            return Err(
                                ctx.error("separator not closed", cur.span_from(sep_start))
                            );
                        }
                    }
                }
                fragments.push(FragmentText {
                    text: std::mem::take(&mut fragment),
                    offset: fragment_start,
                });
                separators.push(separator);
                fragment_start = cur.pos();
            }
            _ => {
                fragment.push(c);
                cur.bump();
            }
        }
    }

    if depth != 0 {
        let open_at = open_groups.last().copied().unwrap_or(fragment_start);
        return Err(ctx.error("unclosed group", cur.span_from(open_at)));
    }
    if fragment.is_empty() {
        return Err(ctx.error(
            "empty fragment at end of pattern",
            Span {
                start: cur.pos(),
                end: cur.pos(),
            },
        ));
    }
    fragments.push(FragmentText {
        text: fragment,
        offset: fragment_start,
    });

    Ok(SplitPattern {
        fragments,
        separators,
    })
}
