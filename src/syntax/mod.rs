//! Mask-pattern compiler.
//!
//! Compilation runs in two passes, each driven by an explicit [`Cursor`]
//! rather than shared mutable scan state: the scanner splits the pattern
//! into fragment texts and separator literals, then the parser turns each
//! fragment independently into AST nodes.

mod parser;
mod scanner;

use crate::ast::ParsedMask;
use crate::diagnostics::{DiagnosticSink, MaskError, NullSink, SourceContext, Span, DIAG_PREFIX};

/// Compiles a pattern, reporting each error to `sink` before returning it.
///
/// All-or-nothing: a structurally invalid pattern never yields a partial
/// mask.
pub fn compile_with_sink(
    pattern: &str,
    sink: &mut dyn DiagnosticSink,
) -> Result<ParsedMask, MaskError> {
    let mut ctx = CompileContext::new(pattern, sink);
    if pattern.is_empty() {
        return Err(ctx.error("empty mask pattern", Span::default()));
    }

    let split = scanner::split_fragments(&mut ctx, pattern)?;
    let mut fragments = Vec::with_capacity(split.fragments.len());
    for piece in &split.fragments {
        fragments.push(parser::parse_fragment(&mut ctx, piece)?);
    }

    Ok(ParsedMask {
        fragments,
        separators: split.separators,
    })
}

/// Compiles a pattern, discarding diagnostics.
pub fn compile(pattern: &str) -> Result<ParsedMask, MaskError> {
    compile_with_sink(pattern, &mut NullSink)
}

/// Threads the pattern source and the diagnostic sink through both passes.
pub(crate) struct CompileContext<'a> {
    source: SourceContext,
    sink: &'a mut dyn DiagnosticSink,
}

impl<'a> CompileContext<'a> {
    fn new(pattern: &str, sink: &'a mut dyn DiagnosticSink) -> Self {
        Self {
            source: SourceContext::from_pattern(pattern),
            sink,
        }
    }

    /// Reports the message to the sink, then builds the error for the
    /// caller to raise. Each failure goes through here exactly once.
    pub(crate) fn error(&mut self, message: impl Into<String>, span: Span) -> MaskError {
        let message = message.into();
        self.sink
            .report(&format!("{DIAG_PREFIX} {message}"), Some(span));
        MaskError::new(message, span, &self.source)
    }
}

/// Scan cursor over one piece of pattern text.
///
/// `base` is the byte offset of the text within the whole pattern, so spans
/// produced during fragment parsing still point into the original source.
pub(crate) struct Cursor {
    chars: Vec<(usize, char)>,
    i: usize,
    base: usize,
    end: usize,
}

impl Cursor {
    pub(crate) fn new(text: &str, base: usize) -> Self {
        Self {
            chars: text.char_indices().collect(),
            i: 0,
            base,
            end: base + text.len(),
        }
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.chars.get(self.i).map(|&(_, c)| c)
    }

    pub(crate) fn peek_ahead(&self, n: usize) -> Option<char> {
        self.chars.get(self.i + n).map(|&(_, c)| c)
    }

    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.i += 1;
        }
        c
    }

    /// Absolute byte offset of the next unread character (or of the end of
    /// the text once exhausted).
    pub(crate) fn pos(&self) -> usize {
        match self.chars.get(self.i) {
            Some(&(offset, _)) => self.base + offset,
            None => self.end,
        }
    }

    /// Span covering the next unread character.
    pub(crate) fn here(&self) -> Span {
        match self.chars.get(self.i) {
            Some(&(offset, c)) => Span {
                start: self.base + offset,
                end: self.base + offset + c.len_utf8(),
            },
            None => Span {
                start: self.end,
                end: self.end,
            },
        }
    }

    /// Span from an earlier absolute offset up to the current position.
    pub(crate) fn span_from(&self, start: usize) -> Span {
        Span {
            start,
            end: self.pos(),
        }
    }
}
