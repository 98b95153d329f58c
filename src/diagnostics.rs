//! Diagnostics for mask compilation.
//!
//! Compile-time failures are the only error regime in this crate: formatting
//! never fails. Every structural violation is reported once through an
//! injected [`DiagnosticSink`] (tagged with [`DIAG_PREFIX`]), then returned
//! to the caller as a [`MaskError`] carrying a span into the pattern source
//! and a full `miette` diagnostic.

use std::fmt;
use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix attached to every message that goes through a [`DiagnosticSink`].
pub const DIAG_PREFIX: &str = "[remask]";

/// Byte range into the pattern source.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

pub type SourceArc = Arc<NamedSource<String>>;

/// Pattern source handed to error constructors.
#[derive(Debug, Clone)]
pub struct SourceContext {
    name: String,
    content: String,
}

impl SourceContext {
    pub fn from_pattern(pattern: &str) -> Self {
        Self {
            name: "mask pattern".to_string(),
            content: pattern.to_string(),
        }
    }

    pub fn to_named_source(&self) -> SourceArc {
        Arc::new(NamedSource::new(self.name.clone(), self.content.clone()))
    }
}

/// The single compile-time error kind.
///
/// The message distinguishes the structural violation; the span points at
/// the offending region of the pattern. Compilation is all-or-nothing, so a
/// `MaskError` always means no AST was produced.
#[derive(Debug, Error)]
#[error("mask pattern error: {message}")]
pub struct MaskError {
    pub message: String,
    pub span: Span,
    pattern_src: SourceArc,
    help: Option<String>,
}

impl MaskError {
    pub fn new(message: impl Into<String>, span: Span, source: &SourceContext) -> Self {
        Self {
            message: message.into(),
            span,
            pattern_src: source.to_named_source(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl Diagnostic for MaskError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("remask::compile"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn fmt::Display + 'a>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let len = if self.span.end > self.span.start {
            self.span.end - self.span.start
        } else {
            1
        };
        let label = LabeledSpan::new(Some(self.message.clone()), self.span.start, len);
        Some(Box::new(std::iter::once(label)))
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&*self.pattern_src)
    }
}

/// Side channel for compiler diagnostics, injected into `compile`.
///
/// The compiler only needs "report then fail" semantics; the concrete
/// transport is the caller's concern.
pub trait DiagnosticSink {
    fn report(&mut self, message: &str, span: Option<Span>);
}

/// Discards everything. The default when no sink is supplied.
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&mut self, _message: &str, _span: Option<Span>) {}
}

/// Writes each reported message to stderr.
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&mut self, message: &str, _span: Option<Span>) {
        eprintln!("{message}");
    }
}

/// Captures reported messages, mainly for tests and embedding hosts.
#[derive(Debug, Default)]
pub struct BufferSink {
    messages: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl DiagnosticSink for BufferSink {
    fn report(&mut self, message: &str, _span: Option<Span>) {
        self.messages.push(message.to_string());
    }
}

/// Prints a [`MaskError`] with full miette diagnostics.
///
/// Use this for user-facing error display in CLI contexts.
pub fn print_error(error: MaskError) {
    let report = miette::Report::new(error);
    eprintln!("{report:?}");
}
