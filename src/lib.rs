pub use crate::ast::{Node, ParsedMask, Repeat, SymbolKind};
pub use crate::diagnostics::{BufferSink, DiagnosticSink, MaskError, NullSink, Span, StderrSink};
pub use crate::engine::{compile, compile_with_sink, Formatter};

pub mod ast;
pub mod diagnostics;
pub mod engine;
pub mod format;
pub mod syntax;
