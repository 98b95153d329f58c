//! Compile-once, format-many facade.
//!
//! A caller compiles a pattern into a [`Formatter`] and then feeds it raw
//! values as often as it likes. The formatter is plain immutable data, so
//! independent call sites may use it concurrently without coordination.

use serde::{Deserialize, Serialize};

use crate::ast::ParsedMask;
use crate::diagnostics::{DiagnosticSink, MaskError, NullSink};
use crate::{format, syntax};

/// A compiled mask, reusable across any number of raw values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formatter {
    mask: ParsedMask,
}

impl Formatter {
    /// Formats a raw value. Never fails; incomplete or malformed input
    /// yields the best partial masked prefix.
    pub fn format(&self, raw: &str) -> String {
        format::apply(&self.mask, raw)
    }

    /// [`Formatter::format`] with an absent value treated as empty.
    pub fn format_opt(&self, raw: Option<&str>) -> String {
        format::apply_opt(&self.mask, raw)
    }

    pub fn mask(&self) -> &ParsedMask {
        &self.mask
    }
}

impl From<ParsedMask> for Formatter {
    fn from(mask: ParsedMask) -> Self {
        Self { mask }
    }
}

/// Compiles a pattern into a reusable formatter, discarding diagnostics.
pub fn compile(pattern: &str) -> Result<Formatter, MaskError> {
    compile_with_sink(pattern, &mut NullSink)
}

/// Compiles a pattern, reporting any error to `sink` before returning it.
pub fn compile_with_sink(
    pattern: &str,
    sink: &mut dyn DiagnosticSink,
) -> Result<Formatter, MaskError> {
    Ok(Formatter {
        mask: syntax::compile_with_sink(pattern, sink)?,
    })
}
