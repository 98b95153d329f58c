//! AST for the mask-pattern language.
//!
//! A compiled pattern is a [`ParsedMask`]: an ordered list of fragment node
//! sequences plus the literal separators emitted between them. Nodes form a
//! closed tagged union over symbols and alternative groups; the set is fixed,
//! so everything downstream matches exhaustively.

use serde::{Deserialize, Serialize};

/// Character class matched by a symbol node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolKind {
    /// `A` in pattern source: one Latin or Cyrillic letter.
    Letter,
    /// `0` in pattern source: one decimal digit.
    Digit,
    /// Any other pattern character: matches itself exactly.
    Literal(char),
}

impl SymbolKind {
    /// Whether `c` belongs to this character class.
    pub fn matches(self, c: char) -> bool {
        match self {
            SymbolKind::Letter => is_mask_letter(c),
            SymbolKind::Digit => c.is_ascii_digit(),
            SymbolKind::Literal(expected) => c == expected,
        }
    }
}

/// Letters accepted by the `A` symbol: Latin (ASCII plus the Latin-1 and
/// Extended-A/B blocks) and Cyrillic.
pub fn is_mask_letter(c: char) -> bool {
    match c {
        'a'..='z' | 'A'..='Z' => true,
        '\u{00C0}'..='\u{024F}' => c.is_alphabetic(),
        '\u{0400}'..='\u{052F}' => true,
        _ => false,
    }
}

/// Repetition bounds for a symbol. `max == None` means unbounded (`{+}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repeat {
    pub min: usize,
    pub max: Option<usize>,
}

impl Repeat {
    /// The implicit bound of a symbol with no quantifier suffix.
    pub const ONCE: Repeat = Repeat {
        min: 1,
        max: Some(1),
    };

    /// `{n}`: exactly `n` repetitions.
    pub fn exactly(n: usize) -> Self {
        Repeat {
            min: n,
            max: Some(n),
        }
    }

    /// `{+}`: one or more repetitions.
    pub fn at_least_one() -> Self {
        Repeat { min: 1, max: None }
    }

    /// Whether a symbol that has already matched `count` characters may
    /// match another one.
    pub fn has_room(self, count: usize) -> bool {
        self.max.map_or(true, |max| count < max)
    }
}

/// A single unit of a compiled fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Symbol { kind: SymbolKind, repeat: Repeat },
    /// `[[ alt | alt | ... ]]`: exactly one alternative is chosen per match
    /// attempt. Groups never carry a repetition count.
    Group { alternatives: Vec<Vec<Node>> },
}

/// A compiled mask pattern, immutable once produced by the compiler.
///
/// `separators.len()` is always `fragments.len() - 1`; `separators[i]` is
/// emitted between fragments `i` and `i + 1` when both produce output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedMask {
    pub fragments: Vec<Vec<Node>>,
    pub separators: Vec<String>,
}

impl ParsedMask {
    /// Reconstructs canonical pattern text from the compiled form.
    ///
    /// The result re-parses to an identical mask; implicit `{1}` bounds are
    /// left unwritten.
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        for (i, fragment) in self.fragments.iter().enumerate() {
            if i > 0 {
                out.push(':');
                out.push_str(&self.separators[i - 1]);
                out.push(':');
            }
            for node in fragment {
                node.pretty_into(&mut out);
            }
        }
        out
    }
}

impl Node {
    fn pretty_into(&self, out: &mut String) {
        match self {
            Node::Symbol { kind, repeat } => {
                match kind {
                    SymbolKind::Letter => out.push('A'),
                    SymbolKind::Digit => out.push('0'),
                    SymbolKind::Literal(c) => out.push(*c),
                }
                match (repeat.min, repeat.max) {
                    (1, Some(1)) => {}
                    (n, Some(_)) => {
                        out.push('{');
                        out.push_str(&n.to_string());
                        out.push('}');
                    }
                    (_, None) => out.push_str("{+}"),
                }
            }
            Node::Group { alternatives } => {
                out.push_str("[[");
                for (i, alt) in alternatives.iter().enumerate() {
                    if i > 0 {
                        out.push('|');
                    }
                    for node in alt {
                        node.pretty_into(out);
                    }
                }
                out.push_str("]]");
            }
        }
    }
}

impl std::fmt::Display for ParsedMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pretty())
    }
}
