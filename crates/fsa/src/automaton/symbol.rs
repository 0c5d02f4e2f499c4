//! Symbol types for automata transitions.

/// A symbol identifier represented as a u32.
/// The special value `EPSILON` represents an epsilon (empty) transition.
pub type SymbolId = u32;

/// Special symbol ID representing epsilon (empty) transitions.
/// We use u32::MAX as the epsilon marker.
pub const EPSILON: SymbolId = u32::MAX;

/// Check if a symbol is an epsilon transition.
#[inline]
pub fn is_epsilon(symbol: SymbolId) -> bool {
    symbol == EPSILON
}

/// Map a character to its symbol. Unicode scalar values stop at 0x10FFFF,
/// so the result is never `EPSILON`.
#[inline]
pub fn from_char(c: char) -> SymbolId {
    c as SymbolId
}

/// Map every character of `input` to a symbol, in order.
pub fn symbols(input: &str) -> Vec<SymbolId> {
    input.chars().map(from_char).collect()
}
