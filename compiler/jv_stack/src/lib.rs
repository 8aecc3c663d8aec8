//! Stack growth for recursive tree walks.
//!
//! Formatting recurses once per nesting level of the input: a deconstruction
//! pattern inside a deconstruction pattern inside a case label, a block inside
//! a rule body inside a switch, and so on. Generated or adversarial sources can
//! nest far deeper than the native stack tolerates, so every recursive entry
//! point of the formatter goes through [`ensure_sufficient_stack`].
//!
//! On native targets the `stacker` crate allocates a fresh stack segment when
//! the remaining space drops under [`RED_ZONE`]. On wasm32 the guard is a
//! passthrough.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than [`RED_ZONE`] bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// wasm32 manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
