//! vlark-util - Shared foundation types for the vlark front end
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Everything that more than one phase of the front end needs lives here:
//!
//! - [`span`]: `SourcePosition` (1-based line/column) and single-line `Span`.
//! - [`index_vec`]: append-only arenas with typed indices. Source lines are
//!   stored in one, so tokens refer to their text by `line index + offset +
//!   length` instead of holding references into a growing buffer.
//! - [`diagnostic`]: the diagnostics collector threaded through every phase,
//!   plus codes, builders and a plain-text renderer.
//! - [`error`]: errors raised by the utilities themselves.
//!
//! DESIGN PRINCIPLES:
//! ------------------
//! 1. NO SIDE EFFECTS DURING SCANNING
//!    Phases report into a `Handler`; only the outermost caller prints.
//!
//! 2. TYPE SAFETY
//!    Typed indices keep line ids and token ids from being mixed up.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod index_vec;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use index_vec::{Idx, IndexVec};
pub use rustc_hash::{FxHashMap, FxHashSet};
pub use span::{SourcePosition, Span};

// Positions are copied into every token and diagnostic.
static_assertions::assert_eq_size!(SourcePosition, u64);
static_assertions::assert_eq_size!(Span, [u32; 3]);
static_assertions::assert_impl_all!(Handler: Send);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports_work_together() {
        let handler = Handler::new();
        DiagnosticBuilder::error("x")
            .at(SourcePosition::new(2, 3))
            .emit(&handler);
        let diags = handler.diagnostics();
        assert_eq!(diags[0].position(), SourcePosition::new(2, 3));
        assert_eq!(diags[0].level, Level::Error);
    }
}
