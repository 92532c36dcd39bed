//! Core logic for the Close Enough application.
//!
//! This crate holds the GUI-independent pieces of the app:
//!
//! 1. **Convergence checking** - [`convergence`]: deciding whether two values
//!    are "close enough" under a relative tolerance, via
//!    [`ConvergenceCheck`] and the [`converged`] convenience function.
//! 2. **Lenient numeric parsing** - [`numeric`]: the permissive text-to-float
//!    parser used for the input fields ([`parse_lenient`]), where malformed
//!    text degrades to `0.0` instead of failing.
//! 3. **Hover tracking** - [`hover`]: the two-state pointer-hover machine
//!    ([`HoverState`]) driven by enter/leave events.
//!
//! # Examples
//!
//! ```
//! use closenough_core::{HoverState, converged, parse_lenient};
//!
//! let a = parse_lenient("1.01");
//! let b = parse_lenient("1.02");
//! assert!(!converged(a, b, parse_lenient(".001")));
//! assert!(converged(a, b, parse_lenient("0.1")));
//!
//! let mut hover = HoverState::default();
//! assert!(hover.enter());
//! assert!(hover.is_inside());
//! ```

pub mod convergence;
pub mod hover;
pub mod numeric;

pub use self::{
    convergence::{ConvergenceCheck, converged},
    hover::HoverState,
    numeric::parse_lenient,
};
