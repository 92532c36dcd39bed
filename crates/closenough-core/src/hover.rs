//! Pointer-hover state tracking.

/// Whether the pointer is currently inside the window's client area.
///
/// A two-state machine driven by pointer-enter and pointer-leave events. The
/// transition methods report whether the state actually changed, so callers
/// can redraw only on real transitions; repeated enters while already
/// [`Inside`](HoverState::Inside) are no-ops.
///
/// # Examples
///
/// ```
/// use closenough_core::HoverState;
///
/// let mut hover = HoverState::default();
/// assert!(hover.is_outside());
///
/// assert!(hover.enter());
/// assert!(!hover.enter()); // already inside, no transition
/// assert!(hover.leave());
/// assert_eq!(hover.to_string(), "outside");
/// ```
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant,
)]
pub enum HoverState {
    /// The pointer is outside the window.
    #[default]
    #[display("outside")]
    Outside,
    /// The pointer is inside the window.
    #[display("inside")]
    Inside,
}

impl HoverState {
    /// Records a pointer-enter event, returning `true` if the state changed.
    pub fn enter(&mut self) -> bool {
        let changed = self.is_outside();
        *self = Self::Inside;
        changed
    }

    /// Records a pointer-leave event, returning `true` if the state changed.
    pub fn leave(&mut self) -> bool {
        let changed = self.is_inside();
        *self = Self::Outside;
        changed
    }
}
