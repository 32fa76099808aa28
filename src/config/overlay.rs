/// Merges two partial option sets; fields set in `overrides` win.
pub(super) trait Overlay: Sized {
    fn overlay(self, overrides: Self) -> Self;
}
