//! crates/diagnostics/src/macros.rs
//! Gating macro for internal consistency checks.

/// Run a block only when the configured checks level enables `minimum`.
///
/// `minimum` is an [`InternalChecksLevel`](crate::InternalChecksLevel) variant
/// name. The block must evaluate to `()`.
///
/// # Example
/// ```
/// use diagnostics::{InternalChecksLevel, internal_check};
///
/// let configured = InternalChecksLevel::Level2;
/// let mut ran = false;
/// internal_check!(configured, Level2, {
///     ran = true;
/// });
/// internal_check!(configured, Level3, {
///     unreachable!();
/// });
/// assert!(ran);
/// ```
#[macro_export]
macro_rules! internal_check {
    ($configured:expr, $minimum:ident, $body:block) => {
        if $crate::InternalChecksLevel::is_enabled(
            $configured,
            $crate::InternalChecksLevel::$minimum,
        ) {
            $body
        }
    };
}
