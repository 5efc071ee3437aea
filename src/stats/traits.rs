//! Statistics extension points.

/// Hit-and-run notification hook.
pub mod hit_and_run_notifier;
