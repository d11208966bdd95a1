//! Internal tracing hooks.
//!
//! With the `tracing` feature disabled these expand to nothing, so the
//! validators carry no logging cost by default.

/// Records that a fatal error pruned the remaining checks of `scope` at `field`.
macro_rules! trace_fatal {
    ($scope:expr, $error:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(
            scope = $scope,
            code = $error.code(),
            field = $error.field(),
            "fatal validation error, skipping remaining checks"
        );
    };
}

pub(crate) use trace_fatal;
