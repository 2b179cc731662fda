//! Logging facade.
//!
//! Navigation decisions and applied route changes are reported through the
//! macros below, which forward to either [`log`](https://docs.rs/log) or
//! [`tracing`](https://docs.rs/tracing). Pick one backend with the matching
//! Cargo feature; `log` is on by default. With neither feature enabled the
//! macros expand to nothing.
//!
//! | Feature    | Backend         | Default |
//! |------------|-----------------|---------|
//! | `log`      | `log` crate     | yes     |
//! | `tracing`  | `tracing` crate | no      |
//!
//! ```ignore
//! use path_navigator::{debug_log, trace_log};
//!
//! trace_log!("resolve_back: '{}' has {} segment(s)", path, count);
//! debug_log!("Back from '{}' resolved to '{}'", path, target);
//! ```

/// Emit a **trace**-level log message.
///
/// Used for per-call decision details in the pure core.
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
        #[cfg(feature = "log")]
        ::log::trace!($($arg)*);
    };
}

/// Emit a **debug**-level log message.
///
/// Accepts `format!`-style arguments.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
        #[cfg(feature = "log")]
        ::log::debug!($($arg)*);
    };
}

/// Emit an **info**-level log message (applied navigations).
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::info!($($arg)*);
        #[cfg(feature = "log")]
        ::log::info!($($arg)*);
    };
}

/// Emit a **warn**-level log message.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!($($arg)*);
        #[cfg(feature = "log")]
        ::log::warn!($($arg)*);
    };
}

/// Emit an **error**-level log message.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::error!($($arg)*);
        #[cfg(feature = "log")]
        ::log::error!($($arg)*);
    };
}
