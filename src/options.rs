//! Configuration options for copy operations.
//!
//! This module provides [`CopyOptions`] for configuring copy behavior.
//!
//! # Example
//!
//! ```
//! use safecp::CopyOptions;
//!
//! // Create options with builder pattern
//! let options = CopyOptions::default()
//!     .without_permissions()
//!     .with_warn_handler(|msg| eprintln!("warning: {msg}"));
//! ```

/// Options for copy operations.
///
/// Use [`Default::default()`] to get sensible defaults, then customize
/// using the builder methods.
///
/// # Default Values
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `preserve_permissions` | `true` | Create destination with source mode bits |
/// | `notice_handler` | `None` | Human-facing progress notice |
/// | `warn_handler` | `None` | Non-fatal teardown diagnostics |
#[derive(Debug, Clone)]
pub struct CopyOptions {
    /// Whether to create the destination with the source's permission
    /// bits (default: true)
    ///
    /// The resulting mode is still filtered through the process umask,
    /// standard file-creation semantics. When false, the destination is
    /// created with the platform default mode instead.
    pub preserve_permissions: bool,

    /// Callback for the progress notice (optional)
    ///
    /// Receives the single `'<source>' --> '<destination>'` line once
    /// both files are open, before the transfer starts. If not set and
    /// the `tracing` feature is enabled, the notice is logged via
    /// tracing. Otherwise it is dropped.
    pub notice_handler: Option<fn(&str)>,

    /// Callback for warnings (optional)
    ///
    /// Receives non-fatal diagnostics: descriptor close failures after a
    /// logically complete transfer. If not set and the `tracing` feature
    /// is enabled, warnings are logged via tracing. Otherwise, warnings
    /// are silently ignored.
    pub warn_handler: Option<fn(&str)>,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            preserve_permissions: true,
            notice_handler: None,
            warn_handler: None,
        }
    }
}

impl CopyOptions {
    /// Create options with a notice handler
    #[must_use]
    pub fn with_notice_handler(mut self, handler: fn(&str)) -> Self {
        self.notice_handler = Some(handler);
        self
    }

    /// Create options with a warning handler
    #[must_use]
    pub fn with_warn_handler(mut self, handler: fn(&str)) -> Self {
        self.warn_handler = Some(handler);
        self
    }

    /// Disable permission preservation
    ///
    /// By default, the destination is created with the source's mode
    /// bits. Disable this to create it with the default umask
    /// permissions instead.
    #[must_use]
    pub fn without_permissions(mut self) -> Self {
        self.preserve_permissions = false;
        self
    }

    pub(crate) fn notice(&self, msg: &str) {
        if let Some(handler) = self.notice_handler {
            handler(msg);
        } else {
            #[cfg(feature = "tracing")]
            tracing::info!("{}", msg);
        }
    }

    pub(crate) fn warn(&self, msg: &str) {
        if let Some(handler) = self.warn_handler {
            handler(msg);
        } else {
            #[cfg(feature = "tracing")]
            tracing::warn!("{}", msg);
        }
    }
}
