//! Error types for binding operations.
//!
//! Only `bind` can fail. Every unbind path is fail-soft: removing a binding
//! that does not exist is a no-op, and removal errors reported by a platform
//! are logged rather than returned.

use thiserror::Error;

/// Result type alias for binding operations.
pub type Result<T> = std::result::Result<T, BindingError>;

/// Errors raised by [`DelegateManager::bind`](crate::DelegateManager::bind).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BindingError {
	/// The receiver has no method with the resolved name.
	#[error("receiver has no method '{method}' for '{event}' event")]
	MissingMethod {
		/// The method name that was looked up.
		method: String,
		/// The event name being bound.
		event: String,
	},

	/// The target refused the listener registration.
	#[error("failed to register listener for '{event}' event: {source}")]
	Registration {
		/// The event name being bound.
		event: String,
		/// The error reported by the target.
		#[source]
		source: ListenerError,
	},
}

impl BindingError {
	/// Creates a missing-method error.
	pub fn missing_method(method: impl Into<String>, event: impl Into<String>) -> Self {
		Self::MissingMethod {
			method: method.into(),
			event: event.into(),
		}
	}

	/// Creates a registration error.
	pub fn registration(event: impl Into<String>, source: ListenerError) -> Self {
		Self::Registration {
			event: event.into(),
			source,
		}
	}
}

/// Errors reported by an [`EventTarget`](crate::EventTarget) when it cannot
/// register a listener.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ListenerError {
	/// The target is not able to receive listeners.
	#[error("target is detached")]
	Detached,

	/// The delegation selector was rejected.
	#[error("invalid selector '{0}'")]
	InvalidSelector(String),

	/// Any other failure reported by the platform.
	#[error("platform error: {0}")]
	Platform(String),
}
