//! Manager configuration.

use serde::{Deserialize, Serialize};

/// Prefix used to derive a method name from an event name.
pub const DEFAULT_METHOD_PREFIX: &str = "on";

/// Options controlling how a [`DelegateManager`](crate::DelegateManager)
/// registers listeners.
///
/// Missing fields fall back to their defaults when deserialized, so a
/// partial JSON object such as `{"use_capture": true}` is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerOptions {
	/// Whether listeners are registered for the capture phase.
	pub use_capture: bool,
	/// Prefix prepended to the event name when `bind` or `unbind` is called
	/// without a method name.
	pub method_prefix: String,
}

impl Default for ManagerOptions {
	fn default() -> Self {
		Self {
			use_capture: false,
			method_prefix: DEFAULT_METHOD_PREFIX.to_string(),
		}
	}
}

impl ManagerOptions {
	/// Creates the default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the capture option.
	pub fn use_capture(mut self, use_capture: bool) -> Self {
		self.use_capture = use_capture;
		self
	}

	/// Sets the method prefix.
	pub fn method_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.method_prefix = prefix.into();
		self
	}

	/// Parses options from a JSON document.
	pub fn from_json(json: &str) -> serde_json::Result<Self> {
		serde_json::from_str(json)
	}

	/// Returns the method name implied for `event`.
	pub fn default_method(&self, event: &str) -> String {
		format!("{}{}", self.method_prefix, event)
	}
}
