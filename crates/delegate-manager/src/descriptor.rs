//! Event descriptor parsing.
//!
//! A descriptor is the `"event"` or `"event selector"` string handed to
//! `bind` and `unbind`. The first space-separated token is the event name and
//! everything after it is the selector. Any string parses; nothing is trimmed
//! or validated.

use std::fmt;

/// An event name plus an optional delegation selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventDescriptor {
	/// The event name, passed verbatim to the target.
	pub name: String,
	/// The CSS selector, empty for direct bindings.
	pub selector: String,
}

impl EventDescriptor {
	/// Parses a descriptor string.
	///
	/// The string is split on single spaces. The first token becomes the
	/// event name and the remaining tokens, rejoined with single spaces,
	/// become the selector.
	///
	/// # Example
	///
	/// ```
	/// use delegate_manager::EventDescriptor;
	///
	/// let descriptor = EventDescriptor::parse("click li a");
	/// assert_eq!(descriptor.name, "click");
	/// assert_eq!(descriptor.selector, "li a");
	/// assert!(descriptor.is_delegated());
	/// ```
	pub fn parse(descriptor: &str) -> Self {
		let (name, selector) = descriptor.split_once(' ').unwrap_or((descriptor, ""));
		Self {
			name: name.to_string(),
			selector: selector.to_string(),
		}
	}

	/// Returns true if the descriptor carries a selector.
	pub fn is_delegated(&self) -> bool {
		!self.selector.is_empty()
	}
}

impl fmt::Display for EventDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.selector.is_empty() {
			f.write_str(&self.name)
		} else {
			write!(f, "{} {}", self.name, self.selector)
		}
	}
}
