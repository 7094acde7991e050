//! In-memory event target.
//!
//! [`MockTarget`] implements [`EventTarget`] without a DOM. Events carry the
//! tag path from the target down to the element they originated from, and
//! delegated listeners fire when their selector matches an element on that
//! path, the way `Element.closest` resolves it in a browser. Selectors are
//! descendant chains of tag names (`"li a"`, `"ul * a"`).
//!
//! ```
//! use delegate_manager::testing::MockEvent;
//!
//! // A click on <a> inside <li> inside the target.
//! let event = MockEvent::at("click", &["li", "a"]);
//! assert!(event.matches("li a"));
//! assert!(event.matches("a"));
//! assert!(!event.matches("span"));
//! ```

use std::cell::{Cell, RefCell};

use crate::callback::Callback;
use crate::error::ListenerError;
use crate::target::EventTarget;

/// An event dispatched to a [`MockTarget`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockEvent {
	/// The event name.
	pub name: String,
	/// Tag names from the target's child down to the origin element. Empty
	/// when the event originates at the target itself.
	pub path: Vec<String>,
}

impl MockEvent {
	/// Creates an event originating at the target itself.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			path: Vec::new(),
		}
	}

	/// Creates an event originating at the end of `path`.
	pub fn at(name: impl Into<String>, path: &[&str]) -> Self {
		Self {
			name: name.into(),
			path: path.iter().map(|tag| tag.to_string()).collect(),
		}
	}

	/// Returns true if `selector` matches the origin or one of its ancestors
	/// below the target.
	pub fn matches(&self, selector: &str) -> bool {
		let parts: Vec<&str> = selector.split_whitespace().collect();
		let Some((last, ancestors)) = parts.split_last() else {
			return false;
		};
		self.path.iter().enumerate().any(|(depth, tag)| {
			tag_matches(last, tag) && is_subsequence(ancestors, &self.path[..depth])
		})
	}
}

fn tag_matches(pattern: &str, tag: &str) -> bool {
	pattern == "*" || pattern.eq_ignore_ascii_case(tag)
}

fn is_subsequence(patterns: &[&str], path: &[String]) -> bool {
	let mut tags = path.iter();
	patterns
		.iter()
		.all(|pattern| tags.any(|tag| tag_matches(pattern, tag)))
}

/// Handle for a delegated listener registered on a [`MockTarget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MockHandle(u64);

struct DirectListener {
	event: String,
	use_capture: bool,
	callback: Callback<MockEvent>,
}

struct DelegatedListener {
	id: u64,
	event: String,
	selector: String,
	use_capture: bool,
	callback: Callback<MockEvent>,
}

/// An in-memory [`EventTarget`].
#[derive(Default)]
pub struct MockTarget {
	detached: bool,
	next_id: Cell<u64>,
	direct: RefCell<Vec<DirectListener>>,
	delegated: RefCell<Vec<DelegatedListener>>,
}

impl MockTarget {
	/// Creates an empty target.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a target that refuses every registration.
	pub fn detached() -> Self {
		Self {
			detached: true,
			..Self::default()
		}
	}

	/// Dispatches `event`, returning how many listeners were invoked.
	///
	/// Listeners are collected before any of them runs, so a listener may
	/// add or remove listeners on this target while the dispatch is in
	/// progress.
	pub fn dispatch(&self, event: &MockEvent) -> usize {
		let mut callbacks: Vec<Callback<MockEvent>> = self
			.delegated
			.borrow()
			.iter()
			.filter(|listener| listener.event == event.name && event.matches(&listener.selector))
			.map(|listener| listener.callback.clone())
			.collect();
		callbacks.extend(
			self.direct
				.borrow()
				.iter()
				.filter(|listener| listener.event == event.name)
				.map(|listener| listener.callback.clone()),
		);

		for callback in &callbacks {
			callback.call(event);
		}
		callbacks.len()
	}

	/// Returns the number of listeners, direct and delegated, for `event`.
	pub fn listener_count(&self, event: &str) -> usize {
		let direct = self
			.direct
			.borrow()
			.iter()
			.filter(|listener| listener.event == event)
			.count();
		let delegated = self
			.delegated
			.borrow()
			.iter()
			.filter(|listener| listener.event == event)
			.count();
		direct + delegated
	}

	/// Returns the number of direct listeners.
	pub fn direct_count(&self) -> usize {
		self.direct.borrow().len()
	}

	/// Returns the number of delegated listeners.
	pub fn delegated_count(&self) -> usize {
		self.delegated.borrow().len()
	}

	/// Returns the number of listeners registered for the capture phase.
	pub fn capture_count(&self) -> usize {
		let direct = self
			.direct
			.borrow()
			.iter()
			.filter(|listener| listener.use_capture)
			.count();
		let delegated = self
			.delegated
			.borrow()
			.iter()
			.filter(|listener| listener.use_capture)
			.count();
		direct + delegated
	}

	/// Returns true if no listener is registered.
	pub fn is_empty(&self) -> bool {
		self.direct.borrow().is_empty() && self.delegated.borrow().is_empty()
	}

	fn check_attached(&self) -> Result<(), ListenerError> {
		if self.detached {
			Err(ListenerError::Detached)
		} else {
			Ok(())
		}
	}
}

impl std::fmt::Debug for MockTarget {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MockTarget")
			.field("detached", &self.detached)
			.field("direct_count", &self.direct_count())
			.field("delegated_count", &self.delegated_count())
			.finish()
	}
}

impl EventTarget for MockTarget {
	type Event = MockEvent;
	type Handle = MockHandle;

	fn add_listener(
		&self,
		event: &str,
		listener: &Callback<MockEvent>,
		use_capture: bool,
	) -> Result<(), ListenerError> {
		self.check_attached()?;

		let mut direct = self.direct.borrow_mut();
		// Same listener, event and phase registers once, as in the DOM.
		let exists = direct.iter().any(|existing| {
			existing.event == event
				&& existing.use_capture == use_capture
				&& existing.callback.ptr_eq(listener)
		});
		if !exists {
			direct.push(DirectListener {
				event: event.to_string(),
				use_capture,
				callback: listener.clone(),
			});
		}
		Ok(())
	}

	fn remove_listener(&self, event: &str, listener: &Callback<MockEvent>, use_capture: bool) {
		self.direct.borrow_mut().retain(|existing| {
			!(existing.event == event
				&& existing.use_capture == use_capture
				&& existing.callback.ptr_eq(listener))
		});
	}

	fn delegate_bind(
		&self,
		selector: &str,
		event: &str,
		listener: Callback<MockEvent>,
		use_capture: bool,
	) -> Result<MockHandle, ListenerError> {
		self.check_attached()?;
		if selector.trim().is_empty() {
			return Err(ListenerError::InvalidSelector(selector.to_string()));
		}

		let id = self.next_id.get();
		self.next_id.set(id + 1);
		self.delegated.borrow_mut().push(DelegatedListener {
			id,
			event: event.to_string(),
			selector: selector.to_string(),
			use_capture,
			callback: listener,
		});
		Ok(MockHandle(id))
	}

	fn delegate_unbind(&self, event: &str, handle: MockHandle, use_capture: bool) {
		self.delegated.borrow_mut().retain(|existing| {
			!(existing.id == handle.0 && existing.event == event && existing.use_capture == use_capture)
		});
	}
}
