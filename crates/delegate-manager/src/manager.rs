//! The binding manager.
//!
//! A [`DelegateManager`] routes events arriving at a target to named methods
//! on a receiver and remembers every binding it makes, keyed by event name
//! and method name, so that bindings can be removed one at a time, per event,
//! or all at once.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::callback::Callback;
use crate::descriptor::EventDescriptor;
use crate::error::{BindingError, Result};
use crate::options::ManagerOptions;
use crate::receiver::Receiver;
use crate::target::EventTarget;
use crate::{debug_log, warn_log};

/// A live registration, tagged with the path that created it.
///
/// The tag decides which removal primitive undoes the registration.
pub enum Binding<T: EventTarget> {
	/// Registered through [`EventTarget::delegate_bind`].
	Delegated {
		/// The selector the listener is scoped to.
		selector: String,
		/// The handle returned by the target.
		handle: T::Handle,
	},
	/// Registered through [`EventTarget::add_listener`].
	Direct {
		/// The exact callback that was registered.
		callback: Callback<T::Event>,
	},
}

impl<T: EventTarget> Binding<T> {
	/// Returns true for delegated bindings.
	pub fn is_delegated(&self) -> bool {
		matches!(self, Self::Delegated { .. })
	}

	/// Returns the delegation selector, or `None` for direct bindings.
	pub fn selector(&self) -> Option<&str> {
		match self {
			Self::Delegated { selector, .. } => Some(selector),
			Self::Direct { .. } => None,
		}
	}
}

impl<T: EventTarget> fmt::Debug for Binding<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Delegated { selector, .. } => f
				.debug_struct("Delegated")
				.field("selector", selector)
				.finish_non_exhaustive(),
			Self::Direct { callback } => f.debug_struct("Direct").field("callback", callback).finish(),
		}
	}
}

/// Binds target events to receiver methods and tracks the bindings.
///
/// Dropping the manager does not remove its listeners. Call
/// [`unbind_all`](Self::unbind_all) first for a clean teardown.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use delegate_manager::testing::{MockEvent, MockTarget};
/// use delegate_manager::{DelegateManager, MethodTable};
///
/// let list = Rc::new(MockTarget::new());
/// let receiver = Rc::new(MethodTable::new().with_method("onclick", |_: &MockEvent| {}));
///
/// let mut events = DelegateManager::new(Rc::clone(&list), receiver);
/// events.bind("click li a", None)?;
/// assert!(events.is_bound("click", "onclick"));
///
/// events.unbind("click", Some("onclick"));
/// assert!(events.is_empty());
/// assert_eq!(list.listener_count("click"), 0);
/// # Ok::<(), delegate_manager::BindingError>(())
/// ```
pub struct DelegateManager<T: EventTarget, R> {
	target: Rc<T>,
	receiver: Rc<R>,
	options: ManagerOptions,
	bindings: HashMap<String, HashMap<String, Binding<T>>>,
}

impl<T, R> DelegateManager<T, R>
where
	T: EventTarget,
	T::Event: 'static,
	R: Receiver<T::Event>,
{
	/// Creates a manager with default options.
	pub fn new(target: Rc<T>, receiver: Rc<R>) -> Self {
		Self::with_options(target, receiver, ManagerOptions::default())
	}

	/// Creates a manager with the given options.
	pub fn with_options(target: Rc<T>, receiver: Rc<R>, options: ManagerOptions) -> Self {
		Self {
			target,
			receiver,
			options,
			bindings: HashMap::new(),
		}
	}

	/// Binds the event described by `descriptor` to a receiver method.
	///
	/// `descriptor` is `"event"` for a direct binding or `"event selector"`
	/// for a delegated one. Without `method` the method name is the event
	/// name with the configured prefix, `"on"` by default.
	///
	/// The method is resolved now; later changes to the receiver do not
	/// affect this binding. Binding a pair that is already bound removes the
	/// old registration first.
	///
	/// # Errors
	///
	/// [`BindingError::MissingMethod`] if the receiver has no such method,
	/// [`BindingError::Registration`] if the target refuses the listener.
	pub fn bind(&mut self, descriptor: &str, method: Option<&str>) -> Result<&mut Self> {
		let descriptor = EventDescriptor::parse(descriptor);
		let name = descriptor.name.clone();
		let method = self.method_name(&name, method);
		let resolved = self
			.receiver
			.method(&method)
			.ok_or_else(|| BindingError::missing_method(&method, &name))?;
		// Each binding owns a distinct listener, even when the receiver hands
		// out the same callback for several names or managers.
		let callback = Callback::new(move |event: &T::Event| resolved.call(event));

		if let Some(previous) = self.take(&name, &method) {
			warn_log!(
				"'{}' is already bound to '{}', removing the previous listener",
				name,
				method
			);
			self.release(&name, previous);
		}

		let use_capture = self.options.use_capture;
		let binding = if descriptor.is_delegated() {
			let handle = self
				.target
				.delegate_bind(&descriptor.selector, &name, callback, use_capture)
				.map_err(|source| BindingError::registration(&name, source))?;
			Binding::Delegated {
				selector: descriptor.selector.clone(),
				handle,
			}
		} else {
			self.target
				.add_listener(&name, &callback, use_capture)
				.map_err(|source| BindingError::registration(&name, source))?;
			Binding::Direct { callback }
		};

		debug_log!("bound '{}' to '{}'", descriptor, method);
		self.bindings
			.entry(name)
			.or_default()
			.insert(method, binding);

		Ok(self)
	}

	/// Binds every `(descriptor, method)` pair in iteration order.
	///
	/// Stops at the first error; pairs bound before it stay bound.
	///
	/// # Example
	///
	/// ```ignore
	/// events.bind_all([("click", "onclick"), ("keyup", "onkeyup")])?;
	/// ```
	pub fn bind_all<I, D, M>(&mut self, pairs: I) -> Result<&mut Self>
	where
		I: IntoIterator<Item = (D, M)>,
		D: AsRef<str>,
		M: AsRef<str>,
	{
		for (descriptor, method) in pairs {
			self.bind(descriptor.as_ref(), Some(method.as_ref()))?;
		}
		Ok(self)
	}

	/// Removes a single binding.
	///
	/// Only the event name of `descriptor` is used; the selector is ignored.
	/// Without `method` the prefixed event name is used, as in
	/// [`bind`](Self::bind). Unbinding a pair that is not bound does nothing.
	pub fn unbind(&mut self, descriptor: &str, method: Option<&str>) -> &mut Self {
		let name = EventDescriptor::parse(descriptor).name;
		let method = self.method_name(&name, method);

		match self.take(&name, &method) {
			Some(binding) => {
				debug_log!("unbinding {:?} from '{}'", binding, method);
				self.release(&name, binding);
			}
			None => debug_log!("'{}' is not bound to '{}', nothing to unbind", name, method),
		}

		self
	}

	/// Removes every binding for the event named by `descriptor`.
	///
	/// The selector portion of `descriptor` is ignored. Bindings for other
	/// events are left in place.
	pub fn unbind_event(&mut self, descriptor: &str) -> &mut Self {
		let name = EventDescriptor::parse(descriptor).name;

		let Some(methods) = self.bindings.remove(&name) else {
			debug_log!("no bindings for '{}'", name);
			return self;
		};

		for (method, binding) in methods {
			debug_log!("unbinding {:?} from '{}'", binding, method);
			self.release(&name, binding);
		}

		self
	}

	/// Removes every binding held by the manager.
	pub fn unbind_all(&mut self) -> &mut Self {
		let events: Vec<String> = self.bindings.keys().cloned().collect();
		for event in events {
			self.unbind_event(&event);
		}
		self
	}

	/// Returns true if `event` is bound to `method`.
	pub fn is_bound(&self, event: &str, method: &str) -> bool {
		self.binding(event, method).is_some()
	}

	/// Returns the binding of `event` to `method`.
	pub fn binding(&self, event: &str, method: &str) -> Option<&Binding<T>> {
		self.bindings.get(event)?.get(method)
	}

	/// Returns the method names bound to `event`, in no particular order.
	pub fn methods_for(&self, event: &str) -> impl Iterator<Item = &str> {
		self.bindings
			.get(event)
			.into_iter()
			.flat_map(|methods| methods.keys().map(String::as_str))
	}

	/// Returns the event names with at least one binding, in no particular
	/// order.
	pub fn event_names(&self) -> impl Iterator<Item = &str> {
		self.bindings.keys().map(String::as_str)
	}

	/// Returns the number of `(event, method)` bindings.
	pub fn len(&self) -> usize {
		self.bindings.values().map(HashMap::len).sum()
	}

	/// Returns true if nothing is bound.
	pub fn is_empty(&self) -> bool {
		self.bindings.is_empty()
	}

	/// Returns the target.
	pub fn target(&self) -> &Rc<T> {
		&self.target
	}

	/// Returns the receiver.
	pub fn receiver(&self) -> &Rc<R> {
		&self.receiver
	}

	/// Returns the options.
	pub fn options(&self) -> &ManagerOptions {
		&self.options
	}

	fn method_name(&self, event: &str, method: Option<&str>) -> String {
		match method {
			Some(method) => method.to_string(),
			None => self.options.default_method(event),
		}
	}

	/// Removes the registry entry, dropping the event entry once it is empty.
	fn take(&mut self, event: &str, method: &str) -> Option<Binding<T>> {
		let methods = self.bindings.get_mut(event)?;
		let binding = methods.remove(method);
		if methods.is_empty() {
			self.bindings.remove(event);
		}
		binding
	}

	fn release(&self, event: &str, binding: Binding<T>) {
		let use_capture = self.options.use_capture;
		match binding {
			Binding::Delegated { handle, .. } => {
				self.target.delegate_unbind(event, handle, use_capture)
			}
			Binding::Direct { callback } => {
				self.target.remove_listener(event, &callback, use_capture)
			}
		}
	}
}

impl<T: EventTarget, R> fmt::Debug for DelegateManager<T, R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut events: Vec<_> = self.bindings.keys().collect();
		events.sort();
		f.debug_struct("DelegateManager")
			.field("options", &self.options)
			.field("events", &events)
			.finish_non_exhaustive()
	}
}
