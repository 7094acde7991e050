//! Receivers: objects whose methods are looked up by name.
//!
//! A receiver maps a method name to a [`Callback`]. The manager resolves the
//! name once, at bind time, and keeps the returned callback for the lifetime
//! of the binding. Replacing a method on the receiver afterwards does not
//! affect bindings that already exist.
//!
//! Types with a fixed set of handlers can implement [`Receiver`] directly by
//! matching on the name. [`MethodTable`] covers the dynamic case.
//!
//! ```
//! use std::rc::Rc;
//! use delegate_manager::{Callback, Receiver};
//!
//! struct TodoList;
//!
//! impl TodoList {
//!     fn onclick(&self, _event: &String) {}
//! }
//!
//! struct TodoListReceiver(Rc<TodoList>);
//!
//! impl Receiver<String> for TodoListReceiver {
//!     fn method(&self, name: &str) -> Option<Callback<String>> {
//!         let list = Rc::clone(&self.0);
//!         match name {
//!             "onclick" => Some(Callback::new(move |e: &String| list.onclick(e))),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let receiver = TodoListReceiver(Rc::new(TodoList));
//! assert!(receiver.method("onclick").is_some());
//! assert!(receiver.method("onkeyup").is_none());
//! ```

use std::collections::HashMap;
use std::rc::Rc;

use crate::callback::Callback;

/// An object exposing named callback methods.
pub trait Receiver<E> {
	/// Returns the callback registered under `name`, if any.
	fn method(&self, name: &str) -> Option<Callback<E>>;
}

impl<E, R: Receiver<E> + ?Sized> Receiver<E> for Rc<R> {
	fn method(&self, name: &str) -> Option<Callback<E>> {
		(**self).method(name)
	}
}

impl<E, R: Receiver<E> + ?Sized> Receiver<E> for &R {
	fn method(&self, name: &str) -> Option<Callback<E>> {
		(**self).method(name)
	}
}

/// A receiver backed by a table of named callbacks.
pub struct MethodTable<E> {
	methods: HashMap<String, Callback<E>>,
}

impl<E> MethodTable<E> {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self {
			methods: HashMap::new(),
		}
	}

	/// Adds a method, builder style.
	pub fn with_method<F>(mut self, name: impl Into<String>, f: F) -> Self
	where
		F: Fn(&E) + 'static,
	{
		self.insert(name, Callback::new(f));
		self
	}

	/// Inserts or replaces a method, returning the previous callback.
	pub fn insert(
		&mut self,
		name: impl Into<String>,
		callback: Callback<E>,
	) -> Option<Callback<E>> {
		self.methods.insert(name.into(), callback)
	}

	/// Removes a method.
	pub fn remove(&mut self, name: &str) -> Option<Callback<E>> {
		self.methods.remove(name)
	}

	/// Returns true if a method named `name` exists.
	pub fn contains(&self, name: &str) -> bool {
		self.methods.contains_key(name)
	}

	/// Returns the number of methods.
	pub fn len(&self) -> usize {
		self.methods.len()
	}

	/// Returns true if the table has no methods.
	pub fn is_empty(&self) -> bool {
		self.methods.is_empty()
	}
}

impl<E> Default for MethodTable<E> {
	fn default() -> Self {
		Self::new()
	}
}

impl<E> std::fmt::Debug for MethodTable<E> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut names: Vec<_> = self.methods.keys().collect();
		names.sort();
		f.debug_struct("MethodTable")
			.field("methods", &names)
			.finish()
	}
}

impl<E> Receiver<E> for MethodTable<E> {
	fn method(&self, name: &str) -> Option<Callback<E>> {
		self.methods.get(name).cloned()
	}
}
