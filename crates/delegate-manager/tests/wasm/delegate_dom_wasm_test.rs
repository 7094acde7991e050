//! DomTarget WASM Tests
//!
//! Runs the manager against real DOM elements.
//!
//! **Run with**: `wasm-pack test --headless --chrome crates/delegate-manager`

#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use delegate_manager::{DelegateManager, DomTarget, MethodTable};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
	web_sys::window().unwrap().document().unwrap()
}

/// Builds `<ul><li><a></a></li><li></li></ul>` attached to the body.
fn list() -> (web_sys::Element, web_sys::HtmlElement, web_sys::HtmlElement) {
	let document = document();
	let ul = document.create_element("ul").unwrap();
	let li = document.create_element("li").unwrap();
	let a = document.create_element("a").unwrap();
	let empty_li = document.create_element("li").unwrap();
	li.append_child(&a).unwrap();
	ul.append_child(&li).unwrap();
	ul.append_child(&empty_li).unwrap();
	document.body().unwrap().append_child(&ul).unwrap();
	(
		ul,
		a.dyn_into::<web_sys::HtmlElement>().unwrap(),
		empty_li.dyn_into::<web_sys::HtmlElement>().unwrap(),
	)
}

fn counting(hits: &Rc<Cell<u32>>) -> impl Fn(&web_sys::Event) + 'static {
	let hits = Rc::clone(hits);
	move |_: &web_sys::Event| hits.set(hits.get() + 1)
}

#[wasm_bindgen_test]
fn test_delegated_click_fires_for_matching_origin() {
	let (ul, a, empty_li) = list();
	let clicks = Rc::new(Cell::new(0));
	let target = Rc::new(DomTarget::new(ul));
	let receiver = MethodTable::new().with_method("onclick", counting(&clicks));
	let mut events = DelegateManager::new(Rc::clone(&target), Rc::new(receiver));

	events.bind("click li a", None).unwrap();

	a.click();
	assert_eq!(clicks.get(), 1);

	empty_li.click();
	assert_eq!(clicks.get(), 1);

	events.unbind("click li a", None);
	a.click();
	assert_eq!(clicks.get(), 1);
	assert_eq!(target.listener_count(), 0);
}

#[wasm_bindgen_test]
fn test_direct_click_and_unbind_all() {
	let (ul, a, _) = list();
	let clicks = Rc::new(Cell::new(0));
	let target = Rc::new(DomTarget::new(ul));
	let receiver = MethodTable::new().with_method("onclick", counting(&clicks));
	let mut events = DelegateManager::new(Rc::clone(&target), Rc::new(receiver));

	events.bind("click", None).unwrap();
	a.click();
	assert_eq!(clicks.get(), 1);

	events.unbind_all();
	a.click();
	assert_eq!(clicks.get(), 1);
	assert!(events.is_empty());
}

#[wasm_bindgen_test]
fn test_invalid_selector_is_a_registration_error() {
	let (ul, _, _) = list();
	let target = Rc::new(DomTarget::new(ul));
	let receiver = MethodTable::new().with_method("onclick", |_: &web_sys::Event| {});
	let mut events = DelegateManager::new(target, Rc::new(receiver));

	assert!(events.bind("click li >", None).is_err());
	assert!(events.is_empty());
}

#[wasm_bindgen_test]
fn test_unbind_outside_dispatch_frees_closures() {
	let (ul, _, _) = list();
	let target = Rc::new(DomTarget::new(ul));
	let receiver = MethodTable::new().with_method("onclick", |_: &web_sys::Event| {});
	let mut events = DelegateManager::new(Rc::clone(&target), Rc::new(receiver));

	for _ in 0..5 {
		events.bind("click", None).unwrap();
		events.bind("click li a", Some("onclick")).unwrap();
		events.unbind_all();
	}

	assert_eq!(target.listener_count(), 0);
	assert_eq!(target.retired_count(), 0);
}

#[wasm_bindgen_test]
fn test_closure_unbound_by_its_handler_is_freed_later() {
	let (ul, a, _) = list();
	let target = Rc::new(DomTarget::new(ul));
	let manager: Rc<RefCell<Option<DelegateManager<DomTarget, MethodTable<web_sys::Event>>>>> =
		Rc::new(RefCell::new(None));

	let receiver = MethodTable::new()
		.with_method("onclick", {
			let manager = Rc::clone(&manager);
			move |_: &web_sys::Event| {
				if let Some(events) = manager.borrow_mut().as_mut() {
					events.unbind("click", None);
				}
			}
		})
		.with_method("onkeyup", |_: &web_sys::Event| {});
	let mut events = DelegateManager::new(Rc::clone(&target), Rc::new(receiver));
	events.bind("click", None).unwrap();
	*manager.borrow_mut() = Some(events);

	a.click();
	assert_eq!(target.listener_count(), 0);
	assert_eq!(target.retired_count(), 1);

	manager
		.borrow_mut()
		.as_mut()
		.unwrap()
		.bind("keyup", None)
		.unwrap();
	assert_eq!(target.retired_count(), 0);
}
