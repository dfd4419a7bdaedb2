//! Dropdown menus: one open at a time, closed by outside click or Escape.

#[cfg(test)]
#[path = "dropdown_test.rs"]
mod dropdown_test;

pub const DROPDOWN_SELECTOR: &str = "[data-dropdown]";
pub const TOGGLE_SELECTOR: &str = "[data-dropdown-toggle]";
pub const MENU_SELECTOR: &str = "[data-dropdown-menu]";
pub const OPEN_CLASS: &str = "open";

/// Something that happened to the page's dropdowns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownEvent {
    /// The trigger of dropdown `n` was clicked.
    Toggle(usize),
    /// A click landed inside dropdown `n`, or outside all of them (`None`).
    ClickAt(Option<usize>),
    Escape,
}

/// Which dropdown on the page, if any, is open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DropdownSet {
    len: usize,
    open: Option<usize>,
}

impl DropdownSet {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Apply `event`; returns whether anything changed.
    pub fn handle(&mut self, event: DropdownEvent) -> bool {
        let next = match event {
            DropdownEvent::Toggle(index) if index >= self.len => self.open,
            DropdownEvent::Toggle(index) if self.open == Some(index) => None,
            DropdownEvent::Toggle(index) => Some(index),
            // Clicks inside the open dropdown (its menu, or the trigger that
            // just opened it) keep it open.
            DropdownEvent::ClickAt(inside) if inside == self.open => self.open,
            DropdownEvent::ClickAt(_) | DropdownEvent::Escape => None,
        };
        let changed = next != self.open;
        self.open = next;
        changed
    }
}

#[cfg(feature = "hydrate")]
pub fn bind(document: &web_sys::Document) {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;

    use crate::util::browser::{listen, query_all};

    struct Dropdown {
        container: web_sys::Element,
        trigger: Option<web_sys::Element>,
        menu: Option<web_sys::Element>,
    }

    impl Dropdown {
        fn render(&self, open: bool) {
            if let Some(menu) = &self.menu {
                let _ = menu.class_list().toggle_with_force(OPEN_CLASS, open);
            }
            if let Some(trigger) = &self.trigger {
                let _ = trigger.set_attribute("aria-expanded", if open { "true" } else { "false" });
            }
        }
    }

    let dropdowns: Rc<Vec<Dropdown>> = Rc::new(
        query_all(document, DROPDOWN_SELECTOR)
            .into_iter()
            .map(|container| Dropdown {
                trigger: container.query_selector(TOGGLE_SELECTOR).ok().flatten(),
                menu: container.query_selector(MENU_SELECTOR).ok().flatten(),
                container,
            })
            .collect(),
    );
    if dropdowns.is_empty() {
        return;
    }
    log::debug!("binding {} dropdown(s)", dropdowns.len());

    let state = Rc::new(RefCell::new(DropdownSet::new(dropdowns.len())));
    let dispatch = {
        let dropdowns = Rc::clone(&dropdowns);
        let state = Rc::clone(&state);
        Rc::new(move |event: DropdownEvent| {
            let mut state = state.borrow_mut();
            if state.handle(event) {
                for (index, dropdown) in dropdowns.iter().enumerate() {
                    dropdown.render(state.is_open(index));
                }
            }
        })
    };

    for (index, dropdown) in dropdowns.iter().enumerate() {
        let Some(trigger) = &dropdown.trigger else {
            continue;
        };
        let dispatch = Rc::clone(&dispatch);
        listen(trigger.as_ref(), "click", move |event| {
            event.prevent_default();
            dispatch(DropdownEvent::Toggle(index));
        });
    }

    {
        let dropdowns = Rc::clone(&dropdowns);
        let dispatch = Rc::clone(&dispatch);
        listen(document.as_ref(), "click", move |event| {
            let target = event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            let inside = target.and_then(|node| dropdowns.iter().position(|d| d.container.contains(Some(&node))));
            dispatch(DropdownEvent::ClickAt(inside));
        });
    }

    listen(document.as_ref(), "keydown", move |event| {
        let is_escape = event
            .dyn_ref::<web_sys::KeyboardEvent>()
            .is_some_and(|key| key.key() == "Escape");
        if is_escape {
            dispatch(DropdownEvent::Escape);
        }
    });
}
