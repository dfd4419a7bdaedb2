//! "Show more / show less" blocks for long text.

#[cfg(test)]
#[path = "expander_test.rs"]
mod expander_test;

pub const BLOCK_SELECTOR: &str = "[data-expandable]";
pub const TOGGLE_SELECTOR: &str = "[data-expand-toggle]";
pub const EXPANDED_CLASS: &str = "expanded";

const DEFAULT_MORE_LABEL: &str = "Show more";
const DEFAULT_LESS_LABEL: &str = "Show less";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expander {
    expanded: bool,
    more_label: String,
    less_label: String,
}

impl Expander {
    /// Collapsed block; blank or missing labels fall back to the defaults.
    pub fn new(more_label: Option<&str>, less_label: Option<&str>) -> Self {
        fn label(raw: Option<&str>, default: &str) -> String {
            raw.map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(default)
                .to_owned()
        }
        Self {
            expanded: false,
            more_label: label(more_label, DEFAULT_MORE_LABEL),
            less_label: label(less_label, DEFAULT_LESS_LABEL),
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    /// Button text for the current state.
    pub fn label(&self) -> &str {
        if self.expanded { &self.less_label } else { &self.more_label }
    }
}

#[cfg(feature = "hydrate")]
pub fn bind(document: &web_sys::Document) {
    use std::cell::RefCell;

    use crate::util::browser::{listen, query_all};

    for block in query_all(document, BLOCK_SELECTOR) {
        let Ok(Some(button)) = block.query_selector(TOGGLE_SELECTOR) else {
            continue;
        };
        let state = RefCell::new(Expander::new(
            button.get_attribute("data-more-label").as_deref(),
            button.get_attribute("data-less-label").as_deref(),
        ));
        let expanded = block.class_list().contains(EXPANDED_CLASS);
        if expanded {
            state.borrow_mut().toggle();
        }
        render(&block, &button, &state.borrow());

        let handle = button.clone();
        listen(button.as_ref(), "click", move |event| {
            event.prevent_default();
            let mut state = state.borrow_mut();
            state.toggle();
            render(&block, &handle, &state);
        });
    }

    fn render(block: &web_sys::Element, button: &web_sys::Element, state: &Expander) {
        let _ = block.class_list().toggle_with_force(EXPANDED_CLASS, state.is_expanded());
        let _ = button.set_attribute("aria-expanded", if state.is_expanded() { "true" } else { "false" });
        button.set_text_content(Some(state.label()));
    }
}
