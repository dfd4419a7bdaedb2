//! Show/hide toggle for password inputs.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

pub const TOGGLE_SELECTOR: &str = "[data-password-toggle]";
pub const TARGET_ATTRIBUTE: &str = "data-target";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Shown,
}

impl Visibility {
    /// Read the state off an input's `type`; anything but `password` is shown.
    pub fn from_input_type(input_type: &str) -> Self {
        if input_type.eq_ignore_ascii_case("password") {
            Self::Hidden
        } else {
            Self::Shown
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Shown,
            Self::Shown => Self::Hidden,
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Self::Hidden => "password",
            Self::Shown => "text",
        }
    }

    /// `aria-pressed` value for the toggle button.
    pub fn pressed(self) -> &'static str {
        match self {
            Self::Hidden => "false",
            Self::Shown => "true",
        }
    }
}

#[cfg(feature = "hydrate")]
pub fn bind(document: &web_sys::Document) {
    use wasm_bindgen::JsCast;

    use crate::util::browser::{listen, query_all};

    for button in query_all(document, TOGGLE_SELECTOR) {
        let input = button
            .get_attribute(TARGET_ATTRIBUTE)
            .and_then(|id| document.get_element_by_id(&id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok());
        let Some(input) = input else {
            log::warn!("password toggle without a valid {TARGET_ATTRIBUTE}");
            continue;
        };

        let _ = button.set_attribute("aria-pressed", Visibility::from_input_type(&input.type_()).pressed());
        let handle = button.clone();
        listen(button.as_ref(), "click", move |event| {
            event.prevent_default();
            let next = Visibility::from_input_type(&input.type_()).toggled();
            input.set_type(next.input_type());
            let _ = handle.set_attribute("aria-pressed", next.pressed());
        });
    }
}
