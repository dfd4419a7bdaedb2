//! Document handles the theme manager writes to.
//!
//! DESIGN
//! ======
//! `ThemeRoot` is the element carrying the dark marker class and
//! `ToggleControl` is the optional switch the user flips. The `web-sys`
//! implementations live here too, compiled only for the browser.

/// Element whose class list reflects the applied theme.
pub trait ThemeRoot {
    fn is_dark(&self) -> bool;
    fn set_dark(&self, dark: bool);
}

/// Callback run each time a control is activated.
pub type ActivateHandler = Box<dyn FnMut()>;

/// A user-facing theme switch.
///
/// Implementations are cheap handles (`Clone`) so the activation handler can
/// hold its own copy of the control it re-syncs.
pub trait ToggleControl: Clone + 'static {
    /// Show the control as on (dark) or off (light).
    fn set_checked(&self, checked: bool);

    /// Register `handler` for the control's activation event.
    fn on_activate(&self, handler: ActivateHandler);
}

impl<R: ThemeRoot + ?Sized> ThemeRoot for std::rc::Rc<R> {
    fn is_dark(&self) -> bool {
        (**self).is_dark()
    }

    fn set_dark(&self, dark: bool) {
        (**self).set_dark(dark);
    }
}

#[cfg(feature = "hydrate")]
pub use browser_impl::{BrowserControl, DocumentRoot};

#[cfg(feature = "hydrate")]
mod browser_impl {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use super::{ActivateHandler, ThemeRoot, ToggleControl};
    use crate::config::ToggleKind;

    /// `<html>` (or any element) with a marker class.
    #[derive(Clone, Debug)]
    pub struct DocumentRoot {
        element: web_sys::Element,
        class: String,
    }

    impl DocumentRoot {
        pub fn new(element: web_sys::Element, class: &str) -> Self {
            Self {
                element,
                class: class.to_owned(),
            }
        }
    }

    impl ThemeRoot for DocumentRoot {
        fn is_dark(&self) -> bool {
            self.element.class_list().contains(&self.class)
        }

        fn set_dark(&self, dark: bool) {
            let class_list = self.element.class_list();
            let result = if dark {
                class_list.add_1(&self.class)
            } else {
                class_list.remove_1(&self.class)
            };
            if let Err(e) = result {
                log::warn!("failed to update theme class: {e:?}");
            }
        }
    }

    /// The theme toggle as found in the page.
    #[derive(Clone, Debug)]
    pub enum BrowserControl {
        Button(web_sys::HtmlElement),
        Checkbox(web_sys::HtmlInputElement),
    }

    impl BrowserControl {
        /// Wrap `element` according to `kind`. A checkbox kind that is not
        /// an `<input>` is treated as a button.
        pub fn from_element(element: web_sys::Element, kind: ToggleKind) -> Option<Self> {
            match kind {
                ToggleKind::Checkbox => match element.dyn_into::<web_sys::HtmlInputElement>() {
                    Ok(input) => Some(Self::Checkbox(input)),
                    Err(element) => {
                        log::warn!("theme toggle is not an <input>; binding as button");
                        element.dyn_into::<web_sys::HtmlElement>().ok().map(Self::Button)
                    }
                },
                ToggleKind::Button => element.dyn_into::<web_sys::HtmlElement>().ok().map(Self::Button),
            }
        }

        fn target(&self) -> &web_sys::EventTarget {
            match self {
                Self::Button(el) => el.as_ref(),
                Self::Checkbox(input) => input.as_ref(),
            }
        }

        fn event_name(&self) -> &'static str {
            match self {
                Self::Button(_) => "click",
                Self::Checkbox(_) => "change",
            }
        }
    }

    impl ToggleControl for BrowserControl {
        fn set_checked(&self, checked: bool) {
            match self {
                Self::Button(el) => {
                    let _ = el.set_attribute("aria-pressed", if checked { "true" } else { "false" });
                }
                Self::Checkbox(input) => input.set_checked(checked),
            }
        }

        fn on_activate(&self, handler: ActivateHandler) {
            let closure = Closure::wrap(handler);
            if let Err(e) = self
                .target()
                .add_event_listener_with_callback(self.event_name(), closure.as_ref().unchecked_ref())
            {
                log::warn!("failed to bind theme toggle: {e:?}");
            }
            // Listener lives as long as the page.
            closure.forget();
        }
    }
}
