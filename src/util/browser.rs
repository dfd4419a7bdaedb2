//! Window and document lookups.
//!
//! Every function here has a native fallback so callers (components, boot)
//! compile unchanged without the `hydrate` feature; the fallbacks report "no
//! browser": no system dark preference, no config, light theme.

use crate::config::UiConfig;
use crate::theme::Theme;

/// Whether the OS/browser asks for a dark color scheme.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Config embedded on `<html>`, or defaults.
pub fn page_config() -> UiConfig {
    #[cfg(feature = "hydrate")]
    {
        let raw = document_root().and_then(|el| el.get_attribute(crate::config::CONFIG_ATTRIBUTE));
        UiConfig::from_attribute(raw.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        UiConfig::default()
    }
}

/// Theme currently shown by the page.
pub fn current_theme() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        page_theme_manager().map_or(Theme::Light, |manager| manager.applied())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

/// Flip the page theme, persisting the new preference.
///
/// Native builds have no page to update and simply return the flipped value.
pub fn toggle_theme(current: Theme) -> Theme {
    #[cfg(feature = "hydrate")]
    {
        match page_theme_manager() {
            Some(manager) => manager.toggle(),
            None => current.toggled(),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        current.toggled()
    }
}

#[cfg(feature = "hydrate")]
pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

#[cfg(feature = "hydrate")]
pub fn document_root() -> Option<web_sys::Element> {
    document().and_then(|doc| doc.document_element())
}

#[cfg(feature = "hydrate")]
pub type BrowserThemeManager =
    crate::theme::ThemePreferenceManager<super::storage::BrowserStore, super::dom::DocumentRoot>;

/// Manager over `localStorage` and `<html>` for `config`.
#[cfg(feature = "hydrate")]
pub fn theme_manager_for(config: &UiConfig) -> Option<BrowserThemeManager> {
    let root = super::dom::DocumentRoot::new(document_root()?, &config.dark_class);
    Some(crate::theme::ThemePreferenceManager::new(
        super::storage::BrowserStore::local(),
        root,
        config,
    ))
}

/// Manager for the current page config.
#[cfg(feature = "hydrate")]
pub fn page_theme_manager() -> Option<BrowserThemeManager> {
    theme_manager_for(&page_config())
}

/// The configured theme toggle, if this page has one.
#[cfg(feature = "hydrate")]
pub fn theme_toggle(config: &UiConfig) -> Option<super::dom::BrowserControl> {
    let element = document()?.get_element_by_id(&config.toggle_id)?;
    super::dom::BrowserControl::from_element(element, config.toggle_kind)
}

/// Every element in `document` matching `selector`.
#[cfg(feature = "hydrate")]
pub fn query_all(document: &web_sys::Document, selector: &str) -> Vec<web_sys::Element> {
    use wasm_bindgen::JsCast;

    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("invalid selector {selector:?}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
#[cfg(feature = "hydrate")]
pub fn listen(target: &web_sys::EventTarget, event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("failed to listen for {event}: {e:?}");
    }
    closure.forget();
}
