//! Flash messages that remove themselves after a delay or on close.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

use std::time::Duration;

use crate::config::UiConfig;

pub const FLASH_SELECTOR: &str = "[data-flash]";
pub const CLOSE_SELECTOR: &str = "[data-flash-close]";

/// How long messages stay up, or `None` when auto-dismiss is off.
pub fn auto_dismiss_after(config: &UiConfig) -> Option<Duration> {
    (config.flash_dismiss_ms > 0).then(|| Duration::from_millis(u64::from(config.flash_dismiss_ms)))
}

/// Tracks which messages are already gone so timer and close button never
/// both act on the same one.
#[derive(Clone, Debug, Default)]
pub struct FlashTracker {
    dismissed: Vec<bool>,
}

impl FlashTracker {
    pub fn new(count: usize) -> Self {
        Self {
            dismissed: vec![false; count],
        }
    }

    /// Mark message `index` dismissed; `true` only the first time.
    pub fn dismiss(&mut self, index: usize) -> bool {
        match self.dismissed.get_mut(index) {
            Some(done) if !*done => {
                *done = true;
                true
            }
            _ => false,
        }
    }

    pub fn remaining(&self) -> usize {
        self.dismissed.iter().filter(|done| !**done).count()
    }
}

#[cfg(feature = "hydrate")]
pub fn bind(document: &web_sys::Document, config: &UiConfig) {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;

    use crate::util::browser::{listen, query_all};

    let messages = query_all(document, FLASH_SELECTOR);
    if messages.is_empty() {
        return;
    }
    let tracker = Rc::new(RefCell::new(FlashTracker::new(messages.len())));
    let delay = auto_dismiss_after(config);

    for (index, message) in messages.into_iter().enumerate() {
        let dismiss = {
            let tracker = Rc::clone(&tracker);
            let message = message.clone();
            Rc::new(move || {
                if tracker.borrow_mut().dismiss(index) {
                    message.remove();
                }
            })
        };

        if let Ok(Some(close)) = message.query_selector(CLOSE_SELECTOR) {
            let dismiss = Rc::clone(&dismiss);
            listen(close.as_ref(), "click", move |_| dismiss());
        }

        if let Some(delay) = delay {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            Timeout::new(millis, move || dismiss()).forget();
        }
    }
}
