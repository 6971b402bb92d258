use std::cell::RefCell;

use gathering::auth::Browser;

use crate::constant::TEST_ORIGIN;

/// [`Browser`] that records navigations and alerts instead of performing them.
pub struct RecordingBrowser {
    origin: String,
    navigations: RefCell<Vec<String>>,
    alerts: RefCell<Vec<String>>,
}

impl Default for RecordingBrowser {
    fn default() -> Self {
        Self::new(TEST_ORIGIN)
    }
}

impl RecordingBrowser {
    pub fn new(origin: &str) -> Self {
        Self {
            origin: origin.to_string(),
            navigations: RefCell::new(Vec::new()),
            alerts: RefCell::new(Vec::new()),
        }
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }

    pub fn last_navigation(&self) -> Option<String> {
        self.navigations.borrow().last().cloned()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Browser for RecordingBrowser {
    fn origin(&self) -> String {
        self.origin.clone()
    }

    fn navigate(&self, url: &str) {
        self.navigations.borrow_mut().push(url.to_string());
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}
