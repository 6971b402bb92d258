use std::cell::RefCell;

/// Storage for the raw session token.
///
/// The browser implementation is the `Authorization` cookie; [`MemorySessionStore`] stands in
/// for it anywhere there is no cookie jar.
pub trait SessionStore {
    /// Raw token, without the `Bearer ` prefix. Empty values count as absent.
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str, max_age: Option<u64>);
    fn clear(&self);
}

/// In-memory [`SessionStore`].
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RefCell<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<String> {
        self.token
            .borrow()
            .as_ref()
            .filter(|token| !token.is_empty())
            .cloned()
    }

    fn set(&self, token: &str, _max_age: Option<u64>) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}
