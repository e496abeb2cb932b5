/// Paths where the wedding promo popup never shows.
pub const DEFAULT_EXCLUDED_PATHS: &[&str] = &["/commercial"];

/// Once-per-session gate for the promotional popup.
#[derive(Clone, Debug)]
pub struct PopupGate {
    /// Campaign switch from the content store.
    pub active: bool,
    /// Paths where the popup never shows.
    pub excluded_paths: Vec<String>,
    seen: bool,
}

impl PopupGate {
    /// Gate with the default excluded paths and no session flag.
    pub fn new(active: bool) -> Self {
        Self {
            active,
            excluded_paths: DEFAULT_EXCLUDED_PATHS.iter().map(|p| p.to_string()).collect(),
            seen: false,
        }
    }

    /// Restore the session flag from host storage.
    pub fn with_seen(mut self, seen: bool) -> Self {
        self.seen = seen;
        self
    }

    /// Return `true` when the popup should open on `path`.
    pub fn should_show(&self, path: &str) -> bool {
        self.active && !self.seen && !self.excluded_paths.iter().any(|p| p == path)
    }

    /// Close the popup. Returns the session flag to persist.
    pub fn dismiss(&mut self) -> bool {
        self.seen = true;
        self.seen
    }

    /// Session flag.
    pub fn seen(&self) -> bool {
        self.seen
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/popup.rs"]
mod tests;
