/// How long a transient message stays visible.
pub const TOAST_DURATION_MS: u32 = 3000;

/// Transient message shown in the toast element.
///
/// Each `show` bumps a generation counter. A scheduled hide only applies if
/// no newer message was shown in the meantime, so the most recent message
/// always gets its full display time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toast {
    text: String,
    visible: bool,
    generation: u64,
}

impl Toast {
    /// Show `text` and return the generation to hand to [`Toast::hide`].
    pub fn show(&mut self, text: impl Into<String>) -> u64 {
        self.text = text.into();
        self.visible = true;
        self.generation += 1;
        self.generation
    }

    /// Hide the message if `generation` is still current. Returns whether it hid.
    pub fn hide(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_is_visible_immediately() {
        let mut toast = Toast::default();
        assert!(!toast.is_visible());
        toast.show("Login berhasil!");
        assert!(toast.is_visible());
        assert_eq!(toast.text(), "Login berhasil!");
    }

    #[test]
    fn test_hide_after_delay() {
        let mut toast = Toast::default();
        let gen = toast.show("Berhasil logout.");
        assert!(toast.hide(gen));
        assert!(!toast.is_visible());
        // text is left in place, only visibility changes
        assert_eq!(toast.text(), "Berhasil logout.");
    }

    #[test]
    fn test_stale_hide_is_ignored() {
        let mut toast = Toast::default();
        let first = toast.show("one");
        let second = toast.show("two");
        assert!(!toast.hide(first));
        assert!(toast.is_visible());
        assert_eq!(toast.text(), "two");
        assert!(toast.hide(second));
        assert!(!toast.is_visible());
    }

    #[test]
    fn test_double_hide_is_noop() {
        let mut toast = Toast::default();
        let gen = toast.show("x");
        assert!(toast.hide(gen));
        assert!(!toast.hide(gen));
    }
}
