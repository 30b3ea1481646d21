/// Tracks the single item under the pointer.
///
/// Enter and leave events for neighbouring items can arrive out of order, so
/// a leave only clears the state when it comes from the item currently
/// hovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverState<K> {
    hovered: Option<K>,
}

impl<K> Default for HoverState<K> {
    fn default() -> Self {
        Self { hovered: None }
    }
}

impl<K: PartialEq> HoverState<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self, key: K) {
        self.hovered = Some(key);
    }

    pub fn leave(&mut self, key: &K) -> bool {
        if self.hovered.as_ref() == Some(key) {
            self.hovered = None;
            true
        } else {
            false
        }
    }

    pub fn hovered(&self) -> Option<&K> {
        self.hovered.as_ref()
    }

    pub fn is_hovered(&self, key: &K) -> bool {
        self.hovered.as_ref() == Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_and_leave() {
        let mut hover = HoverState::new();
        assert_eq!(hover.hovered(), None);
        hover.enter(3u32);
        assert!(hover.is_hovered(&3));
        assert!(hover.leave(&3));
        assert_eq!(hover.hovered(), None);
    }

    #[test]
    fn test_stale_leave_is_ignored() {
        let mut hover = HoverState::new();
        hover.enter("Java".to_string());
        // pointer moved to the next card before the old leave arrived
        hover.enter("Python".to_string());
        assert!(!hover.leave(&"Java".to_string()));
        assert!(hover.is_hovered(&"Python".to_string()));
    }
}
