//! Single active item within a list (experience timeline cards).

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverRegistry<Id> {
    active: Option<Id>,
}

impl<Id> Default for HoverRegistry<Id> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<Id: PartialEq + Clone> HoverRegistry<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entering another item replaces whatever was active.
    pub fn set_active(&mut self, id: Id) {
        self.active = Some(id);
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<&Id> {
        self.active.as_ref()
    }

    pub fn is_active(&self, id: &Id) -> bool {
        self.active.as_ref() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_item_replaces_first() {
        let mut hover = HoverRegistry::new();
        hover.set_active("a");
        hover.set_active("b");
        assert_eq!(hover.active(), Some(&"b"));
        assert!(!hover.is_active(&"a"));

        hover.clear();
        assert_eq!(hover.active(), None);
    }

    #[test]
    fn clear_is_harmless_when_empty() {
        let mut hover: HoverRegistry<u32> = HoverRegistry::new();
        hover.clear();
        hover.clear();
        assert!(hover.active().is_none());
    }
}
