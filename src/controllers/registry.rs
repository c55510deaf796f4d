//! Live connections of the current page.

/// Owns whatever a connected controller needs to stay alive
pub struct Registry<T> {
    live: Vec<T>,
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self { live: Vec::new() }
    }

    pub fn add(&mut self, item: T) {
        self.live.push(item);
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Hand every live entry to the caller, leaving the registry empty
    pub fn take(&mut self) -> Vec<T> {
        std::mem::take(&mut self.live)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_take_empties_registry() {
        let mut registry = Registry::new();
        registry.add("votable");
        registry.add("board");
        assert_eq!(registry.len(), 2);

        assert_eq!(registry.take(), vec!["votable", "board"]);
        assert_eq!(registry.len(), 0);
        assert!(registry.take().is_empty());
    }

    #[test]
    fn test_taken_entries_are_released() {
        let widget_state = Rc::new(());
        let mut registry = Registry::new();
        for _ in 0..3 {
            registry.add(widget_state.clone());
        }
        assert_eq!(Rc::strong_count(&widget_state), 4);

        drop(registry.take());
        assert_eq!(Rc::strong_count(&widget_state), 1);
    }

    #[test]
    fn test_pages_do_not_accumulate() {
        let page_a = Rc::new(());
        let page_b = Rc::new(());
        let mut registry = Registry::new();

        registry.add(page_a.clone());
        registry.add(page_a.clone());
        drop(registry.take());

        registry.add(page_b.clone());
        assert_eq!(registry.len(), 1);
        assert_eq!(Rc::strong_count(&page_a), 1);
        assert_eq!(Rc::strong_count(&page_b), 2);
    }
}
