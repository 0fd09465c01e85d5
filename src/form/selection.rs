//! Event checkbox selection with a hard cap.

/// What a checkbox toggle did to the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Event is now selected.
    Checked,
    /// Event is no longer selected.
    Unchecked,
    /// Checking would exceed the cap; the box must be reverted to unchecked.
    Rejected { cap: usize },
    /// The box was already in the requested state.
    Unchanged,
}

/// Events the user has ticked, in the order they were ticked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSelection {
    selected: Vec<String>,
    cap: usize,
}

impl EventSelection {
    pub fn new(cap: usize) -> Self {
        Self {
            selected: Vec::new(),
            cap,
        }
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, event: &str) -> bool {
        self.selected.iter().any(|e| e == event)
    }

    pub fn events(&self) -> &[String] {
        &self.selected
    }

    /// Apply a checkbox change. Never lets the selection grow past the cap.
    pub fn toggle(&mut self, event: &str, checked: bool) -> ToggleOutcome {
        match (checked, self.contains(event)) {
            (true, true) | (false, false) => ToggleOutcome::Unchanged,
            (false, true) => {
                self.selected.retain(|e| e != event);
                ToggleOutcome::Unchecked
            }
            (true, false) => {
                if self.selected.len() >= self.cap {
                    return ToggleOutcome::Rejected { cap: self.cap };
                }
                self.selected.push(event.to_string());
                ToggleOutcome::Checked
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fourth_event_rejected() {
        let mut sel = EventSelection::new(3);
        assert_eq!(sel.toggle("A", true), ToggleOutcome::Checked);
        assert_eq!(sel.toggle("B", true), ToggleOutcome::Checked);
        assert_eq!(sel.toggle("C", true), ToggleOutcome::Checked);
        assert_eq!(sel.toggle("D", true), ToggleOutcome::Rejected { cap: 3 });
        assert_eq!(sel.events(), ["A", "B", "C"]);
        assert!(!sel.contains("D"));
    }

    #[test]
    fn unchecking_frees_a_slot() {
        let mut sel = EventSelection::new(3);
        for e in ["A", "B", "C"] {
            sel.toggle(e, true);
        }
        assert_eq!(sel.toggle("B", false), ToggleOutcome::Unchecked);
        assert_eq!(sel.toggle("D", true), ToggleOutcome::Checked);
        assert_eq!(sel.events(), ["A", "C", "D"]);
    }

    #[test]
    fn repeated_state_is_unchanged() {
        let mut sel = EventSelection::new(3);
        sel.toggle("A", true);
        assert_eq!(sel.toggle("A", true), ToggleOutcome::Unchanged);
        assert_eq!(sel.toggle("Z", false), ToggleOutcome::Unchanged);
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn cap_holds_for_arbitrary_sequences() {
        let mut sel = EventSelection::new(3);
        let events = ["A", "B", "C", "D", "E"];
        // Deterministic pseudo-random walk over toggles.
        let mut seed: u32 = 7;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let event = events[(seed >> 16) as usize % events.len()];
            let checked = (seed >> 8) & 1 == 1;
            sel.toggle(event, checked);
            assert!(sel.len() <= 3, "selection grew past cap: {:?}", sel.events());
        }
    }
}
