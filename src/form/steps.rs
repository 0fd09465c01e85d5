//! Step navigation: a bounded index over the form's sections.

use crate::error::ConfigError;

/// Render state of one section and its step indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepState {
    pub index: usize,
    /// Section panel shown; exactly one per render.
    pub visible: bool,
    /// Indicator carries the `active` class.
    pub active: bool,
    /// Indicator carries the `completed` class.
    pub completed: bool,
}

/// Tracks which section of the form is showing.
///
/// Moves linearly: `advance` steps forward until the last section,
/// `retreat` steps back until the first. Neither wraps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepNavigator {
    current: usize,
    sections: usize,
}

impl StepNavigator {
    /// Create a navigator positioned at the first of `sections` sections.
    pub fn new(sections: usize) -> Result<Self, ConfigError> {
        if sections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "sections".into(),
                message: "form needs at least one section".into(),
            });
        }
        Ok(Self {
            current: 0,
            sections,
        })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn sections(&self) -> usize {
        self.sections
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.sections
    }

    /// Move to the next section. Returns `false` (and stays put) on the last one.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Move to the previous section. Returns `false` (and stays put) on the first one.
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Per-section render state for the current position.
    pub fn layout(&self) -> Vec<StepState> {
        (0..self.sections)
            .map(|index| StepState {
                index,
                visible: index == self.current,
                active: index == self.current,
                completed: index < self.current,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_single_active(nav: &StepNavigator) {
        let layout = nav.layout();
        assert_eq!(layout.len(), nav.sections());
        assert_eq!(layout.iter().filter(|s| s.visible).count(), 1);
        assert_eq!(layout.iter().filter(|s| s.active).count(), 1);
        for state in &layout {
            assert_eq!(state.completed, state.index < nav.current());
        }
    }

    #[test]
    fn starts_at_first_section() {
        let nav = StepNavigator::new(3).unwrap();
        assert_eq!(nav.current(), 0);
        assert!(nav.is_first());
        assert!(!nav.is_last());
        assert_single_active(&nav);
    }

    #[test]
    fn zero_sections_rejected() {
        assert!(StepNavigator::new(0).is_err());
    }

    #[test]
    fn advance_stops_at_last() {
        let mut nav = StepNavigator::new(3).unwrap();
        assert!(nav.advance());
        assert!(nav.advance());
        assert_eq!(nav.current(), 2);
        assert!(!nav.advance(), "advance on last section should be a no-op");
        assert_eq!(nav.current(), 2);
        assert_single_active(&nav);
    }

    #[test]
    fn retreat_stops_at_first() {
        let mut nav = StepNavigator::new(3).unwrap();
        assert!(!nav.retreat(), "retreat on first section should be a no-op");
        assert_eq!(nav.current(), 0);
        nav.advance();
        assert!(nav.retreat());
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn single_section_is_both_ends() {
        let mut nav = StepNavigator::new(1).unwrap();
        assert!(nav.is_first() && nav.is_last());
        assert!(!nav.advance());
        assert!(!nav.retreat());
        assert_single_active(&nav);
    }

    #[test]
    fn invariant_holds_over_mixed_moves() {
        let mut nav = StepNavigator::new(4).unwrap();
        // f = forward, b = back
        for mv in "ffbffffbbbbbf".chars() {
            match mv {
                'f' => {
                    nav.advance();
                }
                _ => {
                    nav.retreat();
                }
            }
            assert!(nav.current() < nav.sections());
            assert_single_active(&nav);
        }
        assert_eq!(nav.current(), 1);
    }

    #[test]
    fn prior_sections_marked_completed() {
        let mut nav = StepNavigator::new(3).unwrap();
        nav.advance();
        nav.advance();
        let layout = nav.layout();
        assert!(layout[0].completed && layout[1].completed);
        assert!(!layout[2].completed);
        assert!(layout[2].active);
    }
}
