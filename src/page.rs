//! Page effects and the page they are applied to.
//!
//! Handlers never touch the page directly. They return [`PageEffect`]s and a
//! [`Page`] implementation carries them out, so the flow can be exercised
//! against [`PageModel`] without a browser.

use std::collections::BTreeSet;

use crate::ticket::TicketView;

/// A single mutation of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEffect {
    /// Show or hide a form section.
    SetSectionVisible { index: usize, visible: bool },
    /// Set the classes of a step indicator.
    SetStepClasses {
        index: usize,
        active: bool,
        completed: bool,
    },
    /// Force an event checkbox into a state.
    SetEventChecked { event: String, checked: bool },
    /// Blocking user notification.
    Alert(String),
    /// Navigate the browser away.
    Redirect(String),
    HideForm,
    ShowConfirmation,
    FillTicket(TicketView),
    /// Draw a scannable code into the ticket's code container.
    RenderCode { text: String, size: u32 },
    HideOfflineMessage,
}

/// Anything that can carry out page effects.
pub trait Page {
    fn apply(&mut self, effect: &PageEffect);

    fn apply_all(&mut self, effects: &[PageEffect]) {
        for effect in effects {
            self.apply(effect);
        }
    }
}

/// In-memory page: tracks everything the effects can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageModel {
    pub sections_visible: Vec<bool>,
    /// `(active, completed)` per step indicator.
    pub step_classes: Vec<(bool, bool)>,
    pub checked_events: BTreeSet<String>,
    pub alerts: Vec<String>,
    pub redirected_to: Option<String>,
    pub form_visible: bool,
    pub confirmation_visible: bool,
    pub offline_message_visible: bool,
    pub ticket: Option<TicketView>,
    pub code: Option<(String, u32)>,
}

impl PageModel {
    /// Fresh page with `sections` sections, all visible until the first render.
    pub fn new(sections: usize) -> Self {
        Self {
            sections_visible: vec![true; sections],
            step_classes: vec![(false, false); sections],
            checked_events: BTreeSet::new(),
            alerts: Vec::new(),
            redirected_to: None,
            form_visible: true,
            confirmation_visible: false,
            offline_message_visible: true,
            ticket: None,
            code: None,
        }
    }

    /// The user clicks a checkbox; the browser flips it before any handler runs.
    pub fn user_sets_checkbox(&mut self, event: &str, checked: bool) {
        if checked {
            self.checked_events.insert(event.to_string());
        } else {
            self.checked_events.remove(event);
        }
    }

    pub fn visible_sections(&self) -> Vec<usize> {
        indices(self.sections_visible.iter().copied())
    }

    pub fn active_steps(&self) -> Vec<usize> {
        indices(self.step_classes.iter().map(|(active, _)| *active))
    }

    pub fn completed_steps(&self) -> Vec<usize> {
        indices(self.step_classes.iter().map(|(_, completed)| *completed))
    }

    pub fn last_alert(&self) -> Option<&str> {
        self.alerts.last().map(String::as_str)
    }
}

fn indices(flags: impl Iterator<Item = bool>) -> Vec<usize> {
    flags
        .enumerate()
        .filter_map(|(i, on)| on.then_some(i))
        .collect()
}

impl Page for PageModel {
    fn apply(&mut self, effect: &PageEffect) {
        match effect {
            PageEffect::SetSectionVisible { index, visible } => {
                if let Some(slot) = self.sections_visible.get_mut(*index) {
                    *slot = *visible;
                }
            }
            PageEffect::SetStepClasses {
                index,
                active,
                completed,
            } => {
                if let Some(slot) = self.step_classes.get_mut(*index) {
                    *slot = (*active, *completed);
                }
            }
            PageEffect::SetEventChecked { event, checked } => {
                self.user_sets_checkbox(event, *checked);
            }
            PageEffect::Alert(message) => self.alerts.push(message.clone()),
            PageEffect::Redirect(url) => self.redirected_to = Some(url.clone()),
            PageEffect::HideForm => self.form_visible = false,
            PageEffect::ShowConfirmation => self.confirmation_visible = true,
            PageEffect::FillTicket(view) => self.ticket = Some(view.clone()),
            PageEffect::RenderCode { text, size } => self.code = Some((text.clone(), *size)),
            PageEffect::HideOfflineMessage => self.offline_message_visible = false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_page_shows_form_only() {
        let page = PageModel::new(3);
        assert!(page.form_visible);
        assert!(!page.confirmation_visible);
        assert!(page.active_steps().is_empty());
        assert_eq!(page.visible_sections(), vec![0, 1, 2]);
    }

    #[test]
    fn out_of_range_section_is_ignored() {
        let mut page = PageModel::new(2);
        page.apply(&PageEffect::SetSectionVisible {
            index: 5,
            visible: false,
        });
        assert_eq!(page.visible_sections(), vec![0, 1]);
    }

    #[test]
    fn checkbox_effect_overrides_user_state() {
        let mut page = PageModel::new(1);
        page.user_sets_checkbox("Quiz", true);
        page.apply(&PageEffect::SetEventChecked {
            event: "Quiz".into(),
            checked: false,
        });
        assert!(page.checked_events.is_empty());
    }

    #[test]
    fn apply_all_in_order() {
        let mut page = PageModel::new(1);
        page.apply_all(&[
            PageEffect::Alert("first".into()),
            PageEffect::Alert("second".into()),
            PageEffect::HideForm,
        ]);
        assert_eq!(page.alerts, vec!["first", "second"]);
        assert_eq!(page.last_alert(), Some("second"));
        assert!(!page.form_visible);
    }
}
