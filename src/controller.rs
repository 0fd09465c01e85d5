//! Drives the registration form. Owns the form's state and turns user actions into
//! page effects.

use std::sync::Arc;

use crate::client::{RegistrationApi, RegistrationResult};
use crate::clipboard::Clipboard;
use crate::config::FlowConfig;
use crate::error::{ClipboardError, Result};
use crate::form::{
    EventSelection, FormFields, PaymentMode, RegistrationDraft, StepNavigator, ToggleOutcome,
};
use crate::page::PageEffect;
use crate::ticket::{PaymentBadge, TICKET_CODE_SIZE, TicketView};

pub const SUCCESS_MESSAGE: &str = "Registration Successful! Check your email.";
pub const COPIED_MESSAGE: &str = "Registration ID copied!";
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy registration ID.";

/// Drives one registration form for the lifetime of a page.
pub struct FormFlowController {
    config: FlowConfig,
    steps: StepNavigator,
    selection: EventSelection,
    api: Arc<dyn RegistrationApi>,
    /// Draft of the most recent submit, kept for the payment hand-off.
    last_draft: Option<RegistrationDraft>,
    ticket: Option<TicketView>,
}

impl FormFlowController {
    pub fn new(config: FlowConfig, api: Arc<dyn RegistrationApi>) -> Result<Self> {
        config.validate()?;
        let steps = StepNavigator::new(config.sections)?;
        let selection = EventSelection::new(config.max_events);
        Ok(Self {
            config,
            steps,
            selection,
            api,
            last_draft: None,
            ticket: None,
        })
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    pub fn current_step(&self) -> usize {
        self.steps.current()
    }

    pub fn selected_events(&self) -> &[String] {
        self.selection.events()
    }

    pub fn last_draft(&self) -> Option<&RegistrationDraft> {
        self.last_draft.as_ref()
    }

    /// Ticket shown after a successful registration.
    pub fn ticket(&self) -> Option<&TicketView> {
        self.ticket.as_ref()
    }

    /// Whether a registration succeeded. The form is gone from then on and
    /// every form action is ignored.
    pub fn is_complete(&self) -> bool {
        self.ticket.is_some()
    }

    /// Effects for the first paint: first section only.
    pub fn render_initial(&self) -> Vec<PageEffect> {
        self.render_steps()
    }

    /// Next section. Empty when already on the last one.
    pub fn advance(&mut self) -> Vec<PageEffect> {
        if self.is_complete() || !self.steps.advance() {
            return Vec::new();
        }
        tracing::debug!(step = self.steps.current(), "Advanced form step");
        self.render_steps()
    }

    /// Previous section. Empty when already on the first one.
    pub fn retreat(&mut self) -> Vec<PageEffect> {
        if self.is_complete() || !self.steps.retreat() {
            return Vec::new();
        }
        tracing::debug!(step = self.steps.current(), "Retreated form step");
        self.render_steps()
    }

    fn render_steps(&self) -> Vec<PageEffect> {
        let layout = self.steps.layout();
        let mut effects = Vec::with_capacity(layout.len() * 2);
        for state in &layout {
            effects.push(PageEffect::SetSectionVisible {
                index: state.index,
                visible: state.visible,
            });
        }
        for state in &layout {
            effects.push(PageEffect::SetStepClasses {
                index: state.index,
                active: state.active,
                completed: state.completed,
            });
        }
        effects
    }

    /// Handle an event checkbox change. Reverts the box when over the cap.
    pub fn toggle_event(&mut self, event: &str, checked: bool) -> Vec<PageEffect> {
        if self.is_complete() {
            return Vec::new();
        }
        match self.selection.toggle(event, checked) {
            ToggleOutcome::Rejected { cap } => {
                tracing::debug!(event, cap, "Event selection over cap, reverting");
                vec![
                    PageEffect::SetEventChecked {
                        event: event.to_string(),
                        checked: false,
                    },
                    PageEffect::Alert(format!("You can only select up to {cap} events.")),
                ]
            }
            ToggleOutcome::Checked | ToggleOutcome::Unchecked | ToggleOutcome::Unchanged => {
                Vec::new()
            }
        }
    }

    /// Handle the submit button.
    ///
    /// Online payment leaves the page for the payment link without
    /// contacting the registration endpoint. Offline payment registers
    /// straight away with a pending payment.
    pub async fn submit(&mut self, fields: &FormFields) -> Vec<PageEffect> {
        if self.is_complete() {
            tracing::warn!("Submit ignored, registration already complete");
            return Vec::new();
        }
        let draft = RegistrationDraft::from_form(fields, self.selection.events());

        match draft.payment_mode {
            PaymentMode::Online => {
                tracing::info!(url = %self.config.payment_url, "Redirecting to online payment");
                self.last_draft = Some(draft);
                vec![PageEffect::Redirect(self.config.payment_url.clone())]
            }
            PaymentMode::Offline => self.complete_registration(draft, None).await,
        }
    }

    /// Send a draft to the registration endpoint and render the outcome.
    ///
    /// A `payment_id` marks the registration as paid. Ignored once a
    /// registration has succeeded.
    pub async fn complete_registration(
        &mut self,
        draft: RegistrationDraft,
        payment_id: Option<String>,
    ) -> Vec<PageEffect> {
        if self.is_complete() {
            tracing::warn!("Registration already complete, not resubmitting");
            return Vec::new();
        }
        let draft = draft.with_payment(payment_id);
        tracing::info!(
            events = draft.events.len(),
            payment_mode = %draft.payment_mode,
            "Submitting registration"
        );
        self.last_draft = Some(draft.clone());

        match self.api.register(&draft).await {
            Ok(result) => {
                tracing::info!(ticket_id = %result.ticket_id, "Registration confirmed");
                self.confirmation_effects(&result, &draft)
            }
            Err(e) => {
                tracing::error!(error = %e, "Registration failed");
                vec![PageEffect::Alert(e.user_message())]
            }
        }
    }

    fn confirmation_effects(
        &mut self,
        result: &RegistrationResult,
        draft: &RegistrationDraft,
    ) -> Vec<PageEffect> {
        let view = TicketView::new(result, draft);
        let mut effects = vec![
            PageEffect::HideForm,
            PageEffect::ShowConfirmation,
            PageEffect::RenderCode {
                text: result.ticket_id.clone(),
                size: TICKET_CODE_SIZE,
            },
        ];
        if view.badge == PaymentBadge::Paid {
            effects.push(PageEffect::HideOfflineMessage);
        }
        effects.push(PageEffect::FillTicket(view.clone()));
        effects.push(PageEffect::Alert(SUCCESS_MESSAGE.to_string()));
        self.ticket = Some(view);
        effects
    }

    /// Copy the ticket id to the clipboard. No retry on failure.
    pub fn copy_ticket_id(&self, clipboard: &mut dyn Clipboard) -> Vec<PageEffect> {
        let outcome = match &self.ticket {
            Some(ticket) => clipboard.write_text(&ticket.ticket_id),
            None => Err(ClipboardError::NothingToCopy),
        };
        match outcome {
            Ok(()) => vec![PageEffect::Alert(COPIED_MESSAGE.to_string())],
            Err(e) => {
                tracing::error!(error = %e, "Failed to copy ID");
                vec![PageEffect::Alert(COPY_FAILED_MESSAGE.to_string())]
            }
        }
    }
}
