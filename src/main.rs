use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use event_registration::clipboard::SystemClipboard;
use event_registration::config::FlowConfig;
use event_registration::controller::{COPY_FAILED_MESSAGE, FormFlowController};
use event_registration::form::FormFields;
use event_registration::ticket::TicketCode;
use event_registration::{HttpRegistrationClient, Page, PageEffect, PageModel, RegistrationApi};

const HELP: &str = "\
Commands:
  next | back                 move between form sections
  toggle <event>              tick or untick an event
  set <field> <value>         name, email, phone, whatsapp, college, year,
                              department, department-label, project-link
  pay <online|offline>        choose payment mode
  submit                      register
  copy                        copy ticket id to clipboard
  show                        print current form values
  quit";

/// Page that mirrors every effect to the terminal.
struct TerminalPage {
    model: PageModel,
}

impl Page for TerminalPage {
    fn apply(&mut self, effect: &PageEffect) {
        self.model.apply(effect);
        match effect {
            PageEffect::SetSectionVisible { index, visible: true } => {
                eprintln!("   [section {}/{}]", index + 1, self.model.sections_visible.len());
            }
            PageEffect::SetSectionVisible { .. } | PageEffect::SetStepClasses { .. } => {}
            PageEffect::SetEventChecked { event, checked } => {
                eprintln!("   {event}: {}", if *checked { "checked" } else { "unchecked" });
            }
            PageEffect::Alert(message) => eprintln!("⚠️  {message}"),
            PageEffect::Redirect(url) => eprintln!("➡️  Continue to payment: {url}"),
            PageEffect::HideForm | PageEffect::HideOfflineMessage => {}
            PageEffect::ShowConfirmation => eprintln!("\n🎟️  Registration confirmed"),
            PageEffect::FillTicket(ticket) => {
                eprintln!("   Ticket:     {}", ticket.ticket_id);
                eprintln!("   Name:       {}", ticket.name);
                eprintln!("   Email:      {}", ticket.email);
                eprintln!("   Events:     {}", ticket.events);
                eprintln!("   Department: {}", ticket.department);
                eprintln!("   Payment:    {}", ticket.badge.label());
                if ticket.email_sent == Some(false) {
                    eprintln!("   Confirmation email not sent.");
                }
                if self.model.offline_message_visible {
                    eprintln!("   Please complete your payment at the venue.");
                }
            }
            PageEffect::RenderCode { text, .. } => match TicketCode::encode(text) {
                Ok(code) => println!("{}", code.to_text()),
                Err(e) => tracing::warn!(error = %e, "Could not render ticket code"),
            },
        }
    }
}

fn print_fields(fields: &FormFields, controller: &FormFlowController) {
    eprintln!(
        "   name={} email={} phone={} whatsapp={}",
        fields.name, fields.email, fields.phone, fields.whatsapp
    );
    eprintln!(
        "   college={} year={} department={} project-link={}",
        fields.college, fields.year, fields.department, fields.project_link
    );
    eprintln!(
        "   payment={} events=[{}]",
        fields.payment_mode,
        controller.selected_events().join(", ")
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = FlowConfig::from_env();
    let client = Arc::new(HttpRegistrationClient::new(config.endpoint.clone()));
    let mut controller = FormFlowController::new(config, client.clone())?;

    let config = controller.config();
    eprintln!("📝 Event Registration v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Endpoint: {}", config.endpoint);
    eprintln!("   Sections: {}, max events: {}", config.sections, config.max_events);
    eprintln!("   Type `help` for commands.\n");

    if let Err(e) = client.health_check().await {
        tracing::warn!(error = %e, "Registration endpoint health check failed");
    }

    let mut page = TerminalPage {
        model: PageModel::new(controller.config().sections),
    };
    page.apply_all(&controller.render_initial());

    let mut fields = FormFields::default();
    let mut clipboard: Option<SystemClipboard> = None;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    eprint!("> ");
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        let effects = match command {
            "" => Vec::new(),
            "next" | "back" | "toggle" | "set" | "pay" | "submit" if controller.is_complete() => {
                eprintln!("Registration already complete.");
                Vec::new()
            }
            "next" => controller.advance(),
            "back" => controller.retreat(),
            "toggle" if !rest.is_empty() => {
                let checked = !page.model.checked_events.contains(rest);
                page.model.user_sets_checkbox(rest, checked);
                controller.toggle_event(rest, checked)
            }
            "set" => {
                match rest.split_once(' ') {
                    Some((field, value)) => {
                        if !fields.set(field, value.trim()) {
                            eprintln!("Unknown field: {field}");
                        }
                    }
                    None => eprintln!("usage: set <field> <value>"),
                }
                Vec::new()
            }
            "pay" => {
                match rest.parse() {
                    Ok(mode) => fields.payment_mode = mode,
                    Err(e) => eprintln!("{e}"),
                }
                Vec::new()
            }
            "submit" => controller.submit(&fields).await,
            "copy" => {
                if clipboard.is_none() {
                    match SystemClipboard::new() {
                        Ok(system) => clipboard = Some(system),
                        Err(e) => tracing::error!(error = %e, "Clipboard unavailable"),
                    }
                }
                match clipboard.as_mut() {
                    Some(system) => controller.copy_ticket_id(system),
                    None => vec![PageEffect::Alert(COPY_FAILED_MESSAGE.to_string())],
                }
            }
            "show" => {
                print_fields(&fields, &controller);
                Vec::new()
            }
            "help" => {
                eprintln!("{HELP}");
                Vec::new()
            }
            "quit" | "exit" => break,
            other => {
                eprintln!("Unknown command: {other} (try `help`)");
                Vec::new()
            }
        };
        page.apply_all(&effects);

        // The browser would leave the page here.
        if page.model.redirected_to.is_some() {
            break;
        }
        eprint!("> ");
    }

    Ok(())
}
