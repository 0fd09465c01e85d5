//! Form field values and the registration draft sent to the server.

use serde::{Deserialize, Serialize};

/// How the attendee intends to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMode {
    Online,
    Offline,
}

impl Default for PaymentMode {
    fn default() -> Self {
        Self::Offline
    }
}

impl std::fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Online => write!(f, "online"),
            Self::Offline => write!(f, "offline"),
        }
    }
}

impl std::str::FromStr for PaymentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "online" => Ok(Self::Online),
            "offline" => Ok(Self::Offline),
            other => Err(format!("unknown payment mode: {other}")),
        }
    }
}

/// Payment state attached to a draft before it is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    Pending,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Paid => write!(f, "paid"),
            Self::Pending => write!(f, "pending"),
        }
    }
}

/// Raw field values read from the page at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub whatsapp: String,
    pub college: String,
    pub year: String,
    /// Value of the selected department option.
    pub department: String,
    /// Visible text of the selected department option, if known.
    pub department_label: Option<String>,
    pub payment_mode: PaymentMode,
    pub project_link: String,
}

impl FormFields {
    /// Set a field by its form name. Returns `false` for unknown names.
    pub fn set(&mut self, field: &str, value: &str) -> bool {
        let value = value.to_string();
        match field {
            "name" => self.name = value,
            "email" => self.email = value,
            "phone" => self.phone = value,
            "whatsapp" => self.whatsapp = value,
            "college" => self.college = value,
            "year" => self.year = value,
            "department" => self.department = value,
            "department-label" => self.department_label = Some(value),
            "project-link" => self.project_link = value,
            _ => return false,
        }
        true
    }
}

/// Registration payload as sent to the endpoint.
///
/// Immutable once built, apart from the payment fields appended by
/// [`RegistrationDraft::with_payment`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub whatsapp: String,
    pub college: String,
    pub year: String,
    pub department: String,
    pub events: Vec<String>,
    pub payment_mode: PaymentMode,
    pub project_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    /// Department label for the ticket; never sent.
    #[serde(skip)]
    pub department_label: Option<String>,
}

impl RegistrationDraft {
    /// Assemble a draft from the form fields and the selected events.
    pub fn from_form(fields: &FormFields, events: &[String]) -> Self {
        Self {
            name: fields.name.clone(),
            email: fields.email.clone(),
            phone: fields.phone.clone(),
            whatsapp: fields.whatsapp.clone(),
            college: fields.college.clone(),
            year: fields.year.clone(),
            department: fields.department.clone(),
            events: events.to_vec(),
            payment_mode: fields.payment_mode,
            project_link: fields.project_link.clone(),
            payment_id: None,
            payment_status: None,
            department_label: fields.department_label.clone(),
        }
    }

    /// Attach the payment outcome: paid when a payment id exists, pending otherwise.
    pub fn with_payment(mut self, payment_id: Option<String>) -> Self {
        self.payment_status = Some(match payment_id {
            Some(_) => PaymentStatus::Paid,
            None => PaymentStatus::Pending,
        });
        self.payment_id = payment_id;
        self
    }

    /// Department text for the ticket, preferring the option label.
    pub fn department_display(&self) -> &str {
        self.department_label
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or(&self.department)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> FormFields {
        FormFields {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            phone: "9000000001".into(),
            whatsapp: "9000000002".into(),
            college: "GEC".into(),
            year: "3".into(),
            department: "cse".into(),
            department_label: Some("Computer Science".into()),
            payment_mode: PaymentMode::Offline,
            project_link: String::new(),
        }
    }

    #[test]
    fn payment_mode_parses_case_insensitively() {
        assert_eq!("Online".parse::<PaymentMode>().unwrap(), PaymentMode::Online);
        assert_eq!(" offline ".parse::<PaymentMode>().unwrap(), PaymentMode::Offline);
        assert!("card".parse::<PaymentMode>().is_err());
    }

    #[test]
    fn draft_serializes_wire_keys() {
        let events = vec!["Hackathon".to_string(), "Quiz".to_string()];
        let draft = RegistrationDraft::from_form(&fields(), &events).with_payment(None);
        let json = serde_json::to_value(&draft).unwrap();

        assert_eq!(json["name"], "Asha");
        assert_eq!(json["whatsapp"], "9000000002");
        assert_eq!(json["events"], serde_json::json!(["Hackathon", "Quiz"]));
        assert_eq!(json["payment_mode"], "offline");
        assert_eq!(json["payment_status"], "pending");
        assert_eq!(json["project_link"], "");
        assert!(json.get("payment_id").is_none());
        assert!(json.get("department_label").is_none());
    }

    #[test]
    fn payment_id_marks_paid() {
        let draft = RegistrationDraft::from_form(&fields(), &[]).with_payment(Some("pay_1".into()));
        assert_eq!(draft.payment_status, Some(PaymentStatus::Paid));
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["payment_id"], "pay_1");
        assert_eq!(json["payment_status"], "paid");
    }

    #[test]
    fn department_display_falls_back_to_value() {
        let mut f = fields();
        let draft = RegistrationDraft::from_form(&f, &[]);
        assert_eq!(draft.department_display(), "Computer Science");

        f.department_label = None;
        let draft = RegistrationDraft::from_form(&f, &[]);
        assert_eq!(draft.department_display(), "cse");
    }

    #[test]
    fn set_by_field_name() {
        let mut f = FormFields::default();
        assert!(f.set("project-link", "https://git.example/p"));
        assert!(f.set("department-label", "Mechanical"));
        assert!(!f.set("shoe-size", "9"));
        assert_eq!(f.project_link, "https://git.example/p");
        assert_eq!(f.department_label.as_deref(), Some("Mechanical"));
    }
}
