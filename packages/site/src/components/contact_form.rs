//! The contact form and the field state it echoes.
//!
//! Form state lives for one request. Each change replaces a single field,
//! and submitting only logs what was captured.

use std::str::FromStr;

use maud::{html, Markup};
use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator};

/// The closed set of form fields, named as they are posted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Zip,
    Message,
}

impl ContactField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name*",
            Self::Email => "Email Address",
            Self::Phone => "Phone*",
            Self::Zip => "Zip Code",
            Self::Message => "Type your message...",
        }
    }

    pub fn required(self) -> bool {
        matches!(self, Self::Name | Self::Phone)
    }

    fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "tel",
            Self::Name | Self::Zip | Self::Message => "text",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub zip: String,
    pub message: String,
}

impl ContactFormState {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Zip => &self.zip,
            ContactField::Message => &self.message,
        }
    }

    /// Copy of this state with exactly `field` replaced.
    #[must_use]
    pub fn with_field(&self, field: ContactField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let slot = match field {
            ContactField::Name => &mut next.name,
            ContactField::Email => &mut next.email,
            ContactField::Phone => &mut next.phone,
            ContactField::Zip => &mut next.zip,
            ContactField::Message => &mut next.message,
        };
        *slot = value.into();
        next
    }

    /// Fold posted `(name, value)` pairs into a fresh state, in order.
    ///
    /// Names outside [`ContactField`] are skipped.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        pairs
            .into_iter()
            .fold(Self::default(), |state, (name, value)| {
                match ContactField::from_str(name.as_ref()) {
                    Ok(field) => state.with_field(field, value),
                    Err(_) => {
                        tracing::debug!(field = name.as_ref(), "ignoring unknown form field");
                        state
                    }
                }
            })
    }

    /// Required fields left blank, in form order.
    pub fn missing_required(&self) -> Vec<ContactField> {
        ContactField::iter()
            .filter(|field| field.required() && self.get(*field).trim().is_empty())
            .collect()
    }

    /// Log the captured values. Nothing is sent or stored.
    pub fn submit(&self) {
        tracing::info!(
            name = %self.name,
            email = %self.email,
            phone = %self.phone,
            zip = %self.zip,
            message = %self.message,
            "contact form submitted"
        );
    }
}

/// The form, echoing `state`, followed by the customer quote block.
///
/// `page` is posted back so the submission can return to the page it came
/// from.
pub fn contact_form(state: &ContactFormState, page: &str) -> Markup {
    html! {
        div.contact-form {
            h2.contact-form-title {
                "Send us a message & GET a "
                span.highlight { "free estimate" }
                " within "
                span.highlight { "24 hours" }
            }
            form method="post" action="/contact" {
                input type="hidden" name="page" value=(page);
                @if *state != ContactFormState::default() && !state.missing_required().is_empty() {
                    p.contact-form-error role="alert" { "Please fill in the required fields." }
                }
                @for field in ContactField::iter() {
                    div.contact-form-field {
                        label for={ "contact-" (field.as_ref()) } { (field.label()) }
                        @if field == ContactField::Message {
                            textarea id={ "contact-" (field.as_ref()) } name=(field.as_ref()) rows="4" {
                                (state.get(field))
                            }
                        } @else {
                            input
                                id={ "contact-" (field.as_ref()) }
                                type=(field.input_type())
                                name=(field.as_ref())
                                value=(state.get(field))
                                required[field.required()];
                        }
                    }
                }
                button type="submit" { "SUBMIT" }
                p.contact-form-note { "*Required" }
            }
            div.contact-form-testimonial {
                p.contact-form-testimonial-heading {
                    span { "TAKE IT FROM OUR" }
                    " "
                    span { "VALUED CUSTOMERS" }
                }
                blockquote {
                    p { "“Great price, professional and courteous.”" }
                    footer { "--T. Bradley" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> ContactFormState {
        ContactFormState {
            name: "Bob".to_string(),
            email: "bob@example.com".to_string(),
            phone: "555-0100".to_string(),
            zip: "75001".to_string(),
            message: "Spring broke".to_string(),
        }
    }

    #[test]
    fn test_starts_empty() {
        let state = ContactFormState::default();
        for field in ContactField::iter() {
            assert_eq!(state.get(field), "");
        }
    }

    #[test]
    fn test_with_field_replaces_only_that_field() {
        let before = filled();
        let after = before.with_field(ContactField::Name, "Jane");
        assert_eq!(after.name, "Jane");
        assert_eq!(
            after,
            ContactFormState {
                name: "Jane".to_string(),
                ..before.clone()
            }
        );
        assert_eq!(before.name, "Bob");
    }

    #[test]
    fn test_with_field_every_field() {
        for field in ContactField::iter() {
            let after = ContactFormState::default().with_field(field, "x");
            for other in ContactField::iter() {
                let expected = if other == field { "x" } else { "" };
                assert_eq!(after.get(other), expected, "setting {field:?} touched {other:?}");
            }
        }
    }

    #[test]
    fn test_from_pairs() {
        let state = ContactFormState::from_pairs([
            ("name", "Jane"),
            ("page", "/texas"),
            ("phone", "555-0199"),
            ("name", "Janet"),
        ]);
        assert_eq!(state.name, "Janet");
        assert_eq!(state.phone, "555-0199");
        assert_eq!(state.email, "");
    }

    #[test]
    fn test_missing_required() {
        assert_eq!(
            ContactFormState::default().missing_required(),
            vec![ContactField::Name, ContactField::Phone]
        );
        let partial = ContactFormState::default()
            .with_field(ContactField::Name, "Jane")
            .with_field(ContactField::Phone, "   ");
        assert_eq!(partial.missing_required(), vec![ContactField::Phone]);
        assert!(filled().missing_required().is_empty());
    }

    #[test]
    fn test_incomplete_state_shows_notice() {
        let fresh = contact_form(&ContactFormState::default(), "/texas").into_string();
        assert!(!fresh.contains("Please fill in the required fields."));

        let partial = ContactFormState::default().with_field(ContactField::Name, "Jane");
        let html = contact_form(&partial, "/texas").into_string();
        assert!(html.contains("Please fill in the required fields."));
        assert!(html.contains(r#"value="Jane""#));
    }

    #[test]
    fn test_field_names() {
        let names: Vec<String> = ContactField::iter()
            .map(|f| f.as_ref().to_string())
            .collect();
        assert_eq!(names, vec!["name", "email", "phone", "zip", "message"]);
        assert_eq!(ContactField::from_str("zip").unwrap(), ContactField::Zip);
        assert!(ContactField::from_str("Name").is_err());
    }

    #[test]
    fn test_form_echoes_state() {
        let state = ContactFormState::default()
            .with_field(ContactField::Email, "jane@example.com")
            .with_field(ContactField::Message, "<b>hi</b>");
        let html = contact_form(&state, "/residential").into_string();
        assert!(html.contains(r#"value="jane@example.com""#));
        assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;</textarea>"));
        assert!(html.contains(r#"name="page" value="/residential""#));
        assert_eq!(html.matches(" required>").count(), 2);
        assert!(html.contains("*Required"));
        assert!(html.contains("--T. Bradley"));
    }
}
