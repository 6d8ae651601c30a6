//! Contact form logic kept free of the DOM: the draft record, the validator
//! and the mailto composer. The email modal owns the state and renders the
//! results; everything here runs on any target.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
}

impl FieldError {
    /// Translation key for the inline message under a field.
    pub fn message_key(&self, field: Field) -> &'static str {
        match (field, self) {
            (Field::Name, _) => "modal.errors.name_required",
            (Field::Email, FieldError::Required) => "modal.errors.email_required",
            (Field::Email, FieldError::InvalidEmail) => "modal.errors.email_invalid",
            (Field::Subject, _) => "modal.errors.subject_required",
            (Field::Message, _) => "modal.errors.message_required",
        }
    }
}

/// One optional error per field. Empty record means the draft may be sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Errors {
    name: Option<FieldError>,
    email: Option<FieldError>,
    subject: Option<FieldError>,
    message: Option<FieldError>,
}

impl Errors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Subject => self.subject,
            Field::Message => self.message,
        }
    }

    /// Clears a single field's error, leaving the others untouched. Called
    /// whenever the user edits that field.
    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Subject => self.subject = None,
            Field::Message => self.message = None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn count(&self) -> usize {
        [self.name, self.email, self.subject, self.message]
            .iter()
            .filter(|e| e.is_some())
            .count()
    }
}

/// Checks the whole draft. Name, subject and message are required after
/// trimming; the email additionally has to look like `local@domain.tld`.
pub fn validate(draft: &Draft) -> Errors {
    let required = |value: &str| value.trim().is_empty().then_some(FieldError::Required);

    let email = draft.email.trim();
    Errors {
        name: required(&draft.name),
        email: if email.is_empty() {
            Some(FieldError::Required)
        } else if !email_shape_ok(email) {
            Some(FieldError::InvalidEmail)
        } else {
            None
        },
        subject: required(&draft.subject),
        message: required(&draft.message),
    }
}

fn email_shape_ok(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !host.ends_with('.') && !tld.is_empty(),
        None => false,
    }
}

/// Builds an RFC 6068 `mailto:` URI from a validated draft. Labels come from
/// the active language so the composed body reads like the page did. The
/// subject falls back to `fallback_subject` when the user left it blank.
pub fn compose_mailto(
    recipient: &str,
    name_label: &str,
    email_label: &str,
    draft: &Draft,
    fallback_subject: &str,
) -> String {
    let mut lines = Vec::new();
    if !draft.name.trim().is_empty() {
        lines.push(format!("{}: {}", name_label, draft.name.trim()));
    }
    if !draft.email.trim().is_empty() {
        lines.push(format!("{}: {}", email_label, draft.email.trim()));
    }
    if !draft.message.trim().is_empty() {
        lines.push(format!("\n{}", draft.message.trim()));
    }
    let body = lines.join("\n");

    let subject = match draft.subject.trim() {
        "" => fallback_subject,
        s => s,
    };

    format!(
        "mailto:{}?subject={}&body={}",
        urlencoding::encode(recipient),
        urlencoding::encode(subject),
        urlencoding::encode(&body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Draft {
        Draft {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            subject: "Hello".into(),
            message: "Hi there".into(),
        }
    }

    #[test]
    fn empty_draft_yields_four_required_errors() {
        let errors = validate(&Draft::default());
        assert_eq!(errors.count(), 4);
        for field in [Field::Name, Field::Email, Field::Subject, Field::Message] {
            assert_eq!(errors.get(field), Some(FieldError::Required));
        }
        assert!(!errors.is_empty());
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let draft = Draft {
            name: "   ".into(),
            ..filled()
        };
        assert_eq!(validate(&draft).get(Field::Name), Some(FieldError::Required));
    }

    #[test]
    fn malformed_email_is_the_only_error_when_rest_is_filled() {
        let draft = Draft {
            email: "not-an-email".into(),
            ..filled()
        };
        let errors = validate(&draft);
        assert_eq!(errors.count(), 1);
        assert_eq!(errors.get(Field::Email), Some(FieldError::InvalidEmail));
    }

    #[test]
    fn email_shape_cases() {
        for ok in ["ana@example.com", "a.b@sub.domain.org", "x@y.co"] {
            assert!(email_shape_ok(ok), "{ok} should pass");
        }
        for bad in [
            "not-an-email",
            "@example.com",
            "ana@example",
            "ana@.com",
            "ana@example..com",
            "ana@exam ple.com",
            "ana@@example.com",
            "ana@example.",
        ] {
            assert!(!email_shape_ok(bad), "{bad} should fail");
        }
    }

    #[test]
    fn clearing_one_error_leaves_the_rest() {
        let mut errors = validate(&Draft::default());
        errors.clear(Field::Email);
        assert_eq!(errors.get(Field::Email), None);
        assert_eq!(errors.count(), 3);
        assert_eq!(errors.get(Field::Name), Some(FieldError::Required));
        assert_eq!(errors.get(Field::Subject), Some(FieldError::Required));
        assert_eq!(errors.get(Field::Message), Some(FieldError::Required));
    }

    #[test]
    fn valid_draft_is_clean() {
        assert!(validate(&filled()).is_empty());
    }

    #[test]
    fn composed_body_lists_fields_then_message() {
        let uri = compose_mailto("hello@aurumstudio.dev", "Name", "Email", &filled(), "Start a project");
        let (head, query) = uri.split_once('?').expect("query part");
        assert_eq!(head, "mailto:hello%40aurumstudio.dev");

        let mut subject = None;
        let mut body = None;
        for pair in query.split('&') {
            let (k, v) = pair.split_once('=').unwrap();
            let decoded = urlencoding::decode(v).unwrap().into_owned();
            match k {
                "subject" => subject = Some(decoded),
                "body" => body = Some(decoded),
                other => panic!("unexpected query key {other}"),
            }
        }
        assert_eq!(subject.as_deref(), Some("Hello"));
        let body = body.expect("body param");
        assert!(body.contains("Name: Ana"));
        assert!(body.contains("Email: ana@example.com"));
        assert!(body.ends_with("Hi there"));
    }

    #[test]
    fn blank_subject_uses_fallback() {
        let draft = Draft {
            subject: "  ".into(),
            ..filled()
        };
        let uri = compose_mailto("hello@aurumstudio.dev", "Name", "Email", &draft, "Start a project");
        assert!(uri.contains(&format!("subject={}", urlencoding::encode("Start a project"))));
    }
}
