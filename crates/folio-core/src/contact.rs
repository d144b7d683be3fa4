//! Contact form validation and mail composition
//!
//! All three fields are required and the email must look like an address
//! (one `@`, a dotted domain, no whitespace). There is no delivery
//! endpoint; a valid submission composes a `mailto:` URL the shell hands to
//! the system mail client.

/// The three contact-form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// What the visitor has typed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }
}

/// Per-field validation messages; `None` means the field is fine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_valid(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        match field {
            ContactField::Name => self.name,
            ContactField::Email => self.email,
            ContactField::Message => self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, error: Option<&'static str>) {
        match field {
            ContactField::Name => self.name = error,
            ContactField::Email => self.email = error,
            ContactField::Message => self.message = error,
        }
    }
}

/// Validate a single field, as on blur.
pub fn validate_field(field: ContactField, value: &str) -> Option<&'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Some("This field is required");
    }
    if field == ContactField::Email && !is_valid_email(value) {
        return Some("Please enter a valid email address");
    }
    None
}

/// Validate the whole draft, as on submit.
pub fn validate(draft: &ContactDraft) -> FieldErrors {
    FieldErrors {
        name: validate_field(ContactField::Name, &draft.name),
        email: validate_field(ContactField::Email, &draft.email),
        message: validate_field(ContactField::Message, &draft.message),
    }
}

/// Address shape check: one `@`, non-empty local part, dotted domain,
/// no whitespace anywhere.
pub fn is_valid_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Compose the mail URL for a validated draft.
///
/// Subject and body are percent-encoded the way the system URL handler
/// expects; the draft is assumed to have passed [`validate`].
pub fn mailto_url(to: &str, draft: &ContactDraft) -> String {
    let subject = format!("Portfolio Contact from {}", draft.name);
    let body = format!(
        "Name: {}\nEmail: {}\n\nMessage:\n{}",
        draft.name, draft.email, draft.message
    );
    format!(
        "mailto:{}?subject={}&body={}",
        to,
        percent_encode(&subject),
        percent_encode(&body)
    )
}

/// Percent-encode everything outside the URL-safe unreserved set.
fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}
