//! Contact form handling. There is no backend, so a valid submission opens
//! the visitor's mail client with a prefilled `mailto:` link.

pub const MISSING_FIELDS: &str = "Please fill in all fields.";
pub const OPENED_MAIL_CLIENT: &str = "✅ Your email client has been opened with the message!";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Trim every field; `None` if any is left empty.
    pub fn from_fields(name: &str, email: &str, message: &str) -> Option<Self> {
        let (name, email, message) = (name.trim(), email.trim(), message.trim());
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
        })
    }

    pub fn subject(&self) -> String {
        format!("Portfolio Contact: {}", self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }

    /// `encode` must behave like `encodeURIComponent`.
    pub fn mailto<F>(&self, recipient: &str, encode: F) -> String
    where
        F: Fn(&str) -> String,
    {
        format!(
            "mailto:{recipient}?subject={}&body={}",
            encode(&self.subject()),
            encode(&self.body())
        )
    }
}

/// Status line under the form, as text plus CSS class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormNote {
    Clear,
    Error,
    Success,
}

impl FormNote {
    pub fn text(self) -> &'static str {
        match self {
            Self::Clear => "",
            Self::Error => MISSING_FIELDS,
            Self::Success => OPENED_MAIL_CLIENT,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Self::Clear => "form-note",
            Self::Error => "form-note error",
            Self::Success => "form-note success",
        }
    }
}
