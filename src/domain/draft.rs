//! Draft - The Email Being Composed

/// One of the three editable fields of a [`Draft`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    RecipientEmail,
    Subject,
    BodyText,
}

impl Field {
    /// All fields, in form order
    pub const ALL: [Field; 3] = [Field::RecipientEmail, Field::Subject, Field::BodyText];

    /// Key used for this field in the outbound JSON payload
    pub fn wire_key(self) -> &'static str {
        match self {
            Field::RecipientEmail => "receiver_email",
            Field::Subject => "subject",
            Field::BodyText => "body_text",
        }
    }

    /// Translation key suffix for labels and placeholders
    pub fn i18n_key(self) -> &'static str {
        match self {
            Field::RecipientEmail => "recipient",
            Field::Subject => "subject",
            Field::BodyText => "body",
        }
    }
}

/// In-progress field values held by the composer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub recipient_email: String,
    pub subject: String,
    pub body_text: String,
}

impl Draft {
    pub fn new(
        recipient_email: impl Into<String>,
        subject: impl Into<String>,
        body_text: impl Into<String>,
    ) -> Self {
        Self {
            recipient_email: recipient_email.into(),
            subject: subject.into(),
            body_text: body_text.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::RecipientEmail => &self.recipient_email,
            Field::Subject => &self.subject,
            Field::BodyText => &self.body_text,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::RecipientEmail => &mut self.recipient_email,
            Field::Subject => &mut self.subject,
            Field::BodyText => &mut self.body_text,
        };
        *slot = value.into();
    }

    /// Reset every field to the empty string
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Domain part of the recipient, for logging without leaking the address
    pub fn recipient_domain(&self) -> Option<&str> {
        self.recipient_email
            .rsplit_once('@')
            .map(|(_, domain)| domain)
            .filter(|domain| !domain.is_empty())
    }
}
