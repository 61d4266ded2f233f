//! Notice - User-Facing Notification Intents
//!
//! The composer only decides *what* to tell the user; rendering and dismissal
//! belong to the notification layer of the window.

/// Severity of a notice, mapped onto the toolkit's notification types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Text of a notice, either a translatable key or verbatim server text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeText {
    /// Translation key plus its English rendering
    Key {
        key: &'static str,
        english: &'static str,
    },
    /// Shown as-is (server-provided error text)
    Verbatim(String),
}

impl NoticeText {
    /// English rendering, used in logs and tests
    pub fn english(&self) -> &str {
        match self {
            NoticeText::Key { english, .. } => english,
            NoticeText::Verbatim(text) => text,
        }
    }
}

/// A transient notification the composer asks the UI to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: NoticeText,
    pub description: NoticeText,
}

impl Notice {
    /// The form failed client-side validation
    pub fn validation_failed() -> Self {
        Self {
            kind: NoticeKind::Error,
            title: NoticeText::Key {
                key: "notice.validation_title",
                english: "Validation Error",
            },
            description: NoticeText::Key {
                key: "notice.validation_description",
                english: "Please fix the errors in the form",
            },
        }
    }

    /// The endpoint accepted the email
    pub fn sent() -> Self {
        Self {
            kind: NoticeKind::Success,
            title: NoticeText::Key {
                key: "notice.sent_title",
                english: "Email Sent Successfully!",
            },
            description: NoticeText::Key {
                key: "notice.sent_description",
                english: "Your email has been sent.",
            },
        }
    }

    /// The send failed; `reason` is the server-provided text when there was one
    pub fn send_failed(reason: Option<String>) -> Self {
        let description = match reason {
            Some(reason) => NoticeText::Verbatim(reason),
            None => NoticeText::Key {
                key: "notice.failed_description",
                english: crate::error::GENERIC_SEND_FAILURE,
            },
        };

        Self {
            kind: NoticeKind::Error,
            title: NoticeText::Key {
                key: "notice.failed_title",
                english: "Error",
            },
            description,
        }
    }

    /// Build the failure notice for a send error
    pub fn from_send_error(error: &crate::error::Error) -> Self {
        Self::send_failed(error.server_reason().map(str::to_string))
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_validation_notice_text() {
        let notice = Notice::validation_failed();
        assert!(notice.is_error());
        assert_eq!(notice.title.english(), "Validation Error");
        assert_eq!(notice.description.english(), "Please fix the errors in the form");
    }

    #[test]
    fn test_failure_notice_prefers_server_text() {
        let err = Error::Rejected {
            status: 429,
            message: Some("quota exceeded".to_string()),
        };
        let notice = Notice::from_send_error(&err);
        assert_eq!(notice.description, NoticeText::Verbatim("quota exceeded".to_string()));
        assert_eq!(notice.title.english(), "Error");
    }

    #[test]
    fn test_failure_notice_falls_back_to_generic_key() {
        let err = Error::Rejected {
            status: 502,
            message: None,
        };
        let notice = Notice::from_send_error(&err);
        assert_eq!(
            notice.description,
            NoticeText::Key {
                key: "notice.failed_description",
                english: "Failed to send email. Please try again.",
            }
        );
    }
}
