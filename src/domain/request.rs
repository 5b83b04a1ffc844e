//! Notification request value object

/// A single notification to be delivered by the external tool.
///
/// The request is a pure value: it carries the text to display and the
/// sound flag, and is consumed by a [`Notifier`](crate::application::ports::Notifier)
/// to build one tool invocation. Title and body are passed through as-is;
/// the tool itself decides how to render empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    /// Notification title (always shown)
    pub title: String,
    /// Notification body text
    pub body: String,
    /// Optional subtitle shown below the title
    pub subtitle: Option<String>,
    /// Whether the notification plays the system sound
    pub sound: bool,
}

impl NotificationRequest {
    /// Create a request with the given title and body.
    ///
    /// Subtitle is absent and sound is enabled by default.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            subtitle: None,
            sound: true,
        }
    }

    /// Set the subtitle
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Enable or disable the notification sound
    pub fn sound(mut self, sound: bool) -> Self {
        self.sound = sound;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults_to_sound_and_no_subtitle() {
        let request = NotificationRequest::new("T", "B");
        assert_eq!(request.title, "T");
        assert_eq!(request.body, "B");
        assert!(request.subtitle.is_none());
        assert!(request.sound);
    }

    #[test]
    fn builder_sets_subtitle_and_sound() {
        let request = NotificationRequest::new("Backup Complete", "Done")
            .subtitle("Job #42")
            .sound(false);
        assert_eq!(request.subtitle.as_deref(), Some("Job #42"));
        assert!(!request.sound);
    }

    #[test]
    fn empty_strings_pass_through() {
        let request = NotificationRequest::new("", "");
        assert_eq!(request.title, "");
        assert_eq!(request.body, "");
    }
}
