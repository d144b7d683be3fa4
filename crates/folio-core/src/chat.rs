//! Toy chat transcript
//!
//! The chat widget is a local echo: messages the visitor sends are appended
//! to the transcript and go nowhere else. The transcript starts with one
//! greeting line from the host so the panel never opens empty.

/// Who wrote a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAuthor {
    Host,
    Visitor,
}

/// One transcript line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub author: ChatAuthor,
    pub text: String,
}

/// The widget's transcript. Echo only; nothing is delivered anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    /// A transcript seeded with the host greeting.
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage {
                author: ChatAuthor::Host,
                text: greeting.into(),
            }],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append a visitor message. Leading/trailing whitespace is trimmed and
    /// blank messages are dropped; returns whether anything was appended.
    pub fn push_visitor(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.messages.push(ChatMessage {
            author: ChatAuthor::Visitor,
            text: text.to_string(),
        });
        true
    }
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new("Hi! This is a demo widget - messages stay right here.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_greeting() {
        let log = ChatLog::new("hello");
        assert_eq!(log.messages().len(), 1);
        assert_eq!(log.messages()[0].author, ChatAuthor::Host);
    }

    #[test]
    fn visitor_messages_append_in_order() {
        let mut log = ChatLog::default();
        assert!(log.push_visitor("first"));
        assert!(log.push_visitor("  second  "));
        let texts: Vec<&str> = log.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts[1], "first");
        assert_eq!(texts[2], "second");
    }

    #[test]
    fn blank_messages_are_dropped() {
        let mut log = ChatLog::default();
        assert!(!log.push_visitor("   "));
        assert!(!log.push_visitor(""));
        assert_eq!(log.messages().len(), 1);
    }
}
