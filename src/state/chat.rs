//! Chat Session State
//!
//! Owned transcript of the assistant widget. The session is the only
//! mutation path for messages; the view layer wires input events and the
//! reply timer around it.

use leptos::*;

/// Greeting shown when the chat view opens.
pub const GREETING: &str = "Hello! I'm your Aadhaar Intelligence Assistant. Ask me anything.";

/// Fixed reply text. The assistant is scripted, not connected to any
/// inference backend.
pub const SCRIPTED_REPLY: &str =
    "I've analyzed the national database. Updates in Maharashtra have increased by 12% this week.";

/// Delay before the scripted reply is appended, in milliseconds.
pub const REPLY_DELAY_MS: u32 = 1000;

/// Author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One entry in the chat transcript.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: u32,
    pub role: Role,
    pub text: String,
}

/// Per-view chat session. The transcript is append-only and discarded
/// with the view; message ids are unique and strictly increasing within
/// a session.
#[derive(Clone, Copy)]
pub struct ChatSession {
    pub messages: RwSignal<Vec<ChatMessage>>,
    next_id: RwSignal<u32>,
}

impl ChatSession {
    /// Create a session seeded with the assistant greeting.
    pub fn new() -> Self {
        Self {
            messages: create_rw_signal(vec![ChatMessage {
                id: 1,
                role: Role::Assistant,
                text: GREETING.to_string(),
            }]),
            next_id: create_rw_signal(2),
        }
    }

    fn push(&self, role: Role, text: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.messages.update(|messages| {
            messages.push(ChatMessage { id, role, text });
        });
    }

    /// Append a user message. Whitespace-only input is ignored; returns
    /// whether a message was appended (and a reply should be scheduled).
    pub fn submit(&self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.push(Role::User, text.to_string());
        true
    }

    /// Append the scripted assistant reply.
    pub fn push_reply(&self) {
        self.push(Role::Assistant, SCRIPTED_REPLY.to_string());
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_starts_with_greeting() {
        let runtime = create_runtime();
        let session = ChatSession::new();

        let messages = session.messages.get_untracked();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id, 1);
        assert_eq!(messages[0].role, Role::Assistant);
        assert_eq!(messages[0].text, GREETING);

        runtime.dispose();
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let runtime = create_runtime();
        let session = ChatSession::new();

        assert!(!session.submit(""));
        assert!(!session.submit("   "));
        assert!(!session.submit("\t\n"));
        assert_eq!(session.messages.get_untracked().len(), 1);

        runtime.dispose();
    }

    #[test]
    fn test_submit_appends_user_message() {
        let runtime = create_runtime();
        let session = ChatSession::new();

        assert!(session.submit("hello"));
        let messages = session.messages.get_untracked();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].text, "hello");

        runtime.dispose();
    }

    #[test]
    fn test_submit_trims_input() {
        let runtime = create_runtime();
        let session = ChatSession::new();

        assert!(session.submit("  hello  "));
        assert_eq!(session.messages.get_untracked()[1].text, "hello");

        runtime.dispose();
    }

    #[test]
    fn test_reply_appends_scripted_text() {
        let runtime = create_runtime();
        let session = ChatSession::new();

        session.submit("hello");
        session.push_reply();

        let messages = session.messages.get_untracked();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2].role, Role::Assistant);
        assert_eq!(messages[2].text, SCRIPTED_REPLY);

        runtime.dispose();
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let runtime = create_runtime();
        let session = ChatSession::new();

        for i in 0..5 {
            session.submit(&format!("message {i}"));
            session.push_reply();
        }

        let messages = session.messages.get_untracked();
        assert_eq!(messages.len(), 11);
        for pair in messages.windows(2) {
            assert!(pair[1].id > pair[0].id);
        }

        runtime.dispose();
    }

    #[test]
    fn test_concurrent_submissions_each_get_a_reply() {
        let runtime = create_runtime();
        let session = ChatSession::new();

        // Three submissions before any reply arrives.
        assert!(session.submit("one"));
        assert!(session.submit("two"));
        assert!(session.submit("three"));
        {
            let messages = session.messages.get_untracked();
            assert_eq!(messages.len(), 4);
            assert!(messages[1..].iter().all(|m| m.role == Role::User));
        }

        // Each pending timer delivers independently.
        session.push_reply();
        session.push_reply();
        session.push_reply();
        let messages = session.messages.get_untracked();
        assert_eq!(messages.len(), 7);
        assert!(messages[4..].iter().all(|m| m.role == Role::Assistant));

        runtime.dispose();
    }
}
