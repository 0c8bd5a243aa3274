use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

/// A conversation bound to one session of one agent on one ADK server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSession {
    pub server_url: String,
    pub agent_name: String,
    pub session_id: String,
}

/// Open conversations, keyed by conversation id. Lives for the process.
#[derive(Debug, Default)]
pub struct ChatSessions {
    sessions: RwLock<HashMap<String, ChatSession>>,
}

impl ChatSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `session` and returns its new conversation id.
    pub fn open(&self, session: ChatSession) -> String {
        let conversation_id = format!("conv_{}", Uuid::new_v4().simple());
        self.sessions
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(conversation_id.clone(), session);
        conversation_id
    }

    pub fn get(&self, conversation_id: &str) -> Option<ChatSession> {
        self.sessions
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(conversation_id)
            .cloned()
    }

    pub fn close(&self, conversation_id: &str) -> Option<ChatSession> {
        self.sessions
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(conversation_id)
    }

    pub fn len(&self) -> usize {
        self.sessions.read().unwrap_or_else(|poisoned| poisoned.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
