//! Chat History
//!
//! AI chat turns persisted under `aiMessages`, newest last, capped.

use crate::models::ChatTurn;
use crate::storage::{load_json, save_json, KeyValueStore, AI_MESSAGES_KEY};

pub struct ChatHistory<S: KeyValueStore> {
    store: S,
    limit: usize,
}

impl<S: KeyValueStore> ChatHistory<S> {
    pub fn new(store: S, limit: usize) -> Self {
        Self { store, limit: limit.max(1) }
    }

    pub fn load(&self) -> Vec<ChatTurn> {
        let mut turns: Vec<ChatTurn> = load_json(&self.store, AI_MESSAGES_KEY).unwrap_or_default();
        keep_last(&mut turns, self.limit);
        turns
    }

    /// Append one turn, persist, and return the trimmed history
    pub fn push(&self, turn: ChatTurn) -> Vec<ChatTurn> {
        let mut turns = self.load();
        turns.push(turn);
        self.save(turns)
    }

    pub fn save(&self, mut turns: Vec<ChatTurn>) -> Vec<ChatTurn> {
        keep_last(&mut turns, self.limit);
        save_json(&self.store, AI_MESSAGES_KEY, &turns);
        turns
    }

    pub fn clear(&self) {
        self.store.remove(AI_MESSAGES_KEY);
    }
}

fn keep_last(turns: &mut Vec<ChatTurn>, limit: usize) {
    if turns.len() > limit {
        turns.drain(..turns.len() - limit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_history_survives_reload() {
        let store = MemoryStorage::new();
        {
            let history = ChatHistory::new(&store, 50);
            history.push(ChatTurn::user("Con bị sốt nhẹ"));
            history.push(ChatTurn::assistant("Hãy theo dõi nhiệt độ"));
        }
        let reloaded = ChatHistory::new(&store, 50).load();
        assert_eq!(reloaded.len(), 2);
        assert!(reloaded[0].is_user);
        assert!(reloaded[1].is_api_response);
    }

    #[test]
    fn test_truncates_to_last_fifty() {
        let store = MemoryStorage::new();
        let history = ChatHistory::new(&store, 50);
        for i in 0..60 {
            history.push(ChatTurn::user(format!("tin nhắn {}", i)));
        }
        let turns = history.load();
        assert_eq!(turns.len(), 50);
        assert_eq!(turns[0].text, "tin nhắn 10");
        assert_eq!(turns[49].text, "tin nhắn 59");
    }

    #[test]
    fn test_clear() {
        let store = MemoryStorage::new();
        let history = ChatHistory::new(&store, 50);
        history.push(ChatTurn::user("xin chào"));
        history.clear();
        assert!(history.load().is_empty());
    }
}
