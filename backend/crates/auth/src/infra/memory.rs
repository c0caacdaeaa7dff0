//! In-Memory Client State
//!
//! Process-local stand-ins for the browser's client session store and
//! key-value storage. Used by headless clients and tests.

use std::collections::HashMap;

use tokio::sync::Mutex;

use crate::domain::entity::ProviderTokens;
use crate::domain::repository::{ClientSessionStore, ClientStorage};
use crate::error::AuthResult;

/// In-memory client session store
#[derive(Debug, Default)]
pub struct MemoryClientSessionStore {
    tokens: Mutex<Option<ProviderTokens>>,
}

impl MemoryClientSessionStore {
    pub fn with_tokens(tokens: ProviderTokens) -> Self {
        Self {
            tokens: Mutex::new(Some(tokens)),
        }
    }
}

impl ClientSessionStore for MemoryClientSessionStore {
    async fn current(&self) -> AuthResult<Option<ProviderTokens>> {
        Ok(self.tokens.lock().await.clone())
    }

    async fn apply(&self, tokens: &ProviderTokens) -> AuthResult<()> {
        *self.tokens.lock().await = Some(tokens.clone());
        Ok(())
    }
}

/// In-memory key-value storage
#[derive(Debug, Default)]
pub struct MemoryClientStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl ClientStorage for MemoryClientStorage {
    async fn get(&self, key: &str) -> AuthResult<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> AuthResult<()> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
