//! In-Memory Character Repository

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use crate::application::ports::{CharacterRepositoryPort, RepositoryError};
use crate::domain::Character;

/// 内存角色仓储
pub struct InMemoryCharacterRepository {
    characters: DashMap<i32, Character>,
    /// 已使用的最大 id
    sequence: AtomicI32,
}

impl InMemoryCharacterRepository {
    pub fn new() -> Self {
        Self {
            characters: DashMap::new(),
            sequence: AtomicI32::new(0),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// 分配下一个 id，到达 i32::MAX 后返回 IdExhausted
    fn next_id(&self) -> Result<i32, RepositoryError> {
        self.sequence
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                current.checked_add(1)
            })
            .map(|previous| previous + 1)
            .map_err(|_| RepositoryError::IdExhausted)
    }
}

impl Default for InMemoryCharacterRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CharacterRepositoryPort for InMemoryCharacterRepository {
    async fn find_all(&self) -> Result<Vec<Character>, RepositoryError> {
        let mut characters: Vec<Character> =
            self.characters.iter().map(|e| e.value().clone()).collect();
        characters.sort_by_key(|c| c.id);
        Ok(characters)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Character>, RepositoryError> {
        Ok(self.characters.get(&id).map(|c| c.clone()))
    }

    async fn insert(&self, character: &Character) -> Result<Character, RepositoryError> {
        let saved = if character.has_id() {
            self.sequence.fetch_max(character.id, Ordering::SeqCst);
            character.clone()
        } else {
            character.clone().with_id(self.next_id()?)
        };

        match self.characters.entry(saved.id) {
            Entry::Occupied(_) => Err(RepositoryError::Duplicate(format!(
                "character {}",
                saved.id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(saved.clone());
                tracing::debug!(character_id = saved.id, "Character stored in memory");
                Ok(saved)
            }
        }
    }

    async fn update(&self, character: &Character) -> Result<Character, RepositoryError> {
        let mut stored = self
            .characters
            .get_mut(&character.id)
            .ok_or_else(|| RepositoryError::NotFound(format!("character {}", character.id)))?;
        *stored = character.clone();
        Ok(character.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        self.characters
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(format!("character {}", id)))
    }
}
