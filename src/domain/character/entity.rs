//! Character Context - Entity

use serde::{Deserialize, Serialize};

/// 剧作角色
///
/// 不变量:
/// - id 由存储层分配，创建后不可变（0 表示尚未分配）
/// - 名称、缩写、描述为自由文本，不做约束
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: i32,
    pub char_name: String,
    pub abbreviation: String,
    pub description: String,
}

impl Character {
    pub fn new(
        id: i32,
        char_name: impl Into<String>,
        abbreviation: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            char_name: char_name.into(),
            abbreviation: abbreviation.into(),
            description: description.into(),
        }
    }

    /// 是否已由存储层分配 id
    pub fn has_id(&self) -> bool {
        self.id != 0
    }

    /// 返回带指定 id 的副本（存储层分配 id 后使用）
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_creation() {
        let character = Character::new(
            1,
            "Johnny Test",
            "Johnny",
            "A good test subject is hard to find",
        );

        assert_eq!(character.id, 1);
        assert_eq!(character.char_name, "Johnny Test");
        assert!(character.has_id());
    }

    #[test]
    fn test_unassigned_id() {
        let character = Character::new(0, "Hamlet", "HAM", "Prince of Denmark");
        assert!(!character.has_id());

        let character = character.with_id(7);
        assert_eq!(character.id, 7);
        assert_eq!(character.abbreviation, "HAM");
    }
}
