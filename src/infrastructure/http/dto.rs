//! Data Transfer Objects
//!
//! 对外的 JSON 结构，字段与领域实体一一对应，不含行为

use serde::{Deserialize, Serialize};

// ============================================================================
// Character DTOs
// ============================================================================

/// 角色 DTO
///
/// `id` 缺省为 0，创建时由存储层分配
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharactersDto {
    #[serde(default)]
    pub id: i32,
    pub char_name: String,
    pub abbreviation: String,
    pub description: String,
}

// ============================================================================
// Chapter DTOs
// ============================================================================

/// 章节 DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChaptersDto {
    #[serde(default)]
    pub id: i32,
    pub act: i32,
    pub scene: i32,
    pub description: String,
    pub work_id: i32,
}

// ============================================================================
// 请求参数
// ============================================================================

/// `?id=N` 查询参数
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct IdQuery {
    pub id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_wire_names() {
        let dto = CharactersDto {
            id: 1,
            char_name: "Johnny Test".to_string(),
            abbreviation: "Johnny".to_string(),
            description: "A good test subject is hard to find".to_string(),
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["charName"], "Johnny Test");
        assert_eq!(json["id"], 1);
    }

    #[test]
    fn test_chapter_id_defaults_to_zero() {
        let dto: ChaptersDto = serde_json::from_str(
            r#"{"act":1,"scene":2,"description":"Court","workId":9}"#,
        )
        .unwrap();

        assert_eq!(dto.id, 0);
        assert_eq!(dto.work_id, 9);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let result = serde_json::from_str::<CharactersDto>(r#"{"id":1,"charName":"X"}"#);
        assert!(result.is_err());
    }
}
