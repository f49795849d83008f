//! DTO ⇄ Domain Mappers
//!
//! 纯函数映射，逐字段复制，不做默认值处理

use super::dto::{ChaptersDto, CharactersDto};
use crate::domain::{Chapter, Character};

/// DTO 与领域实体之间的映射
pub trait DtoMapper<D, E>: Send + Sync {
    fn to_domain(&self, dto: D) -> E;

    fn to_dto(&self, entity: E) -> D;
}

/// 角色映射
#[derive(Debug, Clone, Copy, Default)]
pub struct CharactersMapper;

impl DtoMapper<CharactersDto, Character> for CharactersMapper {
    fn to_domain(&self, dto: CharactersDto) -> Character {
        Character {
            id: dto.id,
            char_name: dto.char_name,
            abbreviation: dto.abbreviation,
            description: dto.description,
        }
    }

    fn to_dto(&self, entity: Character) -> CharactersDto {
        CharactersDto {
            id: entity.id,
            char_name: entity.char_name,
            abbreviation: entity.abbreviation,
            description: entity.description,
        }
    }
}

/// 章节映射
#[derive(Debug, Clone, Copy, Default)]
pub struct ChaptersMapper;

impl DtoMapper<ChaptersDto, Chapter> for ChaptersMapper {
    fn to_domain(&self, dto: ChaptersDto) -> Chapter {
        Chapter {
            id: dto.id,
            act: dto.act,
            scene: dto.scene,
            description: dto.description,
            work_id: dto.work_id,
        }
    }

    fn to_dto(&self, entity: Chapter) -> ChaptersDto {
        ChaptersDto {
            id: entity.id,
            act: entity.act,
            scene: entity.scene,
            description: entity.description,
            work_id: entity.work_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_round_trip() {
        let dto = CharactersDto {
            id: 1,
            char_name: "Johnny Test".to_string(),
            abbreviation: "Johnny".to_string(),
            description: "A good test subject is hard to find".to_string(),
        };

        let mapper = CharactersMapper;
        let character = mapper.to_domain(dto.clone());
        assert_eq!(character.char_name, "Johnny Test");
        assert_eq!(mapper.to_dto(character), dto);
    }

    #[test]
    fn test_chapter_round_trip() {
        let dto = ChaptersDto {
            id: 4,
            act: 2,
            scene: 3,
            description: "A street".to_string(),
            work_id: 8,
        };

        let mapper = ChaptersMapper;
        let chapter = mapper.to_domain(dto.clone());
        assert_eq!(chapter.position(), "2.3");
        assert_eq!(mapper.to_dto(chapter), dto);
    }
}
