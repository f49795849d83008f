//! Chapter Context - Entity

use serde::{Deserialize, Serialize};

/// 剧作章节
///
/// 不变量:
/// - id 由存储层分配，创建后不可变（0 表示尚未分配）
/// - (act, scene, work_id) 描述章节在作品中的位置，但不保证唯一
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: i32,
    /// 幕
    pub act: i32,
    /// 场
    pub scene: i32,
    pub description: String,
    /// 所属作品 ID
    pub work_id: i32,
}

impl Chapter {
    pub fn new(
        id: i32,
        act: i32,
        scene: i32,
        description: impl Into<String>,
        work_id: i32,
    ) -> Self {
        Self {
            id,
            act,
            scene,
            description: description.into(),
            work_id,
        }
    }

    pub fn has_id(&self) -> bool {
        self.id != 0
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// 章节位置标签，如 "3.2"（第三幕第二场）
    pub fn position(&self) -> String {
        format!("{}.{}", self.act, self.scene)
    }
}
