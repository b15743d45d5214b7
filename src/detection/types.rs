// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! 检测结果数据结构定义
//! Data structures for per-frame detection results

use serde::{Deserialize, Serialize};

// ========== 公共常量 ==========

/// 社交距离阈值 (位置单位, 毫米)
pub const VIOLATION_DISTANCE: f32 = 2000.0;

// ========== 数据结构 ==========

/// 相机坐标系下的3D位置
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f32; 3]", into = "[f32; 3]")]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// 欧氏距离
    pub fn distance(&self, other: &Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl From<[f32; 3]> for Position {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Position> for [f32; 3] {
    fn from(p: Position) -> Self {
        [p.x, p.y, p.z]
    }
}

/// 2D检测框的四个角点 (像素坐标)
///
/// 角点顺序: 左上, 右上, 右下, 左下
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoundingBox2D(pub [[f32; 2]; 4]);

impl BoundingBox2D {
    /// 由左上角和右下角构造
    pub fn from_corners(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self([[x1, y1], [x2, y1], [x2, y2], [x1, y2]])
    }

    pub fn top_left(&self) -> (f32, f32) {
        (self.0[0][0], self.0[0][1])
    }

    pub fn bottom_right(&self) -> (f32, f32) {
        (self.0[2][0], self.0[2][1])
    }
}

/// 跟踪对象 (单帧内某条轨迹的数据)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackedObject {
    /// 跟踪ID (由外部SDK分配)
    pub id: i32,

    /// 3D位置
    pub position: Position,

    /// 2D检测框
    pub bounding_box_2d: BoundingBox2D,

    /// 类别标签 (可选), 供类别过滤使用
    #[serde(default)]
    pub label: Option<String>,
}

impl TrackedObject {
    pub fn new(id: i32, position: Position, bounding_box_2d: BoundingBox2D) -> Self {
        Self {
            id,
            position,
            bounding_box_2d,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// 一帧检测输出
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectsStatus {
    /// 是否为新结果
    #[serde(default = "default_true")]
    pub is_new: bool,

    /// 时间戳 (纳秒)
    #[serde(default)]
    pub timestamp_ns: u64,

    /// 本帧的跟踪对象列表
    #[serde(default, rename = "objects")]
    pub object_list: Vec<TrackedObject>,
}

fn default_true() -> bool {
    true
}
