// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

/// 检测结果处理 (Detection results)
///
/// 检测与跟踪由外部相机SDK完成, 这里只消费每帧输出
/// - types:        跟踪对象与帧数据结构
/// - class_filter: 按类别过滤对象
/// - violation:    社交距离违规判定
/// - palette:      按ID分配颜色
pub mod class_filter;
pub mod palette;
pub mod types;
pub mod violation;

pub use class_filter::{filter_objects, ClassFilter};
pub use palette::{color_for_id, TrackColor, ALERT_COLOR, ID_PALETTE};
pub use types::{BoundingBox2D, ObjectsStatus, Position, TrackedObject, VIOLATION_DISTANCE};
pub use violation::{detect_violation, detect_violation_with, find_violations, ViolatingPair};
