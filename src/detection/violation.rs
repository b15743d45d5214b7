// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! 社交距离违规检测
//!
//! 对单帧内所有跟踪对象两两计算3D距离, 任意一对小于阈值即判定本帧违规。
//! 每帧独立计算, 不跨帧保存状态。

use super::types::{TrackedObject, VIOLATION_DISTANCE};
use tracing::warn;

/// 一对距离过近的对象
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViolatingPair {
    pub first_id: i32,
    pub second_id: i32,
    pub distance: f32,
}

/// 按三角扫描顺序 (i < j) 找出所有违规对
///
/// 距离为0视为重复检测, 不算违规。
pub fn find_violations(objects: &[TrackedObject], threshold: f32) -> Vec<ViolatingPair> {
    let mut pairs = Vec::new();
    for (i, a) in objects.iter().enumerate() {
        for b in &objects[i + 1..] {
            let distance = a.position.distance(&b.position);
            if distance > 0.0 && distance < threshold {
                pairs.push(ViolatingPair {
                    first_id: a.id,
                    second_id: b.id,
                    distance,
                });
            }
        }
    }
    pairs
}

/// 使用默认阈值 [`VIOLATION_DISTANCE`] 判定本帧是否违规
pub fn detect_violation(objects: &[TrackedObject]) -> bool {
    detect_violation_with(objects, VIOLATION_DISTANCE)
}

/// 使用指定阈值判定本帧是否违规, 每个违规对输出一条日志
pub fn detect_violation_with(objects: &[TrackedObject], threshold: f32) -> bool {
    let pairs = find_violations(objects, threshold);
    for pair in &pairs {
        warn!(
            "⚠️ 社交距离违规! ID {} 与 ID {} 距离 {:.1}",
            pair.first_id, pair.second_id, pair.distance
        );
    }
    !pairs.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::types::{BoundingBox2D, Position};

    fn obj(id: i32, x: f32, y: f32, z: f32) -> TrackedObject {
        TrackedObject::new(id, Position::new(x, y, z), BoundingBox2D::default())
    }

    #[test]
    fn test_empty_and_single() {
        assert!(!detect_violation(&[]));
        assert!(!detect_violation(&[obj(0, 0.0, 0.0, 0.0)]));
    }

    #[test]
    fn test_zero_distance_is_not_violation() {
        let objects = [obj(0, 100.0, 0.0, -500.0), obj(1, 100.0, 0.0, -500.0)];
        assert!(!detect_violation(&objects));
    }

    #[test]
    fn test_threshold_is_strict() {
        let close = [obj(0, 0.0, 0.0, 0.0), obj(1, 0.0, 0.0, 1999.999)];
        assert!(detect_violation(&close));

        let exact = [obj(0, 0.0, 0.0, 0.0), obj(1, 0.0, 0.0, 2000.0)];
        assert!(!detect_violation(&exact));
    }

    #[test]
    fn test_later_pair_does_not_clear_flag() {
        // (0,1) 违规, (0,2) 与 (1,2) 不违规, 且最后扫描
        let objects = [
            obj(0, 0.0, 0.0, 0.0),
            obj(1, 0.0, 0.0, 1000.0),
            obj(2, 0.0, 0.0, 9000.0),
        ];
        assert!(detect_violation(&objects));
    }

    #[test]
    fn test_order_invariant() {
        let objects = vec![
            obj(4, 5000.0, 0.0, 0.0),
            obj(7, 0.0, 0.0, 0.0),
            obj(9, 0.0, 0.0, 1500.0),
            obj(2, -8000.0, 0.0, 0.0),
        ];
        let expected = detect_violation(&objects);
        assert!(expected);

        let mut reversed = objects.clone();
        reversed.reverse();
        assert_eq!(detect_violation(&reversed), expected);

        for shift in 1..objects.len() {
            let mut rotated = objects.clone();
            rotated.rotate_left(shift);
            assert_eq!(detect_violation(&rotated), expected);
        }
    }

    #[test]
    fn test_pairs_triangular_order() {
        let objects = [
            obj(10, 0.0, 0.0, 0.0),
            obj(11, 0.0, 0.0, 100.0),
            obj(12, 0.0, 0.0, 200.0),
        ];
        let pairs = find_violations(&objects, VIOLATION_DISTANCE);
        let ids: Vec<_> = pairs.iter().map(|p| (p.first_id, p.second_id)).collect();
        assert_eq!(ids, vec![(10, 11), (10, 12), (11, 12)]);
        assert!((pairs[1].distance - 200.0).abs() < 1e-3);
    }

    #[test]
    fn test_custom_threshold() {
        let objects = [obj(0, 0.0, 0.0, 0.0), obj(1, 0.0, 0.0, 1500.0)];
        assert!(!detect_violation_with(&objects, 1000.0));
        assert!(detect_violation_with(&objects, 1600.0));
    }
}
