// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! 每帧叠加层绘制方案
//!
//! 违规标志按帧计算: 只要任意一对违规, 本帧所有对象都以告警样式绘制。

use crate::detection::{color_for_id, TrackColor, TrackedObject, ALERT_COLOR};

/// 违规横幅文字
pub const VIOLATION_BANNER: &str = "SOCIAL DISTANCING VIOLATED!!!";
/// 横幅位置 (帧像素坐标, 文字基线)
pub const BANNER_POSITION: (f32, f32) = (30.0, 70.0);
pub const BANNER_SCALE: f32 = 2.0;
pub const LABEL_SCALE: f32 = 1.0;

/// 告警框线宽
pub const ALERT_THICKNESS: f32 = 10.0;
/// 普通框线宽
pub const NORMAL_THICKNESS: f32 = 3.0;

/// 文字叠加
#[derive(Clone, Debug, PartialEq)]
pub struct TextOverlay {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub color: TrackColor,
}

/// 单个对象的检测框样式
#[derive(Clone, Debug, PartialEq)]
pub struct BoxStyle {
    pub id: i32,
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub color: TrackColor,
    pub thickness: f32,
    pub label: TextOverlay,
}

impl BoxStyle {
    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }
}

/// 一帧的叠加层
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameOverlay {
    pub violated: bool,
    pub banner: Option<TextOverlay>,
    pub boxes: Vec<BoxStyle>,
}

/// 根据本帧违规标志生成所有对象的绘制样式
pub fn plan_overlay(objects: &[TrackedObject], violated: bool) -> FrameOverlay {
    let banner = violated.then(|| TextOverlay {
        text: VIOLATION_BANNER.to_string(),
        x: BANNER_POSITION.0,
        y: BANNER_POSITION.1,
        scale: BANNER_SCALE,
        color: ALERT_COLOR,
    });

    let boxes = objects
        .iter()
        .map(|obj| {
            let (color, thickness) = if violated {
                (ALERT_COLOR, ALERT_THICKNESS)
            } else {
                (color_for_id(obj.id), NORMAL_THICKNESS)
            };
            let (x1, y1) = obj.bounding_box_2d.top_left();
            let (x2, y2) = obj.bounding_box_2d.bottom_right();
            BoxStyle {
                id: obj.id,
                x1,
                y1,
                x2,
                y2,
                color,
                thickness,
                label: TextOverlay {
                    text: format!("ID: {}", obj.id),
                    x: x1,
                    y: y1,
                    scale: LABEL_SCALE,
                    color,
                },
            }
        })
        .collect();

    FrameOverlay {
        violated,
        banner,
        boxes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::{detect_violation, BoundingBox2D, Position, ID_PALETTE};

    fn person(id: i32, z: f32, x1: f32) -> TrackedObject {
        TrackedObject::new(
            id,
            Position::new(0.0, 0.0, z),
            BoundingBox2D::from_corners(x1, 100.0, x1 + 50.0, 300.0),
        )
    }

    #[test]
    fn test_normal_frame_uses_palette() {
        let objects = [person(0, 0.0, 10.0), person(7, 9000.0, 200.0)];
        let overlay = plan_overlay(&objects, detect_violation(&objects));

        assert!(!overlay.violated);
        assert!(overlay.banner.is_none());
        assert_eq!(overlay.boxes[0].color, ID_PALETTE[0]);
        assert_eq!(overlay.boxes[1].color, ID_PALETTE[2]);
        assert_eq!(overlay.boxes[1].thickness, NORMAL_THICKNESS);
        assert_eq!(overlay.boxes[1].label.text, "ID: 7");
        assert_eq!(overlay.boxes[1].label.color, ID_PALETTE[2]);
    }

    #[test]
    fn test_violation_styles_every_object() {
        // 0 与 1 相距 1500; 2 远离所有人, 仍以告警样式绘制
        let objects = [
            person(0, 0.0, 10.0),
            person(1, 1500.0, 100.0),
            person(2, 20000.0, 400.0),
        ];
        let overlay = plan_overlay(&objects, detect_violation(&objects));

        assert!(overlay.violated);
        let banner = overlay.banner.as_ref().unwrap();
        assert_eq!(banner.text, VIOLATION_BANNER);
        assert_eq!((banner.x, banner.y), BANNER_POSITION);
        assert_eq!(overlay.boxes.len(), 3);
        for b in &overlay.boxes {
            assert_eq!(b.color, ALERT_COLOR);
            assert_eq!(b.thickness, ALERT_THICKNESS);
            assert_eq!(b.label.color, ALERT_COLOR);
        }
    }

    #[test]
    fn test_box_geometry_from_corners() {
        let overlay = plan_overlay(&[person(3, 0.0, 40.0)], false);
        let b = &overlay.boxes[0];
        assert_eq!((b.x1, b.y1, b.x2, b.y2), (40.0, 100.0, 90.0, 300.0));
        assert_eq!((b.width(), b.height()), (50.0, 200.0));
        assert_eq!((b.label.x, b.label.y), (40.0, 100.0));
    }

    #[test]
    fn test_empty_frame() {
        let overlay = plan_overlay(&[], false);
        assert!(overlay.boxes.is_empty());
        assert!(overlay.banner.is_none());
    }
}
