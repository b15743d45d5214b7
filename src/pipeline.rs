// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! 逐帧处理: 过滤 → 违规判定 → 叠加层规划
//!
//! 只处理相机报告为新结果的帧; 旧结果返回 None, 画面与叠加层保持不变。

use crate::detection::{detect_violation_with, filter_objects, ClassFilter};
use crate::renderer::overlay::{plan_overlay, FrameOverlay};
use crate::session::FrameData;
use tracing::{debug, info};

pub fn process_frame(
    frame: &FrameData,
    filter: ClassFilter,
    threshold: f32,
) -> Option<FrameOverlay> {
    if !frame.objects.is_new {
        return None;
    }

    let objects = filter_objects(&frame.objects.object_list, filter);
    info!("👥 检测到 {} 个对象", objects.len());
    for object in &objects {
        let p = object.position;
        debug!("📍 ID {}: {:.0}, {:.0}, {:.0}", object.id, p.x, p.y, p.z);
    }

    let violated = detect_violation_with(&objects, threshold);
    Some(plan_overlay(&objects, violated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::{color_for_id, ALERT_COLOR, VIOLATION_DISTANCE};
    use crate::renderer::overlay::{ALERT_THICKNESS, NORMAL_THICKNESS};
    use crate::session::{CameraSession, GrabOutcome, RecordingSession};
    use std::io::Cursor;
    use std::path::PathBuf;

    const LOG: &str = r#"{"camera": {"width": 1280, "height": 720, "fps": 15}}
{"timestamp_ns": 100, "objects": [{"id": 1, "position": [0, 0, 0], "bounding_box_2d": [[0,0],[10,0],[10,10],[0,10]], "label": "PERSON"}, {"id": 2, "position": [0, 0, 1500], "bounding_box_2d": [[20,0],[30,0],[30,10],[20,10]], "label": "VEHICLE"}]}
{"timestamp_ns": 166, "is_new": false, "objects": [{"id": 1, "position": [0, 0, 0], "bounding_box_2d": [[0,0],[10,0],[10,10],[0,10]]}]}
"#;

    fn frames(text: &str) -> Vec<FrameData> {
        let mut session = RecordingSession::from_reader(
            Box::new(Cursor::new(text.as_bytes().to_vec())),
            PathBuf::new(),
        )
        .unwrap();
        let mut frames = Vec::new();
        while let GrabOutcome::Frame(frame) = session.grab().unwrap() {
            frames.push(frame);
        }
        frames
    }

    #[test]
    fn test_new_frame_is_planned() {
        let frames = frames(LOG);
        assert_eq!(frames.len(), 2);

        let overlay = process_frame(&frames[0], ClassFilter::All, VIOLATION_DISTANCE).unwrap();
        assert!(overlay.violated);
        assert!(overlay.banner.is_some());
        assert_eq!(overlay.boxes.len(), 2);
        for bbox in &overlay.boxes {
            assert_eq!(bbox.color, ALERT_COLOR);
            assert_eq!(bbox.thickness, ALERT_THICKNESS);
        }
    }

    #[test]
    fn test_stale_frame_is_skipped() {
        let frames = frames(LOG);
        assert!(!frames[1].objects.is_new);
        assert_eq!(process_frame(&frames[1], ClassFilter::All, VIOLATION_DISTANCE), None);
    }

    #[test]
    fn test_person_filter_clears_violation() {
        let frames = frames(LOG);
        let overlay = process_frame(&frames[0], ClassFilter::Person, VIOLATION_DISTANCE).unwrap();
        assert!(!overlay.violated);
        assert!(overlay.banner.is_none());
        assert_eq!(overlay.boxes.len(), 1);
        assert_eq!(overlay.boxes[0].id, 1);
        assert_eq!(overlay.boxes[0].color, color_for_id(1));
        assert_eq!(overlay.boxes[0].thickness, NORMAL_THICKNESS);
    }

    #[test]
    fn test_threshold_is_applied() {
        let frames = frames(LOG);
        let overlay = process_frame(&frames[0], ClassFilter::All, 1000.0).unwrap();
        assert!(!overlay.violated);
    }
}
