// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! 按跟踪ID分配显示颜色

/// 显示颜色 (RGB)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl TrackColor {
    /// 由 OpenCV 习惯的 BGR 三元组构造
    pub const fn from_bgr(b: u8, g: u8, r: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_macroquad(self) -> macroquad::color::Color {
        macroquad::color::Color::from_rgba(self.r, self.g, self.b, 255)
    }
}

/// 5色调色板, 以 BGR 顺序书写
pub const ID_PALETTE: [TrackColor; 5] = [
    TrackColor::from_bgr(59, 232, 176),
    TrackColor::from_bgr(25, 175, 208),
    TrackColor::from_bgr(105, 102, 205),
    TrackColor::from_bgr(255, 185, 0),
    TrackColor::from_bgr(252, 99, 107),
];

/// 违规告警颜色 (红)
pub const ALERT_COLOR: TrackColor = TrackColor::from_bgr(0, 0, 255);

/// `ID_PALETTE[id mod 5]`, 负ID同样落在调色板内
pub fn color_for_id(id: i32) -> TrackColor {
    ID_PALETTE[id.rem_euclid(ID_PALETTE.len() as i32) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        assert_eq!(color_for_id(0), ID_PALETTE[0]);
        assert_eq!(color_for_id(5), ID_PALETTE[0]);
        assert_eq!(color_for_id(7), ID_PALETTE[2]);
        assert_eq!(color_for_id(104), ID_PALETTE[4]);
    }

    #[test]
    fn test_negative_id_in_range() {
        assert_eq!(color_for_id(-1), ID_PALETTE[4]);
        assert_eq!(color_for_id(-5), ID_PALETTE[0]);
    }

    #[test]
    fn test_bgr_order() {
        // (59,232,176) BGR => R=176
        assert_eq!(ID_PALETTE[0], TrackColor { r: 176, g: 232, b: 59 });
        assert_eq!(ALERT_COLOR, TrackColor { r: 255, g: 0, b: 0 });
    }
}
