// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

pub mod overlay;

use image::RgbaImage;
use macroquad::prelude::*;
use overlay::{FrameOverlay, TextOverlay};
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

/// OpenCV `FONT_HERSHEY_SIMPLEX` 缩放 1.0 对应的字号
const BASE_FONT_SIZE: f32 = 30.0;

/// 纹理尺寸; 超出 u16 范围时返回 None
pub fn texture_size(width: u32, height: u32) -> Option<(u16, u16)> {
    Some((u16::try_from(width).ok()?, u16::try_from(height).ok()?))
}

/// 帧坐标到窗口坐标的映射
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameMapping {
    pub scale_x: f32,
    pub scale_y: f32,
}

impl FrameMapping {
    pub fn fit(frame_width: u32, frame_height: u32, screen_w: f32, screen_h: f32) -> Self {
        Self {
            scale_x: screen_w / frame_width.max(1) as f32,
            scale_y: screen_h / frame_height.max(1) as f32,
        }
    }

    pub fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (x * self.scale_x, y * self.scale_y)
    }

    /// 线宽与字号按较小的缩放比例变化
    pub fn uniform(&self) -> f32 {
        self.scale_x.min(self.scale_y)
    }
}

pub struct Renderer {
    last_frame: Option<Texture2D>,
    frame_size: (u32, u32),
    overlay: FrameOverlay,

    // 标签字体, None 时使用 macroquad 内置字体
    font: Option<Font>,

    render_count: u64,
    render_last: Instant,
    render_fps: f64,
}

impl Renderer {
    pub fn new(font_path: Option<&Path>, frame_size: (u32, u32)) -> Self {
        info!("🎨 渲染器启动");

        let font = font_path.and_then(|path| match std::fs::read(path) {
            Ok(bytes) => match load_ttf_font_from_bytes(&bytes) {
                Ok(font) => {
                    info!("✅ 字体加载成功: {}", path.display());
                    Some(font)
                }
                Err(e) => {
                    warn!("⚠️ 字体加载失败: {}", e);
                    None
                }
            },
            Err(_) => {
                warn!("⚠️ 未找到字体文件: {}", path.display());
                None
            }
        });

        Self {
            last_frame: None,
            frame_size,
            overlay: FrameOverlay::default(),
            font,
            render_count: 0,
            render_last: Instant::now(),
            render_fps: 0.0,
        }
    }

    /// 更新视频帧纹理; 只在分辨率变化时重建纹理
    pub fn update_frame(&mut self, image: &RgbaImage) {
        let (width, height) = image.dimensions();
        let Some((tex_w, tex_h)) = texture_size(width, height) else {
            warn!("⚠️ 帧尺寸超出纹理上限, 跳过: {}x{}", width, height);
            return;
        };
        let needs_rebuild = match &self.last_frame {
            Some(tex) => tex.width() != width as f32 || tex.height() != height as f32,
            None => true,
        };

        if needs_rebuild {
            let texture = Texture2D::from_rgba8(tex_w, tex_h, image.as_raw());
            texture.set_filter(FilterMode::Linear);
            self.last_frame = Some(texture);
        } else if let Some(tex) = &self.last_frame {
            let img = Image {
                bytes: image.as_raw().clone(),
                width: tex_w,
                height: tex_h,
            };
            tex.update(&img);
        }
        self.frame_size = (width, height);
    }

    pub fn set_overlay(&mut self, overlay: FrameOverlay) {
        self.overlay = overlay;
    }

    pub fn render_fps(&self) -> f64 {
        self.render_fps
    }

    pub fn draw(&mut self) {
        clear_background(BLACK);

        let mapping = FrameMapping::fit(
            self.frame_size.0,
            self.frame_size.1,
            screen_width(),
            screen_height(),
        );

        // 绘制视频帧
        if let Some(texture) = &self.last_frame {
            draw_texture_ex(
                texture,
                0.0,
                0.0,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(screen_width(), screen_height())),
                    ..Default::default()
                },
            );
        }

        // 绘制检测框
        let uniform = mapping.uniform();
        for bbox in &self.overlay.boxes {
            let (x1, y1) = mapping.map(bbox.x1, bbox.y1);
            let (x2, y2) = mapping.map(bbox.x2, bbox.y2);
            draw_rectangle_lines(
                x1,
                y1,
                x2 - x1,
                y2 - y1,
                bbox.thickness * uniform,
                bbox.color.to_macroquad(),
            );
            self.draw_label(&bbox.label, &mapping);
        }

        if let Some(banner) = &self.overlay.banner {
            self.draw_label(banner, &mapping);
        }

        // FPS统计
        self.render_count += 1;
        let now = Instant::now();
        if now.duration_since(self.render_last).as_secs() >= 1 {
            self.render_fps =
                self.render_count as f64 / now.duration_since(self.render_last).as_secs_f64();
            self.render_count = 0;
            self.render_last = now;
        }
    }

    fn draw_label(&self, label: &TextOverlay, mapping: &FrameMapping) {
        let (x, y) = mapping.map(label.x, label.y);
        let font_size = (BASE_FONT_SIZE * label.scale * mapping.uniform()).max(1.0) as u16;
        draw_text_ex(
            &label.text,
            x,
            y,
            TextParams {
                font: self.font.as_ref(),
                font_size,
                color: label.color.to_macroquad(),
                ..Default::default()
            },
        );
    }
}
