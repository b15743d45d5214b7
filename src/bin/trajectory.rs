// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! 螺旋轨迹动画 (绘图测试)

use macroquad::prelude::*;
use social_distance::trajectory::{plot_to_screen, SpiralTrajectory, AXIS_LIMIT, INTERVAL_MS};
use std::time::{Duration, Instant};
use tracing::info;

fn window_conf() -> Conf {
    Conf {
        window_title: "Trajectory".to_owned(),
        window_width: 640,
        window_height: 480,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    social_distance::init_tracing("trajectory=info,social_distance=info");
    info!("📈 螺旋轨迹绘图, 坐标轴范围 ±{}", AXIS_LIMIT);

    let interval = Duration::from_millis(INTERVAL_MS);
    let mut spiral = SpiralTrajectory::new();
    let mut last_step = Instant::now();

    loop {
        if is_key_pressed(KeyCode::Q) || is_key_pressed(KeyCode::Escape) {
            break;
        }
        if last_step.elapsed() >= interval {
            spiral.advance();
            last_step = Instant::now();
        }

        clear_background(WHITE);
        let (w, h) = (screen_width(), screen_height());

        // 坐标轴
        let (cx, cy) = plot_to_screen((0.0, 0.0), w, h);
        draw_line(0.0, cy, w, cy, 1.0, LIGHTGRAY);
        draw_line(cx, 0.0, cx, h, 1.0, LIGHTGRAY);

        // 只画点, 不连线
        for point in spiral.points() {
            let (x, y) = plot_to_screen(*point, w, h);
            draw_circle(x, y, 3.0, BLUE);
        }

        draw_text(&format!("frame {}", spiral.frame()), 10.0, 20.0, 20.0, DARKGRAY);
        next_frame().await;
    }
}
