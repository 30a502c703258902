use glam::Vec4;
use portfolio_core::{Blend, DrawOp, Frame};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `rgba()` CSS colour for a linear 0..1 RGBA value.
pub fn css_rgba(c: Vec4) -> String {
    let r = (c.x.clamp(0.0, 1.0) * 255.0).round() as u32;
    let g = (c.y.clamp(0.0, 1.0) * 255.0).round() as u32;
    let b = (c.z.clamp(0.0, 1.0) * 255.0).round() as u32;
    let a = c.w.clamp(0.0, 1.0);
    format!("rgba({r},{g},{b},{a:.3})")
}

/// Replays composed frames onto a 2D canvas context.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context(2d) failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow::anyhow!("not a 2d context"))?;
        Ok(Self { ctx })
    }

    /// Paint `frame`, whose coordinates are CSS pixels, onto a backing store
    /// `pixel_ratio` times larger.
    pub fn paint(&self, frame: &Frame, css_width: f64, css_height: f64, pixel_ratio: f64) {
        let ctx = &self.ctx;
        _ = ctx.set_transform(pixel_ratio, 0.0, 0.0, pixel_ratio, 0.0, 0.0);
        _ = ctx.set_global_composite_operation("source-over");
        for op in &frame.ops {
            match op {
                DrawOp::Clear { color } => {
                    ctx.set_fill_style_str(&css_rgba(*color));
                    ctx.fill_rect(0.0, 0.0, css_width, css_height);
                }
                DrawOp::SetBlend(blend) => {
                    let mode = match blend {
                        Blend::Normal => "source-over",
                        Blend::Additive => "lighter",
                    };
                    _ = ctx.set_global_composite_operation(mode);
                }
                DrawOp::Triangle {
                    points,
                    fill,
                    stroke,
                } => {
                    ctx.begin_path();
                    ctx.move_to(points[0].x as f64, points[0].y as f64);
                    ctx.line_to(points[1].x as f64, points[1].y as f64);
                    ctx.line_to(points[2].x as f64, points[2].y as f64);
                    ctx.close_path();
                    ctx.set_fill_style_str(&css_rgba(*fill));
                    ctx.fill();
                    ctx.set_line_width(0.6);
                    ctx.set_stroke_style_str(&css_rgba(*stroke));
                    ctx.stroke();
                }
                DrawOp::Glow {
                    center,
                    radius,
                    color,
                } => {
                    let (x, y, r) = (center.x as f64, center.y as f64, radius.max(0.5) as f64);
                    match ctx.create_radial_gradient(x, y, 0.0, x, y, r) {
                        Ok(g) => {
                            _ = g.add_color_stop(0.0, &css_rgba(*color));
                            _ = g.add_color_stop(
                                1.0,
                                &css_rgba(Vec4::new(color.x, color.y, color.z, 0.0)),
                            );
                            ctx.set_fill_style_canvas_gradient(&g);
                        }
                        Err(_) => ctx.set_fill_style_str(&css_rgba(*color)),
                    }
                    ctx.begin_path();
                    _ = ctx.arc(x, y, r, 0.0, TAU);
                    ctx.fill();
                }
                DrawOp::Disc {
                    center,
                    radius,
                    color,
                } => {
                    ctx.set_fill_style_str(&css_rgba(*color));
                    ctx.begin_path();
                    _ = ctx.arc(
                        center.x as f64,
                        center.y as f64,
                        radius.max(0.3) as f64,
                        0.0,
                        TAU,
                    );
                    ctx.fill();
                }
                DrawOp::Label {
                    text,
                    origin,
                    size_px,
                    color,
                } => {
                    ctx.set_font(&format!("{}px ui-monospace, monospace", size_px));
                    ctx.set_fill_style_str(&css_rgba(*color));
                    _ = ctx.fill_text(text, origin.x as f64, origin.y as f64);
                }
                DrawOp::ProgressBar {
                    origin,
                    size,
                    fraction,
                    track,
                    fill,
                } => {
                    let (x, y) = (origin.x as f64, origin.y as f64);
                    let (w, h) = (size.x as f64, size.y as f64);
                    ctx.set_fill_style_str(&css_rgba(*track));
                    ctx.fill_rect(x, y, w, h);
                    ctx.set_fill_style_str(&css_rgba(*fill));
                    ctx.fill_rect(x, y, w * fraction.clamp(0.0, 1.0) as f64, h);
                }
            }
        }
    }
}
