use crate::dom;
use crate::input::PageInput;
use crate::render;
use crate::theme::SharedTheme;
use instant::Instant;
use portfolio_core::{Scene, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Where a frame ends up. The GPU path only needs the scene's clock, input
/// and theme; the canvas path replays the composed draw list.
pub enum Backend<'a> {
    Gpu(render::GpuState<'a>),
    Canvas(render::CanvasPainter),
}

pub struct FrameContext<'a> {
    pub scene: Scene,
    pub input: Rc<RefCell<PageInput>>,
    pub theme: SharedTheme,
    pub canvas: web::HtmlCanvasElement,
    pub backend: Backend<'a>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        dom::sync_canvas_backing_size(&self.canvas);
        let rect = self.canvas.get_bounding_client_rect();
        let (css_w, css_h) = (rect.width(), rect.height());
        self.scene
            .set_viewport(Viewport::new(css_w as f32, css_h as f32));
        self.scene.set_theme(self.theme.borrow().theme());

        let raw = self.input.borrow().frame_input();
        self.scene.tick(dt_sec, &raw);

        let pixel_ratio = if css_w > 0.0 {
            self.canvas.width() as f64 / css_w
        } else {
            1.0
        };
        match &mut self.backend {
            Backend::Gpu(gpu) => {
                gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
                match gpu.render(&self.scene, pixel_ratio as f32) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        log::warn!("[gpu] surface lost; reconfiguring");
                        gpu.reconfigure();
                    }
                    Err(e) => log::error!("[gpu] render error: {:?}", e),
                }
            }
            Backend::Canvas(painter) => {
                let frame = self.scene.compose();
                painter.paint(&frame, css_w, css_h, pixel_ratio);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    instances: &[portfolio_core::CloudInstance],
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, instances).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
