#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, RENDERER_ATTR, VARIANT_ATTR};
use instant::Instant;
use portfolio_core::cloud::pack_instances;
use portfolio_core::constants::{CLOUD_CANVAS_POINT_COUNT, CLOUD_POINT_COUNT};
use portfolio_core::{
    build_field, FieldShape, Scene, SceneConfig, ThemeController, Variant, Viewport,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod projects;
mod render;
mod theme;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Which drawing path the canvas asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Renderer {
    Gpu,
    Canvas,
}

impl Renderer {
    fn from_attr(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("gpu") => Renderer::Gpu,
            _ => Renderer::Canvas,
        }
    }
}

/// Build the GPU backend, or fall back to the canvas cloud when WebGPU is
/// unavailable.
async fn build_backend(
    canvas: &web::HtmlCanvasElement,
    renderer: Renderer,
    variant: Variant,
    seed: u64,
) -> anyhow::Result<(frame::Backend<'static>, SceneConfig)> {
    if renderer == Renderer::Gpu {
        let field = build_field(FieldShape::Grid, CLOUD_POINT_COUNT, seed);
        let instances = pack_instances(&field);
        if let Some(gpu) = frame::init_gpu(canvas, &instances).await {
            // Points live on the GPU; the scene only carries clock, input and theme.
            let config = SceneConfig {
                variant: Variant::Cloud,
                count: 0,
                seed,
            };
            return Ok((frame::Backend::Gpu(gpu), config));
        }
        log::warn!("[render] WebGPU unavailable; falling back to canvas cloud");
        let painter = render::CanvasPainter::new(canvas)?;
        let config = SceneConfig {
            variant: Variant::Cloud,
            count: CLOUD_CANVAS_POINT_COUNT,
            seed,
        };
        return Ok((frame::Backend::Canvas(painter), config));
    }
    let painter = render::CanvasPainter::new(canvas)?;
    Ok((
        frame::Backend::Canvas(painter),
        SceneConfig::for_variant(variant, seed),
    ))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Loader and project feed run once the page has loaded.
    {
        let load_window = window.clone();
        let load_document = document.clone();
        overlay::on_page_load(&window, &document, move || {
            overlay::schedule_reveal(&load_window);
            spawn_local(projects::load(load_window, load_document));
        });
    }

    let theme_ctl: theme::SharedTheme = Rc::new(RefCell::new(ThemeController::load(
        theme::LocalStorageStore::new(&window),
    )));
    theme::apply(&document, theme_ctl.borrow().theme());
    theme::wire_toggle(&document, theme_ctl.clone());

    let page_input = Rc::new(RefCell::new(input::PageInput {
        viewport: dom::window_size(&window),
        ..Default::default()
    }));
    events::wire_pointer(&window, page_input.clone());
    events::wire_scroll(&window, &document, page_input.clone());
    events::wire_nav_dots(&document);

    let Some(canvas_el) = document.get_element_by_id(CANVAS_ID) else {
        log::warn!("[init] #{} not found; backdrop disabled", CANVAS_ID);
        return Ok(());
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let renderer = Renderer::from_attr(canvas.get_attribute(RENDERER_ATTR).as_deref());
    let variant = Variant::from_attr(canvas.get_attribute(VARIANT_ATTR).as_deref());
    let seed: u64 = rand::random();
    let (backend, config) = build_backend(&canvas, renderer, variant, seed).await?;
    log::info!(
        "[init] renderer={:?} variant={:?} count={}",
        renderer,
        config.variant,
        config.count
    );

    let rect = canvas.get_bounding_client_rect();
    let mut scene = Scene::new(
        config,
        Viewport::new(rect.width() as f32, rect.height() as f32),
    );
    scene.set_theme(theme_ctl.borrow().theme());
    scene.snap_input(&page_input.borrow().frame_input());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        input: page_input,
        theme: theme_ctl,
        canvas,
        backend,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
