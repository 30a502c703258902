use portfolio_core::cloud::{cloud_model, cloud_view_proj};
use portfolio_core::constants::CLOUD_POINT_SCALE_PX;
use portfolio_core::{CloudInstance, PointsUniforms, Scene};
use web_sys as web;

mod canvas;
mod helpers;
mod points;

pub use canvas::CanvasPainter;
use points::{create_points_resources, PointsResources};

// ===================== WebGPU point cloud =====================

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    points: PointsResources,
    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        instances: &[CloudInstance],
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let points = create_points_resources(&device, format, instances);
        log::info!(
            "[gpu] surface {}x{} {:?}, {} points",
            width,
            height,
            format,
            points.instance_count
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            points,
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Re-apply the current configuration after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Draw the cloud for the scene's current clock, input and theme.
    /// `pixel_ratio` converts the CSS-pixel point scale to backing pixels.
    pub fn render(&mut self, scene: &Scene, pixel_ratio: f32) -> Result<(), wgpu::SurfaceError> {
        let palette = scene.theme().palette();
        let input = scene.input();
        let time = scene.elapsed() as f32;
        let mouse = input.mouse_ndc();
        let aspect = self.width as f32 / self.height.max(1) as f32;

        let uniforms = PointsUniforms {
            view_proj: cloud_view_proj(aspect).to_cols_array_2d(),
            model: cloud_model(time, mouse).to_cols_array_2d(),
            resolution: [self.width as f32, self.height as f32],
            time,
            progress: input.scroll().clamp(0.0, 1.0),
            mouse: mouse.to_array(),
            point_scale: CLOUD_POINT_SCALE_PX * pixel_ratio.max(1.0),
            _pad: 0.0,
            color: palette.particle.to_array(),
        };
        self.queue.write_buffer(
            &self.points.uniform_buffer,
            0,
            bytemuck::bytes_of(&uniforms),
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let bg = palette.background;
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("points_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: bg.x as f64,
                            g: bg.y as f64,
                            b: bg.z as f64,
                            a: bg.w as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            let pipeline = if palette.additive {
                &self.points.additive_pipeline
            } else {
                &self.points.normal_pipeline
            };
            rpass.set_pipeline(pipeline);
            rpass.set_bind_group(0, &self.points.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.points.instance_buffer.slice(..));
            rpass.draw(0..6, 0..self.points.instance_count);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
