use super::helpers::{make_points_pipeline, ADDITIVE_BLENDING};
use portfolio_core::{CloudInstance, PointsUniforms};
use wgpu::util::DeviceExt;

pub(crate) struct PointsResources {
    pub(crate) additive_pipeline: wgpu::RenderPipeline,
    pub(crate) normal_pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) instance_buffer: wgpu::Buffer,
    pub(crate) instance_count: u32,
}

pub(crate) fn create_points_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    instances: &[CloudInstance],
) -> PointsResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("points_shader"),
        source: wgpu::ShaderSource::Wgsl(portfolio_core::POINTS_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("points_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("points_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let additive_pipeline = make_points_pipeline(
        device,
        "points_additive",
        &pl,
        &shader,
        color_format,
        ADDITIVE_BLENDING,
    );
    let normal_pipeline = make_points_pipeline(
        device,
        "points_normal",
        &pl,
        &shader,
        color_format,
        wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING,
    );
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("points_uniforms"),
        size: std::mem::size_of::<PointsUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("points_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });
    let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("points_instances"),
        contents: bytemuck::cast_slice(instances),
        usage: wgpu::BufferUsages::VERTEX,
    });

    PointsResources {
        additive_pipeline,
        normal_pipeline,
        uniform_buffer,
        bind_group,
        instance_buffer,
        instance_count: instances.len() as u32,
    }
}
