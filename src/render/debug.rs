use super::helpers;
use cyl_core::{outline_lines, wireframe_lines, Bounds, LineVertex, SegmentMesh};
use wgpu::util::DeviceExt;

const LINE_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4];

/// Debug overlay: segment wireframes that turn with the assembly, plus the
/// bounding outline and origin marker that stay put.
pub(crate) struct DebugResources {
    pipeline: wgpu::RenderPipeline,
    wireframe: wgpu::Buffer,
    wireframe_count: u32,
    outline: wgpu::Buffer,
    outline_count: u32,
}

pub(crate) fn create_debug_resources(
    device: &wgpu::Device,
    scene_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
    meshes: &[SegmentMesh],
    bounds: &Bounds,
) -> DebugResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("debug_shader"),
        source: wgpu::ShaderSource::Wgsl(cyl_core::DEBUG_WGSL.into()),
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("debug_pl"),
        bind_group_layouts: &[scene_bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("debug_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_lines"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<LineVertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &LINE_ATTRIBUTES,
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::LineList,
            ..Default::default()
        },
        depth_stencil: Some(helpers::depth_state(false)),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_lines"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let wire = wireframe_lines(meshes);
    let wireframe = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("debug_wireframe"),
        contents: bytemuck::cast_slice(&wire),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let lines = outline_lines(bounds);
    let outline = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("debug_outline"),
        contents: bytemuck::cast_slice(&lines),
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
    });

    log::debug!(
        "[gpu] debug overlay: {} wireframe vertices, {} outline vertices",
        wire.len(),
        lines.len()
    );
    DebugResources {
        pipeline,
        wireframe,
        wireframe_count: wire.len() as u32,
        outline,
        outline_count: lines.len() as u32,
    }
}

impl DebugResources {
    /// Replace the outline after the camera has been refitted.
    pub(crate) fn set_bounds(&self, queue: &wgpu::Queue, bounds: &Bounds) {
        queue.write_buffer(&self.outline, 0, bytemuck::cast_slice(&outline_lines(bounds)));
    }

    pub(crate) fn draw(
        &self,
        rpass: &mut wgpu::RenderPass<'_>,
        scene_bg: &wgpu::BindGroup,
        world_bg: &wgpu::BindGroup,
    ) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, scene_bg, &[]);
        rpass.set_vertex_buffer(0, self.wireframe.slice(..));
        rpass.draw(0..self.wireframe_count, 0..1);
        rpass.set_bind_group(0, world_bg, &[]);
        rpass.set_vertex_buffer(0, self.outline.slice(..));
        rpass.draw(0..self.outline_count, 0..1);
    }
}
