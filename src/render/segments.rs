use super::helpers;
use cyl_core::{SegmentMesh, SegmentVertex};
use wgpu::util::DeviceExt;
use web_sys as web;

const SEGMENT_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];

struct SegmentDraw {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    bind_group: wgpu::BindGroup,
    _texture: wgpu::Texture,
}

/// Textured cylinder walls, one draw per segment.
pub(crate) struct SegmentResources {
    pipeline: wgpu::RenderPipeline,
    draws: Vec<SegmentDraw>,
}

pub(crate) fn create_segment_resources(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    scene_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
    meshes: &[SegmentMesh],
    images: &[web::HtmlImageElement],
    double_sided: bool,
) -> SegmentResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("segment_shader"),
        source: wgpu::ShaderSource::Wgsl(cyl_core::SEGMENT_WGSL.into()),
    });
    let texture_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("segment_texture_bgl"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("segment_pl"),
        bind_group_layouts: &[scene_bgl, &texture_bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("segment_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_segment"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<SegmentVertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &SEGMENT_ATTRIBUTES,
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: if double_sided {
                None
            } else {
                Some(wgpu::Face::Back)
            },
            ..Default::default()
        },
        depth_stencil: Some(helpers::depth_state(true)),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_segment"),
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
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("segment_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    });

    let draws = meshes
        .iter()
        .zip(images)
        .map(|(mesh, img)| {
            let (texture, view) =
                helpers::upload_image(device, queue, &format!("segment_tex_{}", mesh.index), img);
            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("segment_bg"),
                layout: &texture_bgl,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(&view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(&sampler),
                    },
                ],
            });
            let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("segment_vertices"),
                contents: bytemuck::cast_slice(&mesh.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
            let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("segment_indices"),
                contents: bytemuck::cast_slice(&mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            });
            SegmentDraw {
                vertex_buffer,
                index_buffer,
                index_count: mesh.indices.len() as u32,
                bind_group,
                _texture: texture,
            }
        })
        .collect();

    SegmentResources { pipeline, draws }
}

impl SegmentResources {
    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, scene_bg: &wgpu::BindGroup) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, scene_bg, &[]);
        for d in &self.draws {
            rpass.set_bind_group(1, &d.bind_group, &[]);
            rpass.set_vertex_buffer(0, d.vertex_buffer.slice(..));
            rpass.set_index_buffer(d.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..d.index_count, 0, 0..1);
        }
    }
}
