use cyl_core::constants::CAMERA_FIT_OFFSET;
use cyl_core::{assembly_bounds, Bounds, Camera, CarouselConfig, SegmentMesh};
use glam::Mat4;
use web_sys as web;

mod debug;
mod helpers;
mod segments;

use debug::{create_debug_resources, DebugResources};
use segments::{create_segment_resources, SegmentResources};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    mvp: [[f32; 4]; 4],
}

struct UniformSlot {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl UniformSlot {
    fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, label: &str) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });
        Self { buffer, bind_group }
    }

    fn write(&self, queue: &wgpu::Queue, mvp: Mat4) {
        let u = SceneUniforms {
            mvp: mvp.to_cols_array_2d(),
        };
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(&u));
    }
}

/// WebGPU state for one carousel canvas.
///
/// Built once the image join has succeeded; segment geometry and textures are
/// immutable afterwards. Only the camera and the per-frame rotation change.
pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    _depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,
    // view-projection times the assembly rotation
    scene: UniformSlot,
    // view-projection only
    world: UniformSlot,
    segments: SegmentResources,
    debug: Option<DebugResources>,
    meshes: Vec<SegmentMesh>,
    camera: Camera,
    clear_color: wgpu::Color,
    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        images: &[web::HtmlImageElement],
        meshes: Vec<SegmentMesh>,
        settings: &CarouselConfig,
        rotation: f32,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
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
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
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
        log::info!(
            "[gpu] surface {}x{} format={:?} alpha={:?}",
            width,
            height,
            format,
            alpha_mode
        );

        let (depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);
        let scene_bgl = helpers::uniform_layout(&device);
        let scene = UniformSlot::new(&device, &scene_bgl, "scene_uniforms");
        let world = UniformSlot::new(&device, &scene_bgl, "world_uniforms");

        let segments = create_segment_resources(
            &device,
            &queue,
            &scene_bgl,
            format,
            &meshes,
            images,
            settings.debug_overlay,
        );

        let mut camera = Camera::new(width as f32 / height as f32);
        let bounds = fit_camera(&mut camera, &meshes, rotation);
        let debug = match (settings.debug_overlay, bounds) {
            (true, Some(b)) => Some(create_debug_resources(
                &device, &scene_bgl, format, &meshes, &b,
            )),
            _ => None,
        };

        let [r, g, b, a] = settings.clear_rgba();
        Ok(Self {
            surface,
            device,
            queue,
            config,
            _depth_tex: depth_tex,
            depth_view,
            scene,
            world,
            segments,
            debug,
            meshes,
            camera,
            clear_color: wgpu::Color { r, g, b, a },
            width,
            height,
        })
    }

    /// Reconfigure for a new backing size and refit the camera around the
    /// assembly as it currently stands.
    pub fn resize_if_needed(&mut self, width: u32, height: u32, rotation: f32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            (self._depth_tex, self.depth_view) =
                helpers::create_depth_texture(&self.device, width, height);
            self.camera.set_aspect(width, height);
            if let Some(b) = fit_camera(&mut self.camera, &self.meshes, rotation) {
                if let Some(d) = &self.debug {
                    d.set_bounds(&self.queue, &b);
                }
            }
        }
    }

    /// Reapply the current configuration after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, rotation: f32) -> Result<(), wgpu::SurfaceError> {
        let view_proj = self.camera.view_projection();
        self.scene
            .write(&self.queue, view_proj * Mat4::from_rotation_y(rotation));
        self.world.write(&self.queue, view_proj);

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
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("carousel_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.segments.draw(&mut rpass, &self.scene.bind_group);
            if let Some(d) = &self.debug {
                d.draw(&mut rpass, &self.scene.bind_group, &self.world.bind_group);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn fit_camera(camera: &mut Camera, meshes: &[SegmentMesh], rotation: f32) -> Option<Bounds> {
    let bounds = assembly_bounds(meshes, rotation)?;
    camera.fit_to_bounds(&bounds, CAMERA_FIT_OFFSET);
    log::debug!(
        "[gpu] camera fit: eye z={:.3} far={:.3} size=({:.3},{:.3},{:.3})",
        camera.eye.z,
        camera.zfar,
        bounds.size().x,
        bounds.size().y,
        bounds.size().z
    );
    Some(bounds)
}
