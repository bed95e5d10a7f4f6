use crate::core::{Scene, Section, PARTICLE_SIZE, SCENE_WGSL};
use crate::dom;
use glam::{Mat4, Vec3};
use wasm_bindgen::JsCast;
use web_sys as web;

// ===================== Fixed cosmetic lighting / look =====================

// Page background 0x13151a, pushed toward linear for the sRGB surface.
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.006,
    g: 0.007,
    b: 0.011,
    a: 1.0,
};
const PANEL_OPACITY: f32 = 0.9;
const AMBIENT_INTENSITY: f32 = 0.5;
const DIRECTIONAL_INTENSITY: f32 = 1.0;
const LIGHT_POSITION: Vec3 = Vec3::new(5.0, 5.0, 5.0);
// 0x6b46c1 accent purple, rendered additively at 0.8 opacity.
const PARTICLE_COLOR: [f32; 4] = [0.42, 0.275, 0.757, 0.8];
const TEXT_TEXTURE_SIZE: u32 = 512;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct PanelUniforms {
    mvp: [[f32; 4]; 4],
    tint: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ParticleUniforms {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    color: [f32; 4],
    // x = world-space sprite half size, rest padding
    size: [f32; 4],
}

struct PanelGpu {
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    panel_pipeline: wgpu::RenderPipeline,
    particle_pipeline: wgpu::RenderPipeline,
    panels: Vec<PanelGpu>,
    particle_uniform_buffer: wgpu::Buffer,
    particle_instance_buffer: wgpu::Buffer,
    particle_bind_group: wgpu::BindGroup,
    particle_count: usize,

    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        particle_count: usize,
    ) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

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
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
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
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        // ---------------- Panel pipeline ----------------
        let panel_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("panel_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let panel_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("panel_pl"),
            bind_group_layouts: &[&panel_bgl],
            push_constant_ranges: &[],
        });
        let panel_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("panel_pipeline"),
            layout: Some(&panel_pl),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_panel"),
                buffers: &[],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_panel"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        // ---------------- Particle pipeline ----------------
        let particle_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("particle_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let particle_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("particle_pl"),
            bind_group_layouts: &[&particle_bgl],
            push_constant_ranges: &[],
        });
        let additive = wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::One,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
            alpha: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::One,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
        };
        let particle_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("particle_pipeline"),
            layout: Some(&particle_pl),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_particle"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: 12,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &[wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 0,
                    }],
                }],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_particle"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(additive),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        // ---------------- Per-panel resources ----------------
        let fallback_view = solid_texture(&device, &queue, [255, 255, 255, 230]);
        let mut panels = Vec::with_capacity(Section::ALL.len());
        for section in Section::ALL {
            let label = section.as_str().to_uppercase();
            let view = match create_text_texture(&device, &queue, &label) {
                Some(v) => v,
                None => {
                    // No 2D context: the panel renders untextured rather
                    // than failing construction.
                    log::warn!("[render] no 2d context for '{}', panel untextured", label);
                    fallback_view.clone()
                }
            };
            let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("panel_uniforms"),
                size: std::mem::size_of::<PanelUniforms>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("panel_bg"),
                layout: &panel_bgl,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniform_buffer.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::TextureView(&view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: wgpu::BindingResource::Sampler(&sampler),
                    },
                ],
            });
            panels.push(PanelGpu {
                uniform_buffer,
                bind_group,
            });
        }

        let particle_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("particle_uniforms"),
            size: std::mem::size_of::<ParticleUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let particle_instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("particle_instances"),
            size: (particle_count.max(1) * 12) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let particle_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("particle_bg"),
            layout: &particle_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: particle_uniform_buffer.as_entire_binding(),
            }],
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            panel_pipeline,
            particle_pipeline,
            panels,
            particle_uniform_buffer,
            particle_instance_buffer,
            particle_bind_group,
            particle_count,
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

    /// Draw the scene: additive particle field first, then the alpha-blended
    /// panels (no depth buffer; the fixed layout keeps panels in front).
    pub fn render(&mut self, scene: &Scene) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let proj = scene.camera.projection_matrix();
        let cam_view = scene.camera.view_matrix();

        let positions = scene.particles.positions();
        let count = positions.len().min(self.particle_count);
        if count > 0 {
            self.queue.write_buffer(
                &self.particle_instance_buffer,
                0,
                bytemuck::cast_slice(&positions[..count]),
            );
        }
        let pu = ParticleUniforms {
            view: cam_view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            model: scene.particles.model_matrix().to_cols_array_2d(),
            color: PARTICLE_COLOR,
            size: [PARTICLE_SIZE, 0.0, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.particle_uniform_buffer, 0, bytemuck::bytes_of(&pu));

        let half_w = scene.config.panel_width * 0.5;
        let half_h = scene.config.panel_height * 0.5;
        let light_dir = LIGHT_POSITION.normalize();
        for (panel, gpu) in scene.panels().iter().zip(self.panels.iter()) {
            let scale = panel.effective_scale();
            let model = Mat4::from_translation(panel.position)
                * Mat4::from_rotation_y(panel.yaw)
                * Mat4::from_scale(Vec3::new(half_w * scale.x, half_h * scale.y, 1.0));
            // Flat-quad lighting folded into the tint on the CPU side.
            let normal = Mat4::from_rotation_y(panel.yaw).transform_vector3(Vec3::Z);
            let lit = AMBIENT_INTENSITY + DIRECTIONAL_INTENSITY * normal.dot(light_dir).max(0.0);
            let u = PanelUniforms {
                mvp: (proj * cam_view * model).to_cols_array_2d(),
                tint: [lit, lit, lit, PANEL_OPACITY],
            };
            self.queue
                .write_buffer(&gpu.uniform_buffer, 0, bytemuck::bytes_of(&u));
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            if count > 0 {
                rpass.set_pipeline(&self.particle_pipeline);
                rpass.set_bind_group(0, &self.particle_bind_group, &[]);
                rpass.set_vertex_buffer(0, self.particle_instance_buffer.slice(..));
                rpass.draw(0..6, 0..count as u32);
            }
            rpass.set_pipeline(&self.panel_pipeline);
            for gpu in &self.panels {
                rpass.set_bind_group(0, &gpu.bind_group, &[]);
                rpass.draw(0..6, 0..1);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

// ===================== Text textures =====================

/// Render a label through an offscreen 2D canvas: gradient background, glow
/// text, accent border. Returns `None` when no 2D context is available; the
/// caller substitutes an untextured fallback.
fn create_text_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    text: &str,
) -> Option<wgpu::TextureView> {
    let size = TEXT_TEXTURE_SIZE;
    let document = dom::window_document()?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .ok()?
        .dyn_into()
        .ok()?;
    canvas.set_width(size);
    canvas.set_height(size);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into()
        .ok()?;

    let w = size as f64;
    let gradient = ctx.create_linear_gradient(0.0, 0.0, w, w);
    _ = gradient.add_color_stop(0.0, "#2a2a2a");
    _ = gradient.add_color_stop(1.0, "#1a1a1a");
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, w, w);

    ctx.set_shadow_color("#6b46c1");
    ctx.set_shadow_blur(25.0);
    ctx.set_fill_style_str("#ffffff");
    ctx.set_font("bold 64px Arial");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    _ = ctx.fill_text(text, w / 2.0, w / 2.0);

    ctx.set_stroke_style_str("#6b46c1");
    ctx.set_line_width(8.0);
    ctx.stroke_rect(10.0, 10.0, w - 20.0, w - 20.0);

    let image = ctx.get_image_data(0.0, 0.0, w, w).ok()?;
    let pixels = image.data();
    Some(upload_rgba(device, queue, text, size, size, &pixels))
}

fn solid_texture(device: &wgpu::Device, queue: &wgpu::Queue, rgba: [u8; 4]) -> wgpu::TextureView {
    upload_rgba(device, queue, "panel_fallback", 1, 1, &rgba)
}

fn upload_rgba(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    width: u32,
    height: u32,
    pixels: &[u8],
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * width),
            rows_per_image: Some(height),
        },
        wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
    );
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
