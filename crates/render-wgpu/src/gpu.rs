use crate::display::{
    MSAA_SAMPLES, align_to, msaa_sample_count, resize_target, slot_capacity, surface_extent,
};
use crate::error::RenderError;
use crate::geometry::{QuadVertex, RectUniform, UNIT_QUAD};
use crate::shaders;
use laneswitch_common::{Color, DrawRect};
use laneswitch_render::RectRenderer;
use std::sync::Arc;
use wgpu::util::DeviceExt;
use winit::window::Window;

/// Uniform slots allocated up front; the scene needs seven per frame.
const INITIAL_RECT_SLOTS: u64 = 16;

/// Dynamic-offset uniform buffer holding one [`RectUniform`] per draw.
struct RectSlots {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    capacity: u64,
    stride: u64,
}

impl RectSlots {
    fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, capacity: u64) -> Self {
        let alignment = device.limits().min_uniform_buffer_offset_alignment as u64;
        let stride = align_to(RectUniform::SIZE, alignment);

        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("rect_uniform_buffer"),
            size: stride * capacity,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("rect_bind_group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(RectUniform::SIZE),
                }),
            }],
        });

        Self {
            buffer,
            bind_group,
            capacity,
            stride,
        }
    }
}

/// Draw commands recorded between `clear` and `present`.
#[derive(Default)]
struct FrameRecording {
    clear: Option<wgpu::Color>,
    rects: Vec<RectUniform>,
}

/// wgpu-based rect renderer.
///
/// Owns the surface, device, queue, the one pipeline and the shared quad for the
/// lifetime of the window. A frame is `clear`, any number of `draw_rect`, then
/// `present`.
pub struct WgpuRenderer {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    quad_buffer: wgpu::Buffer,
    slots: RectSlots,
    sample_count: u32,
    msaa_target: Option<wgpu::TextureView>,
    staging: Vec<u8>,
    frame: FrameRecording,
}

impl WgpuRenderer {
    /// Acquire a GPU surface for `window` and build the rect pipeline.
    ///
    /// Fails if no surface, adapter or device is available, or if the shader
    /// does not validate (the error carries the compiler diagnostic).
    pub fn new(window: Arc<Window>) -> Result<Self, RenderError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or(RenderError::NoAdapter)?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("laneswitch_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults()
                    .using_resolution(adapter.limits()),
                memory_hints: Default::default(),
            },
            None,
        ))?;

        let surface_caps = surface.get_capabilities(&adapter);
        // Colors are authored as final output values, so skip sRGB encoding.
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| !f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let (width, height) = window_extent(&window);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("rect_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: wgpu::BufferSize::new(RectUniform::SIZE),
                },
                count: None,
            }],
        });

        let format_flags = adapter.get_texture_format_features(surface_format).flags;
        let sample_count = msaa_sample_count(format_flags.sample_count_supported(MSAA_SAMPLES));

        let pipeline = create_pipeline(&device, &bind_group_layout, surface_format, sample_count)?;
        let msaa_target = create_msaa_target(&device, &config, sample_count);

        let quad_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("unit_quad_buffer"),
            contents: bytemuck::cast_slice(&UNIT_QUAD),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let slots = RectSlots::new(&device, &bind_group_layout, INITIAL_RECT_SLOTS);

        tracing::info!(
            backend = adapter.get_info().backend.to_str(),
            format = ?surface_format,
            sample_count,
            width,
            height,
            "GPU initialized"
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            bind_group_layout,
            quad_buffer,
            slots,
            sample_count,
            msaa_target,
            staging: Vec::new(),
            frame: FrameRecording::default(),
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Match the surface to the window's drawable size in physical pixels.
    ///
    /// Reconfigures only when the size changed. Returns whether it did.
    pub fn resize_to_display_size(&mut self) -> bool {
        let current = (self.config.width, self.config.height);
        let Some((width, height)) = resize_target(current, window_extent(&self.window)) else {
            return false;
        };
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.msaa_target = create_msaa_target(&self.device, &self.config, self.sample_count);
        tracing::debug!(width, height, "surface resized");
        true
    }

    /// Encode and submit the recorded frame, then present it.
    ///
    /// A lost or outdated surface is reconfigured and the frame dropped; other
    /// surface errors are logged and the frame dropped.
    pub fn present(&mut self) {
        let frame = std::mem::take(&mut self.frame);

        let output = match self.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::warn!("surface lost or outdated, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };

        let count = frame.rects.len() as u64;
        let capacity = slot_capacity(self.slots.capacity, count);
        if capacity != self.slots.capacity {
            tracing::debug!(capacity, "growing rect uniform slots");
            self.slots = RectSlots::new(&self.device, &self.bind_group_layout, capacity);
        }

        if count > 0 {
            let stride = self.slots.stride as usize;
            self.staging.clear();
            self.staging.resize(stride * frame.rects.len(), 0);
            for (i, rect) in frame.rects.iter().enumerate() {
                let start = i * stride;
                self.staging[start..start + RectUniform::SIZE as usize]
                    .copy_from_slice(bytemuck::bytes_of(rect));
            }
            self.queue.write_buffer(&self.slots.buffer, 0, &self.staging);
        }

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame_encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rect_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: self.msaa_target.as_ref().unwrap_or(&view),
                    resolve_target: self.msaa_target.as_ref().map(|_| &view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(frame.clear.unwrap_or(wgpu::Color::BLACK)),
                        store: if self.msaa_target.is_some() {
                            wgpu::StoreOp::Discard
                        } else {
                            wgpu::StoreOp::Store
                        },
                    },
                })],
                depth_stencil_attachment: None,
                ..Default::default()
            });

            pass.set_pipeline(&self.pipeline);
            pass.set_vertex_buffer(0, self.quad_buffer.slice(..));
            let vertex_count = UNIT_QUAD.len() as u32;
            for i in 0..count {
                let offset = (i * self.slots.stride) as wgpu::DynamicOffset;
                pass.set_bind_group(0, &self.slots.bind_group, &[offset]);
                pass.draw(0..vertex_count, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

impl RectRenderer for WgpuRenderer {
    fn clear(&mut self, color: Color) {
        self.frame.clear = Some(wgpu::Color {
            r: color.r() as f64,
            g: color.g() as f64,
            b: color.b() as f64,
            a: color.a() as f64,
        });
        self.frame.rects.clear();
    }

    fn draw_rect(&mut self, rect: &DrawRect) {
        self.frame.rects.push(RectUniform::from_rect(rect));
    }
}

fn window_extent(window: &Window) -> (u32, u32) {
    let size = window.inner_size();
    surface_extent(size.width, size.height)
}

/// Multisampled color target resolved into the surface texture each frame.
/// `None` when rendering single-sampled.
fn create_msaa_target(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    sample_count: u32,
) -> Option<wgpu::TextureView> {
    if sample_count <= 1 {
        return None;
    }
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("msaa_target"),
        size: wgpu::Extent3d {
            width: config.width,
            height: config.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count,
        dimension: wgpu::TextureDimension::D2,
        format: config.format,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    Some(texture.create_view(&Default::default()))
}

/// Build the single rect pipeline inside a validation error scope so shader
/// diagnostics come back as an error instead of a device panic.
fn create_pipeline(
    device: &wgpu::Device,
    bind_group_layout: &wgpu::BindGroupLayout,
    format: wgpu::TextureFormat,
    sample_count: u32,
) -> Result<wgpu::RenderPipeline, RenderError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);

    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("rect_shader"),
        source: wgpu::ShaderSource::Wgsl(shaders::RECT_SHADER.into()),
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("rect_pipeline_layout"),
        bind_group_layouts: &[bind_group_layout],
        push_constant_ranges: &[],
    });

    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("rect_pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some(shaders::VS_ENTRY),
            compilation_options: Default::default(),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<QuadVertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &wgpu::vertex_attr_array![0 => Float32x2],
            }],
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some(shaders::FS_ENTRY),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState {
            count: sample_count,
            ..Default::default()
        },
        multiview: None,
        cache: None,
    });

    if let Some(err) = pollster::block_on(device.pop_error_scope()) {
        tracing::error!("rect shader rejected: {err}");
        return Err(RenderError::Shader(err.to_string()));
    }
    Ok(pipeline)
}
