use std::mem;

use anyhow::{anyhow, Result};
use wgpu::util::DeviceExt;
use winit::{dpi::PhysicalSize, event::WindowEvent, window::Window};

use glam::Mat4;

use crate::config::{MAX_SPEED, MIN_SPEED};
use crate::input::WidgetOutput;
use crate::scene::{Color, Rect, Scene};

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct QuadVertex {
    corner: [f32; 2],
}

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct Instance {
    origin: [f32; 2],
    size: [f32; 2],
    color: [f32; 4],
}

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
}

/// Draws scene quads with one instanced pipeline, then the egui overlay on
/// top in the same pass.
pub struct Renderer<'a> {
    window: &'a Window,
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,

    quad_pipeline: wgpu::RenderPipeline,
    quad_vertex_buffer: wgpu::Buffer,
    quad_index_buffer: wgpu::Buffer,
    quad_index_count: u32,
    instance_buffer: wgpu::Buffer,
    globals_buffer: wgpu::Buffer,
    globals_bind: wgpu::BindGroup,

    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

impl<'a> Renderer<'a> {
    pub async fn new(window: &'a Window) -> Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow!("No suitable GPU adapters found"))?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: None,
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                },
                None,
            )
            .await?;

        // egui blends in gamma space, so prefer a non-sRGB swapchain
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow!("Surface reports no supported formats"))?;
        tracing::info!(?surface_format, width = size.width, height = size.height, "configured surface");

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        // Unit quad, scaled and placed per instance
        let quad_vertices = [
            QuadVertex { corner: [0.0, 0.0] },
            QuadVertex { corner: [1.0, 0.0] },
            QuadVertex { corner: [1.0, 1.0] },
            QuadVertex { corner: [0.0, 1.0] },
        ];
        let quad_indices: [u16; 6] = [0, 1, 2, 0, 2, 3];
        let quad_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("QuadVertexBuffer"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let quad_index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("QuadIndexBuffer"),
            contents: bytemuck::cast_slice(&quad_indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("InstanceBuffer"),
            size: 256 * mem::size_of::<Instance>() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Globals"),
            size: mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let globals_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("GlobalsLayout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let globals_bind = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("GlobalsBindGroup"),
            layout: &globals_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let bar_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("BarShader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("bar.wgsl").into()),
        });

        let quad_pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("QuadPipelineLayout"),
            bind_group_layouts: &[&globals_layout],
            push_constant_ranges: &[],
        });
        let quad_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("QuadPipeline"),
            layout: Some(&quad_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &bar_shader,
                entry_point: "vs_main",
                buffers: &[
                    wgpu::VertexBufferLayout {
                        array_stride: mem::size_of::<QuadVertex>() as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![0 => Float32x2],
                    },
                    wgpu::VertexBufferLayout {
                        array_stride: mem::size_of::<Instance>() as u64,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &wgpu::vertex_attr_array![1 => Float32x2, 2 => Float32x2, 3 => Float32x4],
                    },
                ],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &bar_shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let egui_ctx = egui::Context::default();
        egui_ctx.set_visuals(egui::Visuals::light());
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            Some(device.limits().max_texture_dimension_2d as usize),
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            size,
            quad_pipeline,
            quad_vertex_buffer,
            quad_index_buffer,
            quad_index_count: quad_indices.len() as u32,
            instance_buffer,
            globals_buffer,
            globals_bind,
            egui_ctx,
            egui_state,
            egui_renderer,
        })
    }

    /// Forward a window event to egui.
    pub fn on_window_event(&mut self, event: &WindowEvent) {
        let _ = self.egui_state.on_window_event(self.window, event);
    }

    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        self.size = size;
        self.config.width = size.width;
        self.config.height = size.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Draw one frame. `speed` seeds the slider; the returned output carries
    /// whatever the user changed this frame.
    pub fn render(&mut self, scene: &Scene, speed: f32) -> Result<WidgetOutput> {
        let mut widgets = WidgetOutput {
            speed,
            menu_pressed: false,
        };

        let raw_input = self.egui_state.take_egui_input(self.window);
        let full_output = self
            .egui_ctx
            .run(raw_input, |ctx| draw_overlay(ctx, scene, &mut widgets));
        self.egui_state
            .handle_platform_output(self.window, full_output.platform_output);
        let pixels_per_point = full_output.pixels_per_point;
        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, pixels_per_point);

        for (id, delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, delta);
        }

        let output = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost) => {
                self.resize(self.size);
                return Ok(widgets);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                return Err(anyhow!("Surface out of memory"));
            }
            Err(err) => {
                tracing::warn!(?err, "skipping frame");
                return Ok(widgets);
            }
        };

        let instances: Vec<Instance> = scene
            .quads
            .iter()
            .map(|quad| instance(quad.rect, quad.color))
            .collect();
        let required_bytes = instances.len() as u64 * mem::size_of::<Instance>() as u64;
        if required_bytes > self.instance_buffer.size() {
            self.instance_buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("InstanceBufferDynamic"),
                size: required_bytes.next_power_of_two(),
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
        }
        self.queue
            .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));

        // Scene coordinates are logical pixels with y pointing down
        let logical = self.size.to_logical::<f32>(self.window.scale_factor());
        let globals = Globals {
            view_proj: Mat4::orthographic_rh(0.0, logical.width, logical.height, 0.0, -1.0, 1.0)
                .to_cols_array_2d(),
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point,
        };

        let swap_view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some("FrameEncoder") });
        let egui_commands = self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("FramePass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &swap_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear_color(scene.background)),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            if !instances.is_empty() {
                render_pass.set_pipeline(&self.quad_pipeline);
                render_pass.set_bind_group(0, &self.globals_bind, &[]);
                render_pass.set_vertex_buffer(0, self.quad_vertex_buffer.slice(..));
                render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
                render_pass.set_index_buffer(self.quad_index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                render_pass.draw_indexed(0..self.quad_index_count, 0, 0..instances.len() as u32);
            }

            self.egui_renderer
                .render(&mut render_pass, &paint_jobs, &screen_descriptor);
        }

        self.queue.submit(
            egui_commands
                .into_iter()
                .chain(std::iter::once(encoder.finish())),
        );
        output.present();

        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
        Ok(widgets)
    }
}

fn instance(rect: Rect, color: Color) -> Instance {
    Instance {
        origin: [rect.x, rect.y],
        size: [rect.w, rect.h],
        color: color.to_array(),
    }
}

fn clear_color(color: Color) -> wgpu::Color {
    let [r, g, b, a] = color.to_array();
    wgpu::Color {
        r: f64::from(r),
        g: f64::from(g),
        b: f64::from(b),
        a: f64::from(a),
    }
}

fn color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

fn draw_overlay(ctx: &egui::Context, scene: &Scene, widgets: &mut WidgetOutput) {
    let center_x = ctx.screen_rect().center().x;
    let painter = ctx.layer_painter(egui::LayerId::background());
    for line in &scene.text {
        painter.text(
            egui::pos2(center_x, line.center_y),
            egui::Align2::CENTER_CENTER,
            &line.text,
            egui::FontId::proportional(line.size),
            color32(scene.text_color),
        );
    }

    let menu = scene.widgets.menu_button;
    egui::Area::new(egui::Id::new("menu_button"))
        .fixed_pos(egui::pos2(menu.x, menu.y))
        .show(ctx, |ui| {
            if ui.add_sized([menu.w, menu.h], egui::Button::new("Menu")).clicked() {
                widgets.menu_pressed = true;
            }
        });

    let Some(slider) = scene.widgets.speed_slider else {
        return;
    };
    egui::Area::new(egui::Id::new("speed_slider"))
        .fixed_pos(egui::pos2(slider.x, slider.y))
        .show(ctx, |ui| {
            ui.spacing_mut().slider_width = slider.w;
            ui.add(egui::Slider::new(&mut widgets.speed, MIN_SPEED..=MAX_SPEED).show_value(false));
        });
}
