use crate::camera::OrbitCamera;
use crate::shaders;
use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use nebula_field::ParticleField;
use nebula_scene::FrameState;
use wgpu::util::DeviceExt;

/// Scale factor mapping view-space depth to on-screen point size:
/// pixels = base size * (POINT_SCALE / -viewZ).
const POINT_SCALE: f32 = 300.0;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Uniforms {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    time: f32,
    point_scale: f32,
    viewport: [f32; 2],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct QuadVertex {
    corner: [f32; 2],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
struct ParticleInstance {
    position: [f32; 3],
    color: [f32; 3],
    size: f32,
}

/// Unit quad expanded per particle in the vertex stage (triangle strip).
fn quad_mesh() -> [QuadVertex; 4] {
    [
        QuadVertex { corner: [-0.5, -0.5] },
        QuadVertex { corner: [0.5, -0.5] },
        QuadVertex { corner: [-0.5, 0.5] },
        QuadVertex { corner: [0.5, 0.5] },
    ]
}

/// Pack the field's parallel buffers into per-instance records.
fn particle_instances(field: &ParticleField) -> Vec<ParticleInstance> {
    let positions = field.positions();
    let colors = field.colors();
    let sizes = field.sizes();

    (0..field.len())
        .map(|i| ParticleInstance {
            position: [positions[i * 3], positions[i * 3 + 1], positions[i * 3 + 2]],
            color: [colors[i * 3], colors[i * 3 + 1], colors[i * 3 + 2]],
            size: sizes[i],
        })
        .collect()
}

/// wgpu-based galaxy renderer.
///
/// The instance buffer is uploaded once from the immutable field; per-frame
/// work is one uniform write and one draw of the full field.
pub struct GalaxyRenderer {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    quad_vertex_buffer: wgpu::Buffer,
    instance_buffer: wgpu::Buffer,
    instance_count: u32,
    viewport: [f32; 2],
    surface_format: wgpu::TextureFormat,
}

impl GalaxyRenderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        field: &ParticleField,
    ) -> Self {
        // Uniform buffer
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("galaxy_uniform_buffer"),
            contents: bytemuck::bytes_of(&Uniforms {
                view: Mat4::IDENTITY.to_cols_array_2d(),
                proj: Mat4::IDENTITY.to_cols_array_2d(),
                model: Mat4::IDENTITY.to_cols_array_2d(),
                time: 0.0,
                point_scale: POINT_SCALE,
                viewport: [width.max(1) as f32, height.max(1) as f32],
            }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("galaxy_uniform_bind_group_layout"),
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

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("galaxy_uniform_bind_group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("galaxy_pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("galaxy_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::GALAXY_SHADER.into()),
        });

        // Additive blending, no depth test: overlap brightens, never occludes.
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("galaxy_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<QuadVertex>() as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![
                            0 => Float32x2,
                        ],
                    },
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<ParticleInstance>() as u64,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &wgpu::vertex_attr_array![
                            1 => Float32x3,
                            2 => Float32x3,
                            3 => Float32,
                        ],
                    },
                ],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState {
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
                    }),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        let quad_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("galaxy_quad_vertex_buffer"),
            contents: bytemuck::cast_slice(&quad_mesh()),
            usage: wgpu::BufferUsages::VERTEX,
        });

        // One-shot upload: the field never changes after generation.
        let instances = particle_instances(field);
        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("galaxy_instance_buffer"),
            contents: bytemuck::cast_slice(&instances),
            usage: wgpu::BufferUsages::VERTEX,
        });

        tracing::debug!(particles = instances.len(), "galaxy instance buffer uploaded");

        Self {
            pipeline,
            uniform_buffer,
            uniform_bind_group,
            quad_vertex_buffer,
            instance_buffer,
            instance_count: instances.len() as u32,
            viewport: [width.max(1) as f32, height.max(1) as f32],
            surface_format,
        }
    }

    /// Track the new surface size used for point-size conversion.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = [width.max(1) as f32, height.max(1) as f32];
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.surface_format
    }

    pub fn instance_count(&self) -> u32 {
        self.instance_count
    }

    /// Render one frame: clear to black, draw the full field once.
    pub fn render(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        view: &wgpu::TextureView,
        camera: &OrbitCamera,
        frame: &FrameState,
    ) {
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                view: camera.view_matrix().to_cols_array_2d(),
                proj: camera.projection_matrix().to_cols_array_2d(),
                model: Mat4::from_rotation_y(frame.rotation_angle).to_cols_array_2d(),
                time: frame.time_seconds,
                point_scale: POINT_SCALE,
                viewport: self.viewport,
            }),
        );

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("galaxy_encoder"),
        });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("galaxy_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                ..Default::default()
            });

            if self.instance_count > 0 {
                pass.set_pipeline(&self.pipeline);
                pass.set_bind_group(0, &self.uniform_bind_group, &[]);
                pass.set_vertex_buffer(0, self.quad_vertex_buffer.slice(..));
                pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
                pass.draw(0..4, 0..self.instance_count);
            }
        }

        queue.submit(std::iter::once(encoder.finish()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nebula_common::GalaxyConfig;

    #[test]
    fn uniforms_match_wgsl_layout() {
        // Three mat4x4 plus two f32 plus one vec2, 16-byte aligned.
        assert_eq!(std::mem::size_of::<Uniforms>(), 208);
        assert_eq!(std::mem::size_of::<Uniforms>() % 16, 0);
    }

    #[test]
    fn instance_packing_matches_field_buffers() {
        let config = GalaxyConfig {
            particle_count: 64,
            ..GalaxyConfig::default()
        };
        let field = ParticleField::generate(&config, 5);
        let instances = particle_instances(&field);
        assert_eq!(instances.len(), 64);
        for (i, inst) in instances.iter().enumerate() {
            assert_eq!(inst.position, field.position(i).to_array());
            assert_eq!(inst.color, field.color(i).to_array());
            assert_eq!(inst.size, field.size(i));
        }
    }

    #[test]
    fn instance_packing_empty_field() {
        let config = GalaxyConfig {
            particle_count: 0,
            ..GalaxyConfig::default()
        };
        let field = ParticleField::generate(&config, 5);
        assert!(particle_instances(&field).is_empty());
    }

    #[test]
    fn quad_spans_unit_square() {
        let quad = quad_mesh();
        for v in &quad {
            assert_eq!(v.corner[0].abs(), 0.5);
            assert_eq!(v.corner[1].abs(), 0.5);
        }
    }

    #[test]
    fn shader_declares_both_entry_points() {
        assert!(shaders::GALAXY_SHADER.contains("fn vs_main"));
        assert!(shaders::GALAXY_SHADER.contains("fn fs_main"));
        assert!(shaders::GALAXY_SHADER.contains("discard"));
    }
}
