//! Fullscreen shockwave distortion pass.
//!
//! Each active shockwave redraws the previously rendered view through a
//! distortion shader parameterized by its normalized center and progress `t`.
//! `ViewTarget::post_process_write` hands out a distinct (source, destination)
//! texture pair and flips the pair after every call, so consecutive passes
//! compose: wave B distorts the image already distorted by wave A. Zero
//! active waves means zero passes and an untouched frame.

use bevy::core_pipeline::core_2d::graph::{Core2d, Node2d};
use bevy::prelude::*;
use bevy::render::{
    extract_component::{ExtractComponent, ExtractComponentPlugin},
    render_graph::{Node, NodeRunError, RenderGraph, RenderGraphContext, RenderLabel},
    render_resource::*,
    renderer::{RenderContext, RenderDevice},
    view::{ExtractedView, ViewTarget},
    Extract, ExtractSchedule, Render, RenderApp,
};
use bevy::window::PrimaryWindow;
use bytemuck::{Pod, Zeroable};

use crate::physics::shockwave::ShockwavePool;

/// Camera marker enabling the distortion chain.
#[derive(Component, Clone, Copy, ExtractComponent)]
pub struct ShockwaveDistortion;

/// Per-pass shader parameters. One uniform buffer per composed pass.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ShockwavePassParams {
    pub resolution: [f32; 2],
    /// Wave center in texture uv space (v grows downward).
    pub center: [f32; 2],
    /// The wave's progress `t`.
    pub strength: f32,
    pub _pad: [f32; 3],
}

/// Render-world copy of this frame's active waves, in pool slot order.
#[derive(Resource, Debug, Default)]
pub struct ExtractedShockwavePasses(pub Vec<ShockwavePassParams>);

/// Build the pass list for a frame: one entry per active wave.
pub fn build_passes(pool: &ShockwavePool, size: Vec2) -> Vec<ShockwavePassParams> {
    pool.active()
        .map(|wave| {
            let u = (wave.center.x + size.x * 0.5) / size.x;
            let v = 1.0 - (wave.center.y + size.y * 0.5) / size.y;
            ShockwavePassParams {
                resolution: size.into(),
                center: [u, v],
                strength: wave.t,
                _pad: [0.0; 3],
            }
        })
        .collect()
}

#[derive(Debug, Hash, PartialEq, Eq, Clone, RenderLabel)]
struct ShockwaveDistortionNodeLabel;

pub struct ShockwavePostPlugin;

impl Plugin for ShockwavePostPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(ExtractComponentPlugin::<ShockwaveDistortion>::default());

        let Some(render_app) = app.get_sub_app_mut(RenderApp) else {
            return;
        };

        render_app
            .init_resource::<ExtractedShockwavePasses>()
            .init_resource::<DistortionPipeline>()
            .add_systems(ExtractSchedule, extract_shockwave_passes)
            .add_systems(Render, prepare_distortion_pipeline);

        // Run after tonemapping so the distortion sees the final scene colors.
        {
            let mut render_graph = render_app.world_mut().resource_mut::<RenderGraph>();
            let graph_2d = render_graph
                .get_sub_graph_mut(Core2d)
                .expect("Core2d graph exists");
            graph_2d.add_node(ShockwaveDistortionNodeLabel, DistortionNode::default());
            let _ = graph_2d.add_node_edge(Node2d::Tonemapping, ShockwaveDistortionNodeLabel);
            let _ = graph_2d.add_node_edge(
                ShockwaveDistortionNodeLabel,
                Node2d::EndMainPassPostProcessing,
            );
        }
    }
}

fn extract_shockwave_passes(
    mut passes: ResMut<ExtractedShockwavePasses>,
    pool: Extract<Option<Res<ShockwavePool>>>,
    windows: Extract<Query<&Window, With<PrimaryWindow>>>,
) {
    passes.0.clear();
    if let (Some(pool), Ok(window)) = (pool.as_ref(), windows.single()) {
        passes.0 = build_passes(pool, Vec2::new(window.width(), window.height()));
    }
}

/// Pipeline resources prepared lazily once (render world).
#[derive(Resource, Default)]
struct DistortionPipeline {
    layout: Option<BindGroupLayout>,
    sampler: Option<Sampler>,
    pipeline_id: Option<CachedRenderPipelineId>,
    shader: Option<Handle<Shader>>,
}

fn prepare_distortion_pipeline(
    pipeline_cache: ResMut<PipelineCache>,
    mut pipe: ResMut<DistortionPipeline>,
    render_device: Res<RenderDevice>,
    asset_server: Res<AssetServer>,
) {
    if pipe.layout.is_none() {
        let layout = render_device.create_bind_group_layout(
            Some("shockwave.bind_group_layout"),
            &[
                BindGroupLayoutEntry {
                    binding: 0,
                    visibility: ShaderStages::FRAGMENT,
                    ty: BindingType::Texture {
                        multisampled: false,
                        view_dimension: TextureViewDimension::D2,
                        sample_type: TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                BindGroupLayoutEntry {
                    binding: 1,
                    visibility: ShaderStages::FRAGMENT,
                    ty: BindingType::Sampler(SamplerBindingType::Filtering),
                    count: None,
                },
                BindGroupLayoutEntry {
                    binding: 2,
                    visibility: ShaderStages::FRAGMENT,
                    ty: BindingType::Buffer {
                        ty: BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        );
        let sampler = render_device.create_sampler(&SamplerDescriptor {
            label: Some("shockwave.sampler"),
            mag_filter: FilterMode::Linear,
            min_filter: FilterMode::Linear,
            mipmap_filter: FilterMode::Nearest,
            ..Default::default()
        });
        pipe.layout = Some(layout);
        pipe.sampler = Some(sampler);
    }

    if pipe.shader.is_none() {
        pipe.shader = Some(asset_server.load("shaders/shockwave_distort.wgsl"));
    }

    if pipe.pipeline_id.is_none() {
        let shader_handle = pipe.shader.as_ref().unwrap().clone();
        let pipeline_descriptor = RenderPipelineDescriptor {
            label: Some("Shockwave Distortion Pipeline".into()),
            layout: vec![pipe.layout.as_ref().unwrap().clone()],
            vertex: VertexState {
                shader: shader_handle.clone(),
                entry_point: "vs".into(),
                shader_defs: vec![],
                buffers: vec![],
            },
            fragment: Some(FragmentState {
                shader: shader_handle,
                entry_point: "fs".into(),
                shader_defs: vec![],
                targets: vec![Some(ColorTargetState {
                    format: TextureFormat::bevy_default(),
                    blend: None,
                    write_mask: ColorWrites::ALL,
                })],
            }),
            primitive: PrimitiveState {
                topology: PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: MultisampleState::default(),
            push_constant_ranges: vec![],
            zero_initialize_workgroup_memory: false,
        };
        pipe.pipeline_id = Some(pipeline_cache.queue_render_pipeline(pipeline_descriptor));
    }
}

/// Render graph node composing one draw per active wave.
#[derive(Default)]
struct DistortionNode;

impl Node for DistortionNode {
    fn run(
        &self,
        _graph: &mut RenderGraphContext,
        render_context: &mut RenderContext,
        world: &World,
    ) -> Result<(), NodeRunError> {
        let Some(passes) = world.get_resource::<ExtractedShockwavePasses>() else {
            return Ok(());
        };
        if passes.0.is_empty() {
            return Ok(());
        }

        let pipeline_res = world.resource::<DistortionPipeline>();
        let Some(pipeline_id) = pipeline_res.pipeline_id else {
            return Ok(());
        };
        let pipeline_cache = world.resource::<PipelineCache>();
        let Some(render_pipeline) = pipeline_cache.get_render_pipeline(pipeline_id) else {
            return Ok(());
        };
        let (Some(layout), Some(sampler)) = (&pipeline_res.layout, &pipeline_res.sampler) else {
            return Ok(());
        };

        for entity_ref in world.iter_entities() {
            if entity_ref.get::<ShockwaveDistortion>().is_none() {
                continue;
            }
            if entity_ref.get::<ExtractedView>().is_none() {
                continue;
            }
            let Some(view_target) = entity_ref.get::<ViewTarget>() else {
                continue;
            };

            for params in &passes.0 {
                let post_process = view_target.post_process_write();

                let params_buffer =
                    render_context
                        .render_device()
                        .create_buffer_with_data(&BufferInitDescriptor {
                            label: Some("shockwave.params"),
                            contents: bytemuck::bytes_of(params),
                            usage: BufferUsages::UNIFORM,
                        });

                let bind_group = render_context.render_device().create_bind_group(
                    Some("shockwave.bind_group"),
                    layout,
                    &[
                        BindGroupEntry {
                            binding: 0,
                            resource: BindingResource::TextureView(post_process.source),
                        },
                        BindGroupEntry {
                            binding: 1,
                            resource: BindingResource::Sampler(sampler),
                        },
                        BindGroupEntry {
                            binding: 2,
                            resource: params_buffer.as_entire_binding(),
                        },
                    ],
                );

                let mut pass = render_context.begin_tracked_render_pass(RenderPassDescriptor {
                    label: Some("shockwave_distortion_pass"),
                    color_attachments: &[Some(RenderPassColorAttachment {
                        view: post_process.destination,
                        resolve_target: None,
                        ops: Operations {
                            load: LoadOp::Load,
                            store: StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    occlusion_query_set: None,
                    timestamp_writes: None,
                });
                pass.set_render_pipeline(render_pipeline);
                pass.set_bind_group(0, &bind_group, &[]);
                pass.draw(0..3, 0..1);
            }
        }
        Ok(())
    }
}
