//! Minimal HUD: frame/particle stats overlay plus the inverse-shockwave checkbox.

use bevy::prelude::*;

use crate::core::components::Particle;
use crate::core::system::system_order::PostPhysicsAdjustSet;
use crate::interaction::input::{InverseShockwave, UiHover};

#[derive(Component)]
struct StatsOverlayText;

#[derive(Component)]
struct InverseCheckbox;

/// Exponentially smoothed frame stats, updated once per frame.
#[derive(Resource, Default)]
struct FrameStats {
    fps: f32,
}

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameStats>()
            .add_systems(Startup, spawn_hud)
            .add_systems(
                Update,
                (update_stats_overlay, checkbox_interact, track_ui_hover, paint_checkbox)
                    .in_set(PostPhysicsAdjustSet),
            );
    }
}

fn spawn_hud(mut commands: Commands) {
    // Top-left stats text.
    commands.spawn((
        Text::new(String::new()),
        TextFont {
            font_size: 14.0,
            ..Default::default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(4.0),
            left: Val::Px(6.0),
            ..Default::default()
        },
        StatsOverlayText,
    ));

    // Top-right checkbox toggling contracting shockwaves.
    commands.spawn((
        Button,
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            right: Val::Px(150.0),
            width: Val::Px(20.0),
            height: Val::Px(20.0),
            border: UiRect::all(Val::Px(2.0)),
            ..Default::default()
        },
        BorderColor(Color::WHITE),
        BackgroundColor(Color::NONE),
        InverseCheckbox,
    ));
    commands.spawn((
        Text::new("Inverse shockwave"),
        TextFont {
            font_size: 13.0,
            ..Default::default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            right: Val::Px(10.0),
            ..Default::default()
        },
    ));
}

fn update_stats_overlay(
    time: Res<Time>,
    mut stats: ResMut<FrameStats>,
    q_particles: Query<(), With<Particle>>,
    mut q_text: Query<&mut Text, With<StatsOverlayText>>,
) {
    let dt = time.delta_secs().max(1e-6);
    let inst_fps = 1.0 / dt;
    stats.fps = if stats.fps == 0.0 {
        inst_fps
    } else {
        stats.fps * 0.9 + inst_fps * 0.1
    };
    if let Ok(mut text) = q_text.single_mut() {
        text.0 = format!(
            "FPS: {:.0}\nParticles: {}",
            stats.fps,
            q_particles.iter().count()
        );
    }
}

fn checkbox_interact(
    q_btn: Query<&Interaction, (Changed<Interaction>, With<InverseCheckbox>)>,
    mut inverse: ResMut<InverseShockwave>,
) {
    for interaction in &q_btn {
        if *interaction == Interaction::Pressed {
            inverse.0 = !inverse.0;
            info!(
                "inverse shockwave {}",
                if inverse.0 { "enabled" } else { "disabled" }
            );
        }
    }
}

/// Pointer-over-widget state consumed by the spawn input path.
fn track_ui_hover(q_btn: Query<&Interaction, With<Button>>, mut hover: ResMut<UiHover>) {
    hover.0 = q_btn.iter().any(|i| *i != Interaction::None);
}

fn paint_checkbox(
    inverse: Res<InverseShockwave>,
    mut q_btn: Query<&mut BackgroundColor, With<InverseCheckbox>>,
) {
    if !inverse.is_changed() {
        return;
    }
    for mut bg in q_btn.iter_mut() {
        *bg = if inverse.0 {
            BackgroundColor(Color::srgb(0.9, 0.4, 0.2))
        } else {
            BackgroundColor(Color::NONE)
        };
    }
}
