use bevy::prelude::*;
use rand::Rng;

use crate::core::config::GameConfig;
use crate::core::system::system_order::PrePhysicsSet;
use crate::physics::magnet::CursorMagnet;
use crate::physics::shockwave::ShockwavePool;

/// Cursor position in world coordinates, refreshed every frame.
/// `None` while the pointer is outside the window.
#[derive(Resource, Debug, Default)]
pub struct PointerWorld(pub Option<Vec2>);

/// True while the pointer is over a UI widget; left-click spawning is
/// suppressed so widget interaction does not rain particles.
#[derive(Resource, Debug, Default)]
pub struct UiHover(pub bool);

/// Selects contracting shockwaves; driven by the HUD checkbox.
#[derive(Resource, Debug, Default)]
pub struct InverseShockwave(pub bool);

/// Request to spawn one particle at a world position (jitter already applied).
#[derive(Event, Debug)]
pub struct SpawnRequest {
    pub position: Vec2,
}

/// Everything that turns raw input into requests, pool slots, and toggles.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputCaptureSet;

pub struct InputInteractionPlugin;

impl Plugin for InputInteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerWorld>()
            .init_resource::<UiHover>()
            .init_resource::<InverseShockwave>()
            .add_event::<SpawnRequest>()
            .configure_sets(Update, InputCaptureSet.in_set(PrePhysicsSet))
            .add_systems(
                Update,
                (
                    track_pointer_world,
                    emit_spawn_requests,
                    trigger_shockwaves,
                    toggle_magnet,
                )
                    .chain()
                    .in_set(InputCaptureSet),
            );
    }
}

fn cursor_world_pos(
    camera_q: &Query<(&Camera, &GlobalTransform)>,
    screen_pos: Vec2,
) -> Option<Vec2> {
    let (camera, cam_tf) = camera_q.iter().next()?;
    camera.viewport_to_world_2d(cam_tf, screen_pos).ok()
}

pub fn track_pointer_world(
    windows_q: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    mut pointer: ResMut<PointerWorld>,
) {
    let Ok(window) = windows_q.single() else {
        pointer.0 = None;
        return;
    };
    pointer.0 = window
        .cursor_position()
        .and_then(|pos| cursor_world_pos(&camera_q, pos));
}

/// Left mouse held: one spawn request per frame at a jittered cursor position.
pub fn emit_spawn_requests(
    buttons: Res<ButtonInput<MouseButton>>,
    pointer: Res<PointerWorld>,
    ui_hover: Res<UiHover>,
    mut requests: EventWriter<SpawnRequest>,
    cfg: Res<GameConfig>,
) {
    if !buttons.pressed(MouseButton::Left) || ui_hover.0 {
        return;
    }
    let Some(cursor) = pointer.0 else {
        return;
    };
    let jitter = cfg.particles.spawn_jitter;
    let mut rng = rand::thread_rng();
    let offset = Vec2::new(
        rng.gen_range(-jitter..=jitter),
        rng.gen_range(-jitter..=jitter),
    );
    requests.write(SpawnRequest {
        position: cursor + offset,
    });
}

/// Right mouse press: claim a free pool slot at the cursor.
fn trigger_shockwaves(
    buttons: Res<ButtonInput<MouseButton>>,
    pointer: Res<PointerWorld>,
    inverse: Res<InverseShockwave>,
    mut pool: ResMut<ShockwavePool>,
) {
    if !buttons.just_pressed(MouseButton::Right) {
        return;
    }
    let Some(cursor) = pointer.0 else {
        return;
    };
    if pool.activate(cursor, inverse.0).is_none() {
        debug!("shockwave pool full; request dropped");
    }
}

fn toggle_magnet(keys: Res<ButtonInput<KeyCode>>, mut magnet: ResMut<CursorMagnet>) {
    if keys.just_pressed(KeyCode::KeyC) {
        magnet.enabled = !magnet.enabled;
        info!(
            "cursor magnet {}",
            if magnet.enabled { "on" } else { "off" }
        );
    }
}
