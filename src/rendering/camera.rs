use bevy::prelude::*;

use crate::rendering::postprocess::ShockwaveDistortion;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, ShockwaveDistortion));
}
