// This file is part of Particle Sandbox.
// Copyright (C) 2025 contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::core::system::system_order::{PostPhysicsAdjustSet, PrePhysicsSet};
use crate::gameplay::spawn::ParticleSpawnPlugin;
use crate::interaction::input::InputInteractionPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::physics::magnet::MagnetPlugin;
use crate::physics::rapier::PhysicsSetupPlugin;
use crate::physics::shockwave::ShockwavePlugin;
use crate::rendering::camera::CameraPlugin;
use crate::rendering::hud::HudPlugin;
use crate::rendering::particles::ParticleTintPlugin;
use crate::rendering::postprocess::ShockwavePostPlugin;

pub struct SandboxPlugin;

impl Plugin for SandboxPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (PrePhysicsSet, PostPhysicsAdjustSet.after(PrePhysicsSet)),
        )
        .add_plugins((
            CameraPlugin,
            PhysicsSetupPlugin,
            InputInteractionPlugin,
            ParticleSpawnPlugin,
            MagnetPlugin,
            ShockwavePlugin,
            ParticleTintPlugin,
            ShockwavePostPlugin,
            HudPlugin,
            AutoClosePlugin,
        ));
    }
}
