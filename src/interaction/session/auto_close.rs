use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::core::system::system_order::PostPhysicsAdjustSet;

/// Optional session time limit; `None` when the config leaves auto_close at 0.
#[derive(Resource, Debug, Default)]
pub struct SessionDeadline(pub Option<Timer>);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SessionDeadline>()
            .add_systems(Startup, arm_deadline)
            .add_systems(Update, check_deadline.in_set(PostPhysicsAdjustSet));
    }
}

fn arm_deadline(cfg: Res<GameConfig>, mut deadline: ResMut<SessionDeadline>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!("session will close after {secs} seconds");
        deadline.0 = Some(Timer::from_seconds(secs, TimerMode::Once));
    }
}

fn check_deadline(
    time: Res<Time>,
    mut deadline: ResMut<SessionDeadline>,
    mut ev_exit: EventWriter<AppExit>,
) {
    if let Some(timer) = deadline.0.as_mut() {
        if timer.tick(time.delta()).finished() {
            info!("session deadline reached, exiting");
            ev_exit.write(AppExit::Success);
        }
    }
}
