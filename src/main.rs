use bevy::prelude::*;
use clap::Parser;

use particle_sandbox::{GameConfig, SandboxPlugin};

#[derive(Parser, Debug)]
#[command(about = "Interactive 2D particle sandbox")]
struct Cli {
    /// RON configuration file.
    #[arg(long, default_value = "assets/config/sandbox.ron")]
    config: String,
    /// Exit after this many seconds (overrides the config value).
    #[arg(long)]
    auto_close: Option<f32>,
}

fn main() {
    let cli = Cli::parse();

    let (mut cfg, load_err) = GameConfig::load_or_default(&cli.config);
    if let Some(err) = load_err {
        eprintln!("config fallback to defaults: {err}");
    }
    if let Some(secs) = cli.auto_close {
        cfg.window.auto_close = secs;
    }

    App::new()
        .insert_resource(cfg.clone())
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(SandboxPlugin)
        .run();
}
