mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod hazards;
mod interaction;
mod level;
mod movement;
mod net;
mod presentation;

use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Hazard Run".to_string(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        level::LevelPlugin,
        movement::MovementPlugin,
        net::NetPlugin,
        interaction::InteractionPlugin,
        presentation::PresentationPlugin,
    ))
    .insert_resource(core::SessionConfig::from_env());

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
