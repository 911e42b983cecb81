// cli.rs - Command-line interface configuration
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::config::SceneConfig;
use crate::headless::InputScript;
use crate::loaders::ActorSource;
use crate::rig::MovementMode;

#[derive(Parser, Debug, Clone)]
#[command(name = "trail-walker")]
#[command(about = "Walk a hiker along a trail through forest, snow and a fireside camp", long_about = None)]
pub struct Cli {
    /// Movement mode at startup (P toggles while running)
    #[arg(long, value_enum, default_value = "path")]
    pub mode: MovementMode,

    /// glTF model for the actor; the procedural hiker is used when omitted
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// JSON scene config overriding the built-in trail
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Run without a window, writing JSON lines to stdout
    #[arg(long = "headless", default_value = "false")]
    pub headless: bool,

    /// Frames to simulate in headless mode when no script is given
    #[arg(long, default_value_t = 600)]
    pub ticks: u32,

    /// JSON input script for headless mode
    #[arg(long)]
    pub script: Option<PathBuf>,
}

impl Cli {
    pub fn scene_config(&self) -> Result<SceneConfig> {
        match &self.config {
            Some(path) => SceneConfig::load(path),
            None => Ok(SceneConfig::default()),
        }
    }

    pub fn input_script(&self) -> Result<InputScript> {
        match &self.script {
            Some(path) => InputScript::load(path),
            None => Ok(InputScript::hold_forward(self.ticks)),
        }
    }

    pub fn actor_source(&self) -> ActorSource {
        ActorSource::from_path(self.model.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["trail-walker"]);
        assert_eq!(cli.mode, MovementMode::FollowPath);
        assert!(!cli.headless);
        assert_eq!(cli.ticks, 600);
        assert_eq!(cli.actor_source(), ActorSource::Hiker);
        assert_eq!(cli.input_script().unwrap().frame_count(), 600);
    }

    #[test]
    fn test_free_mode_and_model() {
        let cli = Cli::parse_from([
            "trail-walker",
            "--mode",
            "free",
            "--model",
            "hiker.glb",
            "--headless",
            "--ticks",
            "10",
        ]);
        assert_eq!(cli.mode, MovementMode::FreeRoam);
        assert!(cli.headless);
        assert_eq!(cli.actor_source(), ActorSource::Model("hiker.glb".into()));
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["trail-walker", "--mode", "fly"]).is_err());
    }
}
