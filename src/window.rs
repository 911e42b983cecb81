use anyhow::Result;
use std::sync::Arc;
use winit::window::Window as WinitWindow;

use crate::core::RenderSink;
use crate::loaders::ActorModel;
use crate::types::{FrameUniform, StagedScene};

const TITLE: &str = "Trail Walker";

/// Wrapper around the winit window; reports walk state in the title bar
pub struct Window {
    inner: Arc<WinitWindow>,
    last_title: String,
}

impl Window {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self {
            inner: window,
            last_title: String::new(),
        }
    }

    pub fn request_redraw(&self) {
        self.inner.request_redraw();
    }

    fn set_title(&mut self, title: String) {
        if title != self.last_title {
            self.inner.set_title(&title);
            self.last_title = title;
        }
    }
}

/// Title text for a frame; changes only when the visible percentage or mode does
pub fn frame_title(frame: &FrameUniform) -> String {
    let mode = if frame.mode == 0 { "trail" } else { "free roam" };
    format!("{TITLE} - {mode} - {:.0}%", frame.progress * 100.0)
}

impl RenderSink for Window {
    fn stage(&mut self, scene: &StagedScene) -> Result<()> {
        log::info!(
            "Staged {} trees, {} lights",
            scene.count("trunk"),
            scene.lights.len()
        );
        self.set_title(format!("{TITLE} - loading"));
        Ok(())
    }

    fn actor_ready(&mut self, actor: &ActorModel) -> Result<()> {
        self.set_title(format!("{TITLE} - {}", actor.name));
        Ok(())
    }

    fn submit(&mut self, frame: &FrameUniform) -> Result<()> {
        self.set_title(frame_title(frame));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_title() {
        let frame = FrameUniform {
            progress: 0.426,
            mode: 1,
            ..bytemuck::Zeroable::zeroed()
        };
        assert_eq!(frame_title(&frame), "Trail Walker - free roam - 43%");
    }
}
