pub mod spread;

use storybook_core::render::Screen;

use crate::platform::frame::FrameBuffer;

pub trait FrameRenderer {
    fn render(&mut self, screen: Screen<'_>, frame: &mut FrameBuffer);
}
