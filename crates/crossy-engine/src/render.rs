//! Renderer collaborator interface and a plain-text implementation.

use std::io::{self, Write};

use crossy_core::WorldView;
use crossy_obs::{encode, EncodeSpec};

/// Something that draws a world frame by frame.
///
/// Renderers only get read access to the world; they never influence the
/// simulation.
pub trait Renderer {
    /// Draw one frame of `world`.
    fn render(&mut self, world: &dyn WorldView) -> io::Result<()>;

    /// Release any resources held by the renderer.
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writes each frame as glyph rows followed by a blank line.
///
/// Glyphs are those of [`CellKind::glyph`](crossy_core::CellKind::glyph).
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    out: W,
    spec: EncodeSpec,
    frames: u64,
}

impl<W: Write> TextRenderer<W> {
    /// Render into `out` with the given layer options.
    pub fn new(out: W, spec: EncodeSpec) -> Self {
        Self {
            out,
            spec,
            frames: 0,
        }
    }

    /// Number of frames written so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, world: &dyn WorldView) -> io::Result<()> {
        let obs = encode(world, &self.spec);
        writeln!(self.out, "{obs}")?;
        writeln!(self.out)?;
        self.frames += 1;
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossy_core::Heading;
    use crossy_test_utils::MockWorld;

    #[test]
    fn text_frame_has_one_line_per_row() {
        let world = MockWorld::new(4, 3).with_log(0, 1, Heading::Right);
        let spec = EncodeSpec {
            paint_roads: false,
            paint_rocks: false,
        };
        let mut r = TextRenderer::new(Vec::new(), spec);
        r.render(&world).unwrap();
        r.close().unwrap();
        assert_eq!(r.frames(), 1);
        let text = String::from_utf8(r.into_inner()).unwrap();
        assert_eq!(text, "....\n===~\n..@.\n\n");
    }
}
