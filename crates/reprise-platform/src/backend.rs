use std::io::Write;

use reprise_core::{Frame, RenderBackend, RuntimeError, SceneNode};
use reprise_ui::HEADING_FONT;

/// Writes each frame as plain text: headings prefixed with `#`, buttons in
/// brackets, messages prefixed with `~`.
pub struct TextBackend<W: Write> {
    out: W,
    size: (u32, u32),
}

impl<W: Write> TextBackend<W> {
    pub fn new(out: W) -> Self {
        Self { out, size: (0, 0) }
    }
}

impl<W: Write> RenderBackend for TextBackend<W> {
    fn configure_surface(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    fn frame(&mut self, frame: &Frame) -> Result<(), RuntimeError> {
        writeln!(
            self.out,
            "--- frame {} ({}x{}) ---",
            frame.number, self.size.0, self.size.1
        )?;
        for node in &frame.scene.nodes {
            match node {
                SceneNode::Text { text, size, .. } if *size >= HEADING_FONT => {
                    writeln!(self.out, "# {text}")?
                }
                SceneNode::Text { text, .. } => writeln!(self.out, "{text}")?,
                SceneNode::Button {
                    text,
                    enabled: true,
                    ..
                } => writeln!(self.out, "[ {text} ]")?,
                SceneNode::Button { text, .. } => writeln!(self.out, "[ {text} ] (disabled)")?,
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn message(&mut self, text: &str) -> Result<(), RuntimeError> {
        writeln!(self.out, "~ {text}")?;
        Ok(())
    }
}

/// Writes one JSON object per line. Frames carry their scene nodes and the
/// flattened semantics tree.
pub struct JsonBackend<W: Write> {
    out: W,
    size: (u32, u32),
}

impl<W: Write> JsonBackend<W> {
    pub fn new(out: W) -> Self {
        Self { out, size: (0, 0) }
    }
}

impl<W: Write> RenderBackend for JsonBackend<W> {
    fn configure_surface(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    fn frame(&mut self, frame: &Frame) -> Result<(), RuntimeError> {
        let value = serde_json::json!({
            "frame": frame.number,
            "size": [self.size.0, self.size.1],
            "nodes": frame.scene.nodes,
            "semantics": frame.semantics_nodes,
        });
        serde_json::to_writer(&mut self.out, &value).map_err(std::io::Error::from)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    fn message(&mut self, text: &str) -> Result<(), RuntimeError> {
        let value = serde_json::json!({ "message": text });
        serde_json::to_writer(&mut self.out, &value).map_err(std::io::Error::from)?;
        writeln!(self.out)?;
        Ok(())
    }
}
