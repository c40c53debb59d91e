use crate::{Frame, error::RuntimeError};

/// Consumes finished frames. The headless runner drives one of these after
/// every composition.
pub trait RenderBackend {
    fn configure_surface(&mut self, width: u32, height: u32);
    fn frame(&mut self, frame: &Frame) -> Result<(), RuntimeError>;
    /// Out-of-band notes interleaved with frames (stats, ignored input).
    fn message(&mut self, _text: &str) -> Result<(), RuntimeError> {
        Ok(())
    }
}
