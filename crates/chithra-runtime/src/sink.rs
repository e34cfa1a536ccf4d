//! Renderer-facing output

use chithra_pose::Frame;

/// Consumer of one frame per tick
pub trait PoseSink {
    fn present(&mut self, frame: &Frame);
}

impl<F> PoseSink for F
where
    F: FnMut(&Frame),
{
    fn present(&mut self, frame: &Frame) {
        self(frame)
    }
}
