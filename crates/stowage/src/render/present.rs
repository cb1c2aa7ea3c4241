//! Presentation capability for rendered frames.
//!
//! The render pipeline ends in a [`Presenter`] instead of a blocking
//! show-window call, so composition and geometry stay testable without a
//! display surface. This crate ships the headless variants: file export and
//! an in-memory buffer. A windowed presenter is an embedder concern and
//! lives behind the same trait.

use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameFormat {
    Svg,
    Png,
    Jpeg,
}

impl FrameFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }
}

/// One fully rendered frame, ready to hand to a presenter.
#[derive(Debug, Clone)]
pub struct Frame {
    pub format: FrameFormat,
    pub bytes: Vec<u8>,
}

impl Frame {
    pub fn svg(text: String) -> Self {
        Self {
            format: FrameFormat::Svg,
            bytes: text.into_bytes(),
        }
    }

    pub fn png(bytes: Vec<u8>) -> Self {
        Self {
            format: FrameFormat::Png,
            bytes,
        }
    }

    pub fn jpeg(bytes: Vec<u8>) -> Self {
        Self {
            format: FrameFormat::Jpeg,
            bytes,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PresentError {
    #[error("failed to write frame: {0}")]
    Io(#[from] std::io::Error),
}

/// Terminal step of one render pass.
///
/// `present` consumes the frame for this pass; a presenter may be reused
/// across passes but never sees two passes interleaved.
pub trait Presenter {
    fn present(&mut self, frame: Frame) -> Result<(), PresentError>;
}

/// Headless export: writes each presented frame to a fixed path.
#[derive(Debug, Clone)]
pub struct FilePresenter {
    path: PathBuf,
}

impl FilePresenter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Presenter for FilePresenter {
    fn present(&mut self, frame: Frame) -> Result<(), PresentError> {
        fs::write(&self.path, &frame.bytes)?;
        tracing::debug!(path = %self.path.display(), bytes = frame.bytes.len(), "frame exported");
        Ok(())
    }
}

/// In-memory capture, for tests and embedding.
#[derive(Debug, Default)]
pub struct BufferPresenter {
    frames: Vec<Frame>,
}

impl BufferPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn take(&mut self) -> Vec<Frame> {
        std::mem::take(&mut self.frames)
    }
}

impl Presenter for BufferPresenter {
    fn present(&mut self, frame: Frame) -> Result<(), PresentError> {
        self.frames.push(frame);
        Ok(())
    }
}
