use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("icon size must be positive, got {0}")]
    InvalidSize(u32),

    #[error("failed to allocate {size}x{size} canvas")]
    CanvasAllocation { size: u32 },

    #[error("degenerate {kind} shape cannot be filled")]
    DegenerateShape { kind: &'static str },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to render {size}x{size} icon")]
    Render {
        size: u32,
        #[source]
        source: RenderError,
    },

    #[error("failed to encode {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: png::EncodingError,
    },

    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to report progress")]
    Report(#[source] std::io::Error),
}
