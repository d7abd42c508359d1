use std::path::{Path, PathBuf};

use anyhow::Result;

/// A hook invoked between embedding and extraction in a [`roundtrip`](super::roundtrip).
///
/// Implement this trait to move the watermarked file through whatever storage
/// or transport it will live in (an upload/download, a copy to another disk)
/// and check the watermark survives.
///
/// # Example
///
/// ```rust
/// use std::path::{Path, PathBuf};
/// use anyhow::Result;
/// use pixelmark::PipelineHook;
///
/// struct CopyHook(PathBuf);
///
/// impl PipelineHook for CopyHook {
///     fn after_embed(&self, marked_path: &Path) -> Result<PathBuf> {
///         std::fs::copy(marked_path, &self.0)?;
///         Ok(self.0.clone())
///     }
/// }
/// ```
pub trait PipelineHook {
    /// Called after the watermarked PNG is written. Return the path the
    /// extractor should read from.
    fn after_embed(&self, marked_path: &Path) -> Result<PathBuf>;
}

/// A no-op hook that passes the path through unchanged.
pub struct NoopHook;

impl PipelineHook for NoopHook {
    fn after_embed(&self, marked_path: &Path) -> Result<PathBuf> {
        Ok(marked_path.to_path_buf())
    }
}
