pub mod bits;
pub mod buffer;
pub mod config;
pub mod imaging;
pub mod inspect;
pub mod integrity;
pub mod pipeline;
pub mod prng;
pub mod slots;
pub mod watermark;

pub use buffer::PixelBuffer;
pub use config::WatermarkConfig;
pub use pipeline::embed::embed_file;
pub use pipeline::extract::{detect_file, extract_file};
pub use pipeline::hook::{NoopHook, PipelineHook};
pub use pipeline::{roundtrip, RoundtripResult};
pub use watermark::{detect, embed, extract, verify, WatermarkError};
