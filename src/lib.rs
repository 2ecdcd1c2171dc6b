//! # pixel_hide 库
//!
//! 本库包含像素级隐写工具的核心逻辑：
//! [`steganography`] 中的四种编解码器只处理内存中的 [`PixelImage`]，
//! [`raster`] 负责与图像文件互相转换，[`cli`] 与 [`handler`] 构成命令行外壳。

// 声明库包含的所有模块。

pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod pixel;
pub mod raster;
pub mod steganography;

pub use error::CodecError;
pub use pixel::PixelImage;
