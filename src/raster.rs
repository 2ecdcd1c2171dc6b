//! # 光栅图像读写模块
//!
//! 通过 `image` crate 在图像文件和 [`PixelImage`] 之间转换。
//! 只接受无损格式：有损压缩会破坏所有隐写方案的数据。

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use image::{DynamicImage, ImageFormat, ImageReader};
use log::info;

use crate::pixel::PixelImage;

/// 可以安全保存隐写结果的格式。
const LOSSLESS_FORMATS: &[ImageFormat] = &[
    ImageFormat::Png,
    ImageFormat::Bmp,
    ImageFormat::Tiff,
    ImageFormat::WebP,
    ImageFormat::Qoi,
];

/// 能原样保存灰度图像的格式。BMP、WebP、QOI 会把灰度写成 RGB(A)。
const GRAY_FORMATS: &[ImageFormat] = &[ImageFormat::Png, ImageFormat::Tiff];

/// 能原样保存灰度+透明图像的格式。
const GRAY_ALPHA_FORMATS: &[ImageFormat] = &[ImageFormat::Png];

/// 保存后重新读取时通道数不变的格式。
pub fn formats_for_planes(planes: usize) -> &'static [ImageFormat] {
    match planes {
        1 => GRAY_FORMATS,
        2 => GRAY_ALPHA_FORMATS,
        _ => LOSSLESS_FORMATS,
    }
}

fn format_names(formats: &[ImageFormat]) -> String {
    formats
        .iter()
        .flat_map(|format| format.extensions_str().first())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}

/// 读取图像文件并解码为 `PixelImage`。
///
/// 灰度、灰度+透明、RGB、RGBA 分别对应 1-4 个通道；
/// 16 位或浮点图像被转换为通道数相同的 8 位图像。
///
/// # Errors
///
/// 文件无法打开、格式无法识别或解码失败时返回错误。
pub fn load(path: &Path) -> Result<PixelImage> {
    let decoded = ImageReader::open(path)
        .with_context(|| {
            format!(
                "Unable to read image file: {}",
                path.to_string_lossy().red().bold()
            )
        })?
        .with_guessed_format()
        .with_context(|| {
            format!(
                "Unable to detect the format of: {}",
                path.to_string_lossy().red().bold()
            )
        })?
        .decode()
        .with_context(|| {
            format!(
                "Unable to decode image: {}",
                path.to_string_lossy().red().bold()
            )
        })?;

    let image = from_dynamic(decoded)?;
    info!(
        "Loaded {} ({}x{}, {} planes)",
        path.display(),
        image.width(),
        image.height(),
        image.planes()
    );
    Ok(image)
}

/// 把 `PixelImage` 编码并写入 `path`，格式由扩展名决定。
///
/// # Errors
///
/// 扩展名不是无损格式、格式无法原样保存该通道数、编码失败或写入失败时返回错误。
pub fn save(image: &PixelImage, path: &Path) -> Result<()> {
    let format = ImageFormat::from_path(path).with_context(|| {
        format!(
            "Unable to determine the output format from: {}",
            path.to_string_lossy().red().bold()
        )
    })?;

    anyhow::ensure!(
        LOSSLESS_FORMATS.contains(&format),
        "Output format {} is lossy or unsupported and would destroy the hidden data. \nUse one of: {}",
        format!("{format:?}").red().bold(),
        format_names(LOSSLESS_FORMATS)
    );

    let allowed = formats_for_planes(image.planes());
    anyhow::ensure!(
        allowed.contains(&format),
        "Output format {} cannot store a {}-plane image without converting it, which would destroy the hidden data. \nUse one of: {}",
        format!("{format:?}").red().bold(),
        image.planes(),
        format_names(allowed)
    );

    to_dynamic(image)?
        .save_with_format(path, format)
        .with_context(|| {
            format!(
                "Unable to write to target image file: {}",
                path.to_string_lossy().red().bold()
            )
        })?;

    info!("Saved {} as {format:?}", path.display());
    Ok(())
}

/// 把解码后的图像转换为 `PixelImage`。
pub fn from_dynamic(decoded: DynamicImage) -> Result<PixelImage> {
    let (width, height) = (decoded.width() as usize, decoded.height() as usize);
    let color = decoded.color();

    let (planes, data) = match (color.channel_count(), decoded) {
        (_, DynamicImage::ImageLuma8(buf)) => (1, buf.into_raw()),
        (_, DynamicImage::ImageLumaA8(buf)) => (2, buf.into_raw()),
        (_, DynamicImage::ImageRgb8(buf)) => (3, buf.into_raw()),
        (_, DynamicImage::ImageRgba8(buf)) => (4, buf.into_raw()),
        (1, other) => (1, other.to_luma8().into_raw()),
        (2, other) => (2, other.to_luma_alpha8().into_raw()),
        (3, other) => (3, other.to_rgb8().into_raw()),
        (_, other) => (4, other.to_rgba8().into_raw()),
    };

    PixelImage::new(width, height, planes, data)
        .with_context(|| format!("Decoded image has an unexpected layout ({color:?})"))
}

/// 把 `PixelImage` 转换为对应颜色模式的 `DynamicImage`。
pub fn to_dynamic(image: &PixelImage) -> Result<DynamicImage> {
    let (width, height) = (u32::try_from(image.width())?, u32::try_from(image.height())?);
    let data = image.as_raw().to_vec();

    let dynamic = match image.planes() {
        1 => image::GrayImage::from_raw(width, height, data).map(DynamicImage::ImageLuma8),
        2 => image::GrayAlphaImage::from_raw(width, height, data).map(DynamicImage::ImageLumaA8),
        3 => image::RgbImage::from_raw(width, height, data).map(DynamicImage::ImageRgb8),
        _ => image::RgbaImage::from_raw(width, height, data).map(DynamicImage::ImageRgba8),
    };

    dynamic.context("Pixel buffer does not match the image dimensions")
}
