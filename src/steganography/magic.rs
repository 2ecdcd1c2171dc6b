//! 神奇混合。
//!
//! 把两幅同尺寸的 RGBA 灰度图像合成为一幅半透明图像：
//! 放在深色背景上时显现第一幅，放在浅色背景上时显现第二幅。
//! 这是单向的视觉合成，没有算法上的逆操作。

use log::debug;

use crate::constants::{MAGIC_DARK_OFFSET, MAGIC_MIN_OPACITY, MAGIC_PLANES, RGB_PLANES};
use crate::error::Result;
use crate::pixel::PixelImage;

const OPAQUE: u32 = 255;

/// 预览时平铺在图像下面的纯色背景。
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Background {
    Light,
    Dark,
}

impl Background {
    fn level(self) -> u32 {
        match self {
            Background::Light => OPAQUE,
            Background::Dark => 0,
        }
    }
}

/// 合成两幅 RGBA 图像。只读取每个像素的红色分量 (输入视为 R=G=B 的灰度图)。
///
/// 对每个像素：
///
/// ```text
/// a         = first.red / 2
/// b         = second.red / 2 + 128
/// opacity   = max(255 + a - b, 1)
/// lightness = 255 * a / opacity
/// ```
///
/// 输出 R=G=B=`lightness`，alpha=`opacity`，全部为截断整数运算。
///
/// # Errors
///
/// * `UnsupportedPlaneCount` - 任一输入不是 4 通道。
/// * `DimensionMismatch` - 两幅输入尺寸不同。
pub fn magic_combine(first: &PixelImage, second: &PixelImage) -> Result<PixelImage> {
    first.ensure_planes(MAGIC_PLANES)?;
    second.ensure_planes(MAGIC_PLANES)?;
    first.ensure_same_size(second)?;

    debug!("Magic combine: {}x{}", first.width(), first.height());

    let data = first
        .pixels()
        .zip(second.pixels())
        .flat_map(|(a, b)| blend(a[0], b[0]))
        .collect();

    PixelImage::new(first.width(), first.height(), MAGIC_PLANES[0], data)
}

/// 把 RGBA 图像平铺到纯色背景上，得到观看者实际看到的 RGB 图像。
///
/// # Errors
///
/// * `UnsupportedPlaneCount` - 输入不是 4 通道。
pub fn magic_preview(image: &PixelImage, background: Background) -> Result<PixelImage> {
    image.ensure_planes(MAGIC_PLANES)?;

    let bg = background.level();
    let data = image
        .pixels()
        .flat_map(|pixel| {
            let alpha = u32::from(pixel[3]);
            pixel[..RGB_PLANES]
                .iter()
                .map(move |&c| ((u32::from(c) * alpha + bg * (OPAQUE - alpha)) / OPAQUE) as u8)
        })
        .collect();

    PixelImage::new(image.width(), image.height(), RGB_PLANES, data)
}

fn blend(first_red: u8, second_red: u8) -> [u8; 4] {
    let a = u32::from(first_red) / 2;
    let b = u32::from(second_red) / 2 + MAGIC_DARK_OFFSET;
    let opacity = (OPAQUE + a - b).max(MAGIC_MIN_OPACITY);
    // b <= 255 so opacity >= a, lightness stays within a byte
    let lightness = (OPAQUE * a / opacity) as u8;

    [lightness, lightness, lightness, opacity as u8]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_matches_integer_formula() {
        assert_eq!(blend(200, 50), [126, 126, 126, 202]);
        // a = 0, b = 255: opacity would be 0
        assert_eq!(blend(0, 255), [0, 0, 0, 1]);
        assert_eq!(blend(255, 0), [127, 127, 127, 254]);
    }
}
