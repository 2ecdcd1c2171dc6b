//! 颜色通道分离与合并。

use log::debug;

use crate::constants::{CHANNEL_PLANES, RGB_PLANES};
use crate::error::Result;
use crate::pixel::PixelImage;

/// 把图像拆成红、绿、蓝三幅单通道图像。
///
/// 3 通道和 4 通道输入按 `planes * x + c` 读取各颜色分量，忽略 alpha；
/// 1 通道和 2 通道输入是灰度图，亮度分量被复制到三幅输出中。
pub fn channels_separate(image: &PixelImage) -> Result<(PixelImage, PixelImage, PixelImage)> {
    debug!(
        "Separating {}x{}x{} into channels",
        image.width(),
        image.height(),
        image.planes()
    );

    let offsets = if image.planes() >= RGB_PLANES {
        [0, 1, 2]
    } else {
        [0, 0, 0]
    };
    let extract = |offset: usize| {
        let data = image.pixels().map(|pixel| pixel[offset]).collect();
        PixelImage::new(image.width(), image.height(), CHANNEL_PLANES, data)
    };

    Ok((extract(offsets[0])?, extract(offsets[1])?, extract(offsets[2])?))
}

/// 用三幅图像分别作为红、绿、蓝通道合成一幅 RGB 图像。
///
/// 三幅输入的通道数可以各不相同，每幅按自己的通道数取亮度：
/// 1 通道直接使用，2 通道取第一个分量，3/4 通道取前三个分量的截断平均值。
///
/// # Errors
///
/// * `DimensionMismatch` - 三幅输入的宽高不完全相同。
pub fn channels_combine(
    red: &PixelImage,
    green: &PixelImage,
    blue: &PixelImage,
) -> Result<PixelImage> {
    red.ensure_same_size(green)?;
    red.ensure_same_size(blue)?;

    debug!(
        "Combining channels with planes {}/{}/{}",
        red.planes(),
        green.planes(),
        blue.planes()
    );

    let data = red
        .pixels()
        .zip(green.pixels())
        .zip(blue.pixels())
        .flat_map(|((r, g), b)| [intensity(r), intensity(g), intensity(b)])
        .collect();

    PixelImage::new(red.width(), red.height(), RGB_PLANES, data)
}

fn intensity(pixel: &[u8]) -> u8 {
    match pixel {
        [luma] | [luma, _] => *luma,
        _ => {
            let sum: u16 = pixel[..RGB_PLANES].iter().map(|&c| u16::from(c)).sum();
            (sum / RGB_PLANES as u16) as u8
        }
    }
}
