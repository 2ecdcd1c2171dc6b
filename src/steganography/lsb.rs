//! LSB (最低有效位) 编解码。
//!
//! 每个分量的低 `d` 位依次承载字符流中的 `d` 个 bit，
//! 一个字符被拆为 `8 / d` 块，低位块在前。

use std::fmt;

use log::debug;

use super::{code_to_char, padded_stream, text_to_codes};
use crate::constants::{BITS_PER_CHAR, LSB_BIT_DEPTHS, TERMINATOR};
use crate::error::{CodecError, Result};
use crate::pixel::PixelImage;

/// 每个分量中用于隐写的低位数。
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BitDepth {
    One,
    Two,
    Four,
    Eight,
}

impl BitDepth {
    /// 位数。
    pub fn bits(self) -> usize {
        match self {
            BitDepth::One => 1,
            BitDepth::Two => 2,
            BitDepth::Four => 4,
            BitDepth::Eight => 8,
        }
    }

    /// 低 `bits` 位全为 1 的掩码。
    pub fn mask(self) -> u8 {
        ((1u16 << self.bits()) - 1) as u8
    }

    /// 一个字符需要的分量数。
    pub fn components_per_char(self) -> usize {
        BITS_PER_CHAR / self.bits()
    }
}

impl TryFrom<u8> for BitDepth {
    type Error = CodecError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(BitDepth::One),
            2 => Ok(BitDepth::Two),
            4 => Ok(BitDepth::Four),
            8 => Ok(BitDepth::Eight),
            _ => Err(CodecError::InvalidBitDepth(value)),
        }
    }
}

impl From<BitDepth> for u8 {
    fn from(depth: BitDepth) -> Self {
        depth.bits() as u8
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// 所有合法位深度，按从小到大排列。
pub fn all_bit_depths() -> impl Iterator<Item = BitDepth> {
    LSB_BIT_DEPTHS
        .iter()
        .filter_map(|&bits| BitDepth::try_from(bits).ok())
}

/// 图像在给定位深度下可容纳的字符数。
pub fn lsb_capacity(image: &PixelImage, depth: BitDepth) -> usize {
    image.component_count() * depth.bits() / BITS_PER_CHAR
}

/// 把文本隐藏到图像每个分量的低 `depth` 位中。
///
/// 文本结束后写入一个结束符 `0`，其余分量的低位被清零。
/// 输出图像与输入几何信息完全相同。
///
/// # Errors
///
/// * `UnencodableCharacter` / `PayloadContainsTerminator` - 文本无法编码。
/// * `CapacityExceeded` - 文本所需位数超过 `width * height * planes * depth`。
pub fn lsb_encode(image: &PixelImage, text: &str, depth: BitDepth) -> Result<PixelImage> {
    let codes = text_to_codes(text)?;

    let required = codes.len() * BITS_PER_CHAR;
    let available = image.component_count() * depth.bits();
    debug!(
        "LSB encode: {}x{}x{} at depth {depth}, required {required} bits, available {available} bits",
        image.width(),
        image.height(),
        image.planes()
    );
    if required > available {
        return Err(CodecError::CapacityExceeded {
            required,
            available,
        });
    }

    let per_char = depth.components_per_char();
    let mut data = image.as_raw().to_vec();
    let stream = padded_stream(&codes, data.len().div_ceil(per_char));

    data.chunks_mut(per_char)
        .zip(stream)
        .for_each(|(group, code)| modify(code, group, depth));

    PixelImage::new(image.width(), image.height(), image.planes(), data)
}

/// 按编码时的顺序读取低 `depth` 位，直到遇到结束符或图像末尾。
///
/// 位深度必须与编码时相同，否则结果没有意义。
pub fn lsb_decode(image: &PixelImage, depth: BitDepth) -> String {
    let text: String = image
        .as_raw()
        .chunks_exact(depth.components_per_char())
        .map(|group| recover(group, depth))
        .take_while(|&code| code != TERMINATOR)
        .map(|code| code_to_char(u16::from(code)))
        .collect();

    debug!("LSB decode at depth {depth}: {} characters", text.chars().count());
    text
}

/// 把 `code` 按低位块在前的顺序写入 `group` 中每个分量的低位。
fn modify(mut code: u8, group: &mut [u8], depth: BitDepth) {
    let mask = depth.mask();
    for component in group.iter_mut() {
        *component = (code & mask) | (*component & !mask);
        code = code.checked_shr(depth.bits() as u32).unwrap_or(0);
    }
}

/// `modify` 的逆操作。
fn recover(group: &[u8], depth: BitDepth) -> u8 {
    let mask = depth.mask();
    group
        .iter()
        .enumerate()
        .fold(0, |code, (i, &component)| {
            code | ((component & mask) << (i * depth.bits()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modify_spreads_low_chunk_first() {
        let mut group = [0xFF; 4];
        modify(0b1110_0100, &mut group, BitDepth::Two);
        assert_eq!(group, [0xFC, 0xFD, 0xFE, 0xFF]);
        assert_eq!(recover(&group, BitDepth::Two), 0b1110_0100);
    }

    #[test]
    fn masks_match_depths() {
        let masks: Vec<u8> = all_bit_depths().map(BitDepth::mask).collect();
        assert_eq!(masks, vec![0x01, 0x03, 0x0F, 0xFF]);
    }
}
