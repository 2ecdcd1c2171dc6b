//! 放大编解码。
//!
//! 源图像的每个像素变为输出中的 2x2 块：左上角是原像素，
//! 其余三个像素的每个分量在低 3 位中各携带一个字符的 3 bits
//! (右上 bits 0-2，左下 bits 3-5，右下 bits 6-8)。

use log::debug;

use super::{code_to_char, padded_stream, text_to_codes};
use crate::constants::{
    ENLARGE_BITS_PER_CHAR, ENLARGE_FACTOR, ENLARGE_PATCH_BITS, ENLARGE_PATCH_MASK, TERMINATOR,
};
use crate::error::{CodecError, Result};
use crate::pixel::PixelImage;

/// 图像放大后可容纳的字符数：每个源分量一个字符。
pub fn enlarge_capacity(image: &PixelImage) -> usize {
    image.component_count()
}

/// 把图像放大为 `(2 * width, 2 * height)` 并在新增像素中隐藏文本。
///
/// # Errors
///
/// * `UnencodableCharacter` / `PayloadContainsTerminator` - 文本无法编码。
/// * `CapacityExceeded` - 字符数超过 `width * height * planes`。
pub fn enlarge_encode(image: &PixelImage, text: &str) -> Result<PixelImage> {
    let codes = text_to_codes(text)?;

    let capacity = enlarge_capacity(image);
    debug!(
        "Enlarge encode: {}x{}x{}, {} of {capacity} characters",
        image.width(),
        image.height(),
        image.planes(),
        codes.len()
    );
    if codes.len() > capacity {
        return Err(CodecError::CapacityExceeded {
            required: codes.len() * ENLARGE_BITS_PER_CHAR,
            available: capacity * ENLARGE_BITS_PER_CHAR,
        });
    }

    let planes = image.planes();
    let out_row_len = image.row_len() * ENLARGE_FACTOR;
    let stream = padded_stream(&codes, capacity);
    let mut data = Vec::with_capacity(capacity * ENLARGE_FACTOR * ENLARGE_FACTOR);

    for (row, row_codes) in image.rows().zip(stream.chunks_exact(image.row_len())) {
        let mut top = Vec::with_capacity(out_row_len);
        let mut bottom = Vec::with_capacity(out_row_len);

        for (pixel, codes) in row.chunks_exact(planes).zip(row_codes.chunks_exact(planes)) {
            top.extend_from_slice(pixel);
            top.extend(patched(pixel, codes, 0));
            bottom.extend(patched(pixel, codes, 1));
            bottom.extend(patched(pixel, codes, 2));
        }

        data.append(&mut top);
        data.append(&mut bottom);
    }

    PixelImage::new(
        image.width() * ENLARGE_FACTOR,
        image.height() * ENLARGE_FACTOR,
        planes,
        data,
    )
}

/// 按 2x2 块的行优先顺序恢复放大编码隐藏的文本。
///
/// # Errors
///
/// * `NotEnlarged` - 宽或高为奇数，无法切分为 2x2 块。
pub fn enlarge_decode(image: &PixelImage) -> Result<String> {
    if image.width() % ENLARGE_FACTOR != 0 || image.height() % ENLARGE_FACTOR != 0 {
        return Err(CodecError::NotEnlarged {
            width: image.width(),
            height: image.height(),
        });
    }

    let planes = image.planes();
    let block_width = planes * ENLARGE_FACTOR;
    let mut text = String::new();

    for y in (0..image.height()).step_by(ENLARGE_FACTOR) {
        let top = image.row(y);
        let bottom = image.row(y + 1);

        let blocks = top
            .chunks_exact(block_width)
            .zip(bottom.chunks_exact(block_width));
        for (top_pair, bottom_pair) in blocks {
            let top_right = &top_pair[planes..];
            let (bottom_left, bottom_right) = bottom_pair.split_at(planes);

            for i in 0..planes {
                let code = unpatch(top_right[i], bottom_left[i], bottom_right[i]);
                if code == u16::from(TERMINATOR) {
                    debug!("Enlarge decode: terminator after {} characters", text.chars().count());
                    return Ok(text);
                }
                text.push(code_to_char(code));
            }
        }
    }

    Ok(text)
}

/// 像素每个分量的低 3 位被替换为对应字符编码的第 `slot` 组 3 bits。
fn patched<'a>(pixel: &'a [u8], codes: &'a [u8], slot: u32) -> impl Iterator<Item = u8> + 'a {
    let shift = slot * ENLARGE_PATCH_BITS;
    pixel
        .iter()
        .zip(codes)
        .map(move |(&component, &code)| {
            (component & !ENLARGE_PATCH_MASK) | ((code >> shift) & ENLARGE_PATCH_MASK)
        })
}

fn unpatch(top_right: u8, bottom_left: u8, bottom_right: u8) -> u16 {
    [top_right, bottom_left, bottom_right]
        .iter()
        .enumerate()
        .fold(0, |code, (slot, &component)| {
            code | (u16::from(component & ENLARGE_PATCH_MASK) << (slot as u32 * ENLARGE_PATCH_BITS))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_slots_cover_nine_bits() {
        let pixel = [0xFF];
        let codes = [0b1101_0110];
        let slots: Vec<u8> = (0..3).flat_map(|slot| patched(&pixel, &codes, slot)).collect();
        assert_eq!(slots, vec![0xFE, 0xFA, 0xFB]);
        assert_eq!(unpatch(slots[0], slots[1], slots[2]), 0b1101_0110);
    }
}
