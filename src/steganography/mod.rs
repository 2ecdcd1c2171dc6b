//! # 隐写编解码模块
//!
//! 四种互相独立、无状态的像素级方案：
//!
//! * [`lsb`] - 在每个分量的最低若干位中隐藏文本。
//! * [`enlarge`] - 把每个像素放大为 2x2 块，在新增像素的低 3 位中隐藏文本。
//! * [`magic`] - 把两幅灰度图像合成为一幅，在浅色与深色背景上分别显现不同内容。
//! * [`channels`] - 把 RGB(A) 图像拆成三幅单通道图像，或反向合并。
//!
//! 所有操作只借用输入，返回全新分配的输出。

pub mod channels;
pub mod enlarge;
pub mod lsb;
pub mod magic;

pub use channels::{channels_combine, channels_separate};
pub use enlarge::{enlarge_capacity, enlarge_decode, enlarge_encode};
pub use lsb::{BitDepth, lsb_capacity, lsb_decode, lsb_encode};
pub use magic::{Background, magic_combine, magic_preview};

use crate::constants::TERMINATOR;
use crate::error::{CodecError, Result};

/// 把文本转换为 8 位字符编码序列。
///
/// # Errors
///
/// * `UnencodableCharacter` - 字符的码位大于 255。
/// * `PayloadContainsTerminator` - 文本中含有 NUL 字符。
pub(crate) fn text_to_codes(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .enumerate()
        .map(|(index, character)| {
            let code = u8::try_from(character)
                .map_err(|_| CodecError::UnencodableCharacter { character, index })?;
            if code == TERMINATOR {
                return Err(CodecError::PayloadContainsTerminator { index });
            }
            Ok(code)
        })
        .collect()
}

/// 文本编码之后补零，直到长度为 `len`。
pub(crate) fn padded_stream(codes: &[u8], len: usize) -> Vec<u8> {
    let mut stream = codes.to_vec();
    stream.resize(len, TERMINATOR);
    stream
}

/// 把恢复出的编码还原为字符，码位与编码相同。
pub(crate) fn code_to_char(code: u16) -> char {
    char::from_u32(u32::from(code)).unwrap_or(char::REPLACEMENT_CHARACTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin1_text_maps_to_codes() {
        assert_eq!(text_to_codes("Aé~").unwrap(), vec![65, 0xE9, 126]);
        assert_eq!(code_to_char(0xE9), 'é');
    }

    #[test]
    fn rejects_nul_and_wide_characters() {
        assert_eq!(
            text_to_codes("ab\0c"),
            Err(CodecError::PayloadContainsTerminator { index: 2 })
        );
        assert_eq!(
            text_to_codes("x隐"),
            Err(CodecError::UnencodableCharacter {
                character: '隐',
                index: 1
            })
        );
    }

    #[test]
    fn stream_is_zero_padded() {
        assert_eq!(padded_stream(&[1, 2], 5), vec![1, 2, 0, 0, 0]);
    }
}
