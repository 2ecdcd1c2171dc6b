//! # 像素数据模块
//!
//! `PixelImage` 是所有编解码器共享的唯一数据结构：宽、高、每像素通道数，
//! 以及按行优先顺序排列的 8 位分量。

use crate::constants::SUPPORTED_PLANES;
use crate::error::{CodecError, Result};

/// 一幅按行优先存储的 8 位光栅图像。
///
/// 通道数 (`planes`) 取值 1-4，分别对应灰度、灰度+透明、RGB、RGBA。
/// 每一行恰好有 `width * planes` 个分量。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelImage {
    width: usize,
    height: usize,
    planes: usize,
    data: Vec<u8>,
}

impl PixelImage {
    /// 从原始分量缓冲区构造图像，并校验几何信息。
    ///
    /// # Errors
    ///
    /// * `UnsupportedPlaneCount` - 通道数不在 1-4 之间。
    /// * `EmptyImage` - 宽或高为零。
    /// * `InvalidPixelData` - 缓冲区长度不等于 `width * height * planes`。
    pub fn new(width: usize, height: usize, planes: usize, data: Vec<u8>) -> Result<Self> {
        if !SUPPORTED_PLANES.contains(&planes) {
            return Err(CodecError::UnsupportedPlaneCount {
                planes,
                allowed: SUPPORTED_PLANES,
            });
        }
        if width == 0 || height == 0 {
            return Err(CodecError::EmptyImage { width, height });
        }
        let expected = width * height * planes;
        if data.len() != expected {
            return Err(CodecError::InvalidPixelData {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            planes,
            data,
        })
    }

    /// 由逐行数据构造图像，每行长度必须为 `width * planes`。
    pub fn from_rows(width: usize, planes: usize, rows: &[Vec<u8>]) -> Result<Self> {
        let row_len = width * planes;
        if let Some(bad) = rows.iter().find(|row| row.len() != row_len) {
            return Err(CodecError::InvalidPixelData {
                expected: row_len,
                actual: bad.len(),
            });
        }
        Self::new(width, rows.len(), planes, rows.concat())
    }

    /// 所有分量都为同一个值的图像。
    pub fn filled(width: usize, height: usize, planes: usize, value: u8) -> Result<Self> {
        Self::new(width, height, planes, vec![value; width * height * planes])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn planes(&self) -> usize {
        self.planes
    }

    /// 每行的分量数。
    pub fn row_len(&self) -> usize {
        self.width * self.planes
    }

    /// 分量总数，即 `width * height * planes`。
    pub fn component_count(&self) -> usize {
        self.data.len()
    }

    /// 按行优先顺序排列的全部分量。
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// 第 `y` 行的分量切片。
    ///
    /// # Panics
    ///
    /// `y >= height` 时 panic。
    pub fn row(&self, y: usize) -> &[u8] {
        let len = self.row_len();
        &self.data[y * len..(y + 1) * len]
    }

    /// 从上到下依次产出每一行。
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.row_len())
    }

    /// 坐标 `(x, y)` 处像素的全部分量。
    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        let start = (y * self.width + x) * self.planes;
        &self.data[start..start + self.planes]
    }

    /// 按行优先顺序依次产出每个像素的分量切片。
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.planes)
    }

    /// 宽高是否与另一幅图像相同。
    pub fn ensure_same_size(&self, other: &PixelImage) -> Result<()> {
        if self.width != other.width || self.height != other.height {
            return Err(CodecError::DimensionMismatch {
                expected_width: self.width,
                expected_height: self.height,
                actual_width: other.width,
                actual_height: other.height,
            });
        }
        Ok(())
    }

    /// 通道数是否属于 `allowed`。
    pub fn ensure_planes(&self, allowed: &'static [usize]) -> Result<()> {
        if !allowed.contains(&self.planes) {
            return Err(CodecError::UnsupportedPlaneCount {
                planes: self.planes,
                allowed,
            });
        }
        Ok(())
    }
}
