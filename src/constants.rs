/// 图像允许的每像素通道数：灰度、灰度+透明、RGB、RGBA。
pub const SUPPORTED_PLANES: &[usize] = &[1, 2, 3, 4];

/// LSB 编码允许的位深度。每个字符 8 bits 必须能被位深度整除。
pub const LSB_BIT_DEPTHS: &[u8] = &[1, 2, 4, 8];

/// 命令行未指定位深度时使用的默认值。
pub const DEFAULT_BIT_DEPTH: u8 = 1;

/// 每个字符编码的位数。
pub const BITS_PER_CHAR: usize = 8;

/// 字符流中表示文本结束的编码。
pub const TERMINATOR: u8 = 0;

/// 放大编码中，每个新增像素分量所隐藏的低位数。
pub const ENLARGE_PATCH_BITS: u32 = 3;

/// 取放大编码补丁位的掩码 (`0b111`)。
pub const ENLARGE_PATCH_MASK: u8 = 0x7;

/// 放大编码中，每个字符分布在三个新增像素上，共 9 bits。
pub const ENLARGE_BITS_PER_CHAR: usize = 3 * ENLARGE_PATCH_BITS as usize;

/// 放大编码在每个方向上的放大倍数。
pub const ENLARGE_FACTOR: usize = 2;

/// 神奇混合需要 RGBA 输入。
pub const MAGIC_PLANES: &[usize] = &[4];

/// 神奇混合中，第二幅图像的灰度被平移到 128-255 区间。
pub const MAGIC_DARK_OFFSET: u32 = 128;

/// 神奇混合的最小不透明度，避免除以零。
pub const MAGIC_MIN_OPACITY: u32 = 1;

/// 通道分离输出的单通道 (灰度) 图像。
pub const CHANNEL_PLANES: usize = 1;

/// 通道合并输出的 RGB 图像。
pub const RGB_PLANES: usize = 3;

/// 默认输出文件名前缀。
pub const HIDDEN_PREFIX: &str = "doctored_";
pub const RECOVERED_PREFIX: &str = "recovered_";
pub const ENLARGED_PREFIX: &str = "enlarged_";
pub const MAGIC_PREFIX: &str = "magic_";
pub const MERGED_PREFIX: &str = "merged_";
pub const CHANNEL_PREFIXES: [&str; 3] = ["red_", "green_", "blue_"];

/// 默认输出图像的扩展名 (无损格式)。
pub const DEFAULT_IMAGE_EXTENSION: &str = "png";

/// 默认输出文本的扩展名。
pub const DEFAULT_TEXT_EXTENSION: &str = "txt";
