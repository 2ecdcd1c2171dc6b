//! # 命令处理逻辑模块
//!
//! 包含处理各子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::cli::{
    CapacityArgs, EnlargeArgs, HideArgs, MagicArgs, MergeArgs, RecoverArgs, ShrinkArgs,
    SplitArgs, TextSource,
};
use crate::constants::{
    CHANNEL_PREFIXES, DEFAULT_IMAGE_EXTENSION, DEFAULT_TEXT_EXTENSION, ENLARGED_PREFIX,
    HIDDEN_PREFIX, MAGIC_PREFIX, MERGED_PREFIX, RECOVERED_PREFIX,
};
use crate::raster;
use crate::steganography::{
    Background, BitDepth, channels_combine, channels_separate, enlarge_capacity, enlarge_decode,
    enlarge_encode, lsb::all_bit_depths, lsb_capacity, lsb_decode, lsb_encode, magic_combine,
    magic_preview,
};
use anyhow::{Context, Result};
use colored::Colorize;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像和文本、校验位深度、调用 LSB 隐写，最后将结果写入目标图像文件。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 位深度不是 1、2、4、8 之一。
/// * 无法读取输入的图像或文本文件。
/// * 图像没有足够的空间来隐藏文本，或文本含有无法编码的字符。
/// * 目标文件已存在且未指定 `--force`，或无法写入。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let depth = BitDepth::try_from(args.bits)?;
    let dest = resolve_output(args.dest, &args.image, HIDDEN_PREFIX, DEFAULT_IMAGE_EXTENSION)?;
    ensure_writable(&dest, args.force)?;

    let picture = raster::load(&args.image)?;
    let text = read_text(&args.source)?;

    let hidden = lsb_encode(&picture, &text, depth).with_context(|| {
        format!(
            "Failed to hide the text in {} at bit depth {}",
            args.image.to_string_lossy().red().bold(),
            depth.to_string().red().bold()
        )
    })?;
    raster::save(&hidden, &dest)?;

    println!(
        "The text has been successfully hidden (bit depth {}) and saved: {}",
        depth.to_string().green().bold(),
        dest.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、以给定位深度恢复文本，最后将文本写入目标文件。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 位深度不合法。
/// * 无法读取输入的图像文件。
/// * 目标文件已存在且未指定 `--force`，或无法写入。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let depth = BitDepth::try_from(args.bits)?;
    let dest = resolve_output(args.text, &args.image, RECOVERED_PREFIX, DEFAULT_TEXT_EXTENSION)?;
    ensure_writable(&dest, args.force)?;

    let picture = raster::load(&args.image)?;
    let text = lsb_decode(&picture, depth);

    write_text(&dest, &text)
}

/// 处理 'Enlarge' 命令的执行逻辑。
///
/// # Errors
///
/// 输入无法读取、文本放不下或含有无法编码的字符、输出无法写入时返回错误。
pub fn handle_enlarge(args: EnlargeArgs) -> Result<()> {
    let dest = resolve_output(args.dest, &args.image, ENLARGED_PREFIX, DEFAULT_IMAGE_EXTENSION)?;
    ensure_writable(&dest, args.force)?;

    let picture = raster::load(&args.image)?;
    let text = read_text(&args.source)?;

    let enlarged = enlarge_encode(&picture, &text).with_context(|| {
        format!(
            "Failed to hide the text by enlarging {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;
    raster::save(&enlarged, &dest)?;

    println!(
        "The text has been successfully hidden in a {}x{} image and saved: {}",
        enlarged.width(),
        enlarged.height(),
        dest.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'Shrink' 命令的执行逻辑：从放大后的图像中恢复文本。
///
/// # Errors
///
/// 输入无法读取、宽高不是偶数、输出无法写入时返回错误。
pub fn handle_shrink(args: ShrinkArgs) -> Result<()> {
    let dest = resolve_output(args.text, &args.image, RECOVERED_PREFIX, DEFAULT_TEXT_EXTENSION)?;
    ensure_writable(&dest, args.force)?;

    let picture = raster::load(&args.image)?;
    let text = enlarge_decode(&picture).with_context(|| {
        format!(
            "Failed to recover text from '{}'. \nThe image does not look like the output of 'enlarge'.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    write_text(&dest, &text)
}

/// 处理 'Magic' 命令的执行逻辑。
///
/// 指定 `--preview` 时，额外保存混合结果在浅色与深色背景上的效果图。
///
/// # Errors
///
/// 输入不是同尺寸的 RGBA 图像、输出已存在或无法写入时返回错误。
pub fn handle_magic(args: MagicArgs) -> Result<()> {
    let dest = resolve_output(args.dest, &args.first, MAGIC_PREFIX, DEFAULT_IMAGE_EXTENSION)?;
    let previews = [Background::Light, Background::Dark].map(|background| {
        let suffix = match background {
            Background::Light => "on_light",
            Background::Dark => "on_dark",
        };
        (background, sibling_with_suffix(&dest, suffix))
    });

    ensure_writable(&dest, args.force)?;
    if args.preview {
        previews
            .iter()
            .try_for_each(|(_, path)| ensure_writable(path, args.force))?;
    }

    let first = raster::load(&args.first)?;
    let second = raster::load(&args.second)?;

    let mixed = magic_combine(&first, &second).with_context(|| {
        format!(
            "Unable to mix {} with {}. \nBoth images must be RGBA and have the same size.",
            args.first.to_string_lossy().red().bold(),
            args.second.to_string_lossy().red().bold()
        )
    })?;
    raster::save(&mixed, &dest)?;

    if args.preview {
        for (background, path) in &previews {
            raster::save(&magic_preview(&mixed, *background)?, path)?;
            info!("Preview on {background:?} background: {}", path.display());
        }
    }

    println!(
        "The images have been successfully mixed and saved: {}",
        dest.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'Split' 命令的执行逻辑。
///
/// # Errors
///
/// 输入无法读取、任一输出已存在或无法写入时返回错误。
pub fn handle_split(args: SplitArgs) -> Result<()> {
    let dir = match args.dest {
        Some(dir) => dir,
        None => parent_dir(&args.image),
    };
    let stem = file_stem(&args.image)?;
    let outputs = CHANNEL_PREFIXES
        .map(|prefix| dir.join(format!("{prefix}{stem}.{DEFAULT_IMAGE_EXTENSION}")));
    outputs
        .iter()
        .try_for_each(|path| ensure_writable(path, args.force))?;

    let picture = raster::load(&args.image)?;
    let (red, green, blue) = channels_separate(&picture)?;

    for (channel, path) in [red, green, blue].iter().zip(&outputs) {
        raster::save(channel, path)?;
    }

    println!("The channels have been successfully separated and saved:");
    for path in &outputs {
        println!("  {}", path.to_string_lossy().green().bold());
    }
    Ok(())
}

/// 处理 'Merge' 命令的执行逻辑。
///
/// # Errors
///
/// 三幅输入尺寸不同、输出已存在或无法写入时返回错误。
pub fn handle_merge(args: MergeArgs) -> Result<()> {
    let dest = resolve_output(args.dest, &args.red, MERGED_PREFIX, DEFAULT_IMAGE_EXTENSION)?;
    ensure_writable(&dest, args.force)?;

    let red = raster::load(&args.red)?;
    let green = raster::load(&args.green)?;
    let blue = raster::load(&args.blue)?;

    let merged = channels_combine(&red, &green, &blue)
        .context("Unable to merge the channels. \nAll three images must have the same size.")?;
    raster::save(&merged, &dest)?;

    println!(
        "The channels have been successfully merged and saved: {}",
        dest.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'Capacity' 命令：列出各位深度下 LSB 隐写以及放大隐写可容纳的字符数。
///
/// # Errors
///
/// 无法读取输入图像时返回错误。
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let picture = raster::load(&args.image)?;

    println!(
        "{}: {}x{}, {} planes",
        args.image.to_string_lossy().bold(),
        picture.width(),
        picture.height(),
        picture.planes()
    );
    for depth in all_bit_depths() {
        println!(
            "  LSB, bit depth {depth}: {} characters",
            lsb_capacity(&picture, depth).to_string().green().bold()
        );
    }
    println!(
        "  Enlarging: {} characters",
        enlarge_capacity(&picture).to_string().green().bold()
    );
    Ok(())
}

/// 读取要隐藏的文本：来自文件或命令行字符串。
fn read_text(source: &TextSource) -> Result<String> {
    match (&source.text, &source.message) {
        (Some(path), _) => fs::read_to_string(path).with_context(|| {
            format!(
                "Unable to read text file: {}",
                path.to_string_lossy().red().bold()
            )
        }),
        (None, Some(message)) => Ok(message.clone()),
        (None, None) => anyhow::bail!("No text to hide: pass either --text or --message"),
    }
}

/// 写入恢复出的文本并向用户报告。
fn write_text(dest: &Path, text: &str) -> Result<()> {
    fs::write(dest, text).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    if text.is_empty() {
        warn!("Decoded an empty message, {} is empty", dest.display());
    }
    println!("{}", recovery_report(dest, text));
    Ok(())
}

/// 恢复结果的提示信息。没有找到文本时给出警告而不是成功提示。
fn recovery_report(dest: &Path, text: &str) -> String {
    if text.is_empty() {
        return format!(
            "{} The image may not contain hidden text, or a different bit depth was used. \nAn empty file was saved: {}",
            "No hidden text found.".yellow().bold(),
            dest.to_string_lossy().yellow()
        );
    }

    format!(
        "The text ({} characters) has been successfully recovered and saved: {}",
        text.chars().count().to_string().green().bold(),
        dest.to_string_lossy().green().bold()
    )
}

/// 未给出输出路径时，在输入文件旁生成 `<prefix><stem>.<ext>`。
fn resolve_output(
    dest: Option<PathBuf>,
    input: &Path,
    prefix: &str,
    extension: &str,
) -> Result<PathBuf> {
    match dest {
        Some(path) => Ok(path),
        None => {
            let stem = file_stem(input)?;
            Ok(parent_dir(input).join(format!("{prefix}{stem}.{extension}")))
        }
    }
}

/// `dir/name.ext` 变为 `dir/name_suffix.ext`。
fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_IMAGE_EXTENSION.to_owned());
    path.with_file_name(format!("{stem}_{suffix}.{extension}"))
}

fn file_stem(path: &Path) -> Result<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .with_context(|| {
            format!(
                "Unable to derive an output name from: {}",
                path.to_string_lossy().red().bold()
            )
        })
}

fn parent_dir(path: &Path) -> PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}

/// 拒绝覆盖已存在的文件，除非指定了 `--force`。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_recovery_is_reported_as_not_found() {
        let dest = Path::new("recovered.txt");
        assert!(recovery_report(dest, "").contains("No hidden text found"));

        let found = recovery_report(dest, "secret");
        assert!(found.contains("successfully recovered"));
        assert!(!found.contains("No hidden text found"));
    }
}
