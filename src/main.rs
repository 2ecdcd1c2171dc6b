use clap::Parser;
use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

use pixel_hide::{
    cli::{Cli, Commands},
    handler::{
        handle_capacity, handle_enlarge, handle_hide, handle_magic, handle_merge, handle_recover,
        handle_shrink, handle_split,
    },
};

/// 初始化日志：默认只输出警告，`--verbose` 时输出调试信息，`RUST_LOG` 可覆盖。
fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    Builder::new()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .filter_level(level)
        .parse_env(Env::default())
        .init();
}

/// 程序的主入口点
///
/// 负责解析命令行参数，并根据指定的子命令
/// 将执行分派到相应的处理函数
fn main() -> anyhow::Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();
    init_logger(cli.verbose);

    // 根据子命令调用相应的处理函数
    match cli.command {
        Commands::Hide(args) => handle_hide(args),
        Commands::Recover(args) => handle_recover(args),
        Commands::Enlarge(args) => handle_enlarge(args),
        Commands::Shrink(args) => handle_shrink(args),
        Commands::Magic(args) => handle_magic(args),
        Commands::Split(args) => handle_split(args),
        Commands::Merge(args) => handle_merge(args),
        Commands::Capacity(args) => handle_capacity(args),
    }
}
