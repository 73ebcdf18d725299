//! # Percent Host CLI
//!
//! headless 回放工具：按固定帧率推进配置中的指示器，每帧输出一行 JSON 摘要。
//!
//! ## 用法
//!
//! ```bash
//! cargo run -p percent-host -- --config percent-host/demos/basic.json
//! cargo run -p percent-host -- --fps 30 --duration 2000 --log-level debug
//! cargo run -p percent-host -- init demo.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use percent_host::{DemoConfig, Replay};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "percent-host")]
#[command(about = "动画百分比指示器 headless 回放")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// 回放配置文件（不存在时使用默认配置）
    #[arg(short, long, default_value = "demo.json")]
    config: PathBuf,

    /// 覆盖配置中的帧率
    #[arg(long)]
    fps: Option<u32>,

    /// 覆盖配置中的回放时长（毫秒）
    #[arg(long)]
    duration: Option<u32>,

    /// 日志级别（trace / debug / info / warn / error）
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// 写出默认配置
    Init {
        /// 输出路径
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level: Level = cli
        .log_level
        .parse()
        .with_context(|| format!("无效的日志级别: {}", cli.log_level))?;
    // 日志写到 stderr，stdout 只输出帧摘要
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Some(Commands::Init { output }) => {
            DemoConfig::default()
                .save(&output)
                .with_context(|| format!("写出配置失败: {}", output.display()))?;
            info!(path = ?output, "默认配置已写出");
            Ok(())
        }
        None => {
            let mut config = DemoConfig::load(&cli.config);
            // 命令行参数优先
            if let Some(fps) = cli.fps {
                config.fps = fps;
            }
            if let Some(duration) = cli.duration {
                config.duration_millis = duration;
            }
            run_replay(&config)
        }
    }
}

fn run_replay(config: &DemoConfig) -> Result<()> {
    let mut replay = Replay::new(config).context("回放配置无效")?;
    info!(
        widgets = config.widgets.len(),
        fps = config.fps,
        frames = replay.frame_count(),
        "开始回放"
    );

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    while !replay.is_finished() {
        for report in replay.step() {
            serde_json::to_writer(&mut out, &report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    info!("回放结束");
    Ok(())
}
