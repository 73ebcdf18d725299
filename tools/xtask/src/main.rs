//! # xtask - 开发辅助工具
//!
//! 提供本地质量门禁与开发辅助命令。
//!
//! ## 命令
//!
//! - `check-all`: 运行 fmt、clippy、test
//! - `cov-core`: 运行 percent-core 覆盖率
//! - `cov-workspace`: 运行 workspace 覆盖率
//! - `demo-check`: 检查回放配置文件（解析、参数校验）

use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};

use percent_host::DemoConfig;

fn run(step: &str, cmd: &mut Command) -> anyhow::Result<()> {
    eprintln!("\n==> {step}");
    let status = cmd.status()?;
    if !status.success() {
        anyhow::bail!("{step} failed with {status}");
    }
    Ok(())
}

fn ensure_cargo_llvm_cov_available() -> anyhow::Result<()> {
    let mut cmd = Command::new("cargo");
    cmd.args(["llvm-cov", "--version"]);
    match cmd.status() {
        Ok(s) if s.success() => Ok(()),
        _ => anyhow::bail!(
            "cargo llvm-cov 不可用。\n\
请先安装：\n\
  - cargo install cargo-llvm-cov\n\
  - rustup component add llvm-tools-preview\n\
然后重试。"
        ),
    }
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        eprintln!("xtask error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let sub = args.next().unwrap_or_else(|| "help".to_string());

    match sub.as_str() {
        "check-all" => {
            let mut fmt = Command::new("cargo");
            fmt.args(["fmt", "--all", "--", "--check"]);
            run("cargo fmt --all -- --check", &mut fmt)?;

            let mut clippy = Command::new("cargo");
            clippy.args(["clippy", "--workspace", "--all-targets"]);
            run("cargo clippy --workspace --all-targets", &mut clippy)?;

            let mut test = Command::new("cargo");
            test.args(["test", "--workspace"]);
            run("cargo test --workspace", &mut test)?;

            demo_check(None)?;
        }
        "cov-core" => {
            ensure_cargo_llvm_cov_available()?;

            let mut cov = Command::new("cargo");
            cov.args(["llvm-cov", "-p", "percent-core", "--html"]);
            run("cargo llvm-cov -p percent-core --html", &mut cov)?;

            eprintln!("\nCoverage HTML: target/llvm-cov/html/index.html");
        }
        "cov-workspace" => {
            ensure_cargo_llvm_cov_available()?;

            // 排除 xtask 以免稀释信号
            let mut cov = Command::new("cargo");
            cov.args(["llvm-cov", "--workspace", "--exclude", "xtask", "--html"]);
            run(
                "cargo llvm-cov --workspace --exclude xtask --html",
                &mut cov,
            )?;

            eprintln!("\nCoverage HTML: target/llvm-cov/html/index.html");
        }
        "demo-check" => {
            let path = args.next();
            demo_check(path.as_deref())?;
        }
        "help" | "-h" | "--help" => {
            print_help();
        }
        other => anyhow::bail!("unknown xtask subcommand: {other}"),
    }

    Ok(())
}

fn print_help() {
    eprintln!(
        r#"xtask - 开发辅助工具

USAGE:
  cargo xtask <command>

COMMANDS:
  check-all       运行 fmt、clippy、test 门禁检查，并检查回放配置
  cov-core        运行 percent-core 覆盖率报告
  cov-workspace   运行 workspace 覆盖率报告
  demo-check      检查回放配置文件

DEMO-CHECK:
  cargo xtask demo-check [path]

  不带参数：检查 percent-host/demos/ 下所有 .json 文件
  带路径参数：检查指定文件或目录

  检查内容：
    - JSON 解析错误
    - 组件参数（尺寸、描边、渐变颜色、波浪周期等）
    - 时间表数值是否在 [0, maximum] 内
"#
    );
}

//=============================================================================
// demo-check 命令实现
//=============================================================================

/// 默认配置目录（相对于 workspace root）
const DEMOS_DIR: &str = "percent-host/demos";

/// 检查回放配置
fn demo_check(path: Option<&str>) -> anyhow::Result<()> {
    let files = match path {
        Some(p) => {
            let path = PathBuf::from(p);
            if path.is_file() {
                vec![path]
            } else if path.is_dir() {
                collect_demo_files(&path)?
            } else {
                anyhow::bail!("路径不存在: {}", p);
            }
        }
        None => {
            let dir = Path::new(DEMOS_DIR);
            if !dir.exists() {
                anyhow::bail!(
                    "默认配置目录不存在: {}\n请在 workspace 根目录运行，或指定配置路径",
                    dir.display()
                );
            }
            collect_demo_files(dir)?
        }
    };

    if files.is_empty() {
        eprintln!("未找到配置文件（.json）");
        return Ok(());
    }

    eprintln!("\n==> 检查 {} 个配置文件...", files.len());

    let mut errors = 0;
    for file in &files {
        let result = DemoConfig::try_load(file).and_then(|config| config.validate());
        match result {
            Ok(()) => eprintln!("[OK] {}", file.display()),
            Err(e) => {
                eprintln!("[ERROR] {}: {}", file.display(), e);
                errors += 1;
            }
        }
    }

    eprintln!();
    if errors > 0 {
        eprintln!("❌ {} 个错误", errors);
        anyhow::bail!("配置检查发现错误");
    }
    eprintln!("✅ 检查通过，无错误");
    Ok(())
}

/// 收集目录下的所有配置文件
fn collect_demo_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
