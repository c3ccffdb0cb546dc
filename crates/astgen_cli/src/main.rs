use anyhow::{Context, Result};
use astgen_diagnostics::{Diagnostic, Emitter};
use astgen_driver::{generate, write_output};
use clap::error::ErrorKind;
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "astgen")]
#[command(about = "AST 层级代码生成器 - 从层级描述生成 C++ 头文件", version)]
struct Cli {
    /// 层级描述文件
    spec_file: PathBuf,

    /// 输出目录（不存在时自动创建）
    output_dir: PathBuf,

    /// 生成文件的扩展名 (默认: hpp)
    #[arg(short, long, default_value = "hpp")]
    extension: String,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help / --version 走 clap 的正常出口
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        // 参数不对：用法说明打到标准输出，退出码 1，不生成任何东西
        Err(err) => {
            println!("{}", err.render());
            process::exit(1);
        }
    };

    let file_path = cli.spec_file.display().to_string();

    // 1. 读取描述文件
    println!("📦 解析 {} ...", file_path);
    let source = fs::read_to_string(&cli.spec_file)
        .with_context(|| format!("failed to read {}", file_path))?;

    // 2. 生成头文件文本
    let output = match generate(&source) {
        Ok(output) => output,
        Err(err) => {
            err.emit(Some(&file_path), Some(&source));
            eprintln!("❌ 生成失败");
            process::exit(1);
        }
    };

    // 3. 输出警告
    if !output.warnings.is_empty() {
        let emitter = Emitter::new();
        for warning in &output.warnings {
            emitter.emit(&Diagnostic::warning(warning.as_str()).with_file(file_path.as_str()));
        }
    }

    // 4. 写出文件
    let path = write_output(&cli.output_dir, &output, &cli.extension)
        .with_context(|| format!("failed to write into {}", cli.output_dir.display()))?;
    println!("✅ 成功生成 {}", path.display());

    Ok(())
}
