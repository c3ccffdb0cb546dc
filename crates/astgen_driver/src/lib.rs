//! Astgen Driver
//!
//! 生成器驱动模块，串联所有阶段：
//! 词法分析 → 语法分析 → 规格检查 → 头文件渲染 → 写出文件

pub mod check;
pub mod error;

pub use check::{check, CheckError};
pub use error::{GenerateError, GenerateResult, ParseIssue};

use astgen_codegen::{render_header, RenderOptions};
use astgen_syntax::ast::Specification;
use astgen_syntax::lexer::Token;
use astgen_syntax::parser::spec_parser;
use chumsky::{Parser, Stream};
use logos::Logos;
use std::fs;
use std::path::{Path, PathBuf};

/// 生成结果
#[derive(Debug)]
pub struct GenerateOutput {
    /// 渲染出的头文件文本
    pub header: String,
    /// 输出文件名主干（基类名的小写形式）
    pub file_stem: String,
    /// 警告信息
    pub warnings: Vec<String>,
}

/// 解析描述文本
pub fn parse_source(source: &str) -> GenerateResult<Specification> {
    // 词法分析，保留字节位置供报错使用
    let mut tokens = Vec::new();
    for (result, span) in Token::lexer(source).spanned() {
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => {
                return Err(GenerateError::LexError {
                    text: source[span.clone()].to_string(),
                    span,
                })
            }
        }
    }

    // 语法分析
    let eoi = source.len()..source.len() + 1;
    spec_parser()
        .parse(Stream::from_iter(eoi, tokens.into_iter()))
        .map_err(|errors| {
            GenerateError::ParseError(
                errors
                    .into_iter()
                    .map(|e| ParseIssue {
                        message: e.to_string(),
                        span: e.span(),
                    })
                    .collect(),
            )
        })
}

/// 从描述文本生成头文件
///
/// # Arguments
/// * `source` - 层级描述文本
///
/// # Returns
/// * `Ok(GenerateOutput)` - 生成成功，返回头文件文本和警告
/// * `Err(GenerateError)` - 生成失败
///
/// # Example
/// ```
/// use astgen_driver::generate;
///
/// let source = "iostream\nExpr\nExprPtr\nLiteral -> LiteralValue value\n";
/// let output = generate(source).unwrap();
/// assert_eq!(output.file_stem, "expr");
/// ```
pub fn generate(source: &str) -> GenerateResult<GenerateOutput> {
    // 1. 词法 + 语法分析
    let spec = parse_source(source)?;

    // 2. 规格检查
    let warnings = check(&spec).map_err(GenerateError::CheckErrors)?;

    // 3. 渲染
    let header = render_header(&spec, &RenderOptions::default());

    Ok(GenerateOutput {
        header,
        file_stem: spec.base_name.to_lowercase(),
        warnings,
    })
}

/// 从文件生成
///
/// # Arguments
/// * `path` - 描述文件路径
pub fn generate_file(path: impl AsRef<Path>) -> GenerateResult<GenerateOutput> {
    let source = fs::read_to_string(path)?;
    generate(&source)
}

/// 写出生成的头文件，输出目录不存在时逐级创建
///
/// 文件名是 `<file_stem>.<extension>`，已存在时覆盖。
/// 返回写出的文件路径。
pub fn write_output(
    out_dir: impl AsRef<Path>,
    output: &GenerateOutput,
    extension: &str,
) -> GenerateResult<PathBuf> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)?;

    let path = out_dir.join(format!("{}.{}", output.file_stem, extension));
    fs::write(&path, &output.header)?;
    Ok(path)
}
