//! Generation Errors
//!
//! 驱动层的错误类型，集成统一诊断系统

use crate::check::CheckError;
use astgen_diagnostics::{Diagnostic, DiagnosticSink, Emitter, Span};
use thiserror::Error;

/// 语法分析阶段的一个问题（消息加输入位置）
#[derive(Debug, Clone)]
pub struct ParseIssue {
    pub message: String,
    pub span: Span,
}

/// 生成错误
#[derive(Debug, Error)]
pub enum GenerateError {
    /// 词法错误
    #[error("Lexical error: unrecognized input `{text}`")]
    LexError { text: String, span: Span },

    /// 语法错误（可能有多个）
    #[error("Parse error:\n{}", format_parse_issues(.0))]
    ParseError(Vec<ParseIssue>),

    /// 规格检查错误（可能有多个）
    #[error("Invalid specification:\n{}", format_check_errors(.0))]
    CheckErrors(Vec<CheckError>),

    /// IO 错误
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl GenerateError {
    /// 转换为诊断列表并收集到 DiagnosticSink
    pub fn collect_to_sink(&self, sink: &mut DiagnosticSink, file_path: Option<&str>) {
        let mut add_diag = |diag: Diagnostic| {
            if let Some(path) = file_path {
                sink.add(diag.with_file(path));
            } else {
                sink.add(diag);
            }
        };

        match self {
            GenerateError::LexError { text, span } => {
                add_diag(
                    Diagnostic::error(format!("unrecognized input `{}`", text))
                        .span(span.clone()),
                );
            }
            GenerateError::ParseError(issues) => {
                for issue in issues {
                    add_diag(Diagnostic::error(issue.message.clone()).span(issue.span.clone()));
                }
            }
            GenerateError::CheckErrors(errors) => {
                for err in errors {
                    add_diag(err.to_diagnostic());
                }
            }
            GenerateError::IoError(err) => {
                add_diag(Diagnostic::error(format!("IO error: {}", err)));
            }
        }
    }

    /// 使用统一诊断系统输出错误
    pub fn emit(&self, file_path: Option<&str>, source: Option<&str>) {
        let mut sink = DiagnosticSink::new();
        self.collect_to_sink(&mut sink, file_path);

        let emitter = Emitter::new();
        if let Some(src) = source {
            for diag in sink.diagnostics() {
                emitter.emit_with_source(diag, src);
            }
        } else {
            emitter.emit_all(sink.diagnostics());
        }
    }
}

/// 格式化语法问题列表
fn format_parse_issues(issues: &[ParseIssue]) -> String {
    issues
        .iter()
        .enumerate()
        .map(|(i, issue)| format!("  {}. {}", i + 1, issue.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 格式化检查错误列表
fn format_check_errors(errors: &[CheckError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, e)| format!("  {}. {}", i + 1, e))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 生成结果类型
pub type GenerateResult<T> = Result<T, GenerateError>;
