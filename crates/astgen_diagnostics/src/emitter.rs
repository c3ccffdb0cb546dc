//! Emitter - 诊断输出器
//!
//! 负责将诊断信息格式化输出。
//! 有输入源码时使用 ariadne 渲染带标注的报错片段，
//! 否则退回到简单的彩色文本格式。

use crate::diagnostic::Diagnostic;
use crate::level::DiagnosticLevel;
use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use colored::*;

/// 诊断输出器
pub struct Emitter {
    /// 是否使用颜色
    use_colors: bool,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter {
    /// 创建新的输出器
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// 创建无颜色的输出器
    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }

    /// 输出单个诊断
    pub fn emit(&self, diagnostic: &Diagnostic) {
        if self.use_colors {
            self.emit_colored(diagnostic);
        } else {
            self.emit_plain(diagnostic);
        }
    }

    /// 输出所有诊断
    pub fn emit_all(&self, diagnostics: &[Diagnostic]) {
        for diagnostic in diagnostics {
            self.emit(diagnostic);
            println!(); // 诊断之间空行
        }
    }

    /// 结合输入源码输出诊断，渲染带标注的源码片段
    ///
    /// 诊断没有位置信息时退回 [`Emitter::emit`]。
    pub fn emit_with_source(&self, diagnostic: &Diagnostic, source: &str) {
        let Some(span) = diagnostic.span.clone() else {
            self.emit(diagnostic);
            return;
        };

        let (kind, color) = match diagnostic.level {
            DiagnosticLevel::Error => (ReportKind::Error, Color::Red),
            DiagnosticLevel::Warning => (ReportKind::Warning, Color::Yellow),
            DiagnosticLevel::Note => (ReportKind::Advice, Color::Fixed(8)),
        };

        let mut report = Report::build(kind, (), span.start)
            .with_config(Config::default().with_color(self.use_colors))
            .with_message(&diagnostic.message)
            .with_label(
                Label::new(span)
                    .with_message(&diagnostic.message)
                    .with_color(color),
            );

        if !diagnostic.notes.is_empty() {
            report = report.with_note(diagnostic.notes.join("\n"));
        }
        if !diagnostic.helps.is_empty() {
            report = report.with_help(diagnostic.helps.join("\n"));
        }

        report.finish().print(Source::from(source)).ok();
    }

    /// 输出带颜色的诊断
    fn emit_colored(&self, diagnostic: &Diagnostic) {
        // 级别和消息
        println!(
            "{}: {}",
            diagnostic.level.colored_name(),
            diagnostic.message.bold()
        );

        self.emit_location(diagnostic, |text| text.blue().bold().to_string());

        // 注释
        for note in &diagnostic.notes {
            println!(
                "  {} {}",
                "=".blue().bold(),
                format!("note: {}", note).bright_black()
            );
        }

        // 建议
        for help in &diagnostic.helps {
            println!(
                "  {} {}",
                "=".green().bold(),
                format!("help: {}", help).green()
            );
        }
    }

    /// 输出纯文本诊断
    fn emit_plain(&self, diagnostic: &Diagnostic) {
        // 级别和消息
        println!("{}: {}", diagnostic.level, diagnostic.message);

        self.emit_location(diagnostic, |text| text.to_string());

        // 注释
        for note in &diagnostic.notes {
            println!("  = note: {}", note);
        }

        // 建议
        for help in &diagnostic.helps {
            println!("  = help: {}", help);
        }
    }

    /// 输出位置行（文件路径和/或字节偏移）
    fn emit_location(&self, diagnostic: &Diagnostic, paint: impl Fn(&str) -> String) {
        let arrow = paint("-->");
        match (&diagnostic.file, &diagnostic.span) {
            (Some(file), Some(span)) => {
                println!("  {} {} ({}..{})", arrow, file, span.start, span.end)
            }
            (Some(file), None) => println!("  {} {}", arrow, file),
            (None, Some(span)) => println!("  {} {}..{}", arrow, span.start, span.end),
            (None, None) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emitter_creation() {
        let emitter = Emitter::new();
        assert!(emitter.use_colors);

        let emitter_no_color = Emitter::without_colors();
        assert!(!emitter_no_color.use_colors);
    }

    #[test]
    fn test_emit_basic() {
        let emitter = Emitter::without_colors();
        let diag = Diagnostic::error("test error");

        // 这个测试只是确保不会panic
        emitter.emit(&diag);
    }

    #[test]
    fn test_emit_with_details() {
        let emitter = Emitter::without_colors();
        let diag = Diagnostic::error("test error")
            .span(10..20)
            .with_file("expr.ast")
            .with_note("this is a note")
            .with_help("try this instead");

        emitter.emit(&diag);
    }

    #[test]
    fn test_emit_with_source_snippet() {
        let emitter = Emitter::without_colors();
        let source = "iostream\nExpr\nExprPtr\nLiteral LiteralValue value\n";
        let diag = Diagnostic::error("variant line missing '->' separator").span(23..30);

        // 带源码渲染同样不应 panic
        emitter.emit_with_source(&diag, source);
    }

    #[test]
    fn test_emit_with_source_without_span_falls_back() {
        let emitter = Emitter::without_colors();
        let diag = Diagnostic::warning("no span here");

        emitter.emit_with_source(&diag, "anything");
    }
}
