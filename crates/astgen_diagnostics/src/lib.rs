//! Astgen Diagnostics
//!
//! 统一的诊断系统，为 astgen 生成器提供清晰、美观的错误报告。
//!
//! # 核心类型
//!
//! - [`Diagnostic`] - 诊断信息主体
//! - [`DiagnosticLevel`] - 诊断级别（Error/Warning/Note）
//! - [`DiagnosticSink`] - 诊断收集器
//! - [`Emitter`] - 诊断输出器
//!
//! # 示例
//!
//! ```rust
//! use astgen_diagnostics::{Diagnostic, DiagnosticSink, Emitter};
//!
//! let mut sink = DiagnosticSink::new();
//!
//! // 添加错误
//! sink.add(
//!     Diagnostic::error("variant line missing '->' separator")
//!         .span(42..47)
//!         .with_file("expr.ast")
//!         .with_help("write the line as `Name -> Type field, ...`"),
//! );
//!
//! // 检查是否有错误
//! if sink.has_errors() {
//!     let emitter = Emitter::new();
//!     emitter.emit_all(sink.diagnostics());
//! }
//! ```

pub mod diagnostic;
pub mod emitter;
pub mod level;
pub mod sink;

// 重新导出核心类型
pub use diagnostic::{Diagnostic, Span};
pub use emitter::Emitter;
pub use level::DiagnosticLevel;
pub use sink::DiagnosticSink;
