//! Astgen Code Generation
//!
//! 把解析好的层级描述渲染成 C++ 头文件文本：
//! 基类、各具体变体子类、visitor 接口，以及配套的
//! 拥有式指针别名和泛型工厂函数。
//!
//! # 架构
//!
//! - `include.rs` - include 指令归一化
//! - `render.rs` - 头文件各段的渲染

pub mod include;
pub mod render;

pub use include::normalize_include;
pub use render::HeaderRenderer;

use astgen_syntax::Specification;

/// 渲染配置
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// visitor 方法与 accept 的共同返回值类型
    pub result_type: String,
    /// 缩进文本（原工具的输出使用制表符）
    pub indent: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            result_type: "LiteralValue".to_string(),
            indent: "\t".to_string(),
        }
    }
}

/// 渲染 C++ 头文件
///
/// 渲染是纯函数，输出顺序固定：
/// 前导段（includes、前向声明、别名、工厂）、
/// visitor 接口、基类、各变体类。
pub fn render_header(spec: &Specification, opts: &RenderOptions) -> String {
    HeaderRenderer::new(spec, opts).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use astgen_syntax::{Field, Variant};

    /// 构造规格说明里的示例：Expr 层级，Literal 和 Binary 两个变体
    fn make_expr_spec() -> Specification {
        Specification {
            includes: vec!["iostream".to_string()],
            base_name: "Expr".to_string(),
            pointer_alias: "ExprPtr".to_string(),
            variants: vec![
                Variant {
                    name: "Literal".to_string(),
                    fields: vec![Field {
                        ty: "LiteralValue".to_string(),
                        name: "value".to_string(),
                        owned: false,
                    }],
                },
                Variant {
                    name: "Binary".to_string(),
                    fields: vec![
                        Field {
                            ty: "Expr".to_string(),
                            name: "left".to_string(),
                            owned: true,
                        },
                        Field {
                            ty: "Token".to_string(),
                            name: "op".to_string(),
                            owned: false,
                        },
                        Field {
                            ty: "Expr".to_string(),
                            name: "right".to_string(),
                            owned: true,
                        },
                    ],
                },
            ],
        }
    }

    #[test]
    fn test_render_expr_hierarchy() {
        let header = render_header(&make_expr_spec(), &RenderOptions::default());

        // 前导段
        assert!(header.starts_with("#pragma once\n"));
        assert!(header.contains("#include <iostream>"));
        assert!(header.contains("#include <memory>"));
        assert!(header.contains("class Expr;"));
        assert!(header.contains("class Literal;"));
        assert!(header.contains("class Binary;"));
        assert!(header.contains("using ExprPtr = std::unique_ptr<Expr>;"));
        assert!(header.contains("std::unique_ptr<T> makeExpr(Args&&... args)"));

        // visitor 接口
        assert!(header.contains("class ExprVisitor {"));
        assert!(header.contains("virtual LiteralValue visitLiteral(Literal& expr) = 0;"));
        assert!(header.contains("virtual LiteralValue visitBinary(Binary& expr) = 0;"));
        assert!(header.contains("virtual ~ExprVisitor() = default;"));

        // 基类
        assert!(header.contains("virtual LiteralValue accept(ExprVisitor& visitor) = 0;"));
        assert!(header.contains("virtual ~Expr() = default;"));

        // 变体类
        assert!(header.contains("class Literal : public Expr {"));
        assert!(header.contains("class Binary : public Expr {"));
        assert!(header.contains("return visitor.visitLiteral(*this);"));
        assert!(header.contains("return visitor.visitBinary(*this);"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let spec = make_expr_spec();
        let opts = RenderOptions::default();

        assert_eq!(render_header(&spec, &opts), render_header(&spec, &opts));
    }

    #[test]
    fn test_render_preserves_order() {
        let header = render_header(&make_expr_spec(), &RenderOptions::default());

        let literal_pos = header.find("visitLiteral").unwrap();
        let binary_pos = header.find("visitBinary").unwrap();
        assert!(literal_pos < binary_pos);

        // Binary 的字段顺序：left, op, right
        let ctor_pos = header.find("Binary(Expr left, Token op, Expr right)").unwrap();
        assert!(ctor_pos > binary_pos);
    }

    #[test]
    fn test_owned_fields_are_moved() {
        let header = render_header(&make_expr_spec(), &RenderOptions::default());

        // owned 字段 move 初始化，普通字段直接拷贝
        assert!(header.contains("left(std::move(left))"));
        assert!(header.contains("right(std::move(right))"));
        assert!(header.contains("op(op)"));
        assert!(header.contains("value(value)"));
        assert!(!header.contains("op(std::move(op))"));
    }

    #[test]
    fn test_visitor_method_count_matches_variants() {
        let spec = make_expr_spec();
        let header = render_header(&spec, &RenderOptions::default());

        let count = header.matches("= 0;").count();
        // 每个变体一个 visit 方法，visitor 和基类各一个 accept/析构之外的纯虚方法
        // visit* 两个 + accept 一个
        assert_eq!(count, spec.variants.len() + 1);
    }

    #[test]
    fn test_variant_without_fields() {
        let spec = Specification {
            includes: vec![],
            base_name: "Stmt".to_string(),
            pointer_alias: "StmtPtr".to_string(),
            variants: vec![Variant {
                name: "Break".to_string(),
                fields: vec![],
            }],
        };

        let header = render_header(&spec, &RenderOptions::default());

        // 无字段时构造函数没有成员初始化列表
        assert!(header.contains("\tBreak() {}"));
        assert!(!header.contains("Break() : "));
    }

    #[test]
    fn test_spec_without_variants() {
        let spec = Specification {
            includes: vec!["iostream".to_string()],
            base_name: "Expr".to_string(),
            pointer_alias: "ExprPtr".to_string(),
            variants: vec![],
        };

        let header = render_header(&spec, &RenderOptions::default());

        // visitor 和基类仍然生成，只是没有 visit 方法和子类
        assert!(header.contains("class ExprVisitor {"));
        // 唯一的纯虚方法是基类的 accept
        assert_eq!(header.matches("= 0;").count(), 1);
        assert!(header.contains("virtual ~ExprVisitor() = default;"));
    }

    #[test]
    fn test_custom_result_type() {
        let opts = RenderOptions {
            result_type: "Value".to_string(),
            ..Default::default()
        };
        let header = render_header(&make_expr_spec(), &opts);

        assert!(header.contains("virtual Value visitLiteral(Literal& expr) = 0;"));
        assert!(header.contains("virtual Value accept(ExprVisitor& visitor) = 0;"));
        assert!(!header.contains("LiteralValue visit"));
    }
}
