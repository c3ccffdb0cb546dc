//! 头文件渲染
//!
//! 把一份 [`Specification`] 渲染成 C++ 头文件文本，
//! 固定顺序：前导段、visitor 接口、基类、各具体变体类。
//! 渲染是纯函数：同一份输入永远得到同一份输出，
//! 变体和字段的输出顺序与输入顺序完全一致。

use crate::include::normalize_include;
use crate::RenderOptions;
use astgen_syntax::{Specification, Variant};

/// 头文件渲染器
pub struct HeaderRenderer<'a> {
    spec: &'a Specification,
    opts: &'a RenderOptions,
    out: String,
}

impl<'a> HeaderRenderer<'a> {
    pub fn new(spec: &'a Specification, opts: &'a RenderOptions) -> Self {
        Self {
            spec,
            opts,
            out: String::new(),
        }
    }

    /// 渲染完整头文件
    pub fn render(mut self) -> String {
        self.preamble();
        self.visitor_interface();
        self.base_class();
        self.variant_classes();
        self.out
    }

    /// 前导段：includes、前向声明、指针别名、泛型工厂
    fn preamble(&mut self) {
        self.out.push_str("#pragma once\n\n");

        for include in &self.spec.includes {
            self.out.push_str(&normalize_include(include));
            self.out.push('\n');
        }
        // unique_ptr 需要 <memory>
        self.out.push_str("#include <memory>\n\n");

        self.out
            .push_str(&format!("class {};\n", self.spec.base_name));
        for variant in &self.spec.variants {
            self.out.push_str(&format!("class {};\n", variant.name));
        }

        self.out.push_str(&format!(
            "\nusing {} = std::unique_ptr<{}>;\n",
            self.spec.pointer_alias, self.spec.base_name
        ));

        self.out
            .push_str("\ntemplate <typename T, typename... Args>\n");
        self.out.push_str(&format!(
            "std::unique_ptr<T> make{}(Args&&... args) {{\n\
             {}return std::make_unique<T>(std::forward<Args>(args)...);\n\
             }}\n\n",
            self.spec.base_name, self.opts.indent
        ));
    }

    /// visitor 接口：每个变体一个纯虚 visit 方法
    fn visitor_interface(&mut self) {
        let base = &self.spec.base_name;
        let param = base.to_lowercase();

        self.out
            .push_str(&format!("class {}Visitor {{\npublic:\n", base));
        for variant in &self.spec.variants {
            self.out.push_str(&format!(
                "{}virtual {} visit{}({}& {}) = 0;\n",
                self.opts.indent, self.opts.result_type, variant.name, variant.name, param
            ));
        }
        self.out.push_str(&format!(
            "{}virtual ~{}Visitor() = default;\n}};\n\n",
            self.opts.indent, base
        ));
    }

    /// 基类：纯虚 accept 加虚析构
    fn base_class(&mut self) {
        let base = &self.spec.base_name;

        self.out.push_str(&format!("class {} {{\npublic:\n", base));
        self.out.push_str(&format!(
            "{}virtual {} accept({}Visitor& visitor) = 0;\n",
            self.opts.indent, self.opts.result_type, base
        ));
        self.out.push_str(&format!(
            "{}virtual ~{}() = default;\n}};\n",
            self.opts.indent, base
        ));
    }

    /// 所有具体变体类，按输入顺序
    fn variant_classes(&mut self) {
        for variant in &self.spec.variants {
            self.variant_class(variant);
        }
    }

    fn variant_class(&mut self, variant: &Variant) {
        let base = &self.spec.base_name;
        let indent = &self.opts.indent;

        self.out.push_str(&format!(
            "\nclass {} : public {} {{\npublic:\n",
            variant.name, base
        ));

        // 成员：每个字段一个
        for field in &variant.fields {
            self.out
                .push_str(&format!("{}{} {};\n", indent, field.ty, field.name));
        }

        // 构造函数：全部按值接收，owned 字段用 std::move 初始化
        if variant.fields.is_empty() {
            self.out
                .push_str(&format!("\n{}{}() {{}}\n", indent, variant.name));
        } else {
            let params = variant
                .fields
                .iter()
                .map(|f| format!("{} {}", f.ty, f.name))
                .collect::<Vec<_>>()
                .join(", ");
            let inits = variant
                .fields
                .iter()
                .map(|f| {
                    if f.owned {
                        format!("{}(std::move({}))", f.name, f.name)
                    } else {
                        format!("{}({})", f.name, f.name)
                    }
                })
                .collect::<Vec<_>>()
                .join(", ");

            self.out.push_str(&format!(
                "\n{}{}({}) : {} {{}}\n",
                indent, variant.name, params, inits
            ));
        }

        // accept 重载，转发到对应的 visit 方法
        self.out.push_str(&format!(
            "{}{} accept({}Visitor& visitor) override {{\n\
             {}{}return visitor.visit{}(*this);\n\
             {}}}\n}};\n",
            indent, self.opts.result_type, base, indent, indent, variant.name, indent
        ));
    }
}
