//! 规格检查
//!
//! 解析之后、渲染之前的一致性检查：
//! 变体名必须唯一，同一个变体里字段名不能重复。
//! 所有权标记约定本身不做强制校验，只对可疑用法给出警告。

use astgen_diagnostics::Diagnostic;
use astgen_syntax::Specification;
use std::collections::HashSet;
use thiserror::Error;

/// 检查错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// 变体名重复
    #[error("duplicate variant name: {0}")]
    DuplicateVariant(String),

    /// 变体名与基类同名
    #[error("variant `{0}` has the same name as the base type")]
    VariantShadowsBase(String),

    /// 同一变体内字段名重复
    #[error("duplicate field `{field}` in variant `{variant}`")]
    DuplicateField { variant: String, field: String },
}

impl CheckError {
    /// 转换为诊断
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.to_string())
    }
}

/// 检查一份描述
///
/// 通过时返回警告列表（可能为空），否则返回全部检查错误。
pub fn check(spec: &Specification) -> Result<Vec<String>, Vec<CheckError>> {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let mut seen = HashSet::new();
    for variant in &spec.variants {
        if !seen.insert(variant.name.as_str()) {
            errors.push(CheckError::DuplicateVariant(variant.name.clone()));
        }
        if variant.name == spec.base_name {
            errors.push(CheckError::VariantShadowsBase(variant.name.clone()));
        }

        let mut fields_seen = HashSet::new();
        for field in &variant.fields {
            if !fields_seen.insert(field.name.as_str()) {
                errors.push(CheckError::DuplicateField {
                    variant: variant.name.clone(),
                    field: field.name.clone(),
                });
            }
            if field.owned && !looks_like_handle(&field.ty, spec) {
                warnings.push(format!(
                    "field `{}` of `{}` carries an ownership marker but its type `{}` does not look like an owning handle",
                    field.name, variant.name, field.ty
                ));
            }
        }
    }

    if spec.variants.is_empty() {
        warnings.push("specification declares no variants".to_string());
    }

    if errors.is_empty() {
        Ok(warnings)
    } else {
        Err(errors)
    }
}

/// 判断类型文本是否像一个拥有式句柄
fn looks_like_handle(ty: &str, spec: &Specification) -> bool {
    ty == spec.pointer_alias || ty.contains(&spec.base_name) || ty.contains("Ptr")
}
