//! 描述文件解析后的结构化记录
//!
//! 一次生成运行构建一份 [`Specification`]，随即被渲染消费，不做任何持久化。

/// 一份完整的层级描述
#[derive(Debug, Clone, PartialEq)]
pub struct Specification {
    /// include 指令（保持输入顺序，渲染时再归一化）
    pub includes: Vec<String>,
    /// 基类名，如 `Expr`
    pub base_name: String,
    /// 指向基类的拥有式指针别名，如 `ExprPtr`
    pub pointer_alias: String,
    /// 变体列表（保持输入顺序）
    pub variants: Vec<Variant>,
}

/// 层级中的一个具体变体（"子类"）
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    pub name: String,
    /// 字段列表（保持输入顺序，可以为空）
    pub fields: Vec<Field>,
}

/// 变体的一个字段
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// C++ 类型文本，如 `ExprPtr` 或 `std::vector<ExprPtr>`
    pub ty: String,
    /// 成员标识符（所有权标记已剥离）
    pub name: String,
    /// 所有权标记：该成员接管传入值，构造时用 std::move 初始化
    pub owned: bool,
}

impl Field {
    /// 从一条字段描述的词序列构造字段记录
    ///
    /// 约定：最后一个词是标识符，其余的词拼成类型文本。
    /// `*` 前缀表示所有权标记，接受写在标识符上（`ExprPtr *left`）
    /// 或类型的第一个词上（`*Expr left`），两种写法都会被剥离。
    pub fn from_words(words: &[String]) -> Result<Self, String> {
        let (ident, ty_words) = match words.split_last() {
            Some(split) => split,
            None => return Err("empty field descriptor".to_string()),
        };
        if ty_words.is_empty() {
            return Err(format!("field `{}` is missing a type", ident));
        }

        let mut owned = false;

        let mut name = ident.as_str();
        if let Some(stripped) = name.strip_prefix('*') {
            owned = true;
            name = stripped;
        }

        let mut ty = ty_words.join(" ");
        if let Some(stripped) = ty.strip_prefix('*') {
            owned = true;
            ty = stripped.to_string();
        }

        if name.is_empty() {
            return Err("ownership marker without an identifier".to_string());
        }
        if ty.is_empty() {
            return Err(format!("field `{}` has an empty type", name));
        }

        Ok(Self {
            ty,
            name: name.to_string(),
            owned,
        })
    }
}
