//! include 指令归一化
//!
//! 描述文件第一行的每一段可以是完整的 `#include` 指令，
//! 也可以只写头文件名，这里统一补全成合法的指令。

/// 归一化一条 include 描述
///
/// - 以 `#` 开头：原样保留
/// - 以 `<` 或 `"` 开头：补上 `#include ` 前缀
/// - 含 `.` 或 `/` 的裸名字：按本地头文件加引号
/// - 其余裸名字：按系统头文件加尖括号
pub fn normalize_include(spec: &str) -> String {
    let spec = spec.trim();
    if spec.starts_with('#') {
        spec.to_string()
    } else if spec.starts_with('<') || spec.starts_with('"') {
        format!("#include {}", spec)
    } else if spec.contains('.') || spec.contains('/') {
        format!("#include \"{}\"", spec)
    } else {
        format!("#include <{}>", spec)
    }
}
