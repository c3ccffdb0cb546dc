use logos::Logos;
use std::fmt;

/// 描述文件的词法单元
///
/// 格式是行导向的，所以换行是一个真正的 token 而不是被跳过的空白。
#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)] // chumsky 的 Simple 错误类型要求 Eq 和 Hash
#[logos(skip r"[ \t\r\f]+")]
pub enum Token {
    // 变体名和字段列表的分隔符
    #[token("->")]
    Arrow,

    #[token(",")]
    Comma,

    // 连续的换行折叠为一个 token，空白行对语法不可见
    #[regex(r"\n+")]
    Newline,

    // 一个"词"：标识符、C++ 类型的一段、或 include 指令的一段
    // 字符集不含 '-'，保证 "->" 总是被识别为 Arrow；
    // 含 '*'，让所有权标记和它标记的词保持在同一个 token 里
    #[regex(r##"[A-Za-z0-9_:<>&"#\.\*/\[\]]+"##, |lex| lex.slice().to_string())]
    Atom(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
