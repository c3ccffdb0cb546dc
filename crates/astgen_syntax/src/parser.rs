//! Parser Module
//!
//! 描述文件的行语法解析器。
//!
//! 文件结构（空白行被词法阶段折叠掉）：
//!
//! ```text
//! 第 1 行   逗号分隔的 include 指令
//! 第 2 行   基类名
//! 第 3 行   基类指针别名
//! 其余各行  变体描述：`Name -> Type1 field1, Type2 field2, ...`
//! ```

use crate::ast::{Field, Specification, Variant};
use crate::lexer::Token;
use chumsky::prelude::*;

pub type ParserError = Simple<Token>;

/// 解析一个词
fn atom() -> impl Parser<Token, String, Error = ParserError> + Clone {
    select! { Token::Atom(word) => word }
}

/// 解析一个换行分隔符
///
/// 带空格的空白行会产生连续的 Newline token，这里一并吃掉。
fn newline() -> impl Parser<Token, (), Error = ParserError> + Clone {
    just(Token::Newline).repeated().at_least(1).ignored()
}

/// 解析一条 include 描述：同一段里的词用空格连回去
fn include_parser() -> impl Parser<Token, String, Error = ParserError> + Clone {
    atom().repeated().at_least(1).map(|words| words.join(" "))
}

/// 解析一个字段描述：最后一个词是标识符，前面的词是类型
fn field_parser() -> impl Parser<Token, Field, Error = ParserError> + Clone {
    atom()
        .repeated()
        .at_least(2)
        .try_map(|words, span| Field::from_words(&words).map_err(|msg| Simple::custom(span, msg)))
}

/// 解析一条变体行：`Name -> fields`（字段列表可以为空）
fn variant_parser() -> impl Parser<Token, Variant, Error = ParserError> + Clone {
    atom()
        .then_ignore(just(Token::Arrow))
        .then(
            field_parser()
                .separated_by(just(Token::Comma))
                .allow_trailing(),
        )
        .map(|(name, fields)| Variant { name, fields })
}

/// 主入口：解析整个描述文件
pub fn spec_parser() -> impl Parser<Token, Specification, Error = ParserError> {
    let includes = include_parser()
        .separated_by(just(Token::Comma))
        .at_least(1);

    newline()
        .or_not()
        .ignore_then(includes)
        .then_ignore(newline())
        .then(atom())
        .then_ignore(newline())
        .then(atom())
        .then(newline().ignore_then(variant_parser()).repeated())
        .then_ignore(newline().or_not())
        .then_ignore(end())
        .map(
            |(((includes, base_name), pointer_alias), variants)| Specification {
                includes,
                base_name,
                pointer_alias,
                variants,
            },
        )
}
