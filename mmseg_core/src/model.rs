use std::ops::Range;

/// 切出的词属于哪一类。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// 词典中的词
    Word,
    /// 标点集合中的字符
    Delimiter,
    /// 词典和标点集合都不认识的单字（强制切出）
    Unmatched,
}

/// 分词结果中的一个词。
///
/// 注意：`range_char` 是**在原始输入中的字符下标范围**，不是字节范围；
/// 忽略空白时，相邻两个词的范围之间可能有空隙。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    surface: String,
    kind: TokenKind,
    range_char: Range<usize>,
    range_byte: Range<usize>,
}

impl Token {
    pub(crate) fn new(
        surface: &str,
        kind: TokenKind,
        range_char: Range<usize>,
        range_byte: Range<usize>,
    ) -> Self {
        Self {
            surface: surface.to_owned(),
            kind,
            range_char,
            range_byte,
        }
    }

    /// 词的文本。
    pub fn surface(&self) -> &str {
        &self.surface
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn range_char(&self) -> Range<usize> {
        self.range_char.clone()
    }

    pub fn range_byte(&self) -> Range<usize> {
        self.range_byte.clone()
    }

    /// 字符数。
    pub fn char_len(&self) -> usize {
        self.range_char.len()
    }

    pub fn into_surface(self) -> String {
        self.surface
    }
}
