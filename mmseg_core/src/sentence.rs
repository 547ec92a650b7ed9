//! 输入串的内部表现：字符下标 -> 字节下标映射，以及按空白/标点划分的扫描块。

use std::ops::Range;

use crate::delimiter::DelimiterSet;
use crate::model::{Token, TokenKind};

/// 一次调用内有效的输入视图。所有窗口运算都以字符为单位。
pub(crate) struct Sentence<'t> {
    input: &'t str,
    c2b: Vec<usize>,
    blocks: Vec<Range<usize>>,
}

impl<'t> Sentence<'t> {
    /// 建立字符索引并划分扫描块。
    ///
    /// - 标点字符单独成块，因此任何匹配窗口都不会跨越标点
    /// - `ignore_whitespace` 时空白字符不属于任何块，也不会出现在结果中
    pub(crate) fn new(input: &'t str, delimiters: &DelimiterSet, ignore_whitespace: bool) -> Self {
        let mut c2b = Vec::with_capacity(input.len() + 1);
        let mut blocks = Vec::new();
        let mut open: Option<usize> = None;

        for (ci, (bi, ch)) in input.char_indices().enumerate() {
            c2b.push(bi);
            let skip = ignore_whitespace && ch.is_whitespace();
            let isolated = delimiters.contains(ch);
            if skip || isolated {
                if let Some(start) = open.take() {
                    blocks.push(start..ci);
                }
                if isolated && !skip {
                    blocks.push(ci..ci + 1);
                }
            } else if open.is_none() {
                open = Some(ci);
            }
        }
        c2b.push(input.len());
        if let Some(start) = open {
            blocks.push(start..c2b.len() - 1);
        }

        Self { input, c2b, blocks }
    }

    /// 字符数。
    #[cfg(test)]
    pub(crate) fn len_char(&self) -> usize {
        self.c2b.len() - 1
    }

    pub(crate) fn blocks(&self) -> &[Range<usize>] {
        &self.blocks
    }

    /// 字符范围 `[start, end)` 对应的子串。
    #[inline]
    pub(crate) fn slice(&self, start: usize, end: usize) -> &'t str {
        &self.input[self.c2b[start]..self.c2b[end]]
    }

    pub(crate) fn token(&self, start: usize, end: usize, kind: TokenKind) -> Token {
        Token::new(
            self.slice(start, end),
            kind,
            start..end,
            self.c2b[start]..self.c2b[end],
        )
    }
}
