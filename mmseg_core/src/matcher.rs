//! `matcher`：正向 / 逆向最大匹配。
//!
//! 两个方向的扫描互为镜像：
//! - 窗口从 `max_word_len` 开始，越界时收缩到剩余长度
//! - 命中词典或标点集合：切出，游标前进（后退）命中长度，窗口复位
//! - 未命中：窗口减一，在同一游标处重试
//! - 窗口减到 0 仍未命中：把该单字作为 `Unmatched` 强制切出，保证结果覆盖全部输入

use std::ops::Range;

use tracing::trace;

use crate::delimiter::DelimiterSet;
use crate::lexicon::Lexicon;
use crate::model::{Token, TokenKind};
use crate::sentence::Sentence;

/// Matcher：在一个扫描块内切词，结果按阅读顺序（从左到右）追加到 `out`。
pub(crate) trait Matcher {
    fn scan(&self, sentence: &Sentence<'_>, block: Range<usize>, out: &mut Vec<Token>);

    /// 依次扫描所有块。
    fn run(&self, sentence: &Sentence<'_>) -> Vec<Token> {
        let mut out = Vec::new();
        for block in sentence.blocks() {
            self.scan(sentence, block.clone(), &mut out);
        }
        out
    }
}

fn classify<L>(lexicon: &L, delimiters: &DelimiterSet, surface: &str) -> Option<TokenKind>
where
    L: Lexicon + ?Sized,
{
    if delimiters.contains_str(surface) {
        Some(TokenKind::Delimiter)
    } else if lexicon.contains(surface) {
        Some(TokenKind::Word)
    } else {
        None
    }
}

/// 正向最大匹配（从左到右）。
pub(crate) struct ForwardMatcher<'a, L: ?Sized> {
    pub lexicon: &'a L,
    pub delimiters: &'a DelimiterSet,
}

impl<L> Matcher for ForwardMatcher<'_, L>
where
    L: Lexicon + ?Sized,
{
    fn scan(&self, sentence: &Sentence<'_>, block: Range<usize>, out: &mut Vec<Token>) {
        let max_len = self.lexicon.max_word_len();
        let mut cursor = block.start;
        let mut window = max_len;

        while cursor < block.end {
            window = window.min(block.end - cursor);
            if window == 0 {
                trace!(cursor, "forward: unmatched char");
                out.push(sentence.token(cursor, cursor + 1, TokenKind::Unmatched));
                cursor += 1;
                window = max_len;
                continue;
            }
            let end = cursor + window;
            match classify(self.lexicon, self.delimiters, sentence.slice(cursor, end)) {
                Some(kind) => {
                    out.push(sentence.token(cursor, end, kind));
                    cursor = end;
                    window = max_len;
                }
                None => window -= 1,
            }
        }
    }
}

/// 逆向最大匹配（从右到左）；窗口锚定在游标的末端。
pub(crate) struct ReverseMatcher<'a, L: ?Sized> {
    pub lexicon: &'a L,
    pub delimiters: &'a DelimiterSet,
}

impl<L> Matcher for ReverseMatcher<'_, L>
where
    L: Lexicon + ?Sized,
{
    fn scan(&self, sentence: &Sentence<'_>, block: Range<usize>, out: &mut Vec<Token>) {
        let max_len = self.lexicon.max_word_len();
        let mut cursor = block.end;
        let mut window = max_len;
        // 逆序收集，最后翻转成阅读顺序
        let mut matched = Vec::new();

        while cursor > block.start {
            window = window.min(cursor - block.start);
            if window == 0 {
                trace!(cursor, "reverse: unmatched char");
                matched.push(sentence.token(cursor - 1, cursor, TokenKind::Unmatched));
                cursor -= 1;
                window = max_len;
                continue;
            }
            let start = cursor - window;
            match classify(self.lexicon, self.delimiters, sentence.slice(start, cursor)) {
                Some(kind) => {
                    matched.push(sentence.token(start, cursor, kind));
                    cursor = start;
                    window = max_len;
                }
                None => window -= 1,
            }
        }

        matched.reverse();
        out.append(&mut matched);
    }
}
