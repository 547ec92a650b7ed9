//! `delimiter`：标点集合。集合中的字符总是单独成词，与词典无关。

use hashbrown::HashSet;

/// 默认标点：ASCII 标点 + 常用全角中文标点。
pub const DEFAULT_DELIMITERS: &str = ",./;'<>?:\"-=_+!@#$%^&*(){}，。？、；‘“’”·~[]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterSet {
    chars: HashSet<char>,
}

impl Default for DelimiterSet {
    fn default() -> Self {
        Self::from_chars(DEFAULT_DELIMITERS)
    }
}

impl DelimiterSet {
    /// 空集合：没有任何字符被视为标点。
    pub fn empty() -> Self {
        Self {
            chars: HashSet::new(),
        }
    }

    /// 由字符串中的每个字符组成集合（重复字符自动合并）。
    pub fn from_chars(s: &str) -> Self {
        s.chars().collect()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// `s` 恰好是一个标点字符。
    pub fn contains_str(&self, s: &str) -> bool {
        let mut it = s.chars();
        match (it.next(), it.next()) {
            (Some(ch), None) => self.contains(ch),
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl FromIterator<char> for DelimiterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}
