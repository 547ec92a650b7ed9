use hashbrown::HashSet;

/// 词典抽象：core 不关心词典来自文件/内存/网络。
///
/// 约定：
/// - `contains` 做精确匹配（整词）
/// - `max_word_len` 以字符（`char`）计，不是字节
/// - 构造后只读；多线程共享同一个词典不需要加锁
pub trait Lexicon: Send + Sync {
    /// `word` 是否为词典中的词。
    fn contains(&self, word: &str) -> bool;

    /// 匹配窗口的上限（字符数）。
    fn max_word_len(&self) -> usize;
}

impl<L> Lexicon for &L
where
    L: Lexicon + ?Sized,
{
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }

    fn max_word_len(&self) -> usize {
        (**self).max_word_len()
    }
}

/// 内存词表：词集合 + 最大词长。
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: HashSet<String>,
    max_len: usize,
}

impl WordSet {
    /// 使用调用方给定的最大词长构造。
    ///
    /// `max_len` 可以小于最长词条（长词永远不会被匹配），这里不做校正。
    pub fn new<I, S>(words: I, max_len: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words
                .into_iter()
                .map(Into::into)
                .filter(|w: &String| !w.is_empty())
                .collect(),
            max_len,
        }
    }

    /// 构造并以最长词条的字符数作为最大词长。
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new(words, 0);
        set.max_len = set.words.iter().map(|w| w.chars().count()).max().unwrap_or(0);
        set
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Lexicon for WordSet {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn max_word_len(&self) -> usize {
        self.max_len
    }
}

impl<S> FromIterator<S> for WordSet
where
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
