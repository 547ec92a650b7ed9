use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::delimiter::DelimiterSet;
use crate::error::{Result, SegmentError};
use crate::lexicon::{Lexicon, WordSet};
use crate::matcher::{ForwardMatcher, Matcher, ReverseMatcher};
use crate::model::Token;
use crate::resolver::{BidirectionalResolver, Resolver};
use crate::sentence::Sentence;

/// 匹配策略。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchMode {
    Forward,
    Reverse,
    Bidirectional,
}

impl MatchMode {
    pub const ALL: [MatchMode; 3] = [Self::Forward, Self::Reverse, Self::Bidirectional];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Reverse => "reverse",
            Self::Bidirectional => "bidirectional",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchMode {
    type Err = SegmentError;

    fn from_str(mode: &str) -> Result<Self> {
        match mode {
            "forward" | "fmm" => Ok(Self::Forward),
            "reverse" | "rmm" => Ok(Self::Reverse),
            "bidirectional" | "bimm" => Ok(Self::Bidirectional),
            _ => Err(SegmentError::UnknownMode(mode.to_owned())),
        }
    }
}

/// 分词器：持有只读的词典与标点集合。
///
/// 构造后不可变，且 `Send + Sync`：多个线程可以共享同一个实例（`&` 或 `Arc`）。
/// 每次调用都是输入串的纯函数，调用之间不保留任何状态。
#[derive(Debug, Clone)]
pub struct Tokenizer<L = WordSet> {
    lexicon: L,
    delimiters: DelimiterSet,
    /// 空白字符视为硬边界且不输出
    ignore_whitespace: bool,
}

impl Tokenizer<WordSet> {
    /// 由词集合与最大词长构造。
    ///
    /// `max_word_length < 1` 时返回 [`SegmentError::Configuration`]。
    pub fn new<I, S>(dictionary: I, max_word_length: usize, delimiters: DelimiterSet) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_lexicon(WordSet::new(dictionary, max_word_length), delimiters)
    }
}

impl<L> Tokenizer<L>
where
    L: Lexicon,
{
    /// 使用任意 [`Lexicon`] 实现构造。
    pub fn with_lexicon(lexicon: L, delimiters: DelimiterSet) -> Result<Self> {
        let max_len = lexicon.max_word_len();
        if max_len < 1 {
            return Err(SegmentError::configuration(
                "最大词长必须 >= 1（词典为空或未给出最大词长）",
            ));
        }
        debug!(max_len, delimiters = delimiters.len(), "tokenizer ready");
        Ok(Self {
            lexicon,
            delimiters,
            ignore_whitespace: true,
        })
    }

    /// 是否把空白字符当作边界丢弃（默认 `true`）。
    ///
    /// 关闭后空白与普通字符一样参与扫描；不在词典/标点集合中的空白会作为未匹配单字输出。
    pub fn ignore_whitespace(mut self, yes: bool) -> Self {
        self.ignore_whitespace = yes;
        self
    }

    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    pub fn delimiters(&self) -> &DelimiterSet {
        &self.delimiters
    }

    /// 按指定策略切分，返回带类别与位置信息的词序列。
    pub fn tokenize(&self, text: &str, mode: MatchMode) -> Vec<Token> {
        let sentence = Sentence::new(text, &self.delimiters, self.ignore_whitespace);
        match mode {
            MatchMode::Forward => self.forward().run(&sentence),
            MatchMode::Reverse => self.reverse().run(&sentence),
            MatchMode::Bidirectional => {
                let forward = self.forward().run(&sentence);
                let reverse = self.reverse().run(&sentence);
                BidirectionalResolver {
                    lexicon: &self.lexicon,
                }
                .resolve(forward, reverse)
            }
        }
    }

    /// 正向最大匹配。
    pub fn segment_forward(&self, text: &str) -> Vec<String> {
        surfaces(self.tokenize(text, MatchMode::Forward))
    }

    /// 逆向最大匹配（结果仍按从左到右的阅读顺序）。
    pub fn segment_reverse(&self, text: &str) -> Vec<String> {
        surfaces(self.tokenize(text, MatchMode::Reverse))
    }

    /// 双向最大匹配。
    pub fn segment_bidirectional(&self, text: &str) -> Vec<String> {
        surfaces(self.tokenize(text, MatchMode::Bidirectional))
    }

    fn forward(&self) -> ForwardMatcher<'_, L> {
        ForwardMatcher {
            lexicon: &self.lexicon,
            delimiters: &self.delimiters,
        }
    }

    fn reverse(&self) -> ReverseMatcher<'_, L> {
        ReverseMatcher {
            lexicon: &self.lexicon,
            delimiters: &self.delimiters,
        }
    }
}

fn surfaces(tokens: Vec<Token>) -> Vec<String> {
    tokens.into_iter().map(Token::into_surface).collect()
}
