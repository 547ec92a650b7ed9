//! `resolver`：双向最大匹配的裁决。
//!
//! 正向与逆向结果一致时直接返回；否则按三项指标各罚一分，罚分低者胜出：
//! - 总词数
//! - 非词典词数（标点、强制切出的单字只要不在词典里也算）
//! - 单字词数
//!
//! 每项指标中正向严格更少才罚逆向，否则罚正向，即**单项持平罚正向**；
//! 总分持平时返回逆向结果。两处偏向相反，保持原样。

use tracing::trace;

use crate::lexicon::Lexicon;
use crate::model::Token;

/// Resolver：在正向、逆向两个候选之间选出一个。
pub trait Resolver: Send + Sync {
    fn resolve(&self, forward: Vec<Token>, reverse: Vec<Token>) -> Vec<Token>;
}

/// 一个分词结果的统计量。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentStats {
    pub total: usize,
    pub single_char: usize,
    pub out_of_dictionary: usize,
}

impl SegmentStats {
    pub fn collect<L>(tokens: &[Token], lexicon: &L) -> Self
    where
        L: Lexicon + ?Sized,
    {
        let mut stats = Self {
            total: tokens.len(),
            ..Self::default()
        };
        for t in tokens {
            if t.char_len() == 1 {
                stats.single_char += 1;
            }
            if !lexicon.contains(t.surface()) {
                stats.out_of_dictionary += 1;
            }
        }
        stats
    }
}

/// 罚分（越低越好）。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Penalty {
    pub forward: u8,
    pub reverse: u8,
}

impl Penalty {
    /// 三项指标两两比较；持平时罚正向。
    pub fn score(forward: &SegmentStats, reverse: &SegmentStats) -> Self {
        let mut penalty = Self::default();
        for (f, r) in [
            (forward.total, reverse.total),
            (forward.out_of_dictionary, reverse.out_of_dictionary),
            (forward.single_char, reverse.single_char),
        ] {
            if f < r {
                penalty.reverse += 1;
            } else {
                penalty.forward += 1;
            }
        }
        penalty
    }

    /// 正向严格更低才选正向。
    pub fn prefers_forward(&self) -> bool {
        self.forward < self.reverse
    }
}

/// 默认的双向裁决器。
pub struct BidirectionalResolver<'a, L: ?Sized> {
    pub lexicon: &'a L,
}

impl<L> Resolver for BidirectionalResolver<'_, L>
where
    L: Lexicon + ?Sized,
{
    fn resolve(&self, forward: Vec<Token>, reverse: Vec<Token>) -> Vec<Token> {
        if forward == reverse {
            return forward;
        }
        let f = SegmentStats::collect(&forward, self.lexicon);
        let r = SegmentStats::collect(&reverse, self.lexicon);
        let penalty = Penalty::score(&f, &r);
        trace!(?f, ?r, ?penalty, "bidirectional: forward and reverse disagree");
        if penalty.prefers_forward() { forward } else { reverse }
    }
}
