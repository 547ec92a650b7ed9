//! `mmseg_core`：基于词典的最大匹配分词（纯逻辑层，不做任何 I/O）。
//!
//! 流水线：
//! - `sentence`：把输入按字符（而非字节）建立索引，并按空白/标点切成块
//! - `matcher`：正向 / 逆向最大匹配
//! - `resolver`：双向最大匹配的罚分裁决
//! - `tokenizer`：对外入口，持有只读的词典与标点集合
//!
//! ```
//! use mmseg_core::{DelimiterSet, Tokenizer};
//!
//! let tokenizer = Tokenizer::new(["研究", "研究生", "生命", "的", "起源"], 3, DelimiterSet::default())?;
//! assert_eq!(tokenizer.segment_forward("研究生命的起源"), ["研究生", "命", "的", "起源"]);
//! assert_eq!(tokenizer.segment_reverse("研究生命的起源"), ["研究", "生命", "的", "起源"]);
//! assert_eq!(tokenizer.segment_bidirectional("研究生命的起源"), ["研究", "生命", "的", "起源"]);
//! # Ok::<(), mmseg_core::error::SegmentError>(())
//! ```
pub mod delimiter;
pub mod error;
pub mod lexicon;
mod matcher;
pub mod model;
pub mod resolver;
mod sentence;
pub mod tokenizer;

pub use delimiter::DelimiterSet;
pub use error::{Result, SegmentError};
pub use lexicon::{Lexicon, WordSet};
pub use model::{Token, TokenKind};
pub use tokenizer::{MatchMode, Tokenizer};
