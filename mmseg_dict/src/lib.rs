//! 词表加载：把按行组织的文本词表读成 [`WordSet`]。
//!
//! 格式（宽松）：
//! - 每行取第一个空白分隔的字段作为词，其余字段（词频、词性等）忽略，
//!   因此 jieba 风格的 `词 频次 词性` 可以直接使用
//! - 空行跳过；重复词条自动合并
//! - 最大词长按字符数计算

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use mmseg_core::{Lexicon, WordSet};
use tracing::debug;

pub type Result<T, E = DictError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("无法读取词表 {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("读取词表失败: {0}")]
    Read(#[from] io::Error),

    #[error("词表为空")]
    Empty,
}

/// 从文件加载词表（UTF-8）。
pub fn load_path(path: impl AsRef<Path>) -> Result<WordSet> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DictError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let words = load_reader(BufReader::new(file)).map_err(|e| match e {
        DictError::Read(source) => DictError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    debug!(path = %path.display(), words = words.len(), max_len = words.max_word_len(), "dictionary loaded");
    Ok(words)
}

/// 从任意 `BufRead` 加载词表。
pub fn load_reader<R: BufRead>(reader: R) -> Result<WordSet> {
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = first_field(&line?) {
            words.push(word.to_owned());
        }
    }
    finish(words)
}

/// 从字符串解析词表。
pub fn parse_word_list(s: &str) -> Result<WordSet> {
    finish(s.lines().filter_map(first_field).map(str::to_owned).collect())
}

fn first_field(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}

fn finish(words: Vec<String>) -> Result<WordSet> {
    let set = WordSet::from_words(words);
    if set.is_empty() {
        return Err(DictError::Empty);
    }
    Ok(set)
}
