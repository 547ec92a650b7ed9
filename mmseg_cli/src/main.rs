use std::{
    io::{self, BufRead, BufWriter, Write},
    path::PathBuf,
    str::FromStr,
};

use anyhow::Context;
use clap::Parser;
use mmseg_core::{DelimiterSet, MatchMode, Tokenizer, WordSet};

/// 输出模式：单一策略，或三种策略都输出。
#[derive(Clone, Copy, Debug)]
enum Mode {
    All,
    Single(MatchMode),
}

impl FromStr for Mode {
    type Err = mmseg_core::SegmentError;

    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "all" => Ok(Self::All),
            other => other.parse().map(Self::Single),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "mmseg", about = "基于词典的最大匹配中文分词")]
struct Args {
    /// 词表文件：每行第一个字段为词。
    #[arg(short, long)]
    dict: PathBuf,

    /// forward / reverse / bidirectional / all
    #[arg(short, long, default_value = "all")]
    mode: Mode,

    /// 覆盖默认标点集合（字符串中的每个字符都视为标点）。
    #[arg(long)]
    delimiters: Option<String>,

    /// 空白字符参与扫描，而不是作为边界丢弃。
    #[arg(long)]
    keep_whitespace: bool,

    /// 输出时词与词之间的分隔符。
    #[arg(short, long, default_value = "/")]
    separator: String,

    /// 待分词文本；省略时逐行读取标准输入。
    text: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let words = mmseg_dict::load_path(&args.dict)
        .with_context(|| format!("加载词表失败: {}", args.dict.display()))?;
    let delimiters = args
        .delimiters
        .as_deref()
        .map_or_else(DelimiterSet::default, DelimiterSet::from_chars);
    let tokenizer = Tokenizer::with_lexicon(words, delimiters)?.ignore_whitespace(!args.keep_whitespace);

    let mut out = BufWriter::new(io::stdout().lock());
    if args.text.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("读取标准输入失败")?;
            write_line(&mut out, &tokenizer, &line, args.mode, &args.separator)?;
        }
    } else {
        for text in &args.text {
            write_line(&mut out, &tokenizer, text, args.mode, &args.separator)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn write_line<W: Write>(
    out: &mut W,
    tokenizer: &Tokenizer<WordSet>,
    text: &str,
    mode: Mode,
    separator: &str,
) -> io::Result<()> {
    match mode {
        Mode::Single(m) => writeln!(out, "{}", segment(tokenizer, text, m).join(separator)),
        Mode::All => {
            for m in MatchMode::ALL {
                writeln!(out, "{}: {}", label(m), segment(tokenizer, text, m).join(separator))?;
            }
            writeln!(out)
        }
    }
}

fn segment(tokenizer: &Tokenizer<WordSet>, text: &str, mode: MatchMode) -> Vec<String> {
    match mode {
        MatchMode::Forward => tokenizer.segment_forward(text),
        MatchMode::Reverse => tokenizer.segment_reverse(text),
        MatchMode::Bidirectional => tokenizer.segment_bidirectional(text),
    }
}

fn label(mode: MatchMode) -> &'static str {
    match mode {
        MatchMode::Forward => "前向最大匹配",
        MatchMode::Reverse => "后向最大匹配",
        MatchMode::Bidirectional => "双向最大匹配",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer() -> Tokenizer<WordSet> {
        Tokenizer::new(["研究", "研究生", "生命", "的", "起源"], 3, DelimiterSet::default()).unwrap()
    }

    #[test]
    fn parses_mode() {
        assert!(matches!("all".parse::<Mode>(), Ok(Mode::All)));
        assert!(matches!("reverse".parse::<Mode>(), Ok(Mode::Single(MatchMode::Reverse))));
        assert!("both".parse::<Mode>().is_err());
    }

    #[test]
    fn all_mode_prints_three_labelled_lines() {
        let mut buf = Vec::new();
        write_line(&mut buf, &tokenizer(), "研究生命的起源", Mode::All, "/").unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert_eq!(
            s,
            "前向最大匹配: 研究生/命/的/起源\n后向最大匹配: 研究/生命/的/起源\n双向最大匹配: 研究/生命/的/起源\n\n"
        );
    }

    #[test]
    fn single_mode_uses_separator() {
        let mut buf = Vec::new();
        write_line(&mut buf, &tokenizer(), "研究生命的起源", Mode::Single(MatchMode::Forward), " ").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "研究生 命 的 起源\n");
    }

    #[test]
    fn args_parse() {
        let args = Args::try_parse_from(["mmseg", "--dict", "dict.txt", "-m", "bidirectional", "研究"]).unwrap();
        assert!(matches!(args.mode, Mode::Single(MatchMode::Bidirectional)));
        assert_eq!(args.text, ["研究"]);
        assert_eq!(args.separator, "/");
        assert!(!args.keep_whitespace);
    }
}
