use std::sync::Arc;
use std::thread;

use mmseg_core::{DelimiterSet, MatchMode, Token, TokenKind, Tokenizer};

const DEMO: &str = "人要是行，干一行行一行，一行行行行行，行行行干哪行都行。";

fn demo_tokenizer() -> Tokenizer {
    Tokenizer::new(
        ["人", "要是", "行", "干", "一行", "哪", "都", "研究", "研究生", "生命", "的", "起源"],
        3,
        DelimiterSet::default(),
    )
    .unwrap()
}

fn non_space(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

#[test]
fn forward_and_reverse_disagree_on_ambiguous_prefix() {
    let tokenizer = Tokenizer::new(["研究", "研究生", "生命", "的", "起源"], 3, DelimiterSet::default()).unwrap();
    let forward = tokenizer.segment_forward("研究生命的起源");
    let reverse = tokenizer.segment_reverse("研究生命的起源");
    assert_ne!(forward, reverse);

    // 正向：4 词 / 1 非词典 / 2 单字；逆向：4 / 0 / 1。三项都罚正向。
    assert_eq!(tokenizer.segment_bidirectional("研究生命的起源"), reverse);
}

#[test]
fn forward_wins_with_strictly_lower_penalty() {
    let tokenizer = Tokenizer::new(["北京", "大学生", "京大学生"], 4, DelimiterSet::default()).unwrap();
    assert_eq!(tokenizer.segment_forward("北京大学生"), ["北京", "大学生"]);
    assert_eq!(tokenizer.segment_reverse("北京大学生"), ["北", "京大学生"]);
    assert_eq!(tokenizer.segment_bidirectional("北京大学生"), ["北京", "大学生"]);
}

#[test]
fn repeated_single_char_ambiguity_is_fully_covered() {
    let tokenizer = Tokenizer::new(["行", "一行"], 2, DelimiterSet::default()).unwrap();
    let text = "一行行行行行";
    for tokens in [tokenizer.segment_forward(text), tokenizer.segment_reverse(text)] {
        assert_eq!(tokens.concat(), text);
        assert!(tokens.iter().all(|t| t == "行" || t == "一行"));
    }
}

#[test]
fn empty_input_yields_empty_sequences() {
    let tokenizer = demo_tokenizer();
    assert!(tokenizer.segment_forward("").is_empty());
    assert!(tokenizer.segment_reverse("").is_empty());
    assert!(tokenizer.segment_bidirectional("").is_empty());
}

#[test]
fn lone_delimiter_is_a_single_token() {
    let tokenizer = demo_tokenizer();
    for mode in MatchMode::ALL {
        let tokens = tokenizer.tokenize("。", mode);
        assert_eq!(tokens.len(), 1, "{mode}");
        assert_eq!(tokens[0].surface(), "。");
        assert_eq!(tokens[0].kind(), TokenKind::Delimiter);
    }
}

#[test]
fn tokens_reconstruct_non_space_input() {
    let tokenizer = demo_tokenizer();
    for text in [DEMO, "研究 生命的\t起源", "  干哪行？ 未知字 ", "abc，研究生"] {
        for mode in MatchMode::ALL {
            let tokens = tokenizer.tokenize(text, mode);
            let joined: String = tokens.iter().map(Token::surface).collect();
            assert_eq!(joined, non_space(text), "{mode}: {text}");
        }
    }
}

#[test]
fn token_ranges_point_into_the_original_text() {
    let tokenizer = demo_tokenizer();
    let text = " 研究生命 的起源";
    let chars: Vec<char> = text.chars().collect();
    for mode in MatchMode::ALL {
        for t in tokenizer.tokenize(text, mode) {
            assert_eq!(&text[t.range_byte()], t.surface());
            let by_char: String = chars[t.range_char()].iter().collect();
            assert_eq!(by_char, t.surface());
        }
    }
}

#[test]
fn delimiters_are_always_atomic() {
    // 即使词典里有包含标点的词，标点仍单独成词
    let tokenizer = Tokenizer::new(["行，", "，干", "行"], 2, DelimiterSet::default()).unwrap();
    let delimiters = DelimiterSet::default();
    for tokens in [tokenizer.segment_forward(DEMO), tokenizer.segment_reverse(DEMO)] {
        for t in &tokens {
            if t.chars().any(|c| delimiters.contains(c)) {
                assert_eq!(t.chars().count(), 1, "{t}");
            }
        }
        assert_eq!(tokens.iter().filter(|t| t.as_str() == "，").count(), 3);
    }
}

#[test]
fn agreement_short_circuits_resolution() {
    let tokenizer = demo_tokenizer();
    for text in [DEMO, "研究生", "起源的起源"] {
        let forward = tokenizer.segment_forward(text);
        if forward == tokenizer.segment_reverse(text) {
            assert_eq!(tokenizer.segment_bidirectional(text), forward);
        }
    }
    assert_eq!(tokenizer.segment_bidirectional("起源的起源"), ["起源", "的", "起源"]);
}

#[test]
fn bidirectional_is_deterministic() {
    let tokenizer = demo_tokenizer();
    let first = tokenizer.segment_bidirectional(DEMO);
    for _ in 0..8 {
        assert_eq!(tokenizer.segment_bidirectional(DEMO), first);
    }
}

#[test]
fn shared_tokenizer_across_threads() {
    let tokenizer = Arc::new(demo_tokenizer());
    let expected = tokenizer.segment_bidirectional(DEMO);
    thread::scope(|s| {
        for _ in 0..4 {
            let tokenizer = Arc::clone(&tokenizer);
            let expected = &expected;
            s.spawn(move || {
                assert_eq!(&tokenizer.segment_bidirectional(DEMO), expected);
            });
        }
    });
}

#[test]
fn unmatched_chars_are_flagged() {
    let tokenizer = demo_tokenizer();
    let tokens = tokenizer.tokenize("研究X", MatchMode::Forward);
    assert_eq!(tokens.last().map(Token::kind), Some(TokenKind::Unmatched));
    assert_eq!(tokens.last().map(Token::surface), Some("X"));
}
