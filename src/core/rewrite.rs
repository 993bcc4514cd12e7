//! 음절 분해 전 철자 재작성 단계
//!
//! 자주 쓰이는 철자 패턴을 미리 치환해 중간 버퍼(`Chunk` 목록)를 만든다.
//! - 단어 앞/뒤에 고정된 패턴은 완성형 한글로 바로 치환 (mc -> 맥, -son -> 슨)
//! - 나머지는 라틴 철자끼리 치환 (ph -> f, ll -> l, 언어별 규칙)
//!
//! 규칙은 목록 순서대로 적용된다.

use crate::detection::Language;

/// 규칙이 일치해야 하는 위치
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// 단어 시작
    Start,
    /// 단어 끝
    End,
    /// 어디든
    Anywhere,
}

/// 치환 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replacement {
    /// 다른 라틴 철자로 치환 (이후 음절 분해 대상)
    Latin(&'static str),
    /// 완성형 한글로 고정 치환 (음절 분해 생략)
    Hangul(&'static str),
}

/// 재작성 규칙 하나
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriteRule {
    pub pattern: &'static str,
    pub anchor: Anchor,
    pub replacement: Replacement,
}

const fn prefix(pattern: &'static str, hangul: &'static str) -> RewriteRule {
    RewriteRule {
        pattern,
        anchor: Anchor::Start,
        replacement: Replacement::Hangul(hangul),
    }
}

const fn suffix(pattern: &'static str, hangul: &'static str) -> RewriteRule {
    RewriteRule {
        pattern,
        anchor: Anchor::End,
        replacement: Replacement::Hangul(hangul),
    }
}

const fn respell(pattern: &'static str, latin: &'static str) -> RewriteRule {
    RewriteRule {
        pattern,
        anchor: Anchor::Anywhere,
        replacement: Replacement::Latin(latin),
    }
}

/// 단어 앞 고정 패턴
pub const PREFIX_RULES: &[RewriteRule] = &[prefix("mac", "맥"), prefix("mc", "맥")];

/// 단어 끝 고정 패턴 (긴 것 먼저)
pub const SUFFIX_RULES: &[RewriteRule] = &[
    suffix("tion", "션"),
    suffix("sion", "션"),
    suffix("son", "슨"),
    suffix("sen", "센"),
    suffix("ton", "톤"),
    suffix("ck", "크"),
];

/// 공통 철자 치환
pub const RESPELLINGS: &[RewriteRule] = &[
    respell("gh", "g"),
    respell("ph", "f"),
    respell("ck", "k"),
    respell("ll", "l"),
    respell("rr", "r"),
    respell("ss", "s"),
    respell("tt", "t"),
    respell("ff", "f"),
    respell("pp", "p"),
    respell("bb", "b"),
    respell("dd", "d"),
    respell("gg", "g"),
    respell("kk", "k"),
];

const SPANISH_RULES: &[RewriteRule] = &[
    respell("ll", "y"),
    respell("qu", "k"),
    respell("ñ", "ny"),
    respell("j", "h"),
    respell("z", "s"),
];

const GERMAN_RULES: &[RewriteRule] = &[
    respell("sch", "sh"),
    respell("w", "v"),
    respell("j", "y"),
];

const FRENCH_RULES: &[RewriteRule] = &[
    respell("eau", "o"),
    respell("au", "o"),
    respell("qu", "k"),
    respell("ch", "sh"),
];

const ITALIAN_RULES: &[RewriteRule] = &[
    respell("gli", "li"),
    respell("gn", "ny"),
    respell("ch", "k"),
];

const PORTUGUESE_RULES: &[RewriteRule] = &[respell("nh", "ny"), respell("lh", "ly")];

/// 언어별 철자 치환 규칙 (공통 규칙보다 먼저 적용)
pub fn language_rules(language: Language) -> &'static [RewriteRule] {
    match language {
        Language::Spanish => SPANISH_RULES,
        Language::German => GERMAN_RULES,
        Language::French => FRENCH_RULES,
        Language::Italian => ITALIAN_RULES,
        Language::Portuguese => PORTUGUESE_RULES,
        _ => &[],
    }
}

/// 중간 버퍼 조각
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
    /// 음절 분해가 필요한 라틴 철자
    Latin(String),
    /// 이미 확정된 한글
    Hangul(&'static str),
}

/// 정규화된 단어 하나를 재작성하여 중간 버퍼로 변환
///
/// 앞/뒤 고정 패턴은 나머지 철자가 남을 때만 적용한다.
pub fn rewrite(word: &str, language: Language) -> Vec<Chunk> {
    let mut rest = word;
    let mut head = None;
    let mut tail = None;

    if let Some((rule, stripped)) = match_anchored(PREFIX_RULES, rest) {
        head = Some(rule);
        rest = stripped;
    }
    if let Some((rule, stripped)) = match_anchored(SUFFIX_RULES, rest) {
        tail = Some(rule);
        rest = stripped;
    }

    let latin = respell_all(rest, language);

    let mut chunks = Vec::with_capacity(3);
    if let Some(hangul) = head {
        chunks.push(Chunk::Hangul(hangul));
    }
    if !latin.is_empty() {
        chunks.push(Chunk::Latin(latin));
    }
    if let Some(hangul) = tail {
        chunks.push(Chunk::Hangul(hangul));
    }
    chunks
}

/// 앞/뒤 고정 규칙 중 첫 번째 일치 항목과 남은 철자
fn match_anchored<'a>(rules: &[RewriteRule], word: &'a str) -> Option<(&'static str, &'a str)> {
    rules.iter().find_map(|rule| {
        let Replacement::Hangul(hangul) = rule.replacement else {
            return None;
        };
        let rest = match rule.anchor {
            Anchor::Start => word.strip_prefix(rule.pattern)?,
            Anchor::End => word.strip_suffix(rule.pattern)?,
            Anchor::Anywhere => return None,
        };
        if rest.is_empty() {
            None
        } else {
            Some((hangul, rest))
        }
    })
}

/// 언어별 규칙 -> 공통 규칙 순서로 라틴 철자 치환
fn respell_all(text: &str, language: Language) -> String {
    let mut result = text.to_string();
    for rule in language_rules(language).iter().chain(RESPELLINGS) {
        if let Replacement::Latin(latin) = rule.replacement {
            if result.contains(rule.pattern) {
                result = result.replace(rule.pattern, latin);
            }
        }
    }
    result
}
