//! 원어(source language) 힌트 처리와 간이 언어 감지
//!
//! 문자 범위와 특징적인 분음 부호만 보는 휴리스틱입니다.

use std::fmt;

use super::script::{classify_char, Script};

/// 자동 감지를 뜻하는 언어 코드
pub const AUTO_CODE: &str = "auto";

/// 원어
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Spanish,
    French,
    German,
    Italian,
    Portuguese,
    Russian,
    Greek,
    Japanese,
    Chinese,
    Korean,
    Arabic,
    Hindi,
    Thai,
    Vietnamese,
}

impl Language {
    pub const ALL: [Language; 15] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Portuguese,
        Language::Russian,
        Language::Greek,
        Language::Japanese,
        Language::Chinese,
        Language::Korean,
        Language::Arabic,
        Language::Hindi,
        Language::Thai,
        Language::Vietnamese,
    ];

    /// ISO 639-1 코드
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
            Language::Italian => "it",
            Language::Portuguese => "pt",
            Language::Russian => "ru",
            Language::Greek => "el",
            Language::Japanese => "ja",
            Language::Chinese => "zh",
            Language::Korean => "ko",
            Language::Arabic => "ar",
            Language::Hindi => "hi",
            Language::Thai => "th",
            Language::Vietnamese => "vi",
        }
    }

    /// 언어 코드 파싱 (대소문자 무시, `zh-tw` 같은 지역 태그는 기본 코드로)
    pub fn from_code(code: &str) -> Option<Language> {
        let code = code.trim().to_ascii_lowercase();
        let base = code.split(|c: char| c == '-' || c == '_').next().unwrap_or_default();
        Self::ALL.iter().copied().find(|lang| lang.code() == base)
    }

    /// 라틴 문자로 쓰는 언어인지
    pub fn uses_latin_script(self) -> bool {
        matches!(
            self,
            Language::English
                | Language::Spanish
                | Language::French
                | Language::German
                | Language::Italian
                | Language::Portuguese
                | Language::Vietnamese
        )
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 호출자가 넘긴 언어 힌트를 해석
///
/// - `auto` -> `detect_language(text)`
/// - 알 수 없는 코드 -> 영어
pub fn resolve_language(hint: &str, text: &str) -> Language {
    if hint.trim().eq_ignore_ascii_case(AUTO_CODE) {
        return detect_language(text);
    }
    Language::from_code(hint).unwrap_or_else(|| {
        log::debug!("알 수 없는 언어 코드 {:?}, 영어로 처리", hint);
        Language::English
    })
}

/// 문자 체계 -> 분음 부호 순서로 언어 추정
pub fn detect_language(text: &str) -> Language {
    let has_script = |script: Script| text.chars().any(|c| classify_char(c) == Some(script));

    if has_script(Script::Hangul) {
        return Language::Korean;
    }
    if has_script(Script::Cyrillic) {
        return Language::Russian;
    }
    if has_script(Script::Greek) {
        return Language::Greek;
    }
    if has_script(Script::Kana) {
        return Language::Japanese;
    }
    if has_script(Script::Han) {
        return Language::Chinese;
    }

    let lower = text.to_lowercase();
    let has_any = |set: &str| lower.chars().any(|c| set.contains(c));

    if has_any("äöüß") {
        Language::German
    } else if has_any("ãõ") {
        Language::Portuguese
    } else if has_any("ñ") {
        Language::Spanish
    } else if has_any("ìò") {
        Language::Italian
    } else if has_any("çàèùâêîôûë") {
        Language::French
    } else if has_any("áéíóú") {
        Language::Spanish
    } else {
        Language::English
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn test_from_code_variants() {
        assert_eq!(Language::from_code("EN"), Some(Language::English));
        assert_eq!(Language::from_code(" es "), Some(Language::Spanish));
        assert_eq!(Language::from_code("zh-tw"), Some(Language::Chinese));
        assert_eq!(Language::from_code("zh-CN"), Some(Language::Chinese));
        assert_eq!(Language::from_code("pt_BR"), Some(Language::Portuguese));
        assert_eq!(Language::from_code("xx"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_resolve_language() {
        assert_eq!(resolve_language("fr", "Jean"), Language::French);
        assert_eq!(resolve_language("auto", "José"), Language::Spanish);
        assert_eq!(resolve_language("AUTO", "John"), Language::English);
        assert_eq!(resolve_language("klingon", "John"), Language::English);
    }

    #[test]
    fn test_detect_by_script() {
        assert_eq!(detect_language("김민수"), Language::Korean);
        assert_eq!(detect_language("Иван"), Language::Russian);
        assert_eq!(detect_language("Αλέξανδρος"), Language::Greek);
        assert_eq!(detect_language("さくら"), Language::Japanese);
        assert_eq!(detect_language("王伟"), Language::Chinese);
    }

    #[test]
    fn test_detect_by_diacritics() {
        assert_eq!(detect_language("Jürgen Müller"), Language::German);
        assert_eq!(detect_language("João"), Language::Portuguese);
        assert_eq!(detect_language("Muñoz"), Language::Spanish);
        assert_eq!(detect_language("Niccolò"), Language::Italian);
        assert_eq!(detect_language("François"), Language::French);
        assert_eq!(detect_language("José"), Language::Spanish);
        assert_eq!(detect_language("John Smith"), Language::English);
    }

    #[test]
    fn test_latin_languages() {
        assert!(Language::English.uses_latin_script());
        assert!(Language::Vietnamese.uses_latin_script());
        assert!(!Language::Russian.uses_latin_script());
        assert!(!Language::Korean.uses_latin_script());
    }
}
