//! 라틴 문자 이름 -> 한글 이름 통합 변환기
//!
//! 정규화 -> 공백 분리 -> 성/이름 분류 -> (이름 조각) 재작성 + 음절 분해 + 조합
//! -> 조각별 로마자 표기 순서로 처리한다. 상태가 없으므로 여러 스레드에서
//! 같은 변환기를 그대로 공유해도 된다.

use lazy_static::lazy_static;
use serde::Serialize;

use crate::config::{EngineConfig, FamilyNamePosition};
use crate::core::composer::{collapse_repeats, compose_all};
use crate::core::rewrite::{rewrite, Chunk};
use crate::core::romanizer::romanize;
use crate::core::surnames::lookup_surname;
use crate::core::tokenizer::tokenize;
use crate::detection::{detect_language, first_non_latin, resolve_language, Language};
use crate::error::{ConversionError, InvalidInput};

/// 정규화 후에도 남기는 분음 부호 문자
const ACCEPTED_DIACRITICS: &str = "áàâãäéèêëíìîïóòôõöúùûüñçÿ";

/// 결과 조각의 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentRole {
    /// 성
    Family,
    /// 이름
    Given,
    /// 음절 단위 분해
    Syllable,
}

/// 조각 하나의 변환 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterBreakdown {
    pub hangul: String,
    pub romanization: String,
    #[serde(rename = "type")]
    pub role: SegmentRole,
}

/// 이름 하나의 변환 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    /// 모든 조각의 한글을 이어 붙인 이름
    pub korean_name: String,
    /// 조각별 로마자 표기 (공백 구분)
    pub romanization: String,
    /// 입력 순서대로의 조각 목록
    pub breakdown: Vec<CharacterBreakdown>,
    /// 매핑 없는 문자를 기본 모음으로 대체한 횟수 (직렬화하지 않음)
    #[serde(skip)]
    pub unmapped: usize,
}

impl ConversionResult {
    /// 조각을 음절 단위로 펼친 목록 (역할: `Syllable`)
    pub fn syllables(&self) -> Vec<CharacterBreakdown> {
        self.breakdown
            .iter()
            .flat_map(|segment| segment.hangul.chars())
            .map(|c| {
                let hangul = c.to_string();
                let romanization = romanize(&hangul);
                CharacterBreakdown {
                    hangul,
                    romanization,
                    role: SegmentRole::Syllable,
                }
            })
            .collect()
    }
}

/// 이름 정규화: 앞뒤 공백 제거, 소문자화, 허용 문자 외 제거, 연속 공백을 하나로
pub fn normalize_name(raw: &str) -> String {
    let filtered: String = raw
        .trim()
        .to_lowercase()
        .chars()
        .filter(|&c| is_accepted_char(c) || c.is_whitespace())
        .collect();
    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 정규화 후 남는 글자인지 (a-z와 일부 분음 부호 문자)
pub fn is_accepted_char(c: char) -> bool {
    c.is_ascii_lowercase() || ACCEPTED_DIACRITICS.contains(c)
}

/// 이름 변환기
#[derive(Debug, Clone, Default)]
pub struct NameConverter {
    config: EngineConfig,
}

impl NameConverter {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config: config.sanitized(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// 이름을 한글로 변환
    ///
    /// - `source_language`: 언어 코드 힌트 (`en`, `es`, ..., `auto`)
    pub fn convert(
        &self,
        raw_name: &str,
        source_language: &str,
    ) -> Result<ConversionResult, ConversionError> {
        let trimmed = raw_name.trim();
        if trimmed.is_empty() {
            return Err(InvalidInput::Empty.into());
        }

        let len = trimmed.chars().count();
        if len > self.config.max_name_length {
            return Err(InvalidInput::TooLong {
                len,
                max: self.config.max_name_length,
            }
            .into());
        }

        // 라틴 이외의 문자 체계는 음절 분해기로 넘기지 않음
        if let Some(script) = first_non_latin(trimmed) {
            return Err(InvalidInput::UnsupportedScript(script).into());
        }

        let normalized = normalize_name(trimmed);
        if normalized.is_empty() {
            return Err(InvalidInput::NoLatinLetters.into());
        }

        let mut language = resolve_language(source_language, trimmed);
        if !language.uses_latin_script() {
            log::debug!("{} 힌트에는 라틴 철자 규칙이 없음, 자동 감지로 대체", language);
            language = detect_language(trimmed);
        }
        let parts: Vec<&str> = normalized.split(' ').collect();
        let family_index = self.family_index(&parts);

        let mut korean_name = String::new();
        let mut romanizations = Vec::with_capacity(parts.len());
        let mut breakdown = Vec::with_capacity(parts.len());
        let mut unmapped = 0;

        for (index, part) in parts.iter().enumerate() {
            let (hangul, role) = if index == family_index {
                (self.convert_family(part), SegmentRole::Family)
            } else {
                let (hangul, substitutions) = self.convert_given(part, language);
                unmapped += substitutions;
                (hangul, SegmentRole::Given)
            };
            if hangul.is_empty() {
                log::warn!("조각 {:?}에서 음절이 만들어지지 않음", part);
            }

            let romanization = romanize(&hangul);
            log::debug!("{:?} ({:?}) -> {} ({})", part, role, hangul, romanization);

            korean_name.push_str(&hangul);
            romanizations.push(romanization.clone());
            breakdown.push(CharacterBreakdown {
                hangul,
                romanization,
                role,
            });
        }

        Ok(ConversionResult {
            korean_name,
            romanization: romanizations.join(" "),
            breakdown,
            unmapped,
        })
    }

    /// 성으로 볼 조각의 인덱스 (`parts`는 비어 있지 않음)
    fn family_index(&self, parts: &[&str]) -> usize {
        let last = parts.len().saturating_sub(1);
        match self.config.family_name_position {
            FamilyNamePosition::First => 0,
            FamilyNamePosition::Last => last,
            FamilyNamePosition::Auto => {
                let first_known = parts.first().and_then(|p| lookup_surname(p)).is_some();
                let last_known = parts.last().and_then(|p| lookup_surname(p)).is_some();
                if !first_known && last_known {
                    last
                } else {
                    0
                }
            }
        }
    }

    /// 성: 테이블에 있으면 고정 표기, 없으면 기본 성
    fn convert_family(&self, part: &str) -> String {
        match lookup_surname(part) {
            Some(hangul) => hangul.to_string(),
            None => {
                log::debug!(
                    "성 테이블에 없는 성 {:?}, 기본값 {} 사용",
                    part,
                    self.config.default_surname
                );
                self.config.default_surname.clone()
            }
        }
    }

    /// 이름: 재작성 -> 음절 분해 -> 조합 (반환: 한글, 대체 횟수)
    fn convert_given(&self, part: &str, language: Language) -> (String, usize) {
        let mut hangul = String::new();
        let mut substitutions = 0;

        for chunk in rewrite(part, language) {
            match chunk {
                Chunk::Latin(latin) => {
                    let tokens = tokenize(&latin);
                    substitutions += tokens.substitutions;
                    hangul.push_str(&compose_all(&tokens.syllables));
                }
                Chunk::Hangul(fixed) => hangul.push_str(fixed),
            }
        }

        if self.config.collapse_repeats {
            hangul = collapse_repeats(&hangul);
        }
        (hangul, substitutions)
    }
}

lazy_static! {
    static ref DEFAULT_CONVERTER: NameConverter = NameConverter::default();
}

/// 기본 설정으로 이름을 한글로 변환
///
/// # Examples
/// ```
/// use hangul_namer::convert;
/// let result = convert("John Smith", "en").unwrap();
/// assert_eq!(result.korean_name, "조헌스미스");
/// assert_eq!(result.romanization, "jo-heon seu-mi-seu");
/// ```
pub fn convert(name: &str, source_language: &str) -> Result<ConversionResult, ConversionError> {
    DEFAULT_CONVERTER.convert(name, source_language)
}
