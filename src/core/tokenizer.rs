//! 라틴 철자 -> (초성, 중성, 종성) 음절 분해기
//!
//! 위치마다 초성 -> 중성 -> 종성 순서로 최장 일치를 시도한다.
//! - 초성이 없으면 조합 시 무음 초성 ㅇ을 채운다
//! - 모음이 없으면 기본 모음 ㅓ를 넣는다
//! - 종성 뒤에 바로 모음이 시작되면 그 자음은 다음 음절의 초성으로 남긴다

use crate::core::jamo_mapper::{
    resolve_unmapped, Choseong, Jongseong, Jungseong, FINALS, INITIALS, VOWELS,
};

/// 분해된 음절 하나
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable {
    pub initial: Option<Choseong>,
    pub vowel: Jungseong,
    pub final_: Option<Jongseong>,
    /// 이 음절이 소비한 입력 문자 수
    pub consumed: usize,
}

/// 단어 하나의 분해 결과
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenization {
    pub syllables: Vec<Syllable>,
    /// 매핑 없는 문자를 기본 모음으로 대체한 횟수
    pub substitutions: usize,
}

impl Tokenization {
    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    /// 소비한 전체 문자 수
    pub fn consumed(&self) -> usize {
        self.syllables.iter().map(|s| s.consumed).sum()
    }
}

/// 정규화된 단어(소문자, 공백 없음)를 음절 목록으로 분해
pub fn tokenize(word: &str) -> Tokenization {
    let input: Vec<char> = word.chars().collect();
    tokenize_chars(&input)
}

/// 문자 슬라이스를 음절 목록으로 분해 (빈 틈이나 겹침 없이 전체를 덮음)
pub fn tokenize_chars(input: &[char]) -> Tokenization {
    let mut result = Tokenization::default();
    let mut pos = 0;

    while pos < input.len() {
        let start = pos;

        // 1. 초성
        let initial = match INITIALS.longest_match(input, pos) {
            Some((cho, len)) => {
                pos += len;
                Some(cho)
            }
            None => None,
        };

        // 2. 중성 (필수)
        let vowel = match VOWELS.longest_match(input, pos) {
            Some((jung, len)) => {
                pos += len;
                jung
            }
            None if initial.is_some() => Jungseong::DEFAULT,
            None => {
                // 초성도 모음도 아닌 문자: 한 글자를 소비하고 기본 모음으로 대체
                let jung = resolve_unmapped(input[pos]);
                pos += 1;
                result.substitutions += 1;
                jung
            }
        };

        // 3. 종성 (다음 음절의 모음 앞 자음은 가져오지 않음)
        let final_ = take_final(input, &mut pos);

        let syllable = Syllable {
            initial,
            vowel,
            final_,
            consumed: pos - start,
        };
        log::trace!(
            "음절 {:?} -> {:?}",
            input[start..pos].iter().collect::<String>(),
            syllable
        );
        result.syllables.push(syllable);
    }

    debug_assert_eq!(result.consumed(), input.len());

    if result.substitutions > 0 {
        log::warn!(
            "매핑 없는 문자 {}개를 기본 모음으로 대체",
            result.substitutions
        );
    }

    result
}

/// 가장 긴 종성 후보 하나만 본다. 바로 뒤에 모음이 시작되면 종성 없이 끝낸다
fn take_final(input: &[char], pos: &mut usize) -> Option<Jongseong> {
    let (jong, len) = FINALS.longest_match(input, *pos)?;
    if VOWELS.starts_at(input, *pos + len) {
        return None;
    }
    *pos += len;
    Some(jong)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syl(initial: Option<Choseong>, vowel: Jungseong, final_: Option<Jongseong>, consumed: usize) -> Syllable {
        Syllable {
            initial,
            vowel,
            final_,
            consumed,
        }
    }

    #[test]
    fn test_empty_input() {
        let result = tokenize("");
        assert!(result.is_empty());
        assert_eq!(result.substitutions, 0);
    }

    #[test]
    fn test_digraph_consumed_as_one() {
        // "th"는 "t" + "h"로 나뉘지 않음
        let result = tokenize("th");
        assert_eq!(
            result.syllables,
            vec![syl(Some(Choseong::S), Jungseong::Eo, None, 2)]
        );
    }

    #[test]
    fn test_consonant_without_vowel_gets_default_vowel() {
        let result = tokenize("john");
        assert_eq!(
            result.syllables,
            vec![
                syl(Some(Choseong::J), Jungseong::O, None, 2),
                syl(Some(Choseong::H), Jungseong::Eo, Some(Jongseong::N), 2),
            ]
        );
        assert_eq!(result.substitutions, 0);
    }

    #[test]
    fn test_vowel_only_syllable() {
        let result = tokenize("ana");
        assert_eq!(
            result.syllables,
            vec![
                syl(None, Jungseong::A, None, 1),
                syl(Some(Choseong::N), Jungseong::A, None, 2),
            ]
        );
    }

    #[test]
    fn test_final_not_stolen_from_next_syllable() {
        // "maria": r 뒤에 모음이 있으므로 종성이 아니라 다음 초성
        let result = tokenize("maria");
        assert_eq!(
            result.syllables,
            vec![
                syl(Some(Choseong::M), Jungseong::A, None, 2),
                syl(Some(Choseong::R), Jungseong::I, None, 2),
                syl(None, Jungseong::A, None, 1),
            ]
        );
    }

    #[test]
    fn test_rejected_final_is_not_shortened() {
        // "ng" 뒤에 모음이 오면 "n"으로 줄이지 않고 종성 없이 넘김
        let result = tokenize("angela");
        assert_eq!(result.syllables[0], syl(None, Jungseong::A, None, 1));
        assert_eq!(
            result.syllables,
            vec![
                syl(None, Jungseong::A, None, 1),
                syl(Some(Choseong::Ieung), Jungseong::E, None, 3),
                syl(Some(Choseong::R), Jungseong::A, None, 2),
            ]
        );
    }

    #[test]
    fn test_longest_final_before_consonant() {
        // "tango": "ng" 뒤에 모음 -> 종성 없음, "inga"도 같음
        let result = tokenize("tango");
        assert_eq!(result.syllables[0].final_, None);
        let result = tokenize("inga");
        assert_eq!(result.syllables[0].final_, None);
        // "anka": "n" 뒤에 자음 -> 종성 ㄴ
        let result = tokenize("anka");
        assert_eq!(result.syllables[0].final_, Some(Jongseong::N));
    }

    #[test]
    fn test_final_ng() {
        let result = tokenize("kang");
        assert_eq!(
            result.syllables,
            vec![syl(Some(Choseong::K), Jungseong::A, Some(Jongseong::Ng), 4)]
        );
    }

    #[test]
    fn test_unmapped_character_substitution() {
        let result = tokenize("a1b");
        assert_eq!(result.substitutions, 1);
        assert_eq!(
            result.syllables,
            vec![
                syl(None, Jungseong::A, None, 1),
                // '1'은 기본 모음으로, 뒤의 b는 종성으로 붙음
                syl(None, Jungseong::Eo, Some(Jongseong::B), 2),
            ]
        );
    }

    #[test]
    fn test_covers_whole_input() {
        for word in ["alexander", "tchaikovsky", "schmidt", "dvořák", "zoë", "x"] {
            let result = tokenize(word);
            assert_eq!(result.consumed(), word.chars().count(), "{}", word);
            assert!(result.syllables.iter().all(|s| s.consumed > 0));
        }
    }
}
