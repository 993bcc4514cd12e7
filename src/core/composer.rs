//! 음절 조합기: (초성, 중성, 종성) -> 완성형 한글 코드포인트

use crate::core::jamo_mapper::Choseong;
use crate::core::tokenizer::Syllable;
use crate::core::unicode::compose_syllable;

/// 음절 하나를 완성형 한글로 조합
///
/// 초성이 없으면 ㅇ(11), 종성이 없으면 0을 사용한다.
/// 인덱스가 모두 닫힌 열거형에서 오므로 결과는 항상 가(AC00)~힣(D7A3) 범위이다.
pub fn compose(syllable: &Syllable) -> char {
    let choseong = syllable.initial.unwrap_or(Choseong::FILLER).index();
    let jungseong = syllable.vowel.index();
    let jongseong = syllable.final_.map_or(0, |jong| jong.index());
    compose_syllable(choseong, jungseong, jongseong).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// 음절 목록을 한글 문자열로 조합
pub fn compose_all(syllables: &[Syllable]) -> String {
    syllables.iter().map(compose).collect()
}

/// 같은 글자가 세 번 이상 연속되면 두 번으로 줄임
pub fn collapse_repeats(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev = None;
    let mut run = 0;

    for c in text.chars() {
        if prev == Some(c) {
            run += 1;
        } else {
            prev = Some(c);
            run = 1;
        }
        if run <= 2 {
            result.push(c);
        }
    }

    result
}
