//! 한글 -> 로마자 변환 (국어의 로마자 표기법 기준)
//!
//! 완성형 음절을 초성/중성/종성 인덱스로 분해한 뒤 각각의 로마자 철자를 붙인다.
//! 종성은 받침 발음의 대표음으로 묶는다 (ㄷ,ㅅ,ㅆ,ㅈ,ㅊ,ㅌ,ㅎ -> t 등).
//! 음절 사이는 하이픈으로 잇고, 한글이 아닌 문자는 그대로 둔다.

use crate::core::unicode::decompose_syllable;

/// 초성 로마자 (ㅇ은 소리 없음)
#[rustfmt::skip]
const CHOSEONG_ROMAN: [&str; 19] = [
    "g", "kk", "n", "d", "tt", "r", "m", "b", "pp", "s",
    "ss", "", "j", "jj", "ch", "k", "t", "p", "h",
];

/// 중성 로마자
#[rustfmt::skip]
const JUNGSEONG_ROMAN: [&str; 21] = [
    "a", "ae", "ya", "yae", "eo", "e", "yeo", "ye", "o", "wa",
    "wae", "oe", "yo", "u", "wo", "we", "wi", "yu", "eu", "ui", "i",
];

/// 종성 인덱스 -> 받침 대표음
fn jongseong_to_roman(jong: u32) -> &'static str {
    // 종성 인덱스: 없음(0) ㄱ(1) ㄲ(2) ㄳ(3) ㄴ(4) ㄵ(5) ㄶ(6) ㄷ(7) ㄹ(8) ㄺ(9)
    //            ㄻ(10) ㄼ(11) ㄽ(12) ㄾ(13) ㄿ(14) ㅀ(15) ㅁ(16) ㅂ(17) ㅄ(18) ㅅ(19)
    //            ㅆ(20) ㅇ(21) ㅈ(22) ㅊ(23) ㅋ(24) ㅌ(25) ㅍ(26) ㅎ(27)
    match jong {
        1 | 2 | 3 | 9 | 24 => "k",
        4 | 5 | 6 => "n",
        7 | 19 | 20 | 22 | 23 | 25 | 27 => "t",
        8 | 11 | 12 | 13 | 15 => "l",
        10 | 16 => "m",
        14 | 17 | 18 | 26 => "p",
        21 => "ng",
        _ => "",
    }
}

/// 완성형 음절 하나를 로마자로 변환 (한글이 아니면 None)
pub fn romanize_syllable(c: char) -> Option<String> {
    let (cho, jung, jong) = decompose_syllable(c)?;
    let mut result = String::with_capacity(6);
    result.push_str(CHOSEONG_ROMAN.get(cho as usize)?);
    result.push_str(JUNGSEONG_ROMAN.get(jung as usize)?);
    result.push_str(jongseong_to_roman(jong));
    Some(result)
}

/// 한글 문자열을 로마자로 변환
///
/// # Examples
/// ```
/// use hangul_namer::romanize;
/// assert_eq!(romanize("김"), "gim");
/// assert_eq!(romanize("스미스"), "seu-mi-seu");
/// ```
pub fn romanize(hangul: &str) -> String {
    let mut result = String::with_capacity(hangul.len() * 2);
    let mut prev_was_syllable = false;

    for c in hangul.chars() {
        match romanize_syllable(c) {
            Some(roman) => {
                if prev_was_syllable {
                    result.push('-');
                }
                result.push_str(&roman);
                prev_was_syllable = true;
            }
            None => {
                // 한글이 아닌 문자는 그대로 유지
                result.push(c);
                prev_was_syllable = false;
            }
        }
    }

    result
}
