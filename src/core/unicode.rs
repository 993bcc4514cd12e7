//! 유니코드 한글 음절 조합/분해 유틸리티

/// 한글 음절 시작 코드포인트 (가)
pub const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
pub const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

/// 초성 하나가 차지하는 코드포인트 폭 (21 × 28 = 588)
const CHOSEONG_STRIDE: u32 = JUNGSEONG_COUNT * JONGSEONG_COUNT;

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
///
/// `0xAC00 + 초성 × 588 + 중성 × 28 + 종성`
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + choseong * CHOSEONG_STRIDE
        + jungseong * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_complete_hangul(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let choseong = offset / CHOSEONG_STRIDE;
    let jungseong = (offset % CHOSEONG_STRIDE) / JONGSEONG_COUNT;
    let jongseong = offset % JONGSEONG_COUNT;
    Some((choseong, jungseong, jongseong))
}

/// 문자가 완성형 한글(가-힣)인지 확인
pub fn is_complete_hangul(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 초성 인덱스 -> 호환용 자모 문자
pub fn choseong_to_jamo_char(cho: u32) -> Option<char> {
    // 호환용 자모: 초성 순서와 다르므로 직접 매핑
    #[rustfmt::skip]
    const JAMO_CODES: [u32; 19] = [
        0x3131, // ㄱ
        0x3132, // ㄲ
        0x3134, // ㄴ
        0x3137, // ㄷ
        0x3138, // ㄸ
        0x3139, // ㄹ
        0x3141, // ㅁ
        0x3142, // ㅂ
        0x3143, // ㅃ
        0x3145, // ㅅ
        0x3146, // ㅆ
        0x3147, // ㅇ
        0x3148, // ㅈ
        0x3149, // ㅉ
        0x314A, // ㅊ
        0x314B, // ㅋ
        0x314C, // ㅌ
        0x314D, // ㅍ
        0x314E, // ㅎ
    ];
    JAMO_CODES
        .get(cho as usize)
        .and_then(|&code| char::from_u32(code))
}

/// 중성 인덱스 -> 호환용 모음 자모 (ㅏ 0x314F ~ ㅣ 0x3163, 순서 동일)
pub fn jungseong_to_jamo_char(jung: u32) -> Option<char> {
    if jung < JUNGSEONG_COUNT {
        char::from_u32(0x314F + jung)
    } else {
        None
    }
}

/// 종성 인덱스 -> 호환용 자모 문자 (0 = 종성 없음 -> None)
pub fn jongseong_to_jamo_char(jong: u32) -> Option<char> {
    #[rustfmt::skip]
    const JAMO_CODES: [u32; 27] = [
        0x3131, 0x3132, 0x3133, 0x3134, 0x3135, 0x3136, 0x3137, // ㄱ ㄲ ㄳ ㄴ ㄵ ㄶ ㄷ
        0x3139, 0x313A, 0x313B, 0x313C, 0x313D, 0x313E, 0x313F, // ㄹ ㄺ ㄻ ㄼ ㄽ ㄾ ㄿ
        0x3140, 0x3141, 0x3142, 0x3144, 0x3145, 0x3146, 0x3147, // ㅀ ㅁ ㅂ ㅄ ㅅ ㅆ ㅇ
        0x3148, 0x314A, 0x314B, 0x314C, 0x314D, 0x314E,         // ㅈ ㅊ ㅋ ㅌ ㅍ ㅎ
    ];
    if jong == 0 {
        return None;
    }
    JAMO_CODES
        .get(jong as usize - 1)
        .and_then(|&code| char::from_u32(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_syllable() {
        // 가 = 초성 ㄱ(0) + 중성 ㅏ(0) + 종성 없음(0)
        assert_eq!(compose_syllable(0, 0, 0), Some('가'));
        // 한 = 초성 ㅎ(18) + 중성 ㅏ(0) + 종성 ㄴ(4)
        assert_eq!(compose_syllable(18, 0, 4), Some('한'));
        // 김 = 초성 ㄱ(0) + 중성 ㅣ(20) + 종성 ㅁ(16)
        assert_eq!(compose_syllable(0, 20, 16), Some('김'));
        // 헌 = 초성 ㅎ(18) + 중성 ㅓ(4) + 종성 ㄴ(4)
        assert_eq!(compose_syllable(18, 4, 4), Some('헌'));
        // 힣 = 마지막 음절
        assert_eq!(compose_syllable(18, 20, 27), Some('힣'));
    }

    #[test]
    fn test_compose_out_of_range() {
        assert_eq!(compose_syllable(19, 0, 0), None);
        assert_eq!(compose_syllable(0, 21, 0), None);
        assert_eq!(compose_syllable(0, 0, 28), None);
    }

    #[test]
    fn test_decompose_syllable() {
        assert_eq!(decompose_syllable('가'), Some((0, 0, 0)));
        assert_eq!(decompose_syllable('김'), Some((0, 20, 16)));
        assert_eq!(decompose_syllable('조'), Some((12, 8, 0)));
        assert_eq!(decompose_syllable('힣'), Some((18, 20, 27)));

        // 한글이 아닌 문자
        assert_eq!(decompose_syllable('a'), None);
        assert_eq!(decompose_syllable('ㄱ'), None);
    }

    #[test]
    fn test_round_trip_all_indices() {
        for cho in 0..CHOSEONG_COUNT {
            for jung in 0..JUNGSEONG_COUNT {
                for jong in 0..JONGSEONG_COUNT {
                    let c = compose_syllable(cho, jung, jong).unwrap();
                    let code = c as u32;
                    assert!((HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&code));
                    assert_eq!(decompose_syllable(c), Some((cho, jung, jong)));
                }
            }
        }
    }

    #[test]
    fn test_is_complete_hangul() {
        assert!(is_complete_hangul('가'));
        assert!(is_complete_hangul('힣'));
        assert!(!is_complete_hangul('ㄱ'));
        assert!(!is_complete_hangul('a'));
    }

    #[test]
    fn test_jamo_chars() {
        assert_eq!(choseong_to_jamo_char(0), Some('ㄱ'));
        assert_eq!(choseong_to_jamo_char(11), Some('ㅇ'));
        assert_eq!(choseong_to_jamo_char(18), Some('ㅎ'));
        assert_eq!(choseong_to_jamo_char(19), None);

        assert_eq!(jungseong_to_jamo_char(0), Some('ㅏ'));
        assert_eq!(jungseong_to_jamo_char(4), Some('ㅓ'));
        assert_eq!(jungseong_to_jamo_char(20), Some('ㅣ'));
        assert_eq!(jungseong_to_jamo_char(21), None);

        assert_eq!(jongseong_to_jamo_char(0), None);
        assert_eq!(jongseong_to_jamo_char(1), Some('ㄱ'));
        assert_eq!(jongseong_to_jamo_char(8), Some('ㄹ'));
        assert_eq!(jongseong_to_jamo_char(16), Some('ㅁ'));
        assert_eq!(jongseong_to_jamo_char(18), Some('ㅄ'));
        assert_eq!(jongseong_to_jamo_char(21), Some('ㅇ'));
        assert_eq!(jongseong_to_jamo_char(27), Some('ㅎ'));
        assert_eq!(jongseong_to_jamo_char(28), None);
    }
}
