//! 문자 범위 기반 문자 체계(script) 판별

use std::fmt;

/// 문자 체계
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    /// 라틴 문자 (분음 부호 포함)
    Latin,
    /// 한글 (완성형 + 자모)
    Hangul,
    /// 키릴 문자
    Cyrillic,
    /// 그리스 문자
    Greek,
    /// 히라가나/가타카나
    Kana,
    /// 한자
    Han,
    /// 그 밖의 문자 (아랍, 데바나가리, 태국 문자 등)
    Other,
}

impl Script {
    /// 라틴 음절 분해기로 처리할 수 있는 문자 체계인지
    pub fn is_latin(self) -> bool {
        self == Script::Latin
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Script::Latin => "Latin",
            Script::Hangul => "Hangul",
            Script::Cyrillic => "Cyrillic",
            Script::Greek => "Greek",
            Script::Kana => "Kana",
            Script::Han => "Han",
            Script::Other => "Other",
        };
        f.write_str(name)
    }
}

/// 문자 하나의 문자 체계 (문자가 아니면 None)
pub fn classify_char(c: char) -> Option<Script> {
    let cp = c as u32;
    let script = match cp {
        0x0041..=0x005A | 0x0061..=0x007A => Script::Latin,
        // 라틴-1 보충 (×, ÷ 제외), 확장 A/B, 추가 확장
        0x00C0..=0x00D6 | 0x00D8..=0x00F6 | 0x00F8..=0x024F | 0x1E00..=0x1EFF => Script::Latin,
        0x0370..=0x03FF => Script::Greek,
        0x0400..=0x04FF => Script::Cyrillic,
        0x1100..=0x11FF | 0x3130..=0x318F | 0xAC00..=0xD7A3 => Script::Hangul,
        0x3040..=0x30FF => Script::Kana,
        0x3400..=0x4DBF | 0x4E00..=0x9FFF => Script::Han,
        _ if c.is_alphabetic() => Script::Other,
        _ => return None,
    };
    Some(script)
}

/// 텍스트의 문자 체계: 문자 체계가 정해지는 첫 글자 기준
///
/// 글자가 하나도 없으면 (공백, 숫자, 기호만) None
pub fn detect_script(text: &str) -> Option<Script> {
    text.chars().find_map(classify_char)
}

/// 텍스트에 라틴 이외의 문자 체계가 섞여 있으면 그 첫 번째 문자 체계
pub fn first_non_latin(text: &str) -> Option<Script> {
    text.chars()
        .filter_map(classify_char)
        .find(|script| !script.is_latin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_char() {
        assert_eq!(classify_char('a'), Some(Script::Latin));
        assert_eq!(classify_char('Z'), Some(Script::Latin));
        assert_eq!(classify_char('é'), Some(Script::Latin));
        assert_eq!(classify_char('ř'), Some(Script::Latin));
        assert_eq!(classify_char('가'), Some(Script::Hangul));
        assert_eq!(classify_char('ㄱ'), Some(Script::Hangul));
        assert_eq!(classify_char('ж'), Some(Script::Cyrillic));
        assert_eq!(classify_char('λ'), Some(Script::Greek));
        assert_eq!(classify_char('あ'), Some(Script::Kana));
        assert_eq!(classify_char('カ'), Some(Script::Kana));
        assert_eq!(classify_char('王'), Some(Script::Han));
        assert_eq!(classify_char('ع'), Some(Script::Other));

        assert_eq!(classify_char('1'), None);
        assert_eq!(classify_char(' '), None);
        assert_eq!(classify_char('×'), None);
        assert_eq!(classify_char('-'), None);
    }

    #[test]
    fn test_detect_script() {
        assert_eq!(detect_script("John Smith"), Some(Script::Latin));
        assert_eq!(detect_script("  José"), Some(Script::Latin));
        assert_eq!(detect_script("Иван"), Some(Script::Cyrillic));
        assert_eq!(detect_script("김민수"), Some(Script::Hangul));
        assert_eq!(detect_script("田中"), Some(Script::Han));
        assert_eq!(detect_script("123 !?"), None);
        assert_eq!(detect_script(""), None);
    }

    #[test]
    fn test_first_non_latin() {
        assert_eq!(first_non_latin("John Smith"), None);
        assert_eq!(first_non_latin("John 김"), Some(Script::Hangul));
        assert_eq!(first_non_latin("Ivan Иванов"), Some(Script::Cyrillic));
    }

    #[test]
    fn test_display() {
        assert_eq!(Script::Latin.to_string(), "Latin");
        assert_eq!(Script::Cyrillic.to_string(), "Cyrillic");
    }
}
