//! 에러 타입

use thiserror::Error;

use crate::detection::Script;

/// 이름 변환 에러
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// 잘못된 입력 (재시도해도 결과가 같음)
    #[error("잘못된 입력: {0}")]
    InvalidInput(#[from] InvalidInput),
}

/// 입력이 거부된 이유
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// 비어 있거나 정규화 후 남는 글자가 없음
    #[error("이름이 비어 있습니다")]
    Empty,

    /// 최대 길이 초과
    #[error("이름이 너무 깁니다 ({len}자, 최대 {max}자)")]
    TooLong { len: usize, max: usize },

    /// 라틴 문자가 아닌 문자 체계
    #[error("지원하지 않는 문자 체계입니다: {0}")]
    UnsupportedScript(Script),

    /// 인식 가능한 라틴 문자가 하나도 없음
    #[error("인식할 수 있는 라틴 문자가 없습니다")]
    NoLatinLetters,
}

/// 설정 파일 로드/저장 에러
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 파일 읽기/쓰기 실패
    #[error("설정 파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 파싱/직렬화 실패
    #[error("설정 파일 형식 오류: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_messages() {
        let err = ConversionError::from(InvalidInput::TooLong { len: 101, max: 100 });
        assert_eq!(err.to_string(), "잘못된 입력: 이름이 너무 깁니다 (101자, 최대 100자)");

        let err = ConversionError::from(InvalidInput::UnsupportedScript(Script::Cyrillic));
        assert_eq!(err.to_string(), "잘못된 입력: 지원하지 않는 문자 체계입니다: Cyrillic");
    }

    #[test]
    fn test_config_error_from_json() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ConfigError::from(parse_err);
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
