//! 입력 문자 체계 / 원어 감지 모듈

mod language;
mod script;

pub use language::{detect_language, resolve_language, Language, AUTO_CODE};
pub use script::{classify_char, detect_script, first_non_latin, Script};
