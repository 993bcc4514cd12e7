//! 라틴 문자 철자 -> 한글 자모 매핑 테이블
//!
//! 초성/중성/종성 각각 별도 테이블을 두고, 입력 위치에서 가장 긴 철자부터
//! 찾는다 (최장 일치). 분음 부호가 붙은 문자(á, ö, ñ, ç 등)는 한 글자로 취급한다.

use std::fmt;

use crate::core::unicode::{
    choseong_to_jamo_char, jongseong_to_jamo_char, jungseong_to_jamo_char,
};

/// 테이블 키의 최대 길이 (문자 수)
pub const MAX_PATTERN_LEN: usize = 4;

/// 자모 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JamoRole {
    /// 초성
    Initial,
    /// 중성
    Vowel,
    /// 종성
    Final,
}

/// 초성 (유니코드 순서, 19개)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choseong {
    G,     // ㄱ
    Kk,    // ㄲ
    N,     // ㄴ
    D,     // ㄷ
    Tt,    // ㄸ
    R,     // ㄹ
    M,     // ㅁ
    B,     // ㅂ
    Pp,    // ㅃ
    S,     // ㅅ
    Ss,    // ㅆ
    Ieung, // ㅇ (무음 초성)
    J,     // ㅈ
    Jj,    // ㅉ
    Ch,    // ㅊ
    K,     // ㅋ
    T,     // ㅌ
    P,     // ㅍ
    H,     // ㅎ
}

impl Choseong {
    #[rustfmt::skip]
    pub const ALL: [Choseong; 19] = [
        Choseong::G, Choseong::Kk, Choseong::N, Choseong::D, Choseong::Tt,
        Choseong::R, Choseong::M, Choseong::B, Choseong::Pp, Choseong::S,
        Choseong::Ss, Choseong::Ieung, Choseong::J, Choseong::Jj, Choseong::Ch,
        Choseong::K, Choseong::T, Choseong::P, Choseong::H,
    ];

    /// 초성이 없을 때 채우는 무음 초성 ㅇ
    pub const FILLER: Choseong = Choseong::Ieung;

    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }
}

/// 중성 (유니코드 순서, 21개)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Jungseong {
    A,   // ㅏ
    Ae,  // ㅐ
    Ya,  // ㅑ
    Yae, // ㅒ
    Eo,  // ㅓ
    E,   // ㅔ
    Yeo, // ㅕ
    Ye,  // ㅖ
    O,   // ㅗ
    Wa,  // ㅘ
    Wae, // ㅙ
    Oe,  // ㅚ
    Yo,  // ㅛ
    U,   // ㅜ
    Wo,  // ㅝ
    We,  // ㅞ
    Wi,  // ㅟ
    Yu,  // ㅠ
    Eu,  // ㅡ
    Ui,  // ㅢ
    I,   // ㅣ
}

impl Jungseong {
    #[rustfmt::skip]
    pub const ALL: [Jungseong; 21] = [
        Jungseong::A, Jungseong::Ae, Jungseong::Ya, Jungseong::Yae, Jungseong::Eo,
        Jungseong::E, Jungseong::Yeo, Jungseong::Ye, Jungseong::O, Jungseong::Wa,
        Jungseong::Wae, Jungseong::Oe, Jungseong::Yo, Jungseong::U, Jungseong::Wo,
        Jungseong::We, Jungseong::Wi, Jungseong::Yu, Jungseong::Eu, Jungseong::Ui,
        Jungseong::I,
    ];

    /// 모음을 찾지 못했을 때 쓰는 기본 모음 ㅓ
    pub const DEFAULT: Jungseong = Jungseong::Eo;

    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }
}

/// 종성 (유니코드 순서, 1~27; 0 = 종성 없음은 `Option::None`으로 표현)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Jongseong {
    G = 1, // ㄱ
    Kk,    // ㄲ
    Gs,    // ㄳ
    N,     // ㄴ
    Nj,    // ㄵ
    Nh,    // ㄶ
    D,     // ㄷ
    L,     // ㄹ
    Lg,    // ㄺ
    Lm,    // ㄻ
    Lb,    // ㄼ
    Ls,    // ㄽ
    Lt,    // ㄾ
    Lp,    // ㄿ
    Lh,    // ㅀ
    M,     // ㅁ
    B,     // ㅂ
    Bs,    // ㅄ
    S,     // ㅅ
    Ss,    // ㅆ
    Ng,    // ㅇ
    J,     // ㅈ
    Ch,    // ㅊ
    K,     // ㅋ
    T,     // ㅌ
    P,     // ㅍ
    H,     // ㅎ
}

impl Jongseong {
    #[rustfmt::skip]
    pub const ALL: [Jongseong; 27] = [
        Jongseong::G, Jongseong::Kk, Jongseong::Gs, Jongseong::N, Jongseong::Nj,
        Jongseong::Nh, Jongseong::D, Jongseong::L, Jongseong::Lg, Jongseong::Lm,
        Jongseong::Lb, Jongseong::Ls, Jongseong::Lt, Jongseong::Lp, Jongseong::Lh,
        Jongseong::M, Jongseong::B, Jongseong::Bs, Jongseong::S, Jongseong::Ss,
        Jongseong::Ng, Jongseong::J, Jongseong::Ch, Jongseong::K, Jongseong::T,
        Jongseong::P, Jongseong::H,
    ];

    pub fn index(self) -> u32 {
        self as u32
    }

    /// 0은 종성 없음 -> None
    pub fn from_index(index: u32) -> Option<Self> {
        index
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i as usize).copied())
    }
}

impl fmt::Display for Choseong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match choseong_to_jamo_char(self.index()) {
            Some(c) => write!(f, "{}", c),
            None => write!(f, "{:?}", self),
        }
    }
}

impl fmt::Display for Jungseong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match jungseong_to_jamo_char(self.index()) {
            Some(c) => write!(f, "{}", c),
            None => write!(f, "{:?}", self),
        }
    }
}

impl fmt::Display for Jongseong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match jongseong_to_jamo_char(self.index()) {
            Some(c) => write!(f, "{}", c),
            None => write!(f, "{:?}", self),
        }
    }
}

/// 역할별 철자 테이블 (철자 -> 자모)
///
/// 항목은 정적 슬라이스로 고정되어 있어 실행 중 변경되지 않는다.
#[derive(Debug)]
pub struct SpellingTable<T: 'static> {
    role: JamoRole,
    entries: &'static [(&'static str, T)],
}

impl<T: Copy + 'static> SpellingTable<T> {
    pub const fn new(role: JamoRole, entries: &'static [(&'static str, T)]) -> Self {
        Self { role, entries }
    }

    /// 철자 하나를 정확히 조회
    pub fn get(&self, key: &[char]) -> Option<T> {
        self.entries
            .iter()
            .find(|(pattern, _)| pattern.chars().eq(key.iter().copied()))
            .map(|&(_, value)| value)
    }

    /// `pos`에서 가장 긴 일치 항목 (자모, 소비한 문자 수)
    pub fn longest_match(&self, input: &[char], pos: usize) -> Option<(T, usize)> {
        let remaining = input.len().saturating_sub(pos);
        for len in (1..=MAX_PATTERN_LEN.min(remaining)).rev() {
            if let Some(value) = self.get(&input[pos..pos + len]) {
                log::trace!(
                    "{:?} 일치: {:?}",
                    self.role,
                    input[pos..pos + len].iter().collect::<String>()
                );
                return Some((value, len));
            }
        }
        None
    }

    /// `pos`에서 일치 항목이 하나라도 시작하는지 확인
    pub fn starts_at(&self, input: &[char], pos: usize) -> bool {
        self.longest_match(input, pos).is_some()
    }
}

/// 초성 테이블
#[rustfmt::skip]
pub static INITIALS: SpellingTable<Choseong> = SpellingTable::new(JamoRole::Initial, &[
    ("b", Choseong::B), ("p", Choseong::P), ("d", Choseong::D), ("t", Choseong::T),
    ("g", Choseong::G), ("k", Choseong::K), ("j", Choseong::J), ("s", Choseong::S),
    ("h", Choseong::H), ("m", Choseong::M), ("n", Choseong::N), ("l", Choseong::R),
    ("r", Choseong::R), ("f", Choseong::P), ("v", Choseong::B), ("w", Choseong::Ieung),
    ("y", Choseong::Ieung), ("z", Choseong::J), ("c", Choseong::K), ("x", Choseong::K),
    ("q", Choseong::K),
    ("ç", Choseong::S), ("ñ", Choseong::N),
    // 이중 자음
    ("ch", Choseong::Ch), ("sh", Choseong::S), ("th", Choseong::S), ("ph", Choseong::P),
    ("ng", Choseong::Ieung), ("kh", Choseong::K), ("gh", Choseong::G), ("dj", Choseong::J),
    ("ck", Choseong::K),
    ("tch", Choseong::Ch), ("sch", Choseong::S),
]);

/// 중성 테이블
#[rustfmt::skip]
pub static VOWELS: SpellingTable<Jungseong> = SpellingTable::new(JamoRole::Vowel, &[
    ("a", Jungseong::A), ("e", Jungseong::E), ("i", Jungseong::I), ("o", Jungseong::O),
    ("u", Jungseong::U),
    // 이중 모음
    ("ae", Jungseong::Ae), ("ai", Jungseong::Ae), ("ay", Jungseong::E), ("ea", Jungseong::I),
    ("ee", Jungseong::I), ("ei", Jungseong::E), ("ie", Jungseong::I), ("oa", Jungseong::O),
    ("oe", Jungseong::O), ("oo", Jungseong::U), ("ou", Jungseong::U), ("oy", Jungseong::O),
    ("ue", Jungseong::U), ("ui", Jungseong::U), ("ya", Jungseong::Ya), ("ye", Jungseong::Ye),
    ("yo", Jungseong::Yo), ("yu", Jungseong::Yu), ("au", Jungseong::A), ("aw", Jungseong::A),
    ("eo", Jungseong::Eo), ("eu", Jungseong::Eo), ("ew", Jungseong::U), ("ey", Jungseong::E),
    // 분음 부호 모음
    ("ä", Jungseong::A), ("á", Jungseong::A), ("à", Jungseong::A), ("â", Jungseong::A),
    ("ã", Jungseong::A),
    ("é", Jungseong::E), ("è", Jungseong::E), ("ê", Jungseong::E), ("ë", Jungseong::E),
    ("í", Jungseong::I), ("ì", Jungseong::I), ("î", Jungseong::I), ("ï", Jungseong::I),
    ("ÿ", Jungseong::I),
    ("ó", Jungseong::O), ("ò", Jungseong::O), ("ô", Jungseong::O), ("õ", Jungseong::O),
    ("ö", Jungseong::Eo),
    ("ú", Jungseong::U), ("ù", Jungseong::U), ("û", Jungseong::U), ("ü", Jungseong::U),
]);

/// 종성 테이블
#[rustfmt::skip]
pub static FINALS: SpellingTable<Jongseong> = SpellingTable::new(JamoRole::Final, &[
    ("b", Jongseong::B), ("p", Jongseong::B), ("d", Jongseong::D), ("t", Jongseong::S),
    ("g", Jongseong::G), ("k", Jongseong::G), ("s", Jongseong::S), ("z", Jongseong::S),
    ("x", Jongseong::G), ("f", Jongseong::B), ("v", Jongseong::B), ("m", Jongseong::M),
    ("n", Jongseong::N), ("l", Jongseong::L), ("r", Jongseong::L), ("c", Jongseong::G),
    ("ng", Jongseong::Ng), ("sh", Jongseong::S), ("ch", Jongseong::S), ("th", Jongseong::S),
    ("ck", Jongseong::G),
]);

/// 어떤 테이블에도 없는 문자의 처리 정책: 한 글자를 소비하고 기본 모음 ㅓ로 대체
pub fn resolve_unmapped(c: char) -> Jungseong {
    log::trace!("매핑 없는 문자 {:?} -> 기본 모음 {}", c, Jungseong::DEFAULT);
    Jungseong::DEFAULT
}
