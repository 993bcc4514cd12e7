//! 성(family name) 고정 표기 테이블
//!
//! 관용 표기가 정해진 성은 음절 분해 없이 이 테이블의 한글을 그대로 쓴다.

use std::collections::HashMap;

use lazy_static::lazy_static;

#[rustfmt::skip]
const SURNAMES: &[(&str, &str)] = &[
    // 영어권
    ("johnson", "존슨"), ("smith", "스미스"), ("brown", "브라운"), ("jones", "존스"),
    ("miller", "밀러"), ("davis", "데이비스"), ("wilson", "윌슨"), ("anderson", "앤더슨"),
    ("thomas", "토마스"), ("taylor", "테일러"), ("moore", "무어"), ("jackson", "잭슨"),
    ("martin", "마틴"), ("lee", "리"), ("thompson", "톰슨"), ("white", "화이트"),
    ("harris", "해리스"), ("clark", "클라크"), ("lewis", "루이스"), ("robinson", "로빈슨"),
    ("walker", "워커"), ("young", "영"), ("allen", "앨런"), ("king", "킹"),
    ("wright", "라이트"), ("scott", "스콧"), ("hill", "힐"), ("green", "그린"),
    ("adams", "아담스"), ("nelson", "넬슨"), ("baker", "베이커"), ("hall", "홀"),
    ("campbell", "캠벨"), ("mitchell", "미첼"), ("carter", "카터"), ("roberts", "로버츠"),
    // 스페인/포르투갈어권
    ("garcia", "가르시아"), ("garcía", "가르시아"), ("rodriguez", "로드리게스"),
    ("rodríguez", "로드리게스"), ("martinez", "마르티네스"), ("martínez", "마르티네스"),
    ("hernandez", "에르난데스"), ("hernández", "에르난데스"), ("lopez", "로페스"),
    ("lópez", "로페스"), ("gonzalez", "곤살레스"), ("gonzález", "곤살레스"),
    ("perez", "페레스"), ("pérez", "페레스"), ("sanchez", "산체스"), ("sánchez", "산체스"),
    ("ramirez", "라미레스"), ("ramírez", "라미레스"), ("torres", "토레스"),
    ("flores", "플로레스"), ("rivera", "리베라"), ("silva", "실바"),
    // 기타
    ("nguyen", "응우옌"), ("müller", "뮐러"), ("schmidt", "슈미트"), ("dubois", "뒤부아"),
    ("rossi", "로시"),
    // 한국 성의 로마자 표기
    ("kim", "김"), ("park", "박"), ("choi", "최"), ("jung", "정"), ("kang", "강"),
];

lazy_static! {
    static ref SURNAME_TABLE: HashMap<&'static str, &'static str> =
        SURNAMES.iter().copied().collect();
}

/// 정규화된(소문자) 성으로 고정 표기 조회
pub fn lookup_surname(name: &str) -> Option<&'static str> {
    SURNAME_TABLE.get(name.to_lowercase().as_str()).copied()
}
