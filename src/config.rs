//! 변환 엔진 설정 로드/저장 (JSON)

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::unicode::is_complete_hangul;
use crate::error::ConfigError;

/// 성(family name)으로 볼 이름 조각의 위치
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FamilyNamePosition {
    /// 첫 조각이 성 테이블에 없고 마지막 조각이 있으면 마지막 조각, 그 외에는 첫 조각
    #[default]
    Auto,
    /// 항상 첫 조각
    First,
    /// 항상 마지막 조각
    Last,
}

/// 변환 엔진 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// 허용하는 최대 이름 길이 (유니코드 스칼라 값 기준, 포함)
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
    /// 성 테이블에 없는 성 대신 쓰는 한글
    #[serde(default = "default_surname")]
    pub default_surname: String,
    /// 성으로 볼 조각 위치
    #[serde(default)]
    pub family_name_position: FamilyNamePosition,
    /// 같은 음절이 세 번 이상 반복되면 두 번으로 줄임
    #[serde(default = "default_collapse_repeats")]
    pub collapse_repeats: bool,
}

fn default_max_name_length() -> usize {
    100
}

fn default_surname() -> String {
    "김".to_string()
}

fn default_collapse_repeats() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_name_length: default_max_name_length(),
            default_surname: default_surname(),
            family_name_position: FamilyNamePosition::default(),
            collapse_repeats: default_collapse_repeats(),
        }
    }
}

impl EngineConfig {
    /// 쓸 수 없는 값을 기본값으로 교체
    ///
    /// `default_surname`은 비어 있지 않은 완성형 한글이어야 한다.
    pub fn sanitized(mut self) -> Self {
        let surname = &self.default_surname;
        if surname.is_empty() || !surname.chars().all(is_complete_hangul) {
            log::warn!(
                "기본 성 {:?}은 완성형 한글이 아님, {} 사용",
                surname,
                default_surname()
            );
            self.default_surname = default_surname();
        }
        self
    }
}

/// 설정 파일 로드 (실패 시 에러 반환)
pub fn try_load_config(path: &Path) -> Result<EngineConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: EngineConfig = serde_json::from_str(&content)?;
    Ok(config.sanitized())
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config(path: &Path) -> EngineConfig {
    match try_load_config(path) {
        Ok(config) => config,
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("설정 파일 없음 ({}), 기본값 사용", path.display());
            EngineConfig::default()
        }
        Err(e) => {
            log::warn!("설정 파일 로드 실패 ({}): {}, 기본값 사용", path.display(), e);
            EngineConfig::default()
        }
    }
}

/// 설정 파일 저장
pub fn save_config(path: &Path, config: &EngineConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
