use serde::{Deserialize, Serialize};

/// Маркер сервиса, когда его не удалось извлечь ни из пути, ни из issuer.
pub const UNKNOWN_SERVICE: &str = "[Unknown Service]";

/// Одна TOTP-запись в формате Standard Notes Authenticator.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TotpRecord {
    pub service: String,
    pub account: String,
    pub secret: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Итог пакетной конвертации: готовые элементы и число пропущенных с предупреждением.
#[derive(Debug)]
pub struct Batch<T> {
    pub items: Vec<T>,
    pub skipped: usize,
}
