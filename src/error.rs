use thiserror::Error;

/// Фатальные ошибки: вся конвертация прерывается, выходной файл не пишется.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(
        "CSV file must contain the following columns: {required}\n\
         The CSV importer only supports CSV files generated by Apple Passwords.\n\
         Using Bitwarden/Vaultwarden? Export as a JSON (not encrypted) file instead of CSV."
    )]
    MissingCsvColumns { required: String },

    #[error(
        "That doesn't look like a Bitwarden JSON file.\n\
         If you have a Standard Notes TOTP JSON file that you want to convert to a TOTP URI list, use the export option."
    )]
    NotVaultExport,

    #[error(
        "The file appears to be encrypted (the \"encrypted\" key is a truthy value).\n\
         Make sure that you export JSON from Bitwarden/Vaultwarden WITHOUT encryption."
    )]
    EncryptedVault,

    #[error("Only TXT, CSV, and JSON files are supported for import.")]
    UnsupportedExtension,

    #[error("Expected a Standard Notes TOTP JSON list of records")]
    NotRecordList,

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Ошибки разбора одной otpauth-ссылки. Не фатальны: элемент пропускается.
#[derive(Debug, Error)]
pub enum UriError {
    #[error("This is a OTP URI, but it may be using an unsupported protocol, such as HOTP ({0}).")]
    UnsupportedProtocol(String),

    #[error("Invalid TOTP URI.")]
    Invalid,

    /// Не удалось спросить аккаунт у пользователя: это уже фатально.
    #[error("cannot read account name: {0}")]
    Prompt(#[from] std::io::Error),
}
