use crate::error::ConvertError;
use crate::record::{Batch, TotpRecord};
use crate::uri;
use serde_json::Value;
use tracing::warn;

/// Превратить JSON Standard Notes Authenticator в список otpauth-ссылок.
///
/// Записи без service/account/secret пропускаются с предупреждением,
/// порядок сохраняется, дубликаты не убираются.
pub fn export_uris(text: &str) -> Result<Batch<String>, ConvertError> {
    let data: Value = serde_json::from_str(text)?;
    let Value::Array(items) = data else {
        return Err(ConvertError::NotRecordList);
    };

    let mut uris = Vec::with_capacity(items.len());
    let mut skipped = 0;
    for (idx, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<TotpRecord>(item) {
            Ok(rec) => uris.push(uri::encode(&rec)),
            Err(e) => {
                warn!("Invalid TOTP object #{}. Missing required keys ({e}), skipping.", idx + 1);
                skipped += 1;
            }
        }
    }
    Ok(Batch {
        items: uris,
        skipped,
    })
}

/// Одна ссылка на строку, каждая строка завершается `\n`.
pub fn render_uri_list(uris: &[String]) -> String {
    let mut out = String::new();
    for u in uris {
        out.push_str(u);
        out.push('\n');
    }
    out
}
