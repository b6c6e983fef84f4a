use crate::error::ConvertError;
use crate::record::{Batch, TotpRecord, UNKNOWN_SERVICE};
use crate::resolve::AccountSupplier;
use crate::uri;
use serde_json::Value;
use tracing::debug;

/// Незашифрованный JSON-экспорт Bitwarden/Vaultwarden.
pub fn normalize(
    text: &str,
    accounts: &mut dyn AccountSupplier,
) -> Result<Batch<TotpRecord>, ConvertError> {
    let data: Value = serde_json::from_str(text)?;

    let (Some(encrypted), Some(items)) = (data.get("encrypted"), data.get("items")) else {
        return Err(ConvertError::NotVaultExport);
    };
    if is_truthy(encrypted) {
        return Err(ConvertError::EncryptedVault);
    }
    let items = items.as_array().ok_or(ConvertError::NotVaultExport)?;

    let mut records = Vec::new();
    for item in items {
        let Some(login) = item.get("login").filter(|l| l.is_object()) else {
            continue;
        };
        let totp = str_field(login, "totp").unwrap_or_default();
        if totp.is_empty() {
            debug!("Vault item without TOTP: {:?}", str_field(item, "name"));
            continue;
        }

        let service = str_field(item, "name")
            .filter(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_SERVICE)
            .to_string();

        let account = match str_field(login, "username") {
            Some(u) if !u.is_empty() => u.to_string(),
            _ => accounts.account_for(&service)?,
        };

        let notes = str_field(login, "notes").or_else(|| str_field(item, "notes"));

        records.push(TotpRecord {
            service,
            account,
            secret: uri::secret_only(totp),
            password: str_field(login, "password").map(String::from),
            notes: notes.map(String::from),
        });
    }

    Ok(Batch {
        items: records,
        skipped: 0,
    })
}

fn str_field<'a>(v: &'a Value, key: &str) -> Option<&'a str> {
    v.get(key).and_then(Value::as_str)
}

/// Истинность значения в духе JSON-экспортов: пустое и нулевое считается ложью.
fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
