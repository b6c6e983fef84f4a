//! Разбор и сборка `otpauth://totp/Service:Account?secret=...&issuer=...`.
//!
//! Декодирование снимает `%20`, `%3A` и `%40` в пути, кодирование ничего
//! обратно не экранирует.

use crate::error::UriError;
use crate::record::{TotpRecord, UNKNOWN_SERVICE};
use crate::resolve::AccountSupplier;
use url::Url;

const SCHEME: &str = "otpauth";
const TOTP_KIND: &str = "totp";

/// Разобрать otpauth-ссылку в запись.
///
/// Сервис и аккаунт берутся из пути `Service:Account`; если двоеточия нет,
/// сервис берётся из `issuer` (или из самого пути), а аккаунт спрашивается
/// у `accounts`.
pub fn decode(uri: &str, accounts: &mut dyn AccountSupplier) -> Result<TotpRecord, UriError> {
    let url = Url::parse(uri).map_err(|_| UriError::Invalid)?;
    if url.scheme() != SCHEME {
        return Err(UriError::Invalid);
    }

    let kind = url.host_str().unwrap_or("");
    if kind != TOTP_KIND {
        return Err(UriError::UnsupportedProtocol(kind.to_string()));
    }

    // Url экранирует не-ASCII и `{}"<>` в пути, поэтому метку берём из исходной строки
    let path = unescape_label(raw_path(uri));
    let label = path.strip_prefix('/').unwrap_or(path.as_str());
    let secret = first_param(&url, "secret").unwrap_or_default();

    let (service, account) = match label.split_once(':') {
        Some((service, account)) => (service.to_string(), account.to_string()),
        None => {
            let service = match first_param(&url, "issuer") {
                Some(issuer) => issuer,
                None if path.is_empty() => UNKNOWN_SERVICE.to_string(),
                None => path.clone(),
            };
            let account = accounts.account_for(&service)?;
            (service, account)
        }
    };

    Ok(TotpRecord {
        service,
        account,
        secret,
        password: None,
        notes: Some(String::new()),
    })
}

/// Достать только `secret`. Для всего, что не `otpauth://totp`, вернёт "".
pub fn secret_only(uri: &str) -> String {
    if uri.is_empty() {
        return String::new();
    }
    let Ok(url) = Url::parse(uri) else {
        return String::new();
    };
    if url.scheme() != SCHEME || url.host_str() != Some(TOTP_KIND) {
        return String::new();
    }
    first_param(&url, "secret").unwrap_or_default()
}

pub fn encode(record: &TotpRecord) -> String {
    let TotpRecord {
        service,
        account,
        secret,
        ..
    } = record;
    format!("otpauth://totp/{service}:{account}?secret={secret}&issuer={service}")
}

/// Путь как он записан в ссылке: от `/` после хоста до `?` или `#`.
fn raw_path(uri: &str) -> &str {
    let rest = uri.trim().split_once("://").map_or("", |(_, r)| r);
    let rest = rest.split(['?', '#']).next().unwrap_or("");
    rest.find('/').map_or("", |i| &rest[i..])
}

// Вендоры кодируют метку именно так, а разделитель `:` нужен буквальным.
fn unescape_label(path: &str) -> String {
    path.replace("%20", " ")
        .replace("%3A", ":")
        .replace("%40", "@")
}

/// Первое непустое значение параметра запроса.
fn first_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, v)| k == name && !v.is_empty())
        .map(|(_, v)| v.into_owned())
}
