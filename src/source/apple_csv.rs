use crate::error::ConvertError;
use crate::record::{Batch, TotpRecord};
use crate::uri;
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Колонки экспорта Apple Passwords, без которых импорт невозможен.
pub const REQUIRED_COLUMNS: [&str; 5] = ["Title", "Username", "Password", "Notes", "OTPAuth"];

struct Columns {
    title: usize,
    username: usize,
    password: usize,
    notes: usize,
    otpauth: usize,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self, ConvertError> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        match (
            find("Title"),
            find("Username"),
            find("Password"),
            find("Notes"),
            find("OTPAuth"),
        ) {
            (Some(title), Some(username), Some(password), Some(notes), Some(otpauth)) => Ok(Self {
                title,
                username,
                password,
                notes,
                otpauth,
            }),
            _ => Err(ConvertError::MissingCsvColumns {
                required: REQUIRED_COLUMNS.join(", "),
            }),
        }
    }
}

/// CSV из Apple Passwords. Строки без OTPAuth пропускаются, повторы
/// (Title, Username, secret) схлопываются в первую встреченную строку.
pub fn normalize(text: &str) -> Result<Batch<TotpRecord>, ConvertError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = rdr.headers()?.clone();
    let cols = Columns::from_headers(&headers)?;

    let mut records = Vec::new();
    let mut seen: HashSet<(String, String, String)> = HashSet::new();
    let mut skipped = 0;

    for row in rdr.records() {
        let row = row?;
        let cell = |idx: usize| row.get(idx).unwrap_or("").to_string();

        let otpauth = cell(cols.otpauth);
        if otpauth.is_empty() {
            continue;
        }

        let title = cell(cols.title);
        let username = cell(cols.username);
        let secret = uri::secret_only(&otpauth);

        if !seen.insert((title.clone(), username.clone(), secret.clone())) {
            warn!("Skipping duplicate: Service='{title}', Account='{username}'");
            skipped += 1;
            continue;
        }

        debug!("CSV entry {title} ({username})");
        records.push(TotpRecord {
            service: title,
            account: username,
            secret,
            password: Some(cell(cols.password)),
            notes: Some(cell(cols.notes)),
        });
    }

    Ok(Batch {
        items: records,
        skipped,
    })
}
