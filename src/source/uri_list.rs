use crate::error::UriError;
use crate::record::{Batch, TotpRecord};
use crate::resolve::AccountSupplier;
use crate::uri;
use std::io;
use tracing::warn;

/// Список otpauth-ссылок, по одной на строку.
///
/// Пустые строки пропускаются молча, битые ссылки с предупреждением.
pub fn normalize(
    text: &str,
    accounts: &mut dyn AccountSupplier,
) -> io::Result<Batch<TotpRecord>> {
    let mut records = Vec::new();
    let mut skipped = 0;

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match uri::decode(line, accounts) {
            Ok(rec) => records.push(rec),
            Err(UriError::Prompt(e)) => return Err(e),
            Err(e) => {
                warn!("Line {}: {e} Skipping.", idx + 1);
                skipped += 1;
            }
        }
    }

    Ok(Batch {
        items: records,
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canned(_: &str) -> io::Result<String> {
        Ok("someone".to_string())
    }

    #[test]
    fn converts_each_line() {
        let text = "\
otpauth://totp/Example:bob?secret=ABC123&issuer=Example

   otpauth://totp/GitHub:alice?secret=JBSWY3DPEHPK3PXP
";
        let records = normalize(text, &mut canned).unwrap().items;
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            TotpRecord {
                service: "Example".into(),
                account: "bob".into(),
                secret: "ABC123".into(),
                password: None,
                notes: Some(String::new()),
            }
        );
        assert_eq!(records[1].service, "GitHub");
        assert_eq!(records[1].account, "alice");
    }

    #[test]
    fn bad_lines_do_not_abort_batch() {
        let text = "\
otpauth://hotp/A:a?secret=AAAA&counter=1
https://example.com
otpauth://totp/B:b?secret=BBBB
garbage
";
        let batch = normalize(text, &mut canned).unwrap();
        assert_eq!(batch.items.len(), 1);
        assert_eq!(batch.items[0].service, "B");
        assert_eq!(batch.skipped, 3);
    }

    #[test]
    fn blank_lines_are_not_counted_as_skipped() {
        let text = "otpauth://totp/A:a?secret=S\n\n  \nnot a uri\notpauth://hotp/B:b?secret=S\n";
        let batch = normalize(text, &mut canned).unwrap();
        assert_eq!(batch.items.len(), 1);
        assert_eq!(batch.skipped, 2);
    }

    #[test]
    fn missing_account_is_prompted() {
        let batch = normalize("otpauth://totp/?secret=S&issuer=Acme\n", &mut canned).unwrap();
        assert_eq!(batch.items[0].account, "someone");
    }

    #[test]
    fn prompt_failure_aborts() {
        let mut broken =
            |_: &str| Err::<String, _>(io::Error::new(io::ErrorKind::UnexpectedEof, "eof"));
        assert!(normalize("otpauth://totp/Solo?secret=S", &mut broken).is_err());
    }
}
