use crate::record::TotpRecord;
use anyhow::Context;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::{Path, PathBuf};

/// Раскрыть `~` в начале пути в домашнюю директорию.
pub fn expand_path(raw: &str) -> PathBuf {
    if raw == "~" {
        if let Some(h) = dirs::home_dir() {
            return h;
        }
    } else if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(h) = dirs::home_dir() {
            return h.join(rest);
        }
    }
    PathBuf::from(raw)
}

/// Выходной путь для `import`: без точки в имени добавляем `.json`.
pub fn json_output_path(raw: &str) -> String {
    if raw.contains('.') {
        raw.to_string()
    } else {
        format!("{raw}.json")
    }
}

pub fn read_text(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}

/// Записи в JSON с отступом в 4 пробела.
pub fn write_records(path: &Path, records: &[TotpRecord]) -> anyhow::Result<()> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    records.serialize(&mut ser)?;
    std::fs::write(path, buf).with_context(|| format!("cannot write {}", path.display()))?;
    Ok(())
}

pub fn write_text(path: &Path, text: &str) -> anyhow::Result<()> {
    std::fs::write(path, text).with_context(|| format!("cannot write {}", path.display()))?;
    Ok(())
}
