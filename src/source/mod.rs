pub mod apple_csv;
pub mod bitwarden;
pub mod uri_list;

use crate::error::ConvertError;
use crate::record::{Batch, TotpRecord};
use crate::resolve::AccountSupplier;
use std::path::Path;

/// Формат входного файла для `import`, определяется по расширению.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SourceFormat {
    UriList,
    AppleCsv,
    BitwardenJson,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Result<Self, ConvertError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("txt") => Ok(Self::UriList),
            Some("csv") => Ok(Self::AppleCsv),
            Some("json") => Ok(Self::BitwardenJson),
            _ => Err(ConvertError::UnsupportedExtension),
        }
    }

    pub fn normalize(
        self,
        text: &str,
        accounts: &mut dyn AccountSupplier,
    ) -> Result<Batch<TotpRecord>, ConvertError> {
        match self {
            Self::UriList => Ok(uri_list::normalize(text, accounts)?),
            Self::AppleCsv => apple_csv::normalize(text),
            Self::BitwardenJson => bitwarden::normalize(text, accounts),
        }
    }
}
