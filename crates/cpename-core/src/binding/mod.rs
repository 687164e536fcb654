//! Bindings between [`Name`] and its four textual encodings
//!
//! - WFN: `wfn:[part="a", vendor="microsoft", ...]`
//! - FS (2.3 formatted string): `cpe:2.3:a:microsoft:...`
//! - URI (2.3): `cpe:/a:microsoft:...` with `%01`/`%02` wildcards and a
//!   packed edition component
//! - URI 2.2: the legacy URI, which cannot carry a literal tilde

pub mod fs;
pub mod pack;
pub mod uri;
pub mod wfn;

use crate::attribute::AttributeValue;
use crate::error::Result;
use crate::name::Name;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Textual encoding of a CPE name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Well-formed name
    Wfn,
    /// CPE 2.3 formatted string
    #[default]
    Fs,
    /// CPE 2.3 URI
    Uri,
    /// Legacy CPE 2.2 URI
    Uri22,
}

impl Encoding {
    pub const ALL: [Encoding; 4] = [Encoding::Wfn, Encoding::Fs, Encoding::Uri, Encoding::Uri22];

    /// Required prefix of a name in this encoding
    pub fn prefix(&self) -> &'static str {
        match self {
            Encoding::Wfn => wfn::PREFIX,
            Encoding::Fs => fs::PREFIX,
            Encoding::Uri | Encoding::Uri22 => uri::PREFIX,
        }
    }

    /// Value given to an attribute the source text leaves out
    ///
    /// `None` means the encoding has no optional attributes: a name that
    /// omits one is malformed.
    pub fn absent_default(&self) -> Option<AttributeValue> {
        match self {
            Encoding::Wfn => Some(AttributeValue::Any),
            Encoding::Fs => None,
            Encoding::Uri => Some(AttributeValue::Any),
            Encoding::Uri22 => Some(AttributeValue::Undefined),
        }
    }

    /// Guess the encoding from the prefix; URI names are taken as 2.3
    pub fn detect(text: &str) -> Option<Encoding> {
        let text = text.trim_start();
        [Encoding::Wfn, Encoding::Fs, Encoding::Uri]
            .into_iter()
            .find(|encoding| text.starts_with(encoding.prefix()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Wfn => "WFN",
            Encoding::Fs => "FS 2.3",
            Encoding::Uri => "URI 2.3",
            Encoding::Uri22 => "URI 2.2",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse `text` as a name in `encoding`
pub fn unbind(text: &str, encoding: Encoding) -> Result<Name> {
    trace!("Unbinding {} name: {}", encoding, text);

    let result = match encoding {
        Encoding::Wfn => wfn::unbind(text),
        Encoding::Fs => fs::unbind(text),
        Encoding::Uri | Encoding::Uri22 => uri::unbind(text, encoding),
    };

    if let Err(ref e) = result {
        debug!("Rejected {} name {:?}: {}", encoding, text, e);
    }
    result
}

/// Render `name` in `encoding`
pub fn bind(name: &Name, encoding: Encoding) -> Result<String> {
    let result = match encoding {
        Encoding::Wfn => Ok(wfn::bind(name)),
        Encoding::Fs => Ok(fs::bind(name)),
        Encoding::Uri | Encoding::Uri22 => uri::bind(name, encoding),
    };

    match result {
        Ok(ref text) => trace!("Bound name to {}: {}", encoding, text),
        Err(ref e) => debug!("Cannot bind name to {}: {}", encoding, e),
    }
    result
}

/// Re-encode a name from one encoding to another
pub fn convert(text: &str, from: Encoding, to: Encoding) -> Result<String> {
    bind(&unbind(text, from)?, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::Attribute;
    use crate::error::Error;

    #[test]
    fn test_detect() {
        assert_eq!(Encoding::detect("wfn:[part=\"a\"]"), Some(Encoding::Wfn));
        assert_eq!(
            Encoding::detect("cpe:2.3:a:*:*:*:*:*:*:*:*:*:*"),
            Some(Encoding::Fs)
        );
        assert_eq!(Encoding::detect("cpe:/a:hp"), Some(Encoding::Uri));
        assert_eq!(Encoding::detect("pkg:npm/foo"), None);
    }

    #[test]
    fn test_prefixes() {
        assert_eq!(Encoding::Wfn.prefix(), "wfn:[");
        assert_eq!(Encoding::Fs.prefix(), "cpe:2.3:");
        assert_eq!(Encoding::Uri.prefix(), Encoding::Uri22.prefix());
        assert_eq!(Encoding::detect("  cpe:/o:linux"), Some(Encoding::Uri));
    }

    #[test]
    fn test_default_table() {
        assert_eq!(Encoding::Wfn.absent_default(), Some(AttributeValue::Any));
        assert_eq!(Encoding::Fs.absent_default(), None);
        assert_eq!(Encoding::Uri.absent_default(), Some(AttributeValue::Any));
        assert_eq!(
            Encoding::Uri22.absent_default(),
            Some(AttributeValue::Undefined)
        );
    }

    #[test]
    fn test_encoding_serde() {
        assert_eq!(serde_json::to_string(&Encoding::Uri22).unwrap(), "\"uri22\"");
        let e: Encoding = serde_json::from_str("\"wfn\"").unwrap();
        assert_eq!(e, Encoding::Wfn);
    }

    #[test]
    fn test_convert_wfn_to_legacy_uri() {
        let wfn = "wfn:[part=\"a\", vendor=\"hp\", product=\"?insight_diagnostics?\", \
                   version=\"8\\.*\", sw_edition=\"?\", target_sw=ANY, target_hw=\"x32\"]";
        assert_eq!(
            convert(wfn, Encoding::Wfn, Encoding::Uri22).unwrap(),
            "cpe:/a:hp:%01insight_diagnostics%01:8.%02::~~%01~~x32~"
        );
    }

    #[test]
    fn test_convert_across_all_encodings() {
        let fs = "cpe:2.3:a:microsoft:internet_explorer:8.0.6001:beta:*:*:*:*:*:*";
        let wfn = convert(fs, Encoding::Fs, Encoding::Wfn).unwrap();
        assert_eq!(
            wfn,
            "wfn:[part=\"a\", vendor=\"microsoft\", product=\"internet_explorer\", \
             version=\"8\\.0\\.6001\", update=\"beta\", edition=ANY, language=ANY, \
             sw_edition=ANY, target_sw=ANY, target_hw=ANY, other=ANY]"
        );
        let uri = convert(&wfn, Encoding::Wfn, Encoding::Uri).unwrap();
        assert_eq!(uri, "cpe:/a:microsoft:internet_explorer:8.0.6001:beta");
        assert_eq!(convert(&uri, Encoding::Uri, Encoding::Fs).unwrap(), fs);
    }

    #[test]
    fn test_unrepresentable_in_legacy_uri() {
        let name = Name::builder()
            .logical(Attribute::Part, "a")
            .unwrap()
            .logical(Attribute::Product, "tilde\\~name")
            .unwrap()
            .build();
        assert_eq!(
            bind(&name, Encoding::Uri22).unwrap_err(),
            Error::UnrepresentableValue {
                attribute: Attribute::Product,
                encoding: Encoding::Uri22,
            }
        );
        assert_eq!(
            bind(&name, Encoding::Uri).unwrap(),
            "cpe:/a::tilde%7ename"
        );
    }
}
