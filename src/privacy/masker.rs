//! PII masking for session notes
//!
//! Emails, phone numbers and Aadhaar-style identifiers are replaced with fixed
//! placeholders. The passes run in a fixed order and each one sees the output
//! of the previous pass, so a later pattern can still match digits an earlier
//! pattern left behind (e.g. `987654321012` becomes `[PHONE]12`).

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// Placeholder for email addresses.
pub const EMAIL_PLACEHOLDER: &str = "[EMAIL]";

/// Placeholder for phone numbers (generic and Indian mobile formats).
pub const PHONE_PLACEHOLDER: &str = "[PHONE]";

/// Placeholder for 12-digit Aadhaar-style numbers.
pub const AADHAAR_PLACEHOLDER: &str = "[AADHAAR]";

const EMAIL_PATTERN: &str = r"[\w.-]+@[\w.-]+";
const PHONE_PATTERN: &str = r"\b\d{3}[-.\s]?\d{3}[-.\s]?\d{4}\b";
const INDIAN_MOBILE_PATTERN: &str = r"(\+91[-\s]?|0)?[6-9]\d{9}";
const AADHAAR_PATTERN: &str = r"\b\d{4}[\s-]?\d{4}[\s-]?\d{4}\b";

static DEFAULT_MASKER: LazyLock<PiiMasker> =
    LazyLock::new(|| PiiMasker::new().expect("built-in PII patterns must compile"));

/// Kind of personal data a masking pass targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PiiKind {
    Email,
    Phone,
    IndianMobile,
    Aadhaar,
}

impl PiiKind {
    fn placeholder(&self) -> &'static str {
        match self {
            Self::Email => EMAIL_PLACEHOLDER,
            Self::Phone | Self::IndianMobile => PHONE_PLACEHOLDER,
            Self::Aadhaar => AADHAAR_PLACEHOLDER,
        }
    }
}

#[derive(Debug)]
struct MaskRule {
    kind: PiiKind,
    pattern: Regex,
}

/// Number of substitutions made by each masking pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaskReport {
    pub emails: usize,
    pub phones: usize,
    pub indian_mobiles: usize,
    pub aadhaar: usize,
}

impl MaskReport {
    /// Total substitutions across all passes
    pub fn total(&self) -> usize {
        self.emails + self.phones + self.indian_mobiles + self.aadhaar
    }

    fn record(&mut self, kind: PiiKind, count: usize) {
        match kind {
            PiiKind::Email => self.emails += count,
            PiiKind::Phone => self.phones += count,
            PiiKind::IndianMobile => self.indian_mobiles += count,
            PiiKind::Aadhaar => self.aadhaar += count,
        }
    }
}

/// Ordered set of compiled masking passes.
#[derive(Debug)]
pub struct PiiMasker {
    rules: Vec<MaskRule>,
}

impl PiiMasker {
    /// Compile the built-in patterns in their masking order.
    pub fn new() -> Result<Self, regex::Error> {
        let rules = [
            (PiiKind::Email, EMAIL_PATTERN),
            (PiiKind::Phone, PHONE_PATTERN),
            (PiiKind::IndianMobile, INDIAN_MOBILE_PATTERN),
            (PiiKind::Aadhaar, AADHAAR_PATTERN),
        ]
        .into_iter()
        .map(|(kind, pattern)| {
            Ok(MaskRule {
                kind,
                pattern: Regex::new(pattern)?,
            })
        })
        .collect::<Result<Vec<_>, regex::Error>>()?;

        Ok(Self { rules })
    }

    /// Shared masker compiled once per process.
    pub fn global() -> &'static PiiMasker {
        &DEFAULT_MASKER
    }

    /// Mask all recognised PII in `text`.
    pub fn mask(&self, text: &str) -> String {
        self.mask_with_report(text).0
    }

    /// Mask all recognised PII in `text` and report what each pass replaced.
    pub fn mask_with_report(&self, text: &str) -> (String, MaskReport) {
        let mut report = MaskReport::default();
        let mut current = text.to_string();

        for rule in &self.rules {
            let placeholder = rule.kind.placeholder();
            let mut count = 0;
            let replaced = rule.pattern.replace_all(&current, |_: &Captures| {
                count += 1;
                placeholder
            });
            if let Cow::Owned(masked) = replaced {
                current = masked;
            }
            report.record(rule.kind, count);
        }

        (current, report)
    }
}

/// Mask PII in `text` using the shared masker.
pub fn mask_pii(text: &str) -> String {
    PiiMasker::global().mask(text)
}
