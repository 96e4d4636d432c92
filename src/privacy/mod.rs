//! Privacy module for therapy-summary
//!
//! Pattern-based redaction of personal data before notes leave the process.

mod masker;

pub use masker::{
    mask_pii, MaskReport, PiiMasker, AADHAAR_PLACEHOLDER, EMAIL_PLACEHOLDER, PHONE_PLACEHOLDER,
};
