//! Deterministic job identity
//!
//! Ids are a 32-bit FNV-1a hash rendered as lowercase hex. This is not
//! collision-free: two postings sharing title, company, location and url
//! collapse into one, and unrelated postings may collide. Saved, rejected and
//! tracker state is keyed by these ids, so the function and its input layout
//! must not change.

const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Hash `s` over its UTF-16 code units (identical to per-byte for ASCII)
pub fn hash_identity(s: &str) -> String {
    let hash = s.encode_utf16().fold(FNV_OFFSET_BASIS, |h, unit| {
        (h ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    });
    format!("{:x}", hash)
}

/// Identity key of a posting from its core fields, each trimmed
pub fn job_identity(title: &str, company: &str, location: &str, url: &str) -> String {
    hash_identity(&format!(
        "{}|{}|{}|{}",
        title.trim(),
        company.trim(),
        location.trim(),
        url.trim()
    ))
}
