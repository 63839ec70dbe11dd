//! Keyword sets and substring matching helpers
//!
//! Every check in this crate is plain substring matching over lowercased
//! text. There is no stemming and no negation handling: "shall not
//! indemnify" still contains "indemnify".

/// Termination keyword (paired with [`WITHOUT_NOTICE_KEYWORDS`])
pub const TERMINATION_KEYWORDS: &[&str] = &["terminate"];

pub const WITHOUT_NOTICE_KEYWORDS: &[&str] = &["without notice"];

pub const INDEMNITY_KEYWORDS: &[&str] = &["indemnify", "indemnity"];

pub const AUTO_RENEWAL_KEYWORDS: &[&str] = &["auto-renew", "automatically renew"];

pub const EMPLOYMENT_KEYWORDS: &[&str] = &["employment", "employee"];

pub const VENDOR_KEYWORDS: &[&str] = &["vendor", "supplier"];

pub const LEASE_KEYWORDS: &[&str] = &["lease", "rent"];

pub const SERVICE_KEYWORDS: &[&str] = &["service", "scope of work"];

pub const PARTNERSHIP_KEYWORDS: &[&str] = &["partnership"];

/// True if `text` contains any keyword of `group`
pub fn contains_any(text: &str, group: &[&str]) -> bool {
    group.iter().any(|keyword| text.contains(keyword))
}

/// True if every group has at least one keyword present in `text`
pub fn contains_each_group(text: &str, groups: &[&[&str]]) -> bool {
    groups.iter().all(|group| contains_any(text, group))
}
