//! Page region location and fallback-token extraction.
//!
//! Pure text scanning over raw HTML — there is no document object model. A
//! region is the full outer HTML of the *first* element with the requested
//! tag, closed at matching depth. The scan is case-insensitive and tolerates
//! attributes; it assumes attribute values carry no raw `>` and does not
//! special-case comments or scripts. An element that never closes (including
//! a self-closing form, which these tags cannot legally take) is treated as
//! absent.

use std::sync::LazyLock;

use regex::Regex;

use faro_common::{Region, RegionKind, StatusToken};

/// First `data-status` attribute in the document — the hosting page's
/// fallback status token.
static DATA_STATUS_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Safety: this is a compile-time constant pattern — cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r#"(?i)\bdata-status\s*=\s*"([^"]*)""#).expect("valid regex")
});

/// Opening or closing tag of the given kind. Group 1 is `/` for a closing
/// tag. The character after the tag name must end the name (`\s`, `/` or
/// `>`), so `<aside-widget>` is not an `<aside>`.
fn tag_re(kind: RegionKind) -> &'static Regex {
    static ASIDE_RE: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::expect_used)]
        Regex::new(r"(?i)<(/?)aside(?:[\s/][^>]*)?>").expect("valid regex")
    });
    static MAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::expect_used)]
        Regex::new(r"(?i)<(/?)main(?:[\s/][^>]*)?>").expect("valid regex")
    });
    match kind {
        RegionKind::Aside => &ASIDE_RE,
        RegionKind::Main => &MAIN_RE,
    }
}

// ── Region location ───────────────────────────────────────────────────────────

/// The two regions located in one document.
///
/// All-or-nothing by construction: callers that need both regions go through
/// [`locate_regions`], which yields `None` when either is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRegions {
    /// The secondary region (`<aside>`).
    pub aside: Region,
    /// The primary region (`<main>`).
    pub main: Region,
}

/// Locate the first element of `kind` and return its full outer HTML.
///
/// Returns `None` when no opening tag exists, or when the first opening tag
/// is never closed at matching depth.
#[must_use]
pub fn locate_region(html: &str, kind: RegionKind) -> Option<Region> {
    let mut depth = 0usize;
    let mut opened_at = None;

    for tag in tag_re(kind).find_iter(html) {
        if tag.as_str().starts_with("</") {
            // A closing tag before the first opening tag is ignored.
            let Some(start) = opened_at else { continue };
            depth -= 1;
            if depth == 0 {
                return Some(Region {
                    kind,
                    html: html[start..tag.end()].to_string(),
                });
            }
        } else {
            if opened_at.is_none() {
                opened_at = Some(tag.start());
            }
            depth += 1;
        }
    }

    None
}

/// Locate both regions, or nothing.
#[must_use]
pub fn locate_regions(html: &str) -> Option<PageRegions> {
    let aside = locate_region(html, RegionKind::Aside)?;
    let main = locate_region(html, RegionKind::Main)?;
    Some(PageRegions { aside, main })
}

// ── Fallback token ────────────────────────────────────────────────────────────

/// Extract the page-supplied fallback status token (first `data-status`
/// attribute), if the page carries one.
#[must_use]
pub fn fallback_status(html: &str) -> Option<StatusToken> {
    DATA_STATUS_RE
        .captures(html)
        .map(|caps| StatusToken::new(&caps[1]))
}

// ── Unit tests ────────────────────────────────────────────────────────────────
