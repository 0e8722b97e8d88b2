//! URL helpers.
//!
//! [`join_url_path`] grafts the path of one URL (or a bare path) onto an
//! origin, so that links stored against one host can be re-served from
//! another.

use std::borrow::Cow;

use url::{Position, Url};

use crate::error::{Result, UtilkitError};

/// Returns `true` if `s` is an absolute URL with a non-empty host
/// (e.g. `http://example.com`). `mailto:` style URLs and bare paths are
/// rejected.
pub fn is_valid_url(s: &str) -> bool {
    parse_origin(s).is_some()
}

/// Join `path` onto `origin` with exactly one `/` between them.
///
/// `path` may be a bare path (`foo`, `/foo/bar?x=1`) or a full URL, in which
/// case its scheme, credentials, host and port are dropped and only the part
/// after the authority is kept:
///
/// ```
/// use utilkit::util::join_url_path;
///
/// let url = join_url_path("http://example.com", "https://other.com/bar?x=1").unwrap();
/// assert_eq!(url, "http://example.com/bar?x=1");
/// ```
///
/// The origin is used verbatim apart from its trailing slashes, so a path
/// prefix on the origin (`http://host/api/`) survives the join.
///
/// # Errors
/// [`UtilkitError::InvalidOrigin`] if `origin` is not an absolute URL with a
/// host.
pub fn join_url_path(origin: &str, path: &str) -> Result<String> {
    let origin_url =
        parse_origin(origin).ok_or_else(|| UtilkitError::InvalidOrigin(origin.to_string()))?;

    let tail = path_component(&origin_url, path);
    let base = origin.trim_end_matches('/');
    let tail = tail.trim_start_matches('/');

    let mut joined = String::with_capacity(base.len() + tail.len() + 1);
    joined.push_str(base);
    joined.push('/');
    joined.push_str(tail);
    Ok(joined)
}

/// Sentinel flavour of [`join_url_path`]: an invalid origin yields `""`.
///
/// Callers cannot tell "invalid origin" apart from an empty result here;
/// prefer [`join_url_path`] in new code.
pub fn to_url_string(origin: &str, path: &str) -> String {
    join_url_path(origin, path).unwrap_or_default()
}

fn has_host(url: &Url) -> bool {
    url.host_str().is_some_and(|h| !h.is_empty())
}

/// The origin text is copied into the output, so it has to be exactly what
/// the parser saw: the parser silently drops surrounding spaces and controls
/// as well as embedded tabs and newlines.
fn parse_origin(origin: &str) -> Option<Url> {
    let padded = origin.starts_with(|c: char| c <= ' ') || origin.ends_with(|c: char| c <= ' ');
    if padded || origin.contains(is_stripped_by_parser) {
        return None;
    }
    Url::parse(origin).ok().filter(has_host)
}

fn is_stripped_by_parser(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
}

/// The part of `input` that should be appended to the origin. Anything that
/// doesn't parse as a URL with a host is a bare path and is returned whole.
fn path_component<'a>(origin: &Url, input: &'a str) -> Cow<'a, str> {
    // `//host/path` is scheme-relative and carries a host of its own.
    let parsed = if input.starts_with("//") {
        origin.join(input).ok()
    } else {
        Url::parse(input).ok()
    };

    match parsed.filter(has_host) {
        Some(url) => after_authority(input, &url),
        None => Cow::Borrowed(input),
    }
}

/// Keep the path, query and fragment exactly as the caller wrote them when
/// the raw text lines up with what the parser saw; otherwise use the parsed
/// (normalized) form, e.g. for `http:host/p` or `http://host\\p`.
fn after_authority<'a>(raw: &'a str, parsed: &Url) -> Cow<'a, str> {
    let normalized = &parsed[Position::BeforePath..];
    match raw_tail(raw, parsed) {
        Some(tail) if same_target(parsed, tail, normalized) => Cow::Borrowed(tail),
        _ => Cow::Owned(normalized.to_string()),
    }
}

/// Raw text after the authority, provided the input starts with
/// `scheme://` or `//`.
fn raw_tail<'a>(raw: &'a str, parsed: &Url) -> Option<&'a str> {
    let start = if raw.starts_with("//") {
        2
    } else {
        let scheme_end = parsed.scheme().len();
        let scheme = raw.get(..scheme_end)?;
        if !scheme.eq_ignore_ascii_case(parsed.scheme()) || !raw[scheme_end..].starts_with("://") {
            return None;
        }
        scheme_end + 3
    };

    let rest = &raw[start..];
    let end = rest
        .find(|c: char| matches!(c, '/' | '?' | '#'))
        .unwrap_or(rest.len());
    Some(&rest[end..])
}

/// `tail` resolves to the same path, query and fragment as the parsed URL.
/// Resolution starts from the bare authority so an empty tail can't inherit
/// the parsed path.
fn same_target(parsed: &Url, tail: &str, normalized: &str) -> bool {
    if tail.contains(is_stripped_by_parser) {
        return false;
    }

    let mut root = parsed.clone();
    root.set_path("/");
    root.set_query(None);
    root.set_fragment(None);

    root.join(tail)
        .is_ok_and(|resolved| &resolved[Position::BeforePath..] == normalized)
}
