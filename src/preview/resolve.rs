use url::Url;

/// Resolves a possibly-relative reference pulled from markup against the
/// authority of `base`.
///
/// This is a deliberate heuristic, not RFC 3986 resolution:
/// absolute `http` references parse as-is, `/`-rooted references concatenate
/// onto the base authority, and `../`-prefixed references attach to the
/// parent-directory string of the authority with the climb segments
/// stripped. The parent string of a `scheme://host` authority collapses to
/// `scheme:` and no longer contains `://`, so in practice the `../` branch
/// returns `None`; callers treat that as an absent reference.
pub fn resolve_reference(base: &Url, raw: &str) -> Option<Url> {
    let trimmed = raw.trim();

    if raw.starts_with("http") {
        return Url::parse(trimmed).ok();
    }

    let authority = authority_of(base)?;

    if raw.starts_with('/') {
        return Url::parse(&format!("{authority}{trimmed}")).ok();
    }

    if raw.starts_with("../") {
        let parent = parent_dir(&authority);
        if parent.contains("://") {
            let climbed = trimmed.replace("..", "");
            return Url::parse(&format!("{parent}{climbed}")).ok();
        }
    }

    None
}

/// `scheme://host[:port]` of the base, without path or query.
fn authority_of(base: &Url) -> Option<String> {
    let host = base.host_str()?;
    Some(match base.port() {
        Some(port) => format!("{}://{}:{}", base.scheme(), host, port),
        None => format!("{}://{}", base.scheme(), host),
    })
}

/// Splits on `/` discarding empty segments, drops the last segment and
/// rejoins. Collapses the `//` of the scheme separator.
fn parent_dir(authority: &str) -> String {
    let segments: Vec<&str> = authority.split('/').filter(|s| !s.is_empty()).collect();
    match segments.split_last() {
        Some((_, parents)) => parents.join("/"),
        None => String::new(),
    }
}
