//! Route pattern module
//!
//! Parses path templates like `/snippet/view/{id}` and matches request
//! paths against them, extracting named wildcard segments.

use thiserror::Error;

/// Errors from parsing a path template.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("route pattern must start with '/': '{0}'")]
    MissingLeadingSlash(String),
    #[error("invalid segment '{segment}' in pattern '{pattern}'")]
    InvalidSegment { pattern: String, segment: String },
    #[error("duplicate parameter '{name}' in pattern '{pattern}'")]
    DuplicateParam { pattern: String, name: String },
    #[error("prefix pattern must end with '/': '{0}'")]
    MissingTrailingSlash(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchKind {
    /// Match the whole path, segment by segment
    Exact,
    /// Match any path starting with the template; the rest becomes the suffix
    Prefix,
}

/// A parsed path template.
///
/// An exact pattern matches segment by segment; `{name}` segments match any
/// single segment and capture it. `/` matches the bare root only. A prefix
/// pattern matches every path under it and yields the stripped suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
    kind: MatchKind,
}

/// Named captures extracted from a matched path.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PathParams {
    params: Vec<(String, String)>,
    suffix: Option<String>,
}

impl PathParams {
    /// Look up a named wildcard capture.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The path remainder of a prefix match, with the prefix stripped.
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }
}

impl RoutePattern {
    /// Parse an exact-match template. `/` matches the root path only.
    pub fn parse(template: &str) -> Result<Self, PatternError> {
        let rest = template
            .strip_prefix('/')
            .ok_or_else(|| PatternError::MissingLeadingSlash(template.to_string()))?;

        let mut segments = Vec::new();
        if !rest.is_empty() {
            for part in rest.split('/') {
                segments.push(parse_segment(template, part)?);
            }
        }

        // Wildcard names must be unique so captures are unambiguous
        for (i, segment) in segments.iter().enumerate() {
            if let Segment::Param(name) = segment {
                let repeated = segments[..i]
                    .iter()
                    .any(|other| matches!(other, Segment::Param(n) if n == name));
                if repeated {
                    return Err(PatternError::DuplicateParam {
                        pattern: template.to_string(),
                        name: name.clone(),
                    });
                }
            }
        }

        Ok(Self {
            raw: template.to_string(),
            segments,
            kind: MatchKind::Exact,
        })
    }

    /// Parse a prefix template such as `/static/`. Wildcards are not
    /// supported here; the suffix after the prefix is captured instead.
    pub fn prefix(template: &str) -> Result<Self, PatternError> {
        if !template.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash(template.to_string()));
        }
        if !template.ends_with('/') {
            return Err(PatternError::MissingTrailingSlash(template.to_string()));
        }
        if template.contains(['{', '}']) {
            return Err(PatternError::InvalidSegment {
                pattern: template.to_string(),
                segment: template.to_string(),
            });
        }

        Ok(Self {
            raw: template.to_string(),
            segments: Vec::new(),
            kind: MatchKind::Prefix,
        })
    }

    /// Match a request path, extracting captures on success.
    pub fn matches(&self, path: &str) -> Option<PathParams> {
        match self.kind {
            MatchKind::Exact => self.match_exact(path),
            MatchKind::Prefix => path.strip_prefix(self.raw.as_str()).map(|suffix| PathParams {
                params: Vec::new(),
                suffix: Some(suffix.to_string()),
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    fn match_exact(&self, path: &str) -> Option<PathParams> {
        let rest = path.strip_prefix('/')?;
        let parts: Vec<&str> = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split('/').collect()
        };

        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = Vec::new();
        for (segment, part) in self.segments.iter().zip(&parts) {
            match segment {
                Segment::Literal(literal) => {
                    if literal != part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.push((name.clone(), (*part).to_string()));
                }
            }
        }

        Some(PathParams {
            params,
            suffix: None,
        })
    }
}

fn parse_segment(template: &str, part: &str) -> Result<Segment, PatternError> {
    if let Some(name) = part.strip_prefix('{').and_then(|p| p.strip_suffix('}')) {
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid {
            return Err(PatternError::InvalidSegment {
                pattern: template.to_string(),
                segment: part.to_string(),
            });
        }
        return Ok(Segment::Param(name.to_string()));
    }

    if part.contains(['{', '}']) {
        return Err(PatternError::InvalidSegment {
            pattern: template.to_string(),
            segment: part.to_string(),
        });
    }

    Ok(Segment::Literal(part.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_exact_end() {
        let pattern = RoutePattern::parse("/").unwrap();
        assert!(pattern.matches("/").is_some());
        assert!(pattern.matches("/anything").is_none());
        assert!(pattern.matches("/snippet/view/1").is_none());
    }

    #[test]
    fn test_literal_segments() {
        let pattern = RoutePattern::parse("/snippet/create").unwrap();
        assert!(pattern.matches("/snippet/create").is_some());
        assert!(pattern.matches("/snippet/create/").is_none());
        assert!(pattern.matches("/snippet").is_none());
        assert!(pattern.matches("/snippet/create/extra").is_none());
    }

    #[test]
    fn test_wildcard_captures_by_name() {
        let pattern = RoutePattern::parse("/snippet/view/{id}").unwrap();
        let params = pattern.matches("/snippet/view/42").unwrap();
        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(params.get("other"), None);
        assert!(params.suffix().is_none());
    }

    #[test]
    fn test_wildcard_requires_segment_shape() {
        let pattern = RoutePattern::parse("/snippet/view/{id}").unwrap();
        assert!(pattern.matches("/snippet/view").is_none());
        assert!(pattern.matches("/snippet/view/1/2").is_none());
        assert!(pattern.matches("/snippet/edit/1").is_none());
    }

    #[test]
    fn test_prefix_strips_and_captures_suffix() {
        let pattern = RoutePattern::prefix("/static/").unwrap();
        let params = pattern.matches("/static/css/main.css").unwrap();
        assert_eq!(params.suffix(), Some("css/main.css"));
        assert!(pattern.matches("/statics/x").is_none());
        assert!(pattern.matches("/static").is_none());
    }

    #[test]
    fn test_parse_rejects_bad_templates() {
        assert!(matches!(
            RoutePattern::parse("snippet/view"),
            Err(PatternError::MissingLeadingSlash(_))
        ));
        assert!(matches!(
            RoutePattern::parse("/snippet/{id"),
            Err(PatternError::InvalidSegment { .. })
        ));
        assert!(matches!(
            RoutePattern::parse("/{}"),
            Err(PatternError::InvalidSegment { .. })
        ));
        assert!(matches!(
            RoutePattern::parse("/a/{id}/b/{id}"),
            Err(PatternError::DuplicateParam { .. })
        ));
        assert!(matches!(
            RoutePattern::prefix("/static"),
            Err(PatternError::MissingTrailingSlash(_))
        ));
    }
}
