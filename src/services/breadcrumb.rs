//! Breadcrumb trail derivation from a slash-delimited relative path

/// Label of the recordings root.
pub const ROOT_LABEL: &str = "Recordings";

/// One step of the trail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    /// Partial path that navigates to this ancestor.
    pub path: String,
    pub clickable: bool,
}

/// Iterate the non-empty segments of `path`.
///
/// Leading, trailing and doubled slashes are tolerated.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Whether `path` denotes the recordings root.
#[must_use]
pub fn is_root(path: &str) -> bool {
    segments(path).next().is_none()
}

/// Build the breadcrumb trail for `path`.
///
/// The root yields a single non-clickable [`ROOT_LABEL`] crumb. Any other path
/// yields one crumb per segment: each carries the `/`-join of the segments up
/// to and including its own, and every crumb but the last is clickable.
#[must_use]
pub fn breadcrumb(path: &str) -> Vec<Crumb> {
    if is_root(path) {
        return vec![Crumb {
            label: ROOT_LABEL.to_string(),
            path: String::new(),
            clickable: false,
        }];
    }

    let mut partial = String::new();
    let mut crumbs: Vec<Crumb> = segments(path)
        .map(|segment| {
            if !partial.is_empty() {
                partial.push('/');
            }
            partial.push_str(segment);
            Crumb {
                label: segment.to_string(),
                path: partial.clone(),
                clickable: true,
            }
        })
        .collect();

    if let Some(last) = crumbs.last_mut() {
        last.clickable = false;
    }
    crumbs
}
