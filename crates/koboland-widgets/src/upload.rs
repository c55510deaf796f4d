//! Upload Selection
//!
//! Decides which picked files join a submission: bounded by the configured
//! file count and filtered by the file input's `accept` MIME list.

pub const EMPTY_SELECTION: &str = "No files currently selected for upload";

/// What the browser tells us about a picked file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

/// MIME allow-list from an `accept` attribute
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcceptList {
    types: Vec<String>,
}

impl AcceptList {
    /// Parse `image/png, image/jpeg`. An empty list accepts everything.
    pub fn parse(accept: &str) -> Self {
        let types = accept
            .split(',')
            .map(|t| t.trim().to_ascii_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { types }
    }

    pub fn allows(&self, mime: &str) -> bool {
        if self.types.is_empty() {
            return true;
        }
        let mime = mime.trim().to_ascii_lowercase();
        self.types.iter().any(|allowed| match allowed.strip_suffix("/*") {
            Some(family) => mime
                .split_once('/')
                .map(|(f, _)| f == family)
                .unwrap_or(false),
            None => *allowed == mime,
        })
    }
}

/// Indices into the newly picked files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub accepted: Vec<usize>,
    pub rejected: Vec<usize>,
}

/// Split newly picked files into accepted and rejected.
///
/// Only the first `max - already_accepted` picks are considered; a rejected
/// pick still uses up one of those slots.
pub fn select_files(
    already_accepted: usize,
    picked: &[FileMeta],
    accept: &AcceptList,
    max: usize,
) -> Selection {
    let remaining = max.saturating_sub(already_accepted);
    let mut selection = Selection::default();
    for (index, file) in picked.iter().enumerate().take(remaining) {
        if accept.allows(&file.mime) {
            selection.accepted.push(index);
        } else {
            selection.rejected.push(index);
        }
    }
    selection
}

/// Human-readable size: `512bytes`, `1.5KB`, `2.0MB`
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1_048_576;
    if bytes < KB {
        format!("{}bytes", bytes)
    } else if bytes < MB {
        format!("{:.1}KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1}MB", bytes as f64 / MB as f64)
    }
}

pub fn accepted_caption(file: &FileMeta) -> String {
    format!("File name {}, file size  {}.", file.name, format_file_size(file.size))
}

pub fn rejected_caption(file: &FileMeta) -> String {
    format!("File name {}: Not a valid file type. Update your selection.", file.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, mime: &str) -> FileMeta {
        FileMeta {
            name: name.to_string(),
            mime: mime.to_string(),
            size: 2048,
        }
    }

    #[test]
    fn test_accept_list() {
        let accept = AcceptList::parse(" image/png ,image/JPEG,, video/*");
        assert!(accept.allows("image/png"));
        assert!(accept.allows("image/jpeg"));
        assert!(accept.allows("video/mp4"));
        assert!(!accept.allows("image/gif"));
        assert!(!accept.allows("application/pdf"));
        assert!(AcceptList::parse("").allows("anything/at-all"));
    }

    #[test]
    fn test_select_respects_capacity() {
        let accept = AcceptList::parse("image/png");
        let picked = vec![
            file("a.png", "image/png"),
            file("b.txt", "text/plain"),
            file("c.png", "image/png"),
            file("d.png", "image/png"),
        ];
        let selection = select_files(1, &picked, &accept, 4);
        assert_eq!(selection.accepted, vec![0, 2]);
        assert_eq!(selection.rejected, vec![1]);

        let full = select_files(4, &picked, &accept, 4);
        assert_eq!(full, Selection::default());
    }

    #[test]
    fn test_select_fewer_than_capacity() {
        let accept = AcceptList::parse("image/png");
        let picked = vec![file("a.png", "image/png")];
        let selection = select_files(0, &picked, &accept, 4);
        assert_eq!(selection.accepted, vec![0]);
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0bytes");
        assert_eq!(format_file_size(1023), "1023bytes");
        assert_eq!(format_file_size(1024), "1.0KB");
        assert_eq!(format_file_size(1536), "1.5KB");
        assert_eq!(format_file_size(1_048_576), "1.0MB");
        assert_eq!(format_file_size(5 * 1_048_576 / 2), "2.5MB");
    }

    #[test]
    fn test_captions() {
        let f = file("cat.png", "image/png");
        assert_eq!(accepted_caption(&f), "File name cat.png, file size  2.0KB.");
        assert_eq!(
            rejected_caption(&f),
            "File name cat.png: Not a valid file type. Update your selection."
        );
    }
}
