//! Console output of the headless commands and the reload watcher.
//!
//! Every line starts with a colored `[TAG]`; details follow the title after a tab.

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tag {
    Info,
    Error,
    Success,
}

impl Tag {
    fn label(self) -> &'static str {
        match self {
            Tag::Info => "INFO",
            Tag::Error => "ERROR",
            Tag::Success => "SUCCESS",
        }
    }

    /// ANSI SGR code of the tag.
    fn color(self) -> &'static str {
        match self {
            Tag::Info => "1;33",
            Tag::Error => "1;31",
            Tag::Success => "1;32",
        }
    }
}

/// Renders the message lines for `tag`.
///
/// Errors print their details on a second `Details:` line so the title stays
/// greppable; other tags keep everything on one line.
pub fn render(tag: Tag, title: &str, details: Option<&str>) -> Vec<String> {
    let prefix = format!("\x1b[{}m[{}]\x1b[0m", tag.color(), tag.label());
    let details = details.filter(|d| !d.is_empty());
    match (tag, details) {
        (_, None) => vec![format!("{} {}", prefix, title)],
        (Tag::Error, Some(d)) => vec![
            format!("{} {}", prefix, title),
            format!("{} Details: {}", prefix, d),
        ],
        (_, Some(d)) => vec![format!("{} {}\t {}", prefix, title, d)],
    }
}

pub fn print(tag: Tag, title: &str, details: Option<&str>) {
    for line in render(tag, title, details) {
        println!("{}", line);
    }
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print(
            $crate::cli_messages::Tag::Info,
            $title,
            Some(&format!($($details)*)),
        )
    };
}

#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print($crate::cli_messages::Tag::Error, $title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print($crate::cli_messages::Tag::Error, $title, Some($details))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print(
            $crate::cli_messages::Tag::Success,
            $title,
            Some(&format!($($details)*)),
        )
    };
}
