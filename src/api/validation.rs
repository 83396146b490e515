//! Validation rules for folder names supplied by clients.

use regex::Regex;

pub const MAX_FOLDER_NAME_LEN: usize = 100;

lazy_static::lazy_static! {
    // Rejects control and format characters outright.
    static ref FOLDER_NAME_RE: Regex = Regex::new(r"^[^\p{C}]{1,100}$").unwrap();
}

pub fn is_valid_folder_name(name: &str) -> bool {
    !name.trim().is_empty() && FOLDER_NAME_RE.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_names() {
        assert!(is_valid_folder_name("Books"));
        assert!(is_valid_folder_name("Summer 2026"));
        assert!(is_valid_folder_name("읽을 책"));
    }

    #[test]
    fn rejects_empty_and_blank_names() {
        assert!(!is_valid_folder_name(""));
        assert!(!is_valid_folder_name("   "));
    }

    #[test]
    fn rejects_control_characters() {
        assert!(!is_valid_folder_name("a\nb"));
        assert!(!is_valid_folder_name("tab\there"));
        assert!(!is_valid_folder_name("\u{0000}"));
    }

    #[test]
    fn rejects_overlong_names() {
        let name = "x".repeat(MAX_FOLDER_NAME_LEN + 1);
        assert!(!is_valid_folder_name(&name));
        assert!(is_valid_folder_name(&"x".repeat(MAX_FOLDER_NAME_LEN)));
    }
}
