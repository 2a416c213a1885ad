use unicode_normalization::UnicodeNormalization;

/// Points awarded for the first correct guess of a word.
pub const GUESS_AWARD: u32 = 10;

/// Title listed for games that never had one set.
pub const UNTITLED_GAME: &str = "Untitled Game";

/// Canonical form used for every word comparison: trimmed, NFC, lowercase.
pub fn normalize_word(raw: &str) -> String {
    raw.trim().nfc().collect::<String>().to_lowercase()
}
