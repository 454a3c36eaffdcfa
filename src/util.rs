// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! File name helpers used to derive item names.

/// Drops everything from the last `.` on, unless that dot starts the name.
pub fn trim_file_ext(name: &str) -> &str {
    match name.rfind('.') {
        Some(i) if i > 0 => &name[..i],
        _ => name,
    }
}

/// Replaces spaces, tabs and newlines with `_`.
pub fn replace_whitespace(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            ' ' | '\t' | '\n' => '_',
            c => c,
        })
        .collect()
}

/// Item name for a file: extension optionally trimmed, whitespace replaced.
pub fn item_name(file_name: &str, trim_ext: bool) -> String {
    let name = if trim_ext {
        trim_file_ext(file_name)
    } else {
        file_name
    };
    replace_whitespace(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_file_ext() {
        assert_eq!(trim_file_ext("hero.png"), "hero");
        assert_eq!(trim_file_ext("tiles.v2.png"), "tiles.v2");
        assert_eq!(trim_file_ext("README"), "README");
        assert_eq!(trim_file_ext(".hidden"), ".hidden");
        assert_eq!(trim_file_ext("trailing."), "trailing");
    }

    #[test]
    fn test_item_name() {
        assert_eq!(item_name("my hero\tsprite.png", true), "my_hero_sprite");
        assert_eq!(item_name("my hero.png", false), "my_hero.png");
    }
}
