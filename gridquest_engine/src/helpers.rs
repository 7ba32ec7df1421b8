//! Helpers Module
//!
//! Small text utilities that don't clearly belong in another module.

/// Capitalize the first letter of every word and lowercase the rest.
/// A "word" starts at any letter that follows a non-letter, so
/// `"o'neil"` becomes `"O'Neil"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut after_letter = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if after_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            after_letter = true;
        } else {
            out.push(ch);
            after_letter = false;
        }
    }
    out
}

/// Join displayable names with `", "`.
pub fn join_names<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    names.into_iter().collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("hydra"), "Hydra");
        assert_eq!(title_case("giant RAT"), "Giant Rat");
        assert_eq!(title_case("o'neil"), "O'Neil");
        assert_eq!(title_case("orc2b"), "Orc2B");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn join_names_with_commas() {
        assert_eq!(join_names(["Hydra", "Orc"]), "Hydra, Orc");
        assert_eq!(join_names(["Hydra"]), "Hydra");
        assert_eq!(join_names(Vec::<&str>::new()), "");
    }
}
