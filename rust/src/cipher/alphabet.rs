//! The fixed Russian alphabet and conversions between letters and residues.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Uppercase Russian alphabet in collation order, `Ё` included.
pub const ALPHABET: [char; 33] = [
    'А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ё', 'Ж', 'З', 'И', 'Й', 'К', 'Л', 'М', 'Н', 'О', 'П', 'Р', 'С',
    'Т', 'У', 'Ф', 'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ъ', 'Ы', 'Ь', 'Э', 'Ю', 'Я',
];

/// Modulus of the transform: one residue per letter.
pub const MODULUS: usize = ALPHABET.len();

static LETTER_INDEX: Lazy<HashMap<char, usize>> = Lazy::new(|| {
    ALPHABET
        .iter()
        .enumerate()
        .map(|(index, &letter)| (letter, index))
        .collect()
});

static LOWERCASE_FOLD: Lazy<HashMap<char, char>> = Lazy::new(|| {
    ALPHABET
        .iter()
        .flat_map(|&upper| upper.to_lowercase().map(move |lower| (lower, upper)))
        .collect()
});

/// Returns the residue of an uppercase alphabet letter.
pub fn index_of(letter: char) -> Option<usize> {
    LETTER_INDEX.get(&letter).copied()
}

/// Returns the letter for a residue, or `None` when it is out of range.
pub fn letter_at(index: usize) -> Option<char> {
    ALPHABET.get(index).copied()
}

/// Folds lowercase alphabet letters to uppercase. Every other code point is
/// left as it is, so positions in the result match positions in `text`.
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|letter| LOWERCASE_FOLD.get(&letter).copied().unwrap_or(letter))
        .collect()
}

/// Position and value of the first character that is not an alphabet letter.
pub(crate) fn first_foreign(text: &str) -> Option<(usize, char)> {
    text.chars()
        .enumerate()
        .find(|&(_, letter)| index_of(letter).is_none())
}

/// Maps validated text to residues.
pub(crate) fn to_indices(text: &str) -> Vec<usize> {
    let indices: Vec<usize> = text.chars().filter_map(index_of).collect();
    debug_assert_eq!(indices.len(), text.chars().count(), "text was not validated");
    indices
}

/// Maps residues in `[0, MODULUS)` back to letters.
pub(crate) fn to_text(indices: &[usize]) -> String {
    let text: String = indices.iter().filter_map(|&index| letter_at(index)).collect();
    debug_assert_eq!(text.chars().count(), indices.len(), "residue out of range");
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn alphabet_letters_are_distinct() {
        let unique: HashSet<char> = ALPHABET.iter().copied().collect();
        assert_eq!(unique.len(), MODULUS);
        assert_eq!(MODULUS, 33);
    }

    #[test]
    fn index_map_is_inverse_of_alphabet() {
        for (index, &letter) in ALPHABET.iter().enumerate() {
            assert_eq!(index_of(letter), Some(index));
            assert_eq!(letter_at(index), Some(letter));
        }
        assert_eq!(letter_at(MODULUS), None);
    }

    #[test]
    fn yo_sits_between_ye_and_zhe() {
        assert_eq!(index_of('Е'), Some(5));
        assert_eq!(index_of('Ё'), Some(6));
        assert_eq!(index_of('Ж'), Some(7));
        assert_eq!(index_of('Я'), Some(32));
    }

    #[test]
    fn rejects_lowercase_and_latin_lookups() {
        assert_eq!(index_of('а'), None);
        assert_eq!(index_of('A'), None);
        assert_eq!(index_of('1'), None);
    }

    #[test]
    fn normalizes_to_uppercase() {
        assert_eq!(normalize("привет, ёж"), "ПРИВЕТ, ЁЖ");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn folds_only_alphabet_letters() {
        assert_eq!(normalize("ßж"), "ßЖ");
        assert_eq!(normalize("key"), "key");
        // historic variant of в, uppercased by char::to_uppercase
        assert_eq!(normalize("\u{1c80}"), "\u{1c80}");
        assert_eq!(first_foreign(&normalize("\u{1c80}")), Some((0, '\u{1c80}')));
    }

    #[test]
    fn finds_first_foreign_character() {
        assert_eq!(first_foreign("АБВ"), None);
        assert_eq!(first_foreign("АБ В"), Some((2, ' ')));
        assert_eq!(first_foreign("ЁA"), Some((1, 'A')));
    }

    #[test]
    fn converts_between_text_and_indices() {
        let indices = to_indices("АЁЯ");
        assert_eq!(indices, vec![0, 6, 32]);
        assert_eq!(to_text(&indices), "АЁЯ");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "text was not validated")]
    fn unvalidated_text_fails_loudly() {
        to_indices("АQЯ");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "residue out of range")]
    fn out_of_range_residue_fails_loudly() {
        to_text(&[0, MODULUS]);
    }
}
