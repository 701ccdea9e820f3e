//! Text → hashtag transformation.

/// Options that shape the transformation, borrowed from the engine settings.
#[derive(Debug, Clone, Copy)]
pub struct TransformOptions {
    pub remove_special_chars: bool,
    pub capitalize_first_letter: bool,
}

/// Turn `text` into a hashtag. Blank input yields an empty string.
pub fn to_hashtag(text: &str, options: TransformOptions) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let filtered;
    let mut text = text;
    if options.remove_special_chars {
        filtered = strip_special_chars(text);
        text = &filtered;
    }

    let mut hashtag = String::with_capacity(text.len() + 1);
    hashtag.push('#');
    for word in text.split_whitespace() {
        if options.capitalize_first_letter {
            push_title_case(&mut hashtag, word);
        } else {
            hashtag.push_str(word);
        }
    }
    hashtag
}

/// Keep letters, digits and whitespace only.
pub fn strip_special_chars(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect()
}

/// Title-case a single word: its first alphabetic character goes upper case,
/// every later letter lower case. Non-letters pass through.
fn push_title_case(out: &mut String, word: &str) {
    let mut seen_letter = false;
    for c in word.chars() {
        if !c.is_alphabetic() {
            out.push(c);
        } else if seen_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
            seen_letter = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAPITALIZE: TransformOptions = TransformOptions {
        remove_special_chars: false,
        capitalize_first_letter: true,
    };

    #[test]
    fn test_title_case_concatenation() {
        assert_eq!(to_hashtag("hello world", CAPITALIZE), "#HelloWorld");
        assert_eq!(to_hashtag("hELLO   wORLD", CAPITALIZE), "#HelloWorld");
    }

    #[test]
    fn test_blank_input_is_empty() {
        assert_eq!(to_hashtag("", CAPITALIZE), "");
        assert_eq!(to_hashtag(" \t\n ", CAPITALIZE), "");
    }

    #[test]
    fn test_strip_special_chars() {
        let options = TransformOptions {
            remove_special_chars: true,
            capitalize_first_letter: true,
        };
        assert_eq!(strip_special_chars("c++ is great!"), "c is great");
        assert_eq!(to_hashtag("c++ is great!", options), "#CIsGreat");
    }

    #[test]
    fn test_symbols_kept_without_stripping() {
        assert_eq!(to_hashtag("c++ is great!", CAPITALIZE), "#C++IsGreat!");
    }

    #[test]
    fn test_first_alphabetic_char_is_uppercased() {
        assert_eq!(to_hashtag("3rd place", CAPITALIZE), "#3RdPlace");
        assert_eq!(to_hashtag("don't stop", CAPITALIZE), "#Don'tStop");
        assert_eq!(to_hashtag("2024 42", CAPITALIZE), "#202442");
    }

    #[test]
    fn test_no_capitalize_keeps_case() {
        let options = TransformOptions {
            remove_special_chars: false,
            capitalize_first_letter: false,
        };
        assert_eq!(to_hashtag("hello World", options), "#helloWorld");
    }

    #[test]
    fn test_all_whitespace_is_removed() {
        assert_eq!(to_hashtag("one\ttwo\nthree", CAPITALIZE), "#OneTwoThree");
    }

    #[test]
    fn test_only_symbols_stripped_leaves_bare_hash() {
        let options = TransformOptions {
            remove_special_chars: true,
            capitalize_first_letter: true,
        };
        assert_eq!(to_hashtag("!!! ???", options), "#");
    }

    #[test]
    fn test_unicode_letters() {
        assert_eq!(to_hashtag("élan vital", CAPITALIZE), "#ÉlanVital");
    }
}
