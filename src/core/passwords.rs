use crate::domain::model::CandidateSet;

/// Each substitution is applied on its own to the untouched keyword.
const LEET_SUBSTITUTIONS: [(char, char); 5] =
    [('a', '@'), ('o', '0'), ('e', '3'), ('s', '$'), ('i', '1')];

const SUFFIXES: [char; 8] = ['!', '^', '?', '&', '*', '#', '%', '@'];

/// Uppercases the first character and leaves the rest as given,
/// so `McAfee` stays `McAfee` and `spring` becomes `Spring`.
pub fn capitalize_first(keyword: &str) -> String {
    let mut chars = keyword.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Password guesses built from seed keywords by case changes, single
/// leetspeak substitutions and one trailing symbol.
pub fn generate_passwords<S: AsRef<str>>(keywords: &[S]) -> CandidateSet {
    let mut passwords = CandidateSet::new();

    for raw in keywords {
        let keyword = raw.as_ref().trim();
        if keyword.is_empty() {
            continue;
        }
        let capitalized = capitalize_first(keyword);

        passwords.insert(keyword.to_string());
        passwords.insert(keyword.to_lowercase());
        passwords.insert(keyword.to_uppercase());
        passwords.insert(capitalized.clone());

        for (from, to) in LEET_SUBSTITUTIONS {
            passwords.insert(keyword.replace(from, &to.to_string()));
        }

        for suffix in SUFFIXES {
            passwords.insert(format!("{}{}", keyword, suffix));
            passwords.insert(format!("{}{}", capitalized, suffix));
        }
    }

    tracing::debug!(
        "Generated {} passwords from {} keywords",
        passwords.len(),
        keywords.len()
    );
    passwords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first_keeps_rest() {
        assert_eq!(capitalize_first("spring2025"), "Spring2025");
        assert_eq!(capitalize_first("McAfee"), "McAfee");
        assert_eq!(capitalize_first("mcAFEE"), "McAFEE");
        assert_eq!(capitalize_first("2025spring"), "2025spring");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_spring_keyword_variants() {
        let passwords = generate_passwords(&["spring2025"]);
        for expected in [
            "spring2025",
            "SPRING2025",
            "Spring2025",
            "spr1ng2025",
            "$pring2025",
            "spring2025!",
            "Spring2025#",
            "spring2025@",
        ] {
            assert!(passwords.contains(expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_substitutions_are_not_chained() {
        let passwords = generate_passwords(&["password"]);
        assert!(passwords.contains("p@ssword"));
        assert!(passwords.contains("passw0rd"));
        assert!(passwords.contains("pa$$word"));
        assert!(!passwords.contains("p@$$w0rd"));
    }

    #[test]
    fn test_substitutions_are_case_sensitive() {
        let passwords = generate_passwords(&["ADMIN"]);
        assert!(!passwords.iter().any(|p| p.contains('@') && !p.ends_with('@')));
    }

    #[test]
    fn test_exact_size_for_plain_keyword() {
        // keyword, upper, capitalized, "w1nter", "wint3r", 16 suffixed
        let passwords = generate_passwords(&["winter"]);
        assert_eq!(passwords.len(), 21);
    }

    #[test]
    fn test_keywords_are_trimmed_and_blank_ones_skipped() {
        let passwords = generate_passwords(&["  summer ", "   "]);
        assert!(passwords.contains("summer"));
        assert!(passwords.contains("Summer!"));
        assert!(!passwords.iter().any(|p| p.starts_with(' ') || p.is_empty()));
        assert!(!passwords.contains("!"));
    }

    #[test]
    fn test_cross_keyword_collisions_collapse() {
        let one = generate_passwords(&["winter"]);
        let twice = generate_passwords(&["winter", "winter"]);
        assert_eq!(one, twice);
    }
}
