//! UPN candidate generation from parsed name components.
//!
//! Each naming convention is a separate function returning bare local-parts.
//! [`generate_upns`] unions them and appends the domain.

use crate::domain::model::{CandidateSet, NameComponents};

/// Joins used between two name fragments; the empty join is plain concatenation.
const SEPARATORS: [&str; 4] = ["", ".", "_", "-"];

const NUMBERED_SUFFIXES: [&str; 5] = ["01", "02", "03", "2024", "2025"];

fn initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

/// `left<sep>right` and `right<sep>left` for every separator.
fn joined_both_ways(left: &str, right: &str, out: &mut CandidateSet) {
    for sep in SEPARATORS {
        out.insert(format!("{}{}{}", left, sep, right));
        out.insert(format!("{}{}{}", right, sep, left));
    }
}

pub fn singles(names: &[&str]) -> CandidateSet {
    names.iter().map(|name| name.to_string()).collect()
}

pub fn pairs(names: &[&str]) -> CandidateSet {
    let mut out = CandidateSet::new();
    for (i, first) in names.iter().enumerate() {
        for second in &names[i + 1..] {
            joined_both_ways(first, second, &mut out);
        }
    }
    out
}

/// Triples keep the order in which the names appear; they are never permuted.
pub fn triples(names: &[&str]) -> CandidateSet {
    let mut out = CandidateSet::new();
    for i in 0..names.len() {
        for j in i + 1..names.len() {
            for k in j + 1..names.len() {
                let (a, b, c) = (names[i], names[j], names[k]);
                for sep in SEPARATORS {
                    out.insert(format!("{}{}{}{}{}", a, sep, b, sep, c));
                }
                out.insert(format!("{}.{}{}", a, b, c));
                out.insert(format!("{}{}.{}", a, b, c));
            }
        }
    }
    out
}

pub fn initial_with_name(names: &[&str]) -> CandidateSet {
    let mut out = CandidateSet::new();
    for (i, name) in names.iter().enumerate() {
        let init = initial(name);
        for (j, other) in names.iter().enumerate() {
            if i != j {
                joined_both_ways(&init, other, &mut out);
            }
        }
    }
    out
}

/// Initials of every other name glued to one full name, e.g. `jmsmith`.
///
/// "Other" is decided by value: a name repeated in the input never
/// contributes its own initial to itself.
pub fn combined_initials(names: &[&str]) -> CandidateSet {
    let mut out = CandidateSet::new();
    if names.len() < 2 {
        return out;
    }

    for main in names {
        let initials: String = names
            .iter()
            .filter(|other| *other != main)
            .map(|other| initial(other))
            .collect();
        if !initials.is_empty() {
            joined_both_ways(&initials, main, &mut out);
        }
    }
    out
}

pub fn all_initials(names: &[&str]) -> CandidateSet {
    let mut out = CandidateSet::new();
    if names.len() < 2 {
        return out;
    }

    let initials: String = names.iter().map(|name| initial(name)).collect();
    if initials.chars().count() >= 2 {
        out.insert(initials);
    }
    out
}

/// The four organisation-style bases with digits and year suffixes.
/// Without a last name every base collapses to the first name.
pub fn numbered(components: &NameComponents) -> CandidateSet {
    let first = components.first.as_str();
    let bases = if components.has_last() {
        let last = components.last.as_str();
        vec![
            format!("{}{}", first, last),
            format!("{}.{}", first, last),
            format!("{}{}", initial(first), last),
            format!("{}{}", first, initial(last)),
        ]
    } else {
        vec![first.to_string(); 4]
    };

    let mut out = CandidateSet::new();
    for base in bases.iter().filter(|base| !base.is_empty()) {
        for num in 1..=9 {
            out.insert(format!("{}{}", base, num));
        }
        for suffix in NUMBERED_SUFFIXES {
            out.insert(format!("{}{}", base, suffix));
        }
    }
    out
}

/// Every UPN candidate for the given name, sorted, each ending in `@domain`.
pub fn generate_upns(components: &NameComponents, domain: &str) -> CandidateSet {
    let names = components.names();

    let rule_sets = [
        singles(&names),
        pairs(&names),
        triples(&names),
        initial_with_name(&names),
        combined_initials(&names),
        all_initials(&names),
        numbered(components),
    ];

    let upns: CandidateSet = rule_sets
        .into_iter()
        .flatten()
        .map(|local| format!("{}@{}", local, domain))
        .collect();

    tracing::debug!(
        "Generated {} UPN candidates from {} name parts for domain {}",
        upns.len(),
        names.len(),
        domain
    );
    upns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::name_parser::parse_full_name;

    fn components(full_name: &str) -> NameComponents {
        parse_full_name(full_name).unwrap()
    }

    #[test]
    fn test_single_token_only_singles_and_numbered() {
        let upns = generate_upns(&components("Madonna"), "corp.com");
        // 1 single + 9 digits + 5 suffixes
        assert_eq!(upns.len(), 15);
        assert!(upns.contains("madonna@corp.com"));
        assert!(upns.contains("madonna7@corp.com"));
        assert!(upns.contains("madonna2025@corp.com"));
        for upn in &upns {
            let local = upn.split('@').next().unwrap();
            assert!(!local.contains(['.', '_', '-']), "unexpected join in {}", upn);
        }
    }

    #[test]
    fn test_two_names_exact_count() {
        let upns = generate_upns(&components("John Smith"), "example.org");
        assert_eq!(upns.len(), 83);
        for expected in [
            "john@example.org",
            "smith@example.org",
            "johnsmith@example.org",
            "smith_john@example.org",
            "j.smith@example.org",
            "smith-j@example.org",
            "sjohn@example.org",
            "john.s@example.org",
            "js@example.org",
            "jsmith2024@example.org",
            "john.smith01@example.org",
            "johns9@example.org",
        ] {
            assert!(upns.contains(expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_pairs_emit_eight_per_pair() {
        let set = pairs(&["ann", "lee"]);
        assert_eq!(set.len(), 8);
        assert!(set.contains("annlee"));
        assert!(set.contains("leeann"));
        assert!(set.contains("lee-ann"));
    }

    #[test]
    fn test_triples_keep_drawn_order() {
        let set = triples(&["john", "michael", "smith"]);
        let expected: CandidateSet = [
            "johnmichaelsmith",
            "john.michael.smith",
            "john_michael_smith",
            "john-michael-smith",
            "john.michaelsmith",
            "johnmichael.smith",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        assert_eq!(set, expected);
    }

    #[test]
    fn test_triples_of_four_names() {
        // C(4, 3) = 4 triples, 6 forms each, no collisions between them
        let set = triples(&["anna", "maria", "luisa", "ortiz"]);
        assert_eq!(set.len(), 24);
        assert!(set.contains("maria_luisa_ortiz"));
        assert!(!set.contains("ortiz.anna.maria"));
    }

    #[test]
    fn test_initial_with_name_ordered_pairs() {
        let set = initial_with_name(&["john", "smith"]);
        assert_eq!(set.len(), 16);
        assert!(set.contains("j_smith"));
        assert!(set.contains("smithj"));
        assert!(set.contains("s-john"));
        assert!(set.contains("john.s"));
    }

    #[test]
    fn test_combined_initials_follow_original_order() {
        let set = combined_initials(&["john", "michael", "smith"]);
        assert!(set.contains("jmsmith"));
        assert!(set.contains("smith.jm"));
        assert!(set.contains("jsmichael"));
        assert!(set.contains("ms_john"));
        assert!(!set.contains("mjsmith"));
        assert_eq!(set.len(), 24);
    }

    #[test]
    fn test_combined_initials_need_another_name() {
        assert!(combined_initials(&["madonna"]).is_empty());
        assert!(combined_initials(&["kim", "kim"]).is_empty());
    }

    #[test]
    fn test_all_initials() {
        assert!(all_initials(&["cher"]).is_empty());
        assert_eq!(
            all_initials(&["john", "michael", "smith"]),
            CandidateSet::from(["jms".to_string()])
        );
    }

    #[test]
    fn test_numbered_bases() {
        let set = numbered(&components("Jane Doe"));
        assert_eq!(set.len(), 4 * 14);
        assert!(set.contains("janedoe1"));
        assert!(set.contains("jane.doe03"));
        assert!(set.contains("jdoe2024"));
        assert!(set.contains("janed5"));
        assert!(!set.contains("jane1"));
    }

    #[test]
    fn test_every_upn_ends_with_domain() {
        let domain = "Sub.Example.COM";
        let upns = generate_upns(&components("Anna Maria Luisa Ortiz"), domain);
        let suffix = format!("@{}", domain);
        for upn in &upns {
            assert!(upn.ends_with(&suffix), "{} lacks domain", upn);
            assert_eq!(upn.matches('@').count(), 1);
            assert!(upn.len() > suffix.len());
        }
    }

    #[test]
    fn test_generation_is_idempotent_and_sorted() {
        let name = components("John Michael Smith");
        let first: Vec<String> = generate_upns(&name, "corp.local").into_iter().collect();
        let second: Vec<String> = generate_upns(&name, "corp.local").into_iter().collect();
        assert_eq!(first, second);

        let mut sorted = first.clone();
        sorted.sort();
        assert_eq!(first, sorted);
    }
}
