use crate::domain::model::CandidateSet;

/// Short logon names (`jsmith`, `sjohn`, `john.smith`, ...) for each full name.
///
/// Only the first and last whitespace-separated parts are used. A name
/// without a space is taken as an existing username and only lowercased.
pub fn generate_usernames<S: AsRef<str>>(names: &[S]) -> CandidateSet {
    let mut usernames = CandidateSet::new();

    for raw in names {
        let name = raw.as_ref().trim();
        if name.is_empty() {
            continue;
        }

        if !name.contains(' ') {
            usernames.insert(name.to_lowercase());
            continue;
        }

        let parts: Vec<String> = name.split_whitespace().map(str::to_lowercase).collect();
        let (Some(first), Some(last)) = (parts.first(), parts.last()) else {
            continue;
        };
        let first_initial = first.chars().next().unwrap_or_default();
        let last_initial = last.chars().next().unwrap_or_default();

        usernames.insert(format!("{}{}", first_initial, last));
        usernames.insert(format!("{}{}", last_initial, first));
        usernames.insert(format!("{}.{}", first, last));
        usernames.insert(first.clone());
        usernames.insert(last.clone());
    }

    tracing::debug!(
        "Generated {} usernames from {} names",
        usernames.len(),
        names.len()
    );
    usernames
}
