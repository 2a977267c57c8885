/// Course prefix shared by every generated repository.
pub const COURSE_PREFIX: &str = "comp110";

/// Left-pads `section` with zeros to two characters. Longer values pass
/// through untouched.
pub fn pad_section(section: &str) -> String {
    format!("{:0>2}", section)
}

/// `comp110-{semester}-s{section:02}-{username}`
pub fn repo_name(semester: &str, section: &str, username: &str) -> String {
    format!(
        "{}-{}-s{}-{}",
        COURSE_PREFIX,
        semester,
        pad_section(section),
        username
    )
}

pub fn full_repo_name(owner: Option<&str>, name: &str) -> String {
    match owner {
        Some(owner) => format!("{}/{}", owner, name),
        None => name.to_string(),
    }
}
