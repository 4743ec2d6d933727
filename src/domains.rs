//! Static command and problem-domain lookup tables.
//!
//! These tables are compiled in and read-only for the life of the process.

/// Domain key for commands absent from [`COMMAND_DOMAINS`].
///
/// Guides are never generated for this domain.
pub const CATCH_ALL_DOMAIN: &str = "other";

/// Command name to problem-domain key.
pub const COMMAND_DOMAINS: &[(&str, &str)] = &[
    // Filesystem navigation
    ("cd", "navigating-filesystem"),
    ("pwd", "navigating-filesystem"),
    ("ls", "navigating-filesystem"),
    ("tree", "navigating-filesystem"),
    // Directory management
    ("mkdir", "managing-directories"),
    ("rmdir", "managing-directories"),
    ("rm", "managing-directories"),
    // File finding
    ("find", "finding-files"),
    ("locate", "finding-files"),
    ("which", "finding-files"),
    ("whereis", "finding-files"),
    // File operations
    ("cp", "file-operations"),
    ("mv", "file-operations"),
    ("touch", "file-operations"),
    ("ln", "file-operations"),
    // Text processing
    ("grep", "text-processing"),
    ("sed", "text-processing"),
    ("awk", "text-processing"),
    ("cut", "text-processing"),
    ("sort", "text-processing"),
    ("uniq", "text-processing"),
    ("wc", "text-processing"),
    ("tr", "text-processing"),
    // Process management
    ("ps", "managing-processes"),
    ("top", "managing-processes"),
    ("htop", "managing-processes"),
    ("kill", "managing-processes"),
    ("killall", "managing-processes"),
    ("nice", "managing-processes"),
    ("renice", "managing-processes"),
    ("bg", "managing-processes"),
    ("fg", "managing-processes"),
    ("jobs", "managing-processes"),
    // Permissions
    ("chmod", "permissions"),
    ("chown", "permissions"),
    ("chgrp", "permissions"),
    ("umask", "permissions"),
    // Networking
    ("ping", "networking"),
    ("netstat", "networking"),
    ("ss", "networking"),
    ("ip", "networking"),
    ("ifconfig", "networking"),
    ("curl", "networking"),
    ("wget", "networking"),
    // System monitoring
    ("df", "system-monitoring"),
    ("du", "system-monitoring"),
    ("free", "system-monitoring"),
    ("uptime", "system-monitoring"),
    ("iostat", "system-monitoring"),
    ("vmstat", "system-monitoring"),
];

/// Problem-domain key to human description.
pub const DOMAIN_DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "navigating-filesystem",
        "Moving between directories and understanding filesystem structure",
    ),
    (
        "managing-directories",
        "Creating, organizing, and removing directory structures",
    ),
    (
        "finding-files",
        "Locating files by name, size, date, or other criteria",
    ),
    ("file-operations", "Copying, moving, and manipulating files"),
    (
        "text-processing",
        "Searching, filtering, and transforming text data",
    ),
    (
        "managing-processes",
        "Viewing, controlling, and managing running processes",
    ),
    (
        "permissions",
        "Understanding and modifying file permissions and ownership",
    ),
    (
        "networking",
        "Network connectivity, troubleshooting, and data transfer",
    ),
    (
        "system-monitoring",
        "Checking system resources and performance",
    ),
];

/// Look up the domain a command belongs to.
///
/// Total: unknown commands map to [`CATCH_ALL_DOMAIN`].
pub fn domain_for(command: &str) -> &'static str {
    COMMAND_DOMAINS
        .iter()
        .find(|(name, _)| *name == command)
        .map_or(CATCH_ALL_DOMAIN, |&(_, domain)| domain)
}

/// Human description for a domain, with a generated fallback.
pub fn describe(domain: &str) -> String {
    DOMAIN_DESCRIPTIONS
        .iter()
        .find(|(key, _)| *key == domain)
        .map_or_else(
            || format!("Problems related to {domain}"),
            |(_, description)| description.to_string(),
        )
}

/// Whether guides are generated for this domain.
pub fn is_guide_eligible(domain: &str) -> bool {
    domain != CATCH_ALL_DOMAIN
}

/// Convert a hyphenated domain key into a Title Case heading.
///
/// ```
/// use reframe::domains::title_case;
///
/// assert_eq!(title_case("text-processing"), "Text Processing");
/// assert_eq!(title_case("networking"), "Networking");
/// ```
pub fn title_case(key: &str) -> String {
    key.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
