use strum::Display;

/// Short label for a failed query, as shown in the table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ErrorCategory {
    #[strum(serialize = "Timeout")]
    Timeout,
    #[strum(serialize = "Conn refused")]
    ConnRefused,
    #[strum(serialize = "NS invalid")]
    NsInvalid,
    #[strum(serialize = "No result")]
    NoResult,
    /// Nothing in [`RULES`] matched.
    #[strum(serialize = "Connect error")]
    Unclassified,
}

/// Lowercase needles, checked in order; first hit wins.
const RULES: &[(&str, ErrorCategory)] = &[
    ("timeout", ErrorCategory::Timeout),
    ("refused the network connection", ErrorCategory::ConnRefused),
    ("no service is operating", ErrorCategory::NsInvalid),
    ("forcibly closed by the remote host", ErrorCategory::NsInvalid),
    ("no result", ErrorCategory::NoResult),
];

impl ErrorCategory {
    /// Maps free-form error text to a category with a case-insensitive
    /// substring match against [`RULES`].
    #[must_use]
    pub fn classify(message: &str) -> Self {
        let message = message.to_lowercase();
        RULES
            .iter()
            .find(|(needle, _)| message.contains(needle))
            .map_or(Self::Unclassified, |(_, category)| *category)
    }
}
