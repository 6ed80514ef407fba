use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Reference
// ---------------------------------------------------------------------------

/// A parsed mention token.
///
/// Each variant carries the bare platform identifier; any display label that
/// followed the `|` separator in the token is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reference {
    User(String),
    UserGroup(String),
    Channel(String),
    Invalid,
}

impl Reference {
    /// Parse a mention token such as `<@U0123>`, `<!subteam^S0123|@team>`
    /// or `<#C0123|general>`.
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        if let Some(id) = capture_id(group_re(), token) {
            return Reference::UserGroup(id);
        }
        if let Some(id) = capture_id(user_re(), token) {
            return Reference::User(id);
        }
        if let Some(id) = capture_id(channel_re(), token) {
            return Reference::Channel(id);
        }
        Reference::Invalid
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Reference::Invalid)
    }

    /// The group id, if this reference is a user-group mention.
    pub fn as_group(&self) -> Option<&str> {
        match self {
            Reference::UserGroup(id) => Some(id),
            _ => None,
        }
    }
}

/// Renders the canonical mention syntax, without a display label.
impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::User(id) => write!(f, "<@{id}>"),
            Reference::UserGroup(id) => write!(f, "<!subteam^{id}>"),
            Reference::Channel(id) => write!(f, "<#{id}>"),
            Reference::Invalid => f.write_str("<invalid>"),
        }
    }
}

pub fn user_mention(id: &str) -> String {
    Reference::User(id.to_string()).to_string()
}

pub fn group_mention(id: &str) -> String {
    Reference::UserGroup(id.to_string()).to_string()
}

// ---------------------------------------------------------------------------
// Grammars
// ---------------------------------------------------------------------------

// Group ids start with S, user ids with U or W, channel ids with C or G.
// The leading letter keeps `<@...>` and `<#...>` tokens from crossing over.

static GROUP_RE: OnceLock<Regex> = OnceLock::new();
static USER_RE: OnceLock<Regex> = OnceLock::new();
static CHANNEL_RE: OnceLock<Regex> = OnceLock::new();

fn group_re() -> &'static Regex {
    GROUP_RE.get_or_init(|| Regex::new(r"^<!subteam\^(S[A-Z0-9]+)(?:\|[^>]*)?>$").unwrap())
}

fn user_re() -> &'static Regex {
    USER_RE.get_or_init(|| Regex::new(r"^<@([UW][A-Z0-9]+)(?:\|[^>]*)?>$").unwrap())
}

fn channel_re() -> &'static Regex {
    CHANNEL_RE.get_or_init(|| Regex::new(r"^<#([CG][A-Z0-9]+)(?:\|[^>]*)?>$").unwrap())
}

fn capture_id(re: &Regex, token: &str) -> Option<String> {
    re.captures(token)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
