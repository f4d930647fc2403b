/// Field identifiers and field-set resolution.
///
/// The fields shown are `defaults ∪ include − exclude`. Exclusion is applied
/// last, so an excluded id never appears even if it is also a default or
/// explicitly included.

/// Fields shown when neither `--include` nor `--exclude` is given.
pub const DEFAULT_FIELDS: &[&str] = &[
    "name",
    "full_name",
    "html_url",
    "created_at",
    "updated_at",
    "stargazers_count",
];

/// A displayable repository attribute.
///
/// Parsing is total: ids that name no known attribute become
/// [`Field::Unknown`] and are reported as such when rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Name,
    FullName,
    HtmlUrl,
    CreatedAt,
    UpdatedAt,
    Stars,
    Forks,
    Watchers,
    Size,
    OwnerLogin,
    LicenseName,
    Unknown(String),
}

impl Field {
    /// Map a field id (as typed on the command line) to a `Field`.
    #[must_use]
    pub fn parse(id: &str) -> Self {
        match id {
            "name" => Self::Name,
            "full_name" => Self::FullName,
            "html_url" => Self::HtmlUrl,
            "created_at" => Self::CreatedAt,
            "updated_at" => Self::UpdatedAt,
            "stargazers_count" => Self::Stars,
            "forks" => Self::Forks,
            "watchers" => Self::Watchers,
            "size" => Self::Size,
            "owner.login" => Self::OwnerLogin,
            "license.name" => Self::LicenseName,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

/// A duplicate-free collection of field ids, kept in insertion order.
///
/// Ids are stored verbatim (after trimming); unknown and even empty ids are
/// legal members.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    ids: Vec<String>,
}

impl FieldSet {
    /// Build the set from defaults plus comma-separated include/exclude lists.
    ///
    /// Empty `include`/`exclude` strings are no-ops. Each token is trimmed;
    /// empty tokens from stray commas are kept as the literal empty id.
    #[must_use]
    pub fn resolve(defaults: &[&str], include: &str, exclude: &str) -> Self {
        let mut set = Self::default();
        for id in defaults {
            set.insert(id);
        }
        for id in split_csv(include) {
            set.insert(id);
        }
        for id in split_csv(exclude) {
            set.remove(id);
        }
        set
    }

    /// Add an id unless already present.
    pub fn insert(&mut self, id: &str) {
        if !self.contains(id) {
            self.ids.push(id.to_owned());
        }
    }

    /// Remove an id if present.
    pub fn remove(&mut self, id: &str) {
        self.ids.retain(|existing| existing != id);
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// Iterate over the raw ids.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Iterate over the ids parsed as [`Field`]s.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.ids().map(Field::parse)
    }
}

/// Split a comma-separated list into trimmed tokens. An empty list yields nothing.
fn split_csv(raw: &str) -> impl Iterator<Item = &str> {
    let tokens = if raw.is_empty() { None } else { Some(raw.split(',')) };
    tokens.into_iter().flatten().map(str::trim)
}
