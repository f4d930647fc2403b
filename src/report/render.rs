/// Turn a repository record into labelled, color-tagged output lines.
///
/// Rendering is pure: it returns [`Line`]s and leaves painting and writing to
/// the CLI output layer.
use chrono::{DateTime, SecondsFormat, Utc};
use colored::Color;

use super::fields::{Field, FieldSet};
use super::since::{TimeStyle, format_since};
use crate::types::RepositoryRecord;

/// One rendered output line and the color it should be painted with.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub text: String,
    pub color: Color,
}

impl Line {
    fn new(glyph: &str, label: &str, value: impl std::fmt::Display, color: Color) -> Self {
        Self {
            text: format!("{glyph} {label}: {value}"),
            color,
        }
    }
}

/// Rendering switches taken from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Show `created_at` as elapsed time instead of a timestamp.
    pub relative_created: bool,
    /// Spelling used for elapsed time when `relative_created` is set.
    pub time_style: TimeStyle,
}

/// Render every field in `fields`, in set order.
///
/// `now` anchors relative timestamps. A missing license produces no line.
#[must_use]
pub fn render(
    record: &RepositoryRecord,
    fields: &FieldSet,
    opts: RenderOptions,
    now: DateTime<Utc>,
) -> Vec<Line> {
    fields
        .fields()
        .filter_map(|field| render_field(record, &field, opts, now))
        .collect()
}

/// Render a single field, or `None` when the field has nothing to show.
#[must_use]
pub fn render_field(
    record: &RepositoryRecord,
    field: &Field,
    opts: RenderOptions,
    now: DateTime<Utc>,
) -> Option<Line> {
    let line = match field {
        Field::Name => Line::new("📦", "Name", &record.name, Color::Cyan),
        Field::FullName => Line::new("📛", "Full Name", &record.full_name, Color::Cyan),
        Field::HtmlUrl => Line::new("🌐", "URL", &record.html_url, Color::Blue),
        Field::CreatedAt => {
            let value = if opts.relative_created {
                format_since(record.created_at, now, opts.time_style)
            } else {
                rfc3339(record.created_at)
            };
            Line::new("📅", "Created", value, Color::Green)
        }
        Field::UpdatedAt => Line::new("🔄", "Updated", rfc3339(record.updated_at), Color::Yellow),
        Field::Stars => Line::new("⭐", "Stars", record.stargazers_count, Color::Magenta),
        Field::Forks => Line::new("🍴", "Forks", record.forks, Color::Magenta),
        Field::Watchers => Line::new("👀", "Watchers", record.watchers, Color::Magenta),
        Field::Size => Line::new("📦", "Size", format!("{} KB", record.size), Color::Magenta),
        Field::OwnerLogin => Line::new("👤", "Owner", &record.owner.login, Color::Cyan),
        Field::LicenseName => {
            let license = record.license.as_ref()?;
            Line::new("📝", "License", &license.name, Color::Cyan)
        }
        Field::Unknown(id) => Line {
            text: format!("❓ Unknown field: {id}"),
            color: Color::Red,
        },
    };
    Some(line)
}

fn rfc3339(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fields::DEFAULT_FIELDS;
    use crate::types::{License, Owner};
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn record() -> RepositoryRecord {
        RepositoryRecord {
            name: "ripgrep".to_owned(),
            full_name: "BurntSushi/ripgrep".to_owned(),
            html_url: "https://github.com/BurntSushi/ripgrep".to_owned(),
            created_at: Utc.with_ymd_and_hms(2016, 3, 11, 2, 2, 33).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap(),
            stargazers_count: 100,
            forks: 10,
            watchers: 7,
            size: 2048,
            owner: Owner {
                login: "BurntSushi".to_owned(),
            },
            license: None,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 14, 0, 0, 0).unwrap()
    }

    fn texts(lines: &[Line]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_default_fields() {
        let fields = FieldSet::resolve(DEFAULT_FIELDS, "", "");
        let lines = render(&record(), &fields, RenderOptions::default(), now());
        assert_eq!(
            texts(&lines),
            vec![
                "📦 Name: ripgrep",
                "📛 Full Name: BurntSushi/ripgrep",
                "🌐 URL: https://github.com/BurntSushi/ripgrep",
                "📅 Created: 2016-03-11T02:02:33Z",
                "🔄 Updated: 2024-06-01T08:30:00Z",
                "⭐ Stars: 100",
            ]
        );
    }

    #[test]
    fn test_category_colors() {
        let fields = FieldSet::resolve(
            &[],
            "name,html_url,created_at,updated_at,forks,owner.login,nope",
            "",
        );
        let colors: Vec<Color> = render(&record(), &fields, RenderOptions::default(), now())
            .into_iter()
            .map(|l| l.color)
            .collect();
        assert_eq!(
            colors,
            vec![
                Color::Cyan,
                Color::Blue,
                Color::Green,
                Color::Yellow,
                Color::Magenta,
                Color::Cyan,
                Color::Red,
            ]
        );
    }

    #[test]
    fn test_numeric_fields() {
        let fields = FieldSet::resolve(&[], "forks,watchers,size,owner.login", "");
        let lines = render(&record(), &fields, RenderOptions::default(), now());
        assert_eq!(
            texts(&lines),
            vec![
                "🍴 Forks: 10",
                "👀 Watchers: 7",
                "📦 Size: 2048 KB",
                "👤 Owner: BurntSushi",
            ]
        );
    }

    #[test]
    fn test_relative_created_long_and_short() {
        let fields = FieldSet::resolve(&[], "created_at,updated_at", "");
        let mut opts = RenderOptions {
            relative_created: true,
            time_style: TimeStyle::Long,
        };
        let lines = render(&record(), &fields, opts, now());
        assert_eq!(
            texts(&lines),
            vec![
                "📅 Created: 8 years 3 months 3 days ago",
                "🔄 Updated: 2024-06-01T08:30:00Z",
            ]
        );

        opts.time_style = TimeStyle::Short;
        let lines = render(&record(), &fields, opts, now());
        assert_eq!(lines[0].text, "📅 Created: 8y 3m 3d ago");
    }

    #[test]
    fn test_missing_license_renders_nothing() {
        let fields = FieldSet::resolve(&[], "license.name", "");
        assert!(render(&record(), &fields, RenderOptions::default(), now()).is_empty());
    }

    #[test]
    fn test_present_license() {
        let mut rec = record();
        rec.license = Some(License {
            name: "MIT License".to_owned(),
        });
        let line = render_field(&rec, &Field::LicenseName, RenderOptions::default(), now());
        assert_eq!(line.map(|l| l.text), Some("📝 License: MIT License".to_owned()));
    }

    #[test]
    fn test_unknown_field_line() {
        let fields = FieldSet::resolve(&[], "foo", "");
        let lines = render(&record(), &fields, RenderOptions::default(), now());
        assert_eq!(lines.len(), 1);
        assert!(lines[0].text.contains("Unknown field: foo"));
        assert_eq!(lines[0].color, Color::Red);
    }
}
