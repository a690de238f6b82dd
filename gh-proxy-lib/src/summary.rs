use crate::object_model::Repo;
use colored::Colorize;
use std::io::{Result, Write};

/// Writes the fixed seven-line repository summary, one bold label per line
pub fn write_summary<W>(out: &mut W, repo: &Repo) -> Result<()>
where
    W: Write,
{
    writeln!(out, "{}:\t{}", "Full name".bold(), repo.full_name)?;
    writeln!(out, "{}:\t{}", "Stargazers".bold(), repo.stargazers_count)?;
    writeln!(out, "{}:\t{}", "Watchers".bold(), repo.subscribers_count)?;
    writeln!(out, "{}:\t\t{}", "URL".bold(), repo.url)?;
    writeln!(
        out,
        "{}:\t{}",
        "Created at".bold(),
        repo.created_at.format("%Y-%m-%d %H:%M:%S%:z")
    )?;
    writeln!(out, "{}:\t{}", "Default branch".bold(), repo.default_branch)?;
    writeln!(out, "(...)")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_summary;
    use crate::object_model::{Owner, Repo};
    use chrono::{TimeZone, Utc};
    use colored::Colorize;

    fn repo() -> Repo {
        Repo {
            id: 123456,
            name: String::from("github-proxy-server"),
            full_name: String::from("hsborges/github-proxy-server"),
            private: false,
            owner: Owner {
                login: String::from("hsborges"),
            },
            html_url: String::from("https://github.com/hsborges/github-proxy-server"),
            url: String::from("https://api.example.com/repos/hsborges/github-proxy-server"),
            stargazers_count: 42,
            subscribers_count: 7,
            created_at: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
            default_branch: String::from("main"),
        }
    }

    #[test]
    fn writes_seven_lines_in_order() {
        let mut out = Vec::new();
        write_summary(&mut out, &repo()).unwrap();

        let expected = [
            format!("{}:\thsborges/github-proxy-server", "Full name".bold()),
            format!("{}:\t42", "Stargazers".bold()),
            format!("{}:\t7", "Watchers".bold()),
            format!(
                "{}:\t\thttps://api.example.com/repos/hsborges/github-proxy-server",
                "URL".bold()
            ),
            format!("{}:\t2020-01-01 00:00:00+00:00", "Created at".bold()),
            format!("{}:\tmain", "Default branch".bold()),
            String::from("(...)"),
        ];

        let s = String::from_utf8(out).unwrap();
        assert!(s.ends_with('\n'));
        assert_eq!(expected.as_slice(), s.lines().collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn counts_render_as_integers() {
        let mut out = Vec::new();
        write_summary(&mut out, &repo()).unwrap();

        let s = String::from_utf8(out).unwrap();
        let lines = s.lines().collect::<Vec<_>>();
        assert!(lines[1].ends_with(":\t42"));
        assert!(lines[2].ends_with(":\t7"));
        assert!(!s.contains("42.0") && !s.contains("7.0"));
    }
}
