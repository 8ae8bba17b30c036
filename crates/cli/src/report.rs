use getarg::{ArgumentStore, FlagState};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize)]
pub struct DumpReport {
    pub flags: Vec<FlagEntry>,
    pub positionals: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct FlagEntry {
    pub name: String,
    /// `None` when the flag was given without `=value`.
    pub value: Option<String>,
    pub occurrences: usize,
    /// How the flag resolves as a boolean (with a `false` default).
    pub enabled: bool,
}

impl DumpReport {
    pub fn from_store(args: &ArgumentStore) -> Self {
        let flags = args
            .iter()
            .map(|(name, state)| FlagEntry {
                name: name.to_string(),
                value: match state {
                    FlagState::Given(v) => Some(v.to_string()),
                    FlagState::Bare | FlagState::Absent => None,
                },
                occurrences: args.get_args(name).len(),
                enabled: args.get_bool_arg(name, false),
            })
            .collect();

        Self {
            flags,
            positionals: args.positionals().to_vec(),
        }
    }
}

impl fmt::Display for DumpReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flag in &self.flags {
            match &flag.value {
                Some(v) => write!(f, "{}={v}", flag.name)?,
                None => write!(f, "{}", flag.name)?,
            }
            if flag.occurrences > 1 {
                write!(f, " (given {} times)", flag.occurrences)?;
            }
            writeln!(f)?;
        }
        for arg in &self.positionals {
            writeln!(f, "positional: {arg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lists_effective_values_and_positionals() {
        let args = ArgumentStore::parse(["prog", "--CWY=verbose", "-bar", "-CWY=quiet", "file"]);
        let report = DumpReport::from_store(&args);

        assert_eq!(report.flags.len(), 2);
        assert_eq!(report.flags[0].name, "-CWY");
        assert_eq!(report.flags[0].value.as_deref(), Some("quiet"));
        assert_eq!(report.flags[0].occurrences, 2);
        assert_eq!(report.flags[1].name, "-bar");
        assert_eq!(report.flags[1].value, None);
        assert!(report.flags[1].enabled);
        assert_eq!(report.positionals, vec!["file".to_string()]);

        assert_eq!(
            report.to_string(),
            "-CWY=quiet (given 2 times)\n-bar\npositional: file\n"
        );
    }

    #[test]
    fn report_serializes_bare_value_as_null() {
        let args = ArgumentStore::parse(["prog", "-CWY=0"]);
        let json = serde_json::to_value(DumpReport::from_store(&args)).unwrap();
        assert_eq!(json["flags"][0]["name"], "-CWY");
        assert_eq!(json["flags"][0]["value"], "0");
        assert_eq!(json["flags"][0]["enabled"], false);

        let args = ArgumentStore::parse(["prog", "-CWY"]);
        let json = serde_json::to_value(DumpReport::from_store(&args)).unwrap();
        assert!(json["flags"][0]["value"].is_null());
    }
}
