//! File-based configuration for the `ddoc` CLI.
//!
//! A `ddoc.toml` in the working directory (or a path given with
//! `--config`) supplies defaults; command-line flags override individual
//! values. A missing discovered file is not an error.
//!
//! ```toml
//! [lookup]
//! root = "source"
//! parser = "d2json"
//!
//! [members]
//! order = "alphabetic"
//! exclude = ["deprecated"]
//! exclude-imports = ["std.internal"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use ddoc_core::{invoke::DEFAULT_PARSER, MemberOrder, RenderOptions};
use serde::Deserialize;

use crate::error::ConfigError;

/// Conventional config file name.
pub const CONFIG_FILE: &str = "ddoc.toml";

/// Default lookup root when neither config nor flags supply one.
pub const DEFAULT_ROOT: &str = "source";

/// Deserialized `ddoc.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub lookup: LookupSettings,
    pub members: MemberSettings,
}

/// `[lookup]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LookupSettings {
    /// Directory the module tree lives under.
    pub root: Option<PathBuf>,
    /// Parser executable invoked per module file.
    pub parser: Option<PathBuf>,
}

/// `[members]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct MemberSettings {
    /// Member ordering mode (`source` or `alphabetic`).
    pub order: Option<MemberOrder>,
    /// Member names dropped before rendering.
    pub exclude: Vec<String>,
    /// Public-import names dropped from import listings.
    pub exclude_imports: Vec<String>,
}

impl Config {
    /// Loads configuration, returning it together with the file path used.
    ///
    /// An explicit path must exist; the conventional `ddoc.toml` is used
    /// only when present, and its absence yields defaults.
    pub fn load_or_default(
        explicit: Option<&Path>,
    ) -> Result<(Self, Option<PathBuf>), ConfigError> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let conventional = PathBuf::from(CONFIG_FILE);
                conventional.is_file().then_some(conventional)
            }
        };

        match path {
            Some(path) => {
                let config = Self::load(&path)?;
                Ok((config, Some(path)))
            }
            None => Ok((Self::default(), None)),
        }
    }

    /// Loads and parses a specific config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Effective lookup root: flag, then config, then [`DEFAULT_ROOT`].
    pub fn lookup_root(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.lookup.root.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT))
    }

    /// Effective parser program: flag, then config, then `d2json`.
    pub fn parser_program(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.lookup.parser.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PARSER))
    }

    /// Effective render options with flag overrides merged in.
    ///
    /// Exclusion lists are additive: names from the config file and from
    /// repeated flags are combined.
    pub fn render_options(
        &self,
        order: Option<MemberOrder>,
        exclude_members: Vec<String>,
        exclude_imports: Vec<String>,
    ) -> RenderOptions {
        let mut options = RenderOptions {
            member_order: order.or(self.members.order).unwrap_or_default(),
            exclude_members: self.members.exclude.clone(),
            exclude_imports: self.members.exclude_imports.clone(),
        };
        options.exclude_members.extend(exclude_members);
        options.exclude_imports.extend(exclude_imports);
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn full_config_parses() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
                [lookup]
                root = "src"
                parser = "tools/d2json"

                [members]
                order = "alphabetic"
                exclude = ["deprecated"]
                exclude-imports = ["std.internal"]
            "#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.lookup_root(None), PathBuf::from("src"));
        assert_eq!(
            config.parser_program(None),
            PathBuf::from("tools/d2json")
        );

        let options = config.render_options(None, vec!["extra".into()], Vec::new());
        assert_eq!(options.member_order, MemberOrder::Alphabetic);
        assert_eq!(options.exclude_members, vec!["deprecated", "extra"]);
        assert_eq!(options.exclude_imports, vec!["std.internal"]);
    }

    #[test]
    fn flags_override_config() {
        let config = Config::default();
        assert_eq!(
            config.lookup_root(Some(PathBuf::from("elsewhere"))),
            PathBuf::from("elsewhere")
        );
        assert_eq!(config.lookup_root(None), PathBuf::from(DEFAULT_ROOT));
        assert_eq!(config.parser_program(None), PathBuf::from("d2json"));

        let options = config.render_options(Some(MemberOrder::Alphabetic), vec![], vec![]);
        assert_eq!(options.member_order, MemberOrder::Alphabetic);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[lookup]\nroots = \"typo\"\n").unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(matches!(error, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let result = Config::load_or_default(Some(Path::new("/no/such/ddoc.toml")));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
