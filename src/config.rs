use std::path::PathBuf;

/// Startup settings taken from the command line.
///
/// The only argument is an optional path to a puzzle file; without it the bundled sample
/// puzzle is used.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LaunchConfig {
    pub puzzle_path: Option<PathBuf>,
}

impl LaunchConfig {
    pub fn from_env() -> Self {
        Self::from_args(std::env::args().skip(1))
    }

    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let puzzle_path = args
            .into_iter()
            .find(|arg| !arg.trim().is_empty())
            .map(PathBuf::from);
        if puzzle_path.is_none() {
            tracing::debug!("no puzzle path given, using bundled sample");
        }
        Self { puzzle_path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_argument_is_the_puzzle() {
        let config = LaunchConfig::from_args(["daily.json".to_string(), "ignored".to_string()]);
        assert_eq!(config.puzzle_path, Some(PathBuf::from("daily.json")));
    }

    #[test]
    fn no_arguments_means_sample() {
        assert_eq!(LaunchConfig::from_args(Vec::new()), LaunchConfig::default());
        assert_eq!(LaunchConfig::from_args(["  ".to_string()]).puzzle_path, None);
    }
}
