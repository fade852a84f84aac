use crate::cli::actions::Action;
use anyhow::Result;

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    Ok(Action::Server {
        port: matches.get_one::<u16>("port").copied().unwrap_or(8080),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;

    #[test]
    fn test_default_port() -> Result<()> {
        temp_env::with_vars([("SEZAMO_PORT", None::<&str>)], || {
            let command = commands::new();
            let matches = command.get_matches_from(vec!["sezamo"]);
            let action = handler(&matches)?;
            let Action::Server { port } = action;
            assert_eq!(port, 8080);
            Ok(())
        })
    }

    #[test]
    fn test_port_from_args() -> Result<()> {
        let command = commands::new();
        let matches = command.get_matches_from(vec!["sezamo", "-p", "9000"]);
        let action = handler(&matches)?;
        let Action::Server { port } = action;
        assert_eq!(port, 9000);
        Ok(())
    }
}
