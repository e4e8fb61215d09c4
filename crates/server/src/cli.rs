//! Command-line surface: argument parsing and the one-off catalog queries.

use clap::{Parser, Subcommand};
use greenhouse_core::{Envelope, GreenhouseConfig};
use serde::Serialize;

use crate::state::AppState;

#[derive(Parser, Clone, Debug)]
#[command(author, version, about = "Greenhouse - a weekly garden of showcase projects")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Clone, Debug, PartialEq)]
pub enum CliCommand {
    /// Start the Greenhouse server (default)
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Address to bind
        #[arg(long)]
        host: Option<String>,
    },
    /// Print catalog totals
    Stats,
    /// Print the week partitions
    Weeks,
    /// Print the projects of a week
    List {
        /// Week key, defaults to the configured current week
        #[arg(short, long)]
        week: Option<String>,
    },
}

impl CliCommand {
    /// Fold `serve` flags over the loaded config; other commands leave it alone.
    pub fn apply_overrides(&self, config: &mut GreenhouseConfig) {
        if let CliCommand::Serve { port, host } = self {
            if let Some(port) = port {
                config.port = *port;
            }
            if let Some(host) = host {
                config.host = host.clone();
            }
        }
    }
}

fn pretty<T: Serialize>(envelope: &Envelope<T>) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(envelope)?)
}

/// Pretty JSON envelope answering a query command, or `None` for `serve`.
pub fn render_query(state: &AppState, command: &CliCommand) -> anyhow::Result<Option<String>> {
    let rendered = match command {
        CliCommand::Serve { .. } => return Ok(None),
        CliCommand::Stats => pretty(&state.service.get_stats())?,
        CliCommand::Weeks => pretty(&state.service.list_weeks())?,
        CliCommand::List { week } => pretty(&state.service.get_projects_for_week(week.as_deref()))?,
    };
    Ok(Some(rendered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn parse(args: &[&str]) -> Option<CliCommand> {
        Args::try_parse_from(args).unwrap().command
    }

    fn query(command: CliCommand) -> Value {
        let state = AppState::new(GreenhouseConfig::default());
        let text = render_query(&state, &command).unwrap().unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn test_parse_subcommands() {
        assert_eq!(parse(&["greenhouse"]), None);
        assert_eq!(parse(&["greenhouse", "stats"]), Some(CliCommand::Stats));
        assert_eq!(
            parse(&["greenhouse", "list", "--week", "week32"]),
            Some(CliCommand::List {
                week: Some("week32".to_string())
            })
        );
        assert_eq!(
            parse(&["greenhouse", "serve", "-p", "8080"]),
            Some(CliCommand::Serve {
                port: Some(8080),
                host: None
            })
        );
        assert!(Args::try_parse_from(["greenhouse", "serve", "-p", "nope"]).is_err());
    }

    #[test]
    fn test_serve_flags_override_config() {
        let mut config = GreenhouseConfig::default();
        CliCommand::Serve {
            port: Some(9000),
            host: Some("0.0.0.0".to_string()),
        }
        .apply_overrides(&mut config);
        assert_eq!(config.address(), "0.0.0.0:9000");

        let mut untouched = GreenhouseConfig::default();
        CliCommand::Stats.apply_overrides(&mut untouched);
        assert_eq!(untouched, GreenhouseConfig::default());
    }

    #[test]
    fn test_stats_query_prints_totals() {
        let body = query(CliCommand::Stats);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["totalProjects"], 12);
        assert_eq!(body["data"]["totalWeeks"], 3);
    }

    #[test]
    fn test_weeks_query_keeps_order() {
        let body = query(CliCommand::Weeks);
        let ids: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|w| w["id"].as_str())
            .collect();
        assert_eq!(ids, vec!["week33", "week32", "week31"]);
    }

    #[test]
    fn test_list_query_defaults_to_current_week() {
        assert_eq!(query(CliCommand::List { week: None })["data"].as_array().map(Vec::len), Some(9));
        let week31 = query(CliCommand::List {
            week: Some("week31".to_string()),
        });
        assert_eq!(week31["data"][0]["name"], "ChatBot Pro");
    }

    #[test]
    fn test_serve_is_not_a_query() {
        let state = AppState::new(GreenhouseConfig::default());
        let serve = CliCommand::Serve {
            port: None,
            host: None,
        };
        assert!(render_query(&state, &serve).unwrap().is_none());
    }
}
