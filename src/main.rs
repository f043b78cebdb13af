// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylesweep and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Stylesweep CLI entrypoint.
//!
//! By default this serves MCP over streamable HTTP at `http://127.0.0.1:<port>/mcp`.
//!
//! Use `--mcp` to run the MCP server over stdio instead (intended for tool integrations).

use std::error::Error;
use std::sync::Arc;

use axum::Router;
use rmcp::transport::{
    streamable_http_server::session::local::LocalSessionManager, StreamableHttpServerConfig,
    StreamableHttpService,
};
use stylesweep::ops::MatchProfile;
use tracing::level_filters::LevelFilter;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

const DEFAULT_MCP_HTTP_PORT: u16 = 27436;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<document.json>] [--durable-writes] [--mcp-http-port <port>] [options]\n  {program} [--document <path>] [--durable-writes] [--mcp-http-port <port>] [options]\n  {program} --demo [--mcp-http-port <port>] [options]\n  {program} [<document.json>] [--durable-writes] --mcp [options]\n  {program} --demo --mcp [options]\n\nOptions:\n  --profile tolerant|strict   weight matching profile (default tolerant)\n  --auto-create               create a style when apply-nearest finds no match\n  --log-level <level>         error|warn|info|debug|trace on stderr (default warn)\n\nHTTP mode (default) serves MCP at `http://127.0.0.1:<port>/mcp`.\n--mcp-http-port selects the port (0 = ephemeral; default {DEFAULT_MCP_HTTP_PORT}).\n\nIf the document path is omitted, `stylesweep.json` in the current directory is used and\ncreated on the first change.\n--demo uses a built-in demo document kept in memory and cannot be combined with a document path.\n\n--durable-writes opts into slower, best-effort durable persistence (fsync/sync where supported)."
    );
}

#[derive(Debug, Default, Clone, PartialEq)]
struct CliOptions {
    mcp: bool,
    demo: bool,
    document: Option<String>,
    mcp_http_port: Option<u16>,
    durable_writes: bool,
    profile: Option<MatchProfile>,
    auto_create: bool,
    log_level: Option<Level>,
}

impl CliOptions {
    fn match_profile(&self) -> MatchProfile {
        let profile = self.profile.unwrap_or_default();
        if self.auto_create {
            profile.with_auto_create(true)
        } else {
            profile
        }
    }
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--mcp" => {
                if options.mcp {
                    return Err(());
                }
                options.mcp = true;
            }
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--document" => {
                if options.document.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.document = Some(path);
            }
            "--mcp-http-port" => {
                if options.mcp_http_port.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let port: u16 = raw.parse().map_err(|_| ())?;
                options.mcp_http_port = Some(port);
            }
            "--durable-writes" => {
                if options.durable_writes {
                    return Err(());
                }
                options.durable_writes = true;
            }
            "--profile" => {
                if options.profile.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.profile = Some(raw.parse().map_err(|_| ())?);
            }
            "--auto-create" => {
                if options.auto_create {
                    return Err(());
                }
                options.auto_create = true;
            }
            "--log-level" => {
                if options.log_level.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.log_level = Some(raw.parse().map_err(|_| ())?);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.document.is_some() {
                    return Err(());
                }
                options.document = Some(arg);
            }
        }
    }

    if options.demo && options.document.is_some() {
        return Err(());
    }

    if options.mcp && options.mcp_http_port.is_some() {
        return Err(());
    }

    Ok(options)
}

/// Logs go to stderr so the stdio transport keeps stdout to itself. `RUST_LOG` wins over
/// `--log-level` when set.
fn init_tracing(level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::from_level(level).into()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn build_server(options: &CliOptions) -> Result<stylesweep::mcp::StylesweepMcp, Box<dyn Error>> {
    let profile = options.match_profile();
    if options.demo {
        let document = stylesweep::model::fixtures::demo_document();
        return Ok(stylesweep::mcp::StylesweepMcp::new(document, profile));
    }

    let path = options.document.clone().unwrap_or_else(|| "stylesweep.json".to_owned());
    let file = if options.durable_writes {
        stylesweep::store::DocumentFile::new(path)
            .with_durability(stylesweep::store::WriteDurability::Durable)
    } else {
        stylesweep::store::DocumentFile::new(path)
    };
    let document = file.load_or_init()?;
    info!(
        path = %file.path().display(),
        styles = document.styles().len(),
        profile = profile.name(),
        "document loaded"
    );
    Ok(stylesweep::mcp::StylesweepMcp::new_persistent(document, profile, file))
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "stylesweep".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_tracing(options.log_level.unwrap_or(Level::WARN));
        let mcp = build_server(&options)?;

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

        if options.mcp {
            runtime.block_on(mcp.serve_stdio())?;
            return Ok(());
        }

        let mcp_http_port = options.mcp_http_port.unwrap_or(DEFAULT_MCP_HTTP_PORT);
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind(("127.0.0.1", mcp_http_port)).await?;
            info!(addr = %listener.local_addr()?, "serving MCP over streamable HTTP");

            let config = StreamableHttpServerConfig {
                stateful_mode: true,
                ..StreamableHttpServerConfig::default()
            };
            let shutdown_token = config.cancellation_token.clone();
            let server_shutdown = shutdown_token.clone();

            let session_manager = Arc::new(LocalSessionManager::default());
            let mcp_service =
                StreamableHttpService::new(move || Ok(mcp.clone()), session_manager, config);

            let router = Router::new().nest_service("/mcp", mcp_service);
            let server_handle = tokio::spawn(async move {
                let serve = axum::serve(listener, router).with_graceful_shutdown(async move {
                    server_shutdown.cancelled().await;
                });
                if let Err(err) = serve.await {
                    eprintln!("stylesweep: MCP HTTP server error: {err}");
                }
            });

            tokio::signal::ctrl_c().await?;
            shutdown_token.cancel();
            let _ = server_handle.await;
            Ok::<(), Box<dyn Error>>(())
        })?;

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("stylesweep: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};
    use stylesweep::ops::MatchProfile;
    use tracing::Level;

    fn parse(args: &[&str]) -> Result<CliOptions, ()> {
        parse_options(args.iter().map(|arg| (*arg).to_owned()))
    }

    #[test]
    fn parses_empty_args() {
        let options = parse(&[]).expect("parse options");
        assert_eq!(options, CliOptions::default());
        assert_eq!(options.match_profile(), MatchProfile::tolerant());
    }

    #[test]
    fn parses_demo_flag() {
        let options = parse(&["--demo"]).expect("parse options");
        assert!(options.demo);
        assert!(!options.mcp);
        assert!(options.document.is_none());
        assert_eq!(options.mcp_http_port, None);
    }

    #[test]
    fn parses_mcp_flag() {
        let options = parse(&["--mcp"]).expect("parse options");
        assert!(options.mcp);
        assert!(!options.demo);
        assert!(options.document.is_none());
    }

    #[test]
    fn parses_document_flag_and_positional() {
        let options = parse(&["--document", "site.json"]).expect("parse options");
        assert_eq!(options.document.as_deref(), Some("site.json"));

        let options = parse(&["site.json", "--mcp"]).expect("parse options");
        assert_eq!(options.document.as_deref(), Some("site.json"));
        assert!(options.mcp);
    }

    #[test]
    fn parses_mcp_http_port() {
        let options = parse(&["--mcp-http-port", "1234"]).expect("parse options");
        assert_eq!(options.mcp_http_port, Some(1234));
        assert!(!options.mcp);
    }

    #[test]
    fn parses_profile_and_auto_create() {
        let options = parse(&["--profile", "strict"]).expect("parse options");
        assert_eq!(options.match_profile(), MatchProfile::strict());

        let options = parse(&["--auto-create"]).expect("parse options");
        assert_eq!(options.match_profile(), MatchProfile::tolerant().with_auto_create(true));
    }

    #[test]
    fn parses_log_level() {
        let options = parse(&["--log-level", "debug"]).expect("parse options");
        assert_eq!(options.log_level, Some(Level::DEBUG));
    }

    #[test]
    fn rejects_invalid_values() {
        parse(&["--profile", "loose"]).unwrap_err();
        parse(&["--log-level", "loud"]).unwrap_err();
        parse(&["--mcp-http-port", "http"]).unwrap_err();
    }

    #[test]
    fn rejects_mcp_http_port_with_stdio_mcp_mode() {
        parse(&["--mcp", "--mcp-http-port", "0"]).unwrap_err();
    }

    #[test]
    fn rejects_demo_with_document() {
        parse(&["--demo", "--document", "x.json"]).unwrap_err();
        parse(&["x.json", "--demo"]).unwrap_err();
    }

    #[test]
    fn rejects_unknown_args() {
        parse(&["--nope"]).unwrap_err();
    }

    #[test]
    fn rejects_duplicate_flags() {
        parse(&["--demo", "--demo"]).unwrap_err();
        parse(&["--auto-create", "--auto-create"]).unwrap_err();
        parse(&["--profile", "strict", "--profile", "tolerant"]).unwrap_err();
        parse(&["one.json", "two.json"]).unwrap_err();
        parse(&["--document", "one.json", "two.json"]).unwrap_err();
    }

    #[test]
    fn rejects_missing_values() {
        parse(&["--document"]).unwrap_err();
        parse(&["--log-level"]).unwrap_err();
    }
}
