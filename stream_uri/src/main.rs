//! Prints the request a streaming client would issue for a configured
//! endpoint. Handy for checking PowerTrack paths, backfill settings and
//! extra query parameters before wiring them into a long-running consumer.

use std::{env, process};

use stream_endpoint::{request_url, EndpointConfig, EndpointDescriptor, EndpointError, HttpHosts};
use tracing_subscriber::EnvFilter;

fn print_help() {
    println!(
        r#"stream_uri {version}

USAGE:
    stream_uri [OPTIONS] [CONFIG_FILE]

Builds a streaming endpoint from CONFIG_FILE (JSON) or, when no file is
given, from STREAM_* environment variables, and prints `METHOD URL`.

OPTIONS:
    -e, --env-file <FILE>   Load environment variables from FILE first
    -H, --host <URL>        Stream host to resolve against (repeatable; the
                            first one is printed)
    -q, --param <K=V>       Extra query parameter (repeatable)
    -v, --verbose           Debug logging (overridden by RUST_LOG)
        --help              Show this help
        --version           Show version

ENVIRONMENT:
    STREAM_KIND               `enterprise` (default) or `custom`
    STREAM_PATH               Path for `custom`
    STREAM_ACCOUNT            Enterprise account name
    STREAM_PUBLISHER          Enterprise publisher (default `twitter`)
    STREAM_PRODUCT            Enterprise product, e.g. `powertrack`
    STREAM_LABEL              Enterprise stream label
    STREAM_BACKFILL_MINUTES   Backfill window, 0 disables
    STREAM_QUERY              Extra parameters as `k=v&k2=v2`"#,
        version = env!("CARGO_PKG_VERSION")
    );
}

/// Fail with an `[ERROR]` line and exit code 1.
fn die(msg: impl std::fmt::Display) -> ! {
    eprintln!("[ERROR] {msg}");
    process::exit(1);
}

struct Args {
    env_file: Option<String>,
    config_file: Option<String>,
    hosts: Vec<String>,
    params: Vec<(String, String)>,
    verbose: bool,
}

fn parse_args(args: &[String]) -> Args {
    let mut parsed = Args {
        env_file: None,
        config_file: None,
        hosts: Vec::new(),
        params: Vec::new(),
        verbose: false,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--env-file" | "-e" => {
                i += 1;
                let Some(v) = args.get(i) else {
                    die("--env-file requires a file name.");
                };
                parsed.env_file = Some(v.clone());
            }
            "--host" | "-H" => {
                i += 1;
                let Some(v) = args.get(i) else {
                    die("--host requires a URL.");
                };
                parsed.hosts.push(v.clone());
            }
            "--param" | "-q" => {
                i += 1;
                let Some(v) = args.get(i) else {
                    die("--param requires KEY=VALUE.");
                };
                let Some((k, val)) = v.split_once('=') else {
                    die(format!("--param `{v}` is not KEY=VALUE."));
                };
                parsed.params.push((k.to_string(), val.to_string()));
            }
            "--verbose" | "-v" => {
                parsed.verbose = true;
            }
            val => {
                if let Some(existing) = &parsed.config_file {
                    eprintln!(
                        "[WARNING] Multiple config files specified. Using '{existing}' and ignoring '{val}'."
                    );
                } else {
                    parsed.config_file = Some(val.to_string());
                }
            }
        }
        i += 1;
    }
    parsed
}

fn load_endpoint(args: &Args) -> Result<Box<dyn EndpointDescriptor>, EndpointError> {
    let config = match &args.config_file {
        Some(path) => {
            tracing::debug!(%path, "Loading endpoint config file");
            EndpointConfig::from_file(path)?
        }
        None => EndpointConfig::from_env()?,
    };

    let endpoint = config.build()?;
    for (k, v) in &args.params {
        endpoint.add_query_parameter(k, v);
    }
    Ok(endpoint)
}

fn main() {
    let raw = env::args().skip(1).collect::<Vec<String>>();

    if raw.iter().any(|a| a == "--help") {
        print_help();
        process::exit(0);
    }
    if raw.iter().any(|a| a == "--version") {
        println!("stream_uri {}", env!("CARGO_PKG_VERSION"));
        process::exit(0);
    }

    let args = parse_args(&raw);

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(env_path) = &args.env_file {
        tracing::debug!(%env_path, "Loading environment file");
        if let Err(e) = dotenvy::from_filename(env_path) {
            die(format!("Failed to load .env file '{env_path}': {e}"));
        }
    }

    let endpoint = load_endpoint(&args).unwrap_or_else(|e| die(e));
    tracing::debug!(?endpoint, "Endpoint ready");

    if args.hosts.is_empty() {
        println!("{} {}", endpoint.http_method(), endpoint.uri());
        return;
    }

    let hosts = HttpHosts::new(&args.hosts).unwrap_or_else(|e| die(e));
    match request_url(hosts.next_host(), endpoint.as_ref()) {
        Ok(url) => println!("{} {url}", endpoint.http_method()),
        Err(e) => die(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        let args = parse_args(&strings(&[
            "-H",
            "https://gnip-stream.twitter.com",
            "--param",
            "partition=1",
            "-v",
            "cfg.json",
        ]));
        assert_eq!(args.hosts, vec!["https://gnip-stream.twitter.com"]);
        assert_eq!(args.params, vec![("partition".into(), "1".into())]);
        assert!(args.verbose);
        assert_eq!(args.config_file.as_deref(), Some("cfg.json"));
        assert!(args.env_file.is_none());
    }

    #[test]
    fn test_param_value_may_contain_equals() {
        let args = parse_args(&strings(&["-q", "rule=a=b"]));
        assert_eq!(args.params, vec![("rule".into(), "a=b".into())]);
    }

    #[test]
    fn test_load_endpoint_from_file_with_params() {
        let dir = env::temp_dir().join(format!("stream_uri_test_{}", process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("endpoint.json");
        std::fs::write(
            &file,
            r#"{"kind":"enterprise","account":"acct","product":"powertrack","label":"prod"}"#,
        )
        .unwrap();

        let args = parse_args(&strings(&[file.to_str().unwrap(), "-q", "partition=2"]));
        let ep = load_endpoint(&args).unwrap();
        assert_eq!(
            ep.uri(),
            "/stream/powertrack/accounts/acct/publishers/twitter/prod.json?partition=2"
        );
        std::fs::remove_dir_all(&dir).ok();
    }
}
