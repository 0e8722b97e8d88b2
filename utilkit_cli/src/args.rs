//! Command-line parsing and environment fallbacks.

use anyhow::{anyhow, bail, Context, Result};

pub const ENV_USERNAME: &str = "UTILKIT_USERNAME";
pub const ENV_PASSWORD: &str = "UTILKIT_PASSWORD";
pub const ENV_PROXY: &str = "UTILKIT_PROXY";
pub const ENV_TIMEOUT: &str = "UTILKIT_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Version,
    Join { origin: String, path: String },
    Status { code: i32 },
    Rand { len: usize },
    Split { text: String },
    Email { address: String },
    Fetch { url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub env_file: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub proxy: Option<String>,
    pub insecure: bool,
    pub timeout_secs: Option<u64>,
    pub seed: Option<u64>,
    pub verbose: bool,
    pub command: Command,
}

impl Options {
    /// Parse everything after the program name. Flags may appear anywhere
    /// before a `--`; everything after it is positional. The first
    /// positional is the subcommand.
    pub fn parse(args: &[String]) -> Result<Self> {
        let (flag_args, trailing) = match args.iter().position(|a| a == "--") {
            Some(idx) => (&args[..idx], &args[idx + 1..]),
            None => (args, &args[args.len()..]),
        };

        if flag_args.iter().any(|a| a == "--help" || a == "-h") {
            return Ok(Self::with_command(Command::Help));
        }
        if flag_args.iter().any(|a| a == "--version") {
            return Ok(Self::with_command(Command::Version));
        }

        let mut opts = Self::with_command(Command::Help);
        let mut positionals: Vec<String> = Vec::new();

        let args = flag_args;
        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--proxy" | "-x" => {
                    let proxy = flag_value(args, &mut i)?;
                    opts.proxy = Some(proxy).filter(|p| !p.trim().is_empty());
                }
                "--env-file" | "-e" => opts.env_file = Some(flag_value(args, &mut i)?),
                "--username" | "-u" => opts.username = Some(flag_value(args, &mut i)?),
                "--password" | "-p" => opts.password = Some(flag_value(args, &mut i)?),
                "--timeout" | "-t" => {
                    let raw = flag_value(args, &mut i)?;
                    opts.timeout_secs = Some(
                        raw.parse()
                            .with_context(|| format!("invalid --timeout value `{raw}`"))?,
                    );
                }
                "--seed" => {
                    let raw = flag_value(args, &mut i)?;
                    opts.seed = Some(
                        raw.parse()
                            .with_context(|| format!("invalid --seed value `{raw}`"))?,
                    );
                }
                "--insecure" | "-k" => opts.insecure = true,
                "--verbose" | "-v" => opts.verbose = true,
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    bail!("unknown option `{flag}`")
                }
                val => positionals.push(val.to_string()),
            }
            i += 1;
        }
        positionals.extend(trailing.iter().cloned());

        if opts.username.is_some() != opts.password.is_some() {
            bail!("--username and --password must be given together");
        }

        opts.command = parse_command(positionals)?;
        Ok(opts)
    }

    fn with_command(command: Command) -> Self {
        Self {
            env_file: None,
            username: None,
            password: None,
            proxy: None,
            insecure: false,
            timeout_secs: None,
            seed: None,
            verbose: false,
            command,
        }
    }

    /// Fill unset options from the environment. Credentials are only taken
    /// from the environment as a pair.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.username.is_none() {
            if let (Some(u), Some(p)) = (lookup(ENV_USERNAME), lookup(ENV_PASSWORD)) {
                self.username = Some(u);
                self.password = Some(p);
            }
        }

        if self.proxy.is_none() {
            self.proxy = lookup(ENV_PROXY).filter(|p| !p.trim().is_empty());
        }

        if self.timeout_secs.is_none() {
            if let Some(raw) = lookup(ENV_TIMEOUT) {
                self.timeout_secs = Some(
                    raw.trim()
                        .parse()
                        .with_context(|| format!("invalid {ENV_TIMEOUT} value `{raw}`"))?,
                );
            }
        }

        Ok(())
    }
}

fn flag_value(args: &[String], i: &mut usize) -> Result<String> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| anyhow!("{flag} requires a value"))
}

fn parse_command(positionals: Vec<String>) -> Result<Command> {
    let mut it = positionals.into_iter();
    let Some(name) = it.next() else {
        return Ok(Command::Help);
    };
    let rest: Vec<String> = it.collect();

    let command = match (name.as_str(), rest.as_slice()) {
        ("join", [origin, path]) => Command::Join {
            origin: origin.clone(),
            path: path.clone(),
        },
        // A missing path joins the origin with an empty path.
        ("join", [origin]) => Command::Join {
            origin: origin.clone(),
            path: String::new(),
        },
        ("status", [code]) => Command::Status {
            code: code
                .parse()
                .with_context(|| format!("status code must be an integer, got `{code}`"))?,
        },
        ("rand", [len]) => Command::Rand {
            len: len
                .parse()
                .with_context(|| format!("length must be a non-negative integer, got `{len}`"))?,
        },
        ("split", [text]) => Command::Split { text: text.clone() },
        ("email", [address]) => Command::Email {
            address: address.clone(),
        },
        ("fetch", [url]) => Command::Fetch { url: url.clone() },
        ("join" | "status" | "rand" | "split" | "email" | "fetch", _) => {
            bail!("wrong number of arguments for `{name}`, see --help")
        }
        (other, _) => bail!("unknown command `{other}`, see --help"),
    };
    Ok(command)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_arguments_shows_help() {
        assert_eq!(Options::parse(&[]).unwrap().command, Command::Help);
        assert_eq!(
            Options::parse(&args(&["join", "--help"])).unwrap().command,
            Command::Help
        );
    }

    #[test]
    fn test_join_with_flags_anywhere() {
        let opts = Options::parse(&args(&["-v", "join", "http://a.com/", "x"])).unwrap();
        assert!(opts.verbose);
        assert_eq!(
            opts.command,
            Command::Join {
                origin: "http://a.com/".into(),
                path: "x".into()
            }
        );
    }

    #[test]
    fn test_join_without_path() {
        let opts = Options::parse(&args(&["join", "http://a.com"])).unwrap();
        assert_eq!(
            opts.command,
            Command::Join {
                origin: "http://a.com".into(),
                path: String::new()
            }
        );
    }

    #[test]
    fn test_fetch_options() {
        let opts = Options::parse(&args(&[
            "fetch", "https://a.com/x", "-u", "bob", "-p", "pw", "--proxy", "10.0.0.1:3128", "-k",
            "--timeout", "15",
        ]))
        .unwrap();
        assert_eq!(opts.username.as_deref(), Some("bob"));
        assert_eq!(opts.password.as_deref(), Some("pw"));
        assert_eq!(opts.proxy.as_deref(), Some("10.0.0.1:3128"));
        assert!(opts.insecure);
        assert_eq!(opts.timeout_secs, Some(15));
        assert_eq!(
            opts.command,
            Command::Fetch {
                url: "https://a.com/x".into()
            }
        );
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(Options::parse(&args(&["status", "abc"])).is_err());
        assert!(Options::parse(&args(&["rand", "-3"])).is_err());
        assert!(Options::parse(&args(&["frobnicate"])).is_err());
        assert!(Options::parse(&args(&["email"])).is_err());
        assert!(Options::parse(&args(&["fetch", "http://a.com", "--proxy"])).is_err());
        assert!(Options::parse(&args(&["fetch", "http://a.com", "-u", "bob"])).is_err());
    }

    #[test]
    fn test_double_dash_ends_flags() {
        let opts = Options::parse(&args(&["-v", "join", "--", "http://a.com", "-draft"])).unwrap();
        assert!(opts.verbose);
        assert_eq!(
            opts.command,
            Command::Join {
                origin: "http://a.com".into(),
                path: "-draft".into()
            }
        );

        let opts = Options::parse(&args(&["split", "--", "--help"])).unwrap();
        assert_eq!(
            opts.command,
            Command::Split {
                text: "--help".into()
            }
        );
        assert!(Options::parse(&args(&["join", "http://a.com", "-draft"])).is_err());
    }

    #[test]
    fn test_empty_proxy_flag_means_no_proxy() {
        let opts = Options::parse(&args(&["fetch", "http://a.com", "--proxy", ""])).unwrap();
        assert_eq!(opts.proxy, None);
        let opts = Options::parse(&args(&["fetch", "http://a.com", "-x", "  "])).unwrap();
        assert_eq!(opts.proxy, None);
    }

    #[test]
    fn test_env_fills_missing_values() {
        let env: HashMap<&str, &str> = [
            (ENV_USERNAME, "env-user"),
            (ENV_PASSWORD, "env-pass"),
            (ENV_PROXY, "proxy:8080"),
            (ENV_TIMEOUT, " 30 "),
        ]
        .into_iter()
        .collect();

        let mut opts = Options::parse(&args(&["fetch", "http://a.com"])).unwrap();
        opts.apply_env(|k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(opts.username.as_deref(), Some("env-user"));
        assert_eq!(opts.password.as_deref(), Some("env-pass"));
        assert_eq!(opts.proxy.as_deref(), Some("proxy:8080"));
        assert_eq!(opts.timeout_secs, Some(30));
    }

    #[test]
    fn test_flags_win_over_env() {
        let env: HashMap<&str, &str> = [(ENV_USERNAME, "env-user"), (ENV_PASSWORD, "env-pass")]
            .into_iter()
            .collect();

        let mut opts =
            Options::parse(&args(&["fetch", "http://a.com", "-u", "cli", "-p", "pw"])).unwrap();
        opts.apply_env(|k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(opts.username.as_deref(), Some("cli"));
        assert_eq!(opts.password.as_deref(), Some("pw"));
    }

    #[test]
    fn test_env_credentials_need_both_halves() {
        let mut opts = Options::parse(&args(&["fetch", "http://a.com"])).unwrap();
        opts.apply_env(|k| (k == ENV_USERNAME).then(|| "lonely".to_string()))
            .unwrap();
        assert!(opts.username.is_none());
        assert!(opts.password.is_none());
    }
}
