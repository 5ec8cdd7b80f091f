// # rdns-hook - DNS-01 hook command
//
// Thin integration layer for ACME clients that shell out to a hook program
// to publish and remove DNS-01 challenges. All DNS logic lives in
// `rdns-core` and `rdns-provider`; this binary only:
//
// 1. Reads configuration from environment variables
// 2. Initializes logging
// 3. Builds the provider
// 4. Runs a single command and maps the outcome to an exit code
//
// ## Commands
//
// ```text
// rdns-hook present <domain> <token> <key-auth>
// rdns-hook cleanup <domain> <token> <key-auth>
// rdns-hook timing
// ```
//
// ## Configuration
//
// - `RDNS_API_ENDPOINT`: Base URL of the rdns API (required)
// - `RDNS_API_TOKEN`: API bearer token (required)
// - `RDNS_HTTP_TIMEOUT_SECS`: Per-request timeout, 1-300 (default: 30)
// - `RDNS_STRICT_CLEANUP`: Treat failed deletions as errors (default: false)
// - `RDNS_LOG_LEVEL`: trace, debug, info, warn, error (default: info)
//
// ## Example
//
// ```bash
// export RDNS_API_ENDPOINT=https://dns.example.net/api
// export RDNS_API_TOKEN=your_token
//
// rdns-hook present example.com "$TOKEN" "$KEY_AUTH"
// rdns-hook cleanup example.com "$TOKEN" "$KEY_AUTH"
// ```

use anyhow::Result;
use rdns_core::config::DEFAULT_HTTP_TIMEOUT_SECS;
use rdns_core::{ChallengeProvider, ProviderConfig};
use rdns_provider::RdnsProvider;
use std::env;
use std::process::ExitCode;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

const USAGE: &str = "usage: rdns-hook <present|cleanup> <domain> <token> <key-auth>\n       rdns-hook timing";

/// Exit codes for different termination scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HookExitCode {
    /// Command completed
    Success = 0,
    /// Configuration or usage error
    ConfigError = 1,
    /// The provider reported a failure
    RuntimeError = 2,
}

impl From<HookExitCode> for ExitCode {
    fn from(code: HookExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Command to run
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Present {
        domain: String,
        token: String,
        key_auth: String,
    },
    CleanUp {
        domain: String,
        token: String,
        key_auth: String,
    },
    Timing,
}

impl Command {
    /// Parse the command from arguments (program name excluded)
    fn parse(args: &[String]) -> Result<Self> {
        match args {
            [cmd] if cmd == "timing" => Ok(Command::Timing),
            [cmd, domain, token, key_auth] if cmd == "present" || cmd == "cleanup" => {
                if domain.is_empty() {
                    anyhow::bail!("Domain cannot be empty");
                }
                let (domain, token, key_auth) = (domain.clone(), token.clone(), key_auth.clone());
                if cmd == "present" {
                    Ok(Command::Present {
                        domain,
                        token,
                        key_auth,
                    })
                } else {
                    Ok(Command::CleanUp {
                        domain,
                        token,
                        key_auth,
                    })
                }
            }
            _ => anyhow::bail!("{}", USAGE),
        }
    }

    /// Whether the command talks to the API
    fn needs_provider(&self) -> bool {
        !matches!(self, Command::Timing)
    }
}

/// Application configuration
struct Config {
    api_endpoint: String,
    api_token: String,
    http_timeout_secs: u64,
    strict_cleanup: bool,
    log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through a variable lookup function
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let http_timeout_secs = match lookup("RDNS_HTTP_TIMEOUT_SECS") {
            Some(s) => s.trim().parse().map_err(|_| {
                anyhow::anyhow!("RDNS_HTTP_TIMEOUT_SECS must be a number. Got: {}", s)
            })?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        let strict_cleanup = match lookup("RDNS_STRICT_CLEANUP") {
            Some(s) => parse_bool(&s).ok_or_else(|| {
                anyhow::anyhow!("RDNS_STRICT_CLEANUP must be true or false. Got: {}", s)
            })?,
            None => false,
        };

        Ok(Self {
            api_endpoint: lookup("RDNS_API_ENDPOINT").unwrap_or_default(),
            api_token: lookup("RDNS_API_TOKEN").unwrap_or_default(),
            http_timeout_secs,
            strict_cleanup,
            log_level: lookup("RDNS_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if self.api_endpoint.is_empty() {
            anyhow::bail!(
                "RDNS_API_ENDPOINT is required. \
                Set it via: export RDNS_API_ENDPOINT=https://dns.example.net/api"
            );
        }

        if !self.api_endpoint.starts_with("https://") && !self.api_endpoint.starts_with("http://")
        {
            anyhow::bail!(
                "RDNS_API_ENDPOINT must use HTTP or HTTPS scheme. Got: {}",
                self.api_endpoint
            );
        }

        if self.api_token.is_empty() {
            anyhow::bail!(
                "RDNS_API_TOKEN is required. \
                Set it via: export RDNS_API_TOKEN=your_token"
            );
        }

        if !(1..=300).contains(&self.http_timeout_secs) {
            anyhow::bail!(
                "RDNS_HTTP_TIMEOUT_SECS must be between 1 and 300 seconds. Got: {}",
                self.http_timeout_secs
            );
        }

        parse_level(&self.log_level)?;

        Ok(())
    }

    fn provider_config(&self) -> ProviderConfig {
        ProviderConfig::new(self.api_endpoint.clone(), self.api_token.clone())
            .with_http_timeout_secs(self.http_timeout_secs)
            .with_strict_cleanup(self.strict_cleanup)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

fn parse_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => anyhow::bail!(
            "RDNS_LOG_LEVEL '{}' is not valid. \
            Valid levels: trace, debug, info, warn, error",
            level
        ),
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let command = match Command::parse(&args) {
        Ok(cmd) => cmd,
        Err(e) => {
            eprintln!("{}", e);
            return HookExitCode::ConfigError.into();
        }
    };

    // The timing advice is a constant and needs no credentials
    if !command.needs_provider() {
        let timing = rdns_core::PROPAGATION_TIMING;
        println!(
            "timeout={} interval={}",
            timing.timeout.as_secs(),
            timing.poll_interval.as_secs()
        );
        return HookExitCode::Success.into();
    }

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return HookExitCode::ConfigError.into();
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Configuration validation error: {}", e);
        return HookExitCode::ConfigError.into();
    }

    let log_level = parse_level(&config.log_level).unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return HookExitCode::ConfigError.into();
    }

    let provider = match RdnsProvider::from_config(&config.provider_config()) {
        Ok(provider) => provider,
        Err(e) => {
            error!("Failed to create provider: {}", e);
            return HookExitCode::ConfigError.into();
        }
    };

    let rt = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return HookExitCode::RuntimeError.into();
        }
    };

    rt.block_on(async {
        match run_command(&provider, command).await {
            Ok(()) => HookExitCode::Success,
            Err(e) => {
                error!("Hook failed: {}", e);
                HookExitCode::RuntimeError
            }
        }
    })
    .into()
}

/// Run one provider command
async fn run_command(provider: &dyn ChallengeProvider, command: Command) -> rdns_core::Result<()> {
    match command {
        Command::Present {
            domain,
            token,
            key_auth,
        } => {
            info!("Presenting DNS-01 challenge for {}", domain);
            provider.present(&domain, &token, &key_auth).await
        }
        Command::CleanUp {
            domain,
            token,
            key_auth,
        } => {
            info!("Cleaning up DNS-01 challenge for {}", domain);
            provider.clean_up(&domain, &token, &key_auth).await
        }
        Command::Timing => Ok(()),
    }
}
