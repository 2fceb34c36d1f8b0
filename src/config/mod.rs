mod parser;
use crate::constants::*;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::net::IpAddr;

pub use parser::load_functions_config;

/// Top-level configuration for the functions host
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FunctionsConfig {
    /// Options applied to every registered function collectively
    #[serde(default)]
    pub global: GlobalOptions,
    /// Listen address of the HTTP server
    #[serde(default)]
    pub server: ServerOptions,
    /// Registered functions, served under `/{name}`
    #[serde(default = "default_functions")]
    pub functions: Vec<FunctionSpec>,
}

impl Default for FunctionsConfig {
    fn default() -> Self {
        Self {
            global: GlobalOptions::default(),
            server: ServerOptions::default(),
            functions: default_functions(),
        }
    }
}

/// Options shared by all functions
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GlobalOptions {
    /// Maximum number of invocations running at the same time
    #[serde(default = "default_max_instances")]
    pub max_instances: usize,
}

impl Default for GlobalOptions {
    fn default() -> Self {
        Self {
            max_instances: DEFAULT_MAX_INSTANCES,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerOptions {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// A single HTTP-triggered function
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FunctionSpec {
    /// Registered name, also the first path segment
    pub name: String,
    /// Message recorded once per invocation
    pub log_message: String,
    /// Body sent back on every invocation
    #[serde(default = "default_response_body")]
    pub response_body: String,
}

impl FunctionSpec {
    pub fn new(
        name: impl Into<String>,
        log_message: impl Into<String>,
        response_body: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            log_message: log_message.into(),
            response_body: response_body.into(),
        }
    }
}

/// The two functions registered when no configuration says otherwise
pub fn default_functions() -> Vec<FunctionSpec> {
    vec![
        FunctionSpec::new(
            HELLO_WORLD_NAME,
            HELLO_WORLD_LOG_MESSAGE,
            DEFAULT_RESPONSE_BODY,
        ),
        FunctionSpec::new(
            MY_FUNCTION_NAME,
            MY_FUNCTION_LOG_MESSAGE,
            DEFAULT_RESPONSE_BODY,
        ),
    ]
}

fn default_max_instances() -> usize {
    DEFAULT_MAX_INSTANCES
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_response_body() -> String {
    DEFAULT_RESPONSE_BODY.to_string()
}

impl FunctionsConfig {
    /// Replaces configured values with the ones given on the command line or environment.
    pub fn apply_overrides(
        &mut self,
        host: Option<String>,
        port: Option<u16>,
        max_instances: Option<usize>,
    ) {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        if let Some(max_instances) = max_instances {
            self.global.max_instances = max_instances;
        }
    }

    /// Checks that the configuration can be served.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if:
    /// * `max_instances` is zero
    /// * the host is empty
    /// * no function is registered
    /// * a function name is empty, has characters other than `[A-Za-z0-9_-]`,
    ///   or is registered twice
    ///
    /// Returns `Error::InvalidAddress` if the host is neither an IP address
    /// nor a well-formed host name.
    pub fn validate(&self) -> Result<()> {
        if self.global.max_instances == 0 {
            return Err(Error::InvalidConfig(
                "max_instances must be at least 1".to_string(),
            ));
        }
        if self.server.host.trim().is_empty() {
            return Err(Error::InvalidConfig("server host is empty".to_string()));
        }
        if !is_valid_host(&self.server.host) {
            return Err(Error::InvalidAddress(format!(
                "{}:{}",
                self.server.host, self.server.port
            )));
        }
        if self.functions.is_empty() {
            return Err(Error::InvalidConfig(
                "at least one function must be registered".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for function in &self.functions {
            if function.name.is_empty() {
                return Err(Error::InvalidConfig("function name is empty".to_string()));
            }
            if !function
                .name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            {
                return Err(Error::InvalidConfig(format!(
                    "function name '{}' may only contain letters, digits, '-' and '_'",
                    function.name
                )));
            }
            if !seen.insert(function.name.as_str()) {
                return Err(Error::InvalidConfig(format!(
                    "function '{}' is registered more than once",
                    function.name
                )));
            }
        }
        Ok(())
    }
}

fn is_valid_host(host: &str) -> bool {
    if host.parse::<IpAddr>().is_ok() {
        return true;
    }
    host.len() <= 253
        && host.split('.').all(|label| {
            !label.is_empty()
                && label.len() <= 63
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}
