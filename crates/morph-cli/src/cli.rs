//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Config Morpher - Resolve paths in config files and bind them to schemas
#[derive(Parser, Debug)]
#[command(name = "morph")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Output encodings for resolved values
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the value at a path
    ///
    /// Examples:
    ///   morph get -f config.toml openai.api_key
    ///   morph get -f config.yaml 'servers[name=db].port'
    Get {
        /// Config file (.toml, .json, .yaml, .yml)
        #[arg(short, long, env = "MORPH_CONFIG")]
        file: PathBuf,

        /// Dotted/bracketed path to resolve
        path: String,

        /// Output encoding
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        output: OutputFormat,
    },

    /// Print the tokens a path splits into, one per line
    Tokens {
        /// Dotted/bracketed path to tokenize
        path: String,
    },

    /// Bind config keys to a schema's parameters
    ///
    /// Examples:
    ///   morph bind -f config.toml -s OpenAI -p api_key -p base_url --start-from openai
    ///   morph bind -f config.toml -s create -p model -p temperature=1.0 --all-params
    Bind {
        /// Config file (.toml, .json, .yaml, .yml)
        #[arg(short, long, env = "MORPH_CONFIG")]
        file: PathBuf,

        /// Schema name reported with the bound parameters
        #[arg(short, long, default_value = "schema")]
        schema: String,

        /// Parameter as NAME or NAME=DEFAULT (DEFAULT is read as JSON,
        /// falling back to a plain string)
        #[arg(short, long = "param", required = true)]
        params: Vec<String>,

        /// Path to the sub-mapping to bind from
        #[arg(long)]
        start_from: Option<String>,

        /// Fail if the config has keys no parameter uses
        #[arg(long)]
        deny_extra: bool,

        /// Include parameters missing from the config, with defaults or null
        #[arg(long)]
        all_params: bool,
    },
}
