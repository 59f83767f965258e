use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const LISTEN_ADDR_ENV: &str = "SNIPBIN_LISTEN_ADDR";
pub const DATA_DIR_ENV: &str = "SNIPBIN_DATA_DIR";
pub const LATEST_LIMIT_ENV: &str = "SNIPBIN_LATEST_LIMIT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_DATA_DIR: &str = "snippets";
pub const DEFAULT_LATEST_LIMIT: usize = 10;

#[derive(Debug, Parser)]
#[command(name = "snipbin")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Directory holding one JSON record file per snippet. Created on
    /// startup if absent.
    #[arg(long, env = DATA_DIR_ENV, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// How many snippets the latest-snippets listing returns at most.
    #[arg(long, env = LATEST_LIMIT_ENV, default_value_t = DEFAULT_LATEST_LIMIT)]
    pub latest_limit: usize,
}
