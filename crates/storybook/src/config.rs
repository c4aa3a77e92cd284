//! Command line and environment configuration.

use clap::Parser;

pub const DEFAULT_PORT: u16 = 3030;

#[derive(Parser, Debug, Clone)]
#[command(name = "storybook", about = "Visual component explorer for the ui crate", version)]
pub struct Opts {
    /// Address to bind when no socket is handed over by systemfd
    #[arg(long, env = "STORYBOOK_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind when no socket is handed over by systemfd
    #[arg(long, env = "STORYBOOK_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Don't open a browser window on startup
    #[arg(long, env = "STORYBOOK_NO_OPEN")]
    pub no_open: bool,
}

impl Opts {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = Opts::try_parse_from(["storybook"]).unwrap();
        assert_eq!(opts.port, DEFAULT_PORT);
        assert_eq!(opts.host, "127.0.0.1");
        assert!(!opts.no_open);
        assert_eq!(opts.url(), "http://127.0.0.1:3030");
    }

    #[test]
    fn test_flags() {
        let opts =
            Opts::try_parse_from(["storybook", "--host", "0.0.0.0", "--port", "8080", "--no-open"])
                .unwrap();
        assert_eq!(opts.url(), "http://0.0.0.0:8080");
        assert!(opts.no_open);
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Opts::try_parse_from(["storybook", "--port", "http"]).is_err());
    }
}
