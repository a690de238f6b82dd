use clap::Parser;
use gh_proxy_lib::RepoId;

#[derive(Debug, Parser)]
pub struct Args {
    #[clap(
        short = 'u',
        long = "base-url",
        help = "Base URL of the GitHub API or proxy",
        default_value = "http://127.0.0.1:3000"
    )]
    pub base_url: String,

    #[clap(
        short = 'r',
        long = "repo",
        help = "Repository as owner/name",
        default_value = "hsborges/github-proxy-server"
    )]
    pub repo: RepoId,

    #[clap(
        short = 't',
        long = "token",
        help = "GitHub REST API token (usually supplied by the proxy)"
    )]
    pub token: Option<String>,
}
