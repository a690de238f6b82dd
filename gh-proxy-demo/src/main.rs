mod args;

use crate::args::Args;
use anyhow::Result;
use clap::Parser;
use gh_proxy_lib::{write_summary, GitHubClient};
use std::io::{stdout, Write};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    run(&args, &mut stdout()).await
}

async fn run<W>(args: &Args, out: &mut W) -> Result<()>
where
    W: Write,
{
    let github = GitHubClient::new(args.base_url.as_str(), args.token.as_deref())?;

    // Nothing is printed unless the whole repository arrived
    let repo = github.get_repo(&args.repo).await?;

    write_summary(out, &repo)?;
    out.flush()?;

    Ok(())
}
