use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Product to search for right away
    pub query: Option<String>,

    /// Ask the advisor this question about the search results, print the answer and exit
    #[arg(short, long, requires = "query")]
    pub ask: Option<String>,

    /// Backend base URL (overrides SHOPSCOUT_API_URL and the config file)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Log session activity to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
