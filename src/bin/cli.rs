use userprobe::{HttpUserClient, UserEndpoint, UserRecord, ProbeResult, DEFAULT_HOST};

use colored::Colorize;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(version, about, propagate_version = true)]
struct Cli {
    /// URL every request is sent to
    #[clap(long, value_parser, default_value = DEFAULT_HOST)]
    host: String,

    /// Request to send
    #[clap(subcommand)]
    action: Subcommands,
}

#[derive(Debug, Subcommand)]
enum Subcommands {
    /// POST a user record
    Post(Record),
    /// GET the endpoint and print the body
    Get(Get),
    /// PUT a user record
    Put(Record),
    /// DELETE on the endpoint
    Delete
}

#[derive(Args, Debug)]
struct Record {
    #[clap(short, long, value_parser, default_value = "username")]
    username: String,

    #[clap(short, long, value_parser, default_value = "123456")]
    password: String
}

impl Record {
    fn payload(&self) -> ProbeResult<String> {
        UserRecord::new(&self.username, &self.password).to_payload()
    }
}

#[derive(Args, Debug)]
struct Get {
    /// Parse the body as JSON and pretty-print it
    #[clap(long)]
    parse: bool
}

impl Get {
    fn render(&self, body: String) -> ProbeResult<String> {
        if !self.parse {
            return Ok(body);
        }
        let value: serde_json::Value = serde_json::from_str(&body)?;
        return Ok(serde_json::to_string_pretty(&value)?);
    }
}

fn run(args: Cli) -> ProbeResult<()> {
    let client = HttpUserClient::new(&args.host);

    match args.action {
        Subcommands::Post(record) => client.send_post(&record.payload()?)?,
        Subcommands::Get(get) => {
            let body = client.send_get()?;
            println!("{}", get.render(body)?);
        },
        Subcommands::Put(record) => client.send_put(&record.payload()?)?,
        Subcommands::Delete => client.delete()?
    }
    Ok(())
}

fn main() {
    let args = Cli::parse();
    userprobe::init_logging();

    if let Err(err) = run(args) {
        eprintln!("{}: {}", "error".bright_red().bold(), err);
        std::process::exit(1);
    }
}
