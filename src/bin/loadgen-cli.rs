use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "loadgen-cli")]
#[command(about = "Management CLI for the synthetic load generator", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service liveness
    Status,
    /// Trigger the CPU busy loop
    Cpu,
    /// Grow the memory accumulator by one chunk
    Memory,
    /// Send an inbound payload of the given size
    Inbound {
        #[arg(short, long, default_value_t = 1024 * 1024)]
        bytes: usize,
    },
    /// Trigger the outbound network probe
    Outbound,
    /// Run one disk write/read/delete cycle
    Disk,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Status => {
            let res = client.get(format!("{}/", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Cpu => {
            let res = client.get(format!("{}/cpu", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Memory => {
            let res = client.get(format!("{}/memory", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Inbound { bytes } => {
            let payload = vec![0u8; bytes];
            let res = client
                .post(format!("{}/network/inbound", cli.url))
                .body(payload)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Outbound => {
            let res = client
                .get(format!("{}/network/outbound", cli.url))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Disk => {
            let res = client.get(format!("{}/disk", cli.url)).send().await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
