use clap::{Parser, Subcommand};
use serde_json::Value;
use url::Url;

#[derive(Parser)]
#[command(name = "relay-cli")]
#[command(about = "Query a running Brasil Relay", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: Url,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Relay version and upstream
    Status,
    /// First banks in the central bank registry
    Banks,
    /// USD exchange rate
    Cambio,
    /// Address for a postal code
    Cep { cep: String },
    /// Company registry record
    Cnpj { cnpj: String },
    /// First registered brokers
    Corretoras,
    /// Weather forecast for a CPTEC city code
    Cptec { city_code: String },
    /// State and cities for an area code
    Ddd { ddd: String },
    /// National holidays for a year
    Feriados { ano: String },
    /// Vehicle prices for a FIPE code
    Fipe { codigo_fipe: String },
    /// Name frequency by decade
    Nomes { nome: String },
    /// Book metadata
    Isbn { isbn: String },
    /// Mercosur tariff classification
    Ncm { code: String },
    /// First PIX participants
    Pix,
    /// .br domain registration status
    Registrobr { domain: String },
    /// Official interest rates
    Taxas,
}

impl Commands {
    /// Relay path segments for this command; keys are left unencoded.
    fn segments(&self) -> Vec<&str> {
        match self {
            Commands::Status => vec!["status"],
            Commands::Banks => vec!["api", "banks"],
            Commands::Cambio => vec!["api", "cambio"],
            Commands::Cep { cep } => vec!["api", "cep", cep],
            Commands::Cnpj { cnpj } => vec!["api", "cnpj", cnpj],
            Commands::Corretoras => vec!["api", "corretoras"],
            Commands::Cptec { city_code } => vec!["api", "cptec", city_code],
            Commands::Ddd { ddd } => vec!["api", "ddd", ddd],
            Commands::Feriados { ano } => vec!["api", "feriados", ano],
            Commands::Fipe { codigo_fipe } => vec!["api", "fipe", codigo_fipe],
            Commands::Nomes { nome } => vec!["api", "ibge", "nomes", nome],
            Commands::Isbn { isbn } => vec!["api", "isbn", isbn],
            Commands::Ncm { code } => vec!["api", "ncm", code],
            Commands::Pix => vec!["api", "pix"],
            Commands::Registrobr { domain } => vec!["api", "registrobr", domain],
            Commands::Taxas => vec!["api", "taxas"],
        }
    }

    /// Full relay URL, with every segment percent-encoded onto `base`.
    fn url(&self, base: &Url) -> Result<Url, Box<dyn std::error::Error>> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| format!("cannot append a path to {base}"))?
            .pop_if_empty()
            .extend(self.segments());
        Ok(url)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let url = cli.command.url(&cli.url)?;
    let res = client.get(url).send().await?;
    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let json: Value = res.json().await?;

    if !status.is_success() {
        let message = json["message"].as_str().unwrap_or("no message");
        eprintln!("Error: relay returned status {status}: {message}");
        std::process::exit(1);
    }

    println!("{}", serde_json::to_string_pretty(&json["data"])?);
    Ok(())
}
