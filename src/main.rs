use clap::Parser;
use starw::config::cli::{ClientArgs, Command, ServeArgs};
use starw::server::{self, AppState};
use starw::utils::logger;
use starw::{Cli, HttpPeopleSource, NormalizedPerson, PeopleService, StarwApiClient};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI args: {:?}", cli);

    let outcome = match &cli.command {
        Command::Serve(args) => run_server(&cli, args).await,
        Command::List(client) => list_people(client).await,
        Command::Show { id, client } => show_person(*id, client).await,
    };

    if let Err(e) = &outcome {
        tracing::error!("❌ {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run_server(cli: &Cli, args: &ServeArgs) -> starw::Result<()> {
    let config = cli.service_config(args)?;
    tracing::info!(
        "Starting starw: upstream {} ({}), max pages {:?}",
        config.upstream_base_url,
        config.collection,
        config.max_pages
    );

    let source = HttpPeopleSource::from_config(&config)?;
    let people = PeopleService::from_config(Arc::new(source), &config);
    server::serve(config.socket_addr()?, AppState::new(people)).await
}

async fn list_people(args: &ClientArgs) -> starw::Result<()> {
    let client = StarwApiClient::new(reqwest::Client::new(), &args.api);
    let people = client.list_people().await?;
    for person in &people {
        print_person(person);
    }
    println!("{} people", people.len());
    Ok(())
}

async fn show_person(id: u32, args: &ClientArgs) -> starw::Result<()> {
    let client = StarwApiClient::new(reqwest::Client::new(), &args.api);
    let person = client.get_person(&id.to_string()).await?;
    print_person(&person);
    Ok(())
}

fn print_person(person: &NormalizedPerson) {
    println!(
        "{:>4}  {:<24} height: {:<8} born: {}",
        person.id, person.name, person.height, person.birth_year
    );
}
