use clap::Parser;
use serde_json::json;
use std::path::PathBuf;
use vra_entitlements::api::config::VraConfig;
use vra_entitlements::Vra;

const RESOURCE: &str = "vra_catalog_source_entitlement";

#[derive(Parser, Debug)]
#[command(author, version, about = "Create, read and delete a catalog source entitlement", long_about = None)]
struct Cli {
    /// YAML file with connection settings; VRA_* variables override it
    #[arg(long, env = "VRA_CONFIG")]
    config: Option<PathBuf>,

    catalog_source_id: String,

    project_id: String,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => VraConfig::from_file(path),
        None => VraConfig::from_env(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let mut vra = Vra::new(config).expect("client");
    vra.login().await.expect("login");

    let state = vra
        .create(
            RESOURCE,
            json!({"catalog_source_id": cli.catalog_source_id, "project_id": cli.project_id}),
        )
        .await
        .expect("create");
    println!("Created: {}", serde_json::to_string_pretty(&state).unwrap());

    match vra.read(RESOURCE, state.clone()).await.expect("read") {
        Some(current) => println!("Read: {}", current["definition"]),
        None => println!("Entitlement disappeared"),
    }

    vra.delete(RESOURCE, state).await.expect("delete");
    println!("Deleted");
}
