use cheeseria_sdk::{CatalogClient, Item, ItemInput, Storefront};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cheeseria-cli")]
#[command(about = "Browse and manage the Cheeseria catalog", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every item as JSON
    List,
    /// Show a single item
    Get { id: u64 },
    /// Add an item
    Create(ItemArgs),
    /// Replace every field of an item
    Update {
        id: u64,
        #[command(flatten)]
        item: ItemArgs,
    },
    /// Remove an item
    Delete { id: u64 },
    /// Render the catalog gallery
    Gallery,
    /// Compute the price of a weight of one item
    Calc {
        #[arg(long)]
        item: Option<u64>,
        /// Weight in kilograms
        #[arg(long, default_value = "")]
        weight: String,
    },
}

#[derive(Args)]
struct ItemArgs {
    #[arg(long)]
    name: String,
    /// Price per kilogram
    #[arg(long)]
    unit_price: f64,
    #[arg(long)]
    color: String,
    #[arg(long)]
    image_ref: String,
}

impl From<ItemArgs> for ItemInput {
    fn from(args: ItemArgs) -> Self {
        ItemInput {
            name: args.name,
            unit_price: args.unit_price,
            color: args.color,
            image_ref: args.image_ref,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    cheeseria::observability::logging::init_tracing("warn");

    let cli = Cli::parse();
    let client = CatalogClient::new(&cli.url);

    match cli.command {
        Commands::List => print_items(&client.list_items().await?),
        Commands::Get { id } => match client.get_item(id).await {
            Ok(item) => print_items(&[item]),
            Err(e) if e.is_not_found() => eprintln!("Item {id} not found"),
            Err(e) => return Err(e.into()),
        },
        Commands::Create(args) => {
            let item = client.create_item(&args.into()).await?;
            print_items(&[item]);
        }
        Commands::Update { id, item } => match client.update_item(id, &item.into()).await {
            Ok(item) => print_items(&[item]),
            Err(e) if e.is_not_found() => eprintln!("Item {id} not found"),
            Err(e) => return Err(e.into()),
        },
        Commands::Delete { id } => {
            client.delete_item(id).await?;
            println!("Deleted item {id}");
        }
        Commands::Gallery => {
            let storefront = Storefront::bootstrap(client).await;
            print!("{}", storefront.render());
        }
        Commands::Calc { item, weight } => {
            let mut storefront = Storefront::bootstrap(client).await;
            storefront.calculator.select(item);
            storefront.calculator.set_weight(weight);
            storefront.calculator.calculate();
            print!("{}", storefront.render());
        }
    }

    Ok(())
}

fn print_items(items: &[Item]) {
    for item in items {
        match serde_json::to_string_pretty(item) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Failed to format item {}: {}", item.id, e),
        }
    }
}
