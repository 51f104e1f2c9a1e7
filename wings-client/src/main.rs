//! `wings` — command-line front-end for the Wings Cafe store

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use shared::models::canonical_category;
use shared::numeric::{parse_adjustment, parse_price, parse_quantity, parse_stock};
use shared::{ProductInput, RecordId};
use wings_client::{CafeService, ClientConfig, ClientError, NetworkHttpClient, image, logger, render};

#[derive(Parser, Debug)]
#[command(name = "wings", author, version, about = "Inventory and sales for Wings Cafe")]
struct Cli {
    /// Base URL of the products/sales store
    #[arg(long, env = "WINGS_API_URL")]
    api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "WINGS_TIMEOUT_SECS")]
    timeout: Option<u64>,

    /// Log level when RUST_LOG is not set
    #[arg(long, env = "WINGS_LOG_LEVEL")]
    log_level: Option<String>,

    /// Console logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Also write daily rolling log files to this directory
    #[arg(long, env = "WINGS_LOG_DIR")]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Products grouped by menu section with stock status
    Dashboard,
    /// Product management
    #[command(subcommand)]
    Products(ProductsCommand),
    /// Stock levels and adjustments
    #[command(subcommand)]
    Stock(StockCommand),
    /// Sales records
    #[command(subcommand)]
    Sales(SalesCommand),
    /// Sales reports
    Report {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
enum ProductsCommand {
    List,
    Add(ProductFields),
    /// Replace a product; unspecified fields keep their current value
    Update {
        id: RecordId,
        #[command(flatten)]
        fields: ProductFields,
    },
    Delete {
        id: RecordId,
    },
    /// Attach an image file or URL to a product
    Image {
        id: RecordId,
        /// Local image file, or an http(s) URL
        source: String,
    },
}

#[derive(Args, Debug, Default)]
struct ProductFields {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    price: Option<String>,
    #[arg(long)]
    quantity: Option<String>,
}

#[derive(Subcommand, Debug)]
enum StockCommand {
    List,
    /// Add or remove stock, e.g. `adjust 3 -2`
    Adjust {
        id: RecordId,
        #[arg(allow_hyphen_values = true)]
        change: String,
    },
}

#[derive(Subcommand, Debug)]
enum SalesCommand {
    List,
    Record {
        id: RecordId,
        quantity: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(url) = cli.api_url.clone() {
        config.base_url = url;
    }
    if let Some(timeout) = cli.timeout {
        config = config.with_timeout(timeout);
    }
    if let Some(level) = cli.log_level.clone() {
        config = config.with_log_level(level);
    }
    if cli.log_json {
        config = config.with_log_json(true);
    }
    if let Some(dir) = cli.log_dir.clone() {
        config = config.with_log_dir(dir);
    }

    let _guard = match logger::init_logger(&config.log_level, config.log_json, config.log_dir.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            None
        }
    };

    match run(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_validation() => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
        Err(e) => {
            tracing::error!(error = %e, "Request failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, config: &ClientConfig) -> Result<(), ClientError> {
    let http = NetworkHttpClient::new(config)?;
    let mut service = CafeService::new(http);
    tracing::debug!(base_url = %config.base_url, "Loading collections");
    let summary = service.refresh().await;
    if !summary.is_complete() {
        tracing::warn!(
            products_loaded = summary.products_loaded,
            sales_loaded = summary.sales_loaded,
            "Showing partial data"
        );
        eprintln!("Warning: some data could not be loaded; results may be incomplete");
    }

    match command {
        Command::Dashboard => print!("{}", render::dashboard_view(&service.shelves())),
        Command::Report { json } => {
            let report = service.report();
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render::report_view(&report));
            }
        }
        Command::Products(cmd) => products(&mut service, cmd).await?,
        Command::Stock(StockCommand::List) => print!("{}", render::stock_table(service.store().products())),
        Command::Stock(StockCommand::Adjust { id, change }) => {
            let delta = parse_adjustment(&change)?;
            let product = service.adjust_stock(&id, delta).await?;
            println!("{}: {} in stock", product.name, product.quantity);
        }
        Command::Sales(SalesCommand::List) => print!("{}", render::sales_table(service.store().sales())),
        Command::Sales(SalesCommand::Record { id, quantity }) => {
            let quantity = parse_quantity(&quantity)?;
            let sale = service.record_sale(&id, quantity).await?;
            println!(
                "Sold {} x {} for {}",
                sale.quantity,
                sale.product_name,
                shared::format_money(sale.total)
            );
        }
    }
    Ok(())
}

async fn products(service: &mut CafeService<NetworkHttpClient>, cmd: ProductsCommand) -> Result<(), ClientError> {
    match cmd {
        ProductsCommand::List => print!("{}", render::products_table(service.store().products())),
        ProductsCommand::Add(fields) => {
            let input = fields.into_input(None)?;
            let product = service.create_product(input).await?;
            println!("Added {} ({})", product.name, product.id);
        }
        ProductsCommand::Update { id, fields } => {
            let current = service.product(&id)?.to_input();
            let input = fields.into_input(Some(current))?;
            let product = service.update_product(&id, input).await?;
            println!("Updated {} ({})", product.name, product.id);
        }
        ProductsCommand::Delete { id } => {
            service.delete_product(&id).await?;
            println!("Deleted {id}");
        }
        ProductsCommand::Image { id, source } => {
            let image = if source.starts_with("http://") || source.starts_with("https://") {
                source
            } else {
                image::image_data_uri(&source)?
            };
            let product = service.set_product_image(&id, image).await?;
            println!("Image set for {}", product.name);
        }
    }
    Ok(())
}

impl ProductFields {
    /// Merge flags over the current record (edit) or an empty form (add)
    fn into_input(self, current: Option<ProductInput>) -> Result<ProductInput, shared::ValidationError> {
        use shared::ValidationError::MissingField;

        let price = match (self.price, &current) {
            (Some(text), _) => parse_price(&text)?,
            (None, Some(c)) => c.price,
            (None, None) => return Err(MissingField("price")),
        };
        let quantity = match (self.quantity, &current) {
            (Some(text), _) => parse_stock(&text)?,
            (None, Some(c)) => c.quantity,
            (None, None) => return Err(MissingField("quantity")),
        };
        let base = current.unwrap_or(ProductInput {
            name: String::new(),
            category: String::new(),
            description: None,
            price,
            quantity,
            image_url: None,
        });

        Ok(ProductInput {
            name: self.name.unwrap_or(base.name),
            category: self.category.map_or(base.category, |c| canonical_category(&c)),
            description: self.description.or(base.description).filter(|d| !d.trim().is_empty()),
            price,
            quantity,
            image_url: base.image_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ValidationError;

    fn fields(price: &str, quantity: &str) -> ProductFields {
        ProductFields {
            name: Some("Muffin".into()),
            category: Some("desserts".into()),
            price: Some(price.into()),
            quantity: Some(quantity.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_add_form_input() {
        let input = fields("15", "4").into_input(None).unwrap();
        assert_eq!(input.price, 15.0);
        assert_eq!(input.quantity, 4);
        assert_eq!(input.category, "Desserts");
    }

    #[test]
    fn test_bad_price_names_the_text() {
        let err = fields("abc", "4").into_input(None).unwrap_err();
        assert_eq!(err, ValidationError::NotANumber { field: "price", text: "abc".into() });
        assert!(!err.to_string().contains("NaN"));
    }

    #[test]
    fn test_bad_quantity_names_the_text() {
        let err = fields("15", "lots").into_input(None).unwrap_err();
        assert_eq!(err, ValidationError::NotANumber { field: "quantity", text: "lots".into() });
    }

    #[test]
    fn test_update_keeps_unset_fields() {
        let current = ProductInput {
            name: "Scone".into(),
            category: "Desserts".into(),
            description: Some("Fresh".into()),
            price: 12.0,
            quantity: 3,
            image_url: Some("https://img/scone.png".into()),
        };
        let update = ProductFields {
            quantity: Some("9".into()),
            ..Default::default()
        };
        let input = update.into_input(Some(current.clone())).unwrap();
        assert_eq!(input, ProductInput { quantity: 9, ..current });
    }

    #[test]
    fn test_add_requires_price_and_quantity() {
        let err = ProductFields::default().into_input(None).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("price"));
    }
}
