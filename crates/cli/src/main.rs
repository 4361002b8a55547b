//! `QuickCart` CLI - drive the checkout flow from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # List delivery cities and their tier prices
//! quickcart cities
//!
//! # Show the demo cart
//! quickcart items
//!
//! # Price the cart for a city and tier
//! quickcart quote --city 1 --tier regular
//!
//! # Place an order
//! quickcart checkout --city 1 --tier regular \
//!     --first-name Jane --last-name Doe --email jane@doe.com
//!
//! # Clean a value the way a form field would
//! quickcart sanitize name "<script>John</script>"
//!
//! # Validate customer details
//! quickcart validate --first-name "" --last-name Doe --email bad
//! ```
//!
//! # Environment Variables
//!
//! See `quickcart_checkout::config` for the `QUICKCART_*` variables.
//! `RUST_LOG` controls log output and `SENTRY_DSN` enables error tracking.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Args, Parser, Subcommand};
use quickcart_checkout::CheckoutConfig;
use quickcart_checkout::security::SanitizeKind;
use quickcart_core::{CityId, DeliveryTier};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::CliError;

#[derive(Parser)]
#[command(name = "quickcart")]
#[command(author, version, about = "QuickCart checkout tools")]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List delivery cities
    Cities,
    /// List the items in the demo cart
    Items,
    /// Price the demo cart for a city and delivery tier
    Quote {
        #[command(flatten)]
        delivery: DeliveryArgs,
    },
    /// Run a full checkout against the mock backend
    Checkout {
        #[command(flatten)]
        delivery: DeliveryArgs,

        #[command(flatten)]
        customer: CustomerArgs,

        /// Pre-fill missing customer fields from the demo user
        #[arg(long)]
        as_demo_user: bool,
    },
    /// Sanitize a value as a form field of the given kind
    Sanitize {
        /// Field kind (`text`, `email`, `name`, `phone`, `zip`)
        kind: SanitizeKind,

        /// Raw input
        input: String,
    },
    /// Validate customer and shipping details
    Validate {
        #[command(flatten)]
        customer: CustomerArgs,
    },
}

#[derive(Args)]
struct DeliveryArgs {
    /// City id (see `quickcart cities`)
    #[arg(short, long)]
    city: CityId,

    /// Delivery tier (`fast`, `regular`, `slow`)
    #[arg(short, long)]
    tier: DeliveryTier,
}

#[derive(Args)]
struct CustomerArgs {
    #[arg(long)]
    first_name: Option<String>,

    #[arg(long)]
    last_name: Option<String>,

    #[arg(long)]
    email: Option<String>,

    #[arg(long)]
    phone: Option<String>,

    #[arg(long)]
    street: Option<String>,

    #[arg(long)]
    apartment: Option<String>,

    #[arg(long)]
    zip: Option<String>,
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &CheckoutConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    if guard.is_enabled() {
        tracing::info!("Sentry initialized");
    }

    Some(guard)
}

/// Map tracing levels to Sentry: errors and warnings become events, the rest
/// breadcrumbs.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
#[allow(clippy::print_stderr)]
async fn main() {
    let config = match CheckoutConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(2);
        }
    };

    // Sentry must be initialized before the tracing subscriber
    let _sentry_guard = init_sentry(&config);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "quickcart_checkout=info,quickcart_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli, &config).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: &CheckoutConfig) -> Result<(), CliError> {
    let json = cli.json;
    match cli.command {
        Commands::Cities => commands::catalog::cities(config, json).await,
        Commands::Items => commands::catalog::items(config, json).await,
        Commands::Quote { delivery } => {
            commands::checkout::quote(config, delivery.city, delivery.tier, json).await
        }
        Commands::Checkout {
            delivery,
            customer,
            as_demo_user,
        } => {
            let request = commands::checkout::CheckoutRequest {
                city: delivery.city,
                tier: delivery.tier,
                form: customer.into_form(),
                as_demo_user,
            };
            commands::checkout::place(config, request, json).await
        }
        Commands::Sanitize { kind, input } => {
            commands::inspect::sanitize(kind, &input);
            Ok(())
        }
        Commands::Validate { customer } => commands::inspect::validate(customer.into_form(), json),
    }
}

impl CustomerArgs {
    fn into_form(self) -> commands::FormInput {
        commands::FormInput {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            street: self.street,
            apartment: self.apartment,
            zip_code: self.zip,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_quote() {
        let cli = Cli::try_parse_from(["quickcart", "quote", "--city", "2", "--tier", "slow"]);
        let Ok(Cli {
            command: Commands::Quote { delivery },
            json: false,
        }) = cli
        else {
            panic!("expected quote command");
        };
        assert_eq!(delivery.city, CityId::new(2));
        assert_eq!(delivery.tier, DeliveryTier::Slow);
    }

    #[test]
    fn test_parse_rejects_unknown_tier() {
        assert!(Cli::try_parse_from(["quickcart", "quote", "-c", "1", "-t", "overnight"]).is_err());
    }
}
