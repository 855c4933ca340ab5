//! `cinema-tickets`: run one ticket purchase from a JSON order.
//!
//! ```text
//! cinema-tickets [--config <path>] <order.json | ->
//! ```
//!
//! Prints the purchase summary as JSON on success. A rejected order prints the
//! reason on stderr and exits with status 1.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, bail};

use cinema_infra::{CinemaConfig, LoggingSeatReservationService, LoggingTicketPaymentService};
use cinema_tickets::{PurchaseOrder, PurchaseSummary, PurchaseTicketsError, TicketService};

const USAGE: &str = "usage: cinema-tickets [--config <path>] <order.json | ->";

#[derive(Debug, PartialEq, Eq)]
struct Args {
    config: Option<PathBuf>,
    order: OrderSource,
}

#[derive(Debug, PartialEq, Eq)]
enum OrderSource {
    Stdin,
    File(PathBuf),
}

fn parse_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<Args> {
    let mut config = None;
    let mut order = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                config = Some(PathBuf::from(path));
            }
            "-" if order.is_none() => order = Some(OrderSource::Stdin),
            flag if flag.starts_with("--") => bail!("unknown option {flag}\n{USAGE}"),
            path if order.is_none() => order = Some(OrderSource::File(PathBuf::from(path))),
            extra => bail!("unexpected argument {extra}\n{USAGE}"),
        }
    }

    let order = order.with_context(|| format!("missing order\n{USAGE}"))?;
    Ok(Args { config, order })
}

fn read_order(source: &OrderSource) -> anyhow::Result<PurchaseOrder> {
    let raw = match source {
        OrderSource::Stdin => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("reading order from stdin")?;
            raw
        }
        OrderSource::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading order file {}", path.display()))?,
    };
    serde_json::from_str(&raw).context("parsing order JSON")
}

fn execute(
    config: &CinemaConfig,
    order: &PurchaseOrder,
) -> Result<PurchaseSummary, PurchaseTicketsError> {
    let service = TicketService::new(
        config.validator(),
        config.prices,
        LoggingSeatReservationService,
        LoggingTicketPaymentService,
    );
    service.purchase_tickets(order)
}

fn run() -> anyhow::Result<ExitCode> {
    let args = parse_args(std::env::args().skip(1))?;
    let config = CinemaConfig::load(args.config.as_deref())?;
    let order = read_order(&args.order)?;

    match execute(&config, &order) {
        Ok(summary) => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(PurchaseTicketsError::Invalid(err)) => {
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}

fn main() -> ExitCode {
    cinema_observability::init();

    match run() {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "cinema-tickets failed");
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
