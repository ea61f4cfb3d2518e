//! `showroom`: drives the client app against a running listing API and prints
//! the markup it renders.

use showroom::app::page::ids;
use showroom::app::page::SelectOption;
use showroom::app::{App, CatalogController};
use showroom::infra::logging;
use showroom::{DomEvent, SiteConfig, Target};
use std::sync::Arc;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: showroom <command>\n\
         \n\
         Commands:\n\
           snapshot                 Bootstrap the page and print featured + inventory markup\n\
           car <id>                 Print the detail markup for one car\n\
           search [key=value ...]   Submit the filter form and print the results markup\n\
                                    keys: make, model, fuel_type, min_price, max_price, year\n\
         \n\
         Env vars:\n\
           SHOWROOM_ORIGIN (default http://127.0.0.1:8000), SHOWROOM_STATIC_IMAGES, RUST_LOG\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();
    let config = SiteConfig::from_env();
    tracing::debug!(origin = %config.origin, "config loaded");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    match args[0].as_str() {
        "snapshot" => snapshot(config).await,
        "car" => {
            let id = match args.get(1).map(|s| s.parse::<i64>()) {
                Some(Ok(id)) => id,
                _ => usage_and_exit(),
            };
            car(config, id).await
        }
        "search" => search(config, &args[1..]).await,
        _ => usage_and_exit(),
    }
}

async fn snapshot(config: SiteConfig) -> anyhow::Result<()> {
    let app = Arc::new(App::showroom(config)?);

    let starter = app.clone();
    logging::spawn_logged("bootstrap", async move { starter.start().await }).await?;

    let page = app.context().page.lock().await;
    let makes = page
        .select(ids::MAKE_SELECT)
        .map(|s| s.values().into_iter().filter(|v| !v.is_empty()).collect::<Vec<_>>().join(", "))
        .unwrap_or_default();
    println!("<!-- makes: {} -->", makes);
    for container in [ids::FEATURED_CARS, ids::ALL_CARS] {
        println!("<!-- #{} -->", container);
        println!("{}", page.inner_html(container).unwrap_or_default());
    }
    Ok(())
}

async fn car(config: SiteConfig, id: i64) -> anyhow::Result<()> {
    let app = App::showroom(config)?;
    let catalog = CatalogController::new(app.context().clone());
    match catalog.car_detail(id).await {
        Some(html) => {
            println!("{}", html);
            Ok(())
        }
        None => Err(anyhow::anyhow!("Car {} could not be loaded", id)),
    }
}

async fn search(config: SiteConfig, pairs: &[String]) -> anyhow::Result<()> {
    let app = App::showroom(config)?;
    app.start().await;

    {
        let mut page = app.context().page.lock().await;
        for pair in pairs {
            let Some((key, value)) = pair.split_once('=') else {
                usage_and_exit();
            };
            let id = match key {
                "make" => ids::MAKE_SELECT,
                "model" => ids::MODEL_SELECT,
                "fuel_type" => ids::FUEL_TYPE,
                "min_price" => ids::MIN_PRICE,
                "max_price" => ids::MAX_PRICE,
                "year" => ids::MIN_YEAR,
                _ => usage_and_exit(),
            };
            if id == ids::MAKE_SELECT || id == ids::MODEL_SELECT {
                // Selects only take values the API offered; options are
                // widened here so the CLI can pass any text through.
                let select = page.select_mut(id);
                if !select.select(value) {
                    select.options.push(SelectOption::new(value, value));
                    select.select(value);
                }
            } else {
                page.set_input_value(id, value);
            }
        }
    }

    app.dispatch(DomEvent::click(Target::SearchButton)).await;
    let html = app.context().inner_html(ids::SEARCH_RESULTS).await.unwrap_or_default();
    println!("{}", html);
    app.teardown().await;
    Ok(())
}

