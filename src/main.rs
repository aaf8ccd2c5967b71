use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront_catalog::{
    CatalogController,
    actions::{Navigation, ViewMode},
    api::HttpCatalogClient,
    config::ClientConfig,
    controller::ControllerEvent,
    coordinator::FetchOutcome,
    filters::{SortBy, SortOrder, parse_price},
    view::CatalogView,
};

const HELP: &str = "\
commands:
  category <name|all>     browse a category
  search <text>           set the search term (use `submit` to run it)
  submit                  run the search
  sort <createdAt|price|rating|name>
  order <asc|desc>
  price <min|-> <max|->   set the price range (use `apply` to run it)
  apply                   apply the price range
  hide <on|off>           hide out of stock products
  page <n> | next | prev
  view <grid|list>
  open <n> | buy <n> | cart <n> [qty]
  refresh | show | help | quit";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,storefront_catalog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClientConfig::from_env()?;
    let client = HttpCatalogClient::new(&config)?;
    let base_url = client.base_url().to_string();
    let mut controller = CatalogController::with_http_client(client);

    controller.mount();
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            Some(event) = controller.next_event(), if controller.pending() > 0 => match event {
                ControllerEvent::Products(outcome) => {
                    if !outcome.is_discarded() {
                        render(&controller.view(), &base_url);
                    }
                    if let FetchOutcome::Failed { message, .. } = outcome {
                        println!("! {message}");
                    }
                }
                ControllerEvent::Categories { loaded: true } => render(&controller.view(), &base_url),
                ControllerEvent::Categories { loaded: false } => {
                    println!("! categories are unavailable right now");
                }
            },
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if !handle_command(&mut controller, line.trim(), &base_url).await {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Returns `false` when the user asked to quit.
async fn handle_command(controller: &mut CatalogController, line: &str, base_url: &str) -> bool {
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    match command {
        "" => {}
        "quit" | "exit" => return false,
        "help" => println!("{HELP}"),
        "show" => render(&controller.view(), base_url),
        "category" => {
            controller.set_category(if rest.is_empty() { "all" } else { rest });
        }
        "search" => controller.set_search_term(rest),
        "submit" => {
            controller.submit_search();
        }
        "sort" => match rest.parse::<SortBy>() {
            Ok(key) => {
                controller.set_sort_by(key);
            }
            Err(err) => println!("! {}", err.user_message()),
        },
        "order" => match rest.parse::<SortOrder>() {
            Ok(order) => {
                controller.set_sort_order(order);
            }
            Err(err) => println!("! {}", err.user_message()),
        },
        "price" => {
            let mut bounds = rest.split_whitespace().map(|b| if b == "-" { "" } else { b });
            let min = parse_price(bounds.next().unwrap_or(""));
            let max = parse_price(bounds.next().unwrap_or(""));
            let result = min
                .and_then(|min| max.map(|max| (min, max)))
                .and_then(|(min, max)| controller.set_price_range(min, max));
            if let Err(err) = result {
                println!("! {}", err.user_message());
            }
        }
        "apply" => {
            controller.apply_price_filter();
        }
        "hide" => {
            controller.set_hide_out_of_stock(matches!(rest, "on" | "yes" | "true"));
            render(&controller.view(), base_url);
        }
        "page" => match rest.parse::<u32>() {
            Ok(page) if controller.go_to_page(page).is_some() => {}
            _ => println!("! no such page"),
        },
        "next" => {
            if controller.next_page().is_none() {
                println!("! already on the last page");
            }
        }
        "prev" => {
            if controller.previous_page().is_none() {
                println!("! already on the first page");
            }
        }
        "refresh" => {
            controller.refresh();
        }
        "view" => {
            controller.set_view_mode(if rest == "list" {
                ViewMode::List
            } else {
                ViewMode::Grid
            });
            render(&controller.view(), base_url);
        }
        "open" | "buy" | "cart" => {
            let mut args = rest.split_whitespace();
            let view = controller.view();
            let product = args
                .next()
                .and_then(|n| n.parse::<usize>().ok())
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| view.products.get(i));
            let Some(product) = product else {
                println!("! pick a product number from the list");
                return true;
            };
            match command {
                "open" => print_navigation(&controller.open_product(&product.id)),
                "buy" => print_navigation(&controller.buy_now(product)),
                _ => {
                    let quantity = args.next().and_then(|q| q.parse().ok()).unwrap_or(1);
                    let notice = controller.add_to_cart(&product.id, quantity).await;
                    let marker = if notice.is_error() { "!" } else { "+" };
                    println!("{marker} {}", notice.message());
                }
            }
        }
        other => println!("! unknown command '{other}', try `help`"),
    }
    true
}

fn print_navigation(navigation: &Navigation) {
    match navigation {
        Navigation::ProductDetail { id } => println!("-> {} ({id})", navigation.path()),
        Navigation::Checkout { product } => {
            println!("-> {} with {} at ₹{}", navigation.path(), product.name, product.price)
        }
    }
}

fn render(view: &CatalogView, base_url: &str) {
    println!();
    println!("== {} ==", view.heading);
    if !view.categories.is_empty() {
        let names: Vec<String> = view
            .categories
            .iter()
            .map(|c| {
                if c.active {
                    format!("[{}]", c.name)
                } else {
                    c.name.clone()
                }
            })
            .collect();
        println!("categories: {}", names.join(" | "));
    }
    if view.loading {
        println!("Loading products...");
    }
    if let Some(error) = &view.error {
        println!("! {error}");
    }

    for (i, product) in view.products.iter().enumerate() {
        let stars = "★".repeat(product.rating_stars() as usize);
        let discount = product
            .discount
            .filter(|_| product.has_discount())
            .map(|d| format!(" -{d}%"))
            .unwrap_or_default();
        match view.view_mode {
            ViewMode::Grid => println!(
                "{:>3}. {} ₹{}{} {}",
                i + 1,
                product.name,
                product.price,
                discount,
                stars
            ),
            ViewMode::List => println!(
                "{:>3}. {} | {} | ₹{}{} | {}/5 | stock {} | {} | {}",
                i + 1,
                product.name,
                product.brand.as_deref().unwrap_or("-"),
                product.price,
                discount,
                product.rating.unwrap_or(0.0),
                product.stock,
                product.stock_location.as_deref().unwrap_or("-"),
                product.image_url(base_url)
            ),
        }
    }

    let pages = view.page_numbers();
    if !pages.is_empty() {
        let pages: Vec<String> = pages
            .iter()
            .map(|p| {
                if *p == view.pagination.current_page {
                    format!("[{p}]")
                } else {
                    p.to_string()
                }
            })
            .collect();
        println!("pages: {}", pages.join(" "));
    }
    if let Some(summary) = view.results_summary() {
        println!("{summary}");
    }
}
