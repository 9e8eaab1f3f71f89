use dashboard::state::{ProductForm, ServiceId, UserForm};
use dashboard::{ui, Dashboard};
use dotenvy::dotenv;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

fn main() -> std::process::ExitCode {
    dotenv().ok();
    common::utils::logging::init_logging();

    let rt = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    match rt.block_on(run()) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "dashboard exited with error");
            std::process::ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = configs::DashboardConfig::load()?;
    info!(
        user_service = %cfg.user_service_url,
        product_service = %cfg.product_service_url,
        "starting dashboard"
    );

    let mut dash = Dashboard::new(&cfg);
    dash.refresh().await;
    println!("{}", ui::render(dash.state()));
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else { continue };
        let rest: Vec<&str> = parts.collect();

        match cmd {
            "quit" | "exit" => break,
            "help" => {
                print_help();
                continue;
            }
            "users" => dash.select_tab(ServiceId::Users).await,
            "products" => dash.select_tab(ServiceId::Products).await,
            "refresh" => dash.refresh().await,
            "add" => match dash.state().active_tab {
                ServiceId::Users => {
                    let (name, email) = split_last(&rest);
                    dash.submit_user(UserForm { name, email }).await;
                }
                ServiceId::Products => {
                    let (name, price) = split_last(&rest);
                    dash.submit_product(ProductForm { name, price }).await;
                }
            },
            "del" => match rest.first() {
                Some(id) => {
                    let tab = dash.state().active_tab;
                    dash.request_delete(tab, id);
                }
                None => println!("usage: del <id>"),
            },
            "yes" | "y" => dash.confirm_delete().await,
            "no" | "n" => dash.cancel_delete(),
            _ => println!("unknown command; type 'help'"),
        }

        println!("{}", ui::render(dash.state()));
    }
    Ok(())
}

/// All-but-last tokens joined as the first field, last token as the second,
/// so names may contain spaces: `add Standing Desk 149.50`.
fn split_last(parts: &[&str]) -> (String, String) {
    match parts.split_last() {
        Some((last, init)) => (init.join(" "), (*last).to_string()),
        None => (String::new(), String::new()),
    }
}

fn print_help() {
    println!("commands:");
    println!("  users | products      switch tab");
    println!("  refresh               re-fetch both services");
    println!("  add <name> <email>    create a user (users tab)");
    println!("  add <name> <price>    create a product (products tab)");
    println!("  del <id>              ask to delete a record on the active tab");
    println!("  yes | no              confirm or cancel a pending delete");
    println!("  quit                  exit");
}
