use anyhow::Result;
use clap::{Parser, Subcommand};
use fridgeplan::cli::{
    ingredients::IngredientsArgs, recipes::RecipesArgs, shopping::ShoppingArgs,
};
use fridgeplan::{Config, Dashboard};
use time::OffsetDateTime;

/// fridgeplan - fridge, recipes and weekly meal planning
#[derive(Parser)]
#[command(name = "fridgeplan")]
#[command(about = "Fridge inventory, recipe browsing and weekly meal planning", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Weekly plan, expiring ingredients and shopping progress
    Dashboard,
    /// Ingredients in the fridge
    Ingredients(IngredientsArgs),
    /// Recipe catalog
    Recipes(RecipesArgs),
    /// Shopping list
    Shopping(ShoppingArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    fridgeplan::observability::init_observability(
        "fridgeplan",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    tracing::info!(user.id = %config.user.id, "fridgeplan started");

    let now = OffsetDateTime::now_utc();
    let snapshot = fridgeplan::load_snapshot(&config, now)?;

    let output = match cli.command {
        Commands::Dashboard => {
            let dashboard =
                Dashboard::build(&snapshot, now, config.dashboard.expiring_window_days);
            fridgeplan::cli::dashboard::render(&dashboard, now)
        }
        Commands::Ingredients(args) => {
            fridgeplan::cli::ingredients::render(&snapshot.ingredients, &args, now)
        }
        Commands::Recipes(args) => fridgeplan::cli::recipes::render(&snapshot.catalog()?, &args),
        Commands::Shopping(args) => fridgeplan::cli::shopping::render(&snapshot.shopping_items, &args),
    };

    println!("{output}");

    Ok(())
}
