/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;

mod commands;
mod render;
mod watch;

use commands::{
  alerts::AlertsCommand, coin::CoinArgs, dashboard::DashboardArgs, markets::MarketsArgs, news::NewsArgs,
  portfolio::PortfolioCommand, serve::ServeArgs, settings::SettingsCommand, watchlist::WatchlistCommand,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "ct")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// Run the API proxy server
  Serve(ServeArgs),
  /// Top coins and a portfolio overview
  Dashboard(DashboardArgs),
  /// Market listing with search, sort and pagination
  Markets(MarketsArgs),
  /// Details, price history and news for one coin
  Coin(CoinArgs),
  /// Simulated portfolio
  Portfolio(PortfolioCommand),
  /// Locally stored watchlist
  Watchlist(WatchlistCommand),
  /// Crypto news
  News(NewsArgs),
  /// Locally stored price alerts
  Alerts(AlertsCommand),
  /// Dashboard preferences
  Settings(SettingsCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  // Parse CLI arguments
  let cli = Cli::parse();

  // Initialize logging
  let log_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt().with_env_filter(log_level).with_writer(std::io::stderr).init();

  // Load configuration
  let config = ct_core::Config::from_env()?;

  // Execute command
  match cli.command {
    Commands::Serve(args) => commands::serve::execute(args, config).await?,
    Commands::Dashboard(args) => commands::dashboard::execute(args, config).await?,
    Commands::Markets(args) => commands::markets::execute(args, config).await?,
    Commands::Coin(args) => commands::coin::execute(args, config).await?,
    Commands::Portfolio(cmd) => commands::portfolio::execute(cmd, config).await?,
    Commands::Watchlist(cmd) => commands::watchlist::execute(cmd, config).await?,
    Commands::News(args) => commands::news::execute(args, config).await?,
    Commands::Alerts(cmd) => commands::alerts::execute(cmd, config).await?,
    Commands::Settings(cmd) => commands::settings::execute(cmd, config)?,
  }

  Ok(())
}
