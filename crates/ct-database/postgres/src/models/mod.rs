pub mod portfolio;

pub use portfolio::{NewPortfolioRow, PortfolioRow};
