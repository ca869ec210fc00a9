pub mod context;
pub mod export;
pub mod portfolio;

pub use context::{AppContext, LanguageContext, Theme, ThemeContext};
pub use portfolio::{Portfolio, PortfolioSnapshot};
