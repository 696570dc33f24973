use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::domain::models::ReviewKind;
use crate::listing::{ReviewFilter, SortDirection, SortField, StatusFilter};

#[derive(Parser, Debug)]
#[command(author, version, about = "restaurant review manager dashboard")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show dashboard statistics, trends and category ratings
    Stats,
    /// List reviews with filtering, sorting and pagination
    Reviews(ReviewListArgs),
    /// Export reviews to a semicolon-delimited CSV file
    Export {
        /// Output file path
        #[arg(long, default_value = "reviews.csv")]
        out: PathBuf,
    },
    /// Publish a manager response to a review
    Respond {
        #[arg(long)]
        id: String,
        #[arg(long)]
        text: String,
    },
    /// Reclassify a review as in-restaurant or delivery
    UpdateType {
        #[arg(long)]
        id: String,
        #[arg(long = "type", value_enum)]
        kind: KindChoice,
    },
    /// Keep refreshing the dashboard and print stats on every update
    Watch {
        /// Refresh interval in seconds (optional, defaults to 60)
        #[arg(short, long)]
        interval: Option<u64>,
    },
    /// Store an auth token for subsequent commands
    Login {
        token: String,
    },
    /// Clear the stored auth token
    Logout,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ReviewListArgs {
    #[arg(long, value_enum, default_value_t = StatusArg::All)]
    pub status: StatusArg,
    /// Whole-star rating to match (1-5)
    #[arg(long)]
    pub rating: Option<u8>,
    #[arg(long = "type", value_enum, default_value_t = KindArg::All)]
    pub kind: KindArg,
    /// Substring search over author, text and restaurant
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long, value_enum, default_value_t = SortArg::Date)]
    pub sort: SortArg,
    #[arg(long, value_enum, default_value_t = DirectionArg::Desc)]
    pub direction: DirectionArg,
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    /// Page size (optional, defaults to the dashboard page size)
    #[arg(long)]
    pub page_size: Option<usize>,
}

impl ReviewListArgs {
    pub fn to_filter(&self) -> ReviewFilter {
        ReviewFilter {
            status: self.status.into(),
            rating: self.rating,
            kind: self.kind.into(),
            search: self.search.clone(),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusArg {
    #[default]
    All,
    Pending,
    Responded,
}

impl From<StatusArg> for StatusFilter {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::All => StatusFilter::All,
            StatusArg::Pending => StatusFilter::Pending,
            StatusArg::Responded => StatusFilter::Responded,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KindArg {
    #[default]
    All,
    #[value(name = "restaurant")]
    InRestaurant,
    Delivery,
}

impl From<KindArg> for Option<ReviewKind> {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::All => None,
            KindArg::InRestaurant => Some(ReviewKind::InRestaurant),
            KindArg::Delivery => Some(ReviewKind::Delivery),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindChoice {
    #[value(name = "restaurant")]
    InRestaurant,
    Delivery,
}

impl From<KindChoice> for ReviewKind {
    fn from(choice: KindChoice) -> Self {
        match choice {
            KindChoice::InRestaurant => ReviewKind::InRestaurant,
            KindChoice::Delivery => ReviewKind::Delivery,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortArg {
    #[default]
    Date,
    Rating,
    Author,
    Restaurant,
}

impl From<SortArg> for SortField {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Date => SortField::Date,
            SortArg::Rating => SortField::Rating,
            SortArg::Author => SortField::Author,
            SortArg::Restaurant => SortField::Restaurant,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DirectionArg {
    Asc,
    #[default]
    Desc,
}

impl From<DirectionArg> for SortDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Asc => SortDirection::Asc,
            DirectionArg::Desc => SortDirection::Desc,
        }
    }
}
